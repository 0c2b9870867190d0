//! Benchmarks for module decoding and disassembly.
//!
//! A synthetic compute-style module is built from raw words:
//! - scalar, vector and pointer type declarations
//! - 32 and 64-bit constants, which resolve their width through the type registry
//! - a function body of arithmetic repeated to a configurable length

extern crate spirvscope;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use spirvscope::{disassembler::Decoder, DecoderConfig, Module, Parser, Schema};
use std::hint::black_box;

fn op(words: &mut Vec<u32>, opcode: u16, operands: &[u32]) {
    words.push(((operands.len() as u32 + 1) << 16) | u32::from(opcode));
    words.extend_from_slice(operands);
}

/// Instruction words (no header) of a module with `body` arithmetic instructions.
fn instructions(body: u32) -> Vec<u32> {
    let mut words = Vec::new();
    op(&mut words, 17, &[1]); // OpCapability Shader
    op(&mut words, 14, &[0, 1]); // OpMemoryModel Logical GLSL450
    op(&mut words, 19, &[1]); // %1 = OpTypeVoid
    op(&mut words, 33, &[2, 1]); // %2 = OpTypeFunction %1
    op(&mut words, 21, &[3, 32, 1]); // %3 = OpTypeInt 32 1
    op(&mut words, 21, &[4, 64, 0]); // %4 = OpTypeInt 64 0
    op(&mut words, 22, &[5, 32]); // %5 = OpTypeFloat 32
    op(&mut words, 23, &[6, 5, 4]); // %6 = OpTypeVector %5 4
    op(&mut words, 32, &[7, 7, 3]); // %7 = OpTypePointer Function %3
    op(&mut words, 43, &[3, 8, 0xFFFF_FFFF]); // %8 = OpConstant %3 -1
    op(&mut words, 43, &[4, 9, 0x0000_0001, 0x0000_0001]); // %9 = OpConstant %4 4294967297
    op(&mut words, 43, &[5, 10, 1.5_f32.to_bits()]); // %10 = OpConstant %5 1.5
    op(&mut words, 54, &[1, 11, 0, 2]); // %11 = OpFunction %1 None %2
    op(&mut words, 248, &[12]); // %12 = OpLabel
    for index in 0..body {
        op(&mut words, 128, &[3, 100 + index, 8, 8]); // OpIAdd
    }
    op(&mut words, 253, &[]); // OpReturn
    op(&mut words, 56, &[]); // OpFunctionEnd
    words
}

fn module_bytes(body: u32) -> Vec<u8> {
    let mut words = vec![0x0723_0203, 0x0001_0000, 0, 100 + body, 0];
    words.extend(instructions(body));
    words.iter().flat_map(|word| word.to_le_bytes()).collect()
}

fn bench_from_mem(c: &mut Criterion) {
    let mut group = c.benchmark_group("module_from_mem");
    for body in [16_u32, 256, 4096] {
        let data = module_bytes(body);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(body), &data, |b, data| {
            b.iter(|| {
                let module = Module::from_mem(black_box(data)).unwrap();
                black_box(module)
            });
        });
    }
    group.finish();
}

fn bench_to_text(c: &mut Criterion) {
    let module = Module::from_mem(&module_bytes(256)).unwrap();

    c.bench_function("module_to_text_256", |b| {
        b.iter(|| black_box(black_box(&module).to_text().unwrap()));
    });
}

fn bench_decode_stream(c: &mut Criterion) {
    let data: Vec<u8> = instructions(256)
        .iter()
        .flat_map(|word| word.to_le_bytes())
        .collect();

    c.bench_function("decoder_stream_256", |b| {
        b.iter(|| {
            let mut parser = Parser::new(black_box(&data));
            let decoded = Decoder::new(Schema::core(), DecoderConfig::default())
                .decode_stream(&mut parser)
                .unwrap();
            black_box(decoded)
        });
    });
}

criterion_group!(benches, bench_from_mem, bench_to_text, bench_decode_stream);
criterion_main!(benches);
