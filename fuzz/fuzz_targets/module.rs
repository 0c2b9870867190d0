#![no_main]

use libfuzzer_sys::fuzz_target;
use spirvscope::{DecoderConfig, Module, Schema};

fuzz_target!(|data: &[u8]| {
    if let Ok(module) = Module::from_mem(data) {
        let _ = module.to_text();
    }
    let _ = Module::from_mem_with(data, Schema::core(), DecoderConfig::lenient());
});
