use std::path::Path;

use serde::Serialize;
use spirvscope::Module;

use crate::{app::GlobalOptions, commands::common::load_module, output::print_output};

#[derive(Debug, Serialize)]
pub struct ModuleInfo {
    pub magic: String,
    pub version: String,
    pub generator: u32,
    pub bound: u32,
    pub schema: u32,
    pub instruction_count: usize,
    pub type_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unknown_opcodes: Option<usize>,
}

impl ModuleInfo {
    fn from_module(module: &Module) -> Self {
        let unknown = module
            .instructions()
            .iter()
            .filter(|instruction| instruction.schema().is_none())
            .count();

        ModuleInfo {
            magic: format!("0x{:08X}", module.header().magic),
            version: format!("{}.{}", module.version_major(), module.version_minor()),
            generator: module.generator(),
            bound: module.bound(),
            schema: module.schema(),
            instruction_count: module.instructions().len(),
            type_count: module.types().len(),
            unknown_opcodes: (unknown > 0).then_some(unknown),
        }
    }
}

pub fn run(path: &Path, opts: &GlobalOptions) -> anyhow::Result<()> {
    let module = load_module(path, opts)?;
    let info = ModuleInfo::from_module(&module);

    print_output(&info, opts, |info| {
        println!("Magic:           {}", info.magic);
        println!("Version:         {}", info.version);
        println!("Generator:       0x{:08X}", info.generator);
        println!("Bound:           {}", info.bound);
        println!("Schema:          {}", info.schema);
        println!("Instructions:    {}", info.instruction_count);
        println!("Types:           {}", info.type_count);
        if let Some(unknown) = info.unknown_opcodes {
            println!("Unknown opcodes: {unknown}");
        }
    })
}
