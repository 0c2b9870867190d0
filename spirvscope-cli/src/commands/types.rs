use std::path::Path;

use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::load_module,
    output::{print_output, Align, TabWriter},
};

#[derive(Debug, Serialize)]
struct TypeEntry {
    id: u32,
    kind: String,
    width: u32,
    signed: bool,
}

#[derive(Debug, Serialize)]
struct TypesOutput {
    types: Vec<TypeEntry>,
    count: usize,
}

pub fn run(path: &Path, opts: &GlobalOptions) -> anyhow::Result<()> {
    let module = load_module(path, opts)?;

    let types: Vec<TypeEntry> = module
        .types()
        .iter()
        .map(|(id, ty)| TypeEntry {
            id,
            kind: ty.kind.to_string(),
            width: ty.width,
            signed: ty.signed,
        })
        .collect();

    let output = TypesOutput {
        count: types.len(),
        types,
    };

    print_output(&output, opts, |out| {
        let mut tw = TabWriter::new(&[
            ("Id", Align::Right),
            ("Kind", Align::Left),
            ("Width", Align::Right),
            ("Signed", Align::Left),
        ]);
        for entry in &out.types {
            let width = if entry.width == 0 {
                "-".to_string()
            } else {
                entry.width.to_string()
            };
            let signed = if entry.signed { "yes" } else { "no" };
            tw.row(vec![
                format!("%{}", entry.id),
                entry.kind.clone(),
                width,
                signed.to_string(),
            ]);
        }
        tw.print();
        println!("\n{} types", out.count);
    })
}
