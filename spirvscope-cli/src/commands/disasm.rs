use std::path::{Path, PathBuf};

use anyhow::Context;
use rayon::prelude::*;
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::{file_display_name, load_module},
    output::print_output,
};

#[derive(Debug, Serialize)]
struct Listing {
    file: String,
    text: String,
}

fn disassemble(path: &Path, opts: &GlobalOptions) -> anyhow::Result<Listing> {
    let module = load_module(path, opts)?;
    let text = module
        .to_text()
        .with_context(|| format!("failed to render module: {}", path.display()))?;

    Ok(Listing {
        file: file_display_name(path),
        text,
    })
}

pub fn run(paths: &[PathBuf], opts: &GlobalOptions) -> anyhow::Result<()> {
    // modules decode independently; collect keeps command-line order
    let listings = paths
        .par_iter()
        .map(|path| disassemble(path, opts))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let multiple = listings.len() > 1;
    print_output(&listings, opts, |listings| {
        for (index, listing) in listings.iter().enumerate() {
            if multiple {
                if index > 0 {
                    println!();
                }
                println!("; {}", listing.file);
            }
            print!("{}", listing.text);
        }
    })
}
