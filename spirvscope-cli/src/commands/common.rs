use std::{fs::File, path::Path};

use anyhow::Context;
use memmap2::Mmap;
use spirvscope::{Module, Schema};

use crate::app::GlobalOptions;

/// Map `path` into memory and decode it with the policy chosen on the command line.
pub fn load_module(path: &Path, opts: &GlobalOptions) -> anyhow::Result<Module> {
    let file =
        File::open(path).with_context(|| format!("failed to open module: {}", path.display()))?;
    let size = file
        .metadata()
        .with_context(|| format!("failed to stat module: {}", path.display()))?
        .len();

    // zero-length files cannot be mapped on every platform
    let module = if size == 0 {
        Module::from_mem_with(&[], Schema::core(), opts.decoder_config())
    } else {
        let mmap = unsafe { Mmap::map(&file) }
            .with_context(|| format!("failed to map module: {}", path.display()))?;
        Module::from_mem_with(&mmap, Schema::core(), opts.decoder_config())
    };

    module.with_context(|| format!("failed to decode module: {}", path.display()))
}

pub fn file_display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().to_string(),
    )
}
