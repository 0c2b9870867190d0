use std::path::PathBuf;

use clap::{Parser, Subcommand};
use spirvscope::DecoderConfig;

/// spirvscope - SPIR-V module inspection and disassembly
#[derive(Debug, Parser)]
#[command(name = "spirvscope", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Reject conflicting type redeclarations and trailing instruction words.
    #[arg(long, global = true, conflicts_with = "lenient")]
    pub strict: bool,

    /// Keep instructions with unknown opcodes as raw words.
    #[arg(long, global = true)]
    pub lenient: bool,
}

impl GlobalOptions {
    /// The decoding policy selected on the command line.
    pub fn decoder_config(&self) -> DecoderConfig {
        if self.strict {
            DecoderConfig::strict()
        } else if self.lenient {
            DecoderConfig::lenient()
        } else {
            DecoderConfig::default()
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Disassemble one or more modules.
    Disasm {
        /// Paths to SPIR-V binaries.
        #[arg(value_name = "FILE", required = true)]
        paths: Vec<PathBuf>,
    },

    /// Display the module header, instruction count and type count.
    Info {
        /// Path to a SPIR-V binary.
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },

    /// List the types declared by a module.
    Types {
        /// Path to a SPIR-V binary.
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },

    /// List the opcodes of the embedded grammar and their operands.
    Opcodes,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn policy_flags() {
        let cli = Cli::parse_from(["spirvscope", "--strict", "info", "a.spv"]);
        assert_eq!(cli.global.decoder_config(), DecoderConfig::strict());

        let cli = Cli::parse_from(["spirvscope", "disasm", "--lenient", "a.spv", "b.spv"]);
        assert_eq!(cli.global.decoder_config(), DecoderConfig::lenient());
        assert!(matches!(cli.command, Command::Disasm { ref paths } if paths.len() == 2));

        assert!(Cli::try_parse_from(["spirvscope", "--strict", "--lenient", "opcodes"]).is_err());
    }
}
