use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::{Commands, SchemaArgs, SchemaType};

/// Top-level CLI parser for the `zonal` binary.
#[derive(Debug, Parser)]
#[command(name = "zonal", version, about = "Zonal - opportunity-zone map data")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Zones API base address (overrides config and ZONAL_API_BASE)
    #[arg(long, global = true)]
    pub api_base: Option<String>,

    /// Append synthetic demo zones to every snapshot
    #[arg(long, global = true)]
    pub demo: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            api_base: self.api_base.clone(),
            demo: self.demo,
        }
    }
}
