pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "registrar")]
#[command(about = "Replay course enrollment requests against a course catalog")]
pub struct CliConfig {
    /// Path to the TOML registration script
    #[arg(short, long, default_value = "registration.toml")]
    pub config: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Validate the script and print the catalog without applying requests
    #[arg(long)]
    pub dry_run: bool,

    /// Print the run summary as JSON and log in JSON format
    #[arg(long)]
    pub json: bool,
}
