use clap::Parser;
use std::path::PathBuf;

/// Hit Counter Service - a small HTTP API for named counters
#[derive(Parser, Debug, Clone)]
#[command(name = "tally", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "TALLY_CONFIG", default_value = "tally.toml")]
    pub config: PathBuf,

    /// Server host address
    #[arg(long, env = "TALLY_HOST")]
    pub host: Option<String>,

    /// Server port
    #[arg(long, env = "TALLY_PORT")]
    pub port: Option<u16>,
}
