use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Run coinpaprika bot", long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long)] // default handled in main.rs
    pub config: Option<PathBuf>,

    /// Enable debugging messages
    #[arg(short, long)]
    pub debug: bool,

    /// Telegram API token
    #[arg(short, long)]
    pub token: Option<String>,

    /// Metrics port, endpoint: /metrics
    #[arg(short, long)]
    pub metrics: Option<u16>,
}
