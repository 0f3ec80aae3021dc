use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tsugi")]
#[command(version)]
#[command(about = "Interactive shell for tracking watched media", long_about = None)]
pub struct Cli {
    /// Show engine debug messages
    #[arg(short, long)]
    pub debug: bool,

    /// Path to the list file (overrides the configured one)
    #[arg(long, value_name = "FILE")]
    pub data: Option<PathBuf>,
}
