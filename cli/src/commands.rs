pub mod catalog;
pub mod pool;
pub mod scan;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "iotscan")]
#[command(about = "A simulated IoT network security scanner.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce output; repeat to also hide the device list
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a simulated scan of the local network
    #[command(alias = "s")]
    Scan(ScanArgs),
    /// List the vulnerabilities the scanner knows about
    #[command(alias = "c")]
    Catalog,
    /// List the devices a scan can discover
    #[command(alias = "p")]
    Pool,
}

#[derive(Args)]
pub struct ScanArgs {
    /// Seed for a reproducible scan
    #[arg(long)]
    pub seed: Option<u64>,

    /// Total scan duration in milliseconds
    #[arg(long, default_value_t = 5000)]
    pub duration: u64,

    /// Time between scan steps in milliseconds
    #[arg(long, default_value_t = 250)]
    pub interval: u64,

    /// Export the results as CSV
    #[arg(long)]
    pub csv: bool,

    /// Export the results as a PDF report
    #[arg(long)]
    pub pdf: bool,

    /// Directory exported reports are written to
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Show the details of one device, by IP or MAC address
    #[arg(long)]
    pub select: Option<String>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
