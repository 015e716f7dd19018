// CLI surface (clap derive)

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "statprobe")]
#[command(about = "One-shot host counter sampler")]
#[command(version = crate::version::VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sample counters once, persist deltas, forward to the collector
    Collect(CollectArgs),

    /// Sample counters once and print a weighted health score
    Score(ScoreArgs),
}

#[derive(Args, Debug)]
pub struct CollectArgs {
    /// Do not collect load information
    #[arg(long)]
    pub disable_load: bool,

    /// Do not collect disk IO information
    #[arg(long)]
    pub disable_io: bool,

    /// Do not collect network information
    #[arg(long)]
    pub disable_network: bool,

    /// Directory holding the statprobe.db store file
    #[arg(long, default_value = ".")]
    pub store_path: PathBuf,

    /// Host of the stats collector service
    #[arg(long, default_value = "127.0.0.1")]
    pub collector_host: String,

    /// Port the collector is listening on
    #[arg(long, default_value_t = 41825)]
    pub collector_port: u16,
}

#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Weight the score for a CPU-bound workload
    #[arg(long)]
    pub cpu: bool,

    /// Weight the score for a storage-bound workload
    #[arg(long)]
    pub storage: bool,

    /// Weight the score for a network-bound workload
    #[arg(long)]
    pub network: bool,

    /// Directory holding the statprobe.db store file
    #[arg(long, default_value = ".")]
    pub store_path: PathBuf,
}
