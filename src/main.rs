use anyhow::Result;
use clap::Parser;
use statprobe::*;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .init();

    let args = cli::Cli::parse();
    match args.command {
        cli::Commands::Collect(args) => {
            let config = config::RunConfig::from_args(&args)?;
            let delta = pipeline::run_collect(&config).await?;
            println!("{}", serde_json::to_string_pretty(&delta)?);
        }
        cli::Commands::Score(args) => {
            let config = config::ScoreConfig::from_args(&args)?;
            let health = pipeline::run_score(&config).await?;
            println!("Health is {health:.4}");
        }
    }

    Ok(())
}
