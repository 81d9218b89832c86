use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pipebench::backend::{Executor, RandomPayload, SimExecutor};
use pipebench::scheduler::{BenchConfig, PipelineScheduler};

/// Bytes per payload, sized like one 224x224 three-channel frame.
const PAYLOAD_BYTES: usize = 224 * 224 * 3;

#[derive(Parser)]
#[command(name = "pipebench")]
#[command(version)]
#[command(about = "Pipelined throughput benchmark for asynchronous execution backends")]
struct Cli {
    /// Workload source to load onto the target
    workload: PathBuf,

    /// Target backend selector: sim[:latency_ms]
    target: String,

    /// Pipeline depth (number of pooled requests)
    depth: usize,

    /// Time budget in seconds
    #[arg(default_value_t = BenchConfig::DEFAULT_BUDGET.as_secs())]
    seconds: u64,
}

fn build_target(target: &str) -> anyhow::Result<SimExecutor> {
    match target.split_once(':') {
        None if target == "sim" => Ok(SimExecutor::default()),
        Some(("sim", latency)) => {
            let ms: u64 = latency
                .parse()
                .with_context(|| format!("invalid sim latency '{}'", latency))?;
            Ok(SimExecutor::new(Duration::from_millis(ms)))
        }
        _ => anyhow::bail!("unknown target '{}', expected sim[:latency_ms]", target),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let executor = build_target(&cli.target)?;
    let source = fs::read(&cli.workload)
        .with_context(|| format!("failed to read workload source {}", cli.workload.display()))?;
    executor
        .load_workload(&source)
        .await
        .context("failed to load workload onto the target")?;
    info!(
        workload = %cli.workload.display(),
        target = %cli.target,
        "workload loaded"
    );

    let config = BenchConfig::new(cli.depth, Duration::from_secs(cli.seconds))?;
    let generator = RandomPayload::new(PAYLOAD_BYTES);
    let scheduler = PipelineScheduler::new(executor, generator, config).await?;

    println!("Exec-time = {} sec.", cli.seconds);
    println!("Starting...");
    let summary = scheduler.run().await?;
    println!("Result fps: {}", summary.throughput());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn missing_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["pipebench"]).is_err());
        assert!(Cli::try_parse_from(["pipebench", "model.xml", "sim"]).is_err());
    }

    #[test]
    fn seconds_defaults_to_120() {
        let cli = Cli::try_parse_from(["pipebench", "model.xml", "sim", "4"]).unwrap();
        assert_eq!(cli.seconds, 120);
        assert_eq!(cli.depth, 4);
    }

    #[test]
    fn sim_target_parses_with_and_without_latency() {
        assert!(build_target("sim").is_ok());
        assert!(build_target("sim:5").is_ok());
        assert!(build_target("sim:abc").is_err());
        assert!(build_target("gpu").is_err());
    }
}
