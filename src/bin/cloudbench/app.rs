use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use cloudbench::config::{load_config, BenchConfig};
use cloudbench::driver::BenchmarkDriver;
use cloudbench::probe::HttpProber;
use cloudbench::registry::EndpointRegistry;
use cloudbench::report::{self, Comparison};
use cloudbench::server::{self, ServerState};
use tokio::net::TcpListener;

use crate::args::{CliArgs, Command, ReportArgs, RunArgs, ServeArgs};
use crate::logging::init_logging;
use crate::paths::resolve_config_path;

pub async fn run() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let config_path = resolve_config_path(args.config.clone())?;
    let loaded = load_config(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    let _logger = init_logging(&loaded.config.logging)?;
    if !loaded.config_exists {
        log::debug!("No config at {}, using defaults", config_path.display());
    }

    match args.command_or_default() {
        Command::Run(run) => run_benchmark(&loaded.config, run).await,
        Command::Report(report) => show_report(&loaded.config, report),
        Command::Serve(serve) => run_server(serve).await,
    }
}

async fn run_benchmark(config: &BenchConfig, args: RunArgs) -> anyhow::Result<()> {
    let rounds = args.rounds.unwrap_or(config.benchmark.rounds);
    let timeout = Duration::from_secs(args.timeout.unwrap_or(config.benchmark.timeout_seconds));
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(&config.benchmark.output));
    let text = args.text.unwrap_or_else(|| config.benchmark.text.clone());

    let registry = EndpointRegistry::from_config(config)?;
    let driver = BenchmarkDriver::new(HttpProber::new(timeout)?, text);
    report::prepare_output(&output)
        .with_context(|| format!("preparing {}", output.display()))?;

    println!("Starting benchmarks across {} providers...", registry.len());
    let run = driver.run(registry.providers(), rounds).await?;
    report::persist(&run, &output)?;

    let summaries = report::summarize(&run);
    println!("\nBenchmark Results Summary:");
    print!("{}", report::render_summary(&summaries));
    println!("\nResults saved to {}", output.display());
    Ok(())
}

fn show_report(config: &BenchConfig, args: ReportArgs) -> anyhow::Result<()> {
    let input = args
        .input
        .unwrap_or_else(|| PathBuf::from(&config.benchmark.output));
    let run = report::load(&input)?;
    if run.is_empty() {
        println!(
            "No benchmark data in {}. Run `cloudbench run` first.",
            input.display()
        );
        return Ok(());
    }

    let registry = EndpointRegistry::from_config(config)?;
    let summaries = report::summarize(&run);
    let comparison = Comparison::build(&summaries, &registry);
    print!("{}", report::render_comparison(&comparison));
    println!();
    print!("{}", report::render_summary(&summaries));
    Ok(())
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    let state = match args.provider {
        Some(provider) => ServerState::new(provider),
        None => ServerState::from_env(),
    }
    .with_delay_ms(args.min_delay_ms, args.max_delay_ms);
    let listener = TcpListener::bind(&args.bind)
        .await
        .with_context(|| format!("binding {}", args.bind))?;
    server::serve(listener, state).await?;
    Ok(())
}
