use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "cloudbench",
    version,
    about = "Benchmark one inference service across several cloud ML platforms"
)]
pub struct CliArgs {
    /// Config file (default: ~/.config/cloudbench/config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Probe every provider and write the result table (default)
    Run(RunArgs),
    /// Summarize and compare a previously written result table
    Report(ReportArgs),
    /// Run the mock prediction service
    Serve(ServeArgs),
}

#[derive(Args, Debug, Default)]
pub struct RunArgs {
    #[arg(long, short = 'n')]
    pub rounds: Option<usize>,
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,
    /// Text sent to /predict
    #[arg(long)]
    pub text: Option<String>,
}

#[derive(Args, Debug)]
pub struct ReportArgs {
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    #[arg(long, default_value = "0.0.0.0:8080")]
    pub bind: String,
    /// Label returned in responses (default: $CLOUD_PROVIDER)
    #[arg(long)]
    pub provider: Option<String>,
    #[arg(long, default_value_t = 50)]
    pub min_delay_ms: u64,
    #[arg(long, default_value_t = 150)]
    pub max_delay_ms: u64,
}

impl CliArgs {
    pub fn command_or_default(self) -> Command {
        self.command
            .unwrap_or_else(|| Command::Run(RunArgs::default()))
    }
}
