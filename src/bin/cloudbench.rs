#[path = "cloudbench/app.rs"]
mod app;
#[path = "cloudbench/args.rs"]
mod args;
#[path = "cloudbench/logging.rs"]
mod logging;
#[path = "cloudbench/paths.rs"]
mod paths;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    app::run().await
}
