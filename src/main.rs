mod backend;
mod config;
mod dataset;
mod error;
mod pipeline;
mod qa;

use anyhow::Result;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::Config::load()?;
    let backend = backend::create_backend(&config)?;

    let input = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();

    let result = pipeline::run(&config, backend.as_ref(), input, &mut stdout).await;
    match result {
        Ok(outcome) => {
            info!("Pipeline finished: {:?}", outcome);
            Ok(())
        }
        Err(e) => {
            pipeline::report_fatal(&e, &mut stdout);
            std::process::exit(1);
        }
    }
}
