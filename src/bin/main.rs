use thor::*;

use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match cli::configure(std::env::args()) {
        Ok(config) => config,
        Err(e) => {
            match &e {
                ThorError::Usage(usage) => {
                    let _ = usage.print();
                }
                _ => eprintln!("error: {e}"),
            }
            process::exit(e.exit_code());
        }
    };
    tracing::debug!(?config, "configured");

    if let Err(e) = runner::execute(&config, std::io::stdout()).await {
        eprintln!("error: {e}");
        process::exit(e.exit_code());
    }
}
