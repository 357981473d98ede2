use std::process::ExitCode;

use bookscrape::{config::Config, info_time, process::process_site};
use chrono::Local;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookscrape=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::parse();
    let start_time = Local::now();

    match process_site(&config).await {
        Ok(summary) => {
            info_time!(
                start_time,
                "Full program time: {} pages, {} items, {} skipped, written to {}",
                summary.pages,
                summary.items,
                summary.skipped,
                summary.output_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(kind = ?err.kind(), "{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
