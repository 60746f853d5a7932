//! Pulse command-line tool.
//!
//! Usage:
//!   pulse template [OUT]                        - Write the budget CSV template
//!   pulse merge <projects.json> <budgets.csv>   - Apply a budget CSV to projects
//!   pulse export <projects.json>                - Export project budgets as CSV
//!   pulse summary <projects.json>               - Print the portfolio summary
//!
//! Command output goes to stdout; logs and notifications go to stderr.

mod command;

use std::process::ExitCode;

use clap::Parser;
use pulse_core::notification::{NotificationBridge, Toast, ToastRegion, ToastVariant};
use pulse_shared::AppConfig;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use command::Cli;

fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pulse=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load()?;

    let bridge = NotificationBridge::new();
    let region = ToastRegion::with_config(&config.notifications);
    region.mount(&bridge);

    let result = cli.command.run(&config, &bridge);

    if let Err(err) = &result {
        bridge.notify_error(err);
    }

    for toast in region.unmount(&bridge) {
        render(&toast);
    }

    match result {
        Ok(()) => {
            info!("Done");
            Ok(ExitCode::SUCCESS)
        }
        Err(_) => Ok(ExitCode::FAILURE),
    }
}

/// Prints a toast to stderr.
fn render(toast: &Toast) {
    let marker = match toast.variant {
        ToastVariant::Default => "i",
        ToastVariant::Success => "+",
        ToastVariant::Destructive => "!",
    };
    let title = toast.title.as_deref().unwrap_or_default();
    match toast.description.as_deref() {
        Some(description) => eprintln!("[{marker}] {title}: {description}"),
        None => eprintln!("[{marker}] {title}"),
    }
}
