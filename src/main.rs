mod cli;
mod config;
mod error;
mod mapping;
mod migration;
mod model;
mod providers;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::Cli;
use migration::observer::TracingObserver;
use providers::github::GhCliGateway;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Load config
    let mut config = match &cli.config {
        Some(path) => config::load_config_from(path)?,
        None => config::load_config()?,
    };
    cli.apply_overrides(&mut config);

    let gateway = GhCliGateway::new(&config);
    let params = cli.params();
    let report =
        match migration::run_migration(&gateway, &TracingObserver, cli::roadmap(&config), &params)
            .await
        {
            Ok(report) => report,
            Err(err) => {
                tracing::error!(kind = err.code(), "Migration aborted:\n{err}");
                std::process::exit(1);
            }
        };

    println!(
        "Migrated {}, skipped {} drafts, {} failed, {} field edits failed",
        report.migrated, report.skipped, report.failed, report.edit_failures
    );
    if report.dry_run {
        println!("Dry run: source items were left in project {}", params.source_project);
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "roadmap_migrate=debug"
    } else {
        "roadmap_migrate=info"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
