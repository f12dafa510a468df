//! Stockwatch CLI
//!
//! Thin wrapper around stockwatch-core functions for command-line usage.
//!
//! ## Usage
//!
//! ```bash
//! # Show a part's threshold and current stock
//! stockwatch show 42
//!
//! # Set a part's threshold (invalid input coerces to 0)
//! stockwatch set 42 10
//!
//! # Print the low stock report once
//! stockwatch low-stock
//!
//! # Keep refreshing on the dashboard cadence
//! stockwatch low-stock --watch
//!
//! # Export low-stock candidates as CSV
//! stockwatch export
//! ```

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use stockwatch_core::{
    format_threshold, is_low_stock, load_panel, refresh_low_stock, save_threshold, Credentials,
    DashboardPoller, DashboardState, HttpGateway, InventoryApi, PanelState, PartId,
    RestInventoryApi, SaveOutcome, ThresholdVariant,
};

/// Stockwatch - low stock thresholds for inventory parts
#[derive(Parser)]
#[command(name = "stockwatch")]
#[command(version = "0.1.0")]
#[command(about = "Stockwatch - low stock thresholds for inventory parts")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Base URL of the inventory server
    #[arg(
        long,
        global = true,
        env = "STOCKWATCH_SERVER",
        default_value = "http://localhost:8000/"
    )]
    server: String,

    /// API token for the Authorization header
    #[arg(long, global = true, env = "STOCKWATCH_TOKEN")]
    token: Option<String>,

    /// Anti-forgery token attached to mutating requests
    #[arg(long, global = true, env = "STOCKWATCH_CSRF_TOKEN")]
    csrf_token: Option<String>,

    /// Threshold storage variant: dedicated | part-field
    #[arg(
        long,
        global = true,
        env = "STOCKWATCH_VARIANT",
        default_value_t = ThresholdVariant::Dedicated
    )]
    variant: ThresholdVariant,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a part's threshold and current stock
    Show {
        /// Part ID
        part_id: i64,
    },

    /// Set a part's threshold
    Set {
        /// Part ID
        part_id: i64,
        /// New threshold value (invalid input coerces to 0)
        value: String,
    },

    /// Print the low stock report
    LowStock {
        /// Keep refreshing on the dashboard cadence
        #[arg(long)]
        watch: bool,

        /// Seconds between refreshes in watch mode
        #[arg(long, default_value_t = 300)]
        interval: u64,
    },

    /// Export low-stock candidates as CSV
    Export,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    tracing::info!(server = %cli.server, variant = %cli.variant, "Connecting to inventory server");

    let credentials = Credentials {
        csrf_token: cli.csrf_token.clone(),
        auth_token: cli.token.clone(),
    };
    let gateway = HttpGateway::new(&cli.server, credentials)?;
    let api: Arc<dyn InventoryApi> = Arc::new(RestInventoryApi::new(gateway, cli.variant));

    match cli.command {
        Commands::Show { part_id } => show_part(api.as_ref(), PartId(part_id)).await,
        Commands::Set { part_id, value } => {
            set_part_threshold(api.as_ref(), PartId(part_id), &value).await
        }
        Commands::LowStock { watch, interval } => {
            if watch {
                watch_low_stock(api, Duration::from_secs(interval)).await
            } else {
                print_report_once(api.as_ref()).await
            }
        }
        Commands::Export => export_csv(api.as_ref()).await,
    }
}

async fn show_part(api: &dyn InventoryApi, part: PartId) -> Result<()> {
    match load_panel(api, part).await {
        PanelState::Ready { part, threshold } => {
            let status = if is_low_stock(part.available_stock, threshold) {
                "Low Stock"
            } else {
                "Stock OK"
            };

            println!("Part: {} (id {})", part.name, part.id);
            if let Some(ipn) = &part.ipn {
                println!("IPN: {ipn}");
            }
            println!("Available stock: {}", part.available_stock);
            println!("Stock threshold: {}", format_threshold(threshold));
            println!("Status: {status}");
            Ok(())
        }
        PanelState::Error { message } => anyhow::bail!(message),
        state => anyhow::bail!("unexpected panel state: {state:?}"),
    }
}

async fn set_part_threshold(api: &dyn InventoryApi, part: PartId, raw: &str) -> Result<()> {
    match save_threshold(api, part, raw).await {
        SaveOutcome::Saved { threshold } => {
            println!(
                "Stock threshold updated successfully: {}",
                format_threshold(threshold)
            );
            Ok(())
        }
        SaveOutcome::Failed { message } => anyhow::bail!(message),
    }
}

async fn print_report_once(api: &dyn InventoryApi) -> Result<()> {
    match refresh_low_stock(api).await {
        DashboardState::Error { message } => anyhow::bail!(message),
        state => {
            print_report(&state);
            Ok(())
        }
    }
}

async fn watch_low_stock(api: Arc<dyn InventoryApi>, interval: Duration) -> Result<()> {
    let poller = DashboardPoller::start(api, interval, |state| {
        println!("--- {} ---", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
        print_report(&state);
    });

    // Poll until interrupted; the timer dies with the poller.
    tokio::signal::ctrl_c().await?;
    poller.stop();
    Ok(())
}

async fn export_csv(api: &dyn InventoryApi) -> Result<()> {
    let candidates = api.list_candidates().await?;

    println!("id,name,ipn,available_stock,minimum_stock");
    for part in &candidates {
        println!(
            "{},{},{},{},{}",
            part.id,
            csv_field(&part.name),
            csv_field(part.ipn.as_deref().unwrap_or("")),
            part.available_stock,
            part.minimum_stock
        );
    }
    Ok(())
}

fn print_report(state: &DashboardState) {
    match state {
        DashboardState::Loading => {}
        DashboardState::Error { message } => eprintln!("{message}"),
        DashboardState::Ready { report } => {
            println!("Low Stock Items ({})", report.total());
            if report.is_empty() {
                println!("  No items with low stock");
                return;
            }
            for entry in &report.visible {
                println!(
                    "  {:<32} {:>8} / {:<8} [{:>3.0}%]  {}",
                    entry.name,
                    entry.available_stock,
                    entry.minimum_stock,
                    entry.stock_percent(),
                    entry.ipn.as_deref().unwrap_or("No IPN"),
                );
            }
            if report.overflow > 0 {
                println!("  ... and {} more items", report.overflow);
            }
        }
    }
}

/// Quote a CSV field only when it needs it.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_field_quoting() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
