#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::{Arc, OnceLock};

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use stockwatch_core::{Credentials, HttpGateway, RestInventoryApi, ThresholdVariant};

use crate::context::SharedClient;

/// Global inventory client, built from the command line before the UI launches
static CLIENT: OnceLock<SharedClient> = OnceLock::new();

/// Get the shared inventory client.
pub fn client() -> SharedClient {
    CLIENT
        .get()
        .cloned()
        .expect("client is initialized in main before launch")
}

/// Stockwatch - low stock thresholds for inventory parts
#[derive(Parser, Debug)]
#[command(name = "stockwatch-desktop")]
#[command(about = "Stockwatch - low stock thresholds for inventory parts")]
struct Args {
    /// Base URL of the inventory server
    #[arg(long, env = "STOCKWATCH_SERVER", default_value = "http://localhost:8000/")]
    server: String,

    /// API token for the Authorization header
    #[arg(long, env = "STOCKWATCH_TOKEN")]
    token: Option<String>,

    /// Anti-forgery token attached to mutating requests
    #[arg(long, env = "STOCKWATCH_CSRF_TOKEN")]
    csrf_token: Option<String>,

    /// Threshold storage variant: dedicated | part-field
    #[arg(long, env = "STOCKWATCH_VARIANT", default_value_t = ThresholdVariant::Dedicated)]
    variant: ThresholdVariant,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let credentials = Credentials {
        csrf_token: args.csrf_token,
        auth_token: args.token,
    };
    let gateway = match HttpGateway::new(&args.server, credentials) {
        Ok(gateway) => gateway,
        Err(e) => {
            tracing::error!("Invalid server configuration: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        server = %gateway.base_url(),
        variant = %args.variant,
        "Starting stockwatch"
    );

    let client: SharedClient = Arc::new(RestInventoryApi::new(gateway, args.variant));
    let _ = CLIENT.set(client);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Stockwatch")
            .with_inner_size(dioxus::desktop::LogicalSize::new(700.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
