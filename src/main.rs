/// Main application entry point
mod clients;
mod config;
mod controller;
mod domain;
mod errors;
mod links;
mod render;
#[cfg(test)]
mod testutil;

use crate::clients::SpaceXClient;
use crate::config::AppConfig;
use crate::controller::LaunchListController;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    // Load configuration
    let config = AppConfig::from_env()?;
    info!("Configuration loaded successfully");

    let client = SpaceXClient::new(
        config.spacex_api_url.clone(),
        Duration::from_secs(config.request_timeout_secs),
    )?;
    info!("Querying launches from {}", client.base_url());

    let mut controller = LaunchListController::new(client, config.page_limit);
    controller.initialize().await;

    print!("{}", render::render_table(&controller));
    print_usage();

    // One command per line; each query is awaited before the next command is
    // read, so at most one request is ever in flight.
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("a"), _) => controller.sort_ascending().await,
            (Some("d"), _) => controller.sort_descending().await,
            (Some("n"), _) => controller.next_page().await,
            (Some("p"), _) => controller.previous_page().await,
            (Some("l"), Some(id)) => controller.toggle_links(id),
            (Some("r"), Some(id)) => controller.toggle_row(id),
            (Some("q"), _) => break,
            (None, _) => continue,
            _ => {
                print_usage();
                continue;
            }
        }
        print!("{}", render::render_table(&controller));
    }

    Ok(())
}

fn print_usage() {
    println!(
        "commands: a=oldest first  d=newest first  n=next page  p=previous page  \
         l <id>=toggle links  r <id>=toggle highlight  q=quit"
    );
}
