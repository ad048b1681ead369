use anyhow::{Context, Result};
use clap::Parser;
use hearth_cli::cli::{Cli, Commands};
use hearth_cli::{gallery, logging};
use hearth_config::ServerConfig;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ServerConfig::load(cli.config.as_deref())
        .await
        .context("Failed to load configuration")?;
    if let Some(host) = cli.host.clone() {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    config.validate().context("Invalid configuration")?;

    let rust_log = std::env::var("RUST_LOG").ok();
    logging::init(logging::env_filter(
        cli.level_override(),
        rust_log.as_deref(),
        &config.log_filter,
    ));

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        Commands::Serve => {
            let today = chrono::Local::now().date_naive();
            let app = hearth_web::build_app(&config, gallery(&config.ui, today));
            info!(prefix = %config.ui.route_prefix, "Gallery mounted");
            hearth_web::start_server(&config, app).await?;
        }
    }

    Ok(())
}
