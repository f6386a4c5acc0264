use anyhow::{Context, Result, anyhow};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, filter::LevelFilter};
use travel_relay::{
    config::{self, Config},
    llm::gemini::API_KEY_ENV_VAR,
    server,
};

/// `RUST_LOG` wins over `server.logs.level`; either must name a known level.
fn resolve_log_level(config: &Config) -> Result<String> {
    let level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());

    level.parse::<LevelFilter>().map_err(|_| {
        anyhow!(
            "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
            level
        )
    })?;

    Ok(level)
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .json()
        .init();
}

fn log_relay_config(config: &Config, log_level: &str) {
    info!(
        provider = ?config.llm.provider,
        model = %config.llm.model,
        base_url = config.llm.base_url.as_deref().unwrap_or("default"),
        listen = %format!("{}:{}", config.server.host, config.server.port),
        static_dir = %config.server.static_dir,
        log_level,
        "Starting travel relay"
    );

    if config.llm.api_key.is_empty() {
        warn!(
            "No API key configured; set {} or llm.api_key. Every planning request will fail upstream.",
            API_KEY_ENV_VAR
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logging is configured from the loaded config, so failures here go to stderr.
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let log_level = match resolve_log_level(&config) {
        Ok(level) => level,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    init_tracing(&log_level);
    log_relay_config(&config, &log_level);

    server::run(config).await.context("Travel relay server failed")
}
