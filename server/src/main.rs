// Forbid unwrap() in production code to prevent panics on bad input.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
use std::net::SocketAddr;
use std::sync::Arc;

use movie_server::{
    AppState, auth::JwtConfig, config::ServerConfig, router, telemetry, upstream::TmdbClient,
};

#[tokio::main]
async fn main() {
    // Load configuration from environment variables
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            // No log file is known yet; report on the console only.
            if let Err(init_err) = telemetry::init(None) {
                eprintln!("Failed to initialize logging: {init_err}");
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            }
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = telemetry::init(config.log_file.as_deref()) {
        eprintln!("Failed to initialize logging: {e}");
        std::process::exit(1);
    }

    tracing::info!(
        "Loaded configuration: upstream={}, listen_port={}, log_file={:?}",
        config.upstream_base_url,
        config.listen_port,
        config.log_file
    );

    let jwt = match JwtConfig::new_hs256(&config.jwt_secret) {
        Ok(jwt) => jwt,
        Err(e) => {
            tracing::error!("Invalid JWT configuration: {e}");
            std::process::exit(1);
        }
    };

    let movies = match TmdbClient::from_config(&config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to create upstream client: {e}");
            std::process::exit(1);
        }
    };

    let state = AppState::new(Arc::new(movies), jwt, config.image_base_url.clone());
    let app = router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.listen_port));
    tracing::info!("listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("Failed to bind: {e}");
            std::process::exit(1);
        });

    axum::serve(listener, app).await.unwrap_or_else(|e| {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    });
}
