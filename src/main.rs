//! # Insta Relay
//!
//! Webhook receiver and outbound message sender for the Instagram Graph API.
//! Verifies webhook subscriptions, logs inbound events, relays OAuth token
//! exchanges, and can push text and media messages to a configured pool of
//! recipients.

pub mod config;
pub mod consts;
pub mod front;
pub mod logger;
pub mod webhook;

use envconfig::Envconfig;
use log::info;
use ntex::web;

#[ntex::main]
async fn main() -> anyhow::Result<()> {
    // Every config field has a default, so an incomplete environment never
    // stops the process; the affected handlers degrade instead.
    let app_config = config::AppConfig::init_from_env()?;

    logger::setup_simple_logger()?;

    configure_and_run_server(app_config).await
}

/// Configures and starts the web server
async fn configure_and_run_server(app_config: config::AppConfig) -> anyhow::Result<()> {
    let server_addr = ("0.0.0.0", app_config.web_server_port);
    info!(
        "Webhook server listening on port {}",
        app_config.web_server_port
    );

    web::server(move || {
        web::App::new()
            .wrap(web::middleware::Logger::default())
            .wrap(web::middleware::Compress::default())
            .state(front::AppState::new(app_config.clone()))
            .configure(webhook::routes::instagram)
            .service((
                front::oauth::instagram_callback,
                front::oauth::get_access_token,
                front::oauth::get_long_lived_access_token,
                webhook::instagram::deauthorize,
                webhook::instagram::data_deletion_request,
            ))
            .default_service(web::route().to(front::server::serve_not_found))
    })
    .bind(server_addr)?
    .run()
    .await
    .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
