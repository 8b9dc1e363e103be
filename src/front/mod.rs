pub mod errors;
pub mod oauth;
pub mod server;

use crate::{config::AppConfig, webhook::instagram::client::MessagingClient};

pub struct AppState {
    pub config: AppConfig,
    pub http_client: reqwest::Client,
    pub messaging_client: MessagingClient,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            messaging_client: MessagingClient::new(&config),
            config,
        }
    }
}
