//! # Instagram Messaging API Client
//!
//! Client for sending outbound messages through the Graph API messages
//! endpoint. Every send targets a uniformly random recipient from the
//! configured pool; there are no retries, a failed send is terminal.

use super::outgoing_schemas::{
    AttachmentType, OutgoingAttachmentMessage, OutgoingTextMessage, SendMessageResponse,
};
use crate::{config::AppConfig, consts};
use anyhow::{Context, Result};
use rand::seq::SliceRandom;

/// Graph API client for sending messages
pub struct MessagingClient {
    /// HTTP client for making API requests
    client: reqwest::Client,
    /// Graph API endpoint for sending messages
    endpoint: String,
    /// Authentication token
    auth_token: String,
    /// Pool of recipient IGSIDs to pick from
    recipient_pool: Vec<String>,
}

impl MessagingClient {
    /// Creates a new messaging client from the application configuration
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.graph_messages_endpoint.clone(),
            auth_token: config.access_token.clone(),
            recipient_pool: config.recipient_pool(),
        }
    }

    /// Picks a uniformly random recipient from the configured pool.
    /// Fails explicitly when the pool is empty.
    fn random_recipient(&self) -> Result<String> {
        self.recipient_pool
            .choose(&mut rand::thread_rng())
            .cloned()
            .context("recipient pool is empty, set RECIPIENT_IDS")
    }

    /// Sends a text message to a random recipient
    pub async fn send_text_message(&self, text: String) -> Result<SendMessageResponse> {
        let message = OutgoingTextMessage::new(self.random_recipient()?, text);
        self.send_message(&message).await
    }

    /// Sends the sample image attachment to a random recipient
    pub async fn send_image_message(&self) -> Result<SendMessageResponse> {
        self.send_media_message(AttachmentType::Image, consts::SAMPLE_IMAGE_URL)
            .await
    }

    /// Sends the sample audio attachment to a random recipient
    pub async fn send_audio_message(&self) -> Result<SendMessageResponse> {
        self.send_media_message(AttachmentType::Audio, consts::SAMPLE_AUDIO_URL)
            .await
    }

    /// Sends the sample video attachment to a random recipient
    pub async fn send_video_message(&self) -> Result<SendMessageResponse> {
        self.send_media_message(AttachmentType::Video, consts::SAMPLE_VIDEO_URL)
            .await
    }

    /// Sends a "like heart" sticker to a random recipient
    pub async fn send_sticker_message(&self) -> Result<SendMessageResponse> {
        let message = OutgoingAttachmentMessage::new_sticker(self.random_recipient()?);
        self.send_message(&message).await
    }

    async fn send_media_message(
        &self,
        attachment_type: AttachmentType,
        url: &str,
    ) -> Result<SendMessageResponse> {
        let message = OutgoingAttachmentMessage::new_media(
            self.random_recipient()?,
            attachment_type,
            url.to_string(),
        );
        self.send_message(&message).await
    }

    /// Internal method to send any message type to the Graph API
    async fn send_message<T: serde::Serialize>(&self, message: &T) -> Result<SendMessageResponse> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.auth_token))
            .header("Content-Type", "application/json")
            .json(message)
            .send()
            .await
            .context("Failed to send request to Graph API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response body".to_string());

            anyhow::bail!("Graph API returned error status {}: {}", status, body);
        }

        let send_response: SendMessageResponse = response
            .json()
            .await
            .context("Failed to parse Graph API response")?;

        Ok(send_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;

    const SEND_ACK: &str = r#"{"recipient_id":"111","message_id":"mid.1"}"#;

    async fn stubbed_client(status: usize, body: &str) -> (mockito::ServerGuard, MessagingClient) {
        let mut upstream = mockito::Server::new_async().await;
        upstream
            .mock("POST", "/me/messages")
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;

        let mut app_config = config::tests::test_config();
        app_config.graph_messages_endpoint = format!("{}/me/messages", upstream.url());

        let client = MessagingClient::new(&app_config);
        (upstream, client)
    }

    #[ntex::test]
    async fn test_all_send_operations_succeed_on_2xx() {
        let (_upstream, client) = stubbed_client(200, SEND_ACK).await;

        let response = client.send_text_message("hello".into()).await.unwrap();
        assert_eq!(response.message_id, "mid.1");

        client.send_image_message().await.unwrap();
        client.send_audio_message().await.unwrap();
        client.send_video_message().await.unwrap();
        client.send_sticker_message().await.unwrap();
    }

    #[ntex::test]
    async fn test_send_fails_on_non_2xx_with_description() {
        let (_upstream, client) =
            stubbed_client(400, r#"{"error":{"message":"Invalid OAuth token"}}"#).await;

        let err = client.send_text_message("hello".into()).await.unwrap_err();
        let description = err.to_string();
        assert!(description.contains("400"), "got: {description}");
    }

    #[ntex::test]
    async fn test_send_fails_on_unreachable_upstream() {
        let mut app_config = config::tests::test_config();
        app_config.graph_messages_endpoint = "http://127.0.0.1:9/me/messages".into();

        let client = MessagingClient::new(&app_config);
        let err = client.send_sticker_message().await.unwrap_err();
        assert!(err.to_string().contains("Failed to send request"));
    }

    #[ntex::test]
    async fn test_empty_recipient_pool_fails_before_sending() {
        let mut upstream = mockito::Server::new_async().await;
        let mock = upstream
            .mock("POST", "/me/messages")
            .expect(0)
            .create_async()
            .await;

        let mut app_config = config::tests::test_config();
        app_config.graph_messages_endpoint = format!("{}/me/messages", upstream.url());
        app_config.recipient_ids = "".into();

        let client = MessagingClient::new(&app_config);
        let err = client.send_text_message("hello".into()).await.unwrap_err();
        assert!(err.to_string().contains("recipient pool is empty"));
        mock.assert_async().await;
    }

    #[ntex::test]
    async fn test_recipient_always_comes_from_pool() {
        let (_upstream, client) = stubbed_client(200, SEND_ACK).await;
        for _ in 0..20 {
            let recipient = client.random_recipient().unwrap();
            assert!(["111", "222"].contains(&recipient.as_str()));
        }
    }
}
