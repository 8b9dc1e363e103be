//! Instagram webhook endpoint handlers
//!
//! This module handles incoming webhook requests from the Instagram Graph
//! API: the verification handshake (GET), the event receiver (POST), and the
//! Meta app lifecycle callbacks (deauthorization, data-deletion request).
//! Inbound payload signature verification is out of scope for the relay.

use super::handler;
use crate::{
    consts,
    front::{AppState, errors},
};
use log::{error, info};
use ntex::{util::Bytes, web};
use serde::Deserialize;

/// Query parameters for webhook verification
#[derive(Debug, Deserialize)]
pub struct VerifyQuery {
    /// The mode parameter, should be "subscribe"
    #[serde(rename = "hub.mode")]
    pub mode: Option<String>,
    /// The verification token from the Meta app dashboard
    #[serde(rename = "hub.verify_token")]
    pub verify_token: Option<String>,
    /// The challenge string to echo back
    #[serde(rename = "hub.challenge")]
    pub challenge: Option<String>,
}

/// Webhook verification endpoint (GET)
///
/// Instagram sends a GET request to verify the webhook URL. The endpoint
/// validates the verify token and returns the challenge.
///
/// # Returns
/// - 200 with the literal challenge string if verification succeeds
/// - 403 on any mismatch, including absent parameters
#[web::get("")]
pub async fn verify(
    query: web::types::Query<VerifyQuery>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let mode_ok = query.mode.as_deref() == Some(consts::WEBHOOK_SUBSCRIBE_MODE);
    let token_ok = query.verify_token.as_deref() == Some(app_state.config.verify_token.as_str());

    if !mode_ok || !token_ok {
        error!("Webhook verification failed: mode={:?}", query.mode);
        return Err(errors::UserError::VerificationFailed.into());
    }

    info!("Webhook verified");

    Ok(web::HttpResponse::Ok()
        .content_type("text/plain")
        .body(query.challenge.clone().unwrap_or_default()))
}

/// Webhook receiver endpoint (POST)
///
/// Receives webhook events from the Instagram Graph API, logs them, and
/// acknowledges with plain-text "OK". The payload's internal shape never
/// fails the request; only a body that is not JSON at all is rejected.
#[web::post("")]
pub async fn receive(body: Bytes) -> Result<impl web::Responder, web::Error> {
    let payload = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(e) => {
            error!("Failed to parse webhook payload: {e}");
            return Err(errors::UserError::MalformedPayload.into());
        }
    };

    handler::process_webhook(&payload);

    Ok(web::HttpResponse::Ok().content_type("text/plain").body("OK"))
}

/// Meta app deauthorization callback (POST)
///
/// Logged and acknowledged; the relay keeps no per-user state to remove.
#[web::post("/deauthorize")]
pub async fn deauthorize(
    body: web::types::Json<serde_json::Value>,
) -> Result<impl web::Responder, web::Error> {
    info!("Deauthorization callback received: {}", body.into_inner());

    Ok(web::HttpResponse::Ok()
        .content_type("text/plain")
        .body("Deauthorization processed"))
}

/// Meta data-deletion request callback (POST)
///
/// Logged and acknowledged; the relay stores no user data to delete.
#[web::post("/data-deletion-request")]
pub async fn data_deletion_request(
    body: web::types::Json<serde_json::Value>,
) -> Result<impl web::Responder, web::Error> {
    info!("Data deletion request received: {}", body.into_inner());

    Ok(web::HttpResponse::Ok()
        .content_type("text/plain")
        .body("Data deletion request processed"))
}
