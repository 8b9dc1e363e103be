//! OAuth token exchange relays for the Instagram Graph API.
//!
//! These endpoints forward the caller's credentials to Instagram's OAuth
//! endpoints and return the upstream JSON verbatim. Nothing is persisted;
//! the service is only a convenience relay used while wiring up an app.

use std::collections::HashMap;

use log::info;
use ntex::web;
use serde::Deserialize;

use crate::{
    consts,
    front::{AppState, errors},
};

/// Query parameters for the short-lived token exchange
#[derive(Debug, Deserialize)]
pub struct AccessTokenQuery {
    /// Authorization code returned by the Instagram login flow
    pub code: Option<String>,
}

/// Query parameters for the long-lived token exchange
#[derive(Debug, Deserialize)]
pub struct LongLivedTokenQuery {
    /// Short-lived token to upgrade
    pub access_token: Option<String>,
}

/// Diagnostic endpoint for the OAuth redirect URI.
///
/// Echoes every query parameter Instagram appended to the redirect as JSON,
/// so the authorization code can be copied out during app setup.
#[web::get("/instagram-callback")]
pub async fn instagram_callback(
    query: web::types::Query<HashMap<String, String>>,
) -> Result<impl web::Responder, web::Error> {
    let params = query.into_inner();
    info!("Instagram callback received: {:?}", params);

    Ok(web::HttpResponse::Ok().json(&params))
}

/// Exchanges an authorization code for a short-lived access token.
///
/// # Returns
/// - 200 with the upstream JSON body, whatever it contains
/// - 400 if the `code` query parameter is absent
/// - 500 if the upstream call or response parsing fails (detail logged only)
#[web::get("/get-access-token")]
pub async fn get_access_token(
    query: web::types::Query<AccessTokenQuery>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let authorization_code = query
        .code
        .as_deref()
        .filter(|code| !code.is_empty())
        .ok_or_else(|| errors::UserError::MissingQueryParam("authorization code".into()))?;

    let config = &app_state.config;
    let form = reqwest::multipart::Form::new()
        .text("client_id", config.instagram_app_id.clone())
        .text("client_secret", config.instagram_app_secret.clone())
        .text("grant_type", "authorization_code")
        .text("redirect_uri", config.redirect_uri())
        .text("code", authorization_code.to_string());

    // The upstream status code is intentionally not inspected: Instagram
    // reports OAuth errors inside the JSON body and callers want it verbatim.
    let data = app_state
        .http_client
        .post(&config.oauth_access_token_endpoint)
        .multipart(form)
        .send()
        .await
        .map_err(|e| {
            errors::ServerError::AccessTokenExchangeError(format!(
                "at short-lived token exchange: {e}"
            ))
        })?
        .json::<serde_json::Value>()
        .await
        .map_err(|e| {
            errors::ServerError::AccessTokenExchangeError(format!(
                "at short-lived token response parsing: {e}"
            ))
        })?;

    info!("Access token response: {data}");

    Ok(web::HttpResponse::Ok().json(&data))
}

/// Exchanges a short-lived access token for a long-lived one.
///
/// # Returns
/// - 200 with the upstream JSON body, whatever it contains
/// - 400 if the `access_token` query parameter is absent
/// - 500 if the upstream call or response parsing fails (detail logged only)
#[web::get("/get-long-lived-access-token")]
pub async fn get_long_lived_access_token(
    query: web::types::Query<LongLivedTokenQuery>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let access_token = query
        .access_token
        .as_deref()
        .filter(|token| !token.is_empty())
        .ok_or_else(|| errors::UserError::MissingQueryParam("access token".into()))?;

    let config = &app_state.config;
    let data = app_state
        .http_client
        .get(&config.long_lived_token_endpoint)
        .query(&[
            ("grant_type", consts::LONG_LIVED_GRANT_TYPE),
            ("client_secret", config.instagram_app_secret.as_str()),
            ("access_token", access_token),
        ])
        .send()
        .await
        .map_err(|e| {
            errors::ServerError::LongLivedTokenExchangeError(format!(
                "at long-lived token exchange: {e}"
            ))
        })?
        .json::<serde_json::Value>()
        .await
        .map_err(|e| {
            errors::ServerError::LongLivedTokenExchangeError(format!(
                "at long-lived token response parsing: {e}"
            ))
        })?;

    info!("Long-lived access token response: {data}");

    Ok(web::HttpResponse::Ok().json(&data))
}
