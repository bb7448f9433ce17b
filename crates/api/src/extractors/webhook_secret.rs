//! Shared-secret authentication extractor for the CRM completion webhook.
//!
//! The CRM proves itself with a single shared-secret header. The extractor
//! runs before the JSON body is touched, so an unauthorised caller never
//! reaches a database read.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::app::AppState;

/// Marker for a request that presented the correct shared secret.
#[derive(Debug, Clone, Copy)]
pub struct WebhookSecret;

/// Rejection for a missing or mismatched shared secret.
///
/// The body follows the CRM webhook contract: `{"error": "unauthorised"}`.
#[derive(Debug)]
pub struct WebhookUnauthorized;

impl IntoResponse for WebhookUnauthorized {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "unauthorised" })),
        )
            .into_response()
    }
}

#[async_trait]
impl FromRequestParts<AppState> for WebhookSecret {
    type Rejection = WebhookUnauthorized;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let crm = &state.config.crm;

        let presented = parts
            .headers
            .get(crm.secret_header.as_str())
            .and_then(|v| v.to_str().ok())
            .ok_or(WebhookUnauthorized)?;

        // Presence and equality must both hold; an empty configured secret
        // never matches (config validation rejects it at startup anyway).
        if crm.webhook_secret.is_empty() || presented != crm.webhook_secret {
            tracing::warn!("Webhook call rejected: shared secret mismatch");
            return Err(WebhookUnauthorized);
        }

        Ok(WebhookSecret)
    }
}
