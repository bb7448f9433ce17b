//! CRM notification service.
//!
//! Sends the `instructor_invite_created` event to the external CRM's inbound
//! webhook. Delivery is strictly best-effort: the caller has already
//! committed the invite row and must report success regardless of what
//! happens here.

use hmac::{Hmac, Mac};
use reqwest::Client;
use serde::Serialize;
use sha2::Sha256;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::CrmConfig;

/// Signature header for outbound payloads (only sent when signing is
/// configured).
const SIGNATURE_HEADER: &str = "X-Dojo-Signature";

/// Errors that can occur during CRM notification.
///
/// These never propagate as operation failure; the invite route converts
/// them to a user-visible warning.
#[derive(Error, Debug)]
pub enum CrmNotifyError {
    #[error("CRM webhook URL not configured")]
    NotConfigured,

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("CRM returned status {0}")]
    BadStatus(u16),

    #[error("HMAC signing error: {0}")]
    SigningError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Payload for the invite-created event.
#[derive(Debug, Clone, Serialize)]
pub struct InviteCreatedPayload {
    #[serde(rename = "type")]
    pub event_type: &'static str,
    pub invite_id: Uuid,
    pub franchise_id: Uuid,
    pub franchise_name: String,
    pub invited_by: Uuid,
    pub full_name: String,
    pub email: String,
    pub token: String,
    pub registration_url: String,
}

impl InviteCreatedPayload {
    pub const EVENT_TYPE: &'static str = "instructor_invite_created";
}

/// Client for the CRM inbound webhook.
pub struct CrmNotifier {
    client: Client,
    config: CrmConfig,
}

impl CrmNotifier {
    /// Create a new notifier with the configured request timeout.
    pub fn new(config: CrmConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Deliver the invite-created event.
    ///
    /// Returns an error on missing configuration, network failure, timeout,
    /// or a non-2xx response. Callers log the error and move on.
    pub async fn notify_invite_created(
        &self,
        payload: &InviteCreatedPayload,
    ) -> Result<(), CrmNotifyError> {
        if self.config.webhook_url.is_empty() {
            return Err(CrmNotifyError::NotConfigured);
        }

        let body = serde_json::to_string(payload)?;

        let mut request = self
            .client
            .post(&self.config.webhook_url)
            .header("Content-Type", "application/json");

        if !self.config.signing_secret.is_empty() {
            let signature = sign_payload(&body, &self.config.signing_secret)?;
            request = request.header(SIGNATURE_HEADER, signature);
        }

        let response = request.body(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                invite_id = %payload.invite_id,
                status = status.as_u16(),
                "CRM rejected invite notification"
            );
            return Err(CrmNotifyError::BadStatus(status.as_u16()));
        }

        debug!(
            invite_id = %payload.invite_id,
            email = %payload.email,
            "CRM invite notification delivered"
        );

        Ok(())
    }
}

/// HMAC-SHA256 signature over the serialized payload, hex encoded.
fn sign_payload(payload: &str, secret: &str) -> Result<String, CrmNotifyError> {
    type HmacSha256 = Hmac<Sha256>;

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| CrmNotifyError::SigningError(e.to_string()))?;

    mac.update(payload.as_bytes());
    let result = mac.finalize();
    let signature = hex::encode(result.into_bytes());

    Ok(format!("sha256={}", signature))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CrmConfig;

    fn test_crm_config(url: &str) -> CrmConfig {
        CrmConfig {
            webhook_url: url.to_string(),
            webhook_secret: "secret".to_string(),
            secret_header: "x-dojo-secret".to_string(),
            timeout_secs: 5,
            signing_secret: String::new(),
        }
    }

    fn test_payload() -> InviteCreatedPayload {
        InviteCreatedPayload {
            event_type: InviteCreatedPayload::EVENT_TYPE,
            invite_id: Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap(),
            franchise_id: Uuid::parse_str("660e8400-e29b-41d4-a716-446655440001").unwrap(),
            franchise_name: "North Dojo".to_string(),
            invited_by: Uuid::parse_str("770e8400-e29b-41d4-a716-446655440002").unwrap(),
            full_name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            token: "a".repeat(48),
            registration_url: "http://localhost:3000/register-instructor?token=aaa".to_string(),
        }
    }

    #[test]
    fn test_payload_serialization_field_set() {
        let json = serde_json::to_value(test_payload()).unwrap();
        let obj = json.as_object().unwrap();

        assert_eq!(obj["type"], "instructor_invite_created");
        for field in [
            "invite_id",
            "franchise_id",
            "franchise_name",
            "invited_by",
            "full_name",
            "email",
            "token",
            "registration_url",
        ] {
            assert!(obj.contains_key(field), "missing field {}", field);
        }
        assert_eq!(obj.len(), 9);
    }

    #[test]
    fn test_sign_payload_format() {
        let signature = sign_payload("{\"a\":1}", "secret").unwrap();
        assert!(signature.starts_with("sha256="));
        // 32-byte digest renders as 64 hex chars
        assert_eq!(signature.len(), "sha256=".len() + 64);
    }

    #[test]
    fn test_sign_payload_deterministic() {
        let a = sign_payload("payload", "secret").unwrap();
        let b = sign_payload("payload", "secret").unwrap();
        assert_eq!(a, b);

        let other = sign_payload("payload", "other-secret").unwrap();
        assert_ne!(a, other);
    }

    #[tokio::test]
    async fn test_notify_unconfigured_url_fails() {
        let notifier = CrmNotifier::new(test_crm_config(""));
        let result = notifier.notify_invite_created(&test_payload()).await;
        assert!(matches!(result, Err(CrmNotifyError::NotConfigured)));
    }
}
