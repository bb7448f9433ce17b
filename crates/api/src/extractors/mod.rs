//! Custom Axum extractors.

pub mod webhook_secret;

#[allow(unused_imports)] // Re-exports for downstream use
pub use webhook_secret::{WebhookSecret, WebhookUnauthorized};
