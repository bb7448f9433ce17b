//! External service integrations.

pub mod crm;
pub mod storage;

#[allow(unused_imports)] // Re-exports for downstream use
pub use crm::{CrmNotifier, InviteCreatedPayload};
#[allow(unused_imports)] // Re-exports for downstream use
pub use storage::StorageClient;
