//! Business logic services.

pub mod assignability;

pub use assignability::is_assignable;
