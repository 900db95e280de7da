//! medlytics-core
//!
//! Pure domain types and storage key conventions shared by every Medlytics
//! crate. No AWS SDK dependency.

pub mod error;
pub mod models;
pub mod storage_keys;
