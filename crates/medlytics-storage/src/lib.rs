//! medlytics-storage
//!
//! Persistence for scored analyses. S3 in production, an in-memory map for
//! local runs and tests; both behind [`store::AnalysisStore`].

pub mod client;
pub mod error;
pub mod objects;
pub mod store;
