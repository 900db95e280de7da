//! medlytics-auth
//!
//! Caller identity for the API: HS256 bearer tokens carrying the subject
//! that owns stored analyses.

pub mod error;
pub mod jwt;
