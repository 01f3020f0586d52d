//! testapi - a single-endpoint JSON API server
//!
//! Serves `GET /api/test`, which always answers with a fixed greeting and
//! a hard-coded user record.

pub mod api;
pub mod config;
pub mod error;
pub mod types;

pub use error::{Error, Result};
