//! Core types for testapi

use serde::{Deserialize, Serialize};

/// User record returned by the test endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Response envelope: a message followed by its payload.
///
/// Field order is part of the wire format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiMessage<T> {
    pub message: String,
    pub data: T,
}
