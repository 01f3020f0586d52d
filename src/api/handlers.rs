//! API handlers

use axum::Json;

use crate::types::{ApiMessage, User};

pub const GREETING: &str = "API Work with TypeScript 🚀";

/// Fixed greeting plus a hard-coded user
pub async fn test() -> Json<ApiMessage<User>> {
    Json(ApiMessage {
        message: GREETING.to_string(),
        data: User::new("123", "Hello World"),
    })
}
