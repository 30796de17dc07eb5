//! Data models for the UTILA server

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utila_core::Tool;

/// Fixed confirmation returned for every accepted submission
pub const CONTACT_ACK_MESSAGE: &str = "Message received! We will get back to you soon.";

/// Contact form submission. Absent fields deserialize to empty strings so
/// that "missing" and "empty" fail validation the same way.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl ContactRequest {
    /// All three fields must be non-empty. Whitespace-only values are
    /// accepted; there is no email format validation.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.message.is_empty()
    }
}

/// Success acknowledgement for a contact submission
#[derive(Debug, Clone, Serialize)]
pub struct ContactAck {
    pub success: bool,
    pub message: String,
}

/// Contact message row as stored
#[derive(Debug, Clone, FromRow)]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: NaiveDateTime,
}

/// Query parameters for the catalog listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolsQuery {
    /// Category name, or "All" (the default)
    pub category: Option<String>,
    /// Case-insensitive search over tool name and description
    pub q: Option<String>,
}

/// Catalog listing response
#[derive(Debug, Clone, Serialize)]
pub struct ToolListResponse {
    pub success: bool,
    pub tools: Vec<Tool>,
    pub count: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}
