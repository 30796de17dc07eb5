//! Developer encoders: Base64, URL percent-encoding, JSON formatting

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde_json::Value;

use super::ToolError;

/// Base64-encode a UTF-8 string
pub fn base64_encode(text: &str) -> String {
    BASE64.encode(text.as_bytes())
}

/// Decode a Base64 string back to UTF-8 text
pub fn base64_decode(text: &str) -> Result<String, ToolError> {
    let bytes = BASE64
        .decode(text.trim())
        .map_err(|e| ToolError::InvalidInput(format!("Invalid base64: {}", e)))?;
    String::from_utf8(bytes)
        .map_err(|_| ToolError::InvalidInput("Decoded data is not valid UTF-8".to_string()))
}

/// Percent-encode text for safe transmission in a URL component
pub fn url_encode(text: &str) -> String {
    urlencoding::encode(text).into_owned()
}

/// Decode a percent-encoded URL component
pub fn url_decode(text: &str) -> Result<String, ToolError> {
    urlencoding::decode(text)
        .map(|cow| cow.into_owned())
        .map_err(|e| ToolError::InvalidInput(format!("Invalid URL escape: {}", e)))
}

/// Parse and pretty-print JSON with two-space indentation
pub fn format_json(text: &str) -> Result<String, ToolError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| ToolError::InvalidJson(e.to_string()))?;
    serde_json::to_string_pretty(&value).map_err(|e| ToolError::InvalidJson(e.to_string()))
}

/// Parse and minify JSON onto a single line
pub fn minify_json(text: &str) -> Result<String, ToolError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| ToolError::InvalidJson(e.to_string()))?;
    serde_json::to_string(&value).map_err(|e| ToolError::InvalidJson(e.to_string()))
}
