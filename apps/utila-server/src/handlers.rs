//! HTTP handlers for the UTILA server

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use utila_core::{catalog, filter_tools, Category, CategoryFilter};

use crate::error::ApiError;
use crate::models::{
    ContactAck, ContactRequest, HealthResponse, ToolListResponse, ToolsQuery, CONTACT_ACK_MESSAGE,
};
use crate::state::AppState;

/// Handler: GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "utila-server",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Handler: POST /api/contact
///
/// Validates the submission, persists it as a new row, and returns the
/// fixed acknowledgement. The row id is never exposed to the caller.
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ContactRequest>,
) -> Result<Json<ContactAck>, ApiError> {
    if !req.is_complete() {
        return Err(ApiError::MissingFields);
    }

    sqlx::query("INSERT INTO contact_messages (name, email, message) VALUES (?, ?, ?)")
        .bind(&req.name)
        .bind(&req.email)
        .bind(&req.message)
        .execute(&state.db)
        .await?;

    // Diagnostic record for operators; best-effort, never blocks the request.
    tracing::info!("New message from {} ({}): {}", req.name, req.email, req.message);

    Ok(Json(ContactAck {
        success: true,
        message: CONTACT_ACK_MESSAGE.to_string(),
    }))
}

/// Handler: GET /api/tools
///
/// Lists the catalog, filtered with the same category/search algorithm the
/// dashboard uses.
pub async fn list_tools(
    Query(query): Query<ToolsQuery>,
) -> Result<Json<ToolListResponse>, ApiError> {
    let category = match query.category.as_deref() {
        None => CategoryFilter::All,
        Some(s) if s.eq_ignore_ascii_case("all") => CategoryFilter::All,
        Some(s) => Category::parse(s).map(CategoryFilter::Only).ok_or_else(|| {
            ApiError::InvalidRequest(format!(
                "Unknown category '{}'. Supported: All, Image, Document, Calculator, Text, Developer, Color, Utility",
                s
            ))
        })?,
    };

    let tools: Vec<_> = filter_tools(catalog(), category, query.q.as_deref().unwrap_or(""))
        .into_iter()
        .cloned()
        .collect();
    let count = tools.len();

    Ok(Json(ToolListResponse {
        success: true,
        tools,
        count,
    }))
}
