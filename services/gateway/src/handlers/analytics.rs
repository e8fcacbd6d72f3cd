use crate::auth::ApiKeyAuth;
use crate::models::{ClearResponse, EntryListResponse, RecordResponse};
use crate::state::AppState;
use analytics::AnalyticsStats;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use std::collections::BTreeMap;
use types::analytics::AnalyticsPayload;

/// POST /api/analytics
pub async fn record(
    State(state): State<AppState>,
    _auth: ApiKeyAuth,
    Json(payload): Json<AnalyticsPayload>,
) -> (StatusCode, Json<RecordResponse>) {
    let entry = state.analytics.record(payload);
    (
        StatusCode::CREATED,
        Json(RecordResponse {
            success: true,
            message: "Analytics data logged successfully".to_string(),
            entry,
        }),
    )
}

/// GET /api/analytics
///
/// All entries, or only those whose fields equal every query parameter.
pub async fn list(
    State(state): State<AppState>,
    _auth: ApiKeyAuth,
    Query(query): Query<BTreeMap<String, String>>,
) -> Json<EntryListResponse> {
    let data = if query.is_empty() {
        state.analytics.all()
    } else {
        state.analytics.filtered(&query)
    };
    Json(EntryListResponse {
        count: data.len(),
        data,
    })
}

/// GET /api/analytics/stats
pub async fn stats(State(state): State<AppState>, _auth: ApiKeyAuth) -> Json<AnalyticsStats> {
    Json(state.analytics.stats())
}

/// DELETE /api/analytics
pub async fn clear(State(state): State<AppState>, _auth: ApiKeyAuth) -> Json<ClearResponse> {
    state.analytics.clear();
    Json(ClearResponse {
        success: true,
        message: "All analytics data has been cleared".to_string(),
    })
}
