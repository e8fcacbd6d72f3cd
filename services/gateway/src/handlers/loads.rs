use crate::auth::ApiKeyAuth;
use crate::error::AppError;
use crate::models::BookResponse;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use matching_engine::EngineError;
use types::analytics::AnalyticsPayload;
use types::criteria::{FilterCriteria, RawFilterCriteria};
use types::load::Load;

/// GET /api/loads
///
/// Find the best available load under the query's filters. The criteria
/// are validated before the engine runs; a malformed field is a 400
/// naming the field, never a silent default.
pub async fn find_best_load(
    State(state): State<AppState>,
    _auth: ApiKeyAuth,
    Query(raw): Query<RawFilterCriteria>,
) -> Result<Json<Load>, AppError> {
    let criteria = raw.parse()?;

    let result = state.engine.find_best_load(&criteria);

    // Record the attempt around the engine call; recording is
    // fire-and-forget and never affects the response.
    match &result {
        Ok(load) => {
            state
                .analytics
                .record(search_event(&criteria, "Successful", Some(load)));
        }
        Err(EngineError::NoMatch) => {
            state
                .analytics
                .record(search_event(&criteria, "Failed Load Matching", None));
        }
        Err(_) => {}
    }

    Ok(Json(result?))
}

/// POST /api/loads/:load_id/book
///
/// Mark a load as booked. Not idempotent: a repeat attempt is a 409.
pub async fn book_load(
    State(state): State<AppState>,
    _auth: ApiKeyAuth,
    Path(load_id): Path<String>,
) -> Result<Json<BookResponse>, AppError> {
    let result = state.engine.book_load(&load_id);

    // Every booking attempt is recorded, failed ones included.
    match &result {
        Ok(load) => {
            state
                .analytics
                .record(booking_event(&load_id, "Successful", Some(load)));
        }
        Err(EngineError::AlreadyBooked { .. }) | Err(EngineError::LoadNotFound { .. }) => {
            state
                .analytics
                .record(booking_event(&load_id, "Failed Load Booking", None));
        }
        Err(_) => {}
    }

    Ok(Json(BookResponse {
        message: "Load successfully booked".to_string(),
        load: result?,
    }))
}

fn search_event(
    criteria: &FilterCriteria,
    classification: &str,
    matched: Option<&Load>,
) -> AnalyticsPayload {
    AnalyticsPayload {
        action_type: Some("search".to_string()),
        classification: Some(classification.to_string()),
        origin_state: criteria.origin_state.clone(),
        destination_state: criteria.destination_state.clone(),
        equipment_type: criteria.equipment_type.clone(),
        min_price: criteria.min_price,
        max_price: criteria.max_price,
        min_rpm: criteria.min_rpm,
        max_rpm: criteria.max_rpm,
        load_id: matched.map(|l| l.load_id.to_string()),
        price: matched.map(|l| l.loadboard_rate),
        miles: matched.map(|l| l.miles),
        weight: matched.map(|l| l.weight),
        ..Default::default()
    }
}

fn booking_event(
    load_id: &str,
    classification: &str,
    booked: Option<&Load>,
) -> AnalyticsPayload {
    AnalyticsPayload {
        action_type: Some("booking".to_string()),
        classification: Some(classification.to_string()),
        load_id: Some(load_id.to_string()),
        origin_state: booked.map(|l| l.origin_state.clone()),
        destination_state: booked.map(|l| l.destination_state.clone()),
        equipment_type: booked.map(|l| l.equipment_type.clone()),
        price: booked.map(|l| l.loadboard_rate),
        miles: booked.map(|l| l.miles),
        weight: booked.map(|l| l.weight),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use matching_engine::{LoadStore, MatchEngine};
    use persistence::FileStore;
    use std::sync::Arc;
    use tempfile::tempdir;

    fn state_with_catalog(dir: &tempfile::TempDir) -> AppState {
        let store = Arc::new(FileStore::open(dir.path().join("loads.json")).unwrap());
        store
            .initialize_if_empty(datagen::generate(1, 42, Utc::now()))
            .unwrap();
        AppState::new(Arc::new(MatchEngine::new(store)), "test-key".to_string())
    }

    #[tokio::test]
    async fn test_every_booking_attempt_is_recorded() {
        let dir = tempdir().unwrap();
        let state = state_with_catalog(&dir);

        // Seeded catalog has exactly L-1001.
        let ok = book_load(
            State(state.clone()),
            ApiKeyAuth,
            Path("L-1001".to_string()),
        )
        .await;
        assert!(ok.is_ok());

        let conflict = book_load(
            State(state.clone()),
            ApiKeyAuth,
            Path("L-1001".to_string()),
        )
        .await;
        assert!(conflict.is_err());

        let missing = book_load(
            State(state.clone()),
            ApiKeyAuth,
            Path("L-9999".to_string()),
        )
        .await;
        assert!(missing.is_err());

        let entries = state.analytics.all();
        assert_eq!(entries.len(), 3);
        assert!(entries.iter().all(|e| e.action_type == "booking"));
        assert_eq!(
            entries
                .iter()
                .filter(|e| e.classification.as_deref() == Some("Successful"))
                .count(),
            1
        );
        assert_eq!(
            entries
                .iter()
                .filter(|e| e.classification.as_deref() == Some("Failed Load Booking"))
                .count(),
            2
        );
        // Failed attempts still carry the id that was asked for.
        assert!(entries
            .iter()
            .any(|e| e.load_id.as_deref() == Some("L-9999")));
    }

    #[tokio::test]
    async fn test_failed_search_is_recorded() {
        let dir = tempdir().unwrap();
        let state = state_with_catalog(&dir);

        let raw = RawFilterCriteria {
            min_price: Some("999999".to_string()),
            ..Default::default()
        };
        let result = find_best_load(State(state.clone()), ApiKeyAuth, Query(raw)).await;
        assert!(result.is_err());

        let entries = state.analytics.all();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].action_type, "search");
        assert_eq!(
            entries[0].classification.as_deref(),
            Some("Failed Load Matching")
        );
    }
}
