use crate::error::AppError;
use crate::state::AppState;
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

/// Marker extractor proving the request carried a valid API key
///
/// The key may arrive in `X-API-Key` or in `Authorization` (an optional
/// `Bearer ` prefix is stripped).
pub struct ApiKeyAuth;

#[async_trait]
impl FromRequestParts<AppState> for ApiKeyAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get("x-api-key")
            .or_else(|| parts.headers.get("authorization"))
            .ok_or_else(|| {
                AppError::Unauthorized(
                    "Please provide an API key in X-API-Key or Authorization header".to_string(),
                )
            })?;

        let raw = header
            .to_str()
            .map_err(|_| AppError::Unauthorized("Invalid API key header".to_string()))?;
        let key = raw.strip_prefix("Bearer ").unwrap_or(raw).trim();

        if key != state.api_key.as_ref() {
            return Err(AppError::Unauthorized(
                "The provided API key is not valid".to_string(),
            ));
        }

        Ok(ApiKeyAuth)
    }
}
