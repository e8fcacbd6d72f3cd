use analytics::AnalyticsLog;
use matching_engine::MatchEngine;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<MatchEngine>,
    pub analytics: Arc<AnalyticsLog>,
    /// Expected value for the X-API-Key / Authorization check
    pub api_key: Arc<str>,
}

impl AppState {
    pub fn new(engine: Arc<MatchEngine>, api_key: String) -> Self {
        Self {
            engine,
            analytics: Arc::new(AnalyticsLog::new()),
            api_key: api_key.into(),
        }
    }
}
