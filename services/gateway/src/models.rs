use serde::Serialize;
use types::analytics::AnalyticsEntry;
use types::load::Load;

#[derive(Debug, Clone, Serialize)]
pub struct BookResponse {
    pub message: String,
    pub load: Load,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordResponse {
    pub success: bool,
    pub message: String,
    pub entry: AnalyticsEntry,
}

#[derive(Debug, Clone, Serialize)]
pub struct EntryListResponse {
    pub count: usize,
    pub data: Vec<AnalyticsEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    pub success: bool,
    pub message: String,
}
