use serde::Deserialize;

/// Response of the approve method.
///
/// The server processes entries one by one and keeps going on per-entry
/// failures, so a partial success is a normal outcome: the count covers the
/// entries that went through and `failed_entries` describes the rest.
#[derive(Debug, Clone, Deserialize)]
pub struct ApproveEntriesResponse {
    pub approved_count: usize,
    #[serde(default)]
    pub failed_entries: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RejectEntriesResponse {
    pub rejected_count: usize,
    #[serde(default)]
    pub failed_entries: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SaveHourChangesResponse {
    pub saved_count: usize,
    #[serde(default)]
    pub failed_entries: Vec<String>,
}
