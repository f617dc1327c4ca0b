use serde::{Deserialize, Serialize};

/// Hour adjustment for a single timesheet detail, as accepted by the
/// `save_hour_changes` method.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HourChangeEntry {
    pub timesheet_detail_id: String,
    pub billable_hours: f64,
    pub non_billable_hours: f64,
}

/// Arguments for the approve/reject methods.
#[derive(Debug, Clone, Serialize)]
pub struct EntryActionArgs {
    pub entries: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
}

/// Arguments for the save-hour-changes method.
#[derive(Debug, Clone, Serialize)]
pub struct SaveChangesArgs {
    pub entries: Vec<HourChangeEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
}
