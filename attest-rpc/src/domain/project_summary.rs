use serde::Deserialize;

/// Budget overview for a project, returned by the project summary method.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectSummary {
    pub project_name: String,
    #[serde(default)]
    pub billing_type: Option<String>,
    pub total_purchased_hours: f64,
    pub total_consumed_hours: f64,
    pub remaining_hours: f64,
    pub timesheet_summary: TimesheetSummary,
}

/// Per-status entry counts and hour totals across a project's timesheets.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimesheetSummary {
    #[serde(default)]
    pub total_entries: usize,
    #[serde(default)]
    pub pending_entries: usize,
    #[serde(default)]
    pub approved_entries: usize,
    #[serde(default)]
    pub rejected_entries: usize,
    #[serde(default)]
    pub total_hours: f64,
    #[serde(default)]
    pub total_billable_hours: f64,
    #[serde(default)]
    pub total_non_billable_hours: f64,
}
