use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{EntryId, ProjectId};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApprovalStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    /// Parse the status column of a report row. Anything unrecognized is
    /// treated as pending, matching how the server seeds new details.
    pub fn parse(value: &str) -> Self {
        match value {
            "Approved" => ApprovalStatus::Approved,
            "Rejected" => ApprovalStatus::Rejected,
            _ => ApprovalStatus::Pending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "Pending",
            ApprovalStatus::Approved => "Approved",
            ApprovalStatus::Rejected => "Rejected",
        }
    }
}

/// One row of the approval grid.
///
/// Snapshot fields are read-only for the lifetime of the row; `selected`,
/// `dirty` and `valid` are client-only and reset on every reload.
#[derive(Debug, Clone)]
pub struct TimesheetEntry {
    pub id: EntryId,
    pub timesheet_id: String,
    pub employee: String,
    pub employee_name: String,
    pub project: ProjectId,
    pub activity_type: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub total_hours: f64,
    pub billable_hours: f64,
    pub non_billable_hours: f64,
    pub approval_status: ApprovalStatus,
    pub selected: bool,
    pub dirty: bool,
    pub valid: bool,
}

impl TimesheetEntry {
    /// Hour cells are editable while the entry still needs manager action.
    /// Approved entries are locked until the server unlocks them.
    pub fn can_edit(&self) -> bool {
        matches!(
            self.approval_status,
            ApprovalStatus::Pending | ApprovalStatus::Rejected
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_status_falls_back_to_pending() {
        assert_eq!(ApprovalStatus::parse("Approved"), ApprovalStatus::Approved);
        assert_eq!(ApprovalStatus::parse("Rejected"), ApprovalStatus::Rejected);
        assert_eq!(ApprovalStatus::parse(""), ApprovalStatus::Pending);
        assert_eq!(ApprovalStatus::parse("Draft"), ApprovalStatus::Pending);
    }
}
