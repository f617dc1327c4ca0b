use chrono::NaiveDate;

use super::{ApprovalStatus, EntryId, ProjectId, UserId};

/// Hour adjustment packaged for a bulk save: the id plus the authoritative
/// pair of hour values at the moment the action was triggered.
#[derive(Debug, Clone, PartialEq)]
pub struct HourChange {
    pub id: EntryId,
    pub billable_hours: f64,
    pub non_billable_hours: f64,
}

/// A bulk approve/reject request.
#[derive(Debug, Clone)]
pub struct EntryActionRequest {
    pub entry_ids: Vec<EntryId>,
    pub project: Option<ProjectId>,
}

/// A bulk save request carrying only the dirty rows.
#[derive(Debug, Clone)]
pub struct SaveChangesRequest {
    pub entries: Vec<HourChange>,
    pub project: Option<ProjectId>,
}

/// Active report filters, supplied by the filter/query context collaborator.
#[derive(Debug, Clone, Default)]
pub struct ReportFilters {
    pub project: Option<ProjectId>,
    pub employee: Option<String>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    pub approval_status: Option<ApprovalStatus>,
}

/// Explicit session context for the orchestration layer, replacing the
/// ambient user/route globals of a browser-hosted report.
#[derive(Debug, Clone)]
pub struct ApprovalContext {
    pub user: UserId,
    pub filters: ReportFilters,
}

impl ApprovalContext {
    pub fn new(user: UserId, filters: ReportFilters) -> Self {
        Self { user, filters }
    }

    /// The project id attached to every bulk request, when one is active.
    pub fn active_project(&self) -> Option<ProjectId> {
        self.filters.project.clone()
    }
}
