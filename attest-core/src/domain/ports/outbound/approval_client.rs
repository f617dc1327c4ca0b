use async_trait::async_trait;

use crate::domain::{
    models::{EntryActionRequest, ReportFilters, SaveChangesRequest, TimesheetEntry},
    ApprovalError,
};

/// Outbound port for the remote approval server.
///
/// This trait defines the contract any backing server must implement; all
/// validation, authorization and persistence happen on the other side of
/// it. Methods return the count of entries the server actually processed.
#[async_trait]
pub trait ApprovalClient: Send + Sync + 'static {
    /// Fetch a fresh snapshot of approval grid rows for the given filters.
    async fn fetch_entries(
        &self,
        filters: &ReportFilters,
    ) -> Result<Vec<TimesheetEntry>, ApprovalError>;

    /// Approve the given entries.
    async fn approve_entries(&self, request: &EntryActionRequest) -> Result<usize, ApprovalError>;

    /// Reject the given entries.
    async fn reject_entries(&self, request: &EntryActionRequest) -> Result<usize, ApprovalError>;

    /// Persist hour adjustments without changing approval state.
    async fn save_hour_changes(&self, request: &SaveChangesRequest) -> Result<usize, ApprovalError>;
}
