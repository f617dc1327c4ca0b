use async_trait::async_trait;

use crate::domain::{
    models::{
        ApprovalStatus, EntryActionRequest, EntryId, ProjectId, ReportFilters, SaveChangesRequest,
        TimesheetEntry,
    },
    ports::outbound::ApprovalClient,
    ApprovalError,
};

/// Adapter that wraps the RPC client to implement the ApprovalClient port.
pub struct RpcApprovalAdapter {
    client: attest_rpc::AttestClient,
}

impl RpcApprovalAdapter {
    pub fn new(client: attest_rpc::AttestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ApprovalClient for RpcApprovalAdapter {
    async fn fetch_entries(
        &self,
        filters: &ReportFilters,
    ) -> Result<Vec<TimesheetEntry>, ApprovalError> {
        let rows = self
            .client
            .fetch_approval_rows(&to_rpc_filters(filters))
            .await
            .map_err(map_rpc_error)?;

        Ok(rows.into_iter().map(to_domain_entry).collect())
    }

    async fn approve_entries(&self, request: &EntryActionRequest) -> Result<usize, ApprovalError> {
        let response = self
            .client
            .approve_entries(&to_rpc_action_args(request))
            .await
            .map_err(map_rpc_error)?;

        warn_on_failures("approve", &response.failed_entries);
        Ok(response.approved_count)
    }

    async fn reject_entries(&self, request: &EntryActionRequest) -> Result<usize, ApprovalError> {
        let response = self
            .client
            .reject_entries(&to_rpc_action_args(request))
            .await
            .map_err(map_rpc_error)?;

        warn_on_failures("reject", &response.failed_entries);
        Ok(response.rejected_count)
    }

    async fn save_hour_changes(&self, request: &SaveChangesRequest) -> Result<usize, ApprovalError> {
        let entries = request
            .entries
            .iter()
            .map(|change| attest_rpc::domain::HourChangeEntry {
                timesheet_detail_id: change.id.to_string(),
                billable_hours: change.billable_hours,
                non_billable_hours: change.non_billable_hours,
            })
            .collect();

        let response = self
            .client
            .save_hour_changes(entries, request.project.as_ref().map(ProjectId::to_string))
            .await
            .map_err(map_rpc_error)?;

        warn_on_failures("save", &response.failed_entries);
        Ok(response.saved_count)
    }
}

/// The server keeps going past per-entry failures; surface them in the log
/// so a short count is explainable.
fn warn_on_failures(action: &str, failed_entries: &[String]) {
    for failure in failed_entries {
        tracing::warn!("{} skipped an entry: {}", action, failure);
    }
}

fn to_rpc_filters(filters: &ReportFilters) -> attest_rpc::domain::ReportFilters {
    attest_rpc::domain::ReportFilters {
        project: filters.project.as_ref().map(ProjectId::to_string),
        employee: filters.employee.clone(),
        from_date: filters.from_date,
        to_date: filters.to_date,
        approval_status: filters
            .approval_status
            .map(|status| status.as_str().to_string()),
    }
}

fn to_rpc_action_args(request: &EntryActionRequest) -> attest_rpc::domain::EntryActionArgs {
    attest_rpc::domain::EntryActionArgs {
        entries: request.entry_ids.iter().map(EntryId::to_string).collect(),
        project: request.project.as_ref().map(ProjectId::to_string),
    }
}

fn to_domain_entry(row: attest_rpc::domain::RawApprovalRow) -> TimesheetEntry {
    let valid = crate::domain::distribution_valid(
        row.billable_hours,
        row.non_billable_hours,
        row.total_hours,
    );

    TimesheetEntry {
        id: EntryId::new(row.timesheet_detail_id),
        timesheet_id: row.timesheet_id,
        employee: row.employee,
        employee_name: row.employee_name,
        project: ProjectId::new(row.project),
        activity_type: row.activity_type,
        description: row.description,
        date: row.date,
        total_hours: row.total_hours,
        billable_hours: row.billable_hours,
        non_billable_hours: row.non_billable_hours,
        approval_status: ApprovalStatus::parse(&row.approval_status),
        selected: false,
        dirty: false,
        valid,
    }
}

fn map_rpc_error(error: attest_rpc::AttestRpcError) -> ApprovalError {
    match error {
        attest_rpc::AttestRpcError::Unauthorized => ApprovalError::AuthenticationFailed,
        attest_rpc::AttestRpcError::ResponseError(msg)
        | attest_rpc::AttestRpcError::ServerError(msg) => ApprovalError::RemoteFailure(msg),
        attest_rpc::AttestRpcError::ParsingError(msg) => {
            ApprovalError::unknown(format!("malformed server response: {}", msg))
        }
        attest_rpc::AttestRpcError::Other(msg) => ApprovalError::unknown(msg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_row(billable: f64, non_billable: f64, status: &str) -> attest_rpc::domain::RawApprovalRow {
        attest_rpc::domain::RawApprovalRow {
            timesheet_detail_id: "TSD-0001".to_string(),
            timesheet_id: "TS-0001".to_string(),
            employee: "EMP-0001".to_string(),
            employee_name: "Jane Doe".to_string(),
            project: "PROJ-0001".to_string(),
            project_name: "Website Revamp".to_string(),
            task: None,
            task_name: None,
            activity_type: None,
            description: None,
            total_hours: 8.0,
            billable_hours: billable,
            non_billable_hours: non_billable,
            approval_status: status.to_string(),
            date: None,
            approved_by: None,
        }
    }

    #[test]
    fn conversion_seeds_transient_flags() {
        let entry = to_domain_entry(raw_row(6.0, 2.0, "Pending"));
        assert!(!entry.selected);
        assert!(!entry.dirty);
        assert!(entry.valid);
        assert_eq!(entry.approval_status, ApprovalStatus::Pending);
    }

    #[test]
    fn inconsistent_server_row_is_flagged_invalid() {
        let entry = to_domain_entry(raw_row(6.0, 1.0, "Pending"));
        assert!(!entry.valid);
    }

    #[test]
    fn unauthorized_maps_to_authentication_failed() {
        let mapped = map_rpc_error(attest_rpc::AttestRpcError::Unauthorized);
        assert!(matches!(mapped, ApprovalError::AuthenticationFailed));
    }
}
