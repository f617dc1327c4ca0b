use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the manager approval report, as shipped by the server.
///
/// Hour columns come back as plain numbers; all flags derived client-side
/// (selection, dirtiness) are deliberately absent from the wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawApprovalRow {
    pub timesheet_detail_id: String,
    pub timesheet_id: String,
    pub employee: String,
    pub employee_name: String,
    pub project: String,
    pub project_name: String,
    #[serde(default)]
    pub task: Option<String>,
    #[serde(default)]
    pub task_name: Option<String>,
    #[serde(default)]
    pub activity_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub total_hours: f64,
    pub billable_hours: f64,
    pub non_billable_hours: f64,
    pub approval_status: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub approved_by: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_report_row() {
        let json = r#"{
            "timesheet_detail_id": "TSD-0001",
            "timesheet_id": "TS-0001",
            "employee": "EMP-0001",
            "employee_name": "Jane Doe",
            "project": "PROJ-0001",
            "project_name": "Website Revamp",
            "activity_type": "Development",
            "total_hours": 8.0,
            "billable_hours": 6.5,
            "non_billable_hours": 1.5,
            "approval_status": "Pending",
            "date": "2025-06-02"
        }"#;

        let row: RawApprovalRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.timesheet_detail_id, "TSD-0001");
        assert_eq!(row.total_hours, 8.0);
        assert_eq!(row.approval_status, "Pending");
        assert!(row.task.is_none());
        assert_eq!(row.date, NaiveDate::from_ymd_opt(2025, 6, 2));
    }
}
