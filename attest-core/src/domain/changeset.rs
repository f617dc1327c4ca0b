//! Change-set projections over the grid rows.
//!
//! Nothing here keeps state: every bulk action recomputes its target set
//! from the row flags at the moment it fires, so intervening edits can
//! never leave a stale membership list behind.

use crate::domain::models::TimesheetEntry;

/// Rows the user has checked for a bulk approve/reject, in display order.
pub fn selected_entries(rows: &[TimesheetEntry]) -> Vec<&TimesheetEntry> {
    rows.iter().filter(|r| r.selected).collect()
}

/// Rows with unsaved hour edits, in display order.
pub fn dirty_entries(rows: &[TimesheetEntry]) -> Vec<&TimesheetEntry> {
    rows.iter().filter(|r| r.dirty).collect()
}

/// The subset of the given rows whose hour distribution fails validation.
/// A non-empty result aborts the whole bulk action; nothing is submitted
/// partially.
pub fn invalid_entries<'a>(rows: &[&'a TimesheetEntry]) -> Vec<&'a TimesheetEntry> {
    rows.iter().filter(|r| !r.valid).copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{ApprovalStatus, EntryId, ProjectId};

    fn entry(id: &str) -> TimesheetEntry {
        TimesheetEntry {
            id: EntryId::new(id),
            timesheet_id: "TS-0001".to_string(),
            employee: "EMP-0001".to_string(),
            employee_name: "Jane Doe".to_string(),
            project: ProjectId::new("PROJ-0001"),
            activity_type: None,
            description: None,
            date: None,
            total_hours: 8.0,
            billable_hours: 8.0,
            non_billable_hours: 0.0,
            approval_status: ApprovalStatus::Pending,
            selected: false,
            dirty: false,
            valid: true,
        }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(selected_entries(&[]).is_empty());
        assert!(dirty_entries(&[]).is_empty());
    }

    #[test]
    fn projections_preserve_display_order() {
        let mut rows = vec![entry("T1"), entry("T2"), entry("T3"), entry("T4")];
        rows[3].selected = true;
        rows[0].selected = true;
        rows[2].selected = true;

        let ids: Vec<&str> = selected_entries(&rows)
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["T1", "T3", "T4"]);
    }

    #[test]
    fn dirty_never_includes_untouched_rows() {
        let mut rows = vec![entry("T1"), entry("T2")];
        rows[1].dirty = true;

        let dirty = dirty_entries(&rows);
        assert_eq!(dirty.len(), 1);
        assert_eq!(dirty[0].id.as_str(), "T2");
    }

    #[test]
    fn projections_are_idempotent() {
        let mut rows = vec![entry("T1"), entry("T2"), entry("T3")];
        rows[0].selected = true;
        rows[2].selected = true;

        let first: Vec<&str> = selected_entries(&rows)
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        let second: Vec<&str> = selected_entries(&rows)
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn invalid_subset_of_a_projection() {
        let mut rows = vec![entry("T1"), entry("T2"), entry("T3")];
        rows[0].selected = true;
        rows[1].selected = true;
        rows[1].valid = false;

        let selected = selected_entries(&rows);
        let invalid = invalid_entries(&selected);
        assert_eq!(invalid.len(), 1);
        assert_eq!(invalid[0].id.as_str(), "T2");
    }
}
