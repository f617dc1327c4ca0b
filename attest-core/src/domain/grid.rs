//! In-memory row collection behind the approval grid.
//!
//! The rendering layer reads rows from here and feeds edits back in; none
//! of the row state lives in rendered cells. That keeps reconciliation and
//! change tracking testable without a UI.

use crate::domain::models::{EntryId, TimesheetEntry};
use crate::domain::{changeset, reconcile, HourField};

/// What became of a field edit handed to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Applied,
    /// The entry is locked for editing (already approved).
    NotEditable,
    UnknownEntry,
}

#[derive(Debug, Default)]
pub struct ApprovalGrid {
    rows: Vec<TimesheetEntry>,
}

impl ApprovalGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all rows with a fresh server snapshot. Transient flags on the
    /// incoming rows are reset regardless of what the caller left in them.
    pub fn load_snapshot(&mut self, mut rows: Vec<TimesheetEntry>) {
        for row in &mut rows {
            row.selected = false;
            row.dirty = false;
            row.valid = reconcile::distribution_valid(
                row.billable_hours,
                row.non_billable_hours,
                row.total_hours,
            );
        }
        self.rows = rows;
    }

    pub fn rows(&self) -> &[TimesheetEntry] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Apply raw text typed into an hour cell. Parsing never fails; garbage
    /// input coerces to zero hours.
    pub fn edit_hours(&mut self, id: &EntryId, field: HourField, raw_input: &str) -> EditOutcome {
        let value = reconcile::parse_hours(raw_input);
        let Some(row) = self.rows.iter_mut().find(|r| &r.id == id) else {
            return EditOutcome::UnknownEntry;
        };
        if !row.can_edit() {
            return EditOutcome::NotEditable;
        }

        reconcile::apply_hour_edit(row, field, value);
        EditOutcome::Applied
    }

    /// Checkbox state change for one row.
    pub fn set_selected(&mut self, id: &EntryId, selected: bool) -> bool {
        match self.rows.iter_mut().find(|r| &r.id == id) {
            Some(row) => {
                row.selected = selected;
                true
            }
            None => false,
        }
    }

    pub fn selected(&self) -> Vec<&TimesheetEntry> {
        changeset::selected_entries(&self.rows)
    }

    pub fn dirty(&self) -> Vec<&TimesheetEntry> {
        changeset::dirty_entries(&self.rows)
    }

    /// Count backing the "N entries selected" label.
    pub fn selection_count(&self) -> usize {
        self.rows.iter().filter(|r| r.selected).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{ApprovalStatus, ProjectId};

    fn entry(id: &str, status: ApprovalStatus) -> TimesheetEntry {
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
            approval_status: status,
            selected: false,
            dirty: false,
            valid: true,
        }
    }

    fn grid_with(rows: Vec<TimesheetEntry>) -> ApprovalGrid {
        let mut grid = ApprovalGrid::new();
        grid.load_snapshot(rows);
        grid
    }

    #[test]
    fn snapshot_load_resets_transient_flags() {
        let mut stale = entry("T1", ApprovalStatus::Pending);
        stale.selected = true;
        stale.dirty = true;

        let grid = grid_with(vec![stale]);
        let row = &grid.rows()[0];
        assert!(!row.selected);
        assert!(!row.dirty);
        assert!(row.valid);
    }

    #[test]
    fn edit_flows_through_reconciliation() {
        let mut grid = grid_with(vec![entry("T1", ApprovalStatus::Pending)]);
        let outcome = grid.edit_hours(&EntryId::new("T1"), HourField::Billable, "5");

        assert_eq!(outcome, EditOutcome::Applied);
        let row = &grid.rows()[0];
        assert_eq!(row.billable_hours, 5.0);
        assert_eq!(row.non_billable_hours, 3.0);
        assert!(row.dirty);
    }

    #[test]
    fn approved_rows_are_locked() {
        let mut grid = grid_with(vec![entry("T1", ApprovalStatus::Approved)]);
        let outcome = grid.edit_hours(&EntryId::new("T1"), HourField::Billable, "5");

        assert_eq!(outcome, EditOutcome::NotEditable);
        assert!(!grid.rows()[0].dirty);
        assert_eq!(grid.rows()[0].billable_hours, 8.0);
    }

    #[test]
    fn rejected_rows_stay_editable() {
        let mut grid = grid_with(vec![entry("T1", ApprovalStatus::Rejected)]);
        let outcome = grid.edit_hours(&EntryId::new("T1"), HourField::NonBillable, "2");
        assert_eq!(outcome, EditOutcome::Applied);
    }

    #[test]
    fn unknown_entry_is_reported() {
        let mut grid = grid_with(vec![entry("T1", ApprovalStatus::Pending)]);
        let outcome = grid.edit_hours(&EntryId::new("T9"), HourField::Billable, "5");
        assert_eq!(outcome, EditOutcome::UnknownEntry);
    }

    #[test]
    fn selection_matches_checkbox_state() {
        let mut grid = grid_with(vec![
            entry("T1", ApprovalStatus::Pending),
            entry("T2", ApprovalStatus::Pending),
        ]);

        assert!(grid.set_selected(&EntryId::new("T2"), true));
        assert_eq!(grid.selection_count(), 1);
        assert_eq!(grid.selected()[0].id.as_str(), "T2");

        assert!(grid.set_selected(&EntryId::new("T2"), false));
        assert_eq!(grid.selection_count(), 0);
        assert!(!grid.set_selected(&EntryId::new("T9"), true));
    }

    #[test]
    fn garbage_input_becomes_zero_hours() {
        let mut grid = grid_with(vec![entry("T1", ApprovalStatus::Pending)]);
        grid.edit_hours(&EntryId::new("T1"), HourField::Billable, "abc");

        let row = &grid.rows()[0];
        assert_eq!(row.billable_hours, 0.0);
        assert_eq!(row.non_billable_hours, 8.0);
        assert!(row.dirty);
    }

    #[test]
    fn inconsistent_snapshot_row_loads_as_invalid() {
        let mut bad = entry("T1", ApprovalStatus::Pending);
        bad.billable_hours = 5.0;
        bad.non_billable_hours = 1.0;

        let grid = grid_with(vec![bad]);
        assert!(!grid.rows()[0].valid);
    }
}
