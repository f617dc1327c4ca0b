use async_trait::async_trait;

use crate::domain::{
    models::{EntryId, TimesheetEntry},
    ApprovalError, EditOutcome, HourField,
};

/// How a bulk action ended when it did not error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BulkOutcome {
    /// Approve/reject triggered with nothing checked.
    NoSelection,
    /// Save triggered with no dirty rows.
    NoChanges,
    /// Another bulk action is still in flight.
    Busy,
    /// The user declined the confirmation dialog.
    Cancelled,
    /// The server processed `count` entries and the grid was reloaded.
    Completed { count: usize },
}

/// Inbound port for the approval grid use cases.
///
/// Event handlers of the rendering layer call into this; it orchestrates
/// the grid state and the outbound ports to fulfill each action.
#[async_trait]
pub trait ApprovalService {
    /// A character-level or commit edit on an hour cell.
    fn hour_edited(&mut self, id: &EntryId, field: HourField, raw_input: &str) -> EditOutcome;

    /// A row checkbox changed.
    fn selection_changed(&mut self, id: &EntryId, selected: bool);

    /// Current grid rows, in display order.
    fn rows(&self) -> &[TimesheetEntry];

    /// Whether the triggering controls should be disabled right now.
    fn action_in_flight(&self) -> bool;

    /// Approve all selected entries.
    async fn approve_selected(&mut self) -> Result<BulkOutcome, ApprovalError>;

    /// Reject all selected entries.
    async fn reject_selected(&mut self) -> Result<BulkOutcome, ApprovalError>;

    /// Persist hour edits for all dirty entries.
    async fn save_changes(&mut self) -> Result<BulkOutcome, ApprovalError>;

    /// Re-fetch the grid snapshot with the active filters, resetting all
    /// transient flags.
    async fn refresh(&mut self) -> Result<(), ApprovalError>;
}
