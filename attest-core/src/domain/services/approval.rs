use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    changeset,
    models::{
        ApprovalContext, EntryActionRequest, EntryId, HourChange, SaveChangesRequest,
        TimesheetEntry,
    },
    ports::{
        inbound::{ApprovalService, BulkOutcome},
        outbound::{ApprovalClient, Notifier},
    },
    ApprovalError, ApprovalGrid, EditOutcome, HourField,
};

/// Implementation of the ApprovalService inbound port.
///
/// Owns the grid state and orchestrates bulk actions against an
/// ApprovalClient (outbound port), surfacing outcomes through a Notifier.
/// At most one bulk action is in flight at a time; local flags survive a
/// remote failure so the user can retry without re-entering edits.
pub struct ApprovalServiceImpl<C, N> {
    client: Arc<C>,
    notifier: Arc<N>,
    context: ApprovalContext,
    grid: ApprovalGrid,
    action_in_flight: bool,
}

enum BulkAction {
    Approve,
    Reject,
}

impl<C: ApprovalClient, N: Notifier> ApprovalServiceImpl<C, N> {
    pub fn new(client: Arc<C>, notifier: Arc<N>, context: ApprovalContext) -> Self {
        Self {
            client,
            notifier,
            context,
            grid: ApprovalGrid::new(),
            action_in_flight: false,
        }
    }

    pub fn context(&self) -> &ApprovalContext {
        &self.context
    }

    /// Number of checked rows, for the selection label.
    pub fn selection_count(&self) -> usize {
        self.grid.selection_count()
    }

    async fn run_entry_action(
        &mut self,
        action: BulkAction,
    ) -> Result<BulkOutcome, ApprovalError> {
        if self.action_in_flight {
            self.notifier.info("Another action is still running.");
            return Ok(BulkOutcome::Busy);
        }

        let (verb, done) = match action {
            BulkAction::Approve => ("approve", "approved"),
            BulkAction::Reject => ("reject", "rejected"),
        };

        let selected = self.grid.selected();
        if selected.is_empty() {
            self.notifier
                .info(&format!("Please select entries to {}.", verb));
            return Ok(BulkOutcome::NoSelection);
        }

        if let Some(invalid) = invalid_ids(&selected) {
            self.notifier.error(&format!(
                "Fix the hour distribution on {} entries before continuing.",
                invalid.len()
            ));
            return Err(ApprovalError::InvalidDistribution(invalid));
        }

        let confirmed = self
            .notifier
            .confirm(&format!(
                "Are you sure you want to {} {} selected entries?",
                verb,
                selected.len()
            ))
            .await;
        if !confirmed {
            return Ok(BulkOutcome::Cancelled);
        }

        let request = EntryActionRequest {
            entry_ids: selected.iter().map(|r| r.id.clone()).collect(),
            project: self.context.active_project(),
        };

        self.action_in_flight = true;
        let result = match action {
            BulkAction::Approve => self.client.approve_entries(&request).await,
            BulkAction::Reject => self.client.reject_entries(&request).await,
        };
        self.action_in_flight = false;

        match result {
            Ok(count) => {
                self.notifier
                    .success(&format!("Successfully {} {} entries.", done, count));
                self.refresh().await?;
                Ok(BulkOutcome::Completed { count })
            }
            Err(e) => {
                tracing::error!("bulk {} failed: {}", verb, e);
                self.notifier.error(&e.to_string());
                Err(e)
            }
        }
    }
}

#[async_trait]
impl<C: ApprovalClient, N: Notifier> ApprovalService for ApprovalServiceImpl<C, N> {
    fn hour_edited(&mut self, id: &EntryId, field: HourField, raw_input: &str) -> EditOutcome {
        self.grid.edit_hours(id, field, raw_input)
    }

    fn selection_changed(&mut self, id: &EntryId, selected: bool) {
        self.grid.set_selected(id, selected);
    }

    fn rows(&self) -> &[TimesheetEntry] {
        self.grid.rows()
    }

    fn action_in_flight(&self) -> bool {
        self.action_in_flight
    }

    async fn approve_selected(&mut self) -> Result<BulkOutcome, ApprovalError> {
        self.run_entry_action(BulkAction::Approve).await
    }

    async fn reject_selected(&mut self) -> Result<BulkOutcome, ApprovalError> {
        self.run_entry_action(BulkAction::Reject).await
    }

    async fn save_changes(&mut self) -> Result<BulkOutcome, ApprovalError> {
        if self.action_in_flight {
            self.notifier.info("Another action is still running.");
            return Ok(BulkOutcome::Busy);
        }

        let dirty = self.grid.dirty();
        if dirty.is_empty() {
            self.notifier.info("No changes to save.");
            return Ok(BulkOutcome::NoChanges);
        }

        if let Some(invalid) = invalid_ids(&dirty) {
            self.notifier.error(&format!(
                "Fix the hour distribution on {} entries before saving.",
                invalid.len()
            ));
            return Err(ApprovalError::InvalidDistribution(invalid));
        }

        let request = SaveChangesRequest {
            entries: dirty
                .iter()
                .map(|r| HourChange {
                    id: r.id.clone(),
                    billable_hours: r.billable_hours,
                    non_billable_hours: r.non_billable_hours,
                })
                .collect(),
            project: self.context.active_project(),
        };

        self.action_in_flight = true;
        let result = self.client.save_hour_changes(&request).await;
        self.action_in_flight = false;

        match result {
            Ok(count) => {
                self.notifier
                    .success(&format!("Successfully saved changes for {} entries.", count));
                self.refresh().await?;
                Ok(BulkOutcome::Completed { count })
            }
            Err(e) => {
                tracing::error!("bulk save failed: {}", e);
                self.notifier.error(&e.to_string());
                Err(e)
            }
        }
    }

    async fn refresh(&mut self) -> Result<(), ApprovalError> {
        match self.client.fetch_entries(&self.context.filters).await {
            Ok(rows) => {
                tracing::debug!("loaded {} approval rows", rows.len());
                self.grid.load_snapshot(rows);
                Ok(())
            }
            Err(e) => {
                tracing::error!("failed to refresh approval rows: {}", e);
                self.notifier.error(&e.to_string());
                Err(e)
            }
        }
    }
}

fn invalid_ids(rows: &[&TimesheetEntry]) -> Option<Vec<EntryId>> {
    let invalid = changeset::invalid_entries(rows);
    if invalid.is_empty() {
        None
    } else {
        Some(invalid.iter().map(|r| r.id.clone()).collect())
    }
}
