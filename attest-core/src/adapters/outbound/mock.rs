//! Mock adapters for testing the approval workflow without a server.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::domain::{
    models::{EntryActionRequest, EntryId, HourChange, ReportFilters, SaveChangesRequest, TimesheetEntry},
    ports::outbound::{ApprovalClient, Notifier},
    ApprovalError,
};

/// A bulk call the mock client has seen, for test assertions.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    Fetch,
    Approve(Vec<EntryId>),
    Reject(Vec<EntryId>),
    Save(Vec<HourChange>),
}

/// Mock approval client backed by an in-memory snapshot.
///
/// `fetch_entries` always succeeds and returns the configured snapshot; a
/// configured failure applies to the three mutating calls only, so tests
/// can tell "action failed" apart from "reload failed".
#[derive(Clone, Default)]
pub struct MockApprovalClient {
    entries: Arc<RwLock<Vec<TimesheetEntry>>>,
    calls: Arc<RwLock<Vec<RecordedCall>>>,
    failure: Arc<RwLock<Option<String>>>,
}

impl MockApprovalClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the snapshot returned by every fetch.
    pub fn with_entries(self, entries: Vec<TimesheetEntry>) -> Self {
        *self.entries.write().unwrap() = entries;
        self
    }

    /// Make every mutating call fail with the given message.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        *self.failure.write().unwrap() = Some(message.into());
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.read().unwrap().clone()
    }

    /// Mutating calls only, fetches excluded.
    pub fn action_calls(&self) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(|c| !matches!(c, RecordedCall::Fetch))
            .collect()
    }

    pub fn fetch_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, RecordedCall::Fetch))
            .count()
    }

    fn record(&self, call: RecordedCall) {
        self.calls.write().unwrap().push(call);
    }

    fn fail_if_configured(&self) -> Result<(), ApprovalError> {
        match self.failure.read().unwrap().as_ref() {
            Some(message) => Err(ApprovalError::RemoteFailure(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ApprovalClient for MockApprovalClient {
    async fn fetch_entries(
        &self,
        _filters: &ReportFilters,
    ) -> Result<Vec<TimesheetEntry>, ApprovalError> {
        self.record(RecordedCall::Fetch);
        Ok(self.entries.read().unwrap().clone())
    }

    async fn approve_entries(&self, request: &EntryActionRequest) -> Result<usize, ApprovalError> {
        self.fail_if_configured()?;
        self.record(RecordedCall::Approve(request.entry_ids.clone()));
        Ok(request.entry_ids.len())
    }

    async fn reject_entries(&self, request: &EntryActionRequest) -> Result<usize, ApprovalError> {
        self.fail_if_configured()?;
        self.record(RecordedCall::Reject(request.entry_ids.clone()));
        Ok(request.entry_ids.len())
    }

    async fn save_hour_changes(&self, request: &SaveChangesRequest) -> Result<usize, ApprovalError> {
        self.fail_if_configured()?;
        self.record(RecordedCall::Save(request.entries.clone()));
        Ok(request.entries.len())
    }
}

/// Severity of a recorded notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// Mock notifier that records every message and answers confirmations with
/// a configured verdict (defaults to yes).
#[derive(Clone)]
pub struct MockNotifier {
    notices: Arc<RwLock<Vec<(NoticeLevel, String)>>>,
    confirm_answer: Arc<RwLock<bool>>,
    confirms: Arc<RwLock<Vec<String>>>,
}

impl Default for MockNotifier {
    fn default() -> Self {
        Self {
            notices: Arc::new(RwLock::new(Vec::new())),
            confirm_answer: Arc::new(RwLock::new(true)),
            confirms: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declining() -> Self {
        let notifier = Self::default();
        *notifier.confirm_answer.write().unwrap() = false;
        notifier
    }

    pub fn notices(&self) -> Vec<(NoticeLevel, String)> {
        self.notices.read().unwrap().clone()
    }

    pub fn confirm_prompts(&self) -> Vec<String> {
        self.confirms.read().unwrap().clone()
    }

    fn push(&self, level: NoticeLevel, message: &str) {
        self.notices
            .write()
            .unwrap()
            .push((level, message.to_string()));
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn confirm(&self, message: &str) -> bool {
        self.confirms.write().unwrap().push(message.to_string());
        *self.confirm_answer.read().unwrap()
    }

    fn info(&self, message: &str) {
        self.push(NoticeLevel::Info, message);
    }

    fn success(&self, message: &str) {
        self.push(NoticeLevel::Success, message);
    }

    fn error(&self, message: &str) {
        self.push(NoticeLevel::Error, message);
    }
}
