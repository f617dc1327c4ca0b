use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use crate::{
    domain::{
        ApproveEntriesResponse, EntryActionArgs, HourChangeEntry, ProjectSummary, RawApprovalRow,
        RejectEntriesResponse, ReportFilters, SaveChangesArgs, SaveHourChangesResponse,
    },
    AttestUrl, Credentials,
};

const APPROVE_METHOD: &str = "attest.api.timesheet_approval.approve_entries";
const REJECT_METHOD: &str = "attest.api.timesheet_approval.reject_entries";
const SAVE_CHANGES_METHOD: &str = "attest.api.timesheet_approval.save_hour_changes";
const APPROVAL_ENTRIES_METHOD: &str = "attest.api.timesheet_approval.get_approval_entries";
const PROJECT_SUMMARY_METHOD: &str = "attest.api.timesheet_approval.get_project_summary";

pub struct AttestClient {
    url: AttestUrl,
    credentials: Credentials,
}

impl AttestClient {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            url: AttestUrl::from_env(),
            credentials,
        }
    }

    pub fn with_url(url: AttestUrl, credentials: Credentials) -> Self {
        Self { url, credentials }
    }

    /// Invoke a whitelisted server method with JSON arguments.
    async fn call<A: Serialize, T: DeserializeOwned>(
        &self,
        method: &str,
        args: &A,
    ) -> Result<T, AttestRpcError> {
        let client = reqwest::Client::new();

        let resp = client
            .post(self.url.for_method(method).as_ref())
            .header("Cookie", self.credentials.as_cookie_header())
            .json(args)
            .send()
            .await
            .map_err(|e| AttestRpcError::ResponseError(e.to_string()))?;

        if resp.status() == 401 || resp.status() == 403 {
            return Err(AttestRpcError::Unauthorized);
        }

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(AttestRpcError::ServerError(format!("{}: {}", status, body)));
        }

        let envelope = resp.json::<RpcEnvelope<T>>().await.map_err(|e| {
            AttestRpcError::ParsingError(format!("Failed to parse response as JSON: {}", e))
        })?;

        Ok(envelope.message)
    }

    /// Fetch the approval report rows matching the given filters.
    pub async fn fetch_approval_rows(
        &self,
        filters: &ReportFilters,
    ) -> Result<Vec<RawApprovalRow>, AttestRpcError> {
        self.call(APPROVAL_ENTRIES_METHOD, filters).await
    }

    pub async fn approve_entries(
        &self,
        args: &EntryActionArgs,
    ) -> Result<ApproveEntriesResponse, AttestRpcError> {
        tracing::debug!("approving {} entries", args.entries.len());
        self.call(APPROVE_METHOD, args).await
    }

    pub async fn reject_entries(
        &self,
        args: &EntryActionArgs,
    ) -> Result<RejectEntriesResponse, AttestRpcError> {
        tracing::debug!("rejecting {} entries", args.entries.len());
        self.call(REJECT_METHOD, args).await
    }

    pub async fn save_hour_changes(
        &self,
        entries: Vec<HourChangeEntry>,
        project: Option<String>,
    ) -> Result<SaveHourChangesResponse, AttestRpcError> {
        let args = SaveChangesArgs { entries, project };
        tracing::debug!("saving hour changes for {} entries", args.entries.len());
        self.call(SAVE_CHANGES_METHOD, &args).await
    }

    pub async fn fetch_project_summary(
        &self,
        project: &str,
    ) -> Result<ProjectSummary, AttestRpcError> {
        #[derive(Serialize)]
        struct Args<'a> {
            project_name: &'a str,
        }

        self.call(PROJECT_SUMMARY_METHOD, &Args { project_name: project })
            .await
    }
}

#[derive(Error, Debug)]
pub enum AttestRpcError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("ResponseError: {0}")]
    ResponseError(String),
    #[error("ServerError: {0}")]
    ServerError(String),
    #[error("ParsingError: {0}")]
    ParsingError(String),
    #[error("Other: {0}")]
    Other(String),
}

/// The server wraps every whitelisted method result in a `message` field.
#[derive(Debug, Deserialize)]
pub struct RpcEnvelope<T> {
    pub message: T,
}
