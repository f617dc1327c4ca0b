use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Client;
use serde::Serialize;
use std::time::SystemTime;
use thiserror::Error;

use crate::AttestUrl;

/// Session credentials for the approval server.
///
/// The server issues a `sid` session cookie on login; every subsequent RPC
/// call sends it back as a cookie header.
#[derive(Debug, Serialize)]
pub struct Credentials {
    pub username: Option<String>,
    pub session_id: String,
    pub valid_until: Option<SystemTime>,
}

#[derive(Error, Debug)]
pub enum LoginError {
    #[error("login request failed: {0}")]
    RequestFailed(String),
    #[error("invalid username or password")]
    InvalidLogin,
    #[error("session cookie not found in login response")]
    MissingSessionCookie,
}

impl Credentials {
    pub async fn new(url: &AttestUrl, username: &str, password: &str) -> Result<Self, LoginError> {
        let login_url = url.for_method("login");

        let client = Client::new();

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("attest-rpc"));

        let resp = client
            .post(login_url.as_ref())
            .headers(headers)
            .form(&[("usr", username), ("pwd", password)])
            .send()
            .await
            .map_err(|e| LoginError::RequestFailed(e.to_string()))?;

        if resp.status() == 401 || resp.status() == 403 {
            return Err(LoginError::InvalidLogin);
        }

        let session_cookie = resp
            .cookies()
            .find(|c| c.name() == "sid")
            .ok_or(LoginError::MissingSessionCookie)?;

        Ok(Credentials {
            username: Some(username.to_string()),
            session_id: session_cookie.value().to_string(),
            valid_until: session_cookie.expires(),
        })
    }

    /// Build credentials from an already established session id.
    pub fn from_session_id(session_id: impl Into<String>) -> Self {
        Self {
            username: None,
            session_id: session_id.into(),
            valid_until: None,
        }
    }

    pub fn is_expired(&self) -> bool {
        match self.valid_until {
            Some(valid_until) => valid_until < SystemTime::now(),
            None => false,
        }
    }

    pub fn as_cookie_header(&self) -> String {
        format!("sid={}; Secure; SameSite=Lax", self.session_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_header_carries_session_id() {
        let credentials = Credentials::from_session_id("abc123");
        assert_eq!(credentials.as_cookie_header(), "sid=abc123; Secure; SameSite=Lax");
    }

    #[test]
    fn session_without_expiry_is_not_expired() {
        let credentials = Credentials::from_session_id("abc123");
        assert!(!credentials.is_expired());
    }
}
