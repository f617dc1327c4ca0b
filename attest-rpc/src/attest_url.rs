use std::env;

#[derive(Debug)]
pub struct AttestUrl(String);

impl AsRef<str> for AttestUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AttestUrl {
    /// Creates a new AttestUrl from the environment variable `ATTEST_SERVER_URL`.
    pub fn from_env() -> Self {
        Self(env::var("ATTEST_SERVER_URL").expect("ATTEST_SERVER_URL must be set in env"))
    }

    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Append the given path to the URL.
    pub fn append_path(&self, path: &str) -> Self {
        let trimmed_url = self.0.trim_end_matches('/');
        let trimmed_path = path.trim_start_matches('/');
        Self(format!("{}/{}", trimmed_url, trimmed_path))
    }

    /// URL of the whitelisted server method with the given dotted path.
    pub fn for_method(&self, method: &str) -> Self {
        self.append_path("/api/method").append_path(method)
    }
}
