mod attest_url;
mod auth;
mod client;
pub mod domain;

pub use attest_url::AttestUrl;
pub use auth::*;
pub use client::*;
