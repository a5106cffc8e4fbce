//! Have I Been Pwned range API client.
//!
//! Implements the k-anonymity protocol: only the first five hex characters
//! of the password's SHA-1 digest are sent to the remote service, which
//! answers with every known suffix sharing that prefix. The full password
//! and the full hash never leave the process.

use std::time::Duration;

use async_trait::async_trait;
use sha1::{Digest, Sha1};
use tracing::instrument;

use crate::error::BreachError;

const DEFAULT_BASE_URL: &str = "https://api.pwnedpasswords.com";
const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Outcome of a breach lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreachReport {
    /// Whether the password appears in the breach corpus.
    pub breached: bool,
    /// How many times it appears, 0 when not breached.
    pub breach_count: u64,
}

/// Trait for compromised-password directories.
#[async_trait]
pub trait BreachDirectory: Send + Sync {
    /// Human-readable directory name (e.g. "hibp").
    fn name(&self) -> &str;

    /// Look up a password. Errors are recoverable by design: the caller
    /// degrades to "not breached" rather than failing the request.
    async fn lookup(&self, password: &str) -> Result<BreachReport, BreachError>;
}

/// HIBP-compatible range API client.
pub struct HibpClient {
    base_url: String,
    timeout_secs: u64,
    client: reqwest::Client,
}

impl HibpClient {
    pub fn new(base_url: Option<String>) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(base_url: Option<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to build HTTP client");

        Self {
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout_secs: timeout.as_secs(),
            client,
        }
    }

    /// Scan a range response body for an exact suffix match.
    fn scan_range(body: &str, suffix: &str) -> Result<BreachReport, BreachError> {
        for line in body.lines() {
            if line.is_empty() {
                continue;
            }
            let (candidate, count) = line
                .split_once(':')
                .ok_or_else(|| BreachError::Malformed(format!("missing ':' in line {line:?}")))?;
            if candidate == suffix {
                let breach_count = count
                    .trim()
                    .parse::<u64>()
                    .map_err(|e| BreachError::Malformed(format!("bad count {count:?}: {e}")))?;
                return Ok(BreachReport {
                    breached: true,
                    breach_count,
                });
            }
        }
        Ok(BreachReport::default())
    }
}

/// Uppercase-hex SHA-1 of the password, split into the 5-character range
/// prefix and 35-character suffix.
pub fn hash_prefix_suffix(password: &str) -> (String, String) {
    let digest = Sha1::digest(password.as_bytes());
    let hex = hex::encode_upper(digest);
    (hex[..5].to_string(), hex[5..].to_string())
}

#[async_trait]
impl BreachDirectory for HibpClient {
    fn name(&self) -> &str {
        "hibp"
    }

    #[instrument(skip_all, fields(directory = self.name()))]
    async fn lookup(&self, password: &str) -> Result<BreachReport, BreachError> {
        let (prefix, suffix) = hash_prefix_suffix(password);

        let response = self
            .client
            .get(format!("{}/range/{prefix}", self.base_url))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    BreachError::Timeout(self.timeout_secs)
                } else {
                    BreachError::Network(e.to_string())
                }
            })?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(BreachError::UnexpectedStatus(status));
        }

        let body = response
            .text()
            .await
            .map_err(|e| BreachError::Network(e.to_string()))?;

        Self::scan_range(&body, &suffix)
    }
}
