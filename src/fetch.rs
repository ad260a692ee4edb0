//! HTTP retrieval of the raw API collections.
//!
//! Thin collaborator around a blocking [`reqwest`] client. Failures are not
//! propagated as errors: any transport problem or non-success status is
//! logged and collapses to `None`, and the caller decides whether to go on.

use reqwest::blocking::Client;
use serde_json::Value;
use tracing::error;

use crate::resolve::resolve;

/// Default base URL of the Nobel Prize API, version 2.1.
pub const DEFAULT_BASE_URL: &str = "https://api.nobelprize.org/2.1";

/// Endpoint path of the laureates collection.
pub const LAUREATES_PATH: &str = "laureates";

/// Endpoint path of the nobel prizes collection.
pub const NOBEL_PRIZES_PATH: &str = "nobelPrizes";

pub struct ApiClient {
    http: Client,
}

impl Default for ApiClient {
    fn default() -> Self {
        ApiClient::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        ApiClient {
            http: Client::new(),
        }
    }

    /// Fetch one collection with a single bounded GET.
    ///
    /// Sends `limit` and `format=json` as query parameters. Any transport
    /// error, non-success status, or undecodable body is reported via the
    /// log and returned as `None` -- not retried, not propagated.
    pub fn fetch(&self, url: &str, limit: u64) -> Option<Value> {
        let response = self
            .http
            .get(url)
            .query(&[("limit", limit.to_string()), ("format", "json".into())])
            .send();

        let response = match response.and_then(|r| r.error_for_status()) {
            Ok(r) => r,
            Err(e) => {
                error!(url, "GET data error: {e}");
                return None;
            }
        };

        match response.json::<Value>() {
            Ok(payload) => Some(payload),
            Err(e) => {
                error!(url, "response decode error: {e}");
                None
            }
        }
    }

    /// Probe an endpoint's total record count from its `meta.count` field.
    ///
    /// Fetches a single record and reads the metadata, so a full fetch can be
    /// sized from the API's own count instead of a guessed limit.
    pub fn collection_size(&self, url: &str) -> Option<u64> {
        let payload = self.fetch(url, 1)?;
        resolve(&payload, "meta.count").and_then(Value::as_u64)
    }
}
