use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde_json::Value;

use crate::error::ScrapeError;
use crate::{API_ENDPOINT, FAILURE_LOG_FILE, USER_AGENT, WEB_ORIGIN};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(3);
const READ_TIMEOUT: Duration = Duration::from_secs(5);

/// Client for the platform's search-index API, backed by `ureq`.
///
/// One GET per scene. HTTP error statuses are not transport failures: the
/// index answers 404 with a `{"found": false}` body for unknown IDs, so
/// every received body flows into the `found` check. Only transport-level
/// failures (DNS, refused connection, timeout) are reported as
/// [`ScrapeError::Network`], after a best-effort write of the failure log.
pub struct ApiClient {
    agent: ureq::Agent,
    endpoint: String,
    failure_log: PathBuf,
}

impl ApiClient {
    /// Client against the production endpoint, logging failures to
    /// [`FAILURE_LOG_FILE`] in the working directory.
    pub fn new() -> Self {
        Self::with_endpoint(API_ENDPOINT)
    }

    /// Client against an alternate endpoint (loopback servers in tests).
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(CONNECT_TIMEOUT)
            .timeout_read(READ_TIMEOUT)
            .build();
        Self {
            agent,
            endpoint: endpoint.into(),
            failure_log: PathBuf::from(FAILURE_LOG_FILE),
        }
    }

    /// Redirect the transport-failure log away from the working directory.
    pub fn failure_log(mut self, path: impl Into<PathBuf>) -> Self {
        self.failure_log = path.into();
        self
    }

    pub fn scene_url(&self, scene_id: &str) -> String {
        format!("{}/{}", self.endpoint, scene_id)
    }

    /// Fetch the raw record for a scene ID.
    ///
    /// Returns the `_source` member of the index response. `found: false`
    /// maps to [`ScrapeError::NotFound`]; a body without a boolean `found`
    /// is a malformed record.
    pub fn fetch_scene(&self, scene_id: &str) -> Result<Value, ScrapeError> {
        let url = self.scene_url(scene_id);
        let result = self
            .agent
            .get(&url)
            .set("User-Agent", USER_AGENT)
            .set("Origin", WEB_ORIGIN)
            .set("Referer", &format!("{WEB_ORIGIN}/"))
            .call();

        let response = match result {
            Ok(response) => response,
            // Non-2xx still carries the body we need.
            Err(ureq::Error::Status(_, response)) => response,
            Err(ureq::Error::Transport(transport)) => {
                self.write_failure_log(scene_id, None);
                return Err(ScrapeError::Network(transport.to_string()));
            }
        };

        let body = match response.into_string() {
            Ok(body) => body,
            Err(e) => {
                self.write_failure_log(scene_id, None);
                return Err(ScrapeError::Network(format!(
                    "failed to read response body: {e}"
                )));
            }
        };

        extract_record(&body)
    }

    /// Best-effort: a failed log write must not mask the network error.
    fn write_failure_log(&self, scene_id: &str, body: Option<&str>) {
        let text = format!(
            "Scene ID: {scene_id}\nRequest:\n{}",
            body.unwrap_or("no response received")
        );
        let _ = fs::write(&self.failure_log, text);
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Interpret an index response body: check `found`, pull out `_source`.
fn extract_record(body: &str) -> Result<Value, ScrapeError> {
    let mut response: Value = serde_json::from_str(body)
        .map_err(|e| ScrapeError::Record(format!("API response is not valid JSON: {e}")))?;

    let found = response
        .get("found")
        .and_then(Value::as_bool)
        .ok_or_else(|| ScrapeError::Record("API response has no boolean `found` member".into()))?;

    if !found {
        return Err(ScrapeError::NotFound);
    }

    match response.get_mut("_source") {
        Some(source) => Ok(source.take()),
        None => Err(ScrapeError::Record(
            "API response has `found: true` but no `_source` member".into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_url_appends_id_to_endpoint() {
        let client = ApiClient::new();
        assert_eq!(
            client.scene_url("abc123"),
            "https://store2.psmcdn.net/ts-elastic-d5cat0jl5o-videoscontent/_doc/abc123"
        );
    }

    #[test]
    fn extract_record_returns_source_when_found() {
        let record =
            extract_record(r#"{"found": true, "_source": {"title": "T"}}"#).unwrap();
        assert_eq!(record["title"], "T");
    }

    #[test]
    fn extract_record_maps_found_false_to_not_found() {
        let err = extract_record(r#"{"found": false}"#).unwrap_err();
        assert!(matches!(err, ScrapeError::NotFound));
    }

    #[test]
    fn extract_record_rejects_missing_found() {
        let err = extract_record(r#"{"_source": {}}"#).unwrap_err();
        assert!(matches!(err, ScrapeError::Record(_)));
    }

    #[test]
    fn extract_record_rejects_non_boolean_found() {
        let err = extract_record(r#"{"found": "yes"}"#).unwrap_err();
        assert!(matches!(err, ScrapeError::Record(_)));
    }

    #[test]
    fn extract_record_rejects_found_without_source() {
        let err = extract_record(r#"{"found": true}"#).unwrap_err();
        assert!(matches!(err, ScrapeError::Record(_)));
    }

    #[test]
    fn extract_record_rejects_garbage_body() {
        let err = extract_record("<html>503</html>").unwrap_err();
        assert!(matches!(err, ScrapeError::Record(_)));
    }
}
