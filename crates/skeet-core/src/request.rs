use serde::Deserialize;

use crate::SCENE_PATH_MARKER;
use crate::error::ScrapeError;

/// The single JSON document accepted on stdin.
#[derive(Debug, Clone, Deserialize)]
pub struct ScrapeRequest {
    #[serde(default)]
    url: String,
}

impl ScrapeRequest {
    /// Parse and validate the stdin payload.
    ///
    /// Rejects anything that is not JSON, lacks a `url`, or whose URL does
    /// not point at the platform's scene path.
    pub fn from_json(input: &str) -> Result<Self, ScrapeError> {
        let request: ScrapeRequest = serde_json::from_str(input)
            .map_err(|e| ScrapeError::Input(format!("stdin is not a valid JSON request: {e}")))?;

        if request.url.is_empty() {
            return Err(ScrapeError::Input(
                "you need to set the URL (e.g. teamskeet.com/movies/*****)".into(),
            ));
        }
        if !request.url.contains(SCENE_PATH_MARKER) {
            return Err(ScrapeError::Input(
                "the URL is not a Teamskeet URL (e.g. teamskeet.com/movies/*****)".into(),
            ));
        }

        Ok(request)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// The scene ID is the trailing path segment after the last `/`.
    pub fn scene_id(&self) -> Result<&str, ScrapeError> {
        let id = self.url.rsplit('/').next().unwrap_or_default();
        if id.is_empty() {
            return Err(ScrapeError::Input(format!(
                "could not derive a scene ID from `{}`; is the end of the URL correct?",
                self.url
            )));
        }
        Ok(id)
    }
}
