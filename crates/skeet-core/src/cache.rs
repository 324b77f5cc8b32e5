use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::ScrapeError;

/// Flat-file cache of raw scene records, one `<scene_id>.json` per scene.
///
/// The root directory is explicit configuration; the store never derives it
/// from the process environment. There is no locking and no
/// write-temp-then-rename: concurrent writers on the same scene ID may tear
/// a file, which is accepted for this single-shot, operator-invoked tool.
#[derive(Debug, Clone)]
pub struct CacheStore {
    root: PathBuf,
}

impl CacheStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, scene_id: &str) -> PathBuf {
        self.root.join(format!("{scene_id}.json"))
    }

    /// Load a previously persisted record, or `None` when the file does not
    /// exist. A file that exists but fails to parse is a fatal error, not a
    /// miss.
    pub fn load(&self, scene_id: &str) -> Result<Option<Value>, ScrapeError> {
        let path = self.path_for(scene_id);
        if !path.is_file() {
            return Ok(None);
        }
        let text = fs::read_to_string(&path)?;
        let record: Value = serde_json::from_str(&text)?;
        Ok(Some(record))
    }

    /// Persist a freshly fetched record with the original request URL
    /// attached as an `url` member.
    ///
    /// Creates the cache directory if absent (an existing directory is not
    /// an error). The record is written pretty-printed with non-ASCII text
    /// preserved literally.
    pub fn persist(&self, scene_id: &str, record: &Value, url: &str) -> Result<(), ScrapeError> {
        let Value::Object(members) = record else {
            return Err(ScrapeError::Record(
                "raw scene record is not a JSON object".into(),
            ));
        };

        fs::create_dir_all(&self.root)?;

        let mut members = members.clone();
        members.insert("url".into(), Value::String(url.into()));
        let pretty = serde_json::to_string_pretty(&Value::Object(members))?;
        fs::write(self.path_for(scene_id), pretty)?;
        Ok(())
    }
}
