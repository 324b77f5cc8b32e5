use serde::Deserialize;

/// Typed view of the upstream scene document.
///
/// Only the consumed members are modelled; everything else in the document
/// is carried alongside as raw JSON (see [`crate::cache::CacheStore`]) so
/// persistence round-trips the full record.
///
/// `site`, `models` and `tags` are required: the original consumer indexes
/// them unconditionally, so a record missing any of them is malformed.
/// Empty `models`/`tags` arrays are fine.
#[derive(Debug, Clone, Deserialize)]
pub struct SceneRecord {
    pub title: Option<String>,

    /// ISO-8601-like timestamp; only the calendar date is consumed.
    #[serde(rename = "publishedDate")]
    pub published_date: Option<String>,

    pub description: Option<String>,

    pub site: Site,

    pub models: Vec<Model>,

    pub tags: Vec<String>,

    pub img: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Site {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Model {
    #[serde(rename = "modelName")]
    pub name: String,
}

/// Where a resolved record came from; persistence only applies to
/// freshly fetched records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordSource {
    LocalCache,
    RemoteFetch,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_record() -> &'static str {
        r#"{
            "title": "T",
            "publishedDate": "2021-05-01T00:00:00Z",
            "description": "D",
            "site": {"name": "S", "id": 7},
            "models": [{"modelName": "M1", "modelId": "m-1"}],
            "tags": ["x", "y"],
            "img": "http://img/1.jpg",
            "id": "abc123"
        }"#
    }

    #[test]
    fn deserializes_full_record_ignoring_unknown_members() {
        let record: SceneRecord = serde_json::from_str(full_record()).unwrap();
        assert_eq!(record.title.as_deref(), Some("T"));
        assert_eq!(record.published_date.as_deref(), Some("2021-05-01T00:00:00Z"));
        assert_eq!(record.description.as_deref(), Some("D"));
        assert_eq!(record.site.name.as_deref(), Some("S"));
        assert_eq!(record.models.len(), 1);
        assert_eq!(record.models[0].name, "M1");
        assert_eq!(record.tags, vec!["x", "y"]);
        assert_eq!(record.img.as_deref(), Some("http://img/1.jpg"));
    }

    #[test]
    fn optional_members_may_be_absent() {
        let record: SceneRecord =
            serde_json::from_str(r#"{"site":{},"models":[],"tags":[]}"#).unwrap();
        assert!(record.title.is_none());
        assert!(record.published_date.is_none());
        assert!(record.description.is_none());
        assert!(record.site.name.is_none());
        assert!(record.models.is_empty());
        assert!(record.tags.is_empty());
        assert!(record.img.is_none());
    }

    #[test]
    fn missing_models_is_fatal() {
        let err = serde_json::from_str::<SceneRecord>(r#"{"site":{},"tags":[]}"#).unwrap_err();
        assert!(err.to_string().contains("models"));
    }

    #[test]
    fn missing_tags_is_fatal() {
        let err = serde_json::from_str::<SceneRecord>(r#"{"site":{},"models":[]}"#).unwrap_err();
        assert!(err.to_string().contains("tags"));
    }

    #[test]
    fn missing_site_is_fatal() {
        let err = serde_json::from_str::<SceneRecord>(r#"{"models":[],"tags":[]}"#).unwrap_err();
        assert!(err.to_string().contains("site"));
    }

    #[test]
    fn model_without_name_is_fatal() {
        let err = serde_json::from_str::<SceneRecord>(
            r#"{"site":{},"models":[{"modelId":"m-1"}],"tags":[]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("modelName"));
    }
}
