use chrono::NaiveDate;
use serde::Serialize;

use crate::error::ScrapeError;
use crate::record::SceneRecord;

/// The fixed-shape output record, serialized as a single JSON line.
///
/// Member order is the output contract. Every member serializes even when
/// null, except `date`, which is omitted when the upstream record carries
/// no usable `publishedDate`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NormalizedScene {
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub details: Option<String>,
    pub studio: Studio,
    pub performers: Vec<Performer>,
    pub tags: Vec<Tag>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Studio {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Performer {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
}

/// Project an upstream record into the output shape.
///
/// A pure element-wise mapping: missing optional members stay absent, and
/// `models`/`tags` keep their source order. The only computation is the
/// calendar-date reformat.
pub fn normalize(record: &SceneRecord) -> Result<NormalizedScene, ScrapeError> {
    let date = match record.published_date.as_deref() {
        None | Some("") => None,
        Some(stamp) => Some(calendar_date(stamp)?),
    };

    Ok(NormalizedScene {
        title: record.title.clone(),
        date,
        details: record.description.clone(),
        studio: Studio {
            name: record.site.name.clone(),
        },
        performers: record
            .models
            .iter()
            .map(|m| Performer {
                name: m.name.clone(),
            })
            .collect(),
        tags: record
            .tags
            .iter()
            .map(|t| Tag { name: t.clone() })
            .collect(),
        image: record.img.clone(),
    })
}

/// Reduce an ISO-8601-like timestamp to its `YYYY-MM-DD` calendar date.
///
/// Time-of-day is discarded by cutting at the first `T`; the remainder must
/// parse as a real calendar date.
fn calendar_date(stamp: &str) -> Result<String, ScrapeError> {
    let date_part = stamp.split_once('T').map_or(stamp, |(date, _)| date);
    let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(|e| {
        ScrapeError::Record(format!("unrecognised publishedDate `{stamp}`: {e}"))
    })?;
    Ok(date.format("%Y-%m-%d").to_string())
}
