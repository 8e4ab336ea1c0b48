use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

/// A portfolio entry as written by the create handler. Stored records have
/// no id, a project is identified by its position in the collection.
/// Reads go through the store as raw JSON, so this type is write-only.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub summary: String,
    pub tags: Vec<String>,
    #[serde(serialize_with = "atom")]
    pub created_at: DateTime<Utc>,
}

impl Project {
    pub fn new(title: String, summary: String, tags: Vec<String>) -> Self {
        Self {
            title,
            summary,
            tags,
            created_at: Utc::now(),
        }
    }
}

/// `2026-10-18T09:30:00+00:00`, second precision with an explicit offset.
fn atom<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Secs, false))
}
