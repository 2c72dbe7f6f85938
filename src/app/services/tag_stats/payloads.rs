//! Wire types for the Zooniverse talk and subjects APIs
//!
//! Only the fields the harvester consumes are modeled; everything else in
//! the payloads is ignored by serde. The talk API versions its envelope
//! under a `meta` object keyed by the resource name, hence the nested
//! wrapper structs.

use serde::Deserialize;
use std::collections::BTreeMap;

/// One page of `GET /tags/popular`
#[derive(Debug, Clone, Deserialize)]
pub struct PopularTagsPage {
    pub popular: Vec<PopularTag>,
}

/// A popular-tag entry; `taggable_id` is the subject ID
#[derive(Debug, Clone, Deserialize)]
pub struct PopularTag {
    pub taggable_id: u64,
}

/// One page of `GET /comments` for a subject
#[derive(Debug, Clone, Deserialize)]
pub struct CommentsPage {
    pub comments: Vec<Comment>,
    pub meta: CommentsMeta,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentsMeta {
    pub comments: PageInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageInfo {
    pub page_count: u32,
}

/// A talk comment, reduced to the fields tag aggregation needs
///
/// `tagging` maps each hashtag in the comment body to its tag record;
/// only the keys matter here, so the values stay opaque JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    pub user_login: String,

    #[serde(default)]
    pub tagging: BTreeMap<String, serde_json::Value>,

    #[serde(default)]
    pub body: String,
}

/// Envelope of `GET /api/subjects/<id>`
#[derive(Debug, Clone, Deserialize)]
pub struct SubjectsPage {
    pub subjects: Vec<SubjectInfo>,
}

/// A subject record from the main Zooniverse API
#[derive(Debug, Clone, Deserialize)]
pub struct SubjectInfo {
    /// Upload metadata; TIC lives under the `!TIC ID` key, sector under
    /// `Sector`, both as free-form JSON values
    #[serde(default)]
    pub metadata: BTreeMap<String, serde_json::Value>,

    /// Hosted renderings of the subject, mime type to URL
    #[serde(default)]
    pub locations: Vec<BTreeMap<String, String>>,
}

impl SubjectInfo {
    /// A metadata value as text, with JSON string quoting removed
    pub fn metadata_text(&self, key: &str) -> Option<String> {
        let value = self.metadata.get(key)?;
        match value {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// TIC number the subject was generated from, when recorded
    pub fn tic(&self) -> Option<String> {
        self.metadata_text("!TIC ID")
    }

    /// TESS sector of the subject's light curve, when recorded
    pub fn sector(&self) -> Option<String> {
        self.metadata_text("Sector")
    }

    /// UUID of the subject's first hosted image, for thumbnail URLs
    pub fn image_uuid(&self) -> Option<String> {
        let url = self.locations.first()?.values().next()?;
        let file = url.rsplit('/').next()?;
        let (uuid, _ext) = file.rsplit_once('.')?;
        if uuid.is_empty() {
            None
        } else {
            Some(uuid.to_string())
        }
    }
}
