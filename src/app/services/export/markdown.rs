//! Markdown listings of Zooniverse subjects
//!
//! Renders candidate lists for posting on talk boards: each entry links
//! the TIC to its ExoFOP page and the subject to its talk thread, with
//! the subject's light-curve thumbnail inlined below.

use crate::constants::{EXOFOP_TARGET_PAGE_URL, PHT_SUBJECT_URL, PHT_THUMBNAIL_URL};

/// One subject entry of a markdown listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectEntry {
    pub subject_id: u64,
    pub tic: String,

    /// UUID of the subject's hosted image; entries without one render
    /// without a thumbnail
    pub image_uuid: Option<String>,
}

/// Render one listing entry
pub fn subject_entry_md(entry: &SubjectEntry) -> String {
    let mut md = format!(
        "- TIC [{tic}]({exofop}?id={tic})  (Subject [{subject}]({talk}/{subject}))\n",
        tic = entry.tic,
        subject = entry.subject_id,
        exofop = EXOFOP_TARGET_PAGE_URL,
        talk = PHT_SUBJECT_URL,
    );

    if let Some(uuid) = &entry.image_uuid {
        md.push_str(&format!(
            "\n<br>![image]({}/{}.png)\n",
            PHT_THUMBNAIL_URL, uuid
        ));
    }

    md.push_str("\n---\n\n");
    md
}

/// Render a full listing
pub fn subject_listing_md(entries: &[SubjectEntry]) -> String {
    entries.iter().map(subject_entry_md).collect()
}
