//! Zooniverse talk tag aggregation
//!
//! Planet Hunters TESS volunteers annotate subjects with hashtags in talk
//! comments. This module pulls the comments for a subject through the talk
//! API and aggregates tag usage per subject, counting each tag once per
//! user so a single enthusiastic commenter cannot dominate the counts.
//! Synonymous hashtags additionally contribute to a canonical `like#...`
//! tag so eclipsing-binary and transit votes can be compared directly.

pub mod payloads;

#[cfg(test)]
mod tests;

pub use payloads::{Comment, CommentsPage, PopularTagsPage, SubjectsPage};

use crate::Result;
use crate::app::adapters::http::HttpClient;
use crate::app::models::SubjectTagStats;
use crate::constants::{
    EB_SYNONYMS, LIKE_EB_TAG, LIKE_TRANSIT_TAG, TALK_API_URL, TRANSIT_SYNONYMS, ZOONIVERSE_API_URL,
};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::debug;

/// Canonical `like#...` form of a hashtag, if it has one
pub fn canonical_tag(tag: &str) -> Option<&'static str> {
    if EB_SYNONYMS.contains(&tag) {
        Some(LIKE_EB_TAG)
    } else if TRANSIT_SYNONYMS.contains(&tag) {
        Some(LIKE_TRANSIT_TAG)
    } else {
        None
    }
}

/// Aggregate tag statistics over a subject's comments
///
/// Each user contributes at most one count per tag regardless of how many
/// comments carried it. Canonical forms are counted alongside the raw
/// tags, so `tag_counts` holds both `#eb` and `like#eclipsingbinary`.
pub fn aggregate_tag_stats(subject_id: u64, comments: &[Comment]) -> SubjectTagStats {
    let mut user_tags: HashMap<&str, BTreeSet<&str>> = HashMap::new();

    for comment in comments {
        let tags = user_tags.entry(comment.user_login.as_str()).or_default();
        for tag in comment.tagging.keys() {
            tags.insert(tag);
            if let Some(canonical) = canonical_tag(tag) {
                tags.insert(canonical);
            }
        }
    }

    let mut tag_counts: BTreeMap<String, u32> = BTreeMap::new();
    for tags in user_tags.values() {
        for tag in tags {
            *tag_counts.entry(tag.to_string()).or_insert(0) += 1;
        }
    }

    SubjectTagStats {
        subject_id,
        tag_counts,
        num_comments: comments.len(),
    }
}

/// Subject IDs from one page of the popular-tags listing for `tag`
pub async fn subject_ids_of_tag(
    client: &HttpClient,
    section: &str,
    tag: &str,
    page: u32,
) -> Result<Vec<u64>> {
    let url = format!(
        "{}/tags/popular?http_cache=true&taggable_type=Subject&section={}&name={}&page={}",
        TALK_API_URL, section, tag, page
    );
    let response: PopularTagsPage = client.fetch_json(&url).await?;

    Ok(response
        .popular
        .into_iter()
        .map(|entry| entry.taggable_id)
        .collect())
}

/// All talk comments for a subject, following pagination
pub async fn comments_of_subject(
    client: &HttpClient,
    section: &str,
    subject_id: u64,
) -> Result<Vec<Comment>> {
    let first = comment_page(client, section, subject_id, 1).await?;
    let num_pages = first.meta.comments.page_count;
    debug!("#pages for subject {}: {}", subject_id, num_pages);

    let mut comments = first.comments;
    for page in 2..=num_pages {
        let current = comment_page(client, section, subject_id, page).await?;
        comments.extend(current.comments);
    }

    Ok(comments)
}

async fn comment_page(
    client: &HttpClient,
    section: &str,
    subject_id: u64,
    page: u32,
) -> Result<CommentsPage> {
    let url = format!(
        "{}/comments?http_cache=true&section={}&focus_type=Subject&sort=-created_at&focus_id={}&page={}",
        TALK_API_URL, section, subject_id, page
    );
    client.fetch_json(&url).await
}

/// Fetch and aggregate the tag statistics for one subject
pub async fn tag_stats_of_subject(
    client: &HttpClient,
    section: &str,
    subject_id: u64,
) -> Result<SubjectTagStats> {
    let comments = comments_of_subject(client, section, subject_id).await?;
    let stats = aggregate_tag_stats(subject_id, &comments);
    debug!(
        "{}: \t{}",
        subject_id,
        serde_json::to_string(&stats.tag_counts).unwrap_or_default()
    );
    Ok(stats)
}

/// Tag statistics for every subject on the given popular-tag pages
pub async fn tag_stats_of_pages(
    client: &HttpClient,
    section: &str,
    tag: &str,
    pages: &[u32],
) -> Result<Vec<SubjectTagStats>> {
    let mut results = Vec::new();
    for &page in pages {
        let subject_ids = subject_ids_of_tag(client, section, tag, page).await?;
        for subject_id in subject_ids {
            results.push(tag_stats_of_subject(client, section, subject_id).await?);
        }
    }
    Ok(results)
}

/// Expand `start..end` page-range pairs into a flat page list
///
/// Errors when the boundaries do not come in pairs, since a stray value
/// silently crawling to page 0 would be worse than failing fast.
pub fn page_ranges(boundaries: &[u32]) -> Result<Vec<u32>> {
    if boundaries.is_empty() || boundaries.len() % 2 != 0 {
        return Err(crate::Error::configuration(
            "page ranges must be start / end-exclusive pairs",
        ));
    }

    let mut pages = Vec::new();
    for pair in boundaries.chunks(2) {
        pages.extend(pair[0]..pair[1]);
    }
    Ok(pages)
}

/// Subject record (metadata and image locations) from the Zooniverse API
///
/// `None` when the API returned an empty subject list for the ID.
pub async fn subject_info(
    client: &HttpClient,
    subject_id: u64,
) -> Result<Option<payloads::SubjectInfo>> {
    let url = format!(
        "{}/subjects/{}?http_cache=true",
        ZOONIVERSE_API_URL, subject_id
    );
    let mut response: SubjectsPage = client.fetch_json(&url).await?;

    if response.subjects.is_empty() {
        return Ok(None);
    }
    Ok(Some(response.subjects.remove(0)))
}
