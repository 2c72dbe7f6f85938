use crate::app::services::tag_stats::{aggregate_tag_stats, canonical_tag, page_ranges};
use crate::app::services::tag_stats::payloads::Comment;
use std::collections::BTreeMap;

fn comment(user: &str, tags: &[&str]) -> Comment {
    let mut tagging = BTreeMap::new();
    for tag in tags {
        tagging.insert(tag.to_string(), serde_json::json!({}));
    }
    Comment {
        user_login: user.to_string(),
        tagging,
        body: String::new(),
    }
}

#[test]
fn test_canonical_tag_maps_synonyms() {
    assert_eq!(canonical_tag("#eb"), Some("like#eclipsingbinary"));
    assert_eq!(canonical_tag("#eclipsing-binary"), Some("like#eclipsingbinary"));
    assert_eq!(canonical_tag("#possibletransit"), Some("like#transit"));
    assert_eq!(canonical_tag("#candidate"), Some("like#transit"));
    assert_eq!(canonical_tag("#flare"), None);
}

#[test]
fn test_counts_are_per_user_not_per_comment() {
    // One user tagging #eb in three comments still counts once
    let comments = vec![
        comment("alice", &["#eb"]),
        comment("alice", &["#eb"]),
        comment("alice", &["#eb", "#eclipsingbinary"]),
        comment("bob", &["#eb"]),
    ];

    let stats = aggregate_tag_stats(48227121, &comments);

    assert_eq!(stats.subject_id, 48227121);
    assert_eq!(stats.num_comments, 4);
    assert_eq!(stats.count("#eb"), 2);
    assert_eq!(stats.count("#eclipsingbinary"), 1);
    // Both raw forms roll up to one canonical vote per user
    assert_eq!(stats.count("like#eclipsingbinary"), 2);
}

#[test]
fn test_raw_and_canonical_tags_both_counted() {
    let comments = vec![comment("carol", &["#possible", "#flare"])];

    let stats = aggregate_tag_stats(30253517, &comments);

    assert_eq!(stats.count("#possible"), 1);
    assert_eq!(stats.count("like#transit"), 1);
    assert_eq!(stats.count("#flare"), 1);
    assert_eq!(stats.count("like#eclipsingbinary"), 0);
}

#[test]
fn test_no_comments_yields_empty_stats() {
    let stats = aggregate_tag_stats(44564164, &[]);

    assert_eq!(stats.num_comments, 0);
    assert!(stats.tag_counts.is_empty());
}

#[test]
fn test_page_ranges_expands_pairs() {
    let pages = page_ranges(&[11, 14, 311, 313]).unwrap();
    assert_eq!(pages, vec![11, 12, 13, 311, 312]);
}

#[test]
fn test_page_ranges_rejects_odd_boundaries() {
    assert!(page_ranges(&[11]).is_err());
    assert!(page_ranges(&[]).is_err());
}
