//! Tests for talk tag aggregation

mod aggregate_tests;

/// Captured (and shortened) talk API comments page for subject 48227121
pub const COMMENTS_PAGE_JSON: &str = r##"{
  "comments": [
    {
      "id": 301122,
      "user_login": "stargazer_42",
      "body": "Clear dips, #eclipsingbinary #eb",
      "tagging": {
        "#eclipsingbinary": {"id": 90011},
        "#eb": {"id": 90012}
      }
    },
    {
      "id": 301123,
      "user_login": "nightowl",
      "body": "looks like a #transit to me",
      "tagging": {
        "#transit": {"id": 90013}
      }
    }
  ],
  "meta": {
    "comments": {
      "page": 1,
      "page_count": 3,
      "count": 41
    }
  }
}"##;

/// Captured popular-tags page (shortened)
pub const POPULAR_TAGS_JSON: &str = r#"{
  "popular": [
    {"id": 1, "name": "eclipsingbinary", "taggable_id": 48227121, "taggable_type": "Subject"},
    {"id": 2, "name": "eclipsingbinary", "taggable_id": 48934888, "taggable_type": "Subject"}
  ],
  "meta": {
    "popular": {"page": 1, "page_count": 1931}
  }
}"#;

/// Captured subjects API response (shortened)
pub const SUBJECT_JSON: &str = r#"{
  "subjects": [
    {
      "id": "48227121",
      "metadata": {
        "!TIC ID": "233060434",
        "Sector": 26,
        "Magnitude": "11.17"
      },
      "locations": [
        {"image/png": "https://panoptes-uploads.zooniverse.org/subject_location/a53941ec-447a-4dea-b828-c027a118ef28.png"}
      ]
    }
  ]
}"#;
