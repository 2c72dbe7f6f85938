//! Tests for CSV, text-dump, and markdown rendering
