//! Tests for the columnar text record extractors
