//! Multi-strategy SIMBAD record parsing
//!
//! The response shapes are mutually exclusive in practice, but the
//! strategies are still tried in a fixed order (single object, then list,
//! then not-found) so a snippet that happens to satisfy a looser pattern
//! cannot be misclassified.

use super::{object_list, single_object};
use crate::app::models::SimbadMeta;
use crate::constants::SIMBAD_NOT_FOUND_MARKER;

/// Outcome of parsing one SIMBAD ASCII response
///
/// `Unrecognized` is a first-class outcome rather than an error: the caller
/// logs a [`diagnostic_excerpt`] and substitutes an empty record so a batch
/// run continues past the bad item.
#[derive(Debug, Clone, PartialEq)]
pub enum SimbadOutcome {
    /// Exactly one object matched; aliases available, distance not defined
    SingleObject(SimbadMeta),

    /// Several objects matched; fields from the closest (first) row
    ObjectList(SimbadMeta),

    /// SIMBAD explicitly reported no object at the coordinate
    NotFound,

    /// None of the known shapes matched
    Unrecognized,
}

/// An ordered parse attempt: `None` means "not this shape, try the next"
type Strategy = fn(&str) -> Option<SimbadOutcome>;

/// Strategies in fallback order; the first non-`None` result wins
const STRATEGIES: &[Strategy] = &[try_single_object, try_object_list, try_not_found];

/// Parse a SIMBAD ASCII response into a tagged outcome
///
/// Total over arbitrary input: malformed text yields `Unrecognized`, never
/// an error or panic.
pub fn parse_record(text: &str) -> SimbadOutcome {
    STRATEGIES
        .iter()
        .find_map(|strategy| strategy(text))
        .unwrap_or(SimbadOutcome::Unrecognized)
}

fn try_single_object(text: &str) -> Option<SimbadOutcome> {
    single_object::parse(text).map(SimbadOutcome::SingleObject)
}

fn try_object_list(text: &str) -> Option<SimbadOutcome> {
    object_list::parse(text).map(SimbadOutcome::ObjectList)
}

fn try_not_found(text: &str) -> Option<SimbadOutcome> {
    text.lines()
        .any(|line| line.starts_with(SIMBAD_NOT_FOUND_MARKER))
        .then_some(SimbadOutcome::NotFound)
}

/// First ~100 characters of a response with line breaks made visible,
/// for logging responses that failed to parse
pub fn diagnostic_excerpt(text: &str) -> String {
    let head: String = text.chars().take(100).collect();
    head.replace('\r', "")
        .replace('\n', " {\\n} ")
        .replace('\t', " {\\t} ")
}
