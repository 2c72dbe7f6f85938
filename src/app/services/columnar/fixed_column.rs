//! Header-indexed field lookup for fixed-column reports
//!
//! ExoFOP's stellar-parameter block is a two-line record: a header line of
//! column labels and a values line where each token starts directly under
//! the first character of its label. Columns with no data are left blank,
//! so the next populated token belongs to a *later* column and must not be
//! picked up by accident.

/// A two-line fixed-column record: header labels over an aligned values line
///
/// The reader is generic over field names; callers look columns up by the
/// literal header label, so a new upstream column needs no code change here.
#[derive(Debug, Clone, Copy)]
pub struct FixedColumnRecord<'a> {
    /// Line of column labels at fixed character offsets
    pub header: &'a str,

    /// Data line aligned to the same offsets
    pub values: &'a str,
}

impl<'a> FixedColumnRecord<'a> {
    /// Create a record from a header line and an aligned values line
    pub fn new(header: &'a str, values: &'a str) -> Self {
        Self { header, values }
    }

    /// Read the value token aligned under `label`
    ///
    /// Returns `None` when the label is absent from the header line (the
    /// source did not report this field), when the values line ends before
    /// the label's offset, or when the cell under the label is blank. The
    /// token is the run of non-whitespace characters starting exactly at
    /// the label's offset; a blank cell never falls through to the next
    /// column's token.
    pub fn read_field(&self, label: &str) -> Option<String> {
        let offset = self.header.find(label)?;
        let rest = self.values.get(offset..)?;

        let token: String = rest
            .chars()
            .take_while(|c| !c.is_whitespace())
            .collect();

        if token.is_empty() { None } else { Some(token) }
    }

    /// Read the value under `label` and parse it as a float
    ///
    /// Absent or unparsable values yield `None`; this never errors.
    pub fn read_f64(&self, label: &str) -> Option<f64> {
        self.read_field(label)?.parse().ok()
    }
}
