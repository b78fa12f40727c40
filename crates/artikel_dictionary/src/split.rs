//! Quote-aware field splitting.
//!
//! Splits one dictionary line into trimmed fields. A quote character toggles
//! "inside quotes" and is dropped; a delimiter inside quotes is kept as text.
//! There is no escape for a quote inside a quoted field: `""` simply toggles
//! twice and contributes nothing.

/// Splits dictionary lines into fields.
pub struct RowSplitter;

impl RowSplitter {
    /// Field delimiter.
    pub const DELIMITER: char = ',';

    /// Quote character.
    pub const QUOTE: char = '"';

    /// Splits a line into trimmed fields.
    ///
    /// Always yields at least one field; an empty line yields `[""]`.
    #[must_use]
    pub fn split(line: &str) -> Vec<String> {
        let mut fields = Vec::new();
        let mut current = String::new();
        let mut in_quotes = false;

        for ch in line.chars() {
            match ch {
                Self::QUOTE => in_quotes = !in_quotes,
                Self::DELIMITER if !in_quotes => {
                    fields.push(current.trim().to_string());
                    current.clear();
                }
                _ => current.push(ch),
            }
        }

        // Flush final field
        fields.push(current.trim().to_string());
        fields
    }
}
