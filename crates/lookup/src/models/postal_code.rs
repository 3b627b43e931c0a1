use std::fmt;

use crate::errors::InputError;

/// Separator between the two numeric groups of a CEP (`XXXXX-XXX`).
pub const SEPARATOR: char = '-';

/// Postal code lookup key.
///
/// Built from raw user input and immutable afterwards. Only the presence of
/// the separator is checked; digit count and pattern are left to providers.
/// Each provider picks the representation it expects via [`hyphenated`](Self::hyphenated)
/// or [`digits`](Self::digits).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PostalCode {
    raw: String,
}

impl PostalCode {
    /// Parse a raw CEP such as `01310-100`.
    pub fn parse(raw: &str) -> Result<Self, InputError> {
        if !raw.contains(SEPARATOR) {
            return Err(InputError::MissingSeparator);
        }
        Ok(Self {
            raw: raw.to_string(),
        })
    }

    /// The CEP exactly as entered, e.g. `01310-100`.
    pub fn hyphenated(&self) -> &str {
        &self.raw
    }

    /// The CEP with every separator removed, e.g. `01310100`.
    pub fn digits(&self) -> String {
        self.raw.replace(SEPARATOR, "")
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
