//! GUID identifiers for ledger entity references.
//!
//! The store keys every entity by a 32-character lowercase hex string.
//! Wrapping it prevents raw strings leaking through repository APIs and
//! rejects malformed path parameters before they reach a query.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when parsing a GUID.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GuidError {
    /// The value is not 32 hexadecimal characters.
    #[error("Invalid GUID: {0}")]
    Invalid(String),
}

/// A 32-character hexadecimal entity identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Guid(String);

impl Guid {
    /// Parses a GUID, rejecting anything but 32 hex characters.
    ///
    /// Uppercase input is normalized to lowercase, matching how the
    /// store writes identifiers.
    ///
    /// # Errors
    ///
    /// Returns `GuidError::Invalid` for malformed input.
    pub fn parse(value: &str) -> Result<Self, GuidError> {
        if value.len() == 32 && value.chars().all(|c| c.is_ascii_hexdigit()) {
            Ok(Self(value.to_ascii_lowercase()))
        } else {
            Err(GuidError::Invalid(value.to_string()))
        }
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Guid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Guid {
    type Err = GuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Guid {
    type Error = GuidError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Guid> for String {
    fn from(guid: Guid) -> Self {
        guid.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "6e447eb1ad4c47dca4a18b20b6b6d3b0";

    #[test]
    fn test_parse_valid() {
        let guid = Guid::parse(SAMPLE).unwrap();
        assert_eq!(guid.as_str(), SAMPLE);
        assert_eq!(guid.to_string(), SAMPLE);
    }

    #[test]
    fn test_parse_normalizes_case() {
        let guid = Guid::parse(&SAMPLE.to_ascii_uppercase()).unwrap();
        assert_eq!(guid.as_str(), SAMPLE);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(Guid::parse("abc").is_err());
        assert!(Guid::parse(&"g".repeat(32)).is_err());
        assert!(Guid::parse("").is_err());
    }
}
