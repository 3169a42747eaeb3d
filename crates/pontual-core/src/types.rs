use crate::{
    Result,
    constants::{MAX_TAG_LENGTH, MIN_TAG_LENGTH},
    error::Error,
};
use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use subtle::ConstantTimeEq;

/// Opaque proximity tag identifier (3-32 characters)
///
/// The value read from a card is used only as a lookup key and is never
/// parsed for content.
///
/// # Security
/// This type implements constant-time comparison to prevent timing attacks
/// when comparing tag identifiers during identity resolution.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct TagId(String);

impl TagId {
    /// Create a new tag identifier with validation.
    ///
    /// The value is normalized (trimmed and converted to uppercase) before
    /// validation.
    ///
    /// # Errors
    /// Returns `Error::InvalidTagFormat` if:
    /// - The identifier length is not between 3-32 characters
    /// - The identifier contains non-ASCII characters
    pub fn new(value: &str) -> Result<Self> {
        // Normalize: trim and uppercase
        let value = value.trim().to_uppercase();

        let len = value.len();
        if !(MIN_TAG_LENGTH..=MAX_TAG_LENGTH).contains(&len) {
            return Err(Error::InvalidTagFormat(format!(
                "Tag identifier must be {MIN_TAG_LENGTH}-{MAX_TAG_LENGTH} chars, got {len}"
            )));
        }

        // Ensure ASCII only
        if !value.is_ascii() {
            return Err(Error::InvalidTagFormat(
                "Tag identifier must be ASCII".to_string(),
            ));
        }

        Ok(TagId(value))
    }

    /// Get the tag identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TagId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        TagId::new(s)
    }
}

/// Constant-time comparison implementation for TagId
///
/// This prevents timing attacks by ensuring comparison takes the same time
/// regardless of where the strings differ.
impl PartialEq for TagId {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_bytes().ct_eq(other.0.as_bytes()).into()
    }
}

/// Hash implementation for TagId
///
/// Implements standard hashing for use in hash-based collections.
impl std::hash::Hash for TagId {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

/// Derive the attendance day key for a scan instant.
///
/// Attendance records are keyed by the system-local calendar date, distinct
/// from the instant itself which carries full time-of-day precision. Two
/// scans on either side of local midnight land on different day keys even
/// when their UTC dates agree.
#[must_use]
pub fn work_date(instant: &DateTime<Utc>) -> NaiveDate {
    instant.with_timezone(&Local).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    #[case("136205211224", "136205211224")]
    #[case("  a1b2c3d4  ", "A1B2C3D4")]
    #[case("123", "123")]
    fn test_tag_id_valid(#[case] input: &str, #[case] expected: &str) {
        let tag = TagId::new(input).unwrap();
        assert_eq!(tag.as_str(), expected);
    }

    #[rstest]
    #[case("12")] // too short
    #[case("123456789012345678901234567890123")] // > 32 chars
    #[case("café4567")] // non-ASCII
    fn test_tag_id_invalid(#[case] input: &str) {
        let result = TagId::new(input);
        assert!(result.is_err());
    }

    #[test]
    fn test_tag_id_from_str() {
        let tag: TagId = "04abcdef".parse().unwrap();
        assert_eq!(tag.as_str(), "04ABCDEF");
    }

    #[test]
    fn test_tag_id_equality_is_case_normalized() {
        let a = TagId::new("a1b2c3").unwrap();
        let b = TagId::new("A1B2C3").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_work_date_uses_local_calendar() {
        let instant = Local.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap();
        let utc = instant.with_timezone(&Utc);
        assert_eq!(work_date(&utc), NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
    }
}
