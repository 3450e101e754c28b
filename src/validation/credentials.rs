//! Credential fixture
//!
//! Holds the credential the validator compares passwords against.

/// Fixed credential - in production this would be a lookup against a
/// proper credential store.
pub(crate) const EXPECTED_PASSWORD: &str = "abcABC#123";
