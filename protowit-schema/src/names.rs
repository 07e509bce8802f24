//! Fully-qualified entity names.
//!
//! Every entity in a schema is identified by a dot-separated
//! fully-qualified name such as `acme.geo.Point`. The full name is the
//! identity used by the entity pool and by the generation registry; the
//! last segment (the short name) is what appears in generated WIT text.

use crate::error::NameError;
use std::fmt;
use std::str::FromStr;

/// Fully-qualified name of a schema entity.
///
/// Globally unique within one schema. Segment rules follow protobuf
/// identifiers: each dot-separated segment starts with a letter or
/// underscore and continues with letters, digits, or underscores.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FullName(String);

impl FullName {
    /// Parses a fully-qualified name, validating its segments.
    ///
    /// # Errors
    /// Returns `NameError` if the name is empty or contains an empty or
    /// malformed segment.
    pub fn parse(name: &str) -> Result<Self, NameError> {
        if name.is_empty() {
            return Err(NameError::Empty);
        }
        for segment in name.split('.') {
            if segment.is_empty() {
                return Err(NameError::EmptySegment {
                    name: name.to_string(),
                });
            }
            if !is_identifier(segment) {
                return Err(NameError::InvalidSegment {
                    name: name.to_string(),
                    segment: segment.to_string(),
                });
            }
        }
        Ok(Self(name.to_string()))
    }

    /// Returns the full name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the short name, i.e. the last dot-separated segment.
    #[must_use]
    pub fn short(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }

    /// Returns the enclosing scope, or `None` for a top-level name.
    #[must_use]
    pub fn parent(&self) -> Option<FullName> {
        self.0.rfind('.').map(|idx| Self(self.0[..idx].to_string()))
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for FullName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for FullName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let name = FullName::parse("acme.geo.Point").unwrap();
        assert_eq!(name.as_str(), "acme.geo.Point");
    }

    #[test]
    fn test_parse_single_segment() {
        let name = FullName::parse("Point").unwrap();
        assert_eq!(name.short(), "Point");
        assert_eq!(name.parent(), None);
    }

    #[test]
    fn test_short_name() {
        let name = FullName::parse("acme.geo.Point").unwrap();
        assert_eq!(name.short(), "Point");
    }

    #[test]
    fn test_parent() {
        let name = FullName::parse("acme.geo.Point").unwrap();
        let parent = name.parent().unwrap();
        assert_eq!(parent.as_str(), "acme.geo");
        assert_eq!(parent.parent().unwrap().as_str(), "acme");
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(FullName::parse(""), Err(NameError::Empty));
    }

    #[test]
    fn test_parse_empty_segment() {
        assert!(matches!(
            FullName::parse("acme..Point"),
            Err(NameError::EmptySegment { .. })
        ));
        assert!(matches!(
            FullName::parse(".Point"),
            Err(NameError::EmptySegment { .. })
        ));
    }

    #[test]
    fn test_parse_invalid_segment() {
        assert!(matches!(
            FullName::parse("acme.1geo.Point"),
            Err(NameError::InvalidSegment { .. })
        ));
        assert!(matches!(
            FullName::parse("acme.ge-o.Point"),
            Err(NameError::InvalidSegment { .. })
        ));
    }

    #[test]
    fn test_from_str() {
        let name: FullName = "acme.Status".parse().unwrap();
        assert_eq!(name.short(), "Status");
    }

    #[test]
    fn test_display() {
        let name = FullName::parse("acme.geo.Point").unwrap();
        assert_eq!(name.to_string(), "acme.geo.Point");
    }

    #[test]
    fn test_underscore_segments() {
        let name = FullName::parse("_pkg.my_type").unwrap();
        assert_eq!(name.short(), "my_type");
    }
}
