use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommuneId(String);

impl CommuneId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("commune id cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommuneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CommuneId> for String {
    fn from(value: CommuneId) -> Self {
        value.0
    }
}

/// Display name of a commune. Legacy records can carry an empty or
/// punctuation-only name; the slug generator is the gate that rejects
/// sources which normalize to nothing, so no emptiness check here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommuneName(String);

impl CommuneName {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommuneName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CommuneName> for String {
    fn from(value: CommuneName) -> Self {
        value.0
    }
}

/// Postal code, used only as a slug disambiguator. Same policy as
/// [`CommuneName`]: dirty legacy data must stay representable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostalCode(String);

impl PostalCode {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PostalCode> for String {
    fn from(value: PostalCode) -> Self {
        value.0
    }
}

/// Canonical URL segment for a commune. Invariant: lowercase ASCII
/// alphanumerics separated by single hyphens, never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommuneSlug(String);

impl CommuneSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if !Self::is_well_formed(&value) {
            return Err(DomainError::Validation(format!(
                "slug contains forbidden characters: {value}"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_well_formed(value: &str) -> bool {
        !value.starts_with('-')
            && !value.ends_with('-')
            && !value.contains("--")
            && value
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }
}

impl fmt::Display for CommuneSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CommuneSlug> for String {
    fn from(value: CommuneSlug) -> Self {
        value.0
    }
}
