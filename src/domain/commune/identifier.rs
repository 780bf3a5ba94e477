// src/domain/commune/identifier.rs
use crate::domain::commune::value_objects::CommuneSlug;

/// Shape of the raw object ids the backing store assigned before slug
/// support existed. Fixed-width hex in the reference store (24 chars),
/// but the width is a store parameter, not a universal constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyIdFormat {
    hex_len: usize,
}

impl LegacyIdFormat {
    pub const fn new(hex_len: usize) -> Self {
        Self { hex_len }
    }

    /// External links may have been uppercased along the way, so the
    /// match is case-insensitive even though the store emits lowercase.
    pub fn matches(&self, input: &str) -> bool {
        input.len() == self.hex_len && input.chars().all(|c| c.is_ascii_hexdigit())
    }
}

impl Default for LegacyIdFormat {
    fn default() -> Self {
        Self::new(24)
    }
}

/// Tagged classification of an incoming identifier, decided before any
/// store query so the lookup contract stays explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    LegacyId,
    Slug,
    Unrecognized,
}

pub fn classify(input: &str, legacy_format: &LegacyIdFormat) -> IdentifierKind {
    // A 24-hex token is also a syntactically valid slug; legacy wins so
    // old object-id links keep resolving.
    if legacy_format.matches(input) {
        IdentifierKind::LegacyId
    } else if CommuneSlug::new(input).is_ok() {
        IdentifierKind::Slug
    } else {
        IdentifierKind::Unrecognized
    }
}
