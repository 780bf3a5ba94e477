// src/domain/commune/slug.rs
//
// Canonical slug derivation for communes. The pipeline is frozen:
// previously issued slugs must keep regenerating byte-identically, so any
// change here is a breaking migration of every published commune URL.
use crate::domain::errors::{DomainError, DomainResult};
use unicode_normalization::UnicodeNormalization;

const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036f}';

/// Normalize free text into slug form: fold the French ligatures,
/// decompose (NFD) and strip combining marks, lowercase, then map every
/// maximal run of characters outside `[a-z0-9]` to a single hyphen with
/// no leading or trailing hyphen. Idempotent.
pub fn normalize(text: &str) -> String {
    let folded = fold_ligatures(text);

    let lowered: String = folded
        .nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .flat_map(char::to_lowercase)
        .collect();

    let mut slug = String::with_capacity(lowered.len());
    let mut pending_separator = false;
    for c in lowered.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        } else {
            pending_separator = true;
        }
    }
    slug
}

fn fold_ligatures(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            'œ' | 'Œ' => folded.push_str("oe"),
            'æ' | 'Æ' => folded.push_str("ae"),
            _ => folded.push(c),
        }
    }
    folded
}

/// Derive the canonical slug for a commune from its display name and
/// postal code. The postal code is part of the source text, not a mere
/// fallback, so homonymous towns in different postal areas diverge by
/// construction. Fails with [`DomainError::InvalidSlugSource`] rather
/// than ever returning an empty slug.
pub fn generate_slug(name: &str, postal_code: &str) -> DomainResult<String> {
    let candidate = normalize(&format!("{name} {postal_code}"));
    if !candidate.is_empty() {
        return Ok(candidate);
    }

    let fallback = normalize(postal_code);
    if !fallback.is_empty() {
        return Ok(fallback);
    }

    Err(DomainError::InvalidSlugSource)
}
