// src/domain/commune/entity.rs
use crate::domain::commune::value_objects::{CommuneId, CommuneName, CommuneSlug, PostalCode};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Commune {
    pub id: CommuneId,
    pub name: CommuneName,
    pub postal_code: PostalCode,
    /// Absent on records that predate slug support. Once set it is
    /// stable: later name or postal-code edits never recompute it.
    pub slug: Option<CommuneSlug>,
    pub is_visible: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Commune {
    /// Attach a freshly computed slug. No-op when one is already set,
    /// upholding the set-at-most-once invariant.
    pub fn with_slug(mut self, slug: CommuneSlug, now: DateTime<Utc>) -> Self {
        if self.slug.is_none() {
            self.slug = Some(slug);
            self.updated_at = now;
        }
        self
    }
}

#[derive(Debug, Clone)]
pub struct NewCommune {
    pub name: CommuneName,
    pub postal_code: PostalCode,
    pub slug: Option<CommuneSlug>,
    pub is_visible: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_commune() -> Commune {
        Commune {
            id: CommuneId::new("64a1f0b2c3d4e5f60718293a").unwrap(),
            name: CommuneName::new("Les Ulis"),
            postal_code: PostalCode::new("91940"),
            slug: None,
            is_visible: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn with_slug_fills_missing_slug() {
        let now = Utc::now();
        let slug = CommuneSlug::new("les-ulis-91940").unwrap();
        let commune = sample_commune().with_slug(slug.clone(), now);
        assert_eq!(commune.slug, Some(slug));
        assert_eq!(commune.updated_at, now);
    }

    #[test]
    fn with_slug_never_overwrites() {
        let now = Utc::now();
        let original = CommuneSlug::new("les-ulis-91940").unwrap();
        let commune = sample_commune().with_slug(original.clone(), now);

        let later = now + chrono::Duration::seconds(10);
        let replacement = CommuneSlug::new("renamed-91940").unwrap();
        let commune = commune.with_slug(replacement, later);

        assert_eq!(commune.slug, Some(original));
        assert_eq!(commune.updated_at, now);
    }
}
