// tests/support/mod.rs
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use chrono::{DateTime, TimeZone, Utc};

use contribcit_core::application::ports::time::Clock;
use contribcit_core::application::services::ApplicationServices;
use contribcit_core::domain::commune::{
    Commune, CommuneId, CommuneName, CommuneRepository, CommuneSlug, LegacyIdFormat, NewCommune,
    PostalCode,
};
use contribcit_core::domain::errors::{DomainError, DomainResult};
use contribcit_core::presentation::http::{routes::build_router, state::HttpState};

pub const LES_ULIS_ID: &str = "64a1f0b2c3d4e5f60718293a";
pub const TEST_ORIGIN: &str = "http://localhost:3000";

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Default)]
pub struct InMemoryCommuneRepo {
    inner: Mutex<HashMap<String, Commune>>,
    next_id: Mutex<u64>,
}

impl InMemoryCommuneRepo {
    pub fn with_communes(communes: Vec<Commune>) -> Self {
        let map = communes
            .into_iter()
            .map(|c| (c.id.as_str().to_string(), c))
            .collect();
        Self {
            inner: Mutex::new(map),
            next_id: Mutex::new(0),
        }
    }
}

#[async_trait]
impl CommuneRepository for InMemoryCommuneRepo {
    async fn find_by_identifier(
        &self,
        identifier: &str,
        match_legacy_id: bool,
    ) -> DomainResult<Option<Commune>> {
        let map = self.inner.lock().unwrap();
        let id_needle = identifier.to_ascii_lowercase();
        for commune in map.values() {
            let slug_matches = commune
                .slug
                .as_ref()
                .is_some_and(|s| s.as_str() == identifier);
            if slug_matches || (match_legacy_id && commune.id.as_str() == id_needle) {
                return Ok(Some(commune.clone()));
            }
        }
        Ok(None)
    }

    async fn update_slug(
        &self,
        id: &CommuneId,
        slug: &CommuneSlug,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<()> {
        let mut map = self.inner.lock().unwrap();
        let commune = map
            .get_mut(id.as_str())
            .ok_or_else(|| DomainError::NotFound("commune not found".into()))?;
        if commune.slug.is_none() {
            commune.slug = Some(slug.clone());
            commune.updated_at = updated_at;
        }
        Ok(())
    }

    async fn insert(&self, commune: NewCommune) -> DomainResult<Commune> {
        let mut map = self.inner.lock().unwrap();

        if let Some(slug) = &commune.slug {
            if map
                .values()
                .any(|c| c.slug.as_ref().is_some_and(|s| s == slug))
            {
                return Err(DomainError::Conflict("slug already exists".into()));
            }
        }

        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let id = format!("{:024x}", *next_id);

        let created = Commune {
            id: CommuneId::new(id.clone())?,
            name: commune.name,
            postal_code: commune.postal_code,
            slug: commune.slug,
            is_visible: commune.is_visible,
            created_at: commune.created_at,
            updated_at: commune.updated_at,
        };
        map.insert(id, created.clone());
        Ok(created)
    }
}

pub fn les_ulis(slug: Option<&str>, is_visible: bool) -> Commune {
    let created = Utc.with_ymd_and_hms(2021, 6, 1, 12, 0, 0).unwrap();
    Commune {
        id: CommuneId::new(LES_ULIS_ID).unwrap(),
        name: CommuneName::new("Les Ulis"),
        postal_code: PostalCode::new("91940"),
        slug: slug.map(|s| CommuneSlug::new(s).unwrap()),
        is_visible,
        created_at: created,
        updated_at: created,
    }
}

pub fn make_test_router(communes: Vec<Commune>) -> Router {
    let repo: Arc<dyn CommuneRepository> =
        Arc::new(InMemoryCommuneRepo::with_communes(communes));
    let clock: Arc<dyn Clock> = Arc::new(FixedClock(
        Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap(),
    ));
    let services = Arc::new(ApplicationServices::new(
        repo,
        clock,
        LegacyIdFormat::default(),
    ));
    build_router(HttpState { services }, &[TEST_ORIGIN.to_string()])
}
