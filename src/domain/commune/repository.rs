use crate::domain::commune::entity::{Commune, NewCommune};
use crate::domain::commune::value_objects::{CommuneId, CommuneSlug};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Persistence seam for communes. The resolver treats the store as an
/// opaque lookup with a write-back capability; slug uniqueness is the
/// store's responsibility, not the caller's.
#[async_trait]
pub trait CommuneRepository: Send + Sync {
    /// Dual-path lookup: match on `slug`, and additionally on the raw
    /// `id` column when the caller has classified the input as a
    /// legacy object id. Both identifier styles stay valid forever.
    async fn find_by_identifier(
        &self,
        identifier: &str,
        match_legacy_id: bool,
    ) -> DomainResult<Option<Commune>>;

    async fn update_slug(
        &self,
        id: &CommuneId,
        slug: &CommuneSlug,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<()>;

    async fn insert(&self, commune: NewCommune) -> DomainResult<Commune>;
}
