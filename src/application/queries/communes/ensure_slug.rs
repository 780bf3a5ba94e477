use super::CommuneQueryService;
use crate::{
    application::error::ApplicationResult,
    domain::commune::{Commune, CommuneSlug, generate_slug},
};

impl CommuneQueryService {
    /// Compute-if-absent slug backfill. The write-back is best-effort
    /// once: a failed update is logged and the computed slug is still
    /// served for this request, leaving the retry to whichever
    /// resolution observes the missing slug next.
    pub async fn ensure_slug(&self, commune: Commune) -> ApplicationResult<Commune> {
        if commune.slug.is_some() {
            return Ok(commune);
        }

        let slug = CommuneSlug::new(generate_slug(
            commune.name.as_str(),
            commune.postal_code.as_str(),
        )?)?;
        let now = self.clock.now();

        if let Err(err) = self.repo.update_slug(&commune.id, &slug, now).await {
            tracing::warn!(
                commune_id = %commune.id,
                slug = %slug,
                error = %err,
                "slug backfill write failed, serving computed slug"
            );
        }

        Ok(commune.with_slug(slug, now))
    }
}
