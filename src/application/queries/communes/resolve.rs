use super::CommuneQueryService;
use crate::{
    application::{
        dto::CommuneDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::commune::{IdentifierKind, classify},
};

pub struct ResolveCommuneQuery {
    pub identifier: String,
}

impl CommuneQueryService {
    /// Resolve a commune from either identifier style: the canonical
    /// slug or the legacy raw object id. The returned DTO always has a
    /// slug; records that predate slug support are backfilled on the
    /// way out. Callers own the canonicalization contract: compare the
    /// returned slug against the input and redirect on mismatch.
    pub async fn resolve_commune(
        &self,
        query: ResolveCommuneQuery,
    ) -> ApplicationResult<CommuneDto> {
        let identifier = query.identifier.trim();

        let match_legacy_id = match classify(identifier, &self.legacy_id_format) {
            IdentifierKind::LegacyId => true,
            IdentifierKind::Slug => false,
            // Cannot match any stored slug or id, so skip the store
            // round-trip entirely.
            IdentifierKind::Unrecognized => {
                return Err(ApplicationError::not_found("commune not found"));
            }
        };

        let commune = self
            .repo
            .find_by_identifier(identifier, match_legacy_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("commune not found"))?;

        let commune = self.ensure_slug(commune).await?;
        Ok(commune.into())
    }
}
