// src/infrastructure/repositories/postgres_commune.rs
use super::map_sqlx;
use crate::domain::commune::{
    Commune, CommuneId, CommuneName, CommuneRepository, CommuneSlug, NewCommune, PostalCode,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresCommuneRepository {
    pool: PgPool,
}

impl PostgresCommuneRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommuneRow {
    id: String,
    name: String,
    postal_code: String,
    slug: Option<String>,
    is_visible: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CommuneRow> for Commune {
    type Error = DomainError;

    fn try_from(row: CommuneRow) -> Result<Self, Self::Error> {
        Ok(Commune {
            id: CommuneId::new(row.id)?,
            name: CommuneName::new(row.name),
            postal_code: PostalCode::new(row.postal_code),
            slug: row.slug.map(CommuneSlug::new).transpose()?,
            is_visible: row.is_visible,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl CommuneRepository for PostgresCommuneRepository {
    async fn find_by_identifier(
        &self,
        identifier: &str,
        match_legacy_id: bool,
    ) -> DomainResult<Option<Commune>> {
        // Store ids are lowercase hex; external links are matched
        // case-insensitively on the id path only.
        let row = sqlx::query_as::<_, CommuneRow>(
            "SELECT id, name, postal_code, slug, is_visible, created_at, updated_at
             FROM communes
             WHERE slug = $1 OR ($2 AND id = lower($1))",
        )
        .bind(identifier)
        .bind(match_legacy_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Commune::try_from).transpose()
    }

    async fn update_slug(
        &self,
        id: &CommuneId,
        slug: &CommuneSlug,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<()> {
        // Guard on `slug IS NULL` so a concurrent backfill never
        // overwrites an already-persisted slug.
        let result = sqlx::query(
            "UPDATE communes SET slug = $2, updated_at = $3 WHERE id = $1 AND slug IS NULL",
        )
        .bind(id.as_str())
        .bind(slug.as_str())
        .bind(updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            // Either the row vanished or another request won the
            // backfill race with the identical deterministic value.
            tracing::debug!(commune_id = %id, "slug backfill update affected no rows");
        }

        Ok(())
    }

    async fn insert(&self, commune: NewCommune) -> DomainResult<Commune> {
        let NewCommune {
            name,
            postal_code,
            slug,
            is_visible,
            created_at,
            updated_at,
        } = commune;

        let row = sqlx::query_as::<_, CommuneRow>(
            "INSERT INTO communes (name, postal_code, slug, is_visible, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id, name, postal_code, slug, is_visible, created_at, updated_at",
        )
        .bind(name.as_str())
        .bind(postal_code.as_str())
        .bind(slug.as_ref().map(CommuneSlug::as_str))
        .bind(is_visible)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Commune::try_from(row)
    }
}
