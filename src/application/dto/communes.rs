use crate::domain::commune::Commune;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommuneDto {
    pub id: String,
    pub name: String,
    pub postal_code: String,
    /// Canonical slug. Always populated on resolver output: a missing
    /// stored slug is backfilled before the record leaves the service.
    pub slug: Option<String>,
    pub is_visible: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Commune> for CommuneDto {
    fn from(commune: Commune) -> Self {
        Self {
            id: commune.id.into(),
            name: commune.name.into(),
            postal_code: commune.postal_code.into(),
            slug: commune.slug.map(Into::into),
            is_visible: commune.is_visible,
            created_at: commune.created_at,
            updated_at: commune.updated_at,
        }
    }
}
