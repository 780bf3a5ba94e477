// src/application/commands/communes/register.rs
use super::CommuneCommandService;
use crate::{
    application::{dto::CommuneDto, error::ApplicationResult},
    domain::commune::{CommuneName, CommuneSlug, NewCommune, PostalCode, generate_slug},
};

pub struct RegisterCommuneCommand {
    pub name: String,
    pub postal_code: String,
    pub is_visible: bool,
}

impl CommuneCommandService {
    /// Register a commune with its slug computed eagerly. Only records
    /// created before slug support rely on the resolver's lazy
    /// backfill; everything new is canonical from day one. A source
    /// that normalizes to nothing is rejected here rather than
    /// persisted as a record with no usable URL.
    pub async fn register_commune(
        &self,
        command: RegisterCommuneCommand,
    ) -> ApplicationResult<CommuneDto> {
        let slug = CommuneSlug::new(generate_slug(&command.name, &command.postal_code)?)?;
        let now = self.clock.now();

        let new_commune = NewCommune {
            name: CommuneName::new(command.name),
            postal_code: PostalCode::new(command.postal_code),
            slug: Some(slug),
            is_visible: command.is_visible,
            created_at: now,
            updated_at: now,
        };

        let created = self.repo.insert(new_commune).await?;
        Ok(created.into())
    }
}
