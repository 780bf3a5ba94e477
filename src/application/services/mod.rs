// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::communes::CommuneCommandService, ports::time::Clock,
        queries::communes::CommuneQueryService,
    },
    domain::commune::{CommuneRepository, LegacyIdFormat},
};

pub struct ApplicationServices {
    pub commune_commands: Arc<CommuneCommandService>,
    pub commune_queries: Arc<CommuneQueryService>,
}

impl ApplicationServices {
    pub fn new(
        commune_repo: Arc<dyn CommuneRepository>,
        clock: Arc<dyn Clock>,
        legacy_id_format: LegacyIdFormat,
    ) -> Self {
        let commune_commands = Arc::new(CommuneCommandService::new(
            Arc::clone(&commune_repo),
            Arc::clone(&clock),
        ));

        let commune_queries = Arc::new(CommuneQueryService::new(
            Arc::clone(&commune_repo),
            Arc::clone(&clock),
            legacy_id_format,
        ));

        Self {
            commune_commands,
            commune_queries,
        }
    }
}
