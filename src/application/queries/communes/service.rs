use std::sync::Arc;

use crate::application::ports::time::Clock;
use crate::domain::commune::{CommuneRepository, LegacyIdFormat};

pub struct CommuneQueryService {
    pub(super) repo: Arc<dyn CommuneRepository>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) legacy_id_format: LegacyIdFormat,
}

impl CommuneQueryService {
    pub fn new(
        repo: Arc<dyn CommuneRepository>,
        clock: Arc<dyn Clock>,
        legacy_id_format: LegacyIdFormat,
    ) -> Self {
        Self {
            repo,
            clock,
            legacy_id_format,
        }
    }
}
