use std::sync::Arc;

use crate::application::ports::time::Clock;
use crate::domain::commune::CommuneRepository;

pub struct CommuneCommandService {
    pub(super) repo: Arc<dyn CommuneRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CommuneCommandService {
    pub fn new(repo: Arc<dyn CommuneRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}
