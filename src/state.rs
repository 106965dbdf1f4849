use std::time::Instant;

use crate::domain::destination::client::SharedTextGenerator;
use crate::domain::destination::service::DestinationService;

/// Shared application state, cheap to clone per request.
#[derive(Clone)]
pub struct AppState {
    pub destinations: DestinationService,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(generator: SharedTextGenerator) -> Self {
        Self {
            destinations: DestinationService::new(generator),
            started_at: Instant::now(),
        }
    }
}
