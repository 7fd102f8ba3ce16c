//! Shared application state for all routes. Built once at startup.

use crate::service::OpeningService;

#[derive(Clone)]
pub struct AppState {
    pub service: OpeningService,
}
