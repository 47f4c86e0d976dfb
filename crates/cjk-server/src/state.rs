//! Application state shared across all handlers.

use cjk_core::ServiceConfig;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    pub fn max_input_bytes(&self) -> usize {
        self.config.max_input_bytes
    }

    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ServiceConfig::default())
    }
}
