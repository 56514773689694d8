/*
 * Responsibility
 * - Shared context attached to the Router (AppState)
 * - Clone is cheap (Arc inside); started_at is fixed once at startup
 */
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::config::Config;

#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<Config>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            started_at: Utc::now(),
        }
    }
}
