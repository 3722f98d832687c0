use std::sync::Arc;

use interviewer_core::preferences::Preferences;
use interviewer_fixtures::FixtureSource;
use tokio::sync::RwLock;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Read-only fixture data behind every catalog view.
    pub fixtures: Arc<dyn FixtureSource>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Viewer preferences. Starts light-themed and signed out.
    pub preferences: Arc<RwLock<Preferences>>,
}

impl AppState {
    pub fn new(fixtures: Arc<dyn FixtureSource>, config: ServerConfig) -> Self {
        Self {
            fixtures,
            config: Arc::new(config),
            preferences: Arc::new(RwLock::new(Preferences::default())),
        }
    }
}
