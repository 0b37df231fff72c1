use std::path::Path;
use std::sync::Arc;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// The served base directory. Fixed at startup.
    pub fn root(&self) -> &Path {
        &self.config.root
    }
}
