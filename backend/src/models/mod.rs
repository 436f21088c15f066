use std::sync::Arc;

use crate::config::Config;
use crate::store::RecordStore;

/// Application state shared across all handlers
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub config: Config,
}
