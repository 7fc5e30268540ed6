use std::sync::Arc;

use hyperfleet_config::CoreConfig;
use hyperfleet_store::ResourceStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ResourceStore>,
    pub config: Arc<CoreConfig>,
    pub auth_token: Arc<String>,
}
