use std::sync::Arc;

use audito_auth::JwtKeys;
use audito_config::ServerConfig;
use audito_db::service::AuditoService;
use audito_report::ReportRenderer;

/// Shared handler state. Cheap to clone.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Arc<AuditoService>,
    pub keys: JwtKeys,
    pub renderer: ReportRenderer,
    /// Listener settings; `frontend_url` drives CORS.
    pub server: Arc<ServerConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(store: AuditoService, keys: JwtKeys, server: ServerConfig) -> Self {
        Self {
            store: Arc::new(store),
            keys,
            renderer: ReportRenderer::new(),
            server: Arc::new(server),
        }
    }
}
