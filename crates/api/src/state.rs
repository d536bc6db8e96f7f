use std::sync::Arc;

use findify_core::nonce::NonceIssuer;
use findify_db::BriefStore;
use findify_fragrance::FragranceApi;

use crate::config::{BriefHost, ServerConfig};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Where accepted briefs are persisted (SQLite or PostgreSQL).
    pub store: Arc<dyn BriefStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Nonce signer; present only for the plugin host.
    pub nonces: Option<Arc<NonceIssuer>>,
    /// Upstream fragrance API client.
    pub fragrance: Arc<FragranceApi>,
}

impl AppState {
    /// Assemble the state, deriving the nonce signer from the host config.
    pub fn new(
        config: Arc<ServerConfig>,
        store: Arc<dyn BriefStore>,
        fragrance: Arc<FragranceApi>,
    ) -> Self {
        let nonces = match &config.brief {
            BriefHost::Plugin {
                nonce_secret,
                nonce_lifespan_secs,
                ..
            } => Some(Arc::new(NonceIssuer::new(
                nonce_secret.as_bytes(),
                *nonce_lifespan_secs,
            ))),
            BriefHost::Standalone { .. } => None,
        };

        Self {
            store,
            config,
            nonces,
            fragrance,
        }
    }
}
