pub mod briefs;
pub mod fragrance;
pub mod health;

use axum::Router;

use crate::config::HostMode;
use crate::state::AppState;

/// Build the `/api` route tree for the given submission host.
///
/// Route hierarchy:
///
/// ```text
/// /health                       service and storage status
///
/// /briefs                       submit brief (standalone host, POST)
/// /briefs/ajax                  submit brief with nonce (plugin host, POST)
/// /briefs/client-config         form bootstrap settings (GET)
/// /briefs/whatsapp              WhatsApp hand-off link (POST)
///
/// /perfumes/search              perfume search proxy (GET, ?q=)
/// /dupes/{id}                   dupe lookup proxy (GET)
/// ```
pub fn api_routes(mode: HostMode) -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(briefs::router(mode))
        .merge(fragrance::router())
}
