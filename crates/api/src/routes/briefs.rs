//! Route definitions for brief intake.
//!
//! Only the submission endpoint of the configured host is mounted; the other
//! host's path answers 404. Submission paths reject every method but POST
//! with the 405 envelope.

use axum::routing::{get, post};
use axum::Router;

use crate::config::HostMode;
use crate::handlers::briefs;
use crate::state::AppState;

/// Brief routes mounted under `/api`.
///
/// ```text
/// POST /briefs                 -> submit_brief          (standalone)
/// POST /briefs/ajax            -> submit_plugin_brief   (plugin)
/// GET  /briefs/client-config   -> client_config
/// POST /briefs/whatsapp        -> whatsapp_link
/// ```
pub fn router(mode: HostMode) -> Router<AppState> {
    let submit = match mode {
        HostMode::Standalone => post(briefs::submit_brief),
        HostMode::Plugin => post(briefs::submit_plugin_brief),
    };

    Router::new()
        .route(mode.submit_path(), submit.fallback(briefs::method_not_allowed))
        .route("/briefs/client-config", get(briefs::client_config))
        .route(
            "/briefs/whatsapp",
            post(briefs::whatsapp_link).fallback(briefs::method_not_allowed),
        )
}
