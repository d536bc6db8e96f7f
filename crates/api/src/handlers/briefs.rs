//! Brief submission handlers for both hosts, plus the form's helpers.

use std::collections::HashMap;

use axum::extract::State;
use axum::response::Response;
use chrono::Utc;
use findify_core::brief::{self, normalize, BriefInput};
use findify_core::error::CoreError;
use findify_core::messages;
use findify_core::nonce::SUBMIT_ACTION;
use findify_core::whatsapp;
use serde::Serialize;

use crate::error::{respond, AppError, AppResult};
use crate::extract::FormFields;
use crate::response::{DataResponse, Envelope};
use crate::state::AppState;

/// Form field carrying the plugin host's nonce.
pub const FIELD_NONCE: &str = "nonce";

/// POST /api/briefs
///
/// Standalone host: validate the brief and store it in the local SQLite
/// database.
pub async fn submit_brief(State(state): State<AppState>, FormFields(fields): FormFields) -> Response {
    respond(accept_brief(&state, &fields).await, state.config.debug)
}

/// POST /api/briefs/ajax
///
/// Plugin host: the nonce is checked before any field is looked at.
pub async fn submit_plugin_brief(
    State(state): State<AppState>,
    FormFields(fields): FormFields,
) -> Response {
    let result = match verify_nonce(&state, &fields) {
        Ok(()) => accept_brief(&state, &fields).await,
        Err(e) => Err(e),
    };
    respond(result, state.config.debug)
}

/// Fallback for submission paths hit with anything but POST.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Settings the brief form script needs at page load.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Where to post the form.
    pub ajax_url: String,
    /// Fresh nonce for the plugin host; `null` for the standalone host.
    pub nonce: Option<String>,
    /// Action name posted alongside the fields.
    pub action: &'static str,
    pub whatsapp_number: String,
    pub success_message: &'static str,
    pub error_message: &'static str,
}

/// GET /api/briefs/client-config
pub async fn client_config(State(state): State<AppState>) -> DataResponse<ClientConfig> {
    let nonce = state
        .nonces
        .as_ref()
        .map(|issuer| issuer.issue(SUBMIT_ACTION, Utc::now()));

    DataResponse {
        data: ClientConfig {
            ajax_url: state.config.submit_url(),
            nonce,
            action: SUBMIT_ACTION,
            whatsapp_number: state.config.whatsapp_number.clone(),
            success_message: messages::BRIEF_RECEIVED,
            error_message: messages::SUBMISSION_UNAVAILABLE,
        },
    }
}

#[derive(Debug, Serialize)]
pub struct WhatsAppLink {
    pub url: String,
}

/// POST /api/briefs/whatsapp
///
/// Build the pre-filled WhatsApp chat link for whatever the visitor has
/// typed so far. Nothing is validated or stored.
pub async fn whatsapp_link(
    State(state): State<AppState>,
    FormFields(fields): FormFields,
) -> DataResponse<WhatsAppLink> {
    let brief = normalize(&BriefInput::from_form(&fields));
    DataResponse {
        data: WhatsAppLink {
            url: whatsapp::build_link(&state.config.whatsapp_number, &brief),
        },
    }
}

// ---------------------------------------------------------------------------
// Shared pipeline
// ---------------------------------------------------------------------------

/// Normalize, validate, build and persist one brief.
async fn accept_brief(state: &AppState, fields: &HashMap<String, String>) -> AppResult<Envelope> {
    let record = brief::prepare(&BriefInput::from_form(fields))?;
    let stored = state.store.insert(&record).await?;

    tracing::info!(
        brief_id = stored.id,
        options = stored.options,
        backend = state.store.backend(),
        "Brief accepted"
    );

    Ok(Envelope::success(messages::BRIEF_RECEIVED))
}

fn verify_nonce(state: &AppState, fields: &HashMap<String, String>) -> AppResult<()> {
    let nonce = fields.get(FIELD_NONCE).map(|n| n.trim()).unwrap_or_default();
    let issuer = state.nonces.as_deref().ok_or(CoreError::NonceInvalid)?;

    match issuer.verify(nonce, SUBMIT_ACTION, Utc::now()) {
        Some(age) => {
            tracing::debug!(?age, "Nonce accepted");
            Ok(())
        }
        None => Err(CoreError::NonceInvalid.into()),
    }
}
