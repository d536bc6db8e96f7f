//! Form body extractor for brief submissions.
//!
//! The brief form posts either `application/x-www-form-urlencoded` or
//! `multipart/form-data` (browser `FormData`). Both decode to the same flat
//! field map. A body that cannot be decoded yields an empty map, which the
//! validator then reports as missing fields.

use std::collections::HashMap;
use std::convert::Infallible;

use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use axum::Form;

/// Decoded form fields. Later duplicates of a key win.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields(pub HashMap<String, String>);

impl<S> FromRequest<S> for FormFields
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.trim_start().to_ascii_lowercase().starts_with("multipart/form-data"));

        let fields = if is_multipart {
            match Multipart::from_request(req, state).await {
                Ok(multipart) => read_multipart(multipart).await,
                Err(rejection) => {
                    tracing::debug!(error = %rejection, "Unreadable multipart body");
                    HashMap::new()
                }
            }
        } else {
            match Form::<HashMap<String, String>>::from_request(req, state).await {
                Ok(Form(fields)) => fields,
                Err(rejection) => {
                    tracing::debug!(error = %rejection, "Unreadable form body");
                    HashMap::new()
                }
            }
        };

        Ok(Self(fields))
    }
}

/// Collect the text parts of a multipart body. Unnamed parts are skipped;
/// a broken part ends the read with whatever was collected so far.
async fn read_multipart(mut multipart: Multipart) -> HashMap<String, String> {
    let mut fields = HashMap::new();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::debug!(error = %e, "Malformed multipart field");
                break;
            }
        };

        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        match field.text().await {
            Ok(value) => {
                fields.insert(name, value);
            }
            Err(e) => {
                tracing::debug!(field = %name, error = %e, "Unreadable multipart field");
                break;
            }
        }
    }

    fields
}
