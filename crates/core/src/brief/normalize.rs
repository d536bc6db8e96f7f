//! Field normalizer: raw form fields into a fully-populated, trimmed set.
//!
//! Purely structural. Nothing here rejects input; that is the validator's job.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use super::record::DEFAULT_OPTIONS;

/// `<script>` / `<style>` blocks are dropped together with their content.
static EMBEDDED_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(script|style)[^>]*?>.*?</(script|style)>").expect("valid regex")
});

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

static WHITESPACE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\r\n\t ]+").expect("valid regex"));

static INLINE_SPACE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\t ]+").expect("valid regex"));

// ---------------------------------------------------------------------------
// Transport field names
// ---------------------------------------------------------------------------

pub const FIELD_NAME: &str = "nome";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PRODUCT: &str = "projeto";
pub const FIELD_BUDGET: &str = "orcamento";
pub const FIELD_STYLE: &str = "mensagem";
pub const FIELD_BRAND: &str = "brand";
pub const FIELD_OPTIONS: &str = "options";

/// Raw, untrusted brief fields as submitted. Every key may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BriefInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub product: Option<String>,
    pub budget: Option<String>,
    pub style: Option<String>,
    pub brand: Option<String>,
    pub options: Option<String>,
}

impl BriefInput {
    /// Pick the brief fields out of a decoded form body. Unknown keys
    /// (`action`, `nonce`, ...) are ignored.
    pub fn from_form(fields: &HashMap<String, String>) -> Self {
        let take = |key: &str| fields.get(key).cloned();
        Self {
            name: take(FIELD_NAME),
            email: take(FIELD_EMAIL),
            product: take(FIELD_PRODUCT),
            budget: take(FIELD_BUDGET),
            style: take(FIELD_STYLE),
            brand: take(FIELD_BRAND),
            options: take(FIELD_OPTIONS),
        }
    }
}

/// Output of [`normalize`]: every field present and trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedBrief {
    pub name: String,
    pub email: String,
    pub product: String,
    pub budget: String,
    pub style: String,
    pub brand: String,
    pub options: String,
}

/// Normalize raw input. `options` defaults to `"3"` when the key is absent
/// (an explicitly empty value stays empty and is defaulted later).
pub fn normalize(input: &BriefInput) -> NormalizedBrief {
    let line = |value: &Option<String>| sanitize_line(value.as_deref().unwrap_or_default());

    NormalizedBrief {
        name: line(&input.name),
        email: line(&input.email),
        product: line(&input.product),
        budget: line(&input.budget),
        style: sanitize_multiline(input.style.as_deref().unwrap_or_default()),
        brand: line(&input.brand),
        options: match &input.options {
            Some(raw) => sanitize_line(raw),
            None => DEFAULT_OPTIONS.to_string(),
        },
    }
}

/// Single-line field: strip markup, collapse whitespace runs (including
/// line breaks and tabs) into one space, trim.
pub fn sanitize_line(raw: &str) -> String {
    let stripped = strip_tags(raw);
    WHITESPACE_RUN_RE
        .replace_all(&stripped, " ")
        .trim()
        .to_string()
}

/// Multi-line field: strip markup, keep line breaks, collapse spaces and
/// tabs within each line, trim every line and the whole value.
pub fn sanitize_multiline(raw: &str) -> String {
    let stripped = strip_tags(raw);
    stripped
        .lines()
        .map(|line| INLINE_SPACE_RUN_RE.replace_all(line, " ").trim().to_string())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn strip_tags(raw: &str) -> String {
    let without_blocks = EMBEDDED_BLOCK_RE.replace_all(raw, "");
    TAG_RE.replace_all(&without_blocks, "").into_owned()
}
