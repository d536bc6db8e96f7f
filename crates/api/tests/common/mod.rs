#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use findify_api::config::{BriefHost, FragranceConfig, HostMode, ServerConfig};
use findify_api::router::build_app_router;
use findify_api::state::AppState;
use findify_core::brief::BriefRecord;
use findify_db::models::brief::Brief;
use findify_db::repositories::sqlite_brief_repo::DEFAULT_TABLE;
use findify_db::repositories::SqliteBriefRepo;
use findify_db::{BriefStore, TableName};
use findify_fragrance::api::DEFAULT_API_HOST;
use findify_fragrance::FragranceApi;
use http_body_util::BodyExt;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tower::ServiceExt;

pub const TEST_NONCE_SECRET: &str = "test-nonce-secret";
pub const TEST_API_KEY: &str = "test-key";

/// Nothing listens here; proxy tests that need an upstream spawn their own.
pub const UNREACHABLE_UPSTREAM: &str = "http://127.0.0.1:9";

/// Build a test `ServerConfig` for the given host with safe defaults.
pub fn test_config(mode: HostMode) -> ServerConfig {
    let brief = match mode {
        HostMode::Standalone => BriefHost::Standalone {
            data_dir: PathBuf::from("unused"),
        },
        HostMode::Plugin => BriefHost::Plugin {
            database_url: "postgres://unused".to_string(),
            table_prefix: "wp_".to_string(),
            nonce_secret: TEST_NONCE_SECRET.to_string(),
            nonce_lifespan_secs: 86_400,
        },
    };

    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        debug: false,
        brief,
        public_base_path: String::new(),
        whatsapp_number: "5541996860137".to_string(),
        fragrance: FragranceConfig {
            base_url: UNREACHABLE_UPSTREAM.to_string(),
            api_host: DEFAULT_API_HOST.to_string(),
            api_key: Some(TEST_API_KEY.to_string()),
        },
    }
}

/// Fresh in-memory SQLite store with the briefs table created.
pub async fn memory_store() -> (Arc<SqliteBriefRepo>, SqlitePool) {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    let repo = SqliteBriefRepo::new(pool.clone(), TableName::new(DEFAULT_TABLE).unwrap());
    repo.ensure_schema().await.unwrap();
    (Arc::new(repo), pool)
}

/// Build the full application router for `config` over `store`.
pub fn build_test_app(config: ServerConfig, store: Arc<dyn BriefStore>) -> Router {
    let fragrance = FragranceApi::new(
        &config.fragrance.base_url,
        config.fragrance.api_host.clone(),
        config.fragrance.api_key.clone(),
    )
    .unwrap();
    let state = AppState::new(Arc::new(config.clone()), store, Arc::new(fragrance));
    build_app_router(state, &config)
}

/// Standalone app over a fresh in-memory store; returns the pool for
/// inspecting stored rows.
pub async fn standalone_app() -> (Router, SqlitePool) {
    let (store, pool) = memory_store().await;
    (build_test_app(test_config(HostMode::Standalone), store), pool)
}

/// Plugin app over a fresh in-memory store.
pub async fn plugin_app() -> (Router, SqlitePool) {
    let (store, pool) = memory_store().await;
    (build_test_app(test_config(HostMode::Plugin), store), pool)
}

pub async fn count_briefs(pool: &SqlitePool) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM briefings")
        .fetch_one(pool)
        .await
        .unwrap();
    count
}

// ---------------------------------------------------------------------------
// Failing store
// ---------------------------------------------------------------------------

/// A store whose writes always fail, for exercising the persistence error path.
pub struct FailingStore;

pub const FAILING_STORE_ERROR: &str = "disk I/O error: database is locked";

#[async_trait]
impl BriefStore for FailingStore {
    fn backend(&self) -> &'static str {
        "failing"
    }

    async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }

    async fn insert(&self, _record: &BriefRecord) -> Result<Brief, sqlx::Error> {
        Err(sqlx::Error::Protocol(FAILING_STORE_ERROR.to_string()))
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// A complete, valid brief as the form would post it.
pub fn valid_fields() -> Vec<(&'static str, &'static str)> {
    vec![
        ("nome", "Ana Souza"),
        ("email", "ana@example.com"),
        ("projeto", "Perfume amadeirado"),
        ("orcamento", "150,00"),
        ("mensagem", "Uso diário no trabalho"),
        ("brand", ""),
        ("options", "5"),
    ]
}

pub fn encode_form(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, Body::empty()).await
}

pub async fn post_form(app: Router, uri: &str, fields: &[(&str, &str)]) -> Response {
    send(
        app,
        Method::POST,
        uri,
        Some("application/x-www-form-urlencoded"),
        Body::from(encode_form(fields)),
    )
    .await
}

pub const MULTIPART_BOUNDARY: &str = "----findify-test-boundary";

pub async fn post_multipart(app: Router, uri: &str, fields: &[(&str, &str)]) -> Response {
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str(&format!(
            "--{MULTIPART_BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    body.push_str(&format!("--{MULTIPART_BOUNDARY}--\r\n"));

    send(
        app,
        Method::POST,
        uri,
        Some(&format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}")),
        Body::from(body),
    )
    .await
}

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: Body,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(ct) = content_type {
        builder = builder.header(CONTENT_TYPE, ct);
    }
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn content_type(response: &Response) -> String {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// Assert a failure envelope with `status` and `message`.
pub async fn assert_failure(response: Response, status: StatusCode, message: &str) -> serde_json::Value {
    assert_eq!(response.status(), status);
    assert_eq!(content_type(&response), "application/json; charset=utf-8");
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], message);
    json
}
