use std::path::PathBuf;
use std::str::FromStr;

use axum::http::HeaderValue;

use findify_core::nonce::DEFAULT_LIFESPAN_SECS;
use findify_db::repositories::pg_brief_repo::DEFAULT_PREFIX;
use findify_fragrance::api::{DEFAULT_API_HOST, DEFAULT_BASE_URL};

/// Default WhatsApp number briefs are handed off to.
pub const DEFAULT_WHATSAPP_NUMBER: &str = "5541996860137";

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be {expected}, got '{value}'")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("{0} must be set when BRIEF_HOST_MODE=plugin")]
    MissingForPlugin(&'static str),
}

/// Which submission host this process plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostMode {
    /// Plain POST endpoint, local SQLite file.
    Standalone,
    /// Nonce-checked endpoint, hosted PostgreSQL.
    Plugin,
}

impl HostMode {
    pub fn as_str(self) -> &'static str {
        match self {
            HostMode::Standalone => "standalone",
            HostMode::Plugin => "plugin",
        }
    }

    /// Path (under `/api`) the form posts briefs to.
    pub fn submit_path(self) -> &'static str {
        match self {
            HostMode::Standalone => "/briefs",
            HostMode::Plugin => "/briefs/ajax",
        }
    }
}

impl FromStr for HostMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standalone" => Ok(HostMode::Standalone),
            "plugin" => Ok(HostMode::Plugin),
            _ => Err(ConfigError::Invalid {
                name: "BRIEF_HOST_MODE",
                expected: "'standalone' or 'plugin'",
                value: s.to_string(),
            }),
        }
    }
}

/// Host-specific settings: transport and storage backend.
#[derive(Debug, Clone)]
pub enum BriefHost {
    Standalone {
        /// Directory holding the SQLite database file.
        data_dir: PathBuf,
    },
    Plugin {
        /// PostgreSQL connection string.
        database_url: String,
        /// Per-site table prefix (`wp_` -> `wp_findify_briefs`).
        table_prefix: String,
        /// Server-side secret nonces are signed with.
        nonce_secret: String,
        /// Nonce lifespan in seconds.
        nonce_lifespan_secs: i64,
    },
}

impl BriefHost {
    pub fn mode(&self) -> HostMode {
        match self {
            BriefHost::Standalone { .. } => HostMode::Standalone,
            BriefHost::Plugin { .. } => HostMode::Plugin,
        }
    }
}

/// Upstream fragrance API settings.
#[derive(Debug, Clone)]
pub struct FragranceConfig {
    pub base_url: String,
    pub api_host: String,
    pub api_key: Option<String>,
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development except the
/// plugin host's database URL and nonce secret.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Expose raw persistence/upstream error text in responses.
    pub debug: bool,
    /// Submission host and its storage backend.
    pub brief: BriefHost,
    /// Prefix prepended to paths handed to the browser (reverse proxies).
    pub public_base_path: String,
    /// WhatsApp number used for the hand-off link.
    pub whatsapp_number: String,
    /// Upstream fragrance API.
    pub fragrance: FragranceConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                  | Default                                   |
    /// |--------------------------|-------------------------------------------|
    /// | `HOST`                   | `0.0.0.0`                                 |
    /// | `PORT`                   | `3000`                                    |
    /// | `CORS_ORIGINS`           | `http://localhost:5173`                   |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                                      |
    /// | `APP_DEBUG`              | off                                       |
    /// | `BRIEF_HOST_MODE`        | `standalone`                              |
    /// | `BRIEF_DATA_DIR`         | `data`                                    |
    /// | `DATABASE_URL`           | -- (plugin: required)                     |
    /// | `TABLE_PREFIX`           | `wp_`                                     |
    /// | `NONCE_SECRET`           | -- (plugin: required)                     |
    /// | `NONCE_LIFESPAN_SECS`    | `86400`                                   |
    /// | `PUBLIC_BASE_PATH`       | empty                                     |
    /// | `WHATSAPP_NUMBER`        | `5541996860137`                           |
    /// | `FRAGRANCE_API_BASE_URL` | `https://fragrancefinder.p.rapidapi.com`  |
    /// | `FRAGRANCE_API_HOST`     | `fragrancefinder.p.rapidapi.com`          |
    /// | `FRAGRANCE_API_KEY`      | unset                                     |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through `lookup` (env var name -> value).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());
        let required = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::MissingForPlugin(name))
        };

        let host = var("HOST", "0.0.0.0");
        let port: u16 = parse("PORT", &var("PORT", "3000"), "a valid u16")?;

        let cors_origins: Vec<String> = var("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if let Some(bad) = cors_origins.iter().find(|o| o.parse::<HeaderValue>().is_err()) {
            return Err(ConfigError::Invalid {
                name: "CORS_ORIGINS",
                expected: "comma-separated origins",
                value: bad.clone(),
            });
        }

        let request_timeout_secs: u64 = parse(
            "REQUEST_TIMEOUT_SECS",
            &var("REQUEST_TIMEOUT_SECS", "30"),
            "a valid u64",
        )?;

        let debug = lookup("APP_DEBUG").is_some_and(|v| is_truthy(&v));

        let mode: HostMode = var("BRIEF_HOST_MODE", "standalone").parse()?;
        let brief = match mode {
            HostMode::Standalone => BriefHost::Standalone {
                data_dir: PathBuf::from(var("BRIEF_DATA_DIR", "data")),
            },
            HostMode::Plugin => BriefHost::Plugin {
                database_url: required("DATABASE_URL")?,
                table_prefix: var("TABLE_PREFIX", DEFAULT_PREFIX),
                nonce_secret: required("NONCE_SECRET")?,
                nonce_lifespan_secs: parse(
                    "NONCE_LIFESPAN_SECS",
                    &var("NONCE_LIFESPAN_SECS", &DEFAULT_LIFESPAN_SECS.to_string()),
                    "a positive number of seconds",
                )
                .and_then(|secs: i64| {
                    if secs > 0 {
                        Ok(secs)
                    } else {
                        Err(ConfigError::Invalid {
                            name: "NONCE_LIFESPAN_SECS",
                            expected: "a positive number of seconds",
                            value: secs.to_string(),
                        })
                    }
                })?,
            },
        };

        let fragrance = FragranceConfig {
            base_url: var("FRAGRANCE_API_BASE_URL", DEFAULT_BASE_URL),
            api_host: var("FRAGRANCE_API_HOST", DEFAULT_API_HOST),
            api_key: lookup("FRAGRANCE_API_KEY").filter(|k| !k.trim().is_empty()),
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            debug,
            brief,
            public_base_path: var("PUBLIC_BASE_PATH", "").trim_end_matches('/').to_string(),
            whatsapp_number: var("WHATSAPP_NUMBER", DEFAULT_WHATSAPP_NUMBER),
            fragrance,
        })
    }

    pub fn host_mode(&self) -> HostMode {
        self.brief.mode()
    }

    /// URL the browser should post briefs to.
    pub fn submit_url(&self) -> String {
        format!("{}/api{}", self.public_base_path, self.host_mode().submit_path())
    }
}

fn parse<T: FromStr>(name: &'static str, value: &str, expected: &'static str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        name,
        expected,
        value: value.to_string(),
    })
}

/// `APP_DEBUG` is on unless empty, `0`, `false`, `off` or `no`.
fn is_truthy(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "" | "0" | "false" | "off" | "no"
    )
}
