use std::{env, sync::LazyLock};

/// Name of the environment variable that overrides the backend base URL.
pub const BASE_URL_ENV_VAR: &str = "SUMMONSES_API_BASE_URL";

/// Base URL used when no environment override is present. This is the
/// address the backend serves on in local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:10827/api";

/// The process-wide client. Built from the environment the first time
/// anybody asks for it.
static SHARED_CLIENT: LazyLock<ApiClient> =
    LazyLock::new(|| ApiClient::new(ApiConfig::from_env()));

/// Where the backend lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Reads the configuration from the environment, falling back to the
    /// local development address when the variable is unset or empty.
    pub fn from_env() -> Self {
        Self::from_override(env::var(BASE_URL_ENV_VAR).ok())
    }

    /// Builds a config pointing at `base_url` directly. Used by tests and
    /// by embedders that do not want the environment consulted.
    pub fn with_base_url<S: Into<String>>(base_url: S) -> Self {
        Self::from_override(Some(base_url.into()))
    }

    fn from_override(base_url: Option<String>) -> Self {
        let base_url = base_url
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        // Request paths are absolute, so a trailing slash here would put
        // '//' into every URL we build.
        let base_url = base_url.trim_end_matches('/').to_string();

        Self { base_url }
    }
}

/// A thin wrapper over a `reqwest::Client` bound to the backend base URL.
/// Every request this crate makes goes through one of these.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url,
        }
    }

    /// Returns the process-wide client. The first caller pays for reading
    /// the environment and constructing the underlying `reqwest::Client`.
    pub fn shared() -> &'static ApiClient {
        &SHARED_CLIENT
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Joins an absolute request path onto the base URL.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
