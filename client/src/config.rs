//! API endpoint configuration baked in at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle cannot read process environment at runtime, so the base URL
//! and API prefix are captured with `option_env!` when the crate is compiled.
//!
//! - `DASHBOARD_SERVER_URL`: backend origin, empty for same-origin (default `""`)
//! - `DASHBOARD_API_PREFIX`: path prefix for REST routes (default `/api`)
//! - `DASHBOARD_API_URL`: full API base, overrides the two above when set

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_PREFIX: &str = "/api";

/// Resolved REST base used to build every endpoint URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base: String,
}

impl ApiConfig {
    /// Compose a config from a server origin, an API prefix, and an optional
    /// full-URL override.
    pub fn new(server_url: &str, api_prefix: &str, api_url: Option<&str>) -> Self {
        let base = match api_url.map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => url.trim_end_matches('/').to_owned(),
            None => join(server_url.trim_end_matches('/'), api_prefix.trim_end_matches('/')),
        };
        Self { base }
    }

    /// Build the config from values captured at compile time.
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("DASHBOARD_SERVER_URL").unwrap_or(""),
            option_env!("DASHBOARD_API_PREFIX").unwrap_or(DEFAULT_API_PREFIX),
            option_env!("DASHBOARD_API_URL"),
        )
    }

    /// API base without a trailing slash.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Full URL for `path` under the API base.
    pub fn endpoint(&self, path: &str) -> String {
        join(&self.base, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

fn join(base: &str, path: &str) -> String {
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        return base.to_owned();
    }
    format!("{base}/{path}")
}
