//! API configuration for frontend-backend communication
//!
//! The backend host is resolved once at startup and handed to pages through
//! Leptos context, so deployments and tests can point at another server.

/// Name of the `<meta>` tag that overrides the API host at runtime
pub const API_BASE_META: &str = "minicore-api-base";

/// Host used when neither the page nor the build provides one
pub const DEFAULT_API_BASE: &str = "https://minicoreapiservice20250623191317.azurewebsites.net";

/// Location of the commission backend
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Resolve the API base from the host page, then the build, then the default.
    ///
    /// - `<meta name="minicore-api-base" content="https://...">` in `index.html`
    /// - `MINICORE_API_BASE` at compile time
    pub fn from_environment() -> Self {
        let base = meta_api_base()
            .or_else(|| option_env!("MINICORE_API_BASE").map(str::to_string))
            .filter(|b| !b.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        Self::new(base)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a full API URL from a path
    ///
    /// # Example
    /// ```rust
    /// use frontend::shared::api_utils::ApiConfig;
    ///
    /// let config = ApiConfig::new("http://localhost:5000/");
    /// assert_eq!(config.url("/api/vendedores"), "http://localhost:5000/api/vendedores");
    /// ```
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

fn meta_api_base() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document
        .query_selector(&format!("meta[name=\"{}\"]", API_BASE_META))
        .ok()??;
    meta.get_attribute("content")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_with_single_slash() {
        let config = ApiConfig::new("http://localhost:5000/");
        assert_eq!(config.base_url(), "http://localhost:5000");
        assert_eq!(
            config.url("/api/vendedores"),
            "http://localhost:5000/api/vendedores"
        );
        assert_eq!(config.url("api/reglas"), "http://localhost:5000/api/reglas");
    }

    #[test]
    fn test_default_points_at_production_host() {
        assert_eq!(
            ApiConfig::default().url("/api/ventas"),
            format!("{}/api/ventas", DEFAULT_API_BASE)
        );
    }
}
