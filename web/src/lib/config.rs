//! Build-time configuration for the API endpoint. An empty base URL means
//! same-origin requests, which is the deployment default (the backend serves
//! the bundle or sits behind the same proxy).

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    /// Loads config from build-time environment variables.
    pub fn load() -> Self {
        let api_base_url = option_env!("PORTAL_API_BASE_URL").unwrap_or("");
        Self {
            api_base_url: api_base_url.to_string(),
        }
    }
}
