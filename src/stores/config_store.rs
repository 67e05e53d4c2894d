use gloo_storage::{LocalStorage, Storage};
use url::Url;

/// Backend address used when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/clone";

/// LocalStorage key that overrides the endpoint at runtime
pub const STORAGE_KEY: &str = "webclone_endpoint";

/// Endpoint baked in at build time (`WEBCLONE_ENDPOINT=... dx build`)
const BUILD_ENDPOINT: Option<&str> = option_env!("WEBCLONE_ENDPOINT");

#[derive(Clone, Debug, PartialEq)]
pub struct CloneConfig {
    pub endpoint: String,
}

impl Default for CloneConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl CloneConfig {
    /// Pick the first usable endpoint: stored override, then build-time value,
    /// then the default.
    pub fn resolve(stored: Option<&str>, build_time: Option<&str>) -> Self {
        let candidates = [("localStorage", stored), ("build environment", build_time)];

        for (source, candidate) in candidates {
            let Some(candidate) = candidate.map(str::trim).filter(|c| !c.is_empty()) else {
                continue;
            };
            match validate_endpoint(candidate) {
                Ok(endpoint) => {
                    log::info!("Using clone endpoint from {}: {}", source, endpoint);
                    return Self { endpoint };
                }
                Err(e) => log::warn!("Ignoring clone endpoint from {}: {}", source, e),
            }
        }

        Self::default()
    }
}

/// Check that an endpoint is an absolute http(s) URL
pub fn validate_endpoint(candidate: &str) -> Result<String, String> {
    let url = Url::parse(candidate).map_err(|e| format!("{} ({})", candidate, e))?;
    match url.scheme() {
        "http" | "https" => Ok(url.to_string()),
        other => Err(format!("{} (unsupported scheme {})", candidate, other)),
    }
}

/// Load the clone configuration for this page
pub fn load_config() -> CloneConfig {
    let stored = LocalStorage::get::<String>(STORAGE_KEY).ok();
    CloneConfig::resolve(stored.as_deref(), BUILD_ENDPOINT)
}
