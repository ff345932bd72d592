// Where the content-generation backend lives.

#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_NATIVE_BASE: &str = "http://127.0.0.1:5000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Origin (and optional path prefix) the endpoints are joined onto.
    /// Empty means same origin, which is the normal case in the browser.
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn resolve() -> Self {
        let base_url = default_base();
        log::info!(
            "API base: {}",
            if base_url.is_empty() { "(same origin)" } else { base_url.as_str() }
        );
        Self { base_url }
    }

    /// Full URL for an endpoint path such as `/api/explain`.
    pub fn url_for(&self, endpoint: &str) -> String {
        let base = self.base_url.trim().trim_end_matches('/');
        let path = endpoint.trim();
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }
}

fn normalize_base(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.trim_end_matches('/').to_string())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn default_base() -> String {
    std::env::var("EDUGENIUS_API_BASE")
        .ok()
        .and_then(|s| normalize_base(&s))
        .unwrap_or_else(|| DEFAULT_NATIVE_BASE.to_string())
}

#[cfg(target_arch = "wasm32")]
fn default_base() -> String {
    if let Some(base) = option_env!("EDUGENIUS_API_BASE").and_then(normalize_base) {
        return base;
    }
    let Some(window) = web_sys::window() else {
        return String::new();
    };

    let from_query = || {
        let search = window.location().search().ok()?;
        let raw = query_value(&search, "api_base")?;
        let decoded = js_sys::decode_uri_component(raw).ok()?.as_string()?;
        normalize_base(&decoded)
    };
    let from_meta = || {
        let meta = window
            .document()?
            .query_selector("meta[name='edugenius-api-base']")
            .ok()??;
        normalize_base(&meta.get_attribute("content")?)
    };
    let from_storage = || {
        let item = window.local_storage().ok()??.get_item("edugenius_api_base").ok()??;
        normalize_base(&item)
    };

    from_query()
        .or_else(from_meta)
        .or_else(from_storage)
        .unwrap_or_default()
}

/// Raw (still percent-encoded) value of `key` in a `?a=b&c=d` query string.
#[cfg(any(target_arch = "wasm32", test))]
fn query_value<'a>(search: &'a str, key: &str) -> Option<&'a str> {
    search
        .strip_prefix('?')
        .unwrap_or(search)
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_base_and_endpoint_without_double_slashes() {
        let cfg = ApiConfig::new("http://localhost:5000/");
        assert_eq!(cfg.url_for("/api/explain"), "http://localhost:5000/api/explain");
        assert_eq!(cfg.url_for("api/explain"), "http://localhost:5000/api/explain");
    }

    #[test]
    fn empty_base_keeps_relative_paths() {
        let cfg = ApiConfig::new("");
        assert_eq!(cfg.url_for("/api/generate-quiz"), "/api/generate-quiz");
    }

    #[test]
    fn query_lookup_finds_the_named_parameter() {
        assert_eq!(
            query_value("?lang=en&api_base=https%3A%2F%2Fapi.example.org", "api_base"),
            Some("https%3A%2F%2Fapi.example.org")
        );
        assert_eq!(query_value("api_base", "api_base"), Some(""));
        assert_eq!(query_value("?lang=en", "api_base"), None);
        assert_eq!(query_value("", "api_base"), None);
    }

    #[test]
    fn blank_values_are_ignored() {
        assert_eq!(normalize_base("   "), None);
        assert_eq!(
            normalize_base(" https://edu.example.org/ "),
            Some("https://edu.example.org".to_string())
        );
    }
}
