use wasm_bindgen::JsCast;
use web_sys::HtmlMetaElement;

/// Name of the `<meta>` tag carrying the API base URL.
pub const API_URL_META: &str = "retrievify-api-url";

const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Runtime configuration, built once at startup and provided via context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    api_base: String,
}

impl AppConfig {
    pub fn new(api_base: &str) -> Self {
        Self {
            api_base: api_base.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Resolve from the page's meta tag, then the build environment, then
    /// the local default.
    pub fn load() -> Self {
        let candidates = [
            meta_content(API_URL_META),
            option_env!("RETRIEVIFY_API_URL").map(str::to_string),
        ];
        let base = candidates
            .into_iter()
            .flatten()
            .find(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        Self::new(&base)
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}

fn meta_content(name: &str) -> Option<String> {
    let doc = web_sys::window()?.document()?;
    let el = doc
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()??;
    el.dyn_into::<HtmlMetaElement>().ok().map(|m| m.content())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = AppConfig::new("https://api.retrievify.app/ ");
        assert_eq!(config.api_base(), "https://api.retrievify.app");
    }

    #[test]
    fn test_endpoint_joins_single_slash() {
        let config = AppConfig::new("https://api.retrievify.app/");
        assert_eq!(
            config.endpoint("/spotify/getuser"),
            "https://api.retrievify.app/spotify/getuser"
        );
        assert_eq!(
            config.endpoint("spotify/getuser"),
            "https://api.retrievify.app/spotify/getuser"
        );
    }
}
