//! Frontend Configuration
//!
//! Read once at startup from the hosting page.

use std::time::Duration;

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// `<meta>` tag that overrides the API origin
pub const API_BASE_META: &str = "taskmaster-api-base";

/// Typing pause before a search is sent
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Origin of the REST API, without trailing slash
    pub api_base: String,
    pub search_debounce: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            search_debounce: SEARCH_DEBOUNCE,
        }
    }
}

impl AppConfig {
    pub fn with_api_base(api_base: &str) -> Self {
        Self {
            api_base: normalize_base(api_base),
            ..Default::default()
        }
    }

    /// Meta override if present, otherwise the page origin
    pub fn from_window() -> Self {
        let base = meta_api_base()
            .or_else(|| window().location().origin().ok())
            .unwrap_or_default();
        tracing::debug!(api_base = %base, "loaded frontend config");
        Self::with_api_base(&base)
    }
}

fn meta_api_base() -> Option<String> {
    let selector = format!("meta[name=\"{}\"]", API_BASE_META);
    let meta = document()
        .query_selector(&selector)
        .ok()
        .flatten()?
        .dyn_into::<web_sys::HtmlMetaElement>()
        .ok()?;
    let content = meta.content();
    (!content.trim().is_empty()).then_some(content)
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}
