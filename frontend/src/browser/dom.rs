use wasm_bindgen::JsCast;
use web_sys::{js_sys, Document, HtmlElement, Window};

use crate::config::{SiteConfig, CONFIG_SCRIPT_ID};
use crate::error::{Result, SiteError};
use crate::stats::simulation::RandomSource;

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(SiteError::NoDocument)
}

/// Every element matching `selector`, in document order, as `HtmlElement`s.
pub fn query_all(selector: &str) -> Result<Vec<HtmlElement>> {
    let nodes = document()?
        .query_selector_all(selector)
        .map_err(|e| SiteError::dom("query_selector_all", e))?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

/// Site configuration, with overrides from the inline JSON block if present.
pub fn load_config() -> SiteConfig {
    let raw = document()
        .ok()
        .and_then(|doc| doc.get_element_by_id(CONFIG_SCRIPT_ID))
        .and_then(|script| script.text_content());
    SiteConfig::from_json_or_default(raw.as_deref())
}

pub fn scroll_y() -> f64 {
    window().ok().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// `Math.random()` as a [`RandomSource`].
#[derive(Debug, Default, Clone, Copy)]
pub struct MathRandom;

impl RandomSource for MathRandom {
    fn next_f64(&mut self) -> f64 {
        js_sys::Math::random()
    }
}
