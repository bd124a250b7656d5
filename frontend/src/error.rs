use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors raised by the browser bindings and the export path.
///
/// Core state machines never fail: missing targets and malformed attributes
/// degrade to no-ops or defaults instead of producing one of these.
#[derive(Error, Debug)]
pub enum SiteError {
    #[error("window is not available")]
    NoWindow,

    #[error("document is not available")]
    NoDocument,

    #[error("DOM call failed: {0}")]
    Dom(String),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("export payload is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("chart drawing failed: {0}")]
    Chart(String),
}

impl SiteError {
    /// Wraps a JS exception thrown by a `web-sys` call.
    pub fn dom(context: &str, value: JsValue) -> Self {
        SiteError::Dom(format!("{}: {:?}", context, value))
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
