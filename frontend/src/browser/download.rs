use wasm_bindgen::{JsCast, JsValue};
use web_sys::{js_sys, Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use super::dom::document;
use crate::error::{Result, SiteError};
use crate::stats::export::{ExportPayload, FileSaver};

type Revoke = fn(&str) -> std::result::Result<(), JsValue>;

/// An object URL that is revoked when dropped, on success and error paths alike.
struct ObjectUrl {
    url: String,
    revoke: Revoke,
}

impl ObjectUrl {
    fn new(url: String, revoke: Revoke) -> Self {
        Self { url, revoke }
    }

    fn for_blob(blob: &Blob) -> Result<Self> {
        let url = Url::create_object_url_with_blob(blob)
            .map_err(|e| SiteError::dom("createObjectURL", e))?;
        Ok(Self::new(url, Url::revoke_object_url))
    }

    fn as_str(&self) -> &str {
        &self.url
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        if let Err(e) = (self.revoke)(&self.url) {
            log::debug!("revokeObjectURL failed for {}: {:?}", self.url, e);
        }
    }
}

/// Saves exports through a temporary object URL and a clicked anchor.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserDownload;

impl FileSaver for BrowserDownload {
    fn save(&self, payload: &ExportPayload) -> Result<()> {
        let document = document()?;
        let body = document.body().ok_or(SiteError::NoDocument)?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|e| SiteError::dom("create_element", e))?
            .dyn_into()
            .map_err(|_| SiteError::Dom("anchor cast failed".to_string()))?;

        let parts = js_sys::Array::new();
        parts.push(&JsValue::from_str(&payload.body));
        let options = BlobPropertyBag::new();
        options.set_type(payload.mime);
        let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
            .map_err(|e| SiteError::dom("Blob", e))?;

        let url = ObjectUrl::for_blob(&blob)?;
        anchor.set_href(url.as_str());
        anchor.set_download(&payload.filename);
        body.append_child(&anchor)
            .map_err(|e| SiteError::dom("append_child", e))?;
        anchor.click();
        anchor.remove();

        log::info!("Exported {}", payload.filename);
        Ok(())
    }
}
