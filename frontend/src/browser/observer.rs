use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{js_sys, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::{Result, SiteError};

type EntriesCallback = dyn FnMut(js_sys::Array, IntersectionObserver);

/// An `IntersectionObserver` that reports each element the first time it
/// enters the viewport, then stops watching it.
///
/// Disconnects when dropped, so the owner decides how long observation lasts.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<EntriesCallback>,
}

impl VisibilityObserver {
    pub fn new(
        threshold: f64,
        root_margin: &str,
        mut on_visible: impl FnMut(Element) + 'static,
    ) -> Result<Self> {
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    if entry.is_intersecting() {
                        let target = entry.target();
                        observer.unobserve(&target);
                        on_visible(target);
                    }
                }
            }
        }) as Box<EntriesCallback>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        options.set_root_margin(root_margin);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|e| SiteError::dom("IntersectionObserver", e))?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
