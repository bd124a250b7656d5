use std::cell::RefCell;
use std::rc::Rc;

use web_sys::HtmlElement;

use super::dom::query_all;
use super::observer::VisibilityObserver;
use crate::config::RevealConfig;
use crate::error::Result;
use crate::reveal::{AnimatedElement, ElementId, RevealAnimator, RevealStyle, StyleSink};
use crate::scheduler::Scheduler;

pub const REVEAL_SELECTOR: &str = "[data-aos]";
pub const KIND_ATTR: &str = "data-aos";
pub const DELAY_ATTR: &str = "data-aos-delay";
/// Written on every tracked element so observer entries map back to an id.
pub const REVEAL_ID_ATTR: &str = "data-reveal-id";

/// Writes reveal styles straight onto the elements' inline style.
#[derive(Default)]
pub struct DomStyleSink {
    elements: RefCell<Vec<HtmlElement>>,
}

impl DomStyleSink {
    fn push(&self, element: HtmlElement) {
        self.elements.borrow_mut().push(element);
    }
}

impl StyleSink for DomStyleSink {
    fn is_attached(&self, id: ElementId) -> bool {
        self.elements
            .borrow()
            .get(id.0)
            .map_or(false, |element| element.is_connected())
    }

    fn apply(&self, id: ElementId, style: &RevealStyle) {
        let elements = self.elements.borrow();
        let Some(element) = elements.get(id.0) else {
            return;
        };
        let css = element.style();
        for (property, value) in style.declarations() {
            if let Err(e) = css.set_property(property, &value) {
                log::debug!("Failed to set {} on reveal element {}: {:?}", property, id.0, e);
            }
        }
    }
}

/// Keeps the animator and its observer alive for as long as the page is up.
pub struct RevealBinding {
    _animator: RevealAnimator,
    _observer: VisibilityObserver,
}

/// Discovers every marked element and starts watching it.
pub fn mount_reveal(config: &RevealConfig, scheduler: Rc<dyn Scheduler>) -> Result<RevealBinding> {
    let elements = query_all(REVEAL_SELECTOR)?;
    let sink = Rc::new(DomStyleSink::default());
    let animator = RevealAnimator::new(scheduler, sink.clone(), config.settle_delay_ms);

    for element in &elements {
        let id = animator.register(AnimatedElement::from_attributes(
            element.get_attribute(KIND_ATTR).as_deref(),
            element.get_attribute(DELAY_ATTR).as_deref(),
        ));
        let _ = element.set_attribute(REVEAL_ID_ATTR, &id.0.to_string());
        sink.push(element.clone());
    }

    let handle = animator.clone();
    let observer = VisibilityObserver::new(config.threshold, &config.root_margin, move |target| {
        if let Some(id) = target
            .get_attribute(REVEAL_ID_ATTR)
            .and_then(|raw| raw.parse::<usize>().ok())
        {
            handle.on_visible(ElementId(id));
        }
    })?;
    for element in &elements {
        observer.observe(element);
    }

    log::info!("Watching {} reveal elements", elements.len());
    Ok(RevealBinding {
        _animator: animator,
        _observer: observer,
    })
}
