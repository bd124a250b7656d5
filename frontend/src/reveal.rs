//! Scroll-triggered reveal animations.
//!
//! Each marked element walks `Unseen -> Pending -> Animating -> Settled`
//! exactly once. The first visibility signal starts the walk; every later
//! signal is ignored. What the element looks like is derived from its kind and
//! phase by [`presentation`], and pushed to the host through a [`StyleSink`].

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use crate::scheduler::Scheduler;

pub const DEFAULT_SETTLE_DELAY_MS: u32 = 50;
pub const REVEAL_TRANSITION: &str = "all 0.6s ease-out";

const OFFSET_PX: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationKind {
    FadeUp,
    FadeDown,
    FadeLeft,
    FadeRight,
    ZoomIn,
    ZoomOut,
}

impl AnimationKind {
    pub fn is_zoom(self) -> bool {
        matches!(self, AnimationKind::ZoomIn | AnimationKind::ZoomOut)
    }

    /// Offset the element starts from before easing to rest.
    pub fn start_transform(self) -> Transform {
        match self {
            AnimationKind::FadeUp => Transform::TranslateY(OFFSET_PX),
            AnimationKind::FadeDown => Transform::TranslateY(-OFFSET_PX),
            AnimationKind::FadeLeft => Transform::TranslateX(-OFFSET_PX),
            AnimationKind::FadeRight => Transform::TranslateX(OFFSET_PX),
            AnimationKind::ZoomIn => Transform::Scale(0.9),
            AnimationKind::ZoomOut => Transform::Scale(1.1),
        }
    }

    pub fn rest_transform(self) -> Transform {
        if self.is_zoom() {
            Transform::Scale(1.0)
        } else {
            Transform::Identity
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKind(pub String);

impl fmt::Display for UnknownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown animation kind `{}`", self.0)
    }
}

impl FromStr for AnimationKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "fade-up" => Ok(AnimationKind::FadeUp),
            "fade-down" => Ok(AnimationKind::FadeDown),
            "fade-left" => Ok(AnimationKind::FadeLeft),
            "fade-right" => Ok(AnimationKind::FadeRight),
            "zoom-in" => Ok(AnimationKind::ZoomIn),
            "zoom-out" => Ok(AnimationKind::ZoomOut),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}

/// Reads a delay attribute the way the browser's `parseInt` would: leading
/// digits count, anything unparsable or negative is 0.
pub fn parse_delay(raw: Option<&str>) -> u32 {
    let Some(raw) = raw else { return 0 };
    let raw = raw.trim_start();
    let (negative, digits) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if negative || end == 0 {
        return 0;
    }
    digits[..end].parse::<u64>().map_or(u32::MAX, |v| v.min(u64::from(u32::MAX)) as u32)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RevealPhase {
    Unseen,
    Pending,
    Animating,
    Settled,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    Identity,
    TranslateX(f64),
    TranslateY(f64),
    Scale(f64),
}

impl Transform {
    pub fn css(&self) -> String {
        match self {
            Transform::Identity => "translate(0)".to_string(),
            Transform::TranslateX(px) => format!("translateX({}px)", px),
            Transform::TranslateY(px) => format!("translateY({}px)", px),
            Transform::Scale(s) => format!("scale({})", s),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealStyle {
    pub opacity: f64,
    pub transform: Transform,
    pub transition: &'static str,
}

impl RevealStyle {
    pub fn opacity_css(&self) -> String {
        format!("{}", self.opacity)
    }

    /// Inline declarations to write, in order.
    pub fn declarations(&self) -> [(&'static str, String); 3] {
        [
            ("transition", self.transition.to_string()),
            ("opacity", self.opacity_css()),
            ("transform", self.transform.css()),
        ]
    }
}

/// Inline style for an element of `kind` in `phase`.
///
/// `None` means the host styling is left alone. An unrecognized kind has no
/// start offset, so its start and rest states coincide.
pub fn presentation(kind: Option<AnimationKind>, phase: RevealPhase) -> Option<RevealStyle> {
    let (opacity, transform) = match (phase, kind) {
        (RevealPhase::Unseen | RevealPhase::Pending, _) => return None,
        (RevealPhase::Animating, Some(kind)) => (0.0, kind.start_transform()),
        (RevealPhase::Settled, Some(kind)) => (1.0, kind.rest_transform()),
        (RevealPhase::Animating | RevealPhase::Settled, None) => (1.0, Transform::Identity),
    };
    Some(RevealStyle {
        opacity,
        transform,
        transition: REVEAL_TRANSITION,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub usize);

/// Host side of the animator: where styles land.
pub trait StyleSink {
    /// Whether the element is still part of the page.
    fn is_attached(&self, id: ElementId) -> bool;

    fn apply(&self, id: ElementId, style: &RevealStyle);
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedElement {
    pub kind: Option<AnimationKind>,
    pub delay_ms: u32,
    pub phase: RevealPhase,
}

impl AnimatedElement {
    /// Builds an element from its raw `data-aos` / `data-aos-delay` values.
    pub fn from_attributes(kind: Option<&str>, delay: Option<&str>) -> Self {
        let kind = kind.and_then(|raw| match raw.parse::<AnimationKind>() {
            Ok(kind) => Some(kind),
            Err(e) => {
                tracing::debug!("{}, element will appear without an offset", e);
                None
            }
        });
        Self {
            kind,
            delay_ms: parse_delay(delay),
            phase: RevealPhase::Unseen,
        }
    }

    pub fn has_animated(&self) -> bool {
        self.phase == RevealPhase::Settled
    }
}

struct Shared {
    elements: Vec<AnimatedElement>,
}

/// Drives the reveal sequence of every registered element.
///
/// Cloning is cheap and yields a handle to the same element set, which is
/// how scheduled callbacks reach back into the animator.
#[derive(Clone)]
pub struct RevealAnimator {
    shared: Rc<RefCell<Shared>>,
    scheduler: Rc<dyn Scheduler>,
    sink: Rc<dyn StyleSink>,
    settle_delay_ms: u32,
}

impl RevealAnimator {
    pub fn new(scheduler: Rc<dyn Scheduler>, sink: Rc<dyn StyleSink>, settle_delay_ms: u32) -> Self {
        Self {
            shared: Rc::new(RefCell::new(Shared { elements: Vec::new() })),
            scheduler,
            sink,
            settle_delay_ms,
        }
    }

    /// Adds an element to the tracked set. Ids are dense and start at 0.
    pub fn register(&self, element: AnimatedElement) -> ElementId {
        let mut shared = self.shared.borrow_mut();
        shared.elements.push(element);
        ElementId(shared.elements.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.shared.borrow().elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn phase(&self, id: ElementId) -> Option<RevealPhase> {
        self.shared.borrow().elements.get(id.0).map(|e| e.phase)
    }

    pub fn has_animated(&self, id: ElementId) -> bool {
        self.phase(id) == Some(RevealPhase::Settled)
    }

    /// Style the element should currently carry, if any.
    pub fn style(&self, id: ElementId) -> Option<RevealStyle> {
        let shared = self.shared.borrow();
        let element = shared.elements.get(id.0)?;
        presentation(element.kind, element.phase)
    }

    /// Visibility signal from the host. Only the first one per element counts.
    pub fn on_visible(&self, id: ElementId) {
        let delay_ms = {
            let mut shared = self.shared.borrow_mut();
            let Some(element) = shared.elements.get_mut(id.0) else {
                return;
            };
            if element.phase != RevealPhase::Unseen {
                return;
            }
            element.phase = RevealPhase::Pending;
            element.delay_ms
        };
        tracing::debug!(element = id.0, delay_ms, "reveal pending");

        let this = self.clone();
        self.scheduler
            .schedule(delay_ms, Box::new(move || this.begin(id)));
    }

    fn begin(&self, id: ElementId) {
        if !self.advance(id, RevealPhase::Pending, RevealPhase::Animating) {
            return;
        }
        let this = self.clone();
        self.scheduler
            .schedule(self.settle_delay_ms, Box::new(move || this.settle(id)));
    }

    fn settle(&self, id: ElementId) {
        self.advance(id, RevealPhase::Animating, RevealPhase::Settled);
    }

    /// Moves `id` from `from` to `to` and pushes the new style. Returns false
    /// when the element vanished or is not in `from`.
    fn advance(&self, id: ElementId, from: RevealPhase, to: RevealPhase) -> bool {
        if !self.sink.is_attached(id) {
            tracing::debug!(element = id.0, "element detached, dropping reveal step");
            return false;
        }
        let style = {
            let mut shared = self.shared.borrow_mut();
            let Some(element) = shared.elements.get_mut(id.0) else {
                return false;
            };
            if element.phase != from {
                return false;
            }
            element.phase = to;
            presentation(element.kind, to)
        };
        tracing::debug!(element = id.0, phase = ?to, "reveal phase changed");
        if let Some(style) = style {
            self.sink.apply(id, &style);
        }
        true
    }
}
