//! Hover micro-interactions, parallax and staggered loading animations.

const BAR_GRADIENT: &str = "linear-gradient(to top, #1a5276, #3498db)";
const BAR_GRADIENT_HOVER: &str = "linear-gradient(to top, #f39c12, #e67e22)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTarget {
    MissionCard,
    /// The "read more" link inside a news card.
    NewsLink,
    Button,
    ChartBar,
}

/// Ordered CSS declarations rendered into a `style` attribute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InlineStyle(Vec<(&'static str, String)>);

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.0.push((property, value.into()));
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value.as_str())
    }

    /// Appends every declaration of `other`.
    pub fn merge(mut self, other: InlineStyle) -> Self {
        self.0.extend(other.0);
        self
    }

    pub fn to_css(&self) -> String {
        self.0
            .iter()
            .map(|(name, value)| format!("{}: {};", name, value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub fn hover_style(target: HoverTarget, hovered: bool) -> InlineStyle {
    match (target, hovered) {
        (HoverTarget::MissionCard, true) => InlineStyle::new()
            .with("transform", "translateY(-10px) scale(1.02)")
            .with("box-shadow", "0 20px 40px rgba(0,0,0,0.15)"),
        (HoverTarget::MissionCard, false) => InlineStyle::new()
            .with("transform", "translateY(0) scale(1)")
            .with("box-shadow", "0 5px 15px rgba(0,0,0,0.08)"),
        (HoverTarget::NewsLink, true) => InlineStyle::new().with("transform", "translateX(5px)"),
        (HoverTarget::NewsLink, false) => InlineStyle::new().with("transform", "translateX(0)"),
        (HoverTarget::Button, true) => InlineStyle::new().with("transform", "translateY(-2px)"),
        (HoverTarget::Button, false) => InlineStyle::new().with("transform", "translateY(0)"),
        (HoverTarget::ChartBar, true) => InlineStyle::new()
            .with("opacity", "0.8")
            .with("transform", "scale(1.05)")
            .with("background", BAR_GRADIENT_HOVER),
        (HoverTarget::ChartBar, false) => InlineStyle::new()
            .with("opacity", "1")
            .with("transform", "scale(1)")
            .with("background", BAR_GRADIENT),
    }
}

/// Hero offset for the current scroll position.
pub fn parallax_offset(scroll_y: f64, speed: f64) -> f64 {
    scroll_y * speed
}

pub fn parallax_style(scroll_y: f64, speed: f64) -> InlineStyle {
    InlineStyle::new().with(
        "transform",
        format!("translateY({}px)", parallax_offset(scroll_y, speed)),
    )
}

/// Start delay of the `index`-th item in a staggered sequence.
pub fn stagger_delay(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(step_ms)
}

/// Bar growth animation, staggered by position.
///
/// Fills backwards only: once grown, the bar's own `transform` is free for
/// the hover scale.
pub fn grow_bar_style(index: usize, step_ms: u32) -> InlineStyle {
    InlineStyle::new()
        .with("animation", "growBar 1s ease-out backwards")
        .with("animation-delay", format!("{}ms", stagger_delay(index, step_ms)))
}

/// Icon pulse, staggered by position.
pub fn pulse_icon_style(index: usize, step_ms: u32) -> InlineStyle {
    InlineStyle::new()
        .with("animation", "pulseIcon 2s infinite")
        .with("animation-delay", format!("{}ms", stagger_delay(index, step_ms)))
}

/// Keyframes installed once as global styles.
pub const KEYFRAMES: &str = r#"
@keyframes growBar {
    from { transform: scaleY(0); opacity: 0; }
    to { transform: scaleY(1); opacity: 1; }
}
@keyframes pulseIcon {
    0% { transform: scale(1); }
    50% { transform: scale(1.1); }
    100% { transform: scale(1); }
}
@keyframes fadeInUp {
    from { opacity: 0; transform: translateY(30px); }
    to { opacity: 1; transform: translateY(0); }
}
@keyframes bounce {
    0%, 20%, 53%, 80%, 100% { transform: translate3d(0,0,0); }
    40%, 43% { transform: translate3d(0,-10px,0); }
    70% { transform: translate3d(0,-5px,0); }
    90% { transform: translate3d(0,-2px,0); }
}
.bounce { animation: bounce 1s ease infinite; }
.pulse { animation: pulseIcon 2s infinite; }
.fade-in-up { animation: fadeInUp 0.6s ease-out; }
"#;
