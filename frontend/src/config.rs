use serde::Deserialize;

/// Element id of the optional inline JSON block overriding the defaults.
pub const CONFIG_SCRIPT_ID: &str = "site-config";

#[cfg(debug_assertions)]
pub fn log_level() -> log::Level {
    log::Level::Debug // Verbose while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> log::Level {
    log::Level::Info
}

/// Tunables for every client-side behavior on the page.
///
/// Every field defaults to the value the site ships with, so an
/// override block only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct SiteConfig {
    pub reveal: RevealConfig,
    pub stats: StatsConfig,
    pub counters: CounterConfig,
    pub effects: EffectsConfig,
    pub notifications: NotificationConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Fraction of the element that must be visible.
    pub threshold: f64,
    pub root_margin: String,
    pub settle_delay_ms: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
            settle_delay_ms: 50,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    pub update_period_ms: u32,
    pub refresh_delay_ms: u32,
    pub export_prefix: String,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            update_period_ms: 10_000,
            refresh_delay_ms: 1_000,
            export_prefix: "dren-statistiques".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub threshold: f64,
    pub duration_ms: u32,
    pub frame_ms: u32,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            duration_ms: 2_000,
            frame_ms: 16,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub parallax_speed: f64,
    pub bar_stagger_ms: u32,
    pub icon_stagger_ms: u32,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            parallax_speed: 0.5,
            bar_stagger_ms: 200,
            icon_stagger_ms: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub default_ttl_ms: u32,
    pub data_update_ttl_ms: u32,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            default_ttl_ms: 5_000,
            data_update_ttl_ms: 3_000,
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    /// Parses an override block, keeping the defaults when it is malformed.
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        match raw.map(str::trim).filter(|raw| !raw.is_empty()) {
            Some(raw) => Self::from_json(raw).unwrap_or_else(|e| {
                log::warn!("Ignoring malformed site config: {}", e);
                Self::default()
            }),
            None => Self::default(),
        }
    }
}
