//! Site tunables with compiled-in defaults.
//!
//! Pages may override any field through an embedded JSON block:
//!
//! ```html
//! <script type="application/json" id="site-config">{"rotation_interval_ms": 7000}</script>
//! ```
//!
//! Unknown fields are ignored. A block that fails to parse or validate is
//! logged and the defaults are used instead.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    FADE_THRESHOLD, HASH_SCROLL_DELAY_MS, HEADER_FALLBACK_PX, MESSAGE_FADE_DELAY_MS, MESSAGE_POLL_ATTEMPTS,
    MESSAGE_POLL_INTERVAL_MS, NAV_ROOT_MARGIN, NAV_THRESHOLD, ROTATION_INTERVAL_MS, THEME_STORAGE_KEY,
};
use crate::error::SiteError;
use crate::state::theme::Theme;

/// Element id of the optional JSON override block.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub rotation_interval_ms: u32,
    pub header_fallback_px: f64,
    pub nav_root_margin: String,
    pub nav_threshold: f64,
    pub fade_threshold: f64,
    pub hash_scroll_delay_ms: u32,
    pub message_fade_delay_ms: u32,
    pub message_poll_interval_ms: u32,
    pub message_poll_attempts: u32,
    pub theme_storage_key: String,
    pub default_theme: Theme,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            rotation_interval_ms: ROTATION_INTERVAL_MS,
            header_fallback_px: HEADER_FALLBACK_PX,
            nav_root_margin: NAV_ROOT_MARGIN.to_owned(),
            nav_threshold: NAV_THRESHOLD,
            fade_threshold: FADE_THRESHOLD,
            hash_scroll_delay_ms: HASH_SCROLL_DELAY_MS,
            message_fade_delay_ms: MESSAGE_FADE_DELAY_MS,
            message_poll_interval_ms: MESSAGE_POLL_INTERVAL_MS,
            message_poll_attempts: MESSAGE_POLL_ATTEMPTS,
            theme_storage_key: THEME_STORAGE_KEY.to_owned(),
            default_theme: Theme::Dark,
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON override block.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::InvalidConfig`] for malformed JSON or out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| SiteError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse an optional override block, falling back to defaults on any problem.
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!(target: "site::config", "{err}; using defaults");
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), SiteError> {
        if self.rotation_interval_ms == 0 {
            return Err(SiteError::InvalidConfig("rotation_interval_ms must be positive".into()));
        }
        if self.message_poll_interval_ms == 0 {
            return Err(SiteError::InvalidConfig("message_poll_interval_ms must be positive".into()));
        }
        for (name, value) in [("nav_threshold", self.nav_threshold), ("fade_threshold", self.fade_threshold)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SiteError::InvalidConfig(format!("{name} must be within [0, 1], got {value}")));
            }
        }
        if !self.header_fallback_px.is_finite() || self.header_fallback_px < 0.0 {
            return Err(SiteError::InvalidConfig("header_fallback_px must be a non-negative number".into()));
        }
        if self.theme_storage_key.is_empty() {
            return Err(SiteError::InvalidConfig("theme_storage_key must not be empty".into()));
        }
        Ok(())
    }
}
