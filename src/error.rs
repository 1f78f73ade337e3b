//! Error types shared by every feature.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is fatal. Each feature installer returns `Result<(), SiteError>`
//! and the boot sequence logs failures under the feature's target, so one
//! broken widget leaves the rest of the page working.

use std::fmt;

/// A page behaviour that can be installed (and fail) independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Theme,
    Menu,
    Nav,
    Fade,
    Video,
    Form,
    Marquee,
    Carousel,
    Messages,
    Config,
}

impl Feature {
    /// `log` target for diagnostics emitted by this feature.
    #[must_use]
    pub fn target(self) -> &'static str {
        match self {
            Self::Theme => "site::theme",
            Self::Menu => "site::menu",
            Self::Nav => "site::nav",
            Self::Fade => "site::fade",
            Self::Video => "site::video",
            Self::Form => "site::form",
            Self::Marquee => "site::marquee",
            Self::Carousel => "site::carousel",
            Self::Messages => "site::messages",
            Self::Config => "site::config",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.target().trim_start_matches("site::");
        f.write_str(name)
    }
}

/// Media operations the platform is allowed to refuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaOp {
    Play,
    Fullscreen,
}

impl fmt::Display for MediaOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Play => f.write_str("play"),
            Self::Fullscreen => f.write_str("fullscreen"),
        }
    }
}

/// Error raised while installing or running a feature.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SiteError {
    /// An element the feature depends on is not in the document.
    #[error("{feature}: missing element `{selector}`")]
    MissingElement { feature: Feature, selector: &'static str },
    /// The browser rejected a media request (autoplay policy, fullscreen denied).
    #[error("{op} failed for video {video}: {reason}")]
    MediaRejected { op: MediaOp, video: usize, reason: String },
    /// A DOM call threw.
    #[error("dom error: {0}")]
    Dom(String),
    /// `localStorage` is unavailable or refused the write.
    #[error("storage error: {0}")]
    Storage(String),
    /// The embedded site configuration could not be used.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl SiteError {
    #[must_use]
    pub fn missing(feature: Feature, selector: &'static str) -> Self {
        Self::MissingElement { feature, selector }
    }
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(crate::dom::js_error_message(&value))
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
