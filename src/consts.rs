//! Shared constants for the site behaviours.

// ── Navigation ──────────────────────────────────────────────────

/// Header height used for scroll offsets when `.nav-header` is missing or collapsed.
pub const HEADER_FALLBACK_PX: f64 = 80.0;

/// Observer margin that shrinks the viewport to the 10%–20% band from the top.
pub const NAV_ROOT_MARGIN: &str = "-10% 0px -80% 0px";

/// Minimum visible fraction for a section to count as current.
pub const NAV_THRESHOLD: f64 = 0.1;

/// Delay before honouring a `#section` fragment present at load.
pub const HASH_SCROLL_DELAY_MS: u32 = 100;

/// Browsers round intersection ratios; accept anything this close to the threshold.
pub const RATIO_EPSILON: f64 = 1e-3;

// ── Reveal ──────────────────────────────────────────────────────

/// Minimum visible fraction before a `.fade-in` element is revealed.
pub const FADE_THRESHOLD: f64 = 0.1;

// ── Carousel ────────────────────────────────────────────────────

/// Time between automatic image rotations.
pub const ROTATION_INTERVAL_MS: u32 = 5000;

// ── Flash messages ──────────────────────────────────────────────

/// How long an `.alert` stays fully visible before fading out.
pub const MESSAGE_FADE_DELAY_MS: u32 = 5000;

/// Period of the fallback scan for alerts the mutation observer missed.
pub const MESSAGE_POLL_INTERVAL_MS: u32 = 1000;

/// Number of fallback scans before the poller gives up.
pub const MESSAGE_POLL_ATTEMPTS: u32 = 10;

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding `"dark"` or `"light"`.
pub const THEME_STORAGE_KEY: &str = "theme";

// ── Contact form ────────────────────────────────────────────────

/// Digit count bounds for a phone number (an optional leading `+` is extra).
pub const PHONE_MIN_DIGITS: usize = 10;
pub const PHONE_MAX_DIGITS: usize = 15;

/// Shortest accepted contact name, in characters.
pub const NAME_MIN_CHARS: usize = 2;

// ── CSS classes ─────────────────────────────────────────────────

pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_VISIBLE: &str = "visible";
pub const CLASS_PLAYING: &str = "playing";
pub const CLASS_FADE_OUT: &str = "fade-out";
