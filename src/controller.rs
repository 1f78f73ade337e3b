//! View-state synchronization.
//!
//! ARCHITECTURE
//! ============
//! `ViewStateController` owns the derived UI state that tracks scroll,
//! viewport and timer signals: the highlighted nav link, which fade targets
//! have been revealed, and the carousel index. Every platform signal is fed
//! through [`ViewStateController::handle`], which returns the [`Action`]s the
//! host must apply to the DOM. The controller never touches the browser, so
//! tests drive it with synthetic signals and a fake clock.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::config::SiteConfig;
use crate::state::carousel::{Carousel, Rotation};
use crate::state::fade::{FadeEntry, FadeState};
use crate::state::nav::{NavState, SectionEntry, scroll_target};

const NAV: &str = "site::nav";
const FADE: &str = "site::fade";
const CAROUSEL: &str = "site::carousel";

/// A request to bring a section into view (link click or `#fragment` at load).
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollRequest {
    pub section_id: String,
    /// Viewport-relative top of the target; `None` when the section does not exist.
    pub section_top: Option<f64>,
    pub scroll_y: f64,
    /// Rendered height of the fixed header, if there is one.
    pub header_height: Option<f64>,
}

/// Platform input delivered to the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    SectionsIntersected(Vec<SectionEntry>),
    FadeTargetsIntersected(Vec<FadeEntry>),
    ScrollRequested(ScrollRequest),
    RotationStart,
    RotationStop,
    PointerEnter,
    PointerLeave,
    Tick { generation: u64 },
}

/// DOM work the host must perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Clear `active` from every nav link, then set it on this one (if any).
    HighlightLink(Option<usize>),
    /// Smooth-scroll the window to this document offset.
    ScrollTo { top: f64 },
    /// Add `visible` to the fade target and stop observing it.
    Reveal(usize),
    /// Move the carousel's `active` marker.
    ShowImage { hide: Option<usize>, show: usize },
    /// Create a repeating timer whose ticks carry `generation`.
    StartTimer { generation: u64, interval_ms: u32 },
    /// Drop the current rotation timer.
    CancelTimer,
}

#[derive(Debug, Clone)]
pub struct ViewStateController {
    nav: NavState,
    fade: FadeState,
    carousel: Carousel,
    rotation_interval_ms: u32,
    header_fallback_px: f64,
}

impl ViewStateController {
    /// Build a controller for the page's links (by `data-href`), fade target
    /// count, and rotating image count.
    pub fn new<I, S>(config: &SiteConfig, link_targets: I, fade_count: usize, image_count: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            nav: NavState::new(link_targets),
            fade: FadeState::new(fade_count, config.fade_threshold),
            carousel: Carousel::new(image_count),
            rotation_interval_ms: config.rotation_interval_ms,
            header_fallback_px: config.header_fallback_px,
        }
    }

    #[must_use]
    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    #[must_use]
    pub fn fade(&self) -> &FadeState {
        &self.fade
    }

    #[must_use]
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    /// Actions for page load: mark the first image and start rotating.
    pub fn boot(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        if let Some(index) = self.carousel.index() {
            log::debug!(target: CAROUSEL, "{} images, showing image {}", self.carousel.len(), index + 1);
            actions.push(Action::ShowImage { hide: None, show: index });
        }
        actions.extend(self.handle(Signal::RotationStart));
        actions
    }

    /// Apply one signal and return the resulting DOM work.
    pub fn handle(&mut self, signal: Signal) -> Vec<Action> {
        match signal {
            Signal::SectionsIntersected(entries) => self.on_sections(&entries),
            Signal::FadeTargetsIntersected(entries) => self.on_fade_targets(&entries),
            Signal::ScrollRequested(request) => self.on_scroll_request(&request),
            Signal::RotationStart => self.start_rotation(),
            Signal::RotationStop => self.stop_rotation(),
            Signal::PointerEnter => {
                let cancel = self.carousel.pointer_enter();
                if cancel {
                    log::debug!(target: CAROUSEL, "rotation paused on hover");
                }
                cancel_if(cancel)
            }
            Signal::PointerLeave => match self.carousel.pointer_leave() {
                Some(generation) => {
                    log::debug!(target: CAROUSEL, "rotation resumed after hover");
                    self.timer(generation)
                }
                None => Vec::new(),
            },
            Signal::Tick { generation } => match self.carousel.tick(generation) {
                Some(Rotation { from, to }) => {
                    log::debug!(target: CAROUSEL, "rotated to image {}", to + 1);
                    vec![Action::ShowImage { hide: Some(from), show: to }]
                }
                None => {
                    log::trace!(target: CAROUSEL, "ignored tick for generation {generation}");
                    Vec::new()
                }
            },
        }
    }

    fn on_sections(&mut self, entries: &[SectionEntry]) -> Vec<Action> {
        let Some(section) = self.nav.on_intersections(entries) else {
            return Vec::new();
        };
        let link = self.nav.active().map(|(i, _)| i);
        log::debug!(target: NAV, "active section: {section}, link: {link:?}");
        vec![Action::HighlightLink(link)]
    }

    fn on_fade_targets(&mut self, entries: &[FadeEntry]) -> Vec<Action> {
        let revealed = self.fade.on_intersections(entries);
        if !revealed.is_empty() {
            log::trace!(target: FADE, "revealed {revealed:?}");
        }
        revealed.into_iter().map(Action::Reveal).collect()
    }

    fn on_scroll_request(&mut self, request: &ScrollRequest) -> Vec<Action> {
        let Some(section_top) = request.section_top else {
            log::debug!(target: NAV, "no section #{}", request.section_id);
            return Vec::new();
        };
        let top = scroll_target(section_top, request.scroll_y, request.header_height, self.header_fallback_px);
        let link = self.nav.activate(&request.section_id);
        log::debug!(target: NAV, "scrolling to #{} at {top}px", request.section_id);
        vec![Action::ScrollTo { top }, Action::HighlightLink(link)]
    }

    fn start_rotation(&mut self) -> Vec<Action> {
        if !self.carousel.rotates() {
            log::debug!(target: CAROUSEL, "fewer than two images, rotation not started");
            return Vec::new();
        }
        match self.carousel.start() {
            Some(generation) => {
                log::debug!(target: CAROUSEL, "rotation started");
                self.timer(generation)
            }
            None => Vec::new(),
        }
    }

    fn stop_rotation(&mut self) -> Vec<Action> {
        let cancel = self.carousel.stop();
        if cancel {
            log::debug!(target: CAROUSEL, "rotation stopped");
        }
        cancel_if(cancel)
    }

    fn timer(&self, generation: u64) -> Vec<Action> {
        vec![Action::StartTimer { generation, interval_ms: self.rotation_interval_ms }]
    }
}

fn cancel_if(cancel: bool) -> Vec<Action> {
    if cancel { vec![Action::CancelTimer] } else { Vec::new() }
}
