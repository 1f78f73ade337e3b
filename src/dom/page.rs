//! Host for [`ViewStateController`]: owns the elements it drives and applies
//! its actions.
//!
//! The controller is borrowed only while it handles a signal; actions are
//! applied after the borrow ends, so a handler that triggers another signal
//! cannot double-borrow it.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Interval;
use web_sys::{Document, Element, IntersectionObserver, ScrollBehavior, ScrollToOptions};

use crate::config::SiteConfig;
use crate::consts::{CLASS_ACTIVE, CLASS_VISIBLE};
use crate::controller::{Action, Signal, ViewStateController};
use crate::dom::{carousel, fade, nav, query, query_all, report, set_class, window};
use crate::error::{Feature, SiteError};

thread_local! {
    static PAGE: RefCell<Option<Rc<Page>>> = const { RefCell::new(None) };
}

pub struct Page {
    controller: RefCell<ViewStateController>,
    pub(crate) links: Vec<Element>,
    pub(crate) faders: Vec<Element>,
    pub(crate) images: Vec<Element>,
    pub(crate) fade_observer: RefCell<Option<IntersectionObserver>>,
    rotation: RefCell<Option<Interval>>,
}

/// Build the controller from the document and install nav, fade and carousel.
pub fn install(doc: &Document, config: &SiteConfig) -> Result<(), SiteError> {
    let links = query_all(doc, ".nav-links a");
    let targets = links
        .iter()
        .map(|link| link.get_attribute("data-href").unwrap_or_default())
        .collect::<Vec<_>>();
    let faders = query_all(doc, ".fade-in");
    let container = query(doc, ".image-container");
    let images = if container.is_some() { query_all(doc, ".rotating-image") } else { Vec::new() };

    let controller = ViewStateController::new(config, targets, faders.len(), images.len());
    let page = Rc::new(Page {
        controller: RefCell::new(controller),
        links,
        faders,
        images,
        fade_observer: RefCell::new(None),
        rotation: RefCell::new(None),
    });
    PAGE.with(|slot| *slot.borrow_mut() = Some(Rc::clone(&page)));

    report(Feature::Nav, nav::install(&page, doc, config));
    report(Feature::Fade, fade::install(&page, doc, config));
    report(Feature::Carousel, carousel::install(&page, container));
    Ok(())
}

/// Feed one signal to the controller and apply the result.
pub fn dispatch(page: &Rc<Page>, signal: Signal) {
    let actions = page.controller.borrow_mut().handle(signal);
    apply_all(page, actions);
}

/// Run the controller's boot actions (initial image, rotation timer).
pub fn boot(page: &Rc<Page>) {
    let actions = page.controller.borrow_mut().boot();
    apply_all(page, actions);
}

/// Dispatch through a weak handle; a no-op once the page is gone.
pub fn dispatch_weak(page: &Weak<Page>, signal: Signal) {
    if let Some(page) = page.upgrade() {
        dispatch(&page, signal);
    }
}

fn apply_all(page: &Rc<Page>, actions: Vec<Action>) {
    for action in actions {
        apply(page, action);
    }
}

fn apply(page: &Rc<Page>, action: Action) {
    match action {
        Action::HighlightLink(chosen) => {
            for (i, link) in page.links.iter().enumerate() {
                set_class(link, CLASS_ACTIVE, chosen == Some(i));
            }
        }
        Action::ScrollTo { top } => match window() {
            Ok(win) => {
                let options = ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(ScrollBehavior::Smooth);
                win.scroll_to_with_scroll_to_options(&options);
            }
            Err(err) => log::warn!(target: Feature::Nav.target(), "{err}"),
        },
        Action::Reveal(index) => {
            let Some(target) = page.faders.get(index) else {
                return;
            };
            set_class(target, CLASS_VISIBLE, true);
            if let Some(observer) = page.fade_observer.borrow().as_ref() {
                observer.unobserve(target);
            }
        }
        Action::ShowImage { hide, show } => {
            if let Some(old) = hide.and_then(|i| page.images.get(i)) {
                set_class(old, CLASS_ACTIVE, false);
            }
            if let Some(new) = page.images.get(show) {
                set_class(new, CLASS_ACTIVE, true);
            }
        }
        Action::StartTimer { generation, interval_ms } => {
            let weak = Rc::downgrade(page);
            let interval = Interval::new(interval_ms, move || {
                dispatch_weak(&weak, Signal::Tick { generation });
            });
            // Replacing the handle cancels any previous timer.
            *page.rotation.borrow_mut() = Some(interval);
        }
        Action::CancelTimer => drop(page.rotation.borrow_mut().take()),
    }
}
