//! Reveal observer for `.fade-in` elements.

use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::SiteConfig;
use crate::controller::Signal;
use crate::dom::js_error_message;
use crate::dom::page::{Page, dispatch};
use crate::error::{Feature, SiteError};
use crate::state::fade::FadeEntry;

pub fn install(page: &Rc<Page>, _doc: &Document, config: &SiteConfig) -> Result<(), SiteError> {
    if page.faders.is_empty() {
        return Err(SiteError::missing(Feature::Fade, ".fade-in"));
    }

    let weak = Rc::downgrade(page);
    let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
        let Some(page) = weak.upgrade() else {
            return;
        };
        let batch = entries
            .iter()
            .map(|value| value.unchecked_into::<IntersectionObserverEntry>())
            .filter_map(|entry| {
                let target = entry.target();
                let index = page.faders.iter().position(|el| *el == target)?;
                Some(FadeEntry {
                    index,
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                })
            })
            .collect::<Vec<_>>();
        dispatch(&page, Signal::FadeTargetsIntersected(batch));
    });

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(config.fade_threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(|err| SiteError::Dom(format!("fade observer: {}", js_error_message(&err))))?;
    callback.forget();

    for target in &page.faders {
        observer.observe(target);
    }
    *page.fade_observer.borrow_mut() = Some(observer);
    log::debug!(target: Feature::Fade.target(), "observing {} fade targets", page.faders.len());
    Ok(())
}
