//! Section observer, link clicks and `#fragment` navigation.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::SiteConfig;
use crate::controller::{ScrollRequest, Signal};
use crate::dom::page::{Page, dispatch, dispatch_weak};
use crate::dom::{document, js_error_message, listen, query, query_all, window};
use crate::error::{Feature, SiteError};
use crate::state::nav::SectionEntry;

const TARGET: &str = "site::nav";

pub fn install(page: &Rc<Page>, doc: &Document, config: &SiteConfig) -> Result<(), SiteError> {
    install_link_clicks(page)?;
    install_hash_navigation(page, doc, config);
    install_section_observer(page, doc, config)
}

/// Measure the target section and header as they are right now.
fn scroll_request(section_id: &str) -> Result<ScrollRequest, SiteError> {
    let doc = document()?;
    let win = window()?;
    let section_top = doc
        .get_element_by_id(section_id)
        .map(|section| section.get_bounding_client_rect().top());
    let scroll_y = win.scroll_y()?;
    let header_height = query(&doc, ".nav-header")
        .and_then(|header| header.dyn_ref::<HtmlElement>().map(|h| f64::from(h.offset_height())));
    Ok(ScrollRequest { section_id: section_id.to_owned(), section_top, scroll_y, header_height })
}

fn request_scroll(page: &Rc<Page>, section_id: &str) {
    match scroll_request(section_id) {
        Ok(request) => dispatch(page, Signal::ScrollRequested(request)),
        Err(err) => log::warn!(target: TARGET, "{err}"),
    }
}

fn install_link_clicks(page: &Rc<Page>) -> Result<(), SiteError> {
    for link in &page.links {
        let weak = Rc::downgrade(page);
        let target = link.get_attribute("data-href").unwrap_or_default();
        let label = link.text_content().unwrap_or_default();
        listen(link, "click", move |event| {
            event.prevent_default();
            let Some(page) = weak.upgrade() else {
                return;
            };
            log::debug!(target: TARGET, "clicked link: {} (target: {target})", label.trim());
            request_scroll(&page, &target);
        })?;
    }
    Ok(())
}

fn install_hash_navigation(page: &Rc<Page>, doc: &Document, config: &SiteConfig) {
    let hash = match window().and_then(|win| win.location().hash().map_err(SiteError::from)) {
        Ok(hash) => hash,
        Err(err) => {
            log::warn!(target: TARGET, "{err}");
            return;
        }
    };
    let section_id = hash.trim_start_matches('#').to_owned();
    if section_id.is_empty() || doc.get_element_by_id(&section_id).is_none() {
        return;
    }
    let weak = Rc::downgrade(page);
    Timeout::new(config.hash_scroll_delay_ms, move || {
        if let Some(page) = weak.upgrade() {
            log::debug!(target: TARGET, "hash navigation to #{section_id}");
            request_scroll(&page, &section_id);
        }
    })
    .forget();
}

fn install_section_observer(page: &Rc<Page>, doc: &Document, config: &SiteConfig) -> Result<(), SiteError> {
    let sections = query_all(doc, "section[id]");
    if sections.is_empty() {
        return Err(SiteError::missing(Feature::Nav, "section[id]"));
    }

    let weak = Rc::downgrade(page);
    let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
        let batch = entries
            .iter()
            .map(|value| value.unchecked_into::<IntersectionObserverEntry>())
            .map(|entry| SectionEntry {
                id: entry.target().id(),
                is_intersecting: entry.is_intersecting(),
                ratio: entry.intersection_ratio(),
                top: entry.bounding_client_rect().top(),
            })
            .collect::<Vec<_>>();
        dispatch_weak(&weak, Signal::SectionsIntersected(batch));
    });

    let init = IntersectionObserverInit::new();
    init.set_root_margin(&config.nav_root_margin);
    init.set_threshold(&JsValue::from_f64(config.nav_threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(|err| SiteError::Dom(format!("section observer: {}", js_error_message(&err))))?;
    callback.forget();

    for section in &sections {
        observer.observe(section);
    }
    log::debug!(target: TARGET, "observing {} sections", sections.len());
    Ok(())
}
