//! Browser bindings.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything under `dom` is compiled only with the `hydrate` feature. It reads
//! platform signals (clicks, intersection and mutation observers, timers) into
//! the `state` types and writes their results back to the document. Each
//! feature installs independently; a failing installer is logged and the rest
//! of the page keeps working.

pub mod carousel;
pub mod fade;
pub mod form;
pub mod marquee;
pub mod menu;
pub mod messages;
pub mod nav;
pub mod page;
pub mod storage;
pub mod theme;
pub mod video;

use wasm_bindgen::prelude::*;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Document, Element, EventTarget, Window};

use crate::config::{CONFIG_ELEMENT_ID, SiteConfig};
use crate::error::{Feature, SiteError};

type Installer = fn(&Document, &SiteConfig) -> Result<(), SiteError>;

/// Wasm entry point: runs as soon as the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    // A second init (hot reload) keeps the first logger.
    console_log::init_with_level(level).unwrap_or_default();

    let doc = match document() {
        Ok(doc) => doc,
        Err(err) => {
            log::error!("{err}");
            return;
        }
    };
    let config = load_config(&doc);
    theme::apply_initial(&doc, &config);

    if doc.ready_state() == "loading" {
        let boot_doc = doc.clone();
        let callback = Closure::once_into_js(move |_event: web_sys::Event| boot(&boot_doc, &config));
        if let Err(err) = doc.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref()) {
            log::error!("cannot wait for DOMContentLoaded: {}", js_error_message(&err));
        }
    } else {
        boot(&doc, &config);
    }
}

/// Install every feature against a parsed document.
pub fn boot(doc: &Document, config: &SiteConfig) {
    log::info!("DOM ready, installing site behaviours");
    let installers: [(Feature, Installer); 7] = [
        (Feature::Messages, messages::install),
        (Feature::Theme, theme::install),
        (Feature::Menu, menu::install),
        (Feature::Nav, page::install),
        (Feature::Video, video::install),
        (Feature::Form, form::install),
        (Feature::Marquee, marquee::install),
    ];
    for (feature, install) in installers {
        report(feature, install(doc, config));
    }
}

/// Read the optional `#site-config` JSON block.
fn load_config(doc: &Document) -> SiteConfig {
    let raw = doc.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content());
    SiteConfig::from_json_or_default(raw.as_deref())
}

pub(crate) fn window() -> Result<Window, SiteError> {
    web_sys::window().ok_or_else(|| SiteError::Dom("no global window".into()))
}

pub(crate) fn document() -> Result<Document, SiteError> {
    window()?
        .document()
        .ok_or_else(|| SiteError::Dom("window has no document".into()))
}

/// Log a feature failure under its target.
pub(crate) fn report(feature: Feature, result: Result<(), SiteError>) {
    if let Err(err) = result {
        log::warn!(target: feature.target(), "{err}");
    }
}

/// Best-effort string form of a thrown JS value.
pub(crate) fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// First element matching `selector`, logging selector syntax errors.
pub(crate) fn query(doc: &Document, selector: &str) -> Option<Element> {
    match doc.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("bad selector `{selector}`: {}", js_error_message(&err));
            None
        }
    }
}

/// All elements matching `selector`, in document order.
pub(crate) fn query_all(doc: &Document, selector: &str) -> Vec<Element> {
    let list = match doc.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            log::warn!("bad selector `{selector}`: {}", js_error_message(&err));
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

/// Like [`query`], but a missing element disables `feature`.
pub(crate) fn require(doc: &Document, feature: Feature, selector: &'static str) -> Result<Element, SiteError> {
    query(doc, selector).ok_or_else(|| SiteError::missing(feature, selector))
}

/// Attach a handler for the lifetime of the page.
pub(crate) fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), SiteError>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Add or remove `class`, logging (not failing) on DOM errors.
pub(crate) fn set_class(el: &Element, class: &str, on: bool) {
    let list = el.class_list();
    let result = if on { list.add_1(class) } else { list.remove_1(class) };
    if let Err(err) = result {
        log::warn!("class `{class}`: {}", js_error_message(&err));
    }
}

/// Set an inline style property on an element that has a `style`.
pub(crate) fn set_style(el: &Element, property: &str, value: &str) {
    let Some(html) = el.dyn_ref::<web_sys::HtmlElement>() else {
        return;
    };
    if let Err(err) = html.style().set_property(property, value) {
        log::warn!("style `{property}`: {}", js_error_message(&err));
    }
}
