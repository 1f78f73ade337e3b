//! Contact form submit guard.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::config::SiteConfig;
use crate::dom::{js_error_message, listen, require, window};
use crate::error::{Feature, SiteError};
use crate::form::ContactForm;

const TARGET: &str = "site::form";

/// Current value of an input, textarea or select; `None` for anything else.
fn control_value(el: &Element) -> Option<String> {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        return Some(area.value());
    }
    el.dyn_ref::<HtmlSelectElement>().map(HtmlSelectElement::value)
}

fn field(form: &Element, selector: &str) -> Option<String> {
    match form.query_selector(selector) {
        Ok(found) => found.as_ref().and_then(control_value),
        Err(err) => {
            log::warn!(target: TARGET, "bad selector `{selector}`: {}", js_error_message(&err));
            None
        }
    }
}

fn read(form: &Element) -> ContactForm {
    ContactForm {
        name: field(form, "#name"),
        email: field(form, "#email").unwrap_or_default(),
        phone: field(form, "#phone").unwrap_or_default(),
        request_type: field(form, "#request-type"),
        message: field(form, "#message"),
    }
}

pub fn install(doc: &Document, _config: &SiteConfig) -> Result<(), SiteError> {
    let form = require(doc, Feature::Form, ".contact-form form")?;
    if !form.is_instance_of::<HtmlFormElement>() {
        return Err(SiteError::Dom("`.contact-form form` is not a form".into()));
    }
    let target = form.clone();
    listen(&form, "submit", move |event| {
        let Err(err) = read(&target).validate() else {
            log::debug!(target: TARGET, "contact form passed validation");
            return;
        };
        event.prevent_default();
        log::info!(target: TARGET, "submission blocked: {err}");
        match window() {
            Ok(win) => {
                if let Err(alert_err) = win.alert_with_message(&err.to_string()) {
                    log::warn!(target: TARGET, "alert failed: {}", js_error_message(&alert_err));
                }
            }
            Err(win_err) => log::warn!(target: TARGET, "{win_err}"),
        }
    })
}
