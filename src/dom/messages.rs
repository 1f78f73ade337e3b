//! Flash message fade-out, the `.messages` observer and the fallback poller.

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{AddEventListenerOptions, Document, Element, MutationObserver, MutationObserverInit};

use crate::config::SiteConfig;
use crate::consts::CLASS_FADE_OUT;
use crate::dom::{js_error_message, query, query_all, set_class};
use crate::error::SiteError;
use crate::state::messages::{FlashMessage, MessagePoller};

const TARGET: &str = "site::messages";
const SCHEDULED_ATTR: &str = "data-fade-out-scheduled";
const UNSCHEDULED: &str = ".alert:not([data-fade-out-scheduled])";

/// Delays shared by every scheduled message.
#[derive(Clone, Copy)]
struct Timing {
    fade_delay_ms: u32,
    poll_interval_ms: u32,
    poll_attempts: u32,
}

fn schedule_all(doc: &Document, selector: &str, timing: Timing) -> usize {
    let found = query_all(doc, selector);
    let mut scheduled = 0;
    for el in found {
        if schedule(el, timing) {
            scheduled += 1;
        }
    }
    scheduled
}

/// Claim one `.alert`; false if another scan already did.
fn schedule(el: Element, timing: Timing) -> bool {
    let Some(mut message) = FlashMessage::claim(el.has_attribute(SCHEDULED_ATTR)) else {
        return false;
    };
    if let Err(err) = el.set_attribute(SCHEDULED_ATTR, "true") {
        log::warn!(target: TARGET, "cannot mark message: {}", js_error_message(&err));
    }
    log::debug!(target: TARGET, "scheduling fade-out: {}", el.text_content().unwrap_or_default().trim());

    Timeout::new(timing.fade_delay_ms, move || {
        if !message.begin_fade() {
            return;
        }
        set_class(&el, CLASS_FADE_OUT, true);
        let target = el.clone();
        let on_end = Closure::once_into_js(move |_event: web_sys::Event| {
            if message.finish() {
                target.remove();
                log::debug!(target: TARGET, "message removed");
            }
        });
        let options = AddEventListenerOptions::new();
        options.set_once(true);
        if let Err(err) = el.add_event_listener_with_callback_and_add_event_listener_options(
            "transitionend",
            on_end.unchecked_ref(),
            &options,
        ) {
            log::warn!(target: TARGET, "no transition hook, removing now: {}", js_error_message(&err));
            el.remove();
        }
    })
    .forget();
    true
}

fn observe_container(doc: &Document, timing: Timing) -> Result<(), SiteError> {
    let Some(container) = query(doc, ".messages") else {
        log::debug!(target: TARGET, "no .messages container; relying on the poller");
        return Ok(());
    };
    let scan_doc = doc.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, MutationObserver)>::new(
        move |records: js_sys::Array, _observer: MutationObserver| {
            if records.length() == 0 {
                return;
            }
            let count = schedule_all(&scan_doc, UNSCHEDULED, timing);
            if count > 0 {
                log::debug!(target: TARGET, "observer picked up {count} new messages");
            }
        },
    );
    let observer = MutationObserver::new(callback.as_ref().unchecked_ref())?;
    callback.forget();

    let init = MutationObserverInit::new();
    init.set_child_list(true);
    init.set_subtree(true);
    observer.observe_with_options(&container, &init)?;
    Ok(())
}

/// Re-scan on a fixed delay until the attempt budget runs out.
fn poll(doc: Document, mut poller: MessagePoller, timing: Timing) {
    Timeout::new(timing.poll_interval_ms, move || {
        let count = schedule_all(&doc, UNSCHEDULED, timing);
        if count > 0 {
            log::debug!(target: TARGET, "poller picked up {count} new messages");
        }
        if poller.record_scan() {
            poll(doc, poller, timing);
        } else {
            log::debug!(target: TARGET, "poller stopped after {} scans", poller.attempts());
        }
    })
    .forget();
}

pub fn install(doc: &Document, config: &SiteConfig) -> Result<(), SiteError> {
    let timing = Timing {
        fade_delay_ms: config.message_fade_delay_ms,
        poll_interval_ms: config.message_poll_interval_ms,
        poll_attempts: config.message_poll_attempts,
    };
    let initial = schedule_all(doc, ".alert", timing);
    log::debug!(target: TARGET, "{initial} initial messages scheduled");

    poll(doc.clone(), MessagePoller::new(timing.poll_attempts), timing);
    observe_container(doc, timing)
}
