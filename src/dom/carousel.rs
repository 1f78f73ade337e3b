//! Rotating image container: hover pause and load diagnostics.

use std::rc::Rc;

use web_sys::Element;

use crate::controller::Signal;
use crate::dom::page::{Page, boot, dispatch_weak};
use crate::dom::listen;
use crate::error::{Feature, SiteError};

const TARGET: &str = "site::carousel";

pub fn install(page: &Rc<Page>, container: Option<Element>) -> Result<(), SiteError> {
    let Some(container) = container else {
        return Err(SiteError::missing(Feature::Carousel, ".image-container"));
    };
    if page.images.is_empty() {
        return Err(SiteError::missing(Feature::Carousel, ".rotating-image"));
    }
    log::info!(target: TARGET, "found {} images for rotation", page.images.len());

    for (signal, event) in [(Signal::PointerEnter, "mouseenter"), (Signal::PointerLeave, "mouseleave")] {
        let weak = Rc::downgrade(page);
        listen(&container, event, move |_event| dispatch_weak(&weak, signal.clone()))?;
    }

    for (index, image) in page.images.iter().enumerate() {
        let src = image.get_attribute("src").unwrap_or_default();
        let loaded_src = src.clone();
        listen(image, "load", move |_event| {
            log::debug!(target: TARGET, "loaded image {}: {loaded_src}", index + 1);
        })?;
        listen(image, "error", move |_event| {
            log::error!(target: TARGET, "failed to load image {}: {src}", index + 1);
        })?;
    }

    boot(page);
    Ok(())
}
