//! Seamless marquee: duplicate `.services-list` once so the scroll loops.

use web_sys::Document;

use crate::config::SiteConfig;
use crate::dom::{js_error_message, require};
use crate::error::{Feature, SiteError};
use crate::state::marquee::{DUPLICATED_ATTR, looped_markup};

pub fn install(doc: &Document, _config: &SiteConfig) -> Result<(), SiteError> {
    let list = require(doc, Feature::Marquee, ".services-list")?;
    if list.has_attribute(DUPLICATED_ATTR) {
        log::debug!(target: Feature::Marquee.target(), "already duplicated");
        return Ok(());
    }
    let Some(markup) = looped_markup(&list.inner_html()) else {
        log::debug!(target: Feature::Marquee.target(), "services list is empty");
        return Ok(());
    };
    list.set_inner_html(&markup);
    list.set_attribute(DUPLICATED_ATTR, "true")
        .map_err(|err| SiteError::Dom(format!("marking services list: {}", js_error_message(&err))))?;
    log::debug!(target: Feature::Marquee.target(), "services list duplicated");
    Ok(())
}
