//! Theme attribute and toggle button.

use web_sys::{Document, Element};

use crate::config::SiteConfig;
use crate::dom::storage::open_store;
use crate::dom::{js_error_message, listen, require};
use crate::error::{Feature, SiteError};
use crate::state::theme::{Theme, ThemePreference};

const TARGET: &str = "site::theme";

fn set_theme_attr(root: &Element, theme: Theme) {
    if let Err(err) = root.set_attribute("data-theme", theme.as_str()) {
        log::warn!(target: TARGET, "cannot set data-theme: {}", js_error_message(&err));
    }
}

/// Apply the stored theme before the rest of the page wires up.
pub fn apply_initial(doc: &Document, config: &SiteConfig) {
    let store = open_store();
    let pref = ThemePreference::load(&*store, &config.theme_storage_key, config.default_theme);
    let Some(root) = doc.document_element() else {
        log::warn!(target: TARGET, "document has no root element");
        return;
    };
    set_theme_attr(&root, pref.current());
    log::info!(target: TARGET, "theme set to {}", pref.current());
}

/// Wire the `.toggle-dark` button.
pub fn install(doc: &Document, config: &SiteConfig) -> Result<(), SiteError> {
    let button = require(doc, Feature::Theme, ".toggle-dark")?;
    let icon = require(doc, Feature::Theme, ".toggle-dark i")?;
    let root = doc
        .document_element()
        .ok_or_else(|| SiteError::Dom("document has no root element".into()))?;

    let mut store = open_store();
    let mut pref = ThemePreference::load(&*store, &config.theme_storage_key, config.default_theme);
    icon.set_class_name(pref.current().toggle_icon_class());

    listen(&button, "click", move |_event| {
        if let Err(err) = pref.toggle(&mut *store) {
            log::warn!(target: TARGET, "{err}");
        }
        let theme = pref.current();
        set_theme_attr(&root, theme);
        icon.set_class_name(theme.toggle_icon_class());
        log::info!(target: TARGET, "switched to {theme}");
    })
}
