//! Mobile navigation drawer wiring.

use std::cell::Cell;
use std::rc::Rc;

use web_sys::{Document, Element};

use crate::config::SiteConfig;
use crate::consts::CLASS_ACTIVE;
use crate::dom::{js_error_message, listen, query, query_all, require, set_class, set_style};
use crate::error::{Feature, SiteError};
use crate::state::menu::{MenuView, MobileMenu};

const TARGET: &str = "site::menu";

struct Drawer {
    toggle: Element,
    container: Element,
    overlay: Element,
    body: Option<Element>,
    state: Cell<MobileMenu>,
}

impl Drawer {
    fn render(&self, view: MenuView) {
        for el in [&self.container, &self.toggle, &self.overlay] {
            set_class(el, CLASS_ACTIVE, view.active);
        }
        if let Some(body) = &self.body {
            set_style(body, "overflow", view.body_overflow);
        }
        match self.toggle.query_selector("i") {
            Ok(Some(icon)) => icon.set_class_name(view.icon_class),
            Ok(None) => {}
            Err(err) => log::warn!(target: TARGET, "{}", js_error_message(&err)),
        }
        log::debug!(target: TARGET, "mobile menu {}", if view.active { "opened" } else { "closed" });
    }

    fn toggle(&self) {
        let mut menu = self.state.get();
        let view = menu.toggle();
        self.state.set(menu);
        self.render(view);
    }

    fn link_followed(&self) {
        let mut menu = self.state.get();
        let view = menu.link_followed();
        self.state.set(menu);
        if let Some(view) = view {
            self.render(view);
        }
    }
}

pub fn install(doc: &Document, _config: &SiteConfig) -> Result<(), SiteError> {
    let drawer = Rc::new(Drawer {
        toggle: require(doc, Feature::Menu, "#mobileMenuToggle")?,
        container: require(doc, Feature::Menu, "#navLinks")?,
        overlay: require(doc, Feature::Menu, "#navOverlay")?,
        body: query(doc, "body"),
        state: Cell::new(MobileMenu::default()),
    });

    for trigger in [&drawer.toggle, &drawer.overlay] {
        let drawer_for_click = Rc::clone(&drawer);
        listen(trigger, "click", move |_event| drawer_for_click.toggle())?;
    }
    for link in query_all(doc, ".nav-links a") {
        let drawer_for_link = Rc::clone(&drawer);
        listen(&link, "click", move |_event| drawer_for_link.link_followed())?;
    }
    Ok(())
}
