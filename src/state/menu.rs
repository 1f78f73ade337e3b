//! Mobile navigation drawer.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// What the DOM should look like for a given drawer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuView {
    /// Whether the container, toggle and overlay carry the `active` class.
    pub active: bool,
    /// Value for `document.body.style.overflow`.
    pub body_overflow: &'static str,
    /// Class for the toggle's `<i>` icon.
    pub icon_class: &'static str,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> MenuView {
        self.open = !self.open;
        self.view()
    }

    /// A nav link was followed; close the drawer if it is open.
    pub fn link_followed(&mut self) -> Option<MenuView> {
        self.open.then(|| self.toggle())
    }

    #[must_use]
    pub fn view(self) -> MenuView {
        if self.open {
            MenuView { active: true, body_overflow: "hidden", icon_class: "fa-solid fa-xmark" }
        } else {
            MenuView { active: false, body_overflow: "auto", icon_class: "fa-solid fa-bars" }
        }
    }
}
