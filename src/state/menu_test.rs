use super::*;

#[test]
fn menu_starts_closed() {
    let menu = MobileMenu::default();
    assert!(!menu.is_open());
    assert_eq!(menu.view().body_overflow, "auto");
}

#[test]
fn toggle_opens_and_locks_scroll() {
    let mut menu = MobileMenu::default();
    let view = menu.toggle();
    assert!(view.active);
    assert_eq!(view.body_overflow, "hidden");
    assert_eq!(view.icon_class, "fa-solid fa-xmark");
}

#[test]
fn toggle_twice_closes() {
    let mut menu = MobileMenu::default();
    menu.toggle();
    let view = menu.toggle();
    assert!(!view.active);
    assert_eq!(view.icon_class, "fa-solid fa-bars");
}

#[test]
fn link_followed_closes_only_when_open() {
    let mut menu = MobileMenu::default();
    assert_eq!(menu.link_followed(), None);
    menu.toggle();
    let view = menu.link_followed().unwrap();
    assert!(!view.active);
    assert!(!menu.is_open());
}
