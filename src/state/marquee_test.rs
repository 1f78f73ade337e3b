use super::*;

#[test]
fn markup_is_repeated_once() {
    let html = "<li>Bespoke</li><li>Alterations</li>";
    assert_eq!(looped_markup(html).unwrap(), format!("{html}{html}"));
}

#[test]
fn blank_list_is_left_alone() {
    assert_eq!(looped_markup(""), None);
    assert_eq!(looped_markup("  \n "), None);
}
