//! Seamless marquee loop.
//!
//! The scrolling list is rendered twice back to back so the CSS animation can
//! wrap at 50% without a visible gap.

#[cfg(test)]
#[path = "marquee_test.rs"]
mod marquee_test;

/// Attribute marking a list that has already been doubled.
pub const DUPLICATED_ATTR: &str = "data-marquee-duplicated";

/// Doubled markup for `inner_html`, or `None` when there is nothing to loop.
#[must_use]
pub fn looped_markup(inner_html: &str) -> Option<String> {
    if inner_html.trim().is_empty() {
        return None;
    }
    Some(inner_html.repeat(2))
}
