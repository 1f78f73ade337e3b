//! Browser-free UI state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module models one page behaviour as plain data plus transitions. The
//! `dom` layer reads platform signals into these types and writes the results
//! back as CSS classes and attributes, so everything here is testable natively.

pub mod carousel;
pub mod fade;
pub mod marquee;
pub mod menu;
pub mod messages;
pub mod nav;
pub mod theme;
pub mod video;
