//! Client-side behaviour for the marketing site.
//!
//! The page HTML is rendered by the server; this crate attaches behaviour to
//! it once the document is parsed: theme toggle, mobile menu, active-section
//! navigation, fade-in reveal, testimonial video controls, contact form
//! validation, the services marquee, flash message dismissal, and the hero
//! image carousel.
//!
//! Everything that decides *what* should happen lives in browser-free modules
//! and is tested natively. The `dom` module (feature `hydrate`) only reads
//! platform signals into those types and writes their results back.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | [`controller::ViewStateController`]: nav, fade-in and carousel state behind one signal/action seam |
//! | [`state`] | Per-feature state machines (theme, menu, nav, fade, carousel, video, messages, marquee) |
//! | [`form`] | Contact form validation rules |
//! | [`config`] | Tunables read from the page's `#site-config` block |
//! | [`error`] | Crate error type and feature log targets |
//! | [`consts`] | Default timings, thresholds and class names |
//! | `dom` | Browser bindings (feature `hydrate`) |

pub mod config;
pub mod consts;
pub mod controller;
pub mod error;
pub mod form;
pub mod state;

#[cfg(feature = "hydrate")]
pub mod dom;
