//! Navigation link highlighting and scroll targets.
//!
//! A link is "active" when its `data-href` names the section currently in the
//! upper band of the viewport. At most one link is active at any time.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// One intersection observation for a `section[id]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionEntry {
    pub id: String,
    pub is_intersecting: bool,
    /// Visible fraction of the section within the observer's root band. A
    /// section taller than the band never gets close to 1, so this is only
    /// reported, never compared.
    pub ratio: f64,
    /// Top edge relative to the viewport, in CSS pixels.
    pub top: f64,
}

/// A navigation anchor and whether it is highlighted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub target: String,
    pub active: bool,
}

/// Document scroll offset that puts a section's top just below the fixed header.
///
/// `section_top` is viewport-relative. A missing or zero-height header uses
/// `fallback_header`.
#[must_use]
pub fn scroll_target(section_top: f64, scroll_y: f64, header_height: Option<f64>, fallback_header: f64) -> f64 {
    let header = header_height.filter(|h| *h > 0.0).unwrap_or(fallback_header);
    (section_top + scroll_y - header).max(0.0)
}

/// Active-link state for every nav anchor on the page.
#[derive(Debug, Clone)]
pub struct NavState {
    links: Vec<NavLink>,
}

impl NavState {
    pub fn new<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let links = targets
            .into_iter()
            .map(|target| NavLink { target: target.into(), active: false })
            .collect();
        Self { links }
    }

    #[must_use]
    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    /// Index and target of the highlighted link, if any.
    #[must_use]
    pub fn active(&self) -> Option<(usize, &str)> {
        self.links
            .iter()
            .enumerate()
            .find(|(_, link)| link.active)
            .map(|(i, link)| (i, link.target.as_str()))
    }

    /// Clear every link, then highlight the first one pointing at `section_id`.
    ///
    /// Returns the index of the highlighted link; `None` when no link targets
    /// the section (all links end up cleared).
    pub fn activate(&mut self, section_id: &str) -> Option<usize> {
        let mut chosen = None;
        for (i, link) in self.links.iter_mut().enumerate() {
            link.active = chosen.is_none() && link.target == section_id;
            if link.active {
                chosen = Some(i);
            }
        }
        chosen
    }

    /// Apply one observer batch and return the section that became current.
    ///
    /// The observer's threshold decides when entries are delivered; any
    /// delivered entry that is intersecting qualifies. Among those the topmost
    /// wins. Batches with no intersecting entry leave the highlight untouched.
    pub fn on_intersections(&mut self, entries: &[SectionEntry]) -> Option<String> {
        let winner = entries
            .iter()
            .filter(|e| e.is_intersecting)
            .min_by(|a, b| a.top.total_cmp(&b.top))?
            .id
            .clone();
        self.activate(&winner);
        Some(winner)
    }
}
