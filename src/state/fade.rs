//! One-shot reveal of `.fade-in` elements.
//!
//! A target flips to revealed the first time it is seen and is never
//! re-evaluated; the host stops observing it at the same moment.

#[cfg(test)]
#[path = "fade_test.rs"]
mod fade_test;

use crate::consts::RATIO_EPSILON;

/// One intersection observation for a fade target, by index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeEntry {
    pub index: usize,
    pub is_intersecting: bool,
    pub ratio: f64,
}

/// Whether an observation meets `threshold`.
#[must_use]
pub fn satisfies(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting && ratio + RATIO_EPSILON >= threshold
}

#[derive(Debug, Clone)]
pub struct FadeState {
    revealed: Vec<bool>,
    threshold: f64,
}

impl FadeState {
    #[must_use]
    pub fn new(count: usize, threshold: f64) -> Self {
        Self { revealed: vec![false; count], threshold }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }

    /// Apply one observer batch; returns indices revealed by this batch.
    ///
    /// Out-of-range indices and already revealed targets are ignored.
    pub fn on_intersections(&mut self, entries: &[FadeEntry]) -> Vec<usize> {
        let mut newly = Vec::new();
        for entry in entries {
            if !satisfies(entry.is_intersecting, entry.ratio, self.threshold) {
                continue;
            }
            let Some(flag) = self.revealed.get_mut(entry.index) else {
                continue;
            };
            if !*flag {
                *flag = true;
                newly.push(entry.index);
            }
        }
        newly
    }
}
