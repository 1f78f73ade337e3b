//! Timed image rotation.
//!
//! The carousel is a two-state machine driven by an external interval timer:
//!
//! ```text
//!   Stopped --start (len > 1)--> Running{g}
//!   Running{g} --tick(g)--> Running{g}     (advance index mod len)
//!   Running{g} --pointer_enter | stop--> Stopped
//! ```
//!
//! Every `start` issues a fresh generation. The host tags the timer it creates
//! with that generation and passes it back on each tick, so ticks from a timer
//! that has since been cancelled are dropped.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Stopped,
    Running {
        generation: u64,
    },
}

/// The active marker moved from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    pub from: usize,
    pub to: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Carousel {
    len: usize,
    index: usize,
    phase: Phase,
    last_generation: u64,
    hovered: bool,
}

impl Carousel {
    /// A stopped carousel over `len` images showing the first one.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { len, ..Self::default() }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the image carrying the active marker; `None` without images.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Whether the carousel can rotate at all.
    #[must_use]
    pub fn rotates(&self) -> bool {
        self.len > 1
    }

    /// Begin rotating. Returns the generation the new timer must carry, or
    /// `None` when already running or there is nothing to rotate.
    pub fn start(&mut self) -> Option<u64> {
        if self.is_running() || !self.rotates() {
            return None;
        }
        self.last_generation += 1;
        self.phase = Phase::Running { generation: self.last_generation };
        Some(self.last_generation)
    }

    /// Stop rotating. Returns whether a running timer must be cancelled.
    pub fn stop(&mut self) -> bool {
        let was_running = self.is_running();
        self.phase = Phase::Stopped;
        was_running
    }

    /// Pointer entered the container: suspend rotation.
    pub fn pointer_enter(&mut self) -> bool {
        self.hovered = true;
        self.stop()
    }

    /// Pointer left the container: resume with a fresh timer.
    pub fn pointer_leave(&mut self) -> Option<u64> {
        self.hovered = false;
        self.start()
    }

    /// Timer fired. Advances only for the live generation.
    pub fn tick(&mut self, generation: u64) -> Option<Rotation> {
        match self.phase {
            Phase::Running { generation: live } if live == generation && self.rotates() => {
                let from = self.index;
                self.index = (self.index + 1) % self.len;
                Some(Rotation { from, to: self.index })
            }
            _ => None,
        }
    }
}
