//! Auto-dismissing flash messages (`.alert`).
//!
//! Each message is scheduled exactly once, fades after a delay, and is removed
//! when its fade transition ends. A bounded poller backs up the mutation
//! observer for messages inserted in ways it does not report.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessagePhase {
    #[default]
    Shown,
    Scheduled,
    FadingOut,
    Removed,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FlashMessage {
    phase: MessagePhase,
}

impl FlashMessage {
    #[must_use]
    pub fn phase(self) -> MessagePhase {
        self.phase
    }

    /// Claim a message found in the document. `marked` is whether the
    /// element already carries the scheduled marker, which is how a claim
    /// survives between scans; a marked message yields `None`.
    #[must_use]
    pub fn claim(marked: bool) -> Option<Self> {
        let mut message = Self::default();
        (!marked && message.schedule()).then_some(message)
    }

    /// Claim the message for fading. False if it was already claimed.
    pub fn schedule(&mut self) -> bool {
        self.advance(MessagePhase::Shown, MessagePhase::Scheduled)
    }

    /// Delay elapsed; the `fade-out` class should be applied.
    pub fn begin_fade(&mut self) -> bool {
        self.advance(MessagePhase::Scheduled, MessagePhase::FadingOut)
    }

    /// Fade transition ended; the element should be detached.
    pub fn finish(&mut self) -> bool {
        self.advance(MessagePhase::FadingOut, MessagePhase::Removed)
    }

    fn advance(&mut self, from: MessagePhase, to: MessagePhase) -> bool {
        if self.phase != from {
            return false;
        }
        self.phase = to;
        true
    }
}

/// Counts fallback scans and says when to stop.
#[derive(Debug, Clone, Copy)]
pub struct MessagePoller {
    attempts: u32,
    max_attempts: u32,
}

impl MessagePoller {
    #[must_use]
    pub fn new(max_attempts: u32) -> Self {
        Self { attempts: 0, max_attempts }
    }

    #[must_use]
    pub fn attempts(self) -> u32 {
        self.attempts
    }

    #[must_use]
    pub fn exhausted(self) -> bool {
        self.attempts >= self.max_attempts
    }

    /// Record one scan. Returns whether another scan should follow.
    pub fn record_scan(&mut self) -> bool {
        if !self.exhausted() {
            self.attempts += 1;
        }
        !self.exhausted()
    }
}
