//! Edge-triggered sentinel visibility.
//!
//! The host reports whether the sentinel element at the end of the list
//! is on screen. Only a hidden → visible transition counts as a request
//! for more content; staying visible does not fire again until the
//! trigger is re-armed by new content or the sentinel leaves the screen.

/// Tracks the last reported sentinel visibility.
#[derive(Debug, Clone, Default)]
pub struct ViewportTrigger {
    /// Last reported visibility.
    visible: bool,
    /// Number of rising edges seen.
    fired: u64,
}

impl ViewportTrigger {
    /// Create a trigger for a hidden sentinel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a visibility report. Returns `true` on a rising edge.
    pub fn observe(&mut self, visible: bool) -> bool {
        let rising = visible && !self.visible;
        self.visible = visible;
        if rising {
            self.fired += 1;
        }
        rising
    }

    /// Forget the last visibility, so the next visible report fires.
    ///
    /// Called when content was appended below the sentinel's old position.
    pub fn rearm(&mut self) {
        self.visible = false;
    }

    /// Last reported visibility.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Number of rising edges observed so far.
    pub fn fired(&self) -> u64 {
        self.fired
    }
}
