use serde::Serialize;

/// Fixed number of results revealed per page.
pub const PAGE_SIZE: usize = 10;

/// Where the reveal machinery currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealPhase {
    Idle,
    Loading,
    Exhausted,
}

impl RevealPhase {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Exhausted => "exhausted",
        }
    }
}

/// Monotonically growing window over the filtered result set.
///
/// Invariants: `revealed <= matched`; the window only shrinks via `reset`,
/// which is paired with every catalog/filter/sort change. Reveal triggers are
/// ignored while a reveal is in flight and after exhaustion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealController {
    phase: RevealPhase,
    revealed: usize,
    matched: usize,
}

impl Default for RevealController {
    fn default() -> Self {
        Self {
            phase: RevealPhase::Exhausted,
            revealed: 0,
            matched: 0,
        }
    }
}

impl RevealController {
    /// Snap back to the first page over a freshly filtered set.
    pub fn reset(&mut self, matched: usize) {
        self.matched = matched;
        self.revealed = PAGE_SIZE.min(matched);
        self.phase = if self.revealed < self.matched {
            RevealPhase::Idle
        } else {
            RevealPhase::Exhausted
        };
    }

    /// Accept a reveal trigger. Rejected unless idle with more to show, so
    /// rapid repeated triggers collapse into one reveal.
    pub fn try_begin(&mut self) -> bool {
        if self.phase != RevealPhase::Idle || !self.has_more() {
            return false;
        }
        self.phase = RevealPhase::Loading;
        true
    }

    /// Grow the window by one page and settle back to idle or exhausted.
    pub fn complete(&mut self) {
        if self.phase != RevealPhase::Loading {
            return;
        }
        self.revealed = (self.revealed + PAGE_SIZE).min(self.matched);
        self.phase = if self.revealed < self.matched {
            RevealPhase::Idle
        } else {
            RevealPhase::Exhausted
        };
    }

    /// Single-step reveal for synchronous hosts. Returns whether the window
    /// actually grew.
    pub fn reveal(&mut self) -> bool {
        if !self.try_begin() {
            return false;
        }
        self.complete();
        true
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn matched(&self) -> usize {
        self.matched
    }

    pub fn has_more(&self) -> bool {
        self.revealed < self.matched
    }
}
