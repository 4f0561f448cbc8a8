#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A celebration window that can be restarted but never double-armed.
///
/// [`Celebration::trigger`] hands back an epoch token, and only the expiry
/// holding the latest token may switch the window off. A timer belonging to
/// a superseded trigger, or one that outlives its component, expires into a
/// no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Celebration {
    epoch: u64,
    active: bool,
}

impl Celebration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activates the window (restarting it when already active) and returns
    /// the epoch token for the matching expiry.
    pub fn trigger(&mut self) -> u64 {
        self.epoch += 1;
        self.active = true;
        self.epoch
    }

    /// Deactivates the window when `epoch` is still current.
    /// Returns whether anything changed.
    pub fn expire(&mut self, epoch: u64) -> bool {
        if self.active && epoch == self.epoch {
            self.active = false;
            true
        } else {
            false
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}
