//! Button state source trait and the cross-context shared cell.

use portable_atomic::{AtomicU32, Ordering};

use crate::types::ButtonStates;

/// Source of live button active flags, polled at response time.
///
/// Implementations must be side-effect-free and cheap: `snapshot` is
/// called from the bus callback, which runs in an interrupt-like context
/// that can preempt the main loop at arbitrary points.
pub trait ButtonStateSource {
    /// Whether the button at `index` is currently active.
    fn get_active(&self, index: usize) -> bool;

    /// Consistent snapshot of all button active flags.
    fn snapshot(&self) -> ButtonStates;
}

/// Button snapshot cell shared between the main loop and the bus
/// callback context.
///
/// The main loop is the only writer (on input events); the bus callback
/// only reads. A single `AtomicU32` load returns the whole panel, so a
/// multi-byte response is always synthesized from one consistent
/// snapshot and no torn read is possible.
pub struct SharedButtons(AtomicU32);

impl SharedButtons {
    /// Create a cell with all buttons inactive.
    #[must_use]
    pub const fn new() -> Self {
        Self(AtomicU32::new(0))
    }

    /// Publish a new snapshot. Main-loop context only.
    #[inline]
    pub fn store(&self, states: ButtonStates) {
        self.0.store(states.raw(), Ordering::Release);
    }

    /// Load the current snapshot.
    #[inline]
    #[must_use]
    pub fn load(&self) -> ButtonStates {
        ButtonStates(self.0.load(Ordering::Acquire))
    }
}

impl Default for SharedButtons {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonStateSource for SharedButtons {
    fn get_active(&self, index: usize) -> bool {
        self.load().is_active(index)
    }

    fn snapshot(&self) -> ButtonStates {
        self.load()
    }
}
