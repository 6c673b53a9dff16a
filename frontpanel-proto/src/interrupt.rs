//! Pending-interrupt state: cause mask, single-slot event record, line
//! level derivation.

use panel_core::ButtonEvent;

use crate::config::ConfigWord;
use crate::registers::ClearAction;

/// Interrupt cause: a button transition is pending.
pub const IRQ_TOUCH: u16 = 0x0001;

/// Interrupt cause: boot complete. Present in the mask encoding for the
/// master's benefit but never raised by the active configuration
/// (deferred capability).
pub const IRQ_READY: u16 = 0x8000;

/// Record of the most recent button transition.
///
/// Capacity one, no queue: a second transition before the first is read
/// overwrites it. Losing the older update is the documented behavior;
/// the master that cares polls fast enough.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EventRecord {
    /// Button index of the transition.
    pub index: u8,
    /// New state: 1 active, 0 inactive.
    pub state: u8,
}

/// Pending-interrupt state: cause mask plus the event slot behind it.
///
/// Invariant: the physical line is asserted iff the mask is non-zero.
/// The mask is set by event production on the main loop and cleared by
/// register reads on the bus callback, so the owner must guard it with
/// the same critical section as the rest of the engine.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterruptSignal {
    mask: u16,
    event: Option<EventRecord>,
}

impl InterruptSignal {
    /// Power-on state: nothing pending.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            mask: 0,
            event: None,
        }
    }

    /// Latch a button transition: overwrite the event slot and raise the
    /// touch cause.
    pub fn record(&mut self, event: ButtonEvent) {
        self.event = Some(EventRecord {
            index: event.index,
            state: event.state_byte(),
        });
        self.mask |= IRQ_TOUCH;
    }

    /// Consume the pending event, if any.
    pub fn take_event(&mut self) -> Option<EventRecord> {
        self.event.take()
    }

    /// Current cause mask.
    #[inline]
    #[must_use]
    pub const fn mask(&self) -> u16 {
        self.mask
    }

    /// Apply a register read's clearing side effect.
    pub fn clear(&mut self, action: ClearAction) {
        match action {
            ClearAction::None => {}
            ClearAction::Always => self.mask = 0,
            ClearAction::WhenMaskIdle => {
                if self.mask == 0 || self.mask == IRQ_READY {
                    self.mask = 0;
                }
            }
        }
    }

    /// Whether the line is logically asserted.
    #[inline]
    #[must_use]
    pub const fn line_asserted(&self) -> bool {
        self.mask != 0
    }

    /// Physical level to drive on the interrupt pin, given the
    /// configured polarity.
    #[inline]
    #[must_use]
    pub const fn line_level(&self, config: ConfigWord) -> bool {
        if config.int_active_high() {
            self.line_asserted()
        } else {
            !self.line_asserted()
        }
    }
}
