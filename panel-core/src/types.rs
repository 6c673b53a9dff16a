//! Core panel types: Buttons snapshot bitfield, ButtonKind, ButtonEvent.

/// Number of buttons on the panel, fixed at configuration time.
pub const NUM_BUTTONS: usize = 18;

/// Snapshot of all button active flags, packed into a single word.
///
/// Bit `i` is set when button `i` is active (checked for toggle buttons,
/// held for momentary buttons). Packing the whole panel into one `u32`
/// lets the snapshot cross the main-loop/bus-interrupt boundary as a
/// single indivisible access.
///
/// # Example
///
/// ```
/// use panel_core::ButtonStates;
///
/// let mut states = ButtonStates::NONE;
/// states.set(7, true);
/// assert!(states.is_active(7));
/// assert!(!states.is_active(8));
/// ```
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonStates(pub u32);

impl ButtonStates {
    /// No buttons active.
    pub const NONE: Self = Self(0);

    /// Check whether the button at `index` is active.
    ///
    /// Out-of-range indices read as inactive.
    #[inline]
    #[must_use]
    pub const fn is_active(self, index: usize) -> bool {
        index < NUM_BUTTONS && (self.0 >> index) & 1 != 0
    }

    /// Set or clear the active flag for the button at `index`.
    ///
    /// Out-of-range indices are ignored.
    #[inline]
    pub fn set(&mut self, index: usize, active: bool) {
        if index >= NUM_BUTTONS {
            return;
        }
        if active {
            self.0 |= 1 << index;
        } else {
            self.0 &= !(1 << index);
        }
    }

    /// Get the raw u32 value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Number of currently active buttons.
    #[inline]
    #[must_use]
    pub const fn active_count(self) -> u32 {
        self.0.count_ones()
    }

    /// Check if no buttons are active.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Behavioral kind of a button.
///
/// Toggle buttons latch their active flag on each press; momentary
/// buttons are active only while held.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonKind {
    /// Active flag flips on each press.
    Toggle,
    /// Active while pressed, inactive on release.
    Momentary,
}

/// A single button state transition, reported by the panel layer at the
/// instant it occurs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[must_use]
pub struct ButtonEvent {
    /// Button index (0..NUM_BUTTONS), the stable identity on the wire.
    pub index: u8,
    /// New active state after the transition.
    pub active: bool,
}

impl ButtonEvent {
    /// Wire encoding of the new state: 1 for active, 0 for inactive.
    #[inline]
    #[must_use]
    pub const fn state_byte(self) -> u8 {
        if self.active {
            1
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_states_set_clear() {
        let mut states = ButtonStates::NONE;
        states.set(0, true);
        states.set(17, true);
        assert!(states.is_active(0));
        assert!(states.is_active(17));
        assert_eq!(states.active_count(), 2);

        states.set(0, false);
        assert!(!states.is_active(0));
        assert!(states.is_active(17));
    }

    #[test]
    fn test_states_out_of_range_ignored() {
        let mut states = ButtonStates::NONE;
        states.set(NUM_BUTTONS, true);
        states.set(31, true);
        assert!(states.is_empty());
        assert!(!states.is_active(NUM_BUTTONS));
    }

    #[test]
    fn test_event_state_byte() {
        let press = ButtonEvent {
            index: 3,
            active: true,
        };
        let release = ButtonEvent {
            index: 3,
            active: false,
        };
        assert_eq!(press.state_byte(), 1);
        assert_eq!(release.state_byte(), 0);
    }
}
