//! Panel: per-button press/release state machine.
//!
//! The GUI layer (touch driver, widget hit-testing, rendering) is an
//! external collaborator; it reports raw press/release per button index
//! and owns nothing else. This module turns those raw inputs into active
//! flags and state-transition events according to each button's
//! [`ButtonKind`].

use crate::types::{ButtonEvent, ButtonKind, ButtonStates, NUM_BUTTONS};

/// The panel's button state, driven by the GUI layer on its cooperative
/// loop and snapshotted by the bus layer at response time.
///
/// - Toggle buttons flip their active flag on each press; releases are
///   ignored.
/// - Momentary buttons are active exactly while held.
///
/// `press`/`release` return the resulting transition, if any, so the
/// caller can feed the interrupt path of profiles that have one.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Panel {
    kinds: [ButtonKind; NUM_BUTTONS],
    states: ButtonStates,
}

impl Panel {
    /// Create a panel with the given per-button kinds, all inactive.
    #[must_use]
    pub const fn new(kinds: [ButtonKind; NUM_BUTTONS]) -> Self {
        Self {
            kinds,
            states: ButtonStates::NONE,
        }
    }

    /// Report a press on the button at `index`.
    ///
    /// Returns the state transition, or `None` for out-of-range indices.
    pub fn press(&mut self, index: usize) -> Option<ButtonEvent> {
        if index >= NUM_BUTTONS {
            return None;
        }
        let active = match self.kinds[index] {
            ButtonKind::Toggle => !self.states.is_active(index),
            ButtonKind::Momentary => true,
        };
        self.states.set(index, active);
        Some(ButtonEvent {
            index: index as u8,
            active,
        })
    }

    /// Report a release on the button at `index`.
    ///
    /// Only momentary buttons transition on release; toggle buttons hold
    /// their latched state. Returns the transition, if any.
    pub fn release(&mut self, index: usize) -> Option<ButtonEvent> {
        if index >= NUM_BUTTONS {
            return None;
        }
        match self.kinds[index] {
            ButtonKind::Toggle => None,
            ButtonKind::Momentary => {
                self.states.set(index, false);
                Some(ButtonEvent {
                    index: index as u8,
                    active: false,
                })
            }
        }
    }

    /// Current snapshot of all active flags.
    #[inline]
    #[must_use]
    pub const fn states(&self) -> ButtonStates {
        self.states
    }

    /// Whether the button at `index` is currently active.
    #[inline]
    #[must_use]
    pub const fn is_active(&self, index: usize) -> bool {
        self.states.is_active(index)
    }

    /// The kind of the button at `index`, if in range.
    #[must_use]
    pub fn kind(&self, index: usize) -> Option<ButtonKind> {
        self.kinds.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alternating_panel() -> Panel {
        let mut kinds = [ButtonKind::Momentary; NUM_BUTTONS];
        for (i, kind) in kinds.iter_mut().enumerate() {
            if i % 2 == 0 {
                *kind = ButtonKind::Toggle;
            }
        }
        Panel::new(kinds)
    }

    #[test]
    fn test_toggle_latches_across_release() {
        let mut panel = alternating_panel();

        let ev = panel.press(0).unwrap();
        assert_eq!(ev, ButtonEvent { index: 0, active: true });
        assert!(panel.release(0).is_none());
        assert!(panel.is_active(0));

        let ev = panel.press(0).unwrap();
        assert_eq!(ev, ButtonEvent { index: 0, active: false });
        assert!(!panel.is_active(0));
    }

    #[test]
    fn test_momentary_active_while_held() {
        let mut panel = alternating_panel();

        let ev = panel.press(1).unwrap();
        assert_eq!(ev, ButtonEvent { index: 1, active: true });
        assert!(panel.is_active(1));

        let ev = panel.release(1).unwrap();
        assert_eq!(ev, ButtonEvent { index: 1, active: false });
        assert!(!panel.is_active(1));
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut panel = alternating_panel();
        assert!(panel.press(NUM_BUTTONS).is_none());
        assert!(panel.release(NUM_BUTTONS).is_none());
        assert!(panel.states().is_empty());
    }

    #[test]
    fn test_snapshot_tracks_all_buttons() {
        let mut panel = alternating_panel();
        for i in 0..NUM_BUTTONS {
            panel.press(i);
        }
        assert_eq!(panel.states().active_count() as usize, NUM_BUTTONS);
        for i in 0..NUM_BUTTONS {
            panel.release(i);
        }
        // Toggles stay latched, momentaries drop out
        assert_eq!(panel.states().active_count() as usize, NUM_BUTTONS / 2);
    }
}
