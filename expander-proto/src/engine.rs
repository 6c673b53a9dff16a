//! Expander slave engine: transaction state machine for the expander
//! profile.

use panel_core::{ButtonEvent, ButtonEventSink, ButtonStates, RegisterEmulator};

use crate::registers::{read_register, DEFAULT_RESPONSE};

/// Slave engine emulating the chained-expander register map.
///
/// Holds the currently latched register selection. A write transaction's
/// first byte selects a register; the selection persists across any
/// number of subsequent reads until the next non-empty write replaces
/// it. Before the first write, reads answer [`DEFAULT_RESPONSE`].
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ExpanderEngine {
    selected: Option<u8>,
}

impl ExpanderEngine {
    /// Create an engine with no register selected.
    #[must_use]
    pub const fn new() -> Self {
        Self { selected: None }
    }

    /// The currently latched register selection, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<u8> {
        self.selected
    }
}

impl RegisterEmulator for ExpanderEngine {
    const MAX_RESPONSE: usize = 1;

    fn on_receive(&mut self, data: &[u8]) {
        // First byte is the register address; the expander takes no
        // write payload, so the rest of the transaction is discarded.
        if let Some(&register) = data.first() {
            self.selected = Some(register);
        }
    }

    fn on_request(&mut self, buttons: ButtonStates, response: &mut [u8]) -> usize {
        response[0] = match self.selected {
            Some(register) => read_register(register, buttons),
            None => DEFAULT_RESPONSE,
        };
        1
    }
}

impl ButtonEventSink for ExpanderEngine {
    fn on_button_event(&mut self, _event: ButtonEvent) {
        // No interrupt line in this profile; the master polls.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registers::{GPIOA, GPIOA_CHAINED, GPIOB, GPIOB_CHAINED};

    fn read_one(engine: &mut ExpanderEngine, states: ButtonStates) -> u8 {
        let mut buf = [0u8; 1];
        let len = engine.on_request(states, &mut buf);
        assert_eq!(len, 1);
        buf[0]
    }

    #[test]
    fn test_read_before_any_write_is_default() {
        let mut engine = ExpanderEngine::new();
        assert_eq!(read_one(&mut engine, ButtonStates::NONE), DEFAULT_RESPONSE);
    }

    #[test]
    fn test_empty_write_is_noop() {
        let mut engine = ExpanderEngine::new();
        engine.on_receive(&[GPIOA]);
        engine.on_receive(&[]);
        assert_eq!(engine.selected(), Some(GPIOA));
    }

    #[test]
    fn test_surplus_write_bytes_discarded() {
        let mut engine = ExpanderEngine::new();
        engine.on_receive(&[GPIOB, 0xAA, 0xBB, 0xCC]);
        assert_eq!(engine.selected(), Some(GPIOB));

        let mut states = ButtonStates::NONE;
        states.set(8, true);
        assert_eq!(read_one(&mut engine, states), 0xFE);
    }

    #[test]
    fn test_selection_persists_across_reads() {
        let mut engine = ExpanderEngine::new();
        engine.on_receive(&[GPIOA]);

        let mut states = ButtonStates::NONE;
        states.set(3, true);
        let first = read_one(&mut engine, states);
        let second = read_one(&mut engine, states);
        assert_eq!(first, second);
        assert_eq!(first, !(1u8 << 3));

        // A state change between reads is reflected without re-selecting
        states.set(3, false);
        assert_eq!(read_one(&mut engine, states), 0xFF);
    }

    #[test]
    fn test_reads_cover_all_banks() {
        let mut engine = ExpanderEngine::new();
        let mut states = ButtonStates::NONE;
        states.set(0, true);
        states.set(15, true);
        states.set(17, true);

        engine.on_receive(&[GPIOA]);
        assert_eq!(read_one(&mut engine, states), 0xFE);
        engine.on_receive(&[GPIOB]);
        assert_eq!(read_one(&mut engine, states), 0x7F);
        engine.on_receive(&[GPIOA_CHAINED]);
        assert_eq!(read_one(&mut engine, states), 0xFD);
        engine.on_receive(&[GPIOB_CHAINED]);
        assert_eq!(read_one(&mut engine, states), 0xFF);
    }

    #[test]
    fn test_unknown_register_leaves_state_unchanged() {
        let mut engine = ExpanderEngine::new();
        engine.on_receive(&[0x42]);
        let mut states = ButtonStates::NONE;
        states.set(5, true);
        assert_eq!(read_one(&mut engine, states), DEFAULT_RESPONSE);
        assert_eq!(engine.selected(), Some(0x42));
    }

    #[test]
    fn test_button_events_ignored() {
        let mut engine = ExpanderEngine::new();
        engine.on_receive(&[GPIOA]);
        engine.on_button_event(ButtonEvent {
            index: 2,
            active: true,
        });
        // Event reporting has no effect on a polled profile
        assert_eq!(engine.selected(), Some(GPIOA));
        assert_eq!(read_one(&mut engine, ButtonStates::NONE), 0xFF);
    }
}
