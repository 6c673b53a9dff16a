//! Front-panel slave engine: transaction state machine for the
//! front-panel profile.

use panel_core::{ButtonEvent, ButtonEventSink, ButtonStates, RegisterEmulator};

use crate::config::ConfigWord;
use crate::interrupt::InterruptSignal;
use crate::registers::{clear_action, ClearAction, Register, DEFAULT_RESPONSE};

/// Largest front-panel response: the 5-byte event payload.
pub const MAX_RESPONSE: usize = 5;

/// Slave engine emulating the front-panel controller register set.
///
/// Latches the register selection from each write transaction, decodes
/// the CONFIG payload, and synthesizes read responses with the
/// read-to-clear side effects from the [`clear_action`] table. Button
/// transitions arrive through [`ButtonEventSink`] and surface via the
/// EVENT register and the interrupt line.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrontPanelEngine {
    selected: Option<u8>,
    config: ConfigWord,
    irq: InterruptSignal,
}

impl FrontPanelEngine {
    /// Create an engine in power-on state: nothing selected, default
    /// configuration, no pending interrupt.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            selected: None,
            config: ConfigWord::DEFAULT,
            irq: InterruptSignal::new(),
        }
    }

    /// The currently latched register address, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<u8> {
        self.selected
    }

    /// Current configuration word.
    #[must_use]
    pub const fn config(&self) -> ConfigWord {
        self.config
    }

    /// Current interrupt cause mask.
    #[must_use]
    pub const fn mask(&self) -> u16 {
        self.irq.mask()
    }

    /// Physical level the interrupt pin should be driven to right now.
    #[must_use]
    pub const fn line_level(&self) -> bool {
        self.irq.line_level(self.config)
    }

    /// Whether the interrupt line is logically asserted.
    #[must_use]
    pub const fn line_asserted(&self) -> bool {
        self.irq.line_asserted()
    }

    fn reset(&mut self) {
        self.config = ConfigWord::DEFAULT;
        self.irq = InterruptSignal::new();
    }
}

impl RegisterEmulator for FrontPanelEngine {
    const MAX_RESPONSE: usize = MAX_RESPONSE;

    fn on_receive(&mut self, data: &[u8]) {
        let Some(&addr) = data.first() else {
            return;
        };
        self.selected = Some(addr);

        match Register::from_addr(addr) {
            // CONFIG carries a 16-bit little-endian payload. A short
            // write selects the register but applies nothing; surplus
            // bytes are drained for forward-compatibility.
            Some(Register::Config) => {
                if let [_, lo, hi, ..] = *data {
                    self.config = ConfigWord::from_le_bytes(lo, hi);
                }
            }
            // Selecting RESET restores power-on state.
            Some(Register::Reset) => self.reset(),
            // All other writes are address-only; payload is discarded.
            _ => {}
        }
    }

    fn on_request(&mut self, _buttons: ButtonStates, response: &mut [u8]) -> usize {
        let register = self.selected.and_then(Register::from_addr);

        let (len, action) = match register {
            Some(Register::IntMask) => {
                let [lo, hi] = self.irq.mask().to_le_bytes();
                response[0] = lo;
                response[1] = hi;
                (2, clear_action(Register::IntMask))
            }
            Some(Register::Encoder) => {
                // No rotary encoders emulated
                response[0] = 0x00;
                response[1] = 0x00;
                (2, clear_action(Register::Encoder))
            }
            Some(Register::Switch) => {
                // No encoder switches emulated
                response[0] = 0x00;
                (1, clear_action(Register::Switch))
            }
            Some(Register::Event) => {
                let record = self.irq.take_event();
                response[0] = record.map_or(0, |r| r.index);
                response[1] = record.map_or(0, |r| r.state);
                response[2] = 0;
                response[3] = 0;
                response[4] = 0;
                (5, clear_action(Register::Event))
            }
            // CONFIG, RESET, LED, unknown addresses, and reads before
            // any selection all answer the profile default.
            _ => {
                response[0] = DEFAULT_RESPONSE;
                (1, ClearAction::None)
            }
        };

        self.irq.clear(action);
        len
    }
}

impl ButtonEventSink for FrontPanelEngine {
    fn on_button_event(&mut self, event: ButtonEvent) {
        self.irq.record(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CONFIG_INT_ACTIVE_HIGH;
    use crate::interrupt::IRQ_TOUCH;

    fn read(engine: &mut FrontPanelEngine, addr: u8) -> ([u8; MAX_RESPONSE], usize) {
        engine.on_receive(&[addr]);
        let mut buf = [0u8; MAX_RESPONSE];
        let len = engine.on_request(ButtonStates::NONE, &mut buf);
        (buf, len)
    }

    fn press(engine: &mut FrontPanelEngine, index: u8) {
        engine.on_button_event(ButtonEvent {
            index,
            active: true,
        });
    }

    #[test]
    fn test_event_read_payload_and_clear() {
        let mut engine = FrontPanelEngine::new();
        press(&mut engine, 7);

        // Default polarity asserts low
        assert!(engine.line_asserted());
        assert!(!engine.line_level());

        let (buf, len) = read(&mut engine, Register::Event.addr());
        assert_eq!(len, 5);
        assert_eq!(buf, [7, 1, 0, 0, 0]);

        // Read-to-clear: line released, slot empty
        assert!(!engine.line_asserted());
        assert!(engine.line_level());
        let (buf, len) = read(&mut engine, Register::Event.addr());
        assert_eq!((buf, len), ([0, 0, 0, 0, 0], 5));
    }

    #[test]
    fn test_int_mask_read_low_byte_first() {
        let mut engine = FrontPanelEngine::new();
        press(&mut engine, 0);

        let (buf, len) = read(&mut engine, Register::IntMask.addr());
        assert_eq!(len, 2);
        assert_eq!(buf[..2], IRQ_TOUCH.to_le_bytes());
        // Touch cause still pending: line stays asserted
        assert!(engine.line_asserted());

        // Once the mask settles to zero, reading INT_MASK releases the line
        let _ = read(&mut engine, Register::Event.addr());
        let (buf, _) = read(&mut engine, Register::IntMask.addr());
        assert_eq!(buf[..2], [0, 0]);
        assert!(!engine.line_asserted());
    }

    #[test]
    fn test_encoder_and_switch_always_clear() {
        let mut engine = FrontPanelEngine::new();

        press(&mut engine, 4);
        let (buf, len) = read(&mut engine, Register::Encoder.addr());
        assert_eq!((buf[0], buf[1], len), (0, 0, 2));
        assert!(!engine.line_asserted());

        press(&mut engine, 4);
        let (buf, len) = read(&mut engine, Register::Switch.addr());
        assert_eq!((buf[0], len), (0, 1));
        assert!(!engine.line_asserted());
    }

    #[test]
    fn test_config_polarity_applies_to_next_event() {
        let mut engine = FrontPanelEngine::new();
        let [lo, hi] = CONFIG_INT_ACTIVE_HIGH.to_le_bytes();

        engine.on_receive(&[Register::Config.addr(), lo, hi]);
        assert!(engine.config().int_active_high());
        // Idle line is now low
        assert!(!engine.line_level());

        press(&mut engine, 11);
        assert!(engine.line_level());

        // Repeated identical writes are idempotent
        engine.on_receive(&[Register::Config.addr(), lo, hi]);
        assert!(engine.config().int_active_high());
        assert!(engine.line_level());
    }

    #[test]
    fn test_short_config_write_applies_nothing() {
        let mut engine = FrontPanelEngine::new();
        engine.on_receive(&[Register::Config.addr(), 0x01]);
        assert_eq!(engine.selected(), Some(Register::Config.addr()));
        assert_eq!(engine.config(), ConfigWord::DEFAULT);
    }

    #[test]
    fn test_config_surplus_bytes_drained() {
        let mut engine = FrontPanelEngine::new();
        engine.on_receive(&[Register::Config.addr(), 0x00, 0x01, 0xAA, 0xBB]);
        assert!(engine.config().int_active_high());
    }

    #[test]
    fn test_single_slot_lost_update() {
        let mut engine = FrontPanelEngine::new();
        press(&mut engine, 3);
        engine.on_button_event(ButtonEvent {
            index: 9,
            active: false,
        });

        // Only the second transition is observable
        let (buf, _) = read(&mut engine, Register::Event.addr());
        assert_eq!(buf, [9, 0, 0, 0, 0]);
    }

    #[test]
    fn test_selection_persists_across_reads() {
        let mut engine = FrontPanelEngine::new();
        press(&mut engine, 1);

        engine.on_receive(&[Register::IntMask.addr()]);
        let mut buf = [0u8; MAX_RESPONSE];
        let first = engine.on_request(ButtonStates::NONE, &mut buf);
        let first_payload = buf;
        let second = engine.on_request(ButtonStates::NONE, &mut buf);
        assert_eq!((first, second), (2, 2));
        assert_eq!(first_payload, buf);
    }

    #[test]
    fn test_unknown_register_default_and_state_untouched() {
        let mut engine = FrontPanelEngine::new();
        press(&mut engine, 5);
        engine.on_receive(&[Register::Config.addr(), 0x00, 0x01]);

        let (buf, len) = read(&mut engine, 0x42);
        assert_eq!((buf[0], len), (DEFAULT_RESPONSE, 1));
        // Mask, event, and config are all unchanged
        assert_eq!(engine.mask(), IRQ_TOUCH);
        assert!(engine.config().int_active_high());
        let (buf, _) = read(&mut engine, Register::Event.addr());
        assert_eq!(buf, [5, 1, 0, 0, 0]);
    }

    #[test]
    fn test_read_before_any_selection_is_default() {
        let mut engine = FrontPanelEngine::new();
        let mut buf = [0u8; MAX_RESPONSE];
        let len = engine.on_request(ButtonStates::NONE, &mut buf);
        assert_eq!((buf[0], len), (DEFAULT_RESPONSE, 1));
    }

    #[test]
    fn test_empty_write_is_noop() {
        let mut engine = FrontPanelEngine::new();
        engine.on_receive(&[Register::IntMask.addr()]);
        engine.on_receive(&[]);
        assert_eq!(engine.selected(), Some(Register::IntMask.addr()));
    }

    #[test]
    fn test_reset_restores_power_on_state() {
        let mut engine = FrontPanelEngine::new();
        engine.on_receive(&[Register::Config.addr(), 0x00, 0x01]);
        press(&mut engine, 2);

        engine.on_receive(&[Register::Reset.addr()]);
        assert_eq!(engine.config(), ConfigWord::DEFAULT);
        assert_eq!(engine.mask(), 0);
        let (buf, _) = read(&mut engine, Register::Event.addr());
        assert_eq!(buf, [0, 0, 0, 0, 0]);
    }
}
