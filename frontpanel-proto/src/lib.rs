//! Front-panel controller register emulation for the button panel.
//!
//! This crate implements the front-panel device profile: the panel
//! answers I2C register reads as a vendor front-panel controller with a
//! configuration word, encoder/switch/event registers, and a dedicated
//! interrupt output line with read-to-clear semantics. It is
//! chip-agnostic and fully testable on host.
//!
//! # Register map
//!
//! | Register | Read response | Side effect |
//! |----------|---------------|-------------|
//! | `0x02` INT_MASK | 2 bytes, cause mask little-endian | releases the line once no cause remains |
//! | `0x03` ENCODER  | `0x00 0x00` (none emulated) | always releases the line |
//! | `0x04` SWITCH   | `0x00` (none emulated) | always releases the line |
//! | `0x05` EVENT    | index, state, 3 reserved zeros | always releases the line, consumes the slot |
//! | anything else   | `0x00` | none |
//!
//! Writes: `CONFIG` (`0x00`) takes a 16-bit little-endian payload whose
//! bit 8 selects interrupt polarity; selecting `RESET` (`0x01`) restores
//! power-on state; every other write is address-only.
//!
//! # Example
//!
//! ```
//! use frontpanel_proto::{FrontPanelEngine, Register};
//! use panel_core::{ButtonEvent, ButtonEventSink, ButtonStates, RegisterEmulator};
//!
//! let mut engine = FrontPanelEngine::new();
//! engine.on_button_event(ButtonEvent { index: 7, active: true });
//! assert!(engine.line_asserted());
//!
//! engine.on_receive(&[Register::Event.addr()]);
//! let mut buf = [0u8; 5];
//! engine.on_request(ButtonStates::NONE, &mut buf);
//! assert_eq!(buf, [7, 1, 0, 0, 0]);
//! assert!(!engine.line_asserted());
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting (for embedded logging)

#![cfg_attr(not(feature = "std"), no_std)]

pub mod config;
pub mod engine;
pub mod interrupt;
pub mod registers;

// Re-export main types
pub use config::{ConfigWord, CONFIG_INT_ACTIVE_HIGH};
pub use engine::{FrontPanelEngine, MAX_RESPONSE};
pub use interrupt::{EventRecord, InterruptSignal, IRQ_READY, IRQ_TOUCH};
pub use registers::{clear_action, ClearAction, Register, DEFAULT_RESPONSE};

/// 7-bit bus address the emulated front-panel controller answers on.
pub const BUS_ADDRESS: u8 = 0x20;
