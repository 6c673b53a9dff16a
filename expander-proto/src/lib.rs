//! GPIO-expander register emulation for the button panel.
//!
//! This crate implements the expander device profile: the panel answers
//! I2C register reads as a pair of chained MCP23017-style expanders,
//! exposing the 18 button active flags through active-low input
//! registers. It is chip-agnostic and fully testable on host.
//!
//! # Register map
//!
//! | Register | Contents |
//! |----------|----------|
//! | `0x12` (GPIOA)          | buttons 0-7, active-low |
//! | `0x13` (GPIOB)          | buttons 8-15, active-low |
//! | `0x22` (chained GPIOA)  | buttons 16-17 in bits 0-1, rest high |
//! | `0x23` (chained GPIOB)  | fixed `0xFF` |
//! | anything else           | `0xFF` |
//!
//! The second chip is faked through the +0x10 register offset; only one
//! physical bus address is registered (see [`BUS_ADDRESS`]).
//!
//! # Example
//!
//! ```
//! use expander_proto::{ExpanderEngine, GPIOA};
//! use panel_core::{ButtonStates, RegisterEmulator};
//!
//! let mut engine = ExpanderEngine::new();
//! let mut states = ButtonStates::NONE;
//! states.set(0, true);
//!
//! engine.on_receive(&[GPIOA]);
//! let mut buf = [0u8; 1];
//! engine.on_request(states, &mut buf);
//! assert_eq!(buf[0], 0xFE); // button 0 pulls bit 0 low
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting (for embedded logging)

#![cfg_attr(not(feature = "std"), no_std)]

pub mod engine;
pub mod registers;

// Re-export main types
pub use engine::ExpanderEngine;
pub use registers::{
    pack_banks, read_register, CHAINED_OFFSET, DEFAULT_RESPONSE, GPIOA, GPIOA_CHAINED, GPIOB,
    GPIOB_CHAINED, NUM_BANKS,
};

/// 7-bit bus address the emulated expander pair answers on.
///
/// The chained chip would nominally sit at `0x21`; it is reached through
/// the register-offset convention instead of a second address decode.
pub const BUS_ADDRESS: u8 = 0x20;
