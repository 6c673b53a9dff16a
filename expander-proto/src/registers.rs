//! Expander register map: addresses, bank packing, response synthesis.
//!
//! The panel answers as two chained MCP23017-style expanders sharing one
//! physical bus address. Only the input registers are emulated; the
//! second chip is reached through a +0x10 register-address offset rather
//! than a second bus address (a convention carried over from the device
//! this replaces, see `chained_register`).

use panel_core::{ButtonStates, NUM_BUTTONS};

/// Register offset that stands in for the second chained chip's bus
/// address.
pub const CHAINED_OFFSET: u8 = 0x10;

/// GPIOA input register of the first chip: buttons 0-7.
pub const GPIOA: u8 = 0x12;

/// GPIOB input register of the first chip: buttons 8-15.
pub const GPIOB: u8 = 0x13;

/// GPIOA of the chained chip (GPIOA + 0x10): buttons 16-17 in bits 0-1.
pub const GPIOA_CHAINED: u8 = GPIOA + CHAINED_OFFSET;

/// GPIOB of the chained chip (GPIOB + 0x10): no buttons mapped.
pub const GPIOB_CHAINED: u8 = GPIOB + CHAINED_OFFSET;

/// Response for unknown registers and unmapped inputs.
///
/// Expander inputs idle high; a floating read is all ones.
pub const DEFAULT_RESPONSE: u8 = 0xFF;

/// Number of emulated input banks.
pub const NUM_BANKS: usize = 4;

/// Pack the button snapshot into the four input banks.
///
/// Button `i` maps to bank `i / 8`, bit `i % 8`, active-low: the bit is
/// cleared while the button is active, matching real expander inputs
/// with pull-ups. Bits with no button behind them stay high.
#[must_use]
pub fn pack_banks(states: ButtonStates) -> [u8; NUM_BANKS] {
    let mut banks = [DEFAULT_RESPONSE; NUM_BANKS];
    for i in 0..NUM_BUTTONS {
        if states.is_active(i) {
            banks[i / 8] &= !(1 << (i % 8));
        }
    }
    banks
}

/// Synthesize the response byte for a register read.
///
/// Unknown registers answer [`DEFAULT_RESPONSE`]; the wire protocol has
/// no error channel.
#[must_use]
pub fn read_register(register: u8, states: ButtonStates) -> u8 {
    let banks = pack_banks(states);
    match register {
        GPIOA => banks[0],
        GPIOB => banks[1],
        GPIOA_CHAINED => banks[2],
        GPIOB_CHAINED => banks[3],
        _ => DEFAULT_RESPONSE,
    }
}
