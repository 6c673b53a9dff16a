//! Front-panel register set and the read-to-clear action table.

/// Registers of the emulated front-panel controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    /// Device configuration word (16-bit, little-endian write payload).
    Config = 0x00,
    /// Soft reset; selecting it restores power-on state.
    Reset = 0x01,
    /// Pending interrupt cause bitmask (2-byte read, low byte first).
    IntMask = 0x02,
    /// Rotary encoder deltas (none emulated, reads zero).
    Encoder = 0x03,
    /// Encoder push switches (none emulated, reads zero).
    Switch = 0x04,
    /// Most recent button transition (5-byte read, single slot).
    Event = 0x05,
    /// LED control (write-only on real hardware, ignored here).
    Led = 0x06,
}

impl Register {
    /// Decode a register address, `None` for anything outside the map.
    #[must_use]
    pub const fn from_addr(addr: u8) -> Option<Self> {
        match addr {
            0x00 => Some(Self::Config),
            0x01 => Some(Self::Reset),
            0x02 => Some(Self::IntMask),
            0x03 => Some(Self::Encoder),
            0x04 => Some(Self::Switch),
            0x05 => Some(Self::Event),
            0x06 => Some(Self::Led),
            _ => None,
        }
    }

    /// The register's bus address.
    #[must_use]
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

/// Response byte for unknown or unreadable registers.
pub const DEFAULT_RESPONSE: u8 = 0x00;

/// Interrupt-clearing side effect a register read carries.
///
/// One table instead of per-register conditionals: every read path asks
/// this table what to do with the pending-interrupt state afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClearAction {
    /// Read has no effect on pending interrupts.
    None,
    /// Read unconditionally clears pending interrupts.
    Always,
    /// Read clears only if no real cause remains (mask is empty or holds
    /// just the boot-complete sentinel).
    WhenMaskIdle,
}

/// Read-to-clear action for each register.
#[must_use]
pub const fn clear_action(register: Register) -> ClearAction {
    match register {
        Register::IntMask => ClearAction::WhenMaskIdle,
        Register::Encoder | Register::Switch | Register::Event => ClearAction::Always,
        Register::Config | Register::Reset | Register::Led => ClearAction::None,
    }
}
