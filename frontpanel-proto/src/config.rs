//! Device configuration word written to the CONFIG register.

/// 16-bit configuration word, written little-endian by the master.
///
/// Written once at master-driven configuration time and held until
/// rewritten or the device is reset. Only the interrupt polarity bit is
/// interpreted; the remaining bits are stored verbatim for
/// forward-compatibility.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConfigWord(pub u16);

/// Interrupt polarity select: set = line asserts high, clear = asserts low.
pub const CONFIG_INT_ACTIVE_HIGH: u16 = 1 << 8;

impl ConfigWord {
    /// Power-on configuration: interrupt line asserts low.
    pub const DEFAULT: Self = Self(0);

    /// Decode the two little-endian payload bytes following the CONFIG
    /// register address.
    #[must_use]
    pub const fn from_le_bytes(lo: u8, hi: u8) -> Self {
        Self(u16::from_le_bytes([lo, hi]))
    }

    /// Whether the interrupt line asserts at a high level.
    #[inline]
    #[must_use]
    pub const fn int_active_high(self) -> bool {
        self.0 & CONFIG_INT_ACTIVE_HIGH != 0
    }

    /// Raw configuration word.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}
