//! Touch button panel emulating an I2C peripheral, for RP2040.
//!
//! This crate provides the embedded implementation of a button panel
//! that answers I2C register reads from an external controller as if it
//! were a known chip.
//!
//! # Overview
//!
//! The firmware runs on a Raspberry Pi Pico (RP2040) and:
//! 1. Tracks 18 touch buttons (toggle or momentary) fed by the GUI layer
//! 2. Answers I2C slave transactions with register responses synthesized
//!    from the live button snapshot
//! 3. In the front-panel profile, drives a dedicated interrupt line with
//!    read-to-clear semantics
//!
//! # Hardware Configuration
//!
//! | Function  | GPIO | Description |
//! |-----------|------|-------------|
//! | I2C1 SDA  | 26   | Slave data |
//! | I2C1 SCL  | 27   | Slave clock |
//! | INT       | 22   | Interrupt line (front-panel profile only) |
//!
//! # Architecture
//!
//! The firmware uses the Embassy async runtime with three concurrent
//! tasks:
//!
//! - **Bus Task**: Listens for I2C slave transactions and drives the
//!   register engine
//! - **Panel Task**: Drains touch press/release events, updates the
//!   shared button snapshot, feeds transitions to the engine
//! - **Line Task** (front-panel profile): Drives the interrupt pin to
//!   the level signalled after each engine mutation
//!
//! The button snapshot crosses the task/ISR boundary as a single atomic
//! word ([`SharedButtons`]); all other engine state is guarded by a
//! critical-section mutex so a multi-byte response is never torn by a
//! concurrent button update. Line-level handoff uses Embassy's
//! [`Signal`](embassy_sync::signal::Signal) with "latest value wins"
//! semantics.
//!
//! # Modules
//!
//! - [`bus`]: I2C slave transport adapter ([`I2cBusAdapter`])
//!
//! # Features
//!
//! - **`dev-panic`** (default): Use `panic-probe` for development (prints panic info via RTT)
//! - **`prod-panic`**: Use `panic-reset` for production (silent watchdog reset)
//! - **`profile-expander`** (default): Emulate chained GPIO expanders
//! - **`profile-frontpanel`**: Emulate the front-panel controller with interrupt line
//!
//! # Re-exports
//!
//! This crate re-exports the public items of [`panel_core`] and the
//! selected profile crate, so consumers only need to depend on this
//! crate.

#![no_std]

// Ensure mutually exclusive profile features
#[cfg(all(feature = "profile-expander", feature = "profile-frontpanel"))]
compile_error!("Cannot enable both `profile-expander` and `profile-frontpanel` features - the panel answers as exactly one device");

#[cfg(not(any(feature = "profile-expander", feature = "profile-frontpanel")))]
compile_error!("Select a device profile: `profile-expander` or `profile-frontpanel`");

// Re-export core types for convenience
pub use panel_core::{
    ButtonEvent, ButtonEventSink, ButtonKind, ButtonStateSource, ButtonStates, Panel,
    RegisterEmulator, SharedButtons, NUM_BUTTONS,
};

pub mod bus;

pub use bus::{I2cBusAdapter, SharedEngine};

/// Register engine of the selected device profile.
#[cfg(feature = "profile-expander")]
pub type ActiveEngine = expander_proto::ExpanderEngine;
#[cfg(feature = "profile-frontpanel")]
pub type ActiveEngine = frontpanel_proto::FrontPanelEngine;

/// 7-bit bus address of the selected profile.
#[cfg(feature = "profile-expander")]
pub const BUS_ADDRESS: u8 = expander_proto::BUS_ADDRESS;
#[cfg(feature = "profile-frontpanel")]
pub const BUS_ADDRESS: u8 = frontpanel_proto::BUS_ADDRESS;

/// Filler byte when the master reads past the synthesized payload.
#[cfg(feature = "profile-expander")]
pub const DEFAULT_FILL: u8 = expander_proto::DEFAULT_RESPONSE;
#[cfg(feature = "profile-frontpanel")]
pub const DEFAULT_FILL: u8 = frontpanel_proto::DEFAULT_RESPONSE;

/// Physical interrupt line level for the engine's current state, if the
/// selected profile has an interrupt line.
#[cfg(feature = "profile-frontpanel")]
#[inline]
#[must_use]
pub fn engine_line_level(engine: &ActiveEngine) -> Option<bool> {
    Some(engine.line_level())
}

/// The expander profile has no interrupt line; the master polls.
#[cfg(feature = "profile-expander")]
#[inline]
#[must_use]
pub fn engine_line_level(_engine: &ActiveEngine) -> Option<bool> {
    None
}

/// A raw touch report from the GUI layer: finger down or up on the
/// widget of button `index`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, defmt::Format)]
pub struct TouchInput {
    pub index: usize,
    pub pressed: bool,
}
