//! Platform-agnostic button panel types and register emulation seams.
//!
//! This crate provides the core abstractions for a touch-display button
//! panel that answers I2C register reads as an emulated peripheral,
//! without any platform-specific dependencies. It can be used both in
//! embedded `no_std` environments and on host for testing.
//!
//! # Overview
//!
//! The crate is organized into several modules:
//!
//! - [`types`]: Core data structures ([`ButtonStates`], [`ButtonKind`], [`ButtonEvent`])
//! - [`panel`]: Press/release state machine driven by the GUI layer ([`Panel`])
//! - [`source`]: Button snapshot seam ([`ButtonStateSource`], [`SharedButtons`])
//! - [`engine`]: Profile seams ([`RegisterEmulator`], [`ButtonEventSink`])
//!
//! # Execution model
//!
//! Two contexts touch this state: the GUI's cooperative loop (writes
//! button flags) and the bus transport's interrupt-like callbacks (read
//! snapshots, mutate engine state). [`SharedButtons`] crosses that
//! boundary as one atomic word; everything else is guarded by the bus
//! adapter's critical section.
//!
//! # Example
//!
//! ```
//! use panel_core::{ButtonKind, Panel, NUM_BUTTONS};
//!
//! let mut panel = Panel::new([ButtonKind::Momentary; NUM_BUTTONS]);
//! let event = panel.press(7).unwrap();
//! assert_eq!(event.index, 7);
//! assert!(panel.is_active(7));
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting (for embedded logging)
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations,
//! making it suitable for embedded systems with limited resources.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod engine;
pub mod panel;
pub mod source;
pub mod types;

// Re-export main types at crate root
pub use engine::{ButtonEventSink, NullEventSink, RegisterEmulator};
pub use panel::Panel;
pub use source::{ButtonStateSource, SharedButtons};
pub use types::{ButtonEvent, ButtonKind, ButtonStates, NUM_BUTTONS};
