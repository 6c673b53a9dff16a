//! Register emulation seams between the bus transport and a device profile.

use crate::types::{ButtonEvent, ButtonStates};

/// A slave-side register emulation engine.
///
/// The bus adapter owns the transaction lifecycle and calls in here:
/// `on_receive` when the master writes, `on_request` when the master
/// reads. Both run inside the adapter's critical section, so an engine
/// never observes a half-applied transaction and a multi-byte response is
/// emitted atomically with respect to concurrent state changes.
///
/// There is no error channel on a polled hardware bus: undefined input
/// must degrade to the profile's documented default payload, never to a
/// failure the master cannot observe anyway.
pub trait RegisterEmulator {
    /// Largest response any register of this profile can produce.
    const MAX_RESPONSE: usize;

    /// A write transaction arrived from the master.
    ///
    /// The first byte selects a register; profile-specific payload bytes
    /// may follow. Surplus bytes are drained and discarded. An empty
    /// write is a no-op and leaves the selection unchanged.
    fn on_receive(&mut self, data: &[u8]);

    /// A read transaction arrived; synthesize the response for the
    /// currently selected register from the given button snapshot.
    ///
    /// Writes the payload into `response` and returns its length
    /// (1..=`MAX_RESPONSE`). The selection is not reset: the master may
    /// re-read the same register. Read-to-clear side effects are applied
    /// here.
    fn on_request(&mut self, buttons: ButtonStates, response: &mut [u8]) -> usize;
}

/// Sink for button state transitions, reported once at the instant they
/// occur.
///
/// Profiles with an out-of-band interrupt line implement this to latch
/// the event and assert the line; profiles without one use [`NullEventSink`]
/// semantics and ignore transitions entirely (the master polls).
pub trait ButtonEventSink {
    /// A button changed state.
    fn on_button_event(&mut self, event: ButtonEvent);
}

/// Event sink that discards all transitions.
///
/// Useful as a standalone placeholder; polled-only profiles typically
/// just implement [`ButtonEventSink`] as a no-op themselves.
pub struct NullEventSink;

impl ButtonEventSink for NullEventSink {
    fn on_button_event(&mut self, _event: ButtonEvent) {}
}
