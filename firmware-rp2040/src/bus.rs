//! I2C slave bus adapter.
//!
//! Owns the transaction lifecycle on the wire and forwards it to the
//! selected profile's [`RegisterEmulator`]: master writes become
//! `on_receive`, master reads become `on_request` against a fresh button
//! snapshot. The engine lives in a critical-section mutex shared with the
//! panel task, so register selection, configuration, and interrupt state
//! are never observed half-updated from either context.
//!
//! There is no error channel back to the master: transport errors are
//! logged and the listen loop keeps going, and reads past the
//! synthesized payload are filled with the profile default byte.

use core::cell::RefCell;

use defmt::{trace, warn};
use embassy_rp::i2c::Instance;
use embassy_rp::i2c_slave::{Command, Error, I2cSlave, ReadStatus};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::signal::Signal;
use panel_core::{RegisterEmulator, SharedButtons};

use crate::{engine_line_level, ActiveEngine, DEFAULT_FILL};

/// Engine cell shared between the bus adapter and the panel task.
pub type SharedEngine = Mutex<CriticalSectionRawMutex, RefCell<ActiveEngine>>;

/// Largest write transaction we accept; a register select plus the
/// CONFIG payload fits with room for forward-compatible extras.
const WRITE_BUF_LEN: usize = 16;

/// I2C slave transport adapter driving the active register engine.
pub struct I2cBusAdapter<'d, T: Instance> {
    bus: I2cSlave<'d, T>,
    engine: &'static SharedEngine,
    buttons: &'static SharedButtons,
    line: &'static Signal<CriticalSectionRawMutex, bool>,
}

impl<'d, T: Instance> I2cBusAdapter<'d, T> {
    /// Create an adapter over a configured slave peripheral.
    #[must_use]
    pub fn new(
        bus: I2cSlave<'d, T>,
        engine: &'static SharedEngine,
        buttons: &'static SharedButtons,
        line: &'static Signal<CriticalSectionRawMutex, bool>,
    ) -> Self {
        Self {
            bus,
            engine,
            buttons,
            line,
        }
    }

    /// Listen for transactions forever.
    pub async fn run(mut self) -> ! {
        let mut in_buf = [0u8; WRITE_BUF_LEN];

        loop {
            match self.bus.listen(&mut in_buf).await {
                Ok(Command::Write(len)) => self.handle_write(&in_buf[..len]),
                Ok(Command::Read) => self.handle_read().await,
                Ok(Command::WriteRead(len)) => {
                    // Repeated-start register read: select, then answer
                    self.handle_write(&in_buf[..len]);
                    self.handle_read().await;
                }
                Ok(Command::GeneralCall(len)) => {
                    trace!("ignoring general call of {} bytes", len);
                }
                Err(e) => self.log_error(e),
            }
        }
    }

    /// Apply a write transaction to the engine.
    fn handle_write(&mut self, data: &[u8]) {
        self.engine.lock(|cell| cell.borrow_mut().on_receive(data));
        self.publish_line();
    }

    /// Answer a read transaction from the current selection and button
    /// snapshot, then apply any read-to-clear side effect to the line.
    async fn handle_read(&mut self) {
        let mut response = [0u8; <ActiveEngine as RegisterEmulator>::MAX_RESPONSE];

        // Snapshot and response synthesis share one critical section so
        // the payload is atomic with respect to the panel task.
        let len = self.engine.lock(|cell| {
            let snapshot = self.buttons.load();
            cell.borrow_mut().on_request(snapshot, &mut response)
        });
        self.publish_line();

        match self.bus.respond_and_fill(&response[..len], DEFAULT_FILL).await {
            Ok(ReadStatus::Done) => {}
            Ok(ReadStatus::NeedMoreBytes) => {
                // respond_and_fill keeps feeding the fill byte; not
                // expected to surface here
                warn!("read transaction left hanging by fill");
            }
            Ok(ReadStatus::LeftoverBytes(n)) => {
                trace!("master stopped {} bytes early", n);
            }
            Err(e) => self.log_error(e),
        }
    }

    /// Push the current interrupt line level to the line task, on
    /// profiles that have one.
    fn publish_line(&self) {
        let level = self.engine.lock(|cell| engine_line_level(&cell.borrow()));
        if let Some(level) = level {
            self.line.signal(level);
        }
    }

    fn log_error(&self, e: Error) {
        warn!("i2c slave transport error: {:?}", e);
    }
}
