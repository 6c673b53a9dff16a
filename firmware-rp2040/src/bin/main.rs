#![no_std]
#![no_main]

use core::cell::RefCell;

use defmt::{info, unwrap};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::i2c;
use embassy_rp::i2c_slave::{self, I2cSlave};
use embassy_rp::peripherals::I2C1;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use embassy_sync::signal::Signal;
use embassy_time::Timer;
use panel_to_i2c_rp2040::{
    engine_line_level, ActiveEngine, ButtonEventSink, ButtonKind, I2cBusAdapter, Panel,
    SharedButtons, SharedEngine, TouchInput, BUS_ADDRESS, NUM_BUTTONS,
};

#[cfg(feature = "profile-frontpanel")]
use embassy_rp::gpio::{Level, Output};

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

bind_interrupts!(struct Irqs {
    I2C1_IRQ => i2c::InterruptHandler<I2C1>;
});

/// Which buttons latch (toggle) and which are momentary, in panel
/// layout order (6 rows of 3).
const BUTTON_KINDS: [ButtonKind; NUM_BUTTONS] = {
    use ButtonKind::{Momentary, Toggle};
    [
        Toggle, Momentary, Toggle,
        Momentary, Toggle, Momentary,
        Toggle, Momentary, Toggle,
        Momentary, Toggle, Momentary,
        Toggle, Momentary, Toggle,
        Momentary, Toggle, Momentary,
    ]
};

/// Depth of the touch report queue from the GUI layer.
const TOUCH_QUEUE_LEN: usize = 8;

/// Button snapshot shared with the bus callback context.
static BUTTONS: SharedButtons = SharedButtons::new();

/// Register engine shared between the bus task and the panel task.
static ENGINE: SharedEngine = Mutex::new(RefCell::new(ActiveEngine::new()));

/// Interrupt line level handoff; "latest value wins" is what a physical
/// pin wants.
static LINE_LEVEL: Signal<CriticalSectionRawMutex, bool> = Signal::new();

/// Touch press/release reports from the GUI layer.
static TOUCH_INPUTS: Channel<CriticalSectionRawMutex, TouchInput, TOUCH_QUEUE_LEN> = Channel::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("panel-to-i2c starting, bus address 0x{:02x}...", BUS_ADDRESS);

    let p = embassy_rp::init(embassy_rp::config::Config::default());

    // Let the display/touch rail settle before answering the master
    Timer::after_millis(100).await;

    // --- I2C slave setup ---
    let mut config = i2c_slave::Config::default();
    config.addr = BUS_ADDRESS as u16;
    let bus = I2cSlave::new(p.I2C1, p.PIN_27, p.PIN_26, Irqs, config);
    let adapter = I2cBusAdapter::new(bus, &ENGINE, &BUTTONS, &LINE_LEVEL);

    // --- Interrupt line (front-panel profile) ---
    #[cfg(feature = "profile-frontpanel")]
    {
        let idle = ENGINE.lock(|cell| cell.borrow().line_level());
        let pin = Output::new(p.PIN_22, Level::from(idle));
        unwrap!(spawner.spawn(line_task(pin)));
    }

    unwrap!(spawner.spawn(bus_task(adapter)));
    unwrap!(spawner.spawn(panel_task(TOUCH_INPUTS.receiver())));
    unwrap!(spawner.spawn(gui_task(TOUCH_INPUTS.sender())));

    info!("panel-to-i2c initialized, {} buttons", NUM_BUTTONS);
}

/// Bus task - answers I2C slave transactions forever.
#[embassy_executor::task]
async fn bus_task(adapter: I2cBusAdapter<'static, I2C1>) {
    adapter.run().await
}

/// Panel task - turns raw touch reports into button transitions, keeps
/// the shared snapshot current, and feeds the engine's event path.
#[embassy_executor::task]
async fn panel_task(
    inputs: Receiver<'static, CriticalSectionRawMutex, TouchInput, TOUCH_QUEUE_LEN>,
) {
    let mut panel = Panel::new(BUTTON_KINDS);

    loop {
        let input = inputs.receive().await;
        let event = if input.pressed {
            panel.press(input.index)
        } else {
            panel.release(input.index)
        };

        // Publish the snapshot before the event so a read triggered by
        // the interrupt line never sees the pre-transition state
        BUTTONS.store(panel.states());

        if let Some(event) = event {
            info!("button {} -> {}", event.index, event.active);
            let level = ENGINE.lock(|cell| {
                let mut engine = cell.borrow_mut();
                engine.on_button_event(event);
                engine_line_level(&engine)
            });
            if let Some(level) = level {
                LINE_LEVEL.signal(level);
            }
        }
    }
}

/// Line task - drives the physical interrupt pin to the latest level.
#[cfg(feature = "profile-frontpanel")]
#[embassy_executor::task]
async fn line_task(mut pin: Output<'static>) {
    loop {
        let level = LINE_LEVEL.wait().await;
        pin.set_level(Level::from(level));
    }
}

/// GUI task - placeholder for the display/touch collaborator.
///
/// Screen layout, widget rendering, and touch decoding live outside
/// this firmware's core; whatever implements them owns this sender and
/// reports one [`TouchInput`] per press and release. Until that layer
/// is wired in, no reports are produced.
#[embassy_executor::task]
async fn gui_task(
    _inputs: Sender<'static, CriticalSectionRawMutex, TouchInput, TOUCH_QUEUE_LEN>,
) {
    core::future::pending::<()>().await
}
