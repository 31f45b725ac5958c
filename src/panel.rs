//! A device abstraction for the P10 panel chain and its refresh driver.

use defmt::info;
use embassy_executor::{SpawnError, Spawner};
use embassy_futures::select::{Either, select};
use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, signal::Signal};
use embassy_time::Timer;

use crate::error::Result;
use crate::frame::PanelFrame;
use crate::hardware::{PanelPins, PanelSpi};
use crate::never::Never;
use crate::shared_constants::{FRAME_ROWS, REFRESH_PERIOD, SCAN_PHASES};

/// Handle for publishing frames to the panel.
///
/// The spawned device loop owns the SPI bus and control pins outright and is
/// the only code that touches the hardware; writers hand it complete frames
/// by value. It re-drives one 1/4-scan phase every [`REFRESH_PERIOD`]
/// regardless of whether the content changed, so a stalled writer leaves the
/// last frame visible rather than a dark or torn panel.
pub struct Panel<'a>(&'a PanelNotifier);

/// Notifier carrying complete frames to the refresh loop, latest frame wins.
pub type PanelNotifier = Signal<CriticalSectionRawMutex, PanelFrame>;

impl Panel<'_> {
    /// Creates a new `Panel`, which entails starting the refresh task.
    ///
    /// The panel starts blank.
    ///
    /// # Errors
    ///
    /// Returns a `SpawnError` if the task cannot be spawned.
    #[must_use = "Must be used to manage the spawned task"]
    pub fn new(
        spi: PanelSpi,
        pins: PanelPins,
        notifier: &'static PanelNotifier,
        spawner: Spawner,
    ) -> Result<Self, SpawnError> {
        let panel = Self(notifier);
        spawner.spawn(device_loop(spi, pins, notifier))?;
        Ok(panel)
    }

    /// Creates the static notifier the refresh loop listens on.
    #[must_use]
    pub const fn notifier() -> PanelNotifier {
        Signal::new()
    }

    /// Replace the displayed frame. Never blocks; an unconsumed previous
    /// frame is simply superseded.
    pub fn write_frame(&self, frame: PanelFrame) {
        self.0.signal(frame);
    }
}

#[embassy_executor::task]
async fn device_loop(spi: PanelSpi, pins: PanelPins, notifier: &'static PanelNotifier) -> ! {
    // Should never return.
    let err = inner_device_loop(spi, pins, notifier).await.unwrap_err();
    core::panic!("{err}");
}

async fn inner_device_loop(
    mut spi: PanelSpi,
    mut pins: PanelPins,
    notifier: &'static PanelNotifier,
) -> Result<Never> {
    info!(
        "Panel refresh started (period: {} us)",
        REFRESH_PERIOD.as_micros()
    );
    let mut frame = PanelFrame::new();
    let mut phase = 0;
    loop {
        push_scan_phase(&mut spi, &mut pins, &frame, phase)?;
        #[expect(
            clippy::arithmetic_side_effects,
            reason = "phase stays in 0..SCAN_PHASES"
        )]
        {
            phase = (phase + 1) % SCAN_PHASES;
        }
        if let Either::Second(new_frame) =
            select(Timer::after(REFRESH_PERIOD), notifier.wait()).await
        {
            frame = new_frame;
        }
    }
}

/// Shift out one 1/4-scan phase and latch it.
///
/// Only reads the frame; all hardware mutation stays inside this driver.
fn push_scan_phase(
    spi: &mut PanelSpi,
    pins: &mut PanelPins,
    frame: &PanelFrame,
    phase: usize,
) -> Result<()> {
    // Rows phase, phase+4, phase+8, ... share a latch phase. The shift
    // registers want the bottom group first, and the panel is active low.
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "row index is bounded by FRAME_ROWS"
    )]
    for group in (0..FRAME_ROWS / SCAN_PHASES).rev() {
        let row = group * SCAN_PHASES + phase;
        let bytes = frame.row_bytes(row).map(|byte| !byte);
        spi.blocking_write(&bytes)?;
    }

    // Blank while latching to avoid ghosting, then select the row group.
    pins.oe.set_high();
    pins.latch.set_high();
    pins.latch.set_low();
    pins.a.set_level(((phase & 0b01) != 0).into());
    pins.b.set_level(((phase & 0b10) != 0).into());
    pins.oe.set_low();
    Ok(())
}
