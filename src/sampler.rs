//! A device abstraction that samples the RTC and publishes readings.

use defmt::{info, warn};
use embassy_executor::{SpawnError, Spawner};
use embassy_sync::signal::Signal;
use embassy_time::Timer;

use crate::error::Result;
use crate::reading::{Reading, ReadingNotifier};
use crate::rtc::Rtc;
use crate::shared_constants::SAMPLE_PERIOD;

/// Periodic clock sampler.
///
/// Every [`SAMPLE_PERIOD`] it snapshots the DS3231 and publishes the result
/// into the single-slot [`ReadingNotifier`] with an overwrite-write, so the
/// sampler never waits on the consumer and the slot never grows.
pub struct Sampler<'a>(&'a ReadingNotifier);

impl Sampler<'_> {
    /// Creates a new `Sampler` and spawns its sampling task.
    ///
    /// # Errors
    ///
    /// Returns a `SpawnError` if the task cannot be spawned.
    #[must_use = "Must be used to manage the spawned task"]
    pub fn new(
        rtc: Rtc,
        notifier: &'static ReadingNotifier,
        spawner: Spawner,
    ) -> Result<Self, SpawnError> {
        spawner.spawn(device_loop(rtc, notifier))?;
        Ok(Self(notifier))
    }

    /// Creates the static notifier the sampler publishes into.
    #[must_use]
    pub const fn notifier() -> ReadingNotifier {
        Signal::new()
    }

    /// Wait for and consume the next published reading.
    ///
    /// Blocks until the sampler publishes; a reading superseded before this
    /// call returns is never observed.
    pub async fn wait(&self) -> Reading {
        self.0.wait().await
    }
}

#[embassy_executor::task]
async fn device_loop(mut rtc: Rtc, notifier: &'static ReadingNotifier) -> ! {
    info!("Clock sampler started (period: {} ms)", SAMPLE_PERIOD.as_millis());
    loop {
        match rtc.read() {
            Ok(reading) => notifier.signal(reading),
            // Steady-state read failures are logged and the cycle skipped.
            Err(err) => warn!("RTC read failed: {}", defmt::Debug2Format(&err)),
        }
        // The full period elapses after each read, so an overrun delays the
        // next cycle rather than producing a catch-up burst.
        Timer::after(SAMPLE_PERIOD).await;
    }
}
