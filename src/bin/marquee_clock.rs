//! Scrolling clock/temperature marquee on a P10 LED panel.
//!
//! Runs on a Raspberry Pi Pico RP2040 with a DS3231 RTC module on I2C0 and a
//! HUB12 P10 panel chain on SPI0. Startup claims the hardware, checks the
//! RTC is present, sets it to the firmware build time, and spawns the
//! refresh and sampler tasks; the main task then runs the renderer forever.
//! Any initialization failure panics, which halts the core.
#![no_std]
#![no_main]
#![allow(clippy::future_not_send, reason = "single-threaded")]

use chrono::DateTime;
use defmt_rtt as _;
use ds323x::NaiveDateTime;
use embassy_executor::Spawner;
use marquee_clock::{
    Hardware, Never, Panel, PanelNotifier, ReadingNotifier, Result, Rtc, Sampler, renderer,
};
use panic_probe as _;

#[embassy_executor::main]
pub async fn main(spawner: Spawner) -> ! {
    // If it returns, something went wrong.
    let err = inner_main(spawner).await.unwrap_err();
    core::panic!("{err}");
}

async fn inner_main(spawner: Spawner) -> Result<Never> {
    let hardware = Hardware::default();

    let mut rtc = Rtc::new(hardware.rtc_i2c)?;
    rtc.set_datetime(&build_time())?;

    static PANEL_NOTIFIER: PanelNotifier = Panel::notifier();
    let panel = Panel::new(
        hardware.panel_spi,
        hardware.panel_pins,
        &PANEL_NOTIFIER,
        spawner,
    )?;

    static READINGS: ReadingNotifier = Sampler::notifier();
    let sampler = Sampler::new(rtc, &READINGS, spawner)?;

    renderer::run(&sampler, &panel).await
}

/// The firmware build instant, captured by `build.rs`.
///
/// Falls back to the Unix epoch if the embedded value is unparsable.
fn build_time() -> NaiveDateTime {
    let unix_seconds: i64 = env!("BUILD_UNIX_SECONDS").parse().unwrap_or(0);
    DateTime::from_timestamp(unix_seconds, 0)
        .map(|datetime| datetime.naive_utc())
        .unwrap_or_default()
}
