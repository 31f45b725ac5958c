//! Owned handle for the DS3231 real-time clock.

use chrono::{Datelike, Timelike};
use defmt::info;
use ds323x::{DateTimeAccess, Ds323x, NaiveDateTime, ic::DS3231, interface::I2cInterface};

use crate::Result;
use crate::hardware::RtcI2c;
use crate::reading::Reading;

/// The DS3231 on the blocking I2C bus.
pub struct Rtc {
    driver: Ds323x<I2cInterface<RtcI2c>, DS3231>,
}

impl Rtc {
    /// Claim the DS3231 and verify it responds.
    ///
    /// The initial register read doubles as the presence check; a missing or
    /// unresponsive module is a fatal startup error.
    ///
    /// # Errors
    ///
    /// Returns `Error::Rtc` if the DS3231 does not answer on the bus.
    pub fn new(i2c: RtcI2c) -> Result<Self> {
        let mut rtc = Self {
            driver: Ds323x::new_ds3231(i2c),
        };
        let now = rtc.driver.datetime()?;
        info!("DS3231 found, reporting {}", defmt::Debug2Format(&now));
        Ok(rtc)
    }

    /// Set the calendar time, e.g. to the firmware build instant.
    ///
    /// # Errors
    ///
    /// Returns `Error::Rtc` if the bus write fails.
    pub fn set_datetime(&mut self, datetime: &NaiveDateTime) -> Result<()> {
        self.driver.set_datetime(datetime)?;
        Ok(())
    }

    /// Snapshot calendar time and temperature as one [`Reading`].
    ///
    /// Values are forwarded as the peripheral reports them, without range
    /// validation.
    ///
    /// # Errors
    ///
    /// Returns `Error::Rtc` if either bus read fails.
    pub fn read(&mut self) -> Result<Reading> {
        let now = self.driver.datetime()?;
        let temperature = self.driver.temperature()?;
        Ok(Reading {
            hour: now.hour() as u8,
            minute: now.minute() as u8,
            second: now.second() as u8,
            day: now.day() as u8,
            month: now.month() as u8,
            year: now.year() as u16,
            temperature,
        })
    }
}
