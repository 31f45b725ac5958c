//! The value snapshot moved from the clock sampler to the marquee renderer.

use core::fmt::Write as _;

use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, signal::Signal};
use heapless::String;

use crate::Result;
use crate::shared_constants::{BANNER, MESSAGE_CAPACITY};

/// One point-in-time snapshot of the RTC's calendar time and temperature.
///
/// Plain value type: created fresh each sampling cycle, copied by value
/// through the [`ReadingNotifier`], and discarded after one render cycle.
#[derive(Clone, Copy, Debug, PartialEq, defmt::Format)]
pub struct Reading {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub day: u8,
    pub month: u8,
    pub year: u16,
    /// Degrees Celsius, quarter-degree resolution on the DS3231.
    pub temperature: f32,
}

/// Formatted display message.
pub type Message = String<MESSAGE_CAPACITY>;

/// The single-slot "latest value wins" channel between sampler and renderer.
///
/// `signal` overwrites any unread value without blocking; `wait` blocks until
/// a value is present and consumes it. Capacity is exactly one, so a slow
/// consumer skips readings rather than queueing them.
pub type ReadingNotifier = Signal<CriticalSectionRawMutex, Reading>;

impl Reading {
    /// Render this reading into the fixed display template.
    ///
    /// Pure formatting step. The buffer is sized for the worst-case template
    /// expansion, so `Error::Format` indicates a construction-time sizing
    /// defect rather than a runtime condition.
    ///
    /// # Errors
    ///
    /// Returns `Error::Format` if the message exceeds [`MESSAGE_CAPACITY`].
    pub fn message(&self) -> Result<Message> {
        let mut message = Message::new();
        write!(
            message,
            "{BANNER}  Time: {:02}:{:02}:{:02}  Date: {:02}/{:02}/{:04}  Temp: {:.2}C",
            self.hour, self.minute, self.second, self.day, self.month, self.year, self.temperature
        )?;
        Ok(message)
    }
}
