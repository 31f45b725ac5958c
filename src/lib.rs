//! P10 LED-matrix marquee clock.
//!
//! Three units of work cooperate: a clock sampler polls a DS3231 every
//! 100 ms and publishes readings into a single-slot latest-wins channel, the
//! marquee renderer formats each reading and scrolls it across the panel,
//! and an independent refresh driver re-transmits the pixel buffer to the
//! hardware every millisecond.
//!
//! The pure pieces (readings, frames, the marquee state machine) build for
//! any target and are tested on the host; everything that touches the RP2040
//! sits behind the `pico1` feature.
#![no_std]

mod error;
mod frame;
#[cfg(feature = "pico1")]
mod hardware;
mod marquee;
mod never;
#[cfg(feature = "pico1")]
mod panel;
mod reading;
#[cfg(feature = "pico1")]
pub mod renderer;
#[cfg(feature = "pico1")]
mod rtc;
#[cfg(feature = "pico1")]
mod sampler;
pub mod shared_constants;

// Re-export commonly used items
pub use error::{Error, Result};
pub use frame::PanelFrame;
#[cfg(feature = "pico1")]
pub use hardware::{Hardware, PanelPins, PanelSpi, RtcI2c};
pub use marquee::{Marquee, PanelFont};
pub use never::Never;
#[cfg(feature = "pico1")]
pub use panel::{Panel, PanelNotifier};
pub use reading::{Message, Reading, ReadingNotifier};
#[cfg(feature = "pico1")]
pub use rtc::Rtc;
#[cfg(feature = "pico1")]
pub use sampler::Sampler;
