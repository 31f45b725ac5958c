use derive_more::derive::{Display, Error};

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Define a unified error type for this crate.
#[expect(missing_docs, reason = "The variants are self-explanatory.")]
#[derive(Debug, Display, Error)]
pub enum Error {
    // `#[error(not(source))]` below tells `derive_more` that the wrapped
    // foreign types do not implement Rust's `core::error::Error` trait.
    #[cfg(feature = "pico1")]
    #[display("{_0:?}")]
    TaskSpawn(#[error(not(source))] embassy_executor::SpawnError),

    #[cfg(feature = "pico1")]
    #[display("RTC access failed: {_0:?}")]
    Rtc(#[error(not(source))] ds323x::Error<embassy_rp::i2c::Error>),

    #[cfg(feature = "pico1")]
    #[display("Panel SPI transfer failed: {_0:?}")]
    PanelSpi(#[error(not(source))] embassy_rp::spi::Error),

    #[display("Format error")]
    Format,
}

impl From<core::fmt::Error> for Error {
    fn from(_: core::fmt::Error) -> Self {
        Self::Format
    }
}

#[cfg(feature = "pico1")]
impl From<embassy_executor::SpawnError> for Error {
    fn from(err: embassy_executor::SpawnError) -> Self {
        Self::TaskSpawn(err)
    }
}

#[cfg(feature = "pico1")]
impl From<ds323x::Error<embassy_rp::i2c::Error>> for Error {
    fn from(err: ds323x::Error<embassy_rp::i2c::Error>) -> Self {
        Self::Rtc(err)
    }
}

#[cfg(feature = "pico1")]
impl From<embassy_rp::spi::Error> for Error {
    fn from(err: embassy_rp::spi::Error) -> Self {
        Self::PanelSpi(err)
    }
}
