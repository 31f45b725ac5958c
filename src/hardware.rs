use embassy_rp::{
    gpio::{self, Level},
    i2c,
    peripherals::{I2C0, SPI0},
    spi,
};

/// SPI channel carrying pixel data to the panel chain.
pub type PanelSpi = spi::Spi<'static, SPI0, spi::Blocking>;
/// I2C bus shared with the DS3231.
pub type RtcI2c = i2c::I2c<'static, I2C0, i2c::Blocking>;

/// Control lines of the HUB12 connector besides the SPI pair.
pub struct PanelPins {
    /// Latch (SCLK on the HUB12 header): transfers shifted bits to the row drivers.
    pub latch: gpio::Output<'static>,
    /// Row-select bit A.
    pub a: gpio::Output<'static>,
    /// Row-select bit B.
    pub b: gpio::Output<'static>,
    /// Output enable, active low.
    pub oe: gpio::Output<'static>,
}

/// Owned handles for every peripheral the firmware touches, claimed once at
/// startup and passed into the device abstractions.
pub struct Hardware {
    pub panel_spi: PanelSpi,
    pub panel_pins: PanelPins,
    pub rtc_i2c: RtcI2c,
}

impl Default for Hardware {
    fn default() -> Self {
        let peripherals: embassy_rp::Peripherals =
            embassy_rp::init(embassy_rp::config::Config::default());

        let mut spi_config = spi::Config::default();
        spi_config.frequency = 4_000_000;
        let panel_spi = spi::Spi::new_blocking_txonly(
            peripherals.SPI0,
            peripherals.PIN_18,
            peripherals.PIN_19,
            spi_config,
        );

        let panel_pins = PanelPins {
            latch: gpio::Output::new(peripherals.PIN_12, Level::Low),
            a: gpio::Output::new(peripherals.PIN_10, Level::Low),
            b: gpio::Output::new(peripherals.PIN_11, Level::Low),
            // Active low: start with the panel blanked.
            oe: gpio::Output::new(peripherals.PIN_13, Level::High),
        };

        let rtc_i2c = i2c::I2c::new_blocking(
            peripherals.I2C0,
            peripherals.PIN_5,
            peripherals.PIN_4,
            i2c::Config::default(),
        );

        Self {
            panel_spi,
            panel_pins,
            rtc_i2c,
        }
    }
}
