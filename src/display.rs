//! GC9A01 (240x240) bring-up over SPI2 through `mipidsi`.

use embedded_hal::delay::DelayNs;
use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
use esp_hal::{
    gpio::Output,
    spi::{
        master::{Config as SpiConfig, Spi},
        Mode,
    },
    time::Rate,
    Blocking,
};
use mipidsi::interface::SpiInterface;
use mipidsi::{
    models::GC9A01,
    options::{ColorInversion, ColorOrder, Orientation, Rotation},
    Builder as DisplayBuilder,
};

use crate::wiring::DisplayPins;

pub const WIDTH: u16 = 240;
pub const HEIGHT: u16 = 240;

pub type DisplayType<'a> = mipidsi::Display<
    SpiInterface<'a, ExclusiveDevice<Spi<'a, Blocking>, Output<'a>, NoDelay>, Output<'a>>,
    GC9A01,
    Output<'a>,
>;

/// Brings up SPI and the panel, then turns the backlight on.
///
/// The backlight pin is handed back with the display; keep it alive for as
/// long as the panel should stay lit. Panics on bring-up failure.
pub fn setup_display<'a>(
    display_pins: DisplayPins<'a>,
    display_buf: &'a mut [u8],
    delay: &mut impl DelayNs,
) -> (DisplayType<'a>, Output<'a>) {
    let DisplayPins {
        spi2,
        spi_sck,
        spi_mosi,
        lcd_cs,
        lcd_dc,
        lcd_rst,
        mut lcd_bl,
    } = display_pins;

    // SPI @ 40 MHz, Mode 0
    let spi = Spi::new(
        spi2,
        SpiConfig::default()
            .with_frequency(Rate::from_mhz(40))
            .with_mode(Mode::_0),
    )
    .expect("SPI init failed")
    .with_sck(spi_sck)
    .with_mosi(spi_mosi);

    // SPI device + DisplayInterface (needs D/C and a buffer)
    let spi_dev = ExclusiveDevice::new(spi, lcd_cs, NoDelay).expect("SPI device init failed");
    let di = SpiInterface::new(spi_dev, lcd_dc, display_buf);

    let display = DisplayBuilder::new(GC9A01, di)
        .display_size(WIDTH, HEIGHT)
        .display_offset(0, 0)
        .orientation(Orientation::new().rotate(Rotation::Deg180))
        .invert_colors(ColorInversion::Inverted)
        .color_order(ColorOrder::Bgr)
        .reset_pin(lcd_rst)
        .init(delay)
        .expect("GC9A01 init failed");
    lcd_bl.set_high();
    (display, lcd_bl)
}
