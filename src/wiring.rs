// Board pin map for the ESP32-S3 devkit with a GC9A01 round panel.
//! The following wiring is assumed:
//! - LCD CS  => GPIO9
//! - LCD DC  => GPIO8
//! - LCD RST => GPIO14
//! - LCD BL  => GPIO2
//! - SPI SCK => GPIO10
//! - SPI MOSI => GPIO11
//! - 3.3V => 3.3V, GND => GND

use esp_hal::gpio::{Level, Output, OutputConfig};
use esp_hal::peripherals::{Peripherals, GPIO10, GPIO11, LPWR, SPI2};

/// Everything `display::setup_display` needs.
pub struct DisplayPins<'a> {
    pub spi2: SPI2<'a>,
    pub spi_sck: GPIO10<'a>,
    pub spi_mosi: GPIO11<'a>,
    pub lcd_cs: Output<'a>,
    pub lcd_dc: Output<'a>,
    pub lcd_rst: Output<'a>,
    pub lcd_bl: Output<'a>,
}

pub struct BoardPins<'a> {
    pub display: DisplayPins<'a>,
    /// Low-power domain, for the RTC.
    pub lpwr: LPWR<'a>,
}

pub fn init_board_pins(p: Peripherals) -> BoardPins<'static> {
    // LCD control pins, GPIO10/11 stay raw for the SPI driver
    let lcd_cs = Output::new(p.GPIO9, Level::High, OutputConfig::default());
    let lcd_dc = Output::new(p.GPIO8, Level::Low, OutputConfig::default());
    let lcd_rst = Output::new(p.GPIO14, Level::High, OutputConfig::default());
    // backlight stays off until the panel is initialised
    let lcd_bl = Output::new(p.GPIO2, Level::Low, OutputConfig::default());

    BoardPins {
        display: DisplayPins {
            spi2: p.SPI2,
            spi_sck: p.GPIO10,
            spi_mosi: p.GPIO11,
            lcd_cs,
            lcd_dc,
            lcd_rst,
            lcd_bl,
        },
        lpwr: p.LPWR,
    }
}
