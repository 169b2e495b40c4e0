//! Fan Watch Face
//! ========================================
//! needs to be run in WSL2 terminal
//! source ~/export-esp.sh
//! cargo run --release --features firmware
//! ========================================
//!
//! Draws the fan face on a GC9A01 240x240 panel and redraws whenever the
//! minute changes. The RTC is expected to carry local time.

//% CHIPS: esp32s3
//% FEATURES: esp-hal/unstable

#![no_std]
#![no_main]

// Define the application description, which is placed in a special section of the binary.
// This is used by the bootloader to verify the application.
// The macro automatically fills in the fields.
esp_bootloader_esp_idf::esp_app_desc!();

use esp_backtrace as _;

// ESP-HAL imports
use esp_hal::{delay::Delay, main, rtc_cntl::Rtc, Config};

// Embedded HAL trait for delay
use embedded_hal::delay::DelayNs;

// Embedded-graphics
use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::{DrawTarget, RgbColor, Size},
};

use esp_println::println;

use fan_watchface::display::{setup_display, HEIGHT, WIDTH};
use fan_watchface::wiring::{init_board_pins, BoardPins};
use fan_watchface::{covering_radius, render, FaceConfig, Framebuffer, WallTime};

const BACKGROUND: Rgb565 = Rgb565::WHITE;

// How often the RTC is polled for a minute change
const POLL_MS: u32 = 250;

static mut DISPLAY_BUF: [u8; 1024] = [0; 1024];
static mut FRAME: [u16; WIDTH as usize * HEIGHT as usize] = [0; WIDTH as usize * HEIGHT as usize];

#[main]
fn main() -> ! {
    esp_println::logger::init_logger(log::LevelFilter::Info);

    // Initialize peripherals
    let peripherals = esp_hal::init(Config::default());
    let BoardPins { display: display_pins, lpwr } = init_board_pins(peripherals);
    let rtc = Rtc::new(lpwr);
    let mut delay = Delay::new();

    #[allow(static_mut_refs)]
    let (mut display, _backlight) = setup_display(display_pins, unsafe { &mut DISPLAY_BUF }, &mut delay);

    // Face configuration, fans paint the whole panel including its corners
    let face = FaceConfig {
        fan_radius: covering_radius(Size::new(WIDTH as u32, HEIGHT as u32)),
        ..FaceConfig::<Rgb565>::default()
    };
    if let Err(e) = face.validate() {
        panic!("bad face config: {}", e);
    }

    #[allow(static_mut_refs)]
    let mut fb = Framebuffer::new(WIDTH, HEIGHT, unsafe { &mut FRAME }).expect("framebuffer size");

    println!("fan watchface up, fan radius {}", face.fan_radius);

    // Main loop: one redraw per minute change
    let mut drawn: Option<u16> = None;
    loop {
        let now = WallTime::from_unix((rtc.current_time_us() / 1_000_000) as u32);

        if drawn != Some(now.minute_of_day()) {
            // Both fans move every minute and the background wedge with them,
            // so each redraw repaints and flushes the whole panel.
            fb.clear(BACKGROUND).unwrap_or_else(|e| match e {});
            render(&mut fb, now, &face).unwrap_or_else(|e| match e {});

            // On failure leave `drawn` alone so the next poll redraws in full
            match fb.flush_dirty(&mut display) {
                Ok(()) => {
                    log::info!("redraw {:02}:{:02}", now.hour, now.minute);
                    drawn = Some(now.minute_of_day());
                }
                Err(e) => log::error!("panel flush failed: {:?}", e),
            }
        }

        delay.delay_ms(POLL_MS);
    }
}
