//! Simple decoder example
//!
//! Demonstrates basic usage of the quadrature-decoder crate on the Raspberry
//! Pi Pico 2. Samples an incremental encoder's A/B outputs at 100 kHz and
//! logs the output frame via defmt whenever it changes.
//!
//! # Wiring
//!
//! | Signal  | Pico 2 Pin | Notes                              |
//! |---------|------------|------------------------------------|
//! | ENC A   | GP2        | Pull-up enabled                    |
//! | ENC B   | GP3        | Pull-up enabled                    |
//! | RST_N   | GP4        | Active-low, pull-up (released)     |
//! | ENA     | GP5        | Active-high, pull-up (enabled)     |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp as hal;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Input, Pull};
use {defmt_rtt as _, panic_probe as _};

use quadrature_decoder::{DecoderConfig, PinDecoder};

/// Tell the Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = hal::block::ImageDef::secure_exe();

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    // --- Decoder inputs ---
    let a = Input::new(p.PIN_2, Pull::Up);
    let b = Input::new(p.PIN_3, Pull::Up);
    let rst_n = Input::new(p.PIN_4, Pull::Up);
    let ena = Input::new(p.PIN_5, Pull::Up);

    // --- Decoder (100 kHz sampling, 8-cycle settle) ---
    let mut decoder = PinDecoder::with_config(a, b, rst_n, ena, DecoderConfig::default());

    let frame = decoder.reset();
    info!("Decoder reset: primary={=u8:#x}, secondary={=u8:#x}", frame.primary, frame.secondary);

    info!("Decoder example started, rotate the encoder to see position changes");

    // Main loop: run one settle window, log if the count or direction moved.
    let mut last = frame;
    loop {
        match decoder.settle().await {
            Ok(frame) if frame != last => {
                info!(
                    "Count: {}, direction: {}",
                    frame.count().value(),
                    frame.direction(),
                );
                last = frame;
            }
            Ok(_) => {}
            Err(e) => error!("Sample failed: {}", e),
        }
    }
}
