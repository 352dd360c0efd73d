// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! RP2350 One-Button Nexa Remote
//!
//! This firmware turns a Raspberry Pi Pico 2 and a cheap 433 MHz OOK
//! transmitter module into a Nexa/HomeEasy self-learning remote.
//!
//! # Hardware Configuration
//! - **Microcontroller**: RP2350A (ARM Cortex-M33)
//! - **433 MHz transmitter**: DATA on GPIO 22, VCC 3V3 or 5V, GND
//! - **Push button**: GPIO 15 to ground (internal pull-up)
//! - **Status LED**: GPIO 25
//!
//! # Button Commands
//! - **Short press**: cycle the device Off -> On -> Dimmed -> Off
//! - **Long press** (1s): toggle every device of this remote (group on/off)
//!
//! # Build
//! ```bash
//! cargo build --release --features rp2350 --target thumbv8m.main-none-eabihf
//! ```
//!
//! # Flash
//! ```bash
//! cargo run --release --features rp2350 --target thumbv8m.main-none-eabihf
//! ```

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_time::{Delay, Instant, Timer};
use nexa_rf::config::{
    BUTTON_PIN, CONTROLLER_ID, DEBOUNCE_MS, DEVICE_ID, DIM_PERCENT, LED_PIN, LONG_PRESS_MS, TX_PIN,
};
use nexa_rf::interrupts::Primask;
use nexa_rf::remote::{ButtonRemote, Press};
use nexa_rf::{NexaController, Transmitter};
use {defmt_rtt as _, panic_probe as _};

/// Program metadata for picotool info command
///
/// This information is embedded in the binary and can be read by picotool
/// to display program information when querying the firmware.
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"Nexa Remote"),
    embassy_rp::binary_info::rp_program_description!(c"RP2350A 433 MHz Nexa/HomeEasy Remote"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

/// Main remote task
///
/// Waits for button presses, maps each one to a Nexa command and transmits
/// it. Transmission blocks the executor for up to ~200ms with interrupts masked,
/// which is fine since this is the only task.
///
/// # Initialization Sequence
/// 1. Configure the transmitter data line (idle low) and the status LED
/// 2. Configure the button input with pull-up
/// 3. Enter the press -> command -> transmit loop
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("RP2350A Nexa Remote Starting!");
    let p = embassy_rp::init(Default::default());

    // Keep in sync with TX_PIN, LED_PIN and BUTTON_PIN in config.rs
    let tx = Output::new(p.PIN_22, Level::Low); // TX_PIN
    let led = Output::new(p.PIN_25, Level::Low); // LED_PIN
    let mut button = Input::new(p.PIN_15, Pull::Up); // BUTTON_PIN

    let transmitter = Transmitter::new(tx, Some(led), Delay, Primask::new());
    let mut nexa = NexaController::new(transmitter);
    let mut remote = ButtonRemote::new(CONTROLLER_ID, DEVICE_ID, DIM_PERCENT);

    info!(
        "TX on GPIO {}, LED on GPIO {}, button on GPIO {}",
        TX_PIN, LED_PIN, BUTTON_PIN
    );
    info!(
        "Remote ready as controller {:#x}, device {}",
        CONTROLLER_ID, DEVICE_ID
    );

    loop {
        button.wait_for_falling_edge().await;
        let pressed_at = Instant::now();
        button.wait_for_rising_edge().await;

        let press = Press::from_hold_ms(pressed_at.elapsed().as_millis(), LONG_PRESS_MS);
        let command = remote.on_press(press);
        info!("{} press -> {}", press, command);

        match nexa.send(command) {
            Ok(()) => info!("Sent"),
            Err(_) => warn!("Transmission failed"),
        }

        Timer::after_millis(DEBOUNCE_MS).await;
    }
}
