// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Hardware configuration and remote identity for the RP2350 firmware.
//!
//! # Pin Mapping Summary
//!
//! ## Radio
//! - **433 MHz transmitter DATA**: GPIO 22 (push-pull output, idle low)
//!
//! ## Inputs
//! - **Push button**: GPIO 15 (to ground, internal pull-up)
//!
//! ## Indicators
//! - **Status LED**: GPIO 25 (onboard LED, lit while a frame is on air)
//!
//! # Remote Identity
//!
//! Nexa receivers pair with whatever controller id they hear while in
//! learning mode. Put the receiver in learning mode and press the button
//! once to pair it with [`CONTROLLER_ID`] / [`DEVICE_ID`].

/// GPIO pin number for the transmitter module's DATA input
pub const TX_PIN: u8 = 22;

/// GPIO pin number for the status LED (onboard LED on RP2350)
pub const LED_PIN: u8 = 25;

/// GPIO pin number for the push button
pub const BUTTON_PIN: u8 = 15;

/// 26-bit id this remote identifies itself with
pub const CONTROLLER_ID: u32 = 0x0F2_A51C;

/// Device channel driven by short presses (0-15)
pub const DEVICE_ID: u8 = 1;

/// Brightness (percent) used for the dimmed step of the button cycle
pub const DIM_PERCENT: u8 = 40;

/// Minimum hold time in milliseconds for a long press
pub const LONG_PRESS_MS: u64 = 1000;

/// Quiet time in milliseconds after each command before the button is read again
pub const DEBOUNCE_MS: u64 = 50;

const _: () = assert!(CONTROLLER_ID < 1 << 26, "controller id must fit 26 bits");
const _: () = assert!(DEVICE_ID < 16, "device id must fit 4 bits");
const _: () = assert!(DIM_PERCENT <= 100, "dim level is a percentage");
