// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Nexa/HomeEasy 433 MHz remote-control transmitter.
//!
//! Encodes self-learning Nexa commands (device on/off, group on/off,
//! absolute dim) into the protocol's pulse train and bit-bangs it on a
//! GPIO wired to a cheap 433 MHz OOK transmitter module.
//!
//! # Layers
//!
//! - [`frame`]: 36-bit command frame and its wire encoding
//! - [`command`]: one [`Command`] per public operation
//! - [`transmitter`]: latch / data / latch waveform, sent twice with
//!   interrupts masked
//! - [`controller`]: [`NexaController`], the command surface callers use
//! - [`remote`]: one-button remote state machine used by the firmware
//!
//! The library is `no_std` and only depends on `embedded-hal` traits, so
//! the encoder and state machine run unchanged on the host under test.
//!
//! # Examples
//!
//! ```ignore
//! let transmitter = Transmitter::new(tx_pin, Some(led), Delay, Primask::new());
//! let mut nexa = NexaController::new(transmitter);
//!
//! nexa.device_on(0x12_3456, 3)?;
//! nexa.device_dim(0x12_3456, 3, 50)?;
//! nexa.group_off(0x12_3456)?;
//! ```

#![cfg_attr(not(test), no_std)]

pub mod command;
pub mod config;
pub mod controller;
pub mod error;
pub mod frame;
pub mod interrupts;
pub mod remote;
pub mod timing;
pub mod transmitter;

#[cfg(test)]
pub(crate) mod fakes;

pub use command::Command;
pub use controller::NexaController;
pub use error::Error;
pub use frame::{Action, Frame, PulseTrain};
pub use interrupts::{InterruptControl, InterruptGuard};
pub use transmitter::Transmitter;
