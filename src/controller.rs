// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Nexa remote controller.
//!
//! [`NexaController`] is the command surface applications use. Each call
//! encodes its command into a pulse buffer owned by the controller and
//! hands that buffer to the [`Transmitter`], returning once both repeats
//! are on air.
//!
//! # Identifiers
//!
//! - `controller_id`: 26-bit id of the virtual remote. Receivers learn it
//!   during pairing, so pick one and keep using it
//! - `device_id`: 4-bit channel within that remote
//!
//! Wider values are silently truncated to their field width.
//!
//! # One Command at a Time
//!
//! Every command borrows the controller mutably for the whole transmission.
//! Two commands can never overlap on the same controller, which keeps the
//! pulse timing intact without any lock.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::command::Command;
use crate::error::Error;
use crate::frame::PulseTrain;
use crate::interrupts::InterruptControl;
use crate::transmitter::Transmitter;

/// Sends Nexa commands through a [`Transmitter`].
pub struct NexaController<TX, LED, D, I> {
    transmitter: Transmitter<TX, LED, D, I>,
    /// Reused for every command, sized for the longest (dim) frame
    pulses: PulseTrain,
}

impl<TX, LED, D, I> NexaController<TX, LED, D, I>
where
    TX: OutputPin,
    LED: OutputPin,
    D: DelayNs,
    I: InterruptControl,
{
    /// Creates a controller that sends through `transmitter`.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let mut nexa = NexaController::new(Transmitter::new(tx, Some(led), Delay, Primask::new()));
    /// ```
    pub fn new(transmitter: Transmitter<TX, LED, D, I>) -> Self {
        Self {
            transmitter,
            pulses: PulseTrain::new(),
        }
    }

    /// Switches one device on.
    pub fn device_on(&mut self, controller_id: u32, device_id: u8) -> Result<(), Error<TX::Error>> {
        self.send(Command::DeviceOn {
            controller_id,
            device_id,
        })
    }

    /// Switches one device off.
    pub fn device_off(&mut self, controller_id: u32, device_id: u8) -> Result<(), Error<TX::Error>> {
        self.send(Command::DeviceOff {
            controller_id,
            device_id,
        })
    }

    /// Dims one device to `percent` brightness (0-100).
    ///
    /// The percentage is scaled onto the receiver's 16 levels, see
    /// [`dim_level`](crate::command::dim_level).
    pub fn device_dim(
        &mut self,
        controller_id: u32,
        device_id: u8,
        percent: u8,
    ) -> Result<(), Error<TX::Error>> {
        self.send(Command::DeviceDim {
            controller_id,
            device_id,
            percent,
        })
    }

    /// Switches every device paired with `controller_id` on.
    pub fn group_on(&mut self, controller_id: u32) -> Result<(), Error<TX::Error>> {
        self.send(Command::GroupOn { controller_id })
    }

    /// Switches every device paired with `controller_id` off.
    pub fn group_off(&mut self, controller_id: u32) -> Result<(), Error<TX::Error>> {
        self.send(Command::GroupOff { controller_id })
    }

    /// Encodes and transmits `command`.
    ///
    /// Blocks for the full transmission (183ms for on/off, 197ms for dim).
    ///
    /// # Errors
    ///
    /// [`Error::Pin`] when the data pin fails; interrupts are unmasked
    /// again before this returns.
    pub fn send(&mut self, command: Command) -> Result<(), Error<TX::Error>> {
        self.pulses.encode(&command.frame());

        #[cfg(feature = "defmt")]
        defmt::debug!("nexa: sending {} ({} pulses)", command, self.pulses.len());

        let result = self.transmitter.transmit(self.pulses.as_slice());

        #[cfg(feature = "defmt")]
        {
            if result.is_err() {
                defmt::warn!("nexa: transmission of {} failed", command);
            }
        }

        result
    }

    /// Low pulses of the most recent command.
    pub fn pulses(&self) -> &PulseTrain {
        &self.pulses
    }

    /// Hands back the transmitter.
    pub fn release(self) -> Transmitter<TX, LED, D, I> {
        self.transmitter
    }
}
