// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Bit-banged Nexa transmitter.
//!
//! Plays a [`PulseTrain`](crate::frame::PulseTrain) on the data pin of a
//! 433 MHz OOK transmitter module. Pin high keys the carrier, pin low
//! silences it.
//!
//! # Transmission
//!
//! ```text
//! Idle -> Latch1 -> Latch2 -> DataPulses(n) -> Latch2 -> Gap --+
//!           ^                                                  |
//!           +------------------ second repeat -----------------+ -> Idle
//! ```
//!
//! - Interrupts stay masked from the first latch until the final gap has
//!   elapsed
//! - The status LED (if any) is lit for each repeat and turned off before
//!   the gap
//! - Each repeat is a complete frame, receivers act on whichever copy
//!   arrives intact
//!
//! A full on/off command keeps the caller busy for about 183ms.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};

use crate::error::Error;
use crate::interrupts::{InterruptControl, InterruptGuard};
use crate::timing::{
    INTER_REPEAT_GAP_US, LATCH1_LOW_US, LATCH2_LOW_US, LATCH_HIGH_US, PULSE_HIGH_US, REPEATS,
};

/// Stand-in status output for transmitters without an LED.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStatus;

impl ErrorType for NoStatus {
    type Error = core::convert::Infallible;
}

impl OutputPin for NoStatus {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Nexa waveform generator.
///
/// # Hardware Requirements
///
/// - `tx`: output wired to the transmitter module's DATA input, already
///   configured as an output and driven low
/// - `status`: optional indicator LED
/// - `delay`: microsecond delay that keeps working with interrupts masked
///   (a busy-wait on a free-running timer)
/// - `interrupts`: switch for global interrupt delivery
pub struct Transmitter<TX, LED, D, I> {
    line: Line<TX, LED, D>,
    interrupts: I,
}

impl<TX, D, I> Transmitter<TX, NoStatus, D, I>
where
    TX: OutputPin,
    D: DelayNs,
    I: InterruptControl,
{
    /// Creates a transmitter with no status indicator.
    pub fn without_status(tx: TX, delay: D, interrupts: I) -> Self {
        Self::new(tx, None, delay, interrupts)
    }
}

impl<TX, LED, D, I> Transmitter<TX, LED, D, I>
where
    TX: OutputPin,
    LED: OutputPin,
    D: DelayNs,
    I: InterruptControl,
{
    /// Creates a new transmitter.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let tx = Output::new(p.PIN_22, Level::Low);
    /// let led = Output::new(p.PIN_25, Level::Low);
    /// let transmitter = Transmitter::new(tx, Some(led), Delay, Primask::new());
    /// ```
    pub fn new(tx: TX, status: Option<LED>, delay: D, interrupts: I) -> Self {
        Self {
            line: Line { tx, status, delay },
            interrupts,
        }
    }

    /// Sends one frame's low pulses, twice, with interrupts masked.
    ///
    /// Blocks until the trailing gap of the second repeat has elapsed.
    /// Interrupts are unmasked again before returning, including when the
    /// data pin fails.
    ///
    /// # Errors
    ///
    /// [`Error::Pin`] if the data pin rejects a level change. The rest of
    /// the transmission is abandoned.
    pub fn transmit(&mut self, lows: &[u32]) -> Result<(), Error<TX::Error>> {
        let _masked = InterruptGuard::acquire(&mut self.interrupts);
        for _ in 0..REPEATS {
            self.line.repeat(lows)?;
        }
        Ok(())
    }

    /// Hands back the peripherals.
    pub fn release(self) -> (TX, Option<LED>, D, I) {
        let Line { tx, status, delay } = self.line;
        (tx, status, delay, self.interrupts)
    }
}

struct Line<TX, LED, D> {
    tx: TX,
    status: Option<LED>,
    delay: D,
}

impl<TX, LED, D> Line<TX, LED, D>
where
    TX: OutputPin,
    LED: OutputPin,
    D: DelayNs,
{
    fn repeat(&mut self, lows: &[u32]) -> Result<(), TX::Error> {
        self.set_status(true);
        let sent = self.frame(lows);
        self.set_status(false);
        if sent.is_err() {
            // Don't leave the carrier keyed
            self.tx.set_low().ok();
            return sent;
        }
        self.delay.delay_us(INTER_REPEAT_GAP_US);
        Ok(())
    }

    fn frame(&mut self, lows: &[u32]) -> Result<(), TX::Error> {
        self.pulse(LATCH_HIGH_US, LATCH1_LOW_US)?;
        self.pulse(LATCH_HIGH_US, LATCH2_LOW_US)?;
        for &low in lows {
            self.pulse(PULSE_HIGH_US, low)?;
        }
        self.pulse(LATCH_HIGH_US, LATCH2_LOW_US)
    }

    #[inline(always)]
    fn pulse(&mut self, high_us: u32, low_us: u32) -> Result<(), TX::Error> {
        self.tx.set_high()?;
        self.delay.delay_us(high_us);
        self.tx.set_low()?;
        self.delay.delay_us(low_us);
        Ok(())
    }

    fn set_status(&mut self, on: bool) {
        if let Some(led) = self.status.as_mut() {
            if on {
                led.set_high().ok();
            } else {
                led.set_low().ok();
            }
        }
    }
}
