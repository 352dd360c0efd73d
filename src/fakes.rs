// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Recording test doubles for the transmitter's hardware seams.
//!
//! Every fake writes into one shared [`Log`], so a test sees pin levels,
//! delays and interrupt masking interleaved in the order they happened.

use core::convert::Infallible;
use std::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, ErrorKind, ErrorType, OutputPin};

use crate::interrupts::InterruptControl;
use crate::timing::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    High,
    Low,
    StatusOn,
    StatusOff,
    DelayUs(u32),
    InterruptsOff,
    InterruptsOn,
}

#[derive(Debug, Clone, Default)]
pub struct Log(Rc<RefCell<Vec<Event>>>);

impl Log {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub fn pin(&self) -> FakePin {
        FakePin {
            log: self.clone(),
            fail_after: None,
            writes: 0,
        }
    }

    /// Data pin that errors on write number `writes` (zero based).
    pub fn failing_pin(&self, writes: usize) -> FakePin {
        FakePin {
            log: self.clone(),
            fail_after: Some(writes),
            writes: 0,
        }
    }

    pub fn status(&self) -> StatusPin {
        StatusPin { log: self.clone() }
    }

    pub fn delay(&self) -> FakeDelay {
        FakeDelay { log: self.clone() }
    }

    pub fn interrupts(&self) -> FakeInterrupts {
        FakeInterrupts {
            log: self.clone(),
            enabled: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinFault;

impl digital::Error for PinFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

pub struct FakePin {
    log: Log,
    fail_after: Option<usize>,
    writes: usize,
}

impl FakePin {
    fn write(&mut self, event: Event) -> Result<(), PinFault> {
        let n = self.writes;
        self.writes += 1;
        if self.fail_after.is_some_and(|limit| n >= limit) {
            return Err(PinFault);
        }
        self.log.push(event);
        Ok(())
    }
}

impl ErrorType for FakePin {
    type Error = PinFault;
}

impl OutputPin for FakePin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write(Event::Low)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write(Event::High)
    }
}

pub struct StatusPin {
    log: Log,
}

impl ErrorType for StatusPin {
    type Error = Infallible;
}

impl OutputPin for StatusPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.push(Event::StatusOff);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.push(Event::StatusOn);
        Ok(())
    }
}

pub struct FakeDelay {
    log: Log,
}

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.push(Event::DelayUs(ns / 1_000));
    }

    fn delay_us(&mut self, us: u32) {
        self.log.push(Event::DelayUs(us));
    }
}

pub struct FakeInterrupts {
    log: Log,
    enabled: bool,
}

impl FakeInterrupts {
    pub fn enabled(&self) -> bool {
        self.enabled
    }
}

impl InterruptControl for FakeInterrupts {
    fn disable_all(&mut self) {
        self.enabled = false;
        self.log.push(Event::InterruptsOff);
    }

    fn enable_all(&mut self) {
        self.enabled = true;
        self.log.push(Event::InterruptsOn);
    }
}

fn pulse(events: &mut Vec<Event>, high_us: u32, low_us: u32) {
    events.extend([
        Event::High,
        Event::DelayUs(high_us),
        Event::Low,
        Event::DelayUs(low_us),
    ]);
}

/// Everything a complete transmission of `lows` should produce.
pub fn waveform(lows: &[u32], with_status: bool) -> Vec<Event> {
    let mut events = vec![Event::InterruptsOff];
    for _ in 0..REPEATS {
        if with_status {
            events.push(Event::StatusOn);
        }
        pulse(&mut events, LATCH_HIGH_US, LATCH1_LOW_US);
        pulse(&mut events, LATCH_HIGH_US, LATCH2_LOW_US);
        for &low in lows {
            pulse(&mut events, PULSE_HIGH_US, low);
        }
        pulse(&mut events, LATCH_HIGH_US, LATCH2_LOW_US);
        if with_status {
            events.push(Event::StatusOff);
        }
        events.push(Event::DelayUs(INTER_REPEAT_GAP_US));
    }
    events.push(Event::InterruptsOn);
    events
}
