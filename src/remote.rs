// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Single-button remote state machine.
//!
//! Turns button presses into Nexa commands for the firmware's one-button
//! remote:
//!
//! ```text
//!   short press:   Off --> On --> Dimmed --> Off ...   (one device)
//!   long press:    GroupOn <--> GroupOff               (every device)
//! ```
//!
//! A group command also updates the tracked device state, so the next short
//! press continues from what the receiver is actually doing.

use crate::command::Command;

/// How long the button was held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Press {
    Short,
    Long,
}

impl Press {
    /// Classifies a press by its hold time.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// assert_eq!(Press::from_hold_ms(120, 1000), Press::Short);
    /// assert_eq!(Press::from_hold_ms(1500, 1000), Press::Long);
    /// ```
    pub fn from_hold_ms(held_ms: u64, long_press_ms: u64) -> Self {
        if held_ms >= long_press_ms {
            Press::Long
        } else {
            Press::Short
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum DeviceState {
    Off,
    On,
    Dimmed,
}

/// Button-driven remote for one device channel plus its group.
pub struct ButtonRemote {
    controller_id: u32,
    device_id: u8,
    dim_percent: u8,
    device: DeviceState,
    group_on: bool,
}

impl ButtonRemote {
    /// Creates a remote that assumes everything starts switched off.
    pub fn new(controller_id: u32, device_id: u8, dim_percent: u8) -> Self {
        Self {
            controller_id,
            device_id,
            dim_percent,
            device: DeviceState::Off,
            group_on: false,
        }
    }

    /// Advances the state machine and returns the command to send.
    pub fn on_press(&mut self, press: Press) -> Command {
        let controller_id = self.controller_id;
        let device_id = self.device_id;

        match press {
            Press::Short => match self.device {
                DeviceState::Off => {
                    self.device = DeviceState::On;
                    Command::DeviceOn {
                        controller_id,
                        device_id,
                    }
                }
                DeviceState::On => {
                    self.device = DeviceState::Dimmed;
                    Command::DeviceDim {
                        controller_id,
                        device_id,
                        percent: self.dim_percent,
                    }
                }
                DeviceState::Dimmed => {
                    self.device = DeviceState::Off;
                    Command::DeviceOff {
                        controller_id,
                        device_id,
                    }
                }
            },
            Press::Long => {
                self.group_on = !self.group_on;
                if self.group_on {
                    self.device = DeviceState::On;
                    Command::GroupOn { controller_id }
                } else {
                    self.device = DeviceState::Off;
                    Command::GroupOff { controller_id }
                }
            }
        }
    }
}
