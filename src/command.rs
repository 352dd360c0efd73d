// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Nexa commands.
//!
//! One variant per operation a Nexa remote can send. Each command knows how
//! to turn itself into a [`Frame`]; nothing here touches hardware.
//!
//! # Dim Levels
//!
//! Callers pass a brightness percentage (0-100). The receiver only knows 16
//! levels, so the percentage is clamped to 100 and scaled with
//! `percent * 15 / 100`:
//!
//! ```text
//!   percent:   0   10   25   50   75   99  100
//!   level:     0    1    3    7   11   14   15
//! ```

use crate::frame::{Action, Frame, MAX_DIM_LEVEL};

/// Upper bound of the dim percentage accepted by [`Command::DeviceDim`]
pub const MAX_DIM_PERCENT: u8 = 100;

/// A Nexa remote command.
///
/// Identifiers wider than their protocol field are truncated when the frame
/// is built (26 bits for `controller_id`, 4 bits for `device_id`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Switch one device on
    DeviceOn { controller_id: u32, device_id: u8 },
    /// Switch one device off
    DeviceOff { controller_id: u32, device_id: u8 },
    /// Dim one device to an absolute brightness percentage (0-100)
    DeviceDim {
        controller_id: u32,
        device_id: u8,
        percent: u8,
    },
    /// Switch every device paired with the controller on
    GroupOn { controller_id: u32 },
    /// Switch every device paired with the controller off
    GroupOff { controller_id: u32 },
}

impl Command {
    /// Builds the frame for this command.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let frame = Command::GroupOff { controller_id: 0 }.frame();
    /// assert!(frame.is_group());
    /// assert_eq!(frame.on_flag(), Some(false));
    /// ```
    pub fn frame(&self) -> Frame {
        match *self {
            Command::DeviceOn {
                controller_id,
                device_id,
            } => Frame::device(controller_id, device_id, Action::On),
            Command::DeviceOff {
                controller_id,
                device_id,
            } => Frame::device(controller_id, device_id, Action::Off),
            Command::DeviceDim {
                controller_id,
                device_id,
                percent,
            } => Frame::device(controller_id, device_id, Action::Dim(dim_level(percent))),
            Command::GroupOn { controller_id } => Frame::group(controller_id, true),
            Command::GroupOff { controller_id } => Frame::group(controller_id, false),
        }
    }

    pub fn controller_id(&self) -> u32 {
        match *self {
            Command::DeviceOn { controller_id, .. }
            | Command::DeviceOff { controller_id, .. }
            | Command::DeviceDim { controller_id, .. }
            | Command::GroupOn { controller_id }
            | Command::GroupOff { controller_id } => controller_id,
        }
    }
}

/// Maps a brightness percentage onto the protocol's 0-15 dim range.
///
/// Values above 100 are treated as 100.
pub fn dim_level(percent: u8) -> u8 {
    let percent = u16::from(percent.min(MAX_DIM_PERCENT));
    (percent * u16::from(MAX_DIM_LEVEL) / u16::from(MAX_DIM_PERCENT)) as u8
}
