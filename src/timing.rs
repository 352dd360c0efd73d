// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Nexa protocol timing, in microseconds.
//!
//! Every wire bit is a constant high pulse followed by a short or long low
//! pulse. Receivers lock onto these exact widths, so none of them are
//! tunable.
//!
//! ```text
//!  Latch 1          Latch 2         data pulses ...          Latch 2      gap
//!  _                _               _    _                   _
//! | |______________| |____________| |__| |______ ... ______| |_________ ......
//! 275    9900       275   2675     275 275/1225             275   2675   10000
//! ```

/// Width of every high pulse on the line
pub const PULSE_HIGH_US: u32 = 275;

/// Short low pulse
pub const PULSE_LOW_SHORT_US: u32 = 275;

/// Long low pulse
pub const PULSE_LOW_LONG_US: u32 = 1225;

/// High part of both latches
pub const LATCH_HIGH_US: u32 = 275;

/// Low part of the frame-start latch
pub const LATCH1_LOW_US: u32 = 9900;

/// Low part of the latch that brackets the data pulses
pub const LATCH2_LOW_US: u32 = 2675;

/// Silence after each repeat
pub const INTER_REPEAT_GAP_US: u32 = 10_000;

/// Times each frame is sent per command
pub const REPEATS: usize = 2;
