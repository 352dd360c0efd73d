// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Nexa command frame and its wire encoding.
//!
//! A command is a 32-bit frame, or 36 bits when it carries an absolute dim
//! level. Fields are packed back to back, each one most significant bit
//! first:
//!
//! ```text
//!  bit  0                         25  26  27  28  31  32  35
//!      [ controller id (26 bits)   ][ G][ O][ device ][ dim  ]
//!                                                     dim only
//! ```
//!
//! # Line Code
//!
//! Each logical bit becomes two wire bits. Every wire bit is a 275µs high
//! pulse followed by a low pulse, and only the low pulse carries
//! information:
//!
//! - **Logical '0'**: low pulses (275µs, 1225µs)
//! - **Logical '1'**: low pulses (1225µs, 275µs)
//! - **Dim marker**: low pulses (275µs, 275µs) in the on/off slot
//!
//! [`PulseTrain`] stores only these low pulse widths. The constant high
//! pulses and the latches are added by the transmitter.

use heapless::Vec;

use crate::timing::{PULSE_LOW_LONG_US, PULSE_LOW_SHORT_US};

/// Bit offset of the controller id
pub const CONTROLLER_ID_OFFSET: usize = 0;
/// Width of the controller id field
pub const CONTROLLER_ID_BITS: usize = 26;
/// Bit offset of the group flag
pub const GROUP_FLAG_OFFSET: usize = 26;
/// Bit offset of the on/off flag (dim marker slot on dim commands)
pub const ON_FLAG_OFFSET: usize = 27;
/// Bit offset of the device id
pub const DEVICE_ID_OFFSET: usize = 28;
/// Width of the device id field
pub const DEVICE_ID_BITS: usize = 4;
/// Bit offset of the dim level
pub const DIM_OFFSET: usize = 32;
/// Width of the dim level field
pub const DIM_BITS: usize = 4;

/// Logical bits in an on/off frame
pub const FRAME_BITS: usize = DIM_OFFSET;
/// Logical bits in a dim frame
pub const DIM_FRAME_BITS: usize = DIM_OFFSET + DIM_BITS;

/// Low pulses in an on/off frame
pub const PULSE_COUNT: usize = 2 * FRAME_BITS;
/// Low pulses in a dim frame, and the capacity of every [`PulseTrain`]
pub const DIM_PULSE_COUNT: usize = 2 * DIM_FRAME_BITS;

/// Highest protocol dim level
pub const MAX_DIM_LEVEL: u8 = (1 << DIM_BITS) - 1;

/// Low pulses for a logical '0'
pub const ZERO_PAIR: [u32; 2] = [PULSE_LOW_SHORT_US, PULSE_LOW_LONG_US];
/// Low pulses for a logical '1'
pub const ONE_PAIR: [u32; 2] = [PULSE_LOW_LONG_US, PULSE_LOW_SHORT_US];
/// Low pulses that replace the on/off bit in a dim command
pub const DIM_MARKER_PAIR: [u32; 2] = [PULSE_LOW_SHORT_US, PULSE_LOW_SHORT_US];

/// What the frame asks the receiver to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// on flag = 0
    Off,
    /// on flag = 1
    On,
    /// Absolute dim to a protocol level (0-15)
    Dim(u8),
}

/// One Nexa command frame.
///
/// Fields wider than their slot are masked on construction: a controller id
/// keeps its low 26 bits, device id and dim level their low 4 bits. Nothing
/// ever spills into a neighbouring field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    controller_id: u32,
    group: bool,
    action: Action,
    device_id: u8,
}

impl Frame {
    /// Builds a frame, masking every field to its width.
    pub fn new(controller_id: u32, group: bool, action: Action, device_id: u8) -> Self {
        let action = match action {
            Action::Dim(level) => Action::Dim(level & MAX_DIM_LEVEL),
            other => other,
        };
        Self {
            controller_id: controller_id & field_mask(CONTROLLER_ID_BITS),
            group,
            action,
            device_id: device_id & (field_mask(DEVICE_ID_BITS) as u8),
        }
    }

    /// Frame addressing a single device.
    pub fn device(controller_id: u32, device_id: u8, action: Action) -> Self {
        Self::new(controller_id, false, action, device_id)
    }

    /// Frame addressing every device paired with the controller.
    ///
    /// Group frames always carry device id 0.
    pub fn group(controller_id: u32, on: bool) -> Self {
        let action = if on { Action::On } else { Action::Off };
        Self::new(controller_id, true, action, 0)
    }

    /// 26-bit id of the sending remote.
    pub fn controller_id(&self) -> u32 {
        self.controller_id
    }

    /// Whether the frame addresses the whole group.
    pub fn is_group(&self) -> bool {
        self.group
    }

    /// On, off or dim request carried by the frame.
    pub fn action(&self) -> Action {
        self.action
    }

    /// 4-bit device channel (always 0 on group frames).
    pub fn device_id(&self) -> u8 {
        self.device_id
    }

    /// The on/off flag, or `None` when the slot holds the dim marker.
    pub fn on_flag(&self) -> Option<bool> {
        match self.action {
            Action::On => Some(true),
            Action::Off => Some(false),
            Action::Dim(_) => None,
        }
    }

    /// Protocol dim level (0-15) on dim frames.
    pub fn dim_level(&self) -> Option<u8> {
        match self.action {
            Action::Dim(level) => Some(level),
            _ => None,
        }
    }

    /// Number of low pulses this frame expands to (64 or 72).
    pub fn pulse_count(&self) -> usize {
        match self.action {
            Action::Dim(_) => DIM_PULSE_COUNT,
            _ => PULSE_COUNT,
        }
    }
}

/// Splits the low `N` bits of `value` into booleans, most significant first.
///
/// Walks the powers of two from `2^(N-1)` down to `1`, setting a bit and
/// subtracting whenever the remainder still holds that power.
///
/// ```ignore
/// assert_eq!(field_bits::<4>(3), [false, false, true, true]);
/// ```
pub fn field_bits<const N: usize>(value: u32) -> [bool; N] {
    let mut rest = value & field_mask(N);
    let mut bits = [false; N];
    for (i, bit) in bits.iter_mut().enumerate() {
        let weight = 1u32 << (N - 1 - i);
        if rest >= weight {
            rest -= weight;
            *bit = true;
        }
    }
    bits
}

/// Low pulse pair for one logical bit.
pub const fn encode_bit(bit: bool) -> [u32; 2] {
    if bit { ONE_PAIR } else { ZERO_PAIR }
}

/// Recovers a logical bit from its low pulse pair.
///
/// Returns `None` for the dim marker and anything else that is not part of
/// the line code.
pub fn decode_pair(first: u32, second: u32) -> Option<bool> {
    match [first, second] {
        ZERO_PAIR => Some(false),
        ONE_PAIR => Some(true),
        _ => None,
    }
}

fn field_mask(bits: usize) -> u32 {
    if bits >= u32::BITS as usize {
        u32::MAX
    } else {
        (1 << bits) - 1
    }
}

/// Low pulse widths for one frame, in transmit order.
///
/// Capacity is fixed at [`DIM_PULSE_COUNT`] so one buffer serves every
/// command; on/off frames fill a 64 entry prefix. [`encode`](Self::encode)
/// rewrites the buffer from scratch, so nothing from an earlier command
/// survives into the next one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseTrain {
    lows: Vec<u32, DIM_PULSE_COUNT>,
}

impl PulseTrain {
    /// Creates an empty pulse train.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let mut train = PulseTrain::new();
    /// train.encode(&Frame::group(0, false));
    /// assert_eq!(train.len(), 64);
    /// ```
    pub const fn new() -> Self {
        Self { lows: Vec::new() }
    }

    /// Builds a pulse train holding `frame`.
    pub fn from_frame(frame: &Frame) -> Self {
        let mut train = Self::new();
        train.encode(frame);
        train
    }

    /// Replaces the contents with the encoding of `frame`.
    pub fn encode(&mut self, frame: &Frame) {
        self.lows.clear();

        self.push_field::<CONTROLLER_ID_BITS>(frame.controller_id);
        self.push_pair(encode_bit(frame.group));
        match frame.action {
            Action::On => self.push_pair(ONE_PAIR),
            Action::Off => self.push_pair(ZERO_PAIR),
            Action::Dim(_) => self.push_pair(DIM_MARKER_PAIR),
        }
        self.push_field::<DEVICE_ID_BITS>(u32::from(frame.device_id));
        if let Action::Dim(level) = frame.action {
            self.push_field::<DIM_BITS>(u32::from(level));
        }

        debug_assert_eq!(self.lows.len(), frame.pulse_count());
    }

    /// Low pulse widths in transmit order, in microseconds.
    pub fn as_slice(&self) -> &[u32] {
        &self.lows
    }

    /// Number of low pulses (64 or 72 once encoded).
    pub fn len(&self) -> usize {
        self.lows.len()
    }

    /// `true` until a frame has been encoded.
    pub fn is_empty(&self) -> bool {
        self.lows.is_empty()
    }

    /// Low pulse pair of the logical bit at `bit_index`.
    pub fn pair(&self, bit_index: usize) -> Option<[u32; 2]> {
        let first = *self.lows.get(2 * bit_index)?;
        let second = *self.lows.get(2 * bit_index + 1)?;
        Some([first, second])
    }

    /// Logical bit at `bit_index`, `None` past the end or on the dim marker.
    pub fn bit(&self, bit_index: usize) -> Option<bool> {
        let [first, second] = self.pair(bit_index)?;
        decode_pair(first, second)
    }

    fn push_field<const N: usize>(&mut self, value: u32) {
        for bit in field_bits::<N>(value) {
            self.push_pair(encode_bit(bit));
        }
    }

    fn push_pair(&mut self, pair: [u32; 2]) {
        let pushed = self.lows.extend_from_slice(&pair);
        debug_assert!(pushed.is_ok(), "frame longer than {} pulses", DIM_PULSE_COUNT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(train: &PulseTrain, offset: usize, width: usize) -> std::vec::Vec<Option<bool>> {
        (offset..offset + width).map(|i| train.bit(i)).collect()
    }

    #[test]
    fn test_field_bits_matches_big_endian_binary() {
        for id in [0u32, 1, 2, 0x15_5555, 0x2AA_AAAA, 0x123_4567, (1 << 26) - 1] {
            let bits = field_bits::<CONTROLLER_ID_BITS>(id);
            let rendered: std::string::String =
                bits.iter().map(|b| if *b { '1' } else { '0' }).collect();
            assert_eq!(rendered, format!("{:026b}", id), "controller id {:#x}", id);
        }
    }

    #[test]
    fn test_field_bits_short_fields() {
        assert_eq!(field_bits::<4>(0), [false; 4]);
        assert_eq!(field_bits::<4>(3), [false, false, true, true]);
        assert_eq!(field_bits::<4>(8), [true, false, false, false]);
        assert_eq!(field_bits::<4>(15), [true; 4]);
    }

    #[test]
    fn test_field_bits_truncates_wide_values() {
        assert_eq!(field_bits::<4>(0x13), field_bits::<4>(0x3));
        assert_eq!(
            field_bits::<CONTROLLER_ID_BITS>(u32::MAX),
            [true; CONTROLLER_ID_BITS]
        );
    }

    #[test]
    fn test_line_code() {
        assert_eq!(encode_bit(false), [275, 1225]);
        assert_eq!(encode_bit(true), [1225, 275]);
        assert_eq!(decode_pair(275, 1225), Some(false));
        assert_eq!(decode_pair(1225, 275), Some(true));
        for bit in [false, true] {
            let [a, b] = encode_bit(bit);
            assert_eq!(decode_pair(a, b), Some(bit));
        }
    }

    #[test]
    fn test_dim_marker_is_not_a_data_bit() {
        let [a, b] = DIM_MARKER_PAIR;
        assert_eq!(decode_pair(a, b), None);
        assert_eq!(decode_pair(1225, 1225), None);
        assert_eq!(decode_pair(0, 0), None);
    }

    #[test]
    fn test_frame_masks_fields() {
        let frame = Frame::new(0xFFFF_FFFF, false, Action::Dim(0x1F), 0x23);
        assert_eq!(frame.controller_id(), (1 << 26) - 1);
        assert_eq!(frame.device_id(), 0x3);
        assert_eq!(frame.dim_level(), Some(0xF));
    }

    #[test]
    fn test_group_frame_forces_device_zero() {
        let frame = Frame::group(42, true);
        assert!(frame.is_group());
        assert_eq!(frame.device_id(), 0);
        assert_eq!(frame.on_flag(), Some(true));
        assert_eq!(frame.dim_level(), None);
    }

    #[test]
    fn test_sequence_lengths() {
        assert_eq!(PulseTrain::from_frame(&Frame::device(7, 1, Action::On)).len(), 64);
        assert_eq!(PulseTrain::from_frame(&Frame::device(7, 1, Action::Off)).len(), 64);
        assert_eq!(PulseTrain::from_frame(&Frame::group(7, false)).len(), 64);
        assert_eq!(
            PulseTrain::from_frame(&Frame::device(7, 1, Action::Dim(9))).len(),
            72
        );
    }

    #[test]
    fn test_device_on_layout() {
        let train = PulseTrain::from_frame(&Frame::device(1, 3, Action::On));

        let controller = field(&train, CONTROLLER_ID_OFFSET, CONTROLLER_ID_BITS);
        assert!(controller[..25].iter().all(|b| *b == Some(false)));
        assert_eq!(controller[25], Some(true));

        assert_eq!(train.bit(GROUP_FLAG_OFFSET), Some(false));
        assert_eq!(train.pair(ON_FLAG_OFFSET), Some([1225, 275]));
        assert_eq!(
            field(&train, DEVICE_ID_OFFSET, DEVICE_ID_BITS),
            [Some(false), Some(false), Some(true), Some(true)]
        );
        assert_eq!(&train.as_slice()[56..64], &[275, 1225, 275, 1225, 1225, 275, 1225, 275]);
    }

    #[test]
    fn test_group_off_layout() {
        let train = PulseTrain::from_frame(&Frame::group(0, false));
        assert_eq!(train.len(), 64);
        assert!(field(&train, 0, CONTROLLER_ID_BITS).iter().all(|b| *b == Some(false)));
        assert_eq!(train.bit(GROUP_FLAG_OFFSET), Some(true));
        assert_eq!(train.bit(ON_FLAG_OFFSET), Some(false));
        assert!(field(&train, DEVICE_ID_OFFSET, 4).iter().all(|b| *b == Some(false)));
    }

    #[test]
    fn test_dim_layout() {
        let train = PulseTrain::from_frame(&Frame::device(5, 2, Action::Dim(10)));
        assert_eq!(train.pair(ON_FLAG_OFFSET), Some(DIM_MARKER_PAIR));
        assert_eq!(train.bit(ON_FLAG_OFFSET), None);
        assert_eq!(train.bit(GROUP_FLAG_OFFSET), Some(false));
        assert_eq!(
            field(&train, DEVICE_ID_OFFSET, 4),
            [Some(false), Some(false), Some(true), Some(false)]
        );
        assert_eq!(
            field(&train, DIM_OFFSET, DIM_BITS),
            [Some(true), Some(false), Some(true), Some(false)]
        );
        assert_eq!(train.bit(DIM_FRAME_BITS), None);
    }

    #[test]
    fn test_longest_frame_fills_capacity_exactly() {
        let mut train = PulseTrain::new();
        for _ in 0..3 {
            train.encode(&Frame::device(u32::MAX, u8::MAX, Action::Dim(u8::MAX)));
            assert_eq!(train.len(), DIM_PULSE_COUNT);
            assert!((0..CONTROLLER_ID_BITS).all(|i| train.bit(i) == Some(true)));
            assert_eq!(train.bit(GROUP_FLAG_OFFSET), Some(false));
            assert_eq!(train.pair(ON_FLAG_OFFSET), Some(DIM_MARKER_PAIR));
            assert!((DEVICE_ID_OFFSET..DIM_FRAME_BITS).all(|i| train.bit(i) == Some(true)));
        }
    }

    #[test]
    fn test_reencode_drops_dim_tail() {
        let mut train = PulseTrain::new();
        train.encode(&Frame::device(5, 2, Action::Dim(15)));
        train.encode(&Frame::device(5, 2, Action::On));
        assert_eq!(train, PulseTrain::from_frame(&Frame::device(5, 2, Action::On)));
        assert_eq!(train.len(), PULSE_COUNT);
    }

    #[test]
    fn test_every_entry_is_short_or_long() {
        let train = PulseTrain::from_frame(&Frame::device(0x2AB_CDEF, 15, Action::Dim(6)));
        assert!(train
            .as_slice()
            .iter()
            .all(|p| *p == PULSE_LOW_SHORT_US || *p == PULSE_LOW_LONG_US));
    }
}
