// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Interrupt masking around a transmission.
//!
//! Nexa receivers decode pulse widths with little tolerance, so an
//! interrupt firing in the middle of a 275µs pulse can corrupt a frame.
//! The transmitter masks every interrupt for the whole command (both
//! repeats) through an [`InterruptGuard`], which unmasks them again when it
//! goes out of scope, on success and on error alike.

/// System-wide interrupt delivery switch.
pub trait InterruptControl {
    /// Stops interrupt delivery.
    fn disable_all(&mut self);

    /// Resumes interrupt delivery.
    fn enable_all(&mut self);
}

impl<T: InterruptControl + ?Sized> InterruptControl for &mut T {
    fn disable_all(&mut self) {
        (**self).disable_all();
    }

    fn enable_all(&mut self) {
        (**self).enable_all();
    }
}

/// Masks interrupts for as long as it lives.
///
/// # Examples
///
/// ```ignore
/// {
///     let _masked = InterruptGuard::acquire(&mut interrupts);
///     // timing-critical work
/// } // interrupts resume here
/// ```
pub struct InterruptGuard<'a, I: InterruptControl> {
    control: &'a mut I,
}

impl<'a, I: InterruptControl> InterruptGuard<'a, I> {
    /// Masks interrupts through `control` until the guard is dropped.
    pub fn acquire(control: &'a mut I) -> Self {
        control.disable_all();
        Self { control }
    }
}

impl<I: InterruptControl> Drop for InterruptGuard<'_, I> {
    fn drop(&mut self) {
        self.control.enable_all();
    }
}

/// Cortex-M PRIMASK based interrupt control.
///
/// Remembers whether interrupts were enabled when masking and only
/// re-enables them in that case, so a transmission started from inside an
/// existing critical section leaves it intact.
#[cfg(feature = "cortex-m")]
#[derive(Debug, Default)]
pub struct Primask {
    was_active: bool,
}

#[cfg(feature = "cortex-m")]
impl Primask {
    /// Creates the control; the prior mask state is sampled on each
    /// `disable_all`.
    pub const fn new() -> Self {
        Self { was_active: false }
    }
}

#[cfg(feature = "cortex-m")]
impl InterruptControl for Primask {
    fn disable_all(&mut self) {
        self.was_active = cortex_m::register::primask::read().is_active();
        cortex_m::interrupt::disable();
    }

    fn enable_all(&mut self) {
        if self.was_active {
            // SAFETY: only undoes the mask set in `disable_all`
            unsafe { cortex_m::interrupt::enable() };
        }
    }
}
