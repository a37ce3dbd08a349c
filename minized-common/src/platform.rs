// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Board support seen by the blinky loop: setup, teardown, a console and a
//! blocking delay.

use core::fmt::Write;

use embedded_hal::delay::DelayNs;

/// Platform collaborators of the blinky loop.
pub trait Platform {
    type Console: Write;
    type Delay: DelayNs;

    /// Ready the console and the timer. Called once, before anything else.
    fn init(&mut self);

    /// Counterpart of [`Platform::init`], for runs that end.
    fn cleanup(&mut self);

    /// Borrow the console and the delay together.
    fn split(&mut self) -> (&mut Self::Console, &mut Self::Delay);
}
