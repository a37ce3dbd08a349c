// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! The blinky loop.
//!
//! [`step`] is the pure transition: given the loop counter it yields the
//! color, the Data register writes and the status line. [`Blinky`] applies
//! steps to a register bank, and [`run`] / [`run_cycles`] drive it with the
//! platform's console and delay.

use core::fmt::{self, Write};

use embedded_hal::delay::DelayNs;
use heapless::{String, Vec};

use crate::bank::{GpioBank, EMIO_BANK, MIO_BANK};
use crate::color::Color;
use crate::platform::Platform;
use crate::regs::{RegisterBank, RegisterWrite};

/// Time each color is shown.
pub const BLINK_PERIOD_MS: u32 = 1_000;

/// Underline printed below the banner title.
pub const BANNER_RULE: &str = "-------------------------------";

/// Maximum number of banks driven in lockstep.
pub const MAX_BANKS: usize = 2;

/// Status line capacity: `"4294967295: Amber\r\n"` is 19 bytes.
pub const STATUS_LINE_LEN: usize = 24;

/// Which of the two example programs is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Variant {
    /// PS bicolor LED only.
    Mio,
    /// PS bicolor LED plus the PL bicolor LED through EMIO.
    MioEmio,
}

impl Variant {
    /// Banks driven by this variant, written in this order every cycle.
    pub const fn banks(self) -> &'static [GpioBank] {
        match self {
            Variant::Mio => &[MIO_BANK],
            Variant::MioEmio => &[MIO_BANK, EMIO_BANK],
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Variant::Mio => "MiniZed Blinky GPIO MIO Example",
            Variant::MioEmio => "MiniZed Blinky GPIO EMIO Example",
        }
    }

    /// The MIO example announces itself before touching the GPIO block,
    /// the EMIO example after.
    pub const fn banner_first(self) -> bool {
        matches!(self, Variant::Mio)
    }
}

/// Outcome of one loop iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub counter: u32,
    pub color: Color,
    pub writes: Vec<RegisterWrite, MAX_BANKS>,
    pub line: String<STATUS_LINE_LEN>,
}

/// Compute iteration `counter` without touching hardware.
pub fn step(variant: Variant, counter: u32) -> Step {
    let color = Color::from_counter(counter);

    let mut writes = Vec::new();
    for bank in variant.banks() {
        // At most MAX_BANKS banks per variant.
        writes.push(bank.data_write(color)).ok();
    }

    let mut line = String::new();
    // Fits: u32 digits + longest color name + separators.
    write!(line, "{}: {}\r\n", counter, color).ok();

    Step {
        counter,
        color,
        writes,
        line,
    }
}

/// Print the two-line banner for `variant`.
pub fn write_banner(out: &mut impl Write, variant: Variant) -> fmt::Result {
    write!(out, "{}\r\n", variant.title())?;
    write!(out, "{}\r\n", BANNER_RULE)
}

/// Blinky state: the register bank and the loop counter.
pub struct Blinky<R> {
    variant: Variant,
    regs: R,
    counter: u32,
}

impl<R: RegisterBank> Blinky<R> {
    pub fn new(variant: Variant, regs: R) -> Self {
        Self::with_counter(variant, regs, 0)
    }

    pub fn with_counter(variant: Variant, regs: R, counter: u32) -> Self {
        Self {
            variant,
            regs,
            counter,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Counter value of the next iteration.
    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn regs(&self) -> &R {
        &self.regs
    }

    pub fn regs_mut(&mut self) -> &mut R {
        &mut self.regs
    }

    pub fn into_regs(self) -> R {
        self.regs
    }

    /// Configure every bank of the variant as LED outputs, LEDs off.
    pub fn configure(&mut self) {
        for bank in self.variant.banks() {
            bank.configure(&mut self.regs);
        }
    }

    /// Print the banner and configure the banks, in the variant's order.
    pub fn start(&mut self, console: &mut impl Write) {
        if self.variant.banner_first() {
            write_banner(console, self.variant).ok();
            self.configure();
        } else {
            self.configure();
            write_banner(console, self.variant).ok();
        }
    }

    /// Run one iteration: report, drive the LEDs, wait, advance.
    pub fn tick(&mut self, console: &mut impl Write, delay: &mut impl DelayNs) -> Color {
        let step = step(self.variant, self.counter);

        #[cfg(feature = "defmt")]
        defmt::trace!("{}: {}", step.counter, step.color);

        console.write_str(&step.line).ok();
        for write in step.writes {
            write.apply(&mut self.regs);
        }
        delay.delay_ms(BLINK_PERIOD_MS);

        self.counter = self.counter.wrapping_add(1);
        step.color
    }
}

/// Run `variant` forever on `platform`.
pub fn run<P: Platform, R: RegisterBank>(variant: Variant, platform: &mut P, regs: R) -> ! {
    platform.init();

    let mut blinky = Blinky::new(variant, regs);
    let (console, delay) = platform.split();
    blinky.start(console);

    loop {
        blinky.tick(console, delay);
    }
}

/// Run `variant` for `cycles` iterations, then clean up the platform.
///
/// Returns the register bank so callers can inspect what was written.
pub fn run_cycles<P: Platform, R: RegisterBank>(
    variant: Variant,
    platform: &mut P,
    regs: R,
    cycles: u32,
) -> R {
    platform.init();

    let mut blinky = Blinky::new(variant, regs);
    {
        let (console, delay) = platform.split();
        blinky.start(console);
        for _ in 0..cycles {
            blinky.tick(console, delay);
        }
    }

    platform.cleanup();
    blinky.into_regs()
}
