// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Command implementations for the simulator.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use anyhow::{Context, Result};
use minized_common::{Blinky, Color, GpioBank, Variant};

use crate::console::{HostConsole, HostDelay, Sink, TracingRegisters};

/// Run the blink loop for `cycles` iterations and print what the board would.
pub fn run(variant: Variant, cycles: u32, start: u32, trace: bool, realtime: bool) -> Result<()> {
    let sink = Sink::new(io::stdout());
    run_to(&sink, variant, cycles, start, trace, realtime)
}

/// [`run`] against any output sink.
pub fn run_to<W: Write>(
    sink: &Rc<RefCell<Sink<W>>>,
    variant: Variant,
    cycles: u32,
    start: u32,
    trace: bool,
    realtime: bool,
) -> Result<()> {
    let regs = if trace {
        TracingRegisters::traced(variant, Rc::clone(sink))
    } else {
        TracingRegisters::new(variant)
    };
    let mut console = HostConsole::new(Rc::clone(sink));
    let mut delay = HostDelay { realtime };
    let mut blinky = Blinky::with_counter(variant, regs, start);

    blinky.start(&mut console);
    sink.borrow_mut().check().context("Failed to write banner")?;

    for _ in 0..cycles {
        blinky.tick(&mut console, &mut delay);
        sink.borrow_mut()
            .check()
            .context("Failed to write status line")?;
    }

    Ok(())
}

/// Print the register map of every bank `variant` drives.
pub fn regmap(variant: Variant) -> Result<()> {
    println!("{}", variant.title());
    println!();

    for bank in variant.banks() {
        print_bank(bank);
        println!();
    }

    Ok(())
}

fn print_bank(bank: &GpioBank) {
    println!("{} bank:", bank.name);
    println!(
        "  Data:          0x{:08X}  init 0x{:08X}",
        bank.data,
        bank.data_value(Color::Off)
    );
    println!(
        "  Direction:     0x{:08X}  init 0x{:08X}",
        bank.direction, bank.output_pins
    );
    match bank.output_enable {
        Some(oen) => println!(
            "  Output-Enable: 0x{:08X}  init 0x{:08X}",
            oen, bank.output_pins
        ),
        None => println!("  Output-Enable: none"),
    }

    for color in Color::CYCLE {
        println!("  {:<6} 0x{:08X}", color.name(), bank.data_value(color));
    }
}
