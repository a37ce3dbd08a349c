// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Tests for the blinky transition function and its driver.

use std::cell::RefCell;
use std::fmt;

use embedded_hal::delay::DelayNs;
use minized_common::{
    run_cycles, step, Blinky, Color, FakeRegisters, Platform, RegisterBank, RegisterWrite,
    Variant, BLINK_PERIOD_MS,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Init,
    Cleanup,
    Print(String),
    Write(u32, u32),
    Delay(u32),
}

type Log = RefCell<Vec<Event>>;

struct LoggedRegisters<'a>(&'a Log);

impl RegisterBank for LoggedRegisters<'_> {
    fn write(&mut self, addr: u32, value: u32) {
        self.0.borrow_mut().push(Event::Write(addr, value));
    }

    fn read(&self, _addr: u32) -> u32 {
        panic!("blinky must not read registers");
    }
}

struct LoggedConsole<'a>(&'a Log);

// Writes are merged until a line is complete, since `write!` may split a
// line into several `write_str` calls.
impl fmt::Write for LoggedConsole<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut log = self.0.borrow_mut();
        if let Some(Event::Print(text)) = log.last_mut() {
            if !text.ends_with('\n') {
                text.push_str(s);
                return Ok(());
            }
        }
        log.push(Event::Print(s.to_string()));
        Ok(())
    }
}

struct LoggedDelay<'a>(&'a Log);

impl DelayNs for LoggedDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.0.borrow_mut().push(Event::Delay(ns / 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0.borrow_mut().push(Event::Delay(ms));
    }
}

struct LoggedPlatform<'a> {
    log: &'a Log,
    console: LoggedConsole<'a>,
    delay: LoggedDelay<'a>,
}

impl<'a> LoggedPlatform<'a> {
    fn new(log: &'a Log) -> Self {
        Self {
            log,
            console: LoggedConsole(log),
            delay: LoggedDelay(log),
        }
    }
}

impl<'a> Platform for LoggedPlatform<'a> {
    type Console = LoggedConsole<'a>;
    type Delay = LoggedDelay<'a>;

    fn init(&mut self) {
        self.log.borrow_mut().push(Event::Init);
    }

    fn cleanup(&mut self) {
        self.log.borrow_mut().push(Event::Cleanup);
    }

    fn split(&mut self) -> (&mut Self::Console, &mut Self::Delay) {
        (&mut self.console, &mut self.delay)
    }
}

fn printed(log: &Log) -> String {
    log.borrow()
        .iter()
        .filter_map(|e| match e {
            Event::Print(s) => Some(s.as_str()),
            _ => None,
        })
        .collect()
}

struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

#[test]
fn test_step_mio_single_write_per_iteration() {
    let expected = [0xFFCF_0000, 0xFFCF_0020, 0xFFCF_0010, 0xFFCF_0030];

    for counter in 0u32..12 {
        let s = step(Variant::Mio, counter);
        assert_eq!(s.writes.len(), 1);
        assert_eq!(
            s.writes[0],
            RegisterWrite::new(0xE000_A00C, expected[(counter % 4) as usize])
        );
    }
}

#[test]
fn test_step_mio_emio_drives_both_banks_with_same_color() {
    let mio = [0xFFCF_0000, 0xFFCF_0020, 0xFFCF_0010, 0xFFCF_0030];
    let emio = [0xFFFC_0000, 0xFFFC_0001, 0xFFFC_0002, 0xFFFC_0003];

    for counter in 0u32..12 {
        let s = step(Variant::MioEmio, counter);
        let i = (counter % 4) as usize;
        assert_eq!(s.color, Color::from_counter(counter));
        assert_eq!(
            s.writes.as_slice(),
            &[
                RegisterWrite::new(0xE000_A00C, mio[i]),
                RegisterWrite::new(0xE000_A048, emio[i]),
            ]
        );
    }
}

#[test]
fn test_step_status_line_format() {
    assert_eq!(step(Variant::Mio, 0).line.as_str(), "0: Off\r\n");
    assert_eq!(step(Variant::Mio, 1).line.as_str(), "1: Green\r\n");
    assert_eq!(step(Variant::MioEmio, 2).line.as_str(), "2: Red\r\n");
    assert_eq!(step(Variant::MioEmio, 4_000_000_003).line.as_str(), "4000000003: Amber\r\n");
    assert_eq!(step(Variant::Mio, u32::MAX).line.as_str(), "4294967295: Amber\r\n");
}

#[test]
fn test_mio_console_transcript() {
    let log = Log::default();
    let mut platform = LoggedPlatform::new(&log);
    run_cycles(Variant::Mio, &mut platform, LoggedRegisters(&log), 5);

    assert_eq!(
        printed(&log),
        "MiniZed Blinky GPIO MIO Example\r\n\
         -------------------------------\r\n\
         0: Off\r\n\
         1: Green\r\n\
         2: Red\r\n\
         3: Amber\r\n\
         4: Off\r\n"
    );
}

#[test]
fn test_emio_console_transcript() {
    let log = Log::default();
    let mut platform = LoggedPlatform::new(&log);
    run_cycles(Variant::MioEmio, &mut platform, LoggedRegisters(&log), 2);

    assert_eq!(
        printed(&log),
        "MiniZed Blinky GPIO EMIO Example\r\n\
         -------------------------------\r\n\
         0: Off\r\n\
         1: Green\r\n"
    );
}

#[test]
fn test_mio_event_order() {
    let log = Log::default();
    let mut platform = LoggedPlatform::new(&log);
    run_cycles(Variant::Mio, &mut platform, LoggedRegisters(&log), 2);

    assert_eq!(
        *log.borrow(),
        vec![
            Event::Init,
            Event::Print("MiniZed Blinky GPIO MIO Example\r\n".into()),
            Event::Print("-------------------------------\r\n".into()),
            Event::Write(0xE000_A00C, 0xFFCF_0000),
            Event::Write(0xE000_A244, 0x0030_0000),
            Event::Write(0xE000_A248, 0x0030_0000),
            Event::Print("0: Off\r\n".into()),
            Event::Write(0xE000_A00C, 0xFFCF_0000),
            Event::Delay(BLINK_PERIOD_MS),
            Event::Print("1: Green\r\n".into()),
            Event::Write(0xE000_A00C, 0xFFCF_0020),
            Event::Delay(BLINK_PERIOD_MS),
            Event::Cleanup,
        ]
    );
}

#[test]
fn test_emio_configures_before_banner() {
    let log = Log::default();
    let mut platform = LoggedPlatform::new(&log);
    run_cycles(Variant::MioEmio, &mut platform, LoggedRegisters(&log), 1);

    let events = log.borrow();
    assert_eq!(
        &events[..8],
        &[
            Event::Init,
            Event::Write(0xE000_A00C, 0xFFCF_0000),
            Event::Write(0xE000_A244, 0x0030_0000),
            Event::Write(0xE000_A248, 0x0030_0000),
            Event::Write(0xE000_A048, 0xFFFC_0000),
            Event::Write(0xE000_A284, 0x0000_0003),
            Event::Print("MiniZed Blinky GPIO EMIO Example\r\n".into()),
            Event::Print("-------------------------------\r\n".into()),
        ]
    );
    assert_eq!(
        &events[8..],
        &[
            Event::Print("0: Off\r\n".into()),
            Event::Write(0xE000_A00C, 0xFFCF_0000),
            Event::Write(0xE000_A048, 0xFFFC_0000),
            Event::Delay(BLINK_PERIOD_MS),
            Event::Cleanup,
        ]
    );
}

#[test]
fn test_initialization_happens_once() {
    let regs = FakeRegisters::<64>::new();
    let log = Log::default();
    let mut platform = LoggedPlatform::new(&log);
    let regs = run_cycles(Variant::MioEmio, &mut platform, regs, 10);

    assert_eq!(regs.dropped(), 0);
    assert_eq!(regs.writes_to(0xE000_A244).count(), 1);
    assert_eq!(regs.writes_to(0xE000_A248).count(), 1);
    assert_eq!(regs.writes_to(0xE000_A284).count(), 1);
    // One init write plus one per cycle.
    assert_eq!(regs.writes_to(0xE000_A00C).count(), 11);
    assert_eq!(regs.writes_to(0xE000_A048).count(), 11);
}

#[test]
fn test_nth_cycle_color_matches_counter() {
    let mut blinky = Blinky::new(Variant::Mio, FakeRegisters::<4>::new());
    let mut console = String::new();
    blinky.start(&mut console);

    let mut last = Color::Off;
    for _ in 0..1_001 {
        last = blinky.tick(&mut console, &mut NoDelay);
        blinky.regs_mut().take_writes();
    }

    assert_eq!(blinky.counter(), 1_001);
    assert_eq!(last, Color::from_counter(1_000));
    assert_eq!(blinky.regs().read(0xE000_A00C), 0xFFCF_0000);
}

#[test]
fn test_counter_wraps_without_breaking_cycle() {
    let mut blinky = Blinky::with_counter(Variant::Mio, FakeRegisters::<4>::new(), u32::MAX);
    let mut console = String::new();

    assert_eq!(blinky.tick(&mut console, &mut NoDelay), Color::Amber);
    assert_eq!(blinky.counter(), 0);
    assert_eq!(blinky.tick(&mut console, &mut NoDelay), Color::Off);
    assert_eq!(console, "4294967295: Amber\r\n0: Off\r\n");
}
