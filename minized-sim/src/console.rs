// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Host stand-ins for the board console, registers and delay.
//!
//! Console text and register trace lines go to one shared sink, so the
//! transcript keeps the order in which the board would act.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use embedded_hal::delay::DelayNs;
use minized_common::{RegisterBank, RegisterWrite, Variant};

/// Output shared by the console and the register trace.
pub struct Sink<W> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> Sink<W> {
    pub fn new(out: W) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self { out, error: None }))
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Flush and report the first error seen so far.
    pub fn check(&mut self) -> io::Result<()> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), ()> {
        if self.error.is_some() {
            return Err(());
        }
        self.out.write_all(bytes).map_err(|e| {
            self.error = Some(e);
        })
    }
}

/// Console sink. The blinky loop ignores console errors like the firmware
/// does; they stay in the [`Sink`] for the caller to check.
pub struct HostConsole<W> {
    sink: Rc<RefCell<Sink<W>>>,
}

impl<W: Write> HostConsole<W> {
    pub fn new(sink: Rc<RefCell<Sink<W>>>) -> Self {
        Self { sink }
    }
}

impl<W: Write> fmt::Write for HostConsole<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.sink
            .borrow_mut()
            .write_bytes(s.as_bytes())
            .map_err(|_| fmt::Error)
    }
}

/// Register bank that remembers values and optionally traces each write
/// to the sink as it happens.
pub struct TracingRegisters<W> {
    variant: Variant,
    sink: Option<Rc<RefCell<Sink<W>>>>,
    cells: BTreeMap<u32, u32>,
}

impl<W: Write> TracingRegisters<W> {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            sink: None,
            cells: BTreeMap::new(),
        }
    }

    pub fn traced(variant: Variant, sink: Rc<RefCell<Sink<W>>>) -> Self {
        Self {
            sink: Some(sink),
            ..Self::new(variant)
        }
    }
}

impl<W: Write> RegisterBank for TracingRegisters<W> {
    fn write(&mut self, addr: u32, value: u32) {
        self.cells.insert(addr, value);
        if let Some(sink) = &self.sink {
            let line = format!(
                "    {}\n",
                describe_write(self.variant, RegisterWrite::new(addr, value))
            );
            sink.borrow_mut().write_bytes(line.as_bytes()).ok();
        }
    }

    fn read(&self, addr: u32) -> u32 {
        self.cells.get(&addr).copied().unwrap_or(0)
    }
}

pub fn describe_write(variant: Variant, write: RegisterWrite) -> String {
    match register_name(variant, write.addr) {
        Some((bank, role)) => format!(
            "0x{:08X} <- 0x{:08X}  ({} {})",
            write.addr, write.value, bank, role
        ),
        None => format!("0x{:08X} <- 0x{:08X}", write.addr, write.value),
    }
}

pub fn register_name(variant: Variant, addr: u32) -> Option<(&'static str, &'static str)> {
    variant.banks().iter().find_map(|bank| {
        let role = if addr == bank.data {
            "Data"
        } else if addr == bank.direction {
            "Direction"
        } else if Some(addr) == bank.output_enable {
            "Output-Enable"
        } else {
            return None;
        };
        Some((bank.name, role))
    })
}

/// Delay that either returns at once or really sleeps.
pub struct HostDelay {
    pub realtime: bool,
}

impl DelayNs for HostDelay {
    fn delay_ns(&mut self, ns: u32) {
        if self.realtime {
            thread::sleep(Duration::from_nanos(ns as u64));
        }
    }

    fn delay_ms(&mut self, ms: u32) {
        if self.realtime {
            thread::sleep(Duration::from_millis(ms as u64));
        }
    }
}
