// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Register access abstraction.
//!
//! Everything that touches hardware goes through [`RegisterBank`], so the
//! same driver code runs against the real memory map ([`Mmio`]) or against
//! an in-memory stand-in ([`FakeRegisters`]) on the host.

use heapless::{LinearMap, Vec};

/// A 32-bit register space addressed by physical address.
pub trait RegisterBank {
    fn write(&mut self, addr: u32, value: u32);
    fn read(&self, addr: u32) -> u32;
}

impl<T: RegisterBank + ?Sized> RegisterBank for &mut T {
    fn write(&mut self, addr: u32, value: u32) {
        (**self).write(addr, value)
    }

    fn read(&self, addr: u32) -> u32 {
        (**self).read(addr)
    }
}

/// A single register write, as issued by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterWrite {
    pub addr: u32,
    pub value: u32,
}

impl RegisterWrite {
    pub const fn new(addr: u32, value: u32) -> Self {
        Self { addr, value }
    }

    pub fn apply(self, regs: &mut impl RegisterBank) {
        regs.write(self.addr, self.value);
    }
}

/// Memory-mapped registers at their physical addresses.
#[derive(Clone, Copy)]
pub struct Mmio {
    _private: (),
}

impl Mmio {
    /// # Safety
    /// Only valid on the target, with the MMU either off or mapping the
    /// peripheral space flat. Callers must not create aliasing drivers that
    /// race on the same registers.
    pub const unsafe fn steal() -> Self {
        Self { _private: () }
    }
}

impl RegisterBank for Mmio {
    #[inline]
    fn write(&mut self, addr: u32, value: u32) {
        unsafe { (addr as *mut u32).write_volatile(value) }
    }

    #[inline]
    fn read(&self, addr: u32) -> u32 {
        unsafe { (addr as *const u32).read_volatile() }
    }
}

/// In-memory register bank for tests and the host simulator.
///
/// Each address holds the last value written to it (or a preset, or 0), for
/// up to `C` distinct addresses. Writes are also logged in order, up to `N`
/// entries. Writes that miss the log are counted in
/// [`FakeRegisters::dropped`]; values that find no free cell are counted in
/// [`FakeRegisters::overflowed`], and reads of such an address return 0.
pub struct FakeRegisters<const N: usize = 32, const C: usize = 32> {
    cells: LinearMap<u32, u32, C>,
    writes: Vec<RegisterWrite, N>,
    dropped: usize,
    overflowed: usize,
}

impl<const N: usize, const C: usize> FakeRegisters<N, C> {
    pub const fn new() -> Self {
        Self {
            cells: LinearMap::new(),
            writes: Vec::new(),
            dropped: 0,
            overflowed: 0,
        }
    }

    /// Set a register value without logging a write.
    pub fn preset(&mut self, addr: u32, value: u32) {
        self.store(addr, value);
    }

    /// Writes issued so far, oldest first.
    pub fn writes(&self) -> &[RegisterWrite] {
        &self.writes
    }

    /// Drain the write log.
    pub fn take_writes(&mut self) -> Vec<RegisterWrite, N> {
        core::mem::take(&mut self.writes)
    }

    /// Number of writes that did not fit in the log.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Number of stores that found the cell table full.
    pub fn overflowed(&self) -> usize {
        self.overflowed
    }

    /// Writes to `addr`, oldest first.
    pub fn writes_to(&self, addr: u32) -> impl Iterator<Item = u32> + '_ {
        self.writes
            .iter()
            .filter(move |w| w.addr == addr)
            .map(|w| w.value)
    }

    fn store(&mut self, addr: u32, value: u32) {
        if self.cells.insert(addr, value).is_err() {
            self.overflowed += 1;
        }
    }
}

impl<const N: usize, const C: usize> Default for FakeRegisters<N, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize, const C: usize> RegisterBank for FakeRegisters<N, C> {
    fn write(&mut self, addr: u32, value: u32) {
        self.store(addr, value);
        if self.writes.push(RegisterWrite::new(addr, value)).is_err() {
            self.dropped += 1;
        }
    }

    fn read(&self, addr: u32) -> u32 {
        self.cells.get(&addr).copied().unwrap_or(0)
    }
}
