// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! MiniZed platform on top of `zynq7000-hal`: the PS UART1 console on
//! MIO48/MIO49 and the CPU private timer as delay.

use core::fmt;

use embedded_io::Write as _;
use zynq7000::PsPeripherals;
use zynq7000_hal::clocks::Clocks;
use zynq7000_hal::gpio::mio;
use zynq7000_hal::priv_tim::CpuPrivateTimer;
use zynq7000_hal::time::Hertz;
use zynq7000_hal::uart::{ClockConfig, Config, Uart};

use crate::platform::Platform;

/// PS_CLK oscillator on the MiniZed.
pub const PS_CLOCK_FREQUENCY: Hertz = Hertz::from_raw(33_333_333);

/// Console baud rate, 8N1.
pub const CONSOLE_BAUD: u32 = 115_200;

/// Reasons the board could not be brought up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BoardError {
    /// Peripherals were already taken.
    PeripheralsTaken,
    /// Clock tree registers could not be read back.
    Clocks,
    /// No UART divisor pair reaches [`CONSOLE_BAUD`].
    Baud,
    /// UART could not be configured on MIO48/MIO49.
    Uart,
    /// CPU private timer was already taken.
    Timer,
}

/// UART console as a `core::fmt::Write` sink.
pub struct Console {
    uart: Uart,
}

impl fmt::Write for Console {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.uart.write_all(s.as_bytes()).map_err(|_| fmt::Error)
    }
}

/// MiniZed platform. GPIO is left to the raw register writes of the blinky
/// loop.
pub struct ZynqPlatform {
    console: Console,
    delay: CpuPrivateTimer,
}

impl ZynqPlatform {
    /// Take the PS peripherals and set up the console and the timer.
    ///
    /// Clocks were programmed by the FSBL; they are only read back here.
    pub fn take() -> Result<Self, BoardError> {
        let dp = PsPeripherals::take().ok_or(BoardError::PeripheralsTaken)?;
        let clocks = Clocks::new_from_regs(PS_CLOCK_FREQUENCY).map_err(|_| BoardError::Clocks)?;

        let mio_pins = mio::Pins::new(dp.gpio);
        let (uart_clk, _error) =
            ClockConfig::new_autocalc_with_error(clocks.io_clocks(), CONSOLE_BAUD)
                .map_err(|_| BoardError::Baud)?;
        let uart = Uart::new_with_mio(
            dp.uart_1,
            Config::new_with_clk_config(uart_clk),
            (mio_pins.mio48, mio_pins.mio49),
        )
        .map_err(|_| BoardError::Uart)?;

        let delay = CpuPrivateTimer::take(clocks.arm_clocks()).ok_or(BoardError::Timer)?;

        Ok(Self {
            console: Console { uart },
            delay,
        })
    }
}

impl Platform for ZynqPlatform {
    type Console = Console;
    type Delay = CpuPrivateTimer;

    fn init(&mut self) {
        // Bring-up happens in `take`, which owns the peripherals.
        #[cfg(feature = "defmt")]
        defmt::debug!("MiniZed platform ready");
    }

    fn cleanup(&mut self) {
        self.console.uart.flush().ok();
    }

    fn split(&mut self) -> (&mut Self::Console, &mut Self::Delay) {
        (&mut self.console, &mut self.delay)
    }
}
