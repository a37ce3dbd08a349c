// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! MiniZed bare-metal blinky on the GPIO MIO bank.
//!
//! Cycles the PS bicolor LED (MIO52/MIO53) through off, green, red and
//! amber, one color per second, reporting each step on UART1.

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
mod firmware {
    use core::panic::PanicInfo;

    use cortex_ar::asm::nop;
    use minized_common::{Mmio, Variant, ZynqPlatform};
    use zynq7000_rt as _;

    #[unsafe(no_mangle)]
    pub extern "C" fn boot_core(cpu_id: u32) -> ! {
        if cpu_id != 0 {
            panic!("unexpected CPU ID {}", cpu_id);
        }
        main();
    }

    #[unsafe(export_name = "main")]
    pub fn main() -> ! {
        let mut platform = match ZynqPlatform::take() {
            Ok(platform) => platform,
            Err(e) => panic!("board bring-up failed: {:?}", e),
        };
        // GPIO bank registers are written raw; the HAL does not drive them.
        let regs = unsafe { Mmio::steal() };

        minized_common::run(Variant::Mio, &mut platform, regs)
    }

    #[zynq7000_rt::irq]
    pub fn irq_handler() {}

    #[unsafe(no_mangle)]
    pub extern "C" fn _abort_handler() {
        park()
    }

    #[unsafe(no_mangle)]
    pub extern "C" fn _undefined_handler() {
        park()
    }

    #[unsafe(no_mangle)]
    pub extern "C" fn _prefetch_handler() {
        park()
    }

    #[panic_handler]
    fn panic(_info: &PanicInfo) -> ! {
        park()
    }

    fn park() -> ! {
        loop {
            nop();
        }
    }
}

#[cfg(not(target_os = "none"))]
fn main() {
    eprintln!("minized-blinky-mio runs on the board: build it with --target armv7a-none-eabi");
}
