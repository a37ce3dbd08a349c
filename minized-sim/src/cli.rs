// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Command-line interface definitions.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use minized_common::Variant;

use crate::commands;

/// Command-line arguments.
#[derive(Parser)]
#[command(name = "minized-sim")]
#[command(about = "Host simulator for the MiniZed GPIO blinky examples")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Example program to simulate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    /// PS LED on the MIO bank
    Mio,
    /// PS LED on MIO plus PL LED on EMIO
    Emio,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Mio => Variant::Mio,
            VariantArg::Emio => Variant::MioEmio,
        }
    }
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Run the blink loop against fake registers
    Run {
        #[arg(short, long, value_enum, default_value = "mio")]
        variant: VariantArg,

        /// Number of loop iterations
        #[arg(short, long, default_value = "8")]
        cycles: u32,

        /// Initial counter value (decimal or 0x-prefixed hex)
        #[arg(short, long, default_value = "0", value_parser = parse_counter)]
        start: u32,

        /// Print every register write
        #[arg(short, long)]
        trace: bool,

        /// Wait one second per iteration like the board does
        #[arg(long)]
        realtime: bool,
    },

    /// Print the GPIO register map and LED values
    Regmap {
        #[arg(short, long, value_enum, default_value = "emio")]
        variant: VariantArg,
    },
}

/// Parse a counter value, decimal or hex with a 0x prefix.
fn parse_counter(s: &str) -> Result<u32, String> {
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16).map_err(|e| format!("invalid hex value: {e}")),
        None => s.parse().map_err(|e| format!("invalid counter: {e}")),
    }
}

/// Execute the parsed CLI command.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run {
            variant,
            cycles,
            start,
            trace,
            realtime,
        } => commands::run(variant.into(), cycles, start, trace, realtime),
        Commands::Regmap { variant } => commands::regmap(variant.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_counter() {
        assert_eq!(parse_counter("42"), Ok(42));
        assert_eq!(parse_counter("0x10"), Ok(16));
        assert_eq!(parse_counter("0XFFFFFFFF"), Ok(u32::MAX));
        assert!(parse_counter("0x1_0000_0000").is_err());
        assert!(parse_counter("-1").is_err());
    }

    #[test]
    fn test_run_defaults() {
        let cli = Cli::try_parse_from(["minized-sim", "run"]).unwrap();
        match cli.command {
            Commands::Run {
                variant,
                cycles,
                start,
                trace,
                realtime,
            } => {
                assert_eq!(variant, VariantArg::Mio);
                assert_eq!(cycles, 8);
                assert_eq!(start, 0);
                assert!(!trace && !realtime);
            }
            Commands::Regmap { .. } => panic!("expected run"),
        }
    }

    #[test]
    fn test_run_arguments() {
        let cli = Cli::try_parse_from([
            "minized-sim", "run", "-v", "emio", "-c", "3", "--start", "0x7", "--trace",
        ])
        .unwrap();
        match cli.command {
            Commands::Run {
                variant,
                cycles,
                start,
                trace,
                ..
            } => {
                assert_eq!(Variant::from(variant), Variant::MioEmio);
                assert_eq!(cycles, 3);
                assert_eq!(start, 7);
                assert!(trace);
            }
            Commands::Regmap { .. } => panic!("expected run"),
        }
    }

    #[test]
    fn test_unknown_variant_rejected() {
        assert!(Cli::try_parse_from(["minized-sim", "regmap", "--variant", "pl"]).is_err());
    }
}
