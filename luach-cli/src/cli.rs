// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Hebrew date converter anchored to Jerusalem.
#[derive(Parser, Debug)]
#[command(name = "luach", version, about = "Gregorian to Hebrew date conversion")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print machine-readable JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a civil moment to its Hebrew date.
    Convert(ConvertArgs),
    /// Show a year's place in the 19-year cycle.
    Cycle(CycleArgs),
    /// Show the molad of a month.
    Molad(MoladArgs),
    /// Check whether a name is a known IANA zone.
    CheckTz(CheckTzArgs),
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args, Debug)]
pub struct ConvertArgs {
    /// Moment as RFC 3339 or `YYYY-MM-DD[THH:MM[:SS]]`; defaults to now.
    pub moment: Option<String>,

    /// IANA zone the moment is read in.
    #[arg(
        short = 'z',
        long = "tz",
        visible_alias = "timezone",
        default_value = "Asia/Jerusalem"
    )]
    pub timezone: String,

    /// Path to a TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the nightfall threshold, `HH:MM`.
    #[arg(long)]
    pub nightfall: Option<String>,
}

/// Arguments for the `cycle` subcommand.
#[derive(clap::Args, Debug)]
pub struct CycleArgs {
    /// Hebrew year, anno mundi.
    pub year: i32,
}

/// Arguments for the `molad` subcommand.
#[derive(clap::Args, Debug)]
pub struct MoladArgs {
    /// Hebrew year, anno mundi.
    pub year: i32,

    /// Month number, Nisan = 1 .. Adar II = 13.
    #[arg(short, long, default_value_t = 7, value_parser = clap::value_parser!(u8).range(1..=13))]
    pub month: u8,
}

/// Arguments for the `check-tz` subcommand.
#[derive(clap::Args, Debug)]
pub struct CheckTzArgs {
    /// Zone name to check.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_convert() {
        let cli = Cli::try_parse_from([
            "luach",
            "-vv",
            "convert",
            "1988-01-04T21:25",
            "--tz",
            "America/New_York",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.json);
        match cli.command {
            Command::Convert(args) => {
                assert_eq!(args.moment.as_deref(), Some("1988-01-04T21:25"));
                assert_eq!(args.timezone, "America/New_York");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_molad_month_range() {
        assert!(Cli::try_parse_from(["luach", "molad", "5784", "--month", "14"]).is_err());
        let cli = Cli::try_parse_from(["luach", "molad", "5784"]).unwrap();
        assert!(matches!(cli.command, Command::Molad(MoladArgs { month: 7, .. })));
    }
}
