// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

mod cli;
mod logging;

use std::path::Path;
use std::process;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::Parser;
use serde_json::json;
use tracing::info;

use luach::{
    intercalation_cycle_info, is_valid_timezone, molad, CivilMoment, ConverterConfig,
    HebrewDateConverter, HebrewMonth,
};

use crate::cli::{CheckTzArgs, Cli, Command, ConvertArgs, CycleArgs, MoladArgs};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli.command, cli.json) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

fn run(command: Command, json: bool) -> Result<i32> {
    match command {
        Command::Convert(args) => convert(args, json).map(|()| 0),
        Command::Cycle(args) => cycle(args, json).map(|()| 0),
        Command::Molad(args) => show_molad(args, json).map(|()| 0),
        Command::CheckTz(args) => Ok(check_tz(args, json)),
    }
}

fn load_config(path: &Path) -> Result<ConverterConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("failed to parse config: {}", path.display()))
}

fn parse_clock(text: &str) -> Result<(u32, u32)> {
    let Some((hour, minute)) = text.split_once(':') else {
        bail!("nightfall must be HH:MM, got `{text}`");
    };
    let hour = hour.parse().with_context(|| format!("bad hour in `{text}`"))?;
    let minute = minute.parse().with_context(|| format!("bad minute in `{text}`"))?;
    Ok((hour, minute))
}

fn convert(args: ConvertArgs, json: bool) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ConverterConfig::default(),
    };
    if let Some(text) = &args.nightfall {
        let (hour, minute) = parse_clock(text)?;
        config.nightfall.hour = hour;
        config.nightfall.minute = minute;
    }
    let converter = HebrewDateConverter::<luach::Arithmetic>::from_config(&config)?;

    let moment = match &args.moment {
        Some(text) => CivilMoment::parse(text)?,
        None => CivilMoment::with_offset(Utc::now().fixed_offset()),
    };
    info!(%moment, zone = %args.timezone, "converting");
    let result = converter.convert(&moment, &args.timezone)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }
    println!("{result}");
    println!("  jerusalem    {}", result.jerusalem_time().to_rfc3339());
    println!(
        "  civil day    {} ({})",
        result.hebrew_date(),
        if result.after_nightfall() {
            "after nightfall"
        } else {
            "before nightfall"
        }
    );
    println!(
        "  day          {} / {}",
        result.day_attributes().hebrew_day_name,
        result.planet().hebrew_name()
    );
    println!(
        "  cycle        year {} of 19, {} months",
        result.year_in_cycle(),
        result.cycle().month_count
    );
    Ok(())
}

fn cycle(args: CycleArgs, json: bool) -> Result<()> {
    let info = intercalation_cycle_info(args.year);
    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!(
            "{}: cycle {}, year {} of 19, {} ({} months)",
            args.year,
            info.cycle_number,
            info.year_in_cycle,
            if info.is_leap_year { "leap" } else { "common" },
            info.month_count
        );
    }
    Ok(())
}

fn show_molad(args: MoladArgs, json: bool) -> Result<()> {
    let Some(month) = HebrewMonth::from_number(args.month) else {
        bail!("no month numbered {}", args.month);
    };
    let m = molad(args.year, month)?;
    let notation = m.notation();
    let date = m
        .date()
        .map_or_else(|| "out of range".to_owned(), |d| d.to_string());
    if json {
        let value = json!({
            "year": m.year(),
            "month": month.number(),
            "month_name": month.name(luach::is_hebrew_leap_year(m.year())),
            "months_elapsed": m.months_elapsed(),
            "date": date,
            "time": m.time().to_string(),
            "weekday": notation.weekday.to_string(),
            "hours": notation.hours,
            "chalakim": notation.chalakim,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!(
            "Molad {} {}: {} ({} {})",
            month.name(luach::is_hebrew_leap_year(m.year())),
            m.year(),
            m,
            date,
            m.time()
        );
    }
    Ok(())
}

fn check_tz(args: CheckTzArgs, json: bool) -> i32 {
    let valid = is_valid_timezone(&args.name);
    if json {
        println!("{}", json!({ "name": args.name, "valid": valid }));
    } else if valid {
        println!("{}: valid", args.name);
    } else {
        println!("{}: unknown zone", args.name);
    }
    if valid {
        0
    } else {
        1
    }
}
