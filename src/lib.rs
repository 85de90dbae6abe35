// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Luach
//!
//! Gregorian → Hebrew calendar conversion anchored to Jerusalem.
//!
//! A civil moment given in any IANA zone is converted to Jerusalem's wall
//! clock, mapped to the Hebrew date of that calendar day, and advanced to the
//! following Hebrew day when the Jerusalem clock is at or past nightfall
//! (19:00 by default).
//!
//! # Core types
//!
//! - [`HebrewDateConverter<C>`] — converter parameterised by a
//!   [`HebrewCalendar`] backend marker ([`Arithmetic`] by default).
//! - [`CivilMoment`] — a wall-clock reading, optionally with a UTC offset.
//! - [`HebrewDateResult`] — everything known about one converted moment.
//! - [`HebrewDate`] / [`HebrewMonth`] — validated Hebrew calendar dates.
//! - [`Nightfall`] — the day-boundary rule and its [`Rollover`] policy.
//! - [`CycleInfo`] — position in the 19-year intercalation cycle.
//! - [`Molad`] — the mean lunar conjunction of a month.
//!
//! # Example
//!
//! ```
//! use luach::{convert_to_hebrew_date, CivilMoment};
//!
//! let moment = CivilMoment::parse("1988-01-04T13:25:00+02:00").unwrap();
//! let result = convert_to_hebrew_date(&moment, "Asia/Jerusalem").unwrap();
//! assert_eq!(result.adjusted_date().to_string(), "14 Tevet 5748");
//! assert_eq!(result.planet().hebrew_name(), "Levanah");
//! ```
//!
//! # Features
//!
//! | Feature | Effect |
//! |---------|--------|
//! | `serde` | `Serialize` for results, `Serialize`/`Deserialize` for dates and configuration |

mod calendar;
mod config;
mod convert;
mod cycle;
mod error;
mod molad;
mod nightfall;
mod weekday;
mod zone;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::{
    days_in_month, days_in_year, rosh_hashanah, Arithmetic, HebrewCalendar, HebrewDate,
    HebrewMonth, YearKind, HEBREW_EPOCH,
};
pub use config::{ConverterConfig, NightfallConfig};
pub use convert::{convert_to_hebrew_date, HebrewDateConverter, HebrewDateResult};
pub use cycle::{
    intercalation_cycle_info, is_hebrew_leap_year, months_in_year, year_in_cycle, CycleInfo,
    CYCLE_YEARS, LEAP_YEARS_IN_CYCLE,
};
pub use error::ConvertError;
pub use molad::{molad, Molad, MoladNotation, MEAN_SYNODIC_MONTH, PARTS_PER_HOUR};
pub use nightfall::{Adjustment, Nightfall, Rollover};
pub use weekday::{day_attributes, weekday_attributes, DayAttributes, Planet, Sefira};
pub use zone::{
    checked_to_jerusalem, is_valid_timezone, parse_timezone, to_jerusalem, CivilMoment, JERUSALEM,
};

/// Library version, as published.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
