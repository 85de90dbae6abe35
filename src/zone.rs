// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil moments and the Jerusalem reference frame.
//!
//! A [`CivilMoment`] is what a caller types into a form: a Gregorian
//! wall-clock reading, optionally with an explicit UTC offset.  It only
//! becomes an instant once paired with an IANA zone through
//! [`CivilMoment::resolve`]; the instant is then re-expressed in
//! `Asia/Jerusalem` wall-clock time by [`to_jerusalem`].
//!
//! The zone database is compiled in by `chrono-tz`, so resolution is a pure
//! function of the inputs.

use chrono::{
    DateTime, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta,
    TimeZone, Timelike,
};
use chrono_tz::Tz;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ConvertError;

/// The reference zone for the Hebrew day boundary.
pub const JERUSALEM: Tz = chrono_tz::Asia::Jerusalem;

/// Naive layouts accepted by [`CivilMoment::parse`], most specific first.
const NAIVE_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Resolve an IANA zone name.
///
/// # Errors
///
/// Returns [`ConvertError::InvalidTimezone`] if the name is not in the
/// database. Names are matched exactly.
pub fn parse_timezone(name: &str) -> Result<Tz, ConvertError> {
    name.parse::<Tz>()
        .map_err(|_| ConvertError::InvalidTimezone {
            name: name.to_owned(),
        })
}

/// Whether `name` is a known IANA zone. Never fails.
///
/// ```
/// assert!(luach::is_valid_timezone("Asia/Jerusalem"));
/// assert!(!luach::is_valid_timezone("Not/AZone"));
/// ```
pub fn is_valid_timezone(name: &str) -> bool {
    parse_timezone(name).is_ok()
}

/// The same instant on Jerusalem's wall clock.
///
/// Near the ends of chrono's range the wall-clock reading may not be
/// representable; [`checked_to_jerusalem`] rejects those instants.
#[inline]
pub fn to_jerusalem<Z: TimeZone>(instant: &DateTime<Z>) -> DateTime<Tz> {
    instant.with_timezone(&JERUSALEM)
}

/// [`to_jerusalem`], failing when the Jerusalem wall-clock reading falls
/// outside chrono's date range.
///
/// # Errors
///
/// Returns [`ConvertError::InvalidInstant`] for such an instant.
pub fn checked_to_jerusalem<Z: TimeZone>(
    instant: &DateTime<Z>,
) -> Result<DateTime<Tz>, ConvertError> {
    let jerusalem = to_jerusalem(instant);
    match local_reading(instant.naive_utc(), jerusalem.offset().fix()) {
        Some(_) => Ok(jerusalem),
        None => Err(out_of_range(instant.naive_utc())),
    }
}

/// Wall-clock reading of a UTC instant under `offset`, if representable.
fn local_reading(utc: NaiveDateTime, offset: FixedOffset) -> Option<NaiveDateTime> {
    utc.checked_add_signed(TimeDelta::seconds(i64::from(offset.local_minus_utc())))
}

fn out_of_range(utc: NaiveDateTime) -> ConvertError {
    ConvertError::instant(
        format!("{}Z", utc.format("%Y-%m-%dT%H:%M:%S")),
        "outside the supported range",
    )
}

/// Split a trailing `±HH:MM:SS` offset, the form `FixedOffset` displays
/// when the offset has a seconds part (local mean time, before 1918 in
/// Jerusalem).
fn split_seconds_offset(text: &str) -> Option<(&str, FixedOffset)> {
    let at = text.len().checked_sub(9)?;
    let (head, tail) = (text.get(..at)?, text.get(at..)?);
    let sign = match tail.as_bytes().first()? {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let clock = NaiveTime::parse_from_str(&tail[1..], "%H:%M:%S").ok()?;
    let seconds = i32::try_from(clock.num_seconds_from_midnight()).ok()?;
    Some((head, FixedOffset::east_opt(sign * seconds)?))
}

fn parse_naive(text: &str) -> Option<NaiveDateTime> {
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
}

/// A Gregorian wall-clock reading, optionally pinned by a UTC offset.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CivilMoment {
    local: NaiveDateTime,
    offset: Option<FixedOffset>,
}

impl CivilMoment {
    /// A wall-clock reading to be interpreted in the origin zone.
    #[inline]
    pub const fn new(local: NaiveDateTime) -> Self {
        Self {
            local,
            offset: None,
        }
    }

    /// An exact instant given with its UTC offset.
    pub fn with_offset(datetime: DateTime<FixedOffset>) -> Self {
        Self {
            local: datetime.naive_local(),
            offset: Some(*datetime.offset()),
        }
    }

    /// The moment of a zoned instant, keeping its offset.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidInstant`] when the instant's own
    /// wall-clock reading falls outside chrono's date range.
    pub fn from_zoned<Z: TimeZone>(instant: &DateTime<Z>) -> Result<Self, ConvertError> {
        let offset = instant.offset().fix();
        let local = local_reading(instant.naive_utc(), offset)
            .ok_or_else(|| out_of_range(instant.naive_utc()))?;
        Ok(Self {
            local,
            offset: Some(offset),
        })
    }

    /// Build from calendar and clock components.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidInstant`] if any component is out of
    /// range (month 13, 30 February, hour 24, ...).
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, ConvertError> {
        let describe =
            || format!("{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02}");
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| ConvertError::instant(describe(), "no such calendar date"))?;
        let time = NaiveTime::from_hms_opt(hour, minute, second)
            .ok_or_else(|| ConvertError::instant(describe(), "no such clock time"))?;
        Ok(Self::new(date.and_time(time)))
    }

    /// Parse RFC 3339 (`1988-01-04T13:25:00+02:00`), a naive date-time
    /// (`1988-01-04T13:25`, `1988-01-04 13:25:00`) or a bare date
    /// (`1988-01-04`, meaning local midnight).
    ///
    /// An offset with seconds (`1900-01-01T12:00:00+02:20:40`) is also
    /// accepted, so every displayed moment parses back.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidInstant`] if no layout matches.
    pub fn parse(input: &str) -> Result<Self, ConvertError> {
        let text = input.trim();
        if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
            return Ok(Self::with_offset(datetime));
        }
        if let Some((head, offset)) = split_seconds_offset(text) {
            if let Some(local) = parse_naive(head) {
                return Ok(Self {
                    local,
                    offset: Some(offset),
                });
            }
        }
        if let Some(local) = parse_naive(text) {
            return Ok(Self::new(local));
        }
        match NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            Ok(date) => Ok(Self::new(date.and_time(NaiveTime::default()))),
            Err(err) => Err(ConvertError::instant(input, err.to_string())),
        }
    }

    /// The wall-clock reading as given.
    #[inline]
    pub const fn local(&self) -> NaiveDateTime {
        self.local
    }

    /// The explicit offset, if one was given.
    #[inline]
    pub const fn offset(&self) -> Option<FixedOffset> {
        self.offset
    }

    /// Pin this moment to an instant in `zone`.
    ///
    /// With an explicit offset the instant is fixed and `zone` only
    /// chooses the representation.  Otherwise the reading is taken as
    /// `zone` wall-clock time: a repeated reading (DST fold) resolves to the
    /// earlier instant.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidInstant`] when the reading falls in a
    /// DST gap and never occurs in `zone`.
    pub fn resolve(&self, zone: &Tz) -> Result<DateTime<Tz>, ConvertError> {
        if let Some(offset) = self.offset {
            return match offset.from_local_datetime(&self.local) {
                LocalResult::Single(datetime) => Ok(datetime.with_timezone(zone)),
                _ => Err(ConvertError::instant(
                    self.to_string(),
                    "offset date-time out of range",
                )),
            };
        }
        zone.from_local_datetime(&self.local)
            .earliest()
            .ok_or_else(|| {
                ConvertError::instant(
                    self.to_string(),
                    format!("local time does not exist in {}", zone.name()),
                )
            })
    }
}

impl From<NaiveDateTime> for CivilMoment {
    fn from(local: NaiveDateTime) -> Self {
        Self::new(local)
    }
}

impl From<DateTime<FixedOffset>> for CivilMoment {
    fn from(datetime: DateTime<FixedOffset>) -> Self {
        Self::with_offset(datetime)
    }
}

impl FromStr for CivilMoment {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CivilMoment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.local.format("%Y-%m-%dT%H:%M:%S%.f"))?;
        match self.offset {
            Some(offset) => write!(f, "{offset}"),
            None => Ok(()),
        }
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for CivilMoment {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for CivilMoment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        CivilMoment::parse(&text).map_err(serde::de::Error::custom)
    }
}
