// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Molad — the calendrical mean lunar conjunction.
//!
//! The calendar counts time in *parts* (chalakim): 1080 per hour, 25 920 per
//! day.  Every molad lies a whole number of mean months (29 d 12 h 793 p)
//! after the epoch molad *BaHaRaD* (Monday, 5 h 204 p after 18:00).  All
//! arithmetic here is exact in integer parts; [`Molad::moment`] exposes the
//! result as a fractional fixed day for callers that work with `qtty`
//! quantities.
//!
//! Times are **Jerusalem mean time**, not civil (zone) time.
//!
//! ```
//! use luach::{molad, HebrewMonth};
//!
//! let m = molad(5784, HebrewMonth::Tishrei).unwrap();
//! assert_eq!(m.to_string(), "Friday 11h 882p");
//! assert_eq!(m.time().to_string(), "05:49:00");
//! ```

use chrono::{Duration, NaiveDate, NaiveTime, Weekday};
use qtty::Days;
use std::fmt;

use crate::calendar::{
    date_from_fixed, months_elapsed, HebrewMonth, HEBREW_EPOCH, PARTS_PER_DAY, PARTS_PER_MONTH,
};
use crate::cycle::is_hebrew_leap_year;
use crate::error::ConvertError;

/// Parts in one hour.
pub const PARTS_PER_HOUR: i64 = 1_080;

/// Mean synodic month used by the calendar, in days.
pub const MEAN_SYNODIC_MONTH: Days = Days::new(PARTS_PER_MONTH as f64 / PARTS_PER_DAY as f64);

/// Offset of the epoch molad from midnight opening the epoch day, in parts
/// (it fell 876 parts before that midnight).
const EPOCH_MOLAD_PARTS: i64 = -876;

/// Offset between the traditional 18:00 day start and midnight, in parts.
const EVENING_PARTS: i64 = 6 * PARTS_PER_HOUR;

const WEEK: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

#[inline]
fn weekday_from_fixed(fixed: i64) -> Weekday {
    WEEK[fixed.rem_euclid(7) as usize]
}

/// The molad of a Hebrew month.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Molad {
    year: i32,
    month: HebrewMonth,
    months_elapsed: i64,
    /// Parts since midnight opening the epoch day.
    parts: i64,
}

/// Traditional notation: weekday, hours after 18:00 of the preceding
/// evening, and remaining parts.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MoladNotation {
    pub weekday: Weekday,
    pub hours: u8,
    pub chalakim: u16,
}

/// Molad of `month` in `hebrew_year`.
///
/// # Errors
///
/// Returns [`ConvertError::InvalidHebrewDate`] for Adar II of a common year.
pub fn molad(hebrew_year: i32, month: HebrewMonth) -> Result<Molad, ConvertError> {
    if month == HebrewMonth::AdarII && !is_hebrew_leap_year(hebrew_year) {
        return Err(ConvertError::InvalidHebrewDate {
            year: hebrew_year,
            month: month.number(),
            day: 1,
        });
    }
    // Months before Tishrei belong to the span counted up to the next new year.
    let counted_year = if month < HebrewMonth::Tishrei {
        i64::from(hebrew_year) + 1
    } else {
        i64::from(hebrew_year)
    };
    let elapsed = i64::from(month.number()) - i64::from(HebrewMonth::Tishrei.number())
        + months_elapsed(counted_year);
    Ok(Molad {
        year: hebrew_year,
        month,
        months_elapsed: elapsed,
        parts: EPOCH_MOLAD_PARTS + elapsed * PARTS_PER_MONTH,
    })
}

impl Molad {
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> HebrewMonth {
        self.month
    }

    /// Mean months since the epoch molad.
    #[inline]
    pub const fn months_elapsed(&self) -> i64 {
        self.months_elapsed
    }

    /// The molad as a fractional fixed day number.
    pub fn moment(&self) -> Days {
        Days::new(HEBREW_EPOCH as f64 + self.parts as f64 / PARTS_PER_DAY as f64)
    }

    /// Civil date (midnight-based) of the molad; `None` outside chrono's range.
    pub fn date(&self) -> Option<NaiveDate> {
        date_from_fixed(self.fixed_day())
    }

    /// Time of day of the molad, midnight-based, to the millisecond.
    pub fn time(&self) -> NaiveTime {
        let into_day = self.parts.rem_euclid(PARTS_PER_DAY);
        let millis = into_day * 10_000 / 3;
        NaiveTime::default()
            .overflowing_add_signed(Duration::milliseconds(millis))
            .0
    }

    /// Weekday of the civil (midnight-based) date.
    pub fn weekday(&self) -> Weekday {
        weekday_from_fixed(self.fixed_day())
    }

    /// Traditional notation counted from 18:00 of the preceding evening.
    pub fn notation(&self) -> MoladNotation {
        let shifted = self.parts + EVENING_PARTS;
        let into_day = shifted.rem_euclid(PARTS_PER_DAY);
        MoladNotation {
            weekday: weekday_from_fixed(HEBREW_EPOCH + shifted.div_euclid(PARTS_PER_DAY)),
            hours: (into_day / PARTS_PER_HOUR) as u8,
            chalakim: (into_day % PARTS_PER_HOUR) as u16,
        }
    }

    #[inline]
    fn fixed_day(&self) -> i64 {
        HEBREW_EPOCH + self.parts.div_euclid(PARTS_PER_DAY)
    }
}

impl fmt::Display for Molad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.notation();
        write!(f, "{} {}h {}p", n.weekday_name(), n.hours, n.chalakim)
    }
}

impl MoladNotation {
    fn weekday_name(&self) -> &'static str {
        crate::weekday::weekday_attributes(self.weekday).day_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baharad() {
        let m = molad(1, HebrewMonth::Tishrei).unwrap();
        assert_eq!(m.months_elapsed(), 0);
        let n = m.notation();
        assert_eq!(n.weekday, Weekday::Mon);
        assert_eq!(n.hours, 5);
        assert_eq!(n.chalakim, 204);
        // 23:11:20 on the Sunday evening before the epoch day
        assert_eq!(m.weekday(), Weekday::Sun);
        assert_eq!(m.time(), NaiveTime::from_hms_opt(23, 11, 20).unwrap());
    }

    #[test]
    fn test_tishrei_5784() {
        let m = molad(5784, HebrewMonth::Tishrei).unwrap();
        assert_eq!(m.date(), NaiveDate::from_ymd_opt(2023, 9, 15));
        assert_eq!(m.weekday(), Weekday::Fri);
        assert_eq!(m.time(), NaiveTime::from_hms_opt(5, 49, 0).unwrap());
        let n = m.notation();
        assert_eq!((n.weekday, n.hours, n.chalakim), (Weekday::Fri, 11, 882));
    }

    #[test]
    fn test_tishrei_5785_fractional_parts() {
        let m = molad(5785, HebrewMonth::Tishrei).unwrap();
        assert_eq!(m.date(), NaiveDate::from_ymd_opt(2024, 10, 3));
        // 3:21 and 13 chalakim; 13 parts = 43⅓ s
        assert_eq!(
            m.time(),
            NaiveTime::from_hms_milli_opt(3, 21, 43, 333).unwrap()
        );
    }

    #[test]
    fn test_consecutive_molads_one_mean_month_apart() {
        let tishrei = molad(5784, HebrewMonth::Tishrei).unwrap();
        let cheshvan = molad(5784, HebrewMonth::Cheshvan).unwrap();
        assert_eq!(cheshvan.months_elapsed() - tishrei.months_elapsed(), 1);
        let gap = (cheshvan.moment() - tishrei.moment()).value();
        assert!((gap - MEAN_SYNODIC_MONTH.value()).abs() < 1e-6);
        assert!((MEAN_SYNODIC_MONTH.value() - 29.530_594).abs() < 1e-6);
    }

    #[test]
    fn test_leap_year_month_order() {
        let adar_i = molad(5784, HebrewMonth::Adar).unwrap();
        let adar_ii = molad(5784, HebrewMonth::AdarII).unwrap();
        let nisan = molad(5784, HebrewMonth::Nisan).unwrap();
        assert_eq!(adar_ii.months_elapsed(), adar_i.months_elapsed() + 1);
        assert_eq!(nisan.months_elapsed(), adar_ii.months_elapsed() + 1);
    }

    #[test]
    fn test_adar_ii_in_common_year_rejected() {
        assert!(molad(5783, HebrewMonth::AdarII).is_err());
    }
}
