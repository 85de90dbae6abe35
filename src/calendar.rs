// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Hebrew calendar arithmetic.
//!
//! Dates are bridged through a **fixed day number** (Rata Die, day 1 =
//! 0001-01-01 proleptic Gregorian), which is exactly what
//! [`chrono::Datelike::num_days_from_ce`] returns, so the Gregorian side is
//! delegated entirely to `chrono`.
//!
//! The Hebrew side follows the classical rules:
//!
//! 1. Leap years follow the 19-year cycle (see [`crate::cycle`]).
//! 2. The new year is placed by the *molad* of Tishrei, counted in parts
//!    (1 hour = 1080 parts) from the epoch molad.
//! 3. Rosh Hashanah is postponed so that it never falls on Sunday,
//!    Wednesday or Friday, and so that no year has an impossible length.
//! 4. Cheshvan and Kislev absorb the resulting 353/354/355-day (or
//!    383/384/385-day) year lengths.
//!
//! The conversion backend is pluggable through [`HebrewCalendar`]; the
//! bundled [`Arithmetic`] marker implements the rules above.

use chrono::{Datelike, NaiveDate};
use std::fmt;
use tracing::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cycle::is_hebrew_leap_year;
use crate::error::ConvertError;

/// Fixed day number of 1 Tishrei AM 1 (Monday, 7 October 3761 BCE, Julian).
pub const HEBREW_EPOCH: i64 = -1_373_427;

/// Parts (chalakim) in one day.
pub(crate) const PARTS_PER_DAY: i64 = 25_920;

/// Parts in one mean lunar month: 29 d 12 h 793 p.
pub(crate) const PARTS_PER_MONTH: i64 = 29 * PARTS_PER_DAY + 13_753;

// ═══════════════════════════════════════════════════════════════════════════
// Months
// ═══════════════════════════════════════════════════════════════════════════

/// A Hebrew month, numbered Nisan = 1 .. Adar II = 13.
///
/// The religious year starts at Nisan while the civil year (and the year
/// number) changes at Tishrei (7).  [`HebrewMonth::Adar`] is the twelfth
/// month; in leap years it is called *Adar I* and is followed by
/// [`HebrewMonth::AdarII`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum HebrewMonth {
    Nisan = 1,
    Iyar = 2,
    Sivan = 3,
    Tammuz = 4,
    Av = 5,
    Elul = 6,
    Tishrei = 7,
    Cheshvan = 8,
    Kislev = 9,
    Tevet = 10,
    Shevat = 11,
    Adar = 12,
    AdarII = 13,
}

impl HebrewMonth {
    const ALL: [HebrewMonth; 13] = [
        HebrewMonth::Nisan,
        HebrewMonth::Iyar,
        HebrewMonth::Sivan,
        HebrewMonth::Tammuz,
        HebrewMonth::Av,
        HebrewMonth::Elul,
        HebrewMonth::Tishrei,
        HebrewMonth::Cheshvan,
        HebrewMonth::Kislev,
        HebrewMonth::Tevet,
        HebrewMonth::Shevat,
        HebrewMonth::Adar,
        HebrewMonth::AdarII,
    ];

    /// Month number, Nisan = 1.
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Month for a number in `1..=13`.
    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.get(usize::from(number).checked_sub(1)?).copied()
    }

    /// Display name of the month in a year of the given kind.
    ///
    /// Only the twelfth month changes name: *Adar* in common years,
    /// *Adar I* in leap years.
    pub const fn name(self, leap_year: bool) -> &'static str {
        match self {
            HebrewMonth::Nisan => "Nisan",
            HebrewMonth::Iyar => "Iyar",
            HebrewMonth::Sivan => "Sivan",
            HebrewMonth::Tammuz => "Tammuz",
            HebrewMonth::Av => "Av",
            HebrewMonth::Elul => "Elul",
            HebrewMonth::Tishrei => "Tishrei",
            HebrewMonth::Cheshvan => "Cheshvan",
            HebrewMonth::Kislev => "Kislev",
            HebrewMonth::Tevet => "Tevet",
            HebrewMonth::Shevat => "Shevat",
            HebrewMonth::Adar if leap_year => "Adar I",
            HebrewMonth::Adar => "Adar",
            HebrewMonth::AdarII => "Adar II",
        }
    }

    /// The month after `self` within the same Hebrew year, if any.
    ///
    /// Elul is the last month of the year number; Adar (common year) or
    /// Adar II (leap year) is followed by Nisan.
    fn next_in_year(self, leap_year: bool) -> Option<Self> {
        match self {
            HebrewMonth::Elul => None,
            HebrewMonth::Adar if !leap_year => Some(HebrewMonth::Nisan),
            HebrewMonth::AdarII => Some(HebrewMonth::Nisan),
            other => Self::from_number(other.number() + 1),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Year structure
// ═══════════════════════════════════════════════════════════════════════════

/// Length class of a Hebrew year.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum YearKind {
    /// 353 or 383 days: Cheshvan and Kislev both have 29 days.
    Deficient,
    /// 354 or 384 days: Cheshvan 29, Kislev 30.
    Regular,
    /// 355 or 385 days: Cheshvan and Kislev both have 30 days.
    Complete,
}

impl YearKind {
    /// Classification of `hebrew_year`.
    pub fn of(hebrew_year: i32) -> Self {
        match days_in_year(hebrew_year) % 10 {
            3 => YearKind::Deficient,
            5 => YearKind::Complete,
            _ => YearKind::Regular,
        }
    }
}

#[inline]
pub(crate) fn months_elapsed(year: i64) -> i64 {
    (235 * year - 234).div_euclid(19)
}

/// Days from the epoch to the (provisional) new year, with the
/// lo-ADU-Rosh postponement applied.
fn elapsed_days(year: i64) -> i64 {
    let months = months_elapsed(year);
    let parts = 12_084 + 13_753 * months;
    let day = 29 * months + parts.div_euclid(PARTS_PER_DAY);
    if (3 * (day + 1)).rem_euclid(7) < 3 {
        day + 1
    } else {
        day
    }
}

/// Extra postponement keeping every year length within 353..=355 / 383..=385.
fn year_length_correction(year: i64) -> i64 {
    let ny0 = elapsed_days(year - 1);
    let ny1 = elapsed_days(year);
    let ny2 = elapsed_days(year + 1);
    if ny2 - ny1 == 356 {
        2
    } else if ny1 - ny0 == 382 {
        1
    } else {
        0
    }
}

/// Fixed day number of 1 Tishrei of `year`.
fn new_year(year: i64) -> i64 {
    HEBREW_EPOCH + elapsed_days(year) + year_length_correction(year)
}

/// Number of days in `hebrew_year`.
pub fn days_in_year(hebrew_year: i32) -> u16 {
    let year = i64::from(hebrew_year);
    (new_year(year + 1) - new_year(year)) as u16
}

/// Number of days in `month` of `hebrew_year` (29 or 30).
///
/// Adar II in a common year has no days; it is reported as 0.
pub fn days_in_month(hebrew_year: i32, month: HebrewMonth) -> u8 {
    let leap = is_hebrew_leap_year(hebrew_year);
    match month {
        HebrewMonth::AdarII if !leap => 0,
        HebrewMonth::Iyar
        | HebrewMonth::Tammuz
        | HebrewMonth::Elul
        | HebrewMonth::Tevet
        | HebrewMonth::AdarII => 29,
        HebrewMonth::Adar if !leap => 29,
        HebrewMonth::Cheshvan if YearKind::of(hebrew_year) != YearKind::Complete => 29,
        HebrewMonth::Kislev if YearKind::of(hebrew_year) == YearKind::Deficient => 29,
        _ => 30,
    }
}

/// Gregorian date of Rosh Hashanah (1 Tishrei) opening `hebrew_year`.
///
/// Returns `None` outside chrono's representable range.
pub fn rosh_hashanah(hebrew_year: i32) -> Option<NaiveDate> {
    date_from_fixed(new_year(i64::from(hebrew_year)))
}

#[inline]
fn fixed_from_date(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce())
}

#[inline]
pub(crate) fn date_from_fixed(fixed: i64) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(i32::try_from(fixed).ok()?)
}

fn fixed_from_hebrew(year: i32, month: HebrewMonth, day: u8) -> i64 {
    let leap = is_hebrew_leap_year(year);
    let mut fixed = new_year(i64::from(year)) + i64::from(day) - 1;
    let mut cursor = HebrewMonth::Tishrei;
    while cursor != month {
        fixed += i64::from(days_in_month(year, cursor));
        cursor = match cursor.next_in_year(leap) {
            Some(next) => next,
            None => break,
        };
    }
    fixed
}

fn hebrew_from_fixed(fixed: i64) -> HebrewDate {
    let approx = ((fixed - HEBREW_EPOCH) * 98_496).div_euclid(35_975_351) + 1;
    let mut year = approx - 1;
    while new_year(year + 1) <= fixed {
        year += 1;
    }
    let year = year as i32;
    let leap = is_hebrew_leap_year(year);

    let mut month = if fixed < fixed_from_hebrew(year, HebrewMonth::Nisan, 1) {
        HebrewMonth::Tishrei
    } else {
        HebrewMonth::Nisan
    };
    while fixed > fixed_from_hebrew(year, month, days_in_month(year, month)) {
        match month.next_in_year(leap) {
            Some(next) => month = next,
            None => break,
        }
    }
    let day = (fixed - fixed_from_hebrew(year, month, 1) + 1) as u8;
    trace!(fixed, year, month = month.number(), day, "located hebrew date");
    HebrewDate::new_unchecked(year, month, day)
}

// ═══════════════════════════════════════════════════════════════════════════
// HebrewDate
// ═══════════════════════════════════════════════════════════════════════════

/// A validated Hebrew calendar date.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct HebrewDate {
    year: i32,
    month: HebrewMonth,
    day: u8,
}

impl HebrewDate {
    /// Creates a Hebrew date, checking that it exists.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidHebrewDate`] when `day` is zero or
    /// beyond the month's length, or when `month` is Adar II in a common
    /// year.
    pub fn new(year: i32, month: HebrewMonth, day: u8) -> Result<Self, ConvertError> {
        if day == 0 || day > days_in_month(year, month) {
            return Err(ConvertError::InvalidHebrewDate {
                year,
                month: month.number(),
                day,
            });
        }
        Ok(Self::new_unchecked(year, month, day))
    }

    pub(crate) const fn new_unchecked(year: i32, month: HebrewMonth, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Year, anno mundi.
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month, numbered from Nisan.
    #[inline]
    pub const fn month(&self) -> HebrewMonth {
        self.month
    }

    /// Day of month, `1..=30`.
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Month name as displayed in this date's year.
    pub fn month_name(&self) -> &'static str {
        self.month.name(is_hebrew_leap_year(self.year))
    }

    /// Whether this date's year has thirteen months.
    pub fn is_leap_year(&self) -> bool {
        is_hebrew_leap_year(self.year)
    }

    /// The following calendar day, rolling over month and year ends.
    pub fn succ(&self) -> Self {
        if self.day < days_in_month(self.year, self.month) {
            return Self::new_unchecked(self.year, self.month, self.day + 1);
        }
        match self.month.next_in_year(self.is_leap_year()) {
            Some(next) => Self::new_unchecked(self.year, next, 1),
            None => Self::new_unchecked(self.year + 1, HebrewMonth::Tishrei, 1),
        }
    }

    /// Gregorian date through the [`Arithmetic`] backend.
    pub fn to_gregorian(&self) -> Option<NaiveDate> {
        Arithmetic::from_hebrew(*self)
    }
}

impl fmt::Display for HebrewDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.day, self.month_name(), self.year)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for HebrewDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            year: i32,
            month: HebrewMonth,
            day: u8,
        }

        let raw = Raw::deserialize(deserializer)?;
        HebrewDate::new(raw.year, raw.month, raw.day).map_err(serde::de::Error::custom)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Pluggable backend
// ═══════════════════════════════════════════════════════════════════════════

/// Marker trait for Gregorian ↔ Hebrew conversion backends.
///
/// The converter only needs a date-to-date mapping, so any correct
/// implementation (a port, a binding, a lookup table for a fixed range) can
/// stand behind it.
pub trait HebrewCalendar: Copy + Clone + fmt::Debug + Default + Send + Sync + 'static {
    /// Human-readable backend label.
    const LABEL: &'static str;

    /// Hebrew date for a civil (proleptic Gregorian) date.
    fn to_hebrew(date: NaiveDate) -> HebrewDate;

    /// Civil date for a Hebrew date; `None` outside chrono's range.
    fn from_hebrew(date: HebrewDate) -> Option<NaiveDate>;
}

/// Rule-based backend: molad arithmetic plus postponements.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Arithmetic;

impl HebrewCalendar for Arithmetic {
    const LABEL: &'static str = "arithmetic";

    #[inline]
    fn to_hebrew(date: NaiveDate) -> HebrewDate {
        hebrew_from_fixed(fixed_from_date(date))
    }

    #[inline]
    fn from_hebrew(date: HebrewDate) -> Option<NaiveDate> {
        date_from_fixed(fixed_from_hebrew(date.year, date.month, date.day))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
