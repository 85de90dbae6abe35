// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The 19-year intercalation (Metonic) cycle.
//!
//! Seven years of every nineteen receive a thirteenth month (Adar II). The
//! position of a year inside its cycle depends on the year number alone, so
//! everything here is a pure function of an anno-mundi year.
//!
//! | Cycle years | Kind |
//! |-------------|------|
//! | 3, 6, 8, 11, 14, 17, 19 | leap (13 months) |
//! | all others | common (12 months) |

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Length of the intercalation cycle in years.
pub const CYCLE_YEARS: i32 = 19;

/// Positions (1-based) of the leap years inside a cycle.
pub const LEAP_YEARS_IN_CYCLE: [i32; 7] = [3, 6, 8, 11, 14, 17, 19];

/// Where a Hebrew year sits inside the 19-year cycle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CycleInfo {
    /// 1-based cycle counter; year 1 opens cycle 1.
    pub cycle_number: i32,
    /// Position inside the cycle, always in `1..=19`.
    pub year_in_cycle: i32,
    /// Whether the year carries Adar II.
    pub is_leap_year: bool,
    /// 13 for leap years, 12 otherwise.
    pub month_count: u8,
}

/// Position of `hebrew_year` inside its cycle, in `1..=19`.
///
/// Euclidean arithmetic keeps the result in range for years before the
/// epoch as well.
#[inline]
pub fn year_in_cycle(hebrew_year: i32) -> i32 {
    ((i64::from(hebrew_year) - 1).rem_euclid(i64::from(CYCLE_YEARS)) + 1) as i32
}

/// Whether `hebrew_year` is a leap (13-month) year.
///
/// ```
/// assert!(luach::is_hebrew_leap_year(5784));
/// assert!(!luach::is_hebrew_leap_year(5783));
/// ```
#[inline]
pub fn is_hebrew_leap_year(hebrew_year: i32) -> bool {
    LEAP_YEARS_IN_CYCLE.contains(&year_in_cycle(hebrew_year))
}

/// Number of months in `hebrew_year`.
#[inline]
pub fn months_in_year(hebrew_year: i32) -> u8 {
    if is_hebrew_leap_year(hebrew_year) {
        13
    } else {
        12
    }
}

/// Full cycle breakdown for `hebrew_year`.
pub fn intercalation_cycle_info(hebrew_year: i32) -> CycleInfo {
    let is_leap_year = is_hebrew_leap_year(hebrew_year);
    let elapsed = i64::from(hebrew_year) - 1;
    CycleInfo {
        cycle_number: (elapsed.div_euclid(i64::from(CYCLE_YEARS)) + 1) as i32,
        year_in_cycle: year_in_cycle(hebrew_year),
        is_leap_year,
        month_count: if is_leap_year { 13 } else { 12 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_5784_is_leap() {
        let info = intercalation_cycle_info(5784);
        assert_eq!(info.year_in_cycle, 8);
        assert!(info.is_leap_year);
        assert_eq!(info.month_count, 13);
        assert_eq!(info.cycle_number, 305);
    }

    #[test]
    fn test_5783_is_common() {
        let info = intercalation_cycle_info(5783);
        assert_eq!(info.year_in_cycle, 7);
        assert!(!info.is_leap_year);
        assert_eq!(info.month_count, 12);
    }

    #[test]
    fn test_cycle_boundaries() {
        assert_eq!(intercalation_cycle_info(1).year_in_cycle, 1);
        assert_eq!(intercalation_cycle_info(1).cycle_number, 1);
        assert_eq!(intercalation_cycle_info(19).year_in_cycle, 19);
        assert_eq!(intercalation_cycle_info(19).cycle_number, 1);
        assert_eq!(intercalation_cycle_info(20).year_in_cycle, 1);
        assert_eq!(intercalation_cycle_info(20).cycle_number, 2);
    }

    #[test]
    fn test_years_before_epoch_stay_in_range() {
        let info = intercalation_cycle_info(0);
        assert_eq!(info.year_in_cycle, 19);
        assert_eq!(info.cycle_number, 0);
        assert!(info.is_leap_year);
        assert_eq!(year_in_cycle(-18), 1);
    }

    #[test]
    fn test_seven_leap_years_per_cycle() {
        let leaps = (5701..=5719).filter(|&y| is_hebrew_leap_year(y)).count();
        assert_eq!(leaps, 7);
    }

    #[test]
    fn test_months_in_year() {
        assert_eq!(months_in_year(5784), 13);
        assert_eq!(months_in_year(5785), 12);
    }
}
