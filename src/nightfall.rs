// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Nightfall day boundary.
//!
//! The Hebrew day starts at nightfall.  Instead of computing sunset, the
//! boundary is a fixed Jerusalem clock time, 19:00 unless configured
//! otherwise.  A moment at or after the threshold belongs to the next Hebrew
//! day.
//!
//! Two rollover policies decide what "next day" means for the reported day
//! number:
//!
//! | Policy | 29 Adar 5783, 20:00 | 14 Tevet 5748, 21:25 |
//! |--------|---------------------|----------------------|
//! | [`Rollover::Calendar`] | 1 (Nisan) | 15 |
//! | [`Rollover::DayNumber`] | 30 | 15 |
//!
//! The full adjusted date is always calendar-correct.

use chrono::{NaiveDate, NaiveTime, Timelike};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::calendar::{HebrewCalendar, HebrewDate};
use crate::error::ConvertError;

/// How the adjusted day number treats month ends.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Rollover {
    /// The day number of the next calendar day, rolling months and years.
    #[default]
    Calendar,
    /// The raw day number plus one, without month rollover.
    DayNumber,
}

/// Outcome of applying the nightfall rule to one moment.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Adjustment {
    /// The Jerusalem clock time is at or past the threshold.
    pub after_nightfall: bool,
    /// Day number under the configured [`Rollover`].
    pub day: u8,
    /// Calendar-correct Hebrew date in effect.
    pub date: HebrewDate,
}

/// Fixed-clock nightfall threshold.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Nightfall {
    hour: u32,
    minute: u32,
    rollover: Rollover,
}

impl Default for Nightfall {
    fn default() -> Self {
        Self {
            hour: Self::DEFAULT_HOUR,
            minute: 0,
            rollover: Rollover::Calendar,
        }
    }
}

impl Nightfall {
    /// Default threshold hour, Jerusalem time.
    pub const DEFAULT_HOUR: u32 = 19;

    /// Threshold at `hour:minute`.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidNightfall`] outside `00:00..=23:59`.
    pub fn new(hour: u32, minute: u32) -> Result<Self, ConvertError> {
        if hour > 23 || minute > 59 {
            return Err(ConvertError::InvalidNightfall { hour, minute });
        }
        Ok(Self {
            hour,
            minute,
            rollover: Rollover::default(),
        })
    }

    /// The same threshold under another [`Rollover`] policy.
    #[must_use]
    pub const fn with_rollover(mut self, rollover: Rollover) -> Self {
        self.rollover = rollover;
        self
    }

    /// Threshold hour, Jerusalem clock.
    #[inline]
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    /// Threshold minute.
    #[inline]
    pub const fn minute(&self) -> u32 {
        self.minute
    }

    /// Policy for the adjusted day number at month ends.
    #[inline]
    pub const fn rollover(&self) -> Rollover {
        self.rollover
    }

    /// Whether a Jerusalem clock time is at or past the threshold.
    #[inline]
    pub fn is_after(&self, time: NaiveTime) -> bool {
        (time.hour(), time.minute()) >= (self.hour, self.minute)
    }

    /// Apply the rule to the Hebrew date of `civil_date` at `time`.
    ///
    /// `hebrew` must be the backend's date for `civil_date`; it is never
    /// modified.  After nightfall the calendar-correct date is the backend's
    /// date for the following civil day.
    pub fn adjust<C: HebrewCalendar>(
        &self,
        civil_date: NaiveDate,
        time: NaiveTime,
        hebrew: HebrewDate,
    ) -> Adjustment {
        if !self.is_after(time) {
            return Adjustment {
                after_nightfall: false,
                day: hebrew.day(),
                date: hebrew,
            };
        }
        let date = civil_date
            .succ_opt()
            .map_or_else(|| hebrew.succ(), C::to_hebrew);
        let day = match self.rollover {
            Rollover::Calendar => date.day(),
            Rollover::DayNumber => hebrew.day() + 1,
        };
        Adjustment {
            after_nightfall: true,
            day,
            date,
        }
    }
}
