// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Static weekday attributes.
//!
//! Each day of the week is paired with the classical planet that rules it and
//! the Sefira of the corresponding day of creation.  The table is fixed data,
//! indexed by days from Sunday:
//!
//! | # | Day | Planet | Sefira |
//! |---|-----|--------|--------|
//! | 0 | Sunday | Sun | Chesed |
//! | 1 | Monday | Moon | Gevurah |
//! | 2 | Tuesday | Mars | Tiferet |
//! | 3 | Wednesday | Mercury | Netzach |
//! | 4 | Thursday | Jupiter | Hod |
//! | 5 | Friday | Venus | Yesod |
//! | 6 | Saturday | Saturn | Malchut |

use chrono::Weekday;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the seven classical planets.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Planet {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
}

impl Planet {
    /// English name of the planet.
    pub const fn name(self) -> &'static str {
        match self {
            Planet::Sun => "Sun",
            Planet::Moon => "Moon",
            Planet::Mars => "Mars",
            Planet::Mercury => "Mercury",
            Planet::Jupiter => "Jupiter",
            Planet::Venus => "Venus",
            Planet::Saturn => "Saturn",
        }
    }

    /// Transliterated Hebrew name.
    pub const fn hebrew_name(self) -> &'static str {
        match self {
            Planet::Sun => "Chamah",
            Planet::Moon => "Levanah",
            Planet::Mars => "Ma'adim",
            Planet::Mercury => "Kochav",
            Planet::Jupiter => "Tzedek",
            Planet::Venus => "Nogah",
            Planet::Saturn => "Shabtai",
        }
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The seven lower Sefirot, one per day of creation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sefira {
    Chesed,
    Gevurah,
    Tiferet,
    Netzach,
    Hod,
    Yesod,
    Malchut,
}

impl Sefira {
    /// Transliterated name of the sefira.
    pub const fn name(self) -> &'static str {
        match self {
            Sefira::Chesed => "Chesed",
            Sefira::Gevurah => "Gevurah",
            Sefira::Tiferet => "Tiferet",
            Sefira::Netzach => "Netzach",
            Sefira::Hod => "Hod",
            Sefira::Yesod => "Yesod",
            Sefira::Malchut => "Malchut",
        }
    }
}

impl fmt::Display for Sefira {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Symbolic attributes of one weekday.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DayAttributes {
    pub weekday: Weekday,
    /// English display name.
    pub day_name: &'static str,
    /// Transliterated Hebrew name.
    pub hebrew_day_name: &'static str,
    pub planet: Planet,
    pub sefira: Sefira,
}

impl DayAttributes {
    /// Days from Sunday, `0..=6`.
    #[inline]
    pub fn index(&self) -> u8 {
        self.weekday.num_days_from_sunday() as u8
    }
}

#[rustfmt::skip]
const DAYS: [DayAttributes; 7] = [
    DayAttributes { weekday: Weekday::Sun, day_name: "Sunday",    hebrew_day_name: "Yom Rishon",   planet: Planet::Sun,     sefira: Sefira::Chesed },
    DayAttributes { weekday: Weekday::Mon, day_name: "Monday",    hebrew_day_name: "Yom Sheni",    planet: Planet::Moon,    sefira: Sefira::Gevurah },
    DayAttributes { weekday: Weekday::Tue, day_name: "Tuesday",   hebrew_day_name: "Yom Shlishi",  planet: Planet::Mars,    sefira: Sefira::Tiferet },
    DayAttributes { weekday: Weekday::Wed, day_name: "Wednesday", hebrew_day_name: "Yom Revi'i",   planet: Planet::Mercury, sefira: Sefira::Netzach },
    DayAttributes { weekday: Weekday::Thu, day_name: "Thursday",  hebrew_day_name: "Yom Chamishi", planet: Planet::Jupiter, sefira: Sefira::Hod },
    DayAttributes { weekday: Weekday::Fri, day_name: "Friday",    hebrew_day_name: "Yom Shishi",   planet: Planet::Venus,   sefira: Sefira::Yesod },
    DayAttributes { weekday: Weekday::Sat, day_name: "Saturday",  hebrew_day_name: "Shabbat",      planet: Planet::Saturn,  sefira: Sefira::Malchut },
];

/// Attributes for a day-from-Sunday index; `None` unless `index < 7`.
pub fn day_attributes(index: u8) -> Option<&'static DayAttributes> {
    DAYS.get(usize::from(index))
}

/// Attributes for a chrono weekday.
pub fn weekday_attributes(weekday: Weekday) -> &'static DayAttributes {
    &DAYS[weekday.num_days_from_sunday() as usize]
}
