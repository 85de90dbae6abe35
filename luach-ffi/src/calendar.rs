// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! FFI bindings for calendar queries: leap years, the 19-year cycle, month
//! names, Hebrew → Gregorian dates and the molad.

use std::ffi::{c_char, CStr};

use chrono::{Datelike, Timelike, Weekday};
use luach::{intercalation_cycle_info, is_hebrew_leap_year, molad, HebrewDate, HebrewMonth};

use crate::catch_panic;
use crate::convert::LuachHebrewDate;
use crate::error::LuachStatus;

// ═══════════════════════════════════════════════════════════════════════════
// C-repr types
// ═══════════════════════════════════════════════════════════════════════════

/// Position of a year in the 19-year intercalation cycle.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LuachCycleInfo {
    pub cycle_number: i32,
    pub year_in_cycle: i32,
    pub is_leap_year: bool,
    pub month_count: u8,
}

/// Proleptic Gregorian calendar date.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LuachGregorianDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

/// Molad in traditional notation plus its midnight-based civil moment.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LuachMolad {
    /// Weekday from Sunday, `0..=6`, counted from 18:00 of the previous evening.
    pub weekday: u8,
    /// Hours after 18:00.
    pub hours: u8,
    /// Remaining parts, `0..1080`.
    pub chalakim: u16,
    /// Civil date of the molad.
    pub date: LuachGregorianDate,
    /// Milliseconds after midnight of `date`.
    pub millis_of_day: u32,
}

const MONTH_NAMES: [&CStr; 13] = [
    c"Nisan",
    c"Iyar",
    c"Sivan",
    c"Tammuz",
    c"Av",
    c"Elul",
    c"Tishrei",
    c"Cheshvan",
    c"Kislev",
    c"Tevet",
    c"Shevat",
    c"Adar",
    c"Adar II",
];

fn month_from(number: u8) -> Result<HebrewMonth, LuachStatus> {
    HebrewMonth::from_number(number).ok_or(LuachStatus::InvalidHebrewDate)
}

// ═══════════════════════════════════════════════════════════════════════════
// Year queries
// ═══════════════════════════════════════════════════════════════════════════

/// Whether a Hebrew year has thirteen months.
#[no_mangle]
pub extern "C" fn luach_is_leap_year(hebrew_year: i32) -> bool {
    is_hebrew_leap_year(hebrew_year)
}

/// Fill `out` with the cycle position of `hebrew_year`.
///
/// # Safety
/// `out` must be a valid, writable pointer to `LuachCycleInfo`.
#[no_mangle]
pub unsafe extern "C" fn luach_cycle_info(
    hebrew_year: i32,
    out: *mut LuachCycleInfo,
) -> LuachStatus {
    if out.is_null() {
        return LuachStatus::NullPointer;
    }
    let info = intercalation_cycle_info(hebrew_year);
    // SAFETY: `out` was checked for null and the caller guarantees it points to writable memory.
    unsafe {
        *out = LuachCycleInfo {
            cycle_number: info.cycle_number,
            year_in_cycle: info.year_in_cycle,
            is_leap_year: info.is_leap_year,
            month_count: info.month_count,
        };
    }
    LuachStatus::Ok
}

/// Static, NUL-terminated month name, or null for a number outside `1..=13`.
///
/// The twelfth month reads "Adar I" when `leap_year` is set.
#[no_mangle]
pub extern "C" fn luach_month_name(month: u8, leap_year: bool) -> *const c_char {
    match month_from(month) {
        Ok(HebrewMonth::Adar) if leap_year => c"Adar I".as_ptr(),
        Ok(month) => MONTH_NAMES[usize::from(month.number() - 1)].as_ptr(),
        Err(_) => std::ptr::null(),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Dates and molad
// ═══════════════════════════════════════════════════════════════════════════

/// Gregorian date of a Hebrew date.
///
/// # Safety
/// `out` must be a valid, writable pointer to `LuachGregorianDate`.
#[no_mangle]
pub unsafe extern "C" fn luach_hebrew_to_gregorian(
    date: LuachHebrewDate,
    out: *mut LuachGregorianDate,
) -> LuachStatus {
    catch_panic!(LuachStatus::Panic, {
        if out.is_null() {
            return LuachStatus::NullPointer;
        }
        let month = match month_from(date.month) {
            Ok(month) => month,
            Err(status) => return status,
        };
        let hebrew = match HebrewDate::new(date.year, month, date.day) {
            Ok(hebrew) => hebrew,
            Err(err) => return LuachStatus::from(&err),
        };
        match hebrew.to_gregorian() {
            Some(civil) => {
                // SAFETY: `out` was checked for null and the caller guarantees it is writable.
                unsafe {
                    *out = LuachGregorianDate {
                        year: civil.year(),
                        month: civil.month() as u8,
                        day: civil.day() as u8,
                    };
                }
                LuachStatus::Ok
            }
            None => LuachStatus::InvalidInstant,
        }
    })
}

/// Molad of `month` in `hebrew_year`.
///
/// # Safety
/// `out` must be a valid, writable pointer to `LuachMolad`.
#[no_mangle]
pub unsafe extern "C" fn luach_molad(
    hebrew_year: i32,
    month: u8,
    out: *mut LuachMolad,
) -> LuachStatus {
    catch_panic!(LuachStatus::Panic, {
        if out.is_null() {
            return LuachStatus::NullPointer;
        }
        let month = match month_from(month) {
            Ok(month) => month,
            Err(status) => return status,
        };
        let m = match molad(hebrew_year, month) {
            Ok(m) => m,
            Err(err) => return LuachStatus::from(&err),
        };
        let Some(date) = m.date() else {
            return LuachStatus::InvalidInstant;
        };
        let notation = m.notation();
        let time = m.time();
        // SAFETY: `out` was checked for null and the caller guarantees it is writable.
        unsafe {
            *out = LuachMolad {
                weekday: weekday_index(notation.weekday),
                hours: notation.hours,
                chalakim: notation.chalakim,
                date: LuachGregorianDate {
                    year: date.year(),
                    month: date.month() as u8,
                    day: date.day() as u8,
                },
                millis_of_day: time.num_seconds_from_midnight() * 1000
                    + time.nanosecond() / 1_000_000,
            };
        }
        LuachStatus::Ok
    })
}

#[inline]
fn weekday_index(weekday: Weekday) -> u8 {
    weekday.num_days_from_sunday() as u8
}
