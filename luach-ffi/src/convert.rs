// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! FFI bindings for the converter and zone checks.

use std::ffi::{c_char, CStr};

use chrono::{Datelike, NaiveDateTime, Timelike};
use luach::{
    is_valid_timezone, CivilMoment, HebrewDate, HebrewDateConverter, HebrewDateResult, Nightfall,
};

use crate::catch_panic;
use crate::error::LuachStatus;

// ═══════════════════════════════════════════════════════════════════════════
// C-repr types
// ═══════════════════════════════════════════════════════════════════════════

/// Wall-clock breakdown for C interop.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LuachCivil {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl LuachCivil {
    fn to_moment(self) -> Result<CivilMoment, LuachStatus> {
        CivilMoment::from_ymd_hms(
            self.year,
            self.month.into(),
            self.day.into(),
            self.hour.into(),
            self.minute.into(),
            self.second.into(),
        )
        .map_err(|err| LuachStatus::from(&err))
    }

    fn from_chrono(dt: &NaiveDateTime) -> Self {
        Self {
            year: dt.year(),
            month: dt.month() as u8,
            day: dt.day() as u8,
            hour: dt.hour() as u8,
            minute: dt.minute() as u8,
            second: dt.second() as u8,
        }
    }
}

/// A Hebrew date. `month` is numbered Nisan = 1 .. Adar II = 13.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LuachHebrewDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl From<HebrewDate> for LuachHebrewDate {
    fn from(date: HebrewDate) -> Self {
        Self {
            year: date.year(),
            month: date.month().number(),
            day: date.day(),
        }
    }
}

/// Flat conversion result.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LuachResult {
    /// Jerusalem wall-clock time of the instant.
    pub jerusalem: LuachCivil,
    /// Hebrew date of the Jerusalem calendar date.
    pub hebrew: LuachHebrewDate,
    /// Calendar-correct date after the nightfall rule.
    pub adjusted: LuachHebrewDate,
    pub adjusted_day: u8,
    pub after_nightfall: bool,
    /// Days from Sunday, `0..=6`.
    pub day_of_week: u8,
    pub is_leap_year: bool,
    pub year_in_cycle: i32,
    pub month_count: u8,
}

impl From<&HebrewDateResult> for LuachResult {
    fn from(r: &HebrewDateResult) -> Self {
        Self {
            jerusalem: LuachCivil::from_chrono(&r.jerusalem_time().naive_local()),
            hebrew: r.hebrew_date().into(),
            adjusted: r.adjusted_date().into(),
            adjusted_day: r.adjusted_hebrew_day(),
            after_nightfall: r.after_nightfall(),
            day_of_week: r.day_of_week(),
            is_leap_year: r.is_leap_year(),
            year_in_cycle: r.year_in_cycle(),
            month_count: r.cycle().month_count,
        }
    }
}

/// Borrow a NUL-terminated UTF-8 string.
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated string that outlives `'a`.
unsafe fn borrow_str<'a>(ptr: *const c_char) -> Result<&'a str, LuachStatus> {
    if ptr.is_null() {
        return Err(LuachStatus::NullPointer);
    }
    // SAFETY: non-null, and the caller guarantees NUL termination.
    unsafe { CStr::from_ptr(ptr) }
        .to_str()
        .map_err(|_| LuachStatus::InvalidUtf8)
}

// ═══════════════════════════════════════════════════════════════════════════
// Conversion
// ═══════════════════════════════════════════════════════════════════════════

/// Convert a wall-clock reading in `timezone` with the default nightfall.
///
/// # Safety
/// `timezone` must be a NUL-terminated string; `out` must be a valid,
/// writable pointer to `LuachResult`.
#[no_mangle]
pub unsafe extern "C" fn luach_convert(
    civil: LuachCivil,
    timezone: *const c_char,
    out: *mut LuachResult,
) -> LuachStatus {
    catch_panic!(LuachStatus::Panic, {
        unsafe { convert_into(civil, timezone, Nightfall::default(), out) }
    })
}

/// Convert with a custom nightfall threshold `hour:minute`, Jerusalem time.
///
/// # Safety
/// `timezone` must be a NUL-terminated string; `out` must be a valid,
/// writable pointer to `LuachResult`.
#[no_mangle]
pub unsafe extern "C" fn luach_convert_with_nightfall(
    civil: LuachCivil,
    timezone: *const c_char,
    nightfall_hour: u8,
    nightfall_minute: u8,
    out: *mut LuachResult,
) -> LuachStatus {
    catch_panic!(LuachStatus::Panic, {
        match Nightfall::new(nightfall_hour.into(), nightfall_minute.into()) {
            Ok(nightfall) => unsafe { convert_into(civil, timezone, nightfall, out) },
            Err(err) => LuachStatus::from(&err),
        }
    })
}

/// # Safety
/// Same contract as [`luach_convert`].
unsafe fn convert_into(
    civil: LuachCivil,
    timezone: *const c_char,
    nightfall: Nightfall,
    out: *mut LuachResult,
) -> LuachStatus {
    if out.is_null() {
        return LuachStatus::NullPointer;
    }
    let zone = match unsafe { borrow_str(timezone) } {
        Ok(zone) => zone,
        Err(status) => return status,
    };
    let moment = match civil.to_moment() {
        Ok(moment) => moment,
        Err(status) => return status,
    };
    let converter = HebrewDateConverter::<luach::Arithmetic>::with_nightfall(nightfall);
    match converter.convert(&moment, zone) {
        Ok(result) => {
            // SAFETY: `out` was checked for null and the caller guarantees it is writable.
            unsafe { *out = LuachResult::from(&result) };
            LuachStatus::Ok
        }
        Err(err) => LuachStatus::from(&err),
    }
}

/// Whether `timezone` is a known IANA zone. Null or non-UTF-8 input is `false`.
///
/// # Safety
/// `timezone` must be null or a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn luach_is_valid_timezone(timezone: *const c_char) -> bool {
    catch_panic!(false, {
        match unsafe { borrow_str(timezone) } {
            Ok(zone) => is_valid_timezone(zone),
            Err(_) => false,
        }
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// JSON (serde feature)
// ═══════════════════════════════════════════════════════════════════════════

/// Convert and return the full result as a JSON object.
///
/// On success `*out` receives a heap string that must be released with
/// [`luach_string_free`].
///
/// # Safety
/// `timezone` must be a NUL-terminated string; `out` must be a valid,
/// writable pointer to `*mut c_char`.
#[cfg(feature = "serde")]
#[no_mangle]
pub unsafe extern "C" fn luach_convert_json(
    civil: LuachCivil,
    timezone: *const c_char,
    out: *mut *mut c_char,
) -> LuachStatus {
    catch_panic!(LuachStatus::Panic, {
        if out.is_null() {
            return LuachStatus::NullPointer;
        }
        let zone = match unsafe { borrow_str(timezone) } {
            Ok(zone) => zone,
            Err(status) => return status,
        };
        let moment = match civil.to_moment() {
            Ok(moment) => moment,
            Err(status) => return status,
        };
        let result = match luach::convert_to_hebrew_date(&moment, zone) {
            Ok(result) => result,
            Err(err) => return LuachStatus::from(&err),
        };
        match json_string(&result) {
            Ok(text) => {
                // SAFETY: `out` was checked for null and the caller guarantees it is writable.
                unsafe { *out = text.into_raw() };
                LuachStatus::Ok
            }
            Err(status) => status,
        }
    })
}

/// JSON text as a C string.
///
/// Never fails for a conversion result: its `Serialize` impl is infallible
/// and serde_json escapes NUL.
#[cfg(feature = "serde")]
fn json_string<T: serde::Serialize>(value: &T) -> Result<std::ffi::CString, LuachStatus> {
    let json = serde_json::to_string(value).map_err(|_| LuachStatus::Serialization)?;
    std::ffi::CString::new(json).map_err(|_| LuachStatus::Serialization)
}

/// Release a string returned by [`luach_convert_json`]. Null is a no-op.
///
/// # Safety
/// `ptr` must be null or a pointer obtained from `luach_convert_json` that
/// has not been freed yet.
#[cfg(feature = "serde")]
#[no_mangle]
pub unsafe extern "C" fn luach_string_free(ptr: *mut c_char) {
    if !ptr.is_null() {
        // SAFETY: the pointer came from `CString::into_raw`.
        drop(unsafe { std::ffi::CString::from_raw(ptr) });
    }
}
