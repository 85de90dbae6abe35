// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

use luach::ConvertError;

/// Status codes returned by luach-ffi functions.
///
/// cbindgen:prefix-with-name
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LuachStatus {
    /// Success.
    Ok = 0,
    /// A required pointer was null.
    NullPointer = 1,
    /// A string argument was not valid UTF-8.
    InvalidUtf8 = 2,
    /// The zone name is not a known IANA zone.
    InvalidTimezone = 3,
    /// The civil moment does not exist (bad component or DST gap).
    InvalidInstant = 4,
    /// The Hebrew month or day does not exist in that year.
    InvalidHebrewDate = 5,
    /// The nightfall threshold is not a clock time.
    InvalidNightfall = 6,
    /// A panic was caught at the boundary.
    Panic = 7,
    /// A result could not be rendered as JSON.
    Serialization = 8,
}

impl From<&ConvertError> for LuachStatus {
    fn from(err: &ConvertError) -> Self {
        match err {
            ConvertError::InvalidTimezone { .. } => LuachStatus::InvalidTimezone,
            ConvertError::InvalidInstant { .. } => LuachStatus::InvalidInstant,
            ConvertError::InvalidNightfall { .. } => LuachStatus::InvalidNightfall,
            ConvertError::InvalidHebrewDate { .. } => LuachStatus::InvalidHebrewDate,
        }
    }
}
