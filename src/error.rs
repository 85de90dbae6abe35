// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types for the luach crate.

/// Error type for all fallible operations in the luach crate.
///
/// Every variant is a boundary validation failure: once a moment, a zone and
/// a configuration have been accepted, the calendar arithmetic behind them is
/// total and cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// The origin zone name is not a known IANA identifier.
    #[error("invalid timezone: `{name}` is not a known IANA zone")]
    InvalidTimezone {
        /// The name that failed to resolve.
        name: String,
    },

    /// The civil moment could not be parsed or does not exist.
    #[error("invalid civil moment `{input}`: {reason}")]
    InvalidInstant {
        /// The offending input, as text.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A Hebrew date built by the caller does not exist in its year.
    #[error("invalid hebrew date: day {day} of month {month} in year {year}")]
    InvalidHebrewDate {
        /// Hebrew year (anno mundi).
        year: i32,
        /// Month number, Nisan = 1 .. Adar II = 13.
        month: u8,
        /// Day of month.
        day: u8,
    },

    /// The nightfall threshold is not a valid clock time.
    #[error("invalid nightfall threshold {hour:02}:{minute:02} (must be within 00:00..=23:59)")]
    InvalidNightfall {
        /// Hour of the threshold.
        hour: u32,
        /// Minute of the threshold.
        minute: u32,
    },
}

impl ConvertError {
    pub(crate) fn instant(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInstant {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
