// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Converter configuration.
//!
//! With the `serde` feature the configuration deserialises from any serde
//! format; every field is optional and unknown keys are rejected:
//!
//! ```toml
//! rollover = "calendar"   # or "day_number"
//!
//! [nightfall]
//! hour = 19
//! minute = 0
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConvertError;
use crate::nightfall::{Nightfall, Rollover};

/// Top-level converter configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ConverterConfig {
    /// Nightfall threshold, Jerusalem clock.
    pub nightfall: NightfallConfig,
    /// Month-end policy for the adjusted day number.
    pub rollover: Rollover,
}

/// Nightfall threshold settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct NightfallConfig {
    /// Threshold hour, `0..=23`.
    pub hour: u32,
    /// Threshold minute, `0..=59`.
    pub minute: u32,
}

impl Default for NightfallConfig {
    fn default() -> Self {
        Self {
            hour: Nightfall::DEFAULT_HOUR,
            minute: 0,
        }
    }
}

impl ConverterConfig {
    /// Validated nightfall rule described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidNightfall`] for an impossible clock time.
    pub fn nightfall(&self) -> Result<Nightfall, ConvertError> {
        Ok(Nightfall::new(self.nightfall.hour, self.nightfall.minute)?.with_rollover(self.rollover))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConverterConfig::default();
        assert_eq!(config.nightfall.hour, 19);
        assert_eq!(config.nightfall.minute, 0);
        assert_eq!(config.rollover, Rollover::Calendar);
        assert_eq!(config.nightfall().unwrap(), Nightfall::default());
    }

    #[test]
    fn test_invalid_hour_is_rejected() {
        let config = ConverterConfig {
            nightfall: NightfallConfig { hour: 25, minute: 0 },
            ..Default::default()
        };
        assert!(matches!(
            config.nightfall(),
            Err(ConvertError::InvalidNightfall { hour: 25, .. })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_json() {
        let config: ConverterConfig =
            serde_json::from_str(r#"{"nightfall": {"hour": 18}, "rollover": "day_number"}"#)
                .unwrap();
        assert_eq!(config.nightfall.hour, 18);
        assert_eq!(config.nightfall.minute, 0);
        assert_eq!(config.rollover, Rollover::DayNumber);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_unknown_fields_rejected() {
        let parsed = serde_json::from_str::<ConverterConfig>(r#"{"sunset": "astronomical"}"#);
        assert!(parsed.is_err());
    }
}
