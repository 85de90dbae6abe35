// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The Hebrew date converter.
//!
//! ```text
//! (CivilMoment, zone name)
//!   → resolve zone            (InvalidTimezone)
//!   → resolve instant         (InvalidInstant)
//!   → Jerusalem wall clock
//!   → Hebrew date of the Jerusalem calendar date   [HebrewCalendar]
//!   → nightfall adjustment                          [Nightfall]
//!   → weekday attributes + cycle data
//!   → HebrewDateResult
//! ```
//!
//! [`HebrewDateConverter`] is parameterised by a calendar backend marker in
//! the same way an instant is parameterised by its scale; the default is
//! [`Arithmetic`].

use chrono::{DateTime, Datelike};
use chrono_tz::Tz;
use std::fmt;
use std::marker::PhantomData;
use tracing::{debug, debug_span};

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Serialize, Serializer};

use crate::calendar::{Arithmetic, HebrewCalendar, HebrewDate, HebrewMonth};
use crate::config::ConverterConfig;
use crate::cycle::{intercalation_cycle_info, CycleInfo};
use crate::error::ConvertError;
use crate::nightfall::Nightfall;
use crate::weekday::{weekday_attributes, DayAttributes, Planet, Sefira};
use crate::zone::{checked_to_jerusalem, parse_timezone, CivilMoment};

// ═══════════════════════════════════════════════════════════════════════════
// Result
// ═══════════════════════════════════════════════════════════════════════════

/// Everything known about one civil moment on the Hebrew calendar.
///
/// Immutable; each conversion produces a fresh value.
#[derive(Debug, Clone, PartialEq)]
pub struct HebrewDateResult {
    gregorian_date: CivilMoment,
    origin_timezone: Tz,
    jerusalem_time: DateTime<Tz>,
    hebrew_date: HebrewDate,
    adjusted_hebrew_day: u8,
    adjusted_date: HebrewDate,
    after_nightfall: bool,
    day: &'static DayAttributes,
    cycle: CycleInfo,
}

impl HebrewDateResult {
    /// The moment exactly as supplied.
    #[inline]
    pub fn gregorian_date(&self) -> &CivilMoment {
        &self.gregorian_date
    }

    /// Zone the moment was read in.
    #[inline]
    pub fn origin_timezone(&self) -> Tz {
        self.origin_timezone
    }

    /// Same instant on Jerusalem's wall clock.
    #[inline]
    pub fn jerusalem_time(&self) -> &DateTime<Tz> {
        &self.jerusalem_time
    }

    /// Hebrew date of the Jerusalem calendar date, before nightfall.
    #[inline]
    pub fn hebrew_date(&self) -> HebrewDate {
        self.hebrew_date
    }

    #[inline]
    pub fn hebrew_year(&self) -> i32 {
        self.hebrew_date.year()
    }

    #[inline]
    pub fn hebrew_month(&self) -> HebrewMonth {
        self.hebrew_date.month()
    }

    #[inline]
    pub fn hebrew_month_name(&self) -> &'static str {
        self.hebrew_date.month_name()
    }

    /// Unadjusted day of month.
    #[inline]
    pub fn hebrew_day(&self) -> u8 {
        self.hebrew_date.day()
    }

    /// Day number after nightfall, per the converter's rollover policy.
    #[inline]
    pub fn adjusted_hebrew_day(&self) -> u8 {
        self.adjusted_hebrew_day
    }

    /// Calendar-correct Hebrew date in effect at this moment.
    #[inline]
    pub fn adjusted_date(&self) -> HebrewDate {
        self.adjusted_date
    }

    /// Whether the Jerusalem clock had reached nightfall.
    #[inline]
    pub fn after_nightfall(&self) -> bool {
        self.after_nightfall
    }

    /// Days from Sunday of the Jerusalem calendar date, `0..=6`.
    ///
    /// Not shifted by nightfall.
    #[inline]
    pub fn day_of_week(&self) -> u8 {
        self.day.index()
    }

    #[inline]
    pub fn day_attributes(&self) -> &'static DayAttributes {
        self.day
    }

    #[inline]
    pub fn day_name(&self) -> &'static str {
        self.day.day_name
    }

    #[inline]
    pub fn planet(&self) -> Planet {
        self.day.planet
    }

    #[inline]
    pub fn sefira(&self) -> Sefira {
        self.day.sefira
    }

    #[inline]
    pub fn is_leap_year(&self) -> bool {
        self.cycle.is_leap_year
    }

    #[inline]
    pub fn year_in_cycle(&self) -> i32 {
        self.cycle.year_in_cycle
    }

    /// Cycle data of the unadjusted year.
    #[inline]
    pub fn cycle(&self) -> CycleInfo {
        self.cycle
    }
}

impl fmt::Display for HebrewDateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}, {})",
            self.adjusted_date, self.day.day_name, self.day.planet, self.day.sefira
        )
    }
}

// Flat record, one field per stored column.
#[cfg(feature = "serde")]
impl Serialize for HebrewDateResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("HebrewDateResult", 17)?;
        s.serialize_field("gregorian_date", &self.gregorian_date)?;
        s.serialize_field("origin_timezone", self.origin_timezone.name())?;
        s.serialize_field("jerusalem_time", &self.jerusalem_time.to_rfc3339())?;
        s.serialize_field("hebrew_year", &self.hebrew_year())?;
        s.serialize_field("hebrew_month", &self.hebrew_month().number())?;
        s.serialize_field("hebrew_month_name", self.hebrew_month_name())?;
        s.serialize_field("hebrew_day", &self.hebrew_day())?;
        s.serialize_field("adjusted_hebrew_day", &self.adjusted_hebrew_day)?;
        s.serialize_field("adjusted_date", &self.adjusted_date)?;
        s.serialize_field("after_nightfall", &self.after_nightfall)?;
        s.serialize_field("day_of_week", &self.day_of_week())?;
        s.serialize_field("day_name", self.day.day_name)?;
        s.serialize_field("planet", self.day.planet.name())?;
        s.serialize_field("sefira", self.day.sefira.name())?;
        s.serialize_field("is_leap_year", &self.cycle.is_leap_year)?;
        s.serialize_field("year_in_cycle", &self.cycle.year_in_cycle)?;
        s.serialize_field("month_count", &self.cycle.month_count)?;
        s.end()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Converter
// ═══════════════════════════════════════════════════════════════════════════

/// Converts civil moments to Hebrew dates using calendar backend `C`.
///
/// The converter holds only its nightfall rule; it is `Copy` and can be
/// shared freely across threads.
///
/// ```
/// use luach::{CivilMoment, HebrewDateConverter};
///
/// let converter = HebrewDateConverter::new();
/// let moment = CivilMoment::parse("1988-01-04T21:25:00+02:00").unwrap();
/// let result = converter.convert(&moment, "Asia/Jerusalem").unwrap();
///
/// assert_eq!(result.hebrew_day(), 14);
/// assert_eq!(result.adjusted_hebrew_day(), 15);
/// assert_eq!(result.hebrew_month_name(), "Tevet");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct HebrewDateConverter<C: HebrewCalendar = Arithmetic> {
    nightfall: Nightfall,
    _calendar: PhantomData<C>,
}

impl<C: HebrewCalendar> Default for HebrewDateConverter<C> {
    fn default() -> Self {
        Self::with_nightfall(Nightfall::default())
    }
}

impl HebrewDateConverter<Arithmetic> {
    /// Converter with the default backend and a 19:00 nightfall.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: HebrewCalendar> HebrewDateConverter<C> {
    /// Converter with a custom nightfall rule.
    pub const fn with_nightfall(nightfall: Nightfall) -> Self {
        Self {
            nightfall,
            _calendar: PhantomData,
        }
    }

    /// Converter built from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidNightfall`] for an impossible threshold.
    pub fn from_config(config: &ConverterConfig) -> Result<Self, ConvertError> {
        Ok(Self::with_nightfall(config.nightfall()?))
    }

    /// The nightfall rule in use.
    #[inline]
    pub fn nightfall(&self) -> Nightfall {
        self.nightfall
    }

    /// Convert `moment`, read in `origin_timezone`, to its Hebrew date.
    ///
    /// # Errors
    ///
    /// * [`ConvertError::InvalidTimezone`] if the zone name is unknown;
    ///   checked before anything else.
    /// * [`ConvertError::InvalidInstant`] if the wall-clock reading does not
    ///   exist in the zone, or its Jerusalem reading is outside chrono's
    ///   date range.
    pub fn convert(
        &self,
        moment: &CivilMoment,
        origin_timezone: &str,
    ) -> Result<HebrewDateResult, ConvertError> {
        let _span = debug_span!("convert", %moment, zone = origin_timezone, backend = C::LABEL)
            .entered();
        let zone =
            parse_timezone(origin_timezone).inspect_err(|err| debug!(%err, "rejected zone"))?;
        let jerusalem_time = moment
            .resolve(&zone)
            .and_then(|instant| checked_to_jerusalem(&instant))
            .inspect_err(|err| debug!(%err, "rejected moment"))?;
        Ok(self.build(*moment, zone, jerusalem_time))
    }

    /// Convert an instant already pinned to a zone.
    ///
    /// # Errors
    ///
    /// [`ConvertError::InvalidInstant`] only at the edges of chrono's range,
    /// where the instant's local or Jerusalem reading cannot be represented.
    pub fn convert_zoned(
        &self,
        instant: &DateTime<Tz>,
    ) -> Result<HebrewDateResult, ConvertError> {
        let _span =
            debug_span!("convert_zoned", utc = %instant.naive_utc(), backend = C::LABEL).entered();
        let moment = CivilMoment::from_zoned(instant)?;
        let jerusalem_time = checked_to_jerusalem(instant)?;
        Ok(self.build(moment, instant.timezone(), jerusalem_time))
    }

    fn build(
        &self,
        moment: CivilMoment,
        zone: Tz,
        jerusalem_time: DateTime<Tz>,
    ) -> HebrewDateResult {
        let civil_date = jerusalem_time.date_naive();
        let hebrew_date = C::to_hebrew(civil_date);
        let adjustment = self
            .nightfall
            .adjust::<C>(civil_date, jerusalem_time.time(), hebrew_date);
        debug!(
            jerusalem = %jerusalem_time,
            hebrew = %hebrew_date,
            adjusted = %adjustment.date,
            after_nightfall = adjustment.after_nightfall,
            "converted"
        );

        HebrewDateResult {
            gregorian_date: moment,
            origin_timezone: zone,
            jerusalem_time,
            hebrew_date,
            adjusted_hebrew_day: adjustment.day,
            adjusted_date: adjustment.date,
            after_nightfall: adjustment.after_nightfall,
            day: weekday_attributes(civil_date.weekday()),
            cycle: intercalation_cycle_info(hebrew_date.year()),
        }
    }
}

/// Convert with the default converter.
///
/// # Errors
///
/// See [`HebrewDateConverter::convert`].
pub fn convert_to_hebrew_date(
    moment: &CivilMoment,
    origin_timezone: &str,
) -> Result<HebrewDateResult, ConvertError> {
    HebrewDateConverter::new().convert(moment, origin_timezone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    fn convert(text: &str, zone: &str) -> HebrewDateResult {
        convert_to_hebrew_date(&CivilMoment::parse(text).unwrap(), zone).unwrap()
    }

    #[test]
    fn test_before_nightfall() {
        let r = convert("1988-01-04T13:25:00+02:00", "Asia/Jerusalem");
        assert_eq!(r.hebrew_year(), 5748);
        assert_eq!(r.hebrew_month_name(), "Tevet");
        assert_eq!(r.hebrew_day(), 14);
        assert_eq!(r.adjusted_hebrew_day(), 14);
        assert_eq!(r.day_of_week(), 1);
        assert_eq!(r.day_name(), "Monday");
        assert!(!r.after_nightfall());
        assert_eq!(r.adjusted_date(), r.hebrew_date());
    }

    #[test]
    fn test_after_nightfall() {
        let r = convert("1988-01-04T21:25:00+02:00", "Asia/Jerusalem");
        assert_eq!(r.hebrew_day(), 14);
        assert_eq!(r.adjusted_hebrew_day(), 15);
        assert_eq!(r.hebrew_month_name(), "Tevet");
        assert_eq!(r.hebrew_year(), 5748);
        // weekday is not shifted by nightfall
        assert_eq!(r.day_of_week(), 1);
        assert_eq!(r.to_string(), "15 Tevet 5748 (Monday, Moon, Gevurah)");
    }

    #[test]
    fn test_invalid_zone_fails_before_moment() {
        // the moment is also invalid in New York, but the zone is checked first
        let moment = CivilMoment::parse("2024-03-10T02:30").unwrap();
        let err = convert_to_hebrew_date(&moment, "Not/AZone").unwrap_err();
        assert_eq!(
            err,
            ConvertError::InvalidTimezone {
                name: "Not/AZone".into()
            }
        );
    }

    #[test]
    fn test_gregorian_date_is_kept_verbatim() {
        let r = convert("1988-01-04T18:30", "America/New_York");
        assert_eq!(r.gregorian_date().to_string(), "1988-01-04T18:30:00");
        assert_eq!(r.origin_timezone(), chrono_tz::America::New_York);
        assert_eq!(r.jerusalem_time().hour(), 1);
        // Tuesday in Jerusalem, already 15 Tevet
        assert_eq!(r.day_of_week(), 2);
        assert_eq!(r.hebrew_day(), 15);
    }

    #[test]
    fn test_configured_threshold() {
        let config = ConverterConfig {
            nightfall: crate::config::NightfallConfig { hour: 18, minute: 0 },
            ..Default::default()
        };
        let converter = HebrewDateConverter::<Arithmetic>::from_config(&config).unwrap();
        let moment = CivilMoment::parse("1988-01-04T18:15:00+02:00").unwrap();
        let r = converter.convert(&moment, "Asia/Jerusalem").unwrap();
        assert!(r.after_nightfall());
        assert_eq!(r.adjusted_hebrew_day(), 15);
    }

    #[test]
    fn test_convert_zoned_matches_convert() {
        let instant = chrono_tz::Asia::Jerusalem
            .with_ymd_and_hms(1988, 1, 4, 21, 25, 0)
            .unwrap();
        let zoned = HebrewDateConverter::new().convert_zoned(&instant).unwrap();
        let parsed = convert("1988-01-04T21:25:00+02:00", "Asia/Jerusalem");
        assert_eq!(zoned.adjusted_date(), parsed.adjusted_date());
        assert_eq!(zoned.jerusalem_time(), parsed.jerusalem_time());
    }

    #[test]
    fn test_leap_year_fields() {
        let r = convert("2024-03-11T10:00", "Asia/Jerusalem");
        assert_eq!(r.hebrew_month_name(), "Adar II");
        assert!(r.is_leap_year());
        assert_eq!(r.cycle().month_count, 13);
        assert_eq!(r.year_in_cycle(), 8);
    }

    #[test]
    fn test_last_representable_moments() {
        // 21:59:59 UTC is 23:59:59 in Jerusalem on chrono's last day
        let last = CivilMoment::from_ymd_hms(262_143, 12, 31, 21, 59, 59).unwrap();
        let r = convert_to_hebrew_date(&last, "UTC").unwrap();
        assert_eq!(r.jerusalem_time().date_naive(), chrono::NaiveDate::MAX);
        assert!(r.after_nightfall());
        assert_eq!(r.adjusted_date(), r.hebrew_date().succ());

        // an hour later Jerusalem's reading no longer exists
        let beyond = CivilMoment::from_ymd_hms(262_143, 12, 31, 23, 0, 0).unwrap();
        assert!(matches!(
            convert_to_hebrew_date(&beyond, "UTC"),
            Err(ConvertError::InvalidInstant { .. })
        ));
        let instant = chrono_tz::UTC.from_utc_datetime(&chrono::NaiveDateTime::MAX);
        assert!(HebrewDateConverter::new().convert_zoned(&instant).is_err());
    }

    #[test]
    fn test_first_representable_moment() {
        let first = CivilMoment::new(chrono::NaiveDateTime::MIN);
        let r = convert_to_hebrew_date(&first, "UTC").unwrap();
        assert_eq!(r.jerusalem_time().date_naive(), chrono::NaiveDate::MIN);
        assert!(!r.after_nightfall());
        // east of UTC the instant would precede chrono's range
        assert!(matches!(
            convert_to_hebrew_date(&first, "Asia/Tokyo"),
            Err(ConvertError::InvalidInstant { .. })
        ));
    }

    #[test]
    fn test_zoned_moment_keeps_seconds_offset() {
        let instant = chrono_tz::Asia::Jerusalem
            .with_ymd_and_hms(1900, 1, 1, 12, 0, 0)
            .unwrap();
        let r = HebrewDateConverter::new().convert_zoned(&instant).unwrap();
        let text = r.gregorian_date().to_string();
        assert_eq!(text, "1900-01-01T12:00:00+02:20:40");
        let again = convert_to_hebrew_date(&CivilMoment::parse(&text).unwrap(), "Asia/Jerusalem")
            .unwrap();
        assert_eq!(again.jerusalem_time(), r.jerusalem_time());
        assert_eq!(again.gregorian_date(), r.gregorian_date());
    }

    #[test]
    fn test_converter_is_send_sync_copy() {
        fn assert_impl<T: Send + Sync + Copy>() {}
        assert_impl::<HebrewDateConverter>();
    }
}
