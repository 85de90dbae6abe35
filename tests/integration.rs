use chrono::{NaiveDate, Timelike, Weekday};
use luach::{
    convert_to_hebrew_date, intercalation_cycle_info, is_hebrew_leap_year, is_valid_timezone,
    molad, rosh_hashanah, CivilMoment, ConvertError, ConverterConfig, HebrewDate,
    HebrewDateConverter, HebrewMonth, Nightfall, Planet, Rollover, Sefira,
};

fn convert(text: &str, zone: &str) -> luach::HebrewDateResult {
    let moment = CivilMoment::parse(text).expect("parse moment");
    convert_to_hebrew_date(&moment, zone).expect("convert")
}

#[test]
fn afternoon_in_jerusalem_is_fourteen_tevet() {
    let r = convert("1988-01-04T13:25:00+02:00", "Asia/Jerusalem");
    assert_eq!(r.hebrew_year(), 5748);
    assert_eq!(r.hebrew_month(), HebrewMonth::Tevet);
    assert_eq!(r.hebrew_month_name(), "Tevet");
    assert_eq!(r.hebrew_day(), 14);
    assert_eq!(r.adjusted_hebrew_day(), 14);
    assert!(!r.after_nightfall());
    assert_eq!(r.day_of_week(), 1);
    assert_eq!(r.day_name(), "Monday");
    assert_eq!(r.planet(), Planet::Moon);
    assert_eq!(r.sefira(), Sefira::Gevurah);
    assert!(!r.is_leap_year());
}

#[test]
fn evening_in_jerusalem_is_fifteen_tevet() {
    let r = convert("1988-01-04T21:25:00+02:00", "Asia/Jerusalem");
    assert_eq!(r.hebrew_day(), 14);
    assert_eq!(r.adjusted_hebrew_day(), 15);
    assert!(r.after_nightfall());
    assert_eq!(r.hebrew_month_name(), "Tevet");
    assert_eq!(r.hebrew_year(), 5748);
    assert_eq!(r.day_of_week(), 1);
}

#[test]
fn sunday_and_saturday_indices() {
    assert_eq!(convert("1988-01-03T12:00", "Asia/Jerusalem").day_of_week(), 0);
    let saturday = convert("1988-01-02T12:00", "Asia/Jerusalem");
    assert_eq!(saturday.day_of_week(), 6);
    assert_eq!(saturday.day_name(), "Saturday");
    assert_eq!(saturday.sefira(), Sefira::Malchut);
}

#[test]
fn unknown_zone_is_rejected() {
    let moment = CivilMoment::parse("1988-01-04T13:25:00").unwrap();
    let err = convert_to_hebrew_date(&moment, "Not/AZone").unwrap_err();
    assert!(matches!(err, ConvertError::InvalidTimezone { ref name } if name == "Not/AZone"));
    assert!(err.to_string().contains("Not/AZone"));
    assert!(!is_valid_timezone("Not/AZone"));
}

#[test]
fn nonexistent_local_time_is_rejected() {
    let moment = CivilMoment::parse("2024-03-10T02:30").unwrap();
    let err = convert_to_hebrew_date(&moment, "America/New_York").unwrap_err();
    assert!(matches!(err, ConvertError::InvalidInstant { .. }));
}

#[test]
fn far_zone_is_judged_on_jerusalem_clock() {
    // 10:00 in Tokyo is 03:00 in Jerusalem, same civil day, before nightfall.
    let tokyo = convert("1988-01-04T10:00", "Asia/Tokyo");
    assert_eq!(tokyo.jerusalem_time().hour(), 3);
    assert_eq!(tokyo.hebrew_day(), 14);
    assert!(!tokyo.after_nightfall());

    // 13:00 in New York is 20:00 in Jerusalem, past nightfall.
    let ny = convert("1988-01-04T13:00", "America/New_York");
    assert_eq!(ny.jerusalem_time().hour(), 20);
    assert!(ny.after_nightfall());
    assert_eq!(ny.adjusted_hebrew_day(), 15);
}

#[test]
fn rosh_hashanah_eve_rolls_into_new_year() {
    let r = convert("2023-09-15T19:30", "Asia/Jerusalem");
    assert_eq!(r.hebrew_year(), 5783);
    assert_eq!(r.hebrew_month(), HebrewMonth::Elul);
    assert_eq!(r.adjusted_date(), HebrewDate::new(5784, HebrewMonth::Tishrei, 1).unwrap());
    assert_eq!(r.adjusted_hebrew_day(), 1);
    // cycle data follows the unadjusted year
    assert_eq!(r.year_in_cycle(), 7);
}

#[test]
fn legacy_rollover_keeps_counting() {
    let config = ConverterConfig {
        rollover: Rollover::DayNumber,
        ..Default::default()
    };
    let converter = HebrewDateConverter::<luach::Arithmetic>::from_config(&config).unwrap();
    let moment = CivilMoment::parse("2023-03-22T20:00").unwrap();
    let r = converter.convert(&moment, "Asia/Jerusalem").unwrap();
    assert_eq!(r.hebrew_day(), 29);
    assert_eq!(r.adjusted_hebrew_day(), 30);
    assert_eq!(r.adjusted_date().month(), HebrewMonth::Nisan);
}

#[test]
fn custom_nightfall_threshold() {
    let converter = HebrewDateConverter::<luach::Arithmetic>::with_nightfall(
        Nightfall::new(17, 30).unwrap(),
    );
    let moment = CivilMoment::parse("1988-01-04T17:45").unwrap();
    let r = converter.convert(&moment, "Asia/Jerusalem").unwrap();
    assert!(r.after_nightfall());
    assert_eq!(r.adjusted_hebrew_day(), 15);
}

#[test]
fn cycle_queries() {
    let info = intercalation_cycle_info(5784);
    assert_eq!(info.year_in_cycle, 8);
    assert!(info.is_leap_year);
    assert_eq!(info.month_count, 13);

    let info = intercalation_cycle_info(5783);
    assert_eq!(info.year_in_cycle, 7);
    assert!(!info.is_leap_year);
    assert_eq!(info.month_count, 12);

    assert!(is_hebrew_leap_year(5782));
    assert!(!is_hebrew_leap_year(5785));
}

#[test]
fn molad_and_new_year_line_up() {
    let m = molad(5784, HebrewMonth::Tishrei).unwrap();
    assert_eq!(m.weekday(), Weekday::Fri);
    assert_eq!(rosh_hashanah(5784), NaiveDate::from_ymd_opt(2023, 9, 16));
    assert_eq!(m.to_string(), "Friday 11h 882p");
}

#[cfg(feature = "serde")]
#[test]
fn serde_result_is_flat() {
    let r = convert("1988-01-04T21:25:00+02:00", "Asia/Jerusalem");
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["gregorian_date"], "1988-01-04T21:25:00+02:00");
    assert_eq!(json["origin_timezone"], "Asia/Jerusalem");
    assert_eq!(json["hebrew_month_name"], "Tevet");
    assert_eq!(json["hebrew_day"], 14);
    assert_eq!(json["adjusted_hebrew_day"], 15);
    assert_eq!(json["after_nightfall"], true);
    assert_eq!(json["day_of_week"], 1);
    assert_eq!(json["planet"], "Moon");
    assert_eq!(json["sefira"], "Gevurah");
    assert_eq!(json["adjusted_date"]["day"], 15);
}

#[cfg(feature = "serde")]
#[test]
fn serde_hebrew_date_rejects_impossible_day() {
    let bad = r#"{"year": 5783, "month": "AdarII", "day": 1}"#;
    assert!(serde_json::from_str::<HebrewDate>(bad).is_err());
    let good = r#"{"year": 5784, "month": "AdarII", "day": 1}"#;
    let date: HebrewDate = serde_json::from_str(good).unwrap();
    assert_eq!(date.month_name(), "Adar II");
}
