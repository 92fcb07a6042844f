use super::{
    chrono::{DateLabelExt, WeekdayExt},
    enums::valid_csv,
    string::ToDashSeparators,
};
use crate::core::types::ReservationStatus;
use chrono::{NaiveDate, Weekday};

#[test]
fn weekday_ext_produces_short_labels() {
    let pairs = [
        (Weekday::Mon, "Mon"),
        (Weekday::Wed, "Wed"),
        (Weekday::Sun, "Sun"),
    ];
    for (weekday, expected) in pairs {
        assert_eq!(weekday.short_label(), expected);
    }
}

#[test]
fn date_label_ext_reads_weekday_and_month() {
    let date = NaiveDate::from_ymd_opt(2025, 3, 30).unwrap();
    assert_eq!(date.weekday_label(), "Sun");
    assert_eq!(date.month_label(), "Mar");

    let december = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
    assert_eq!(december.month_label(), "Dec");
}

#[test]
fn valid_csv_lists_enum_variants_as_strings() {
    let csv = valid_csv::<ReservationStatus>();
    assert_eq!(csv, "PENDING, CONFIRMED, CANCELLED, COMPLETED");
}

#[test]
fn to_dash_separators_replaces_and_trims() {
    let s = " 2025/01/02 ";
    assert_eq!(s.to_dash_separators(), "2025-01-02");

    let owned = "a/b/c".to_string();
    assert_eq!(owned.to_dash_separators(), "a-b-c");
}
