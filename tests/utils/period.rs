use chrono::NaiveDate;
use dateutil::period::*;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn parts(p: CalendarPeriod) -> (i32, i32, i32) {
    (p.years(), p.months(), p.days())
}

#[test]
fn test_between_days_one_month() {
    let p = between_days(20240101, 20240201).unwrap();
    assert_eq!(parts(p), (0, 1, 0));
}

#[test]
fn test_until_days_reverses_arguments() {
    let until = until_days(20240101, 20240201).unwrap();
    assert_eq!(parts(until), (0, -1, 0));

    assert_ne!(until, between_days(20240101, 20240201).unwrap());
    assert_eq!(until, between_days(20240201, 20240101).unwrap());
}

#[test]
fn test_text_forms_match_integer_forms() {
    assert_eq!(
        between_dates("2020-01-15", "2024-03-20").unwrap(),
        between_days(20200115, 20240320).unwrap()
    );
    assert_eq!(
        until_dates("2020-01-15", "2024-03-20").unwrap(),
        until_days(20200115, 20240320).unwrap()
    );
    assert_eq!(parts(between_dates("2020-01-15", "2024-03-20").unwrap()), (4, 2, 5));
}

#[test]
fn test_between_borrows_month_at_month_end() {
    // Jan 31 + 1 month clamps to Feb 29, one more day reaches Mar 1
    assert_eq!(parts(between(ymd(2024, 1, 31), ymd(2024, 3, 1))), (0, 1, 1));
    assert_eq!(parts(between(ymd(2023, 1, 31), ymd(2023, 3, 1))), (0, 1, 1));
    assert_eq!(parts(between(ymd(2024, 1, 15), ymd(2024, 2, 10))), (0, 0, 26));
}

#[test]
fn test_between_leap_day_anniversaries() {
    assert_eq!(parts(between(ymd(2020, 2, 29), ymd(2024, 2, 28))), (3, 11, 30));
    assert_eq!(parts(between(ymd(2020, 2, 29), ymd(2024, 2, 29))), (4, 0, 0));
}

#[test]
fn test_between_negative_spans() {
    assert_eq!(parts(between(ymd(2024, 3, 15), ymd(2024, 1, 20))), (0, -1, -26));
    assert_eq!(parts(between(ymd(2024, 3, 1), ymd(2022, 1, 15))), (-2, -1, -17));
    assert!(between(ymd(2024, 3, 1), ymd(2022, 1, 15)).is_negative());
}

#[test]
fn test_between_negative_span_subtracts_end_month_length() {
    assert_eq!(parts(between(ymd(2024, 3, 10), ymd(2024, 2, 20))), (0, 0, -19));
    assert_eq!(parts(between(ymd(2023, 3, 10), ymd(2023, 2, 20))), (0, 0, -18));
    assert_eq!(parts(between(ymd(2024, 5, 10), ymd(2024, 3, 31))), (0, -1, -10));
}

#[test]
fn test_between_same_day_is_zero() {
    let p = between(ymd(2024, 5, 5), ymd(2024, 5, 5));
    assert!(p.is_zero());
    assert_eq!(p, CalendarPeriod::zero());
    assert_eq!(p.to_string(), "P0D");
}

#[test]
fn test_add_to_reaches_end_date() {
    let cases = [
        (ymd(2024, 1, 31), ymd(2024, 3, 1)),
        (ymd(2020, 2, 29), ymd(2024, 2, 28)),
        (ymd(2019, 12, 25), ymd(2024, 1, 1)),
        (ymd(2024, 3, 15), ymd(2024, 1, 20)),
    ];
    for (start, end) in cases {
        assert_eq!(between(start, end).add_to(start), Some(end), "{start} -> {end}");
    }
}

#[test]
fn test_display_iso_notation() {
    assert_eq!(CalendarPeriod::new(1, 2, 3).to_string(), "P1Y2M3D");
    assert_eq!(CalendarPeriod::new(0, -1, -26).to_string(), "P-1M-26D");
    assert_eq!(CalendarPeriod::new(2, 0, 0).to_string(), "P2Y");
}

#[test]
fn test_total_months_and_negation() {
    let p = CalendarPeriod::new(2, 3, 10);
    assert_eq!(p.total_months(), 27);
    assert_eq!(p.negated(), CalendarPeriod::new(-2, -3, -10));
    assert!(!p.is_negative());
    assert!(p.negated().is_negative());
}

#[test]
fn test_parse_errors_propagate() {
    assert!(between_days(20241332, 20240101).unwrap_err().is_parse_error());
    assert!(until_days(20240101, 2024011).unwrap_err().is_parse_error());
    assert!(between_dates("2024-01-01", "2024-13-01").unwrap_err().is_parse_error());
    assert!(until_dates("01/01/2024", "2024-01-01").unwrap_err().is_parse_error());
}

#[test]
fn test_serialization() {
    let p = between_days(20240101, 20240201).unwrap();
    let json = serde_json::to_string(&p).unwrap();
    assert_eq!(json, r#"{"years":0,"months":1,"days":0}"#);

    let back: CalendarPeriod = serde_json::from_str(&json).unwrap();
    assert_eq!(back, p);
}
