use chrono::NaiveDate;
use dateutil::constants::{DAY_COMPACT, DAY_DASHED, TIME_COMPACT, TIME_DASHED};
use dateutil::utils::pattern::*;
use dateutil::DateError;

#[test]
fn test_pattern_constants() {
    assert_eq!(DAY_COMPACT.layout(), "yyyyMMdd");
    assert_eq!(DAY_DASHED.strftime(), "%Y-%m-%d");
    assert_eq!(TIME_COMPACT.layout(), "yyyyMMddHHmmss");
    assert_eq!(TIME_DASHED.layout(), "yyyy-MM-dd HH:mm:ss");
}

#[test]
fn test_day_integer_round_trip() {
    for value in [20240115, 20240229, 19991231, 10000101, 99991231] {
        let date = parse_day_integer(value).unwrap();
        assert_eq!(day_as_integer(date), value);
        assert_eq!(DAY_COMPACT.format_date(date), value.to_string());
    }
}

#[test]
fn test_parse_day_text() {
    let date = parse_day_text("2024-01-15").unwrap();
    assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    assert_eq!(DAY_DASHED.format_date(date), "2024-01-15");
}

#[test]
fn test_invalid_month_and_day_is_calendar_error() {
    let err = parse_day_integer(20241332).unwrap_err();
    assert!(err.is_parse_error());
    assert!(matches!(err, DateError::Calendar { pattern: "yyyyMMdd", .. }));
}

#[test]
fn test_day_out_of_range_for_month() {
    assert!(parse_day_integer(20230229).is_err());
    assert!(parse_day_integer(20240229).is_ok());
    assert!(parse_day_text("2024-02-30").unwrap_err().is_parse_error());
    assert!(parse_day_text("2024-04-31").is_err());
    assert!(parse_day_text("2024-00-10").is_err());
}

#[test]
fn test_wrong_width_is_layout_error() {
    for value in [2024011, 120240101, -20240101, 0] {
        let err = parse_day_integer(value).unwrap_err();
        assert!(matches!(err, DateError::Layout { .. }), "{value} should fail layout");
    }
}

#[test]
fn test_layout_rejects_bad_shapes() {
    assert!(DAY_DASHED.check_layout("2024-01-15").is_ok());
    assert!(DAY_DASHED.check_layout("2024/01/15").is_err());
    assert!(DAY_DASHED.check_layout("2024-1-15").is_err());
    assert!(DAY_DASHED.check_layout("2024-01-15 ").is_err());
    assert!(DAY_DASHED.check_layout("+024-01-15").is_err());
    assert!(DAY_COMPACT.check_layout("２０２４0115").is_err());
    assert!(DAY_COMPACT.check_layout("").is_err());
}

#[test]
fn test_parse_time_text_and_integer() {
    let moment = parse_time_text("2024-01-15 14:30:22").unwrap();
    assert_eq!(time_as_integer(moment), 20240115143022);
    assert_eq!(parse_time_integer(20240115143022).unwrap(), moment);
    assert_eq!(TIME_COMPACT.format_datetime(moment), "20240115143022");
    assert_eq!(TIME_DASHED.format_datetime(moment), "2024-01-15 14:30:22");
}

#[test]
fn test_parse_time_rejects_out_of_range_fields() {
    assert!(parse_time_text("2024-01-15 24:00:00").unwrap_err().is_parse_error());
    assert!(parse_time_text("2024-01-15 12:60:00").is_err());
    assert!(parse_time_text("2024-01-15 23:59:60").unwrap_err().is_parse_error());
    assert!(parse_time_integer(20240115235960).is_err());
    assert!(parse_time_text("2024-01-15T14:30:22").is_err());
}

#[test]
fn test_error_messages_name_the_pattern() {
    let err = parse_day_text("15/01/2024").unwrap_err();
    assert_eq!(err.to_string(), "'15/01/2024' does not match pattern yyyy-MM-dd");

    let err = parse_day_integer(20241332).unwrap_err();
    assert!(err.to_string().starts_with("'20241332' is not a valid value for pattern yyyyMMdd"));
}

#[test]
fn test_year_zero_is_rejected() {
    let err = parse_day_text("0000-01-01").unwrap_err();
    assert!(matches!(err, DateError::Calendar { pattern: "yyyy-MM-dd", .. }));
    assert!(parse_day_integer(10101).is_err());
    assert!(parse_time_text("0000-12-31 23:59:59").unwrap_err().is_parse_error());
    assert!(parse_day_text("0001-01-01").is_ok());
}
