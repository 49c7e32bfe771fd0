use chrono::{TimeZone, Utc};
use reverse_dns_domain::SoaSerial;

#[test]
fn test_serial_is_timestamp_digits() {
    let at = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
    assert_eq!(SoaSerial::from_datetime(&at).value(), 20_240_501_000_000);
}

#[test]
fn test_serial_same_second_is_identical() {
    let first = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
    let later_in_same_second = first + chrono::Duration::milliseconds(900);

    assert_eq!(
        SoaSerial::from_datetime(&first),
        SoaSerial::from_datetime(&later_in_same_second)
    );
}

#[test]
fn test_serial_increases_across_seconds() {
    let before = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
    let after = before + chrono::Duration::seconds(1);

    let a = SoaSerial::from_datetime(&before);
    let b = SoaSerial::from_datetime(&after);
    assert!(b > a);
    assert_eq!(b.value(), 20_250_101_000_000);
}

#[test]
fn test_serial_display_matches_value() {
    let at = Utc.with_ymd_and_hms(2023, 1, 2, 3, 4, 5).unwrap();
    assert_eq!(SoaSerial::from_datetime(&at).to_string(), "20230102030405");
}
