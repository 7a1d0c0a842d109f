// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::OffsetDateTime;
use time::macros::datetime;

use crate::{DomainError, TimeRange};

fn range(start: OffsetDateTime, end: OffsetDateTime) -> TimeRange {
    TimeRange::new(start, end).unwrap()
}

#[test]
fn test_time_range_rejects_equal_endpoints() {
    let at: OffsetDateTime = datetime!(2030-05-01 14:00 UTC);
    let result: Result<TimeRange, DomainError> = TimeRange::new(at, at);
    assert!(matches!(result, Err(DomainError::InvalidInterval { .. })));
}

#[test]
fn test_time_range_rejects_reversed_endpoints() {
    let result: Result<TimeRange, DomainError> = TimeRange::new(
        datetime!(2030-05-01 16:00 UTC),
        datetime!(2030-05-01 14:00 UTC),
    );
    assert!(matches!(result, Err(DomainError::InvalidInterval { .. })));
}

#[test]
fn test_overlapping_ranges_conflict() {
    let first: TimeRange = range(
        datetime!(2030-05-01 10:00 UTC),
        datetime!(2030-05-01 12:00 UTC),
    );
    let second: TimeRange = range(
        datetime!(2030-05-01 11:00 UTC),
        datetime!(2030-05-01 13:00 UTC),
    );
    assert!(first.overlaps(&second));
    assert!(second.overlaps(&first));
}

#[test]
fn test_touching_ranges_do_not_overlap() {
    let morning: TimeRange = range(
        datetime!(2030-05-01 10:00 UTC),
        datetime!(2030-05-01 12:00 UTC),
    );
    let afternoon: TimeRange = range(
        datetime!(2030-05-01 12:00 UTC),
        datetime!(2030-05-01 14:00 UTC),
    );
    assert!(!morning.overlaps(&afternoon));
    assert!(!afternoon.overlaps(&morning));
}

#[test]
fn test_contained_range_overlaps() {
    let outer: TimeRange = range(
        datetime!(2030-05-01 08:00 UTC),
        datetime!(2030-05-01 20:00 UTC),
    );
    let inner: TimeRange = range(
        datetime!(2030-05-01 12:00 UTC),
        datetime!(2030-05-01 12:30 UTC),
    );
    assert!(outer.overlaps(&inner));
    assert!(inner.overlaps(&outer));
}

#[test]
fn test_offsets_compare_as_instants() {
    // 12:00+02:00 is 10:00 UTC, so this touches a 08:00-10:00 UTC booking.
    let utc: TimeRange = range(
        datetime!(2030-05-01 08:00 UTC),
        datetime!(2030-05-01 10:00 UTC),
    );
    let offset: TimeRange = range(
        datetime!(2030-05-01 12:00 +2),
        datetime!(2030-05-01 13:00 +2),
    );
    assert!(!utc.overlaps(&offset));
}

#[test]
fn test_ensure_not_past_accepts_exactly_now() {
    let now: OffsetDateTime = datetime!(2030-05-01 10:00 UTC);
    let booking: TimeRange = range(now, datetime!(2030-05-01 11:00 UTC));
    assert!(booking.ensure_not_past(now).is_ok());
}

#[test]
fn test_ensure_not_past_rejects_one_second_ago() {
    let now: OffsetDateTime = datetime!(2030-05-01 10:00:01 UTC);
    let booking: TimeRange = range(
        datetime!(2030-05-01 10:00 UTC),
        datetime!(2030-05-01 11:00 UTC),
    );
    assert!(matches!(
        booking.ensure_not_past(now),
        Err(DomainError::PastDateRejected { .. })
    ));
}

#[test]
fn test_from_unix_seconds_restores_instants() {
    let booking: TimeRange = range(
        datetime!(2030-05-01 10:00 UTC),
        datetime!(2030-05-01 11:00 UTC),
    );
    let restored: TimeRange =
        TimeRange::from_unix_seconds(booking.start_unix(), booking.end_unix()).unwrap();
    assert_eq!(restored, booking);
}

#[test]
fn test_from_unix_seconds_rejects_out_of_range() {
    let result: Result<TimeRange, DomainError> = TimeRange::from_unix_seconds(0, i64::MAX);
    assert_eq!(result, Err(DomainError::TimestampOutOfRange(i64::MAX)));
}

#[test]
fn test_time_range_rejects_sub_second_interval() {
    let result: Result<TimeRange, DomainError> = TimeRange::new(
        datetime!(2030-05-01 10:00:00.200 UTC),
        datetime!(2030-05-01 10:00:00.700 UTC),
    );
    assert!(matches!(result, Err(DomainError::InvalidInterval { .. })));
}

#[test]
fn test_time_range_drops_fractional_seconds() {
    let booking: TimeRange = range(
        datetime!(2030-05-01 10:00:00.250 UTC),
        datetime!(2030-05-01 11:00:00.999 UTC),
    );
    assert_eq!(booking.start(), datetime!(2030-05-01 10:00 UTC));
    assert_eq!(booking.end(), datetime!(2030-05-01 11:00 UTC));

    let restored: TimeRange =
        TimeRange::from_unix_seconds(booking.start_unix(), booking.end_unix()).unwrap();
    assert_eq!(restored, booking);
}

#[test]
fn test_ensure_not_past_accepts_same_second_as_now() {
    let now: OffsetDateTime = datetime!(2030-05-01 10:00:00.800 UTC);
    let booking: TimeRange = range(
        datetime!(2030-05-01 10:00:00.300 UTC),
        datetime!(2030-05-01 11:00 UTC),
    );
    assert!(booking.ensure_not_past(now).is_ok());
}
