// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::macros::datetime;

use crate::{ReservationSlot, ReservationState, TimeRange, find_conflict, has_conflict};

fn ten_to_noon() -> TimeRange {
    TimeRange::new(
        datetime!(2030-05-01 10:00 UTC),
        datetime!(2030-05-01 12:00 UTC),
    )
    .unwrap()
}

fn eleven_to_one() -> TimeRange {
    TimeRange::new(
        datetime!(2030-05-01 11:00 UTC),
        datetime!(2030-05-01 13:00 UTC),
    )
    .unwrap()
}

fn noon_to_two() -> TimeRange {
    TimeRange::new(
        datetime!(2030-05-01 12:00 UTC),
        datetime!(2030-05-01 14:00 UTC),
    )
    .unwrap()
}

#[test]
fn test_no_existing_reservations_never_conflicts() {
    assert!(!has_conflict(&[], &ten_to_noon(), None));
}

#[test]
fn test_confirmed_overlap_conflicts() {
    let existing = [ReservationSlot::new(
        7,
        ten_to_noon(),
        ReservationState::Confirmed,
    )];
    let found = find_conflict(&existing, &eleven_to_one(), None);
    assert_eq!(found.map(|slot| slot.reservation_id), Some(7));
}

#[test]
fn test_pending_overlap_conflicts() {
    let existing = [ReservationSlot::new(
        3,
        ten_to_noon(),
        ReservationState::Pending,
    )];
    assert!(has_conflict(&existing, &eleven_to_one(), None));
}

#[test]
fn test_cancelled_reservation_is_ignored() {
    let existing = [ReservationSlot::new(
        3,
        ten_to_noon(),
        ReservationState::Cancelled,
    )];
    assert!(!has_conflict(&existing, &eleven_to_one(), None));
}

#[test]
fn test_touching_reservation_does_not_conflict() {
    let existing = [ReservationSlot::new(
        1,
        ten_to_noon(),
        ReservationState::Confirmed,
    )];
    assert!(!has_conflict(&existing, &noon_to_two(), None));
}

#[test]
fn test_excluded_reservation_is_skipped() {
    let existing = [ReservationSlot::new(
        9,
        ten_to_noon(),
        ReservationState::Confirmed,
    )];
    assert!(!has_conflict(&existing, &eleven_to_one(), Some(9)));
    assert!(has_conflict(&existing, &eleven_to_one(), Some(10)));
}

#[test]
fn test_exclusion_does_not_hide_other_conflicts() {
    let existing = [
        ReservationSlot::new(1, ten_to_noon(), ReservationState::Confirmed),
        ReservationSlot::new(2, noon_to_two(), ReservationState::Confirmed),
    ];
    let found = find_conflict(&existing, &eleven_to_one(), Some(1));
    assert_eq!(found.map(|slot| slot.reservation_id), Some(2));
}
