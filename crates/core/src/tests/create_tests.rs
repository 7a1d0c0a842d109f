// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use roombook_domain::{DomainError, ReservationState, Role};
use time::macros::datetime;

use super::helpers::{
    COUNCIL_ROOM, CLERK_ID, FakeStore, NOW, READING_ROOM, TOWN_HALL, admin, booking, clerk,
    outsider, range,
};
use crate::{CoreError, NewReservation, Requester, create_reservation};

#[test]
fn test_create_reservation_returns_joined_record() {
    let mut store: FakeStore = FakeStore::seeded();
    let mut request: NewReservation = booking(
        COUNCIL_ROOM,
        datetime!(2030-05-01 10:00 UTC),
        datetime!(2030-05-01 12:00 UTC),
    );
    request.description = Some(String::from("Budget hearing"));

    let record = create_reservation(&mut store, clerk(), &request, NOW).unwrap();

    assert_eq!(record.room_id, COUNCIL_ROOM);
    assert_eq!(record.room_name, "Council Chamber");
    assert_eq!(record.building_id, TOWN_HALL);
    assert_eq!(record.building_name, "Town Hall");
    assert_eq!(record.user_id, CLERK_ID);
    assert_eq!(record.user_name, "Carl Clerk");
    assert_eq!(record.state, ReservationState::Confirmed);
    assert_eq!(record.description.as_deref(), Some("Budget hearing"));
    assert_eq!(store.reservation_count(), 1);
}

#[test]
fn test_create_reservation_rejects_equal_endpoints() {
    let mut store: FakeStore = FakeStore::seeded();
    let at = datetime!(2030-05-01 14:00 UTC);
    let result = create_reservation(&mut store, clerk(), &booking(COUNCIL_ROOM, at, at), NOW);
    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::InvalidInterval { .. }))
    ));
    assert_eq!(store.reservation_count(), 0);
}

#[test]
fn test_invalid_interval_checked_before_past_date() {
    let mut store: FakeStore = FakeStore::seeded();
    let request: NewReservation = booking(
        COUNCIL_ROOM,
        datetime!(2020-01-01 12:00 UTC),
        datetime!(2020-01-01 11:00 UTC),
    );
    let result = create_reservation(&mut store, clerk(), &request, NOW);
    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::InvalidInterval { .. }))
    ));
}

#[test]
fn test_create_reservation_rejects_past_start() {
    let mut store: FakeStore = FakeStore::seeded();
    let request: NewReservation = booking(
        COUNCIL_ROOM,
        datetime!(2030-05-01 07:59:59 UTC),
        datetime!(2030-05-01 09:00 UTC),
    );
    let result = create_reservation(&mut store, clerk(), &request, NOW);
    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::PastDateRejected { .. }))
    ));
}

#[test]
fn test_create_reservation_accepts_start_exactly_now() {
    let mut store: FakeStore = FakeStore::seeded();
    let request: NewReservation = booking(COUNCIL_ROOM, NOW, datetime!(2030-05-01 09:00 UTC));
    assert!(create_reservation(&mut store, clerk(), &request, NOW).is_ok());
}

#[test]
fn test_past_date_checked_before_authentication() {
    let mut store: FakeStore = FakeStore::seeded();
    let ghost: Requester = Requester::new(999, Role::User);
    let request: NewReservation = booking(
        COUNCIL_ROOM,
        datetime!(2020-01-01 10:00 UTC),
        datetime!(2020-01-01 11:00 UTC),
    );
    let result = create_reservation(&mut store, ghost, &request, NOW);
    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::PastDateRejected { .. }))
    ));
}

#[test]
fn test_unknown_requester_is_unauthenticated() {
    let mut store: FakeStore = FakeStore::seeded();
    let ghost: Requester = Requester::new(999, Role::User);
    let request: NewReservation = booking(
        COUNCIL_ROOM,
        datetime!(2030-05-01 10:00 UTC),
        datetime!(2030-05-01 11:00 UTC),
    );
    let result = create_reservation(&mut store, ghost, &request, NOW);
    assert_eq!(result, Err(CoreError::Unauthenticated { user_id: 999 }));
}

#[test]
fn test_unassigned_user_is_forbidden_for_free_interval() {
    let mut store: FakeStore = FakeStore::seeded();
    let request: NewReservation = booking(
        COUNCIL_ROOM,
        datetime!(2030-05-01 10:00 UTC),
        datetime!(2030-05-01 11:00 UTC),
    );
    let result = create_reservation(&mut store, outsider(), &request, NOW);
    assert!(matches!(result, Err(CoreError::RoomAccessDenied { .. })));
    assert_eq!(store.reservation_count(), 0);
}

#[test]
fn test_admin_without_assignment_cannot_book() {
    let mut store: FakeStore = FakeStore::seeded();
    let request: NewReservation = booking(
        READING_ROOM,
        datetime!(2030-05-01 10:00 UTC),
        datetime!(2030-05-01 11:00 UTC),
    );
    let result = create_reservation(&mut store, admin(), &request, NOW);
    assert!(matches!(result, Err(CoreError::RoomAccessDenied { .. })));
}

#[test]
fn test_unknown_room_is_forbidden() {
    let mut store: FakeStore = FakeStore::seeded();
    let request: NewReservation = booking(
        4242,
        datetime!(2030-05-01 10:00 UTC),
        datetime!(2030-05-01 11:00 UTC),
    );
    let result = create_reservation(&mut store, clerk(), &request, NOW);
    assert_eq!(
        result,
        Err(CoreError::RoomAccessDenied {
            user_id: CLERK_ID,
            room_id: 4242
        })
    );
}

#[test]
fn test_overlapping_booking_is_a_conflict() {
    let mut store: FakeStore = FakeStore::seeded();
    let first = create_reservation(
        &mut store,
        clerk(),
        &booking(
            COUNCIL_ROOM,
            datetime!(2030-05-01 10:00 UTC),
            datetime!(2030-05-01 12:00 UTC),
        ),
        NOW,
    )
    .unwrap();

    let result = create_reservation(
        &mut store,
        clerk(),
        &booking(
            COUNCIL_ROOM,
            datetime!(2030-05-01 11:00 UTC),
            datetime!(2030-05-01 13:00 UTC),
        ),
        NOW,
    );
    assert_eq!(
        result,
        Err(CoreError::SchedulingConflict {
            room_id: COUNCIL_ROOM,
            conflicting_reservation_id: first.reservation_id
        })
    );
    assert_eq!(store.reservation_count(), 1);
}

#[test]
fn test_touching_bookings_both_succeed() {
    let mut store: FakeStore = FakeStore::seeded();
    let morning = booking(
        COUNCIL_ROOM,
        datetime!(2030-05-01 10:00 UTC),
        datetime!(2030-05-01 12:00 UTC),
    );
    let afternoon = booking(
        COUNCIL_ROOM,
        datetime!(2030-05-01 12:00 UTC),
        datetime!(2030-05-01 14:00 UTC),
    );
    assert!(create_reservation(&mut store, clerk(), &morning, NOW).is_ok());
    assert!(create_reservation(&mut store, clerk(), &afternoon, NOW).is_ok());
    assert_eq!(store.reservation_count(), 2);
}

#[test]
fn test_same_interval_in_another_room_is_not_a_conflict() {
    let mut store: FakeStore = FakeStore::seeded();
    store.assign(CLERK_ID, super::helpers::LIBRARY);
    let start = datetime!(2030-05-01 10:00 UTC);
    let end = datetime!(2030-05-01 12:00 UTC);
    assert!(create_reservation(&mut store, clerk(), &booking(COUNCIL_ROOM, start, end), NOW).is_ok());
    assert!(create_reservation(&mut store, clerk(), &booking(READING_ROOM, start, end), NOW).is_ok());
}

#[test]
fn test_cancelled_reservation_does_not_block() {
    let mut store: FakeStore = FakeStore::seeded();
    store.seed_reservation(
        COUNCIL_ROOM,
        range(
            datetime!(2030-05-01 10:00 UTC),
            datetime!(2030-05-01 12:00 UTC),
        ),
        ReservationState::Cancelled,
    );
    let request = booking(
        COUNCIL_ROOM,
        datetime!(2030-05-01 11:00 UTC),
        datetime!(2030-05-01 12:00 UTC),
    );
    assert!(create_reservation(&mut store, clerk(), &request, NOW).is_ok());
}

#[test]
fn test_pending_reservation_blocks() {
    let mut store: FakeStore = FakeStore::seeded();
    store.seed_reservation(
        COUNCIL_ROOM,
        range(
            datetime!(2030-05-01 10:00 UTC),
            datetime!(2030-05-01 12:00 UTC),
        ),
        ReservationState::Pending,
    );
    let request = booking(
        COUNCIL_ROOM,
        datetime!(2030-05-01 09:00 UTC),
        datetime!(2030-05-01 10:30 UTC),
    );
    assert!(matches!(
        create_reservation(&mut store, clerk(), &request, NOW),
        Err(CoreError::SchedulingConflict { .. })
    ));
}

#[test]
fn test_no_double_booking_after_many_attempts() {
    let mut store: FakeStore = FakeStore::seeded();
    let base = datetime!(2030-05-02 00:00 UTC);
    // Half-hour offsets with 90 minute lengths overlap heavily.
    for step in 0..24_i64 {
        let start = base + time::Duration::minutes(30 * step);
        let end = start + time::Duration::minutes(90);
        let _ = create_reservation(&mut store, clerk(), &booking(COUNCIL_ROOM, start, end), NOW);
    }

    let slots = crate::BookingStore::reservations_for_room(&mut store, COUNCIL_ROOM).unwrap();
    for (i, a) in slots.iter().enumerate() {
        for b in &slots[i + 1..] {
            assert!(!a.range.overlaps(&b.range), "{a:?} overlaps {b:?}");
        }
    }
    assert_eq!(slots.len(), 8);
}
