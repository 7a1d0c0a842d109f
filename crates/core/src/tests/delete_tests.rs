// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use roombook_domain::{ReservationState, Role};
use time::macros::datetime;

use super::helpers::{
    COUNCIL_ROOM, FakeStore, OUTSIDER_ID, READING_ROOM, admin, clerk, outsider, range,
};
use crate::{CoreError, Requester, delete_reservation};

fn seed_council_booking(store: &mut FakeStore) -> i64 {
    store.seed_reservation(
        COUNCIL_ROOM,
        range(
            datetime!(2030-05-01 10:00 UTC),
            datetime!(2030-05-01 12:00 UTC),
        ),
        ReservationState::Confirmed,
    )
}

#[test]
fn test_assigned_user_can_delete() {
    let mut store: FakeStore = FakeStore::seeded();
    let id: i64 = seed_council_booking(&mut store);
    delete_reservation(&mut store, clerk(), id).unwrap();
    assert!(!store.contains_reservation(id));
}

#[test]
fn test_admin_can_delete_anywhere() {
    let mut store: FakeStore = FakeStore::seeded();
    let id: i64 = store.seed_reservation(
        READING_ROOM,
        range(
            datetime!(2030-05-01 10:00 UTC),
            datetime!(2030-05-01 12:00 UTC),
        ),
        ReservationState::Confirmed,
    );
    delete_reservation(&mut store, admin(), id).unwrap();
    assert_eq!(store.reservation_count(), 0);
}

#[test]
fn test_unassigned_user_cannot_delete() {
    let mut store: FakeStore = FakeStore::seeded();
    let id: i64 = seed_council_booking(&mut store);
    let result = delete_reservation(&mut store, outsider(), id);
    assert_eq!(
        result,
        Err(CoreError::ReservationAccessDenied {
            user_id: OUTSIDER_ID,
            reservation_id: id
        })
    );
    assert!(store.contains_reservation(id));
}

#[test]
fn test_delete_missing_reservation_is_not_found() {
    let mut store: FakeStore = FakeStore::seeded();
    let result = delete_reservation(&mut store, admin(), 77);
    assert_eq!(result, Err(CoreError::ReservationNotFound(77)));
}

#[test]
fn test_delete_by_unknown_requester_is_unauthenticated() {
    let mut store: FakeStore = FakeStore::seeded();
    let id: i64 = seed_council_booking(&mut store);
    let result = delete_reservation(&mut store, Requester::new(555, Role::Admin), id);
    assert_eq!(result, Err(CoreError::Unauthenticated { user_id: 555 }));
}

#[test]
fn test_cancelled_reservation_can_be_deleted() {
    let mut store: FakeStore = FakeStore::seeded();
    let id: i64 = store.seed_reservation(
        COUNCIL_ROOM,
        range(
            datetime!(2030-05-01 10:00 UTC),
            datetime!(2030-05-01 12:00 UTC),
        ),
        ReservationState::Cancelled,
    );
    assert!(delete_reservation(&mut store, clerk(), id).is_ok());
}
