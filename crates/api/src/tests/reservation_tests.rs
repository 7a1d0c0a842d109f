// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reservation handler tests.

use roombook_domain::ReservationState;
use time::Duration;

use crate::{
    ApiError, PublicReservationsQuery, ReservationInfo, create_reservation, delete_reservation,
    list_public_reservations, list_reservations, parse_room_ids,
};

use super::helpers::{NOW, reservation_request, setup_fixture};

#[test]
fn test_create_reservation_returns_joined_record() {
    let mut fixture = setup_fixture();

    let reservation: ReservationInfo = create_reservation(
        &mut fixture.persistence,
        &fixture.clerk,
        reservation_request(fixture.council_room_id, 2, 1),
        NOW,
    )
    .expect("Booking should succeed");

    assert_eq!(reservation.room_name, "Council Room");
    assert_eq!(reservation.building_name, "Town Hall");
    assert_eq!(reservation.user_id, fixture.clerk.user_id);
    assert_eq!(reservation.user_name, "Carl Clerk");
    assert_eq!(reservation.state, ReservationState::Confirmed);
    assert_eq!(reservation.start_time, NOW + Duration::hours(2));
    assert_eq!(reservation.description.as_deref(), Some("Committee meeting"));
}

#[test]
fn test_overlapping_reservation_conflicts() {
    let mut fixture = setup_fixture();
    create_reservation(
        &mut fixture.persistence,
        &fixture.clerk,
        reservation_request(fixture.council_room_id, 2, 2),
        NOW,
    )
    .unwrap();

    let result = create_reservation(
        &mut fixture.persistence,
        &fixture.admin,
        reservation_request(fixture.council_room_id, 3, 2),
        NOW,
    );

    assert!(matches!(result, Err(ApiError::Conflict { .. })));
}

#[test]
fn test_back_to_back_reservations_succeed() {
    let mut fixture = setup_fixture();
    create_reservation(
        &mut fixture.persistence,
        &fixture.clerk,
        reservation_request(fixture.council_room_id, 2, 1),
        NOW,
    )
    .unwrap();

    let result = create_reservation(
        &mut fixture.persistence,
        &fixture.clerk,
        reservation_request(fixture.council_room_id, 3, 1),
        NOW,
    );

    assert!(result.is_ok());
}

#[test]
fn test_inverted_interval_is_invalid_input() {
    let mut fixture = setup_fixture();
    let mut request = reservation_request(fixture.council_room_id, 2, 1);
    request.end_time = request.start_time;

    let result = create_reservation(&mut fixture.persistence, &fixture.clerk, request, NOW);

    assert!(matches!(result, Err(ApiError::InvalidInput { ref field, .. }) if field == "endTime"));
}

#[test]
fn test_past_start_is_invalid_input() {
    let mut fixture = setup_fixture();

    let result = create_reservation(
        &mut fixture.persistence,
        &fixture.clerk,
        reservation_request(fixture.council_room_id, -1, 2),
        NOW,
    );

    assert!(matches!(result, Err(ApiError::InvalidInput { ref field, .. }) if field == "startTime"));
}

#[test]
fn test_booking_outside_scope_is_forbidden() {
    let mut fixture = setup_fixture();

    let result = create_reservation(
        &mut fixture.persistence,
        &fixture.clerk,
        reservation_request(fixture.reading_room_id, 2, 1),
        NOW,
    );

    assert!(matches!(result, Err(ApiError::Forbidden { .. })));
}

#[test]
fn test_admin_without_assignment_cannot_book() {
    let mut fixture = setup_fixture();

    let result = create_reservation(
        &mut fixture.persistence,
        &fixture.admin,
        reservation_request(fixture.council_room_id, 2, 1),
        NOW,
    );

    assert!(matches!(result, Err(ApiError::Forbidden { .. })));
}

#[test]
fn test_list_reservations_is_scoped() {
    let mut fixture = setup_fixture();
    create_reservation(
        &mut fixture.persistence,
        &fixture.clerk,
        reservation_request(fixture.council_room_id, 2, 1),
        NOW,
    )
    .unwrap();
    create_reservation(
        &mut fixture.persistence,
        &fixture.outsider,
        reservation_request(fixture.reading_room_id, 2, 1),
        NOW,
    )
    .unwrap();

    let clerk_view = list_reservations(&mut fixture.persistence, &fixture.clerk).unwrap();
    let admin_view = list_reservations(&mut fixture.persistence, &fixture.admin).unwrap();

    assert_eq!(clerk_view.reservations.len(), 1);
    assert_eq!(clerk_view.reservations[0].room_id, fixture.council_room_id);
    assert_eq!(admin_view.reservations.len(), 2);
}

#[test]
fn test_public_listing_filters() {
    let mut fixture = setup_fixture();
    create_reservation(
        &mut fixture.persistence,
        &fixture.clerk,
        reservation_request(fixture.council_room_id, 2, 1),
        NOW,
    )
    .unwrap();
    create_reservation(
        &mut fixture.persistence,
        &fixture.outsider,
        reservation_request(fixture.reading_room_id, 4, 1),
        NOW,
    )
    .unwrap();

    let everything =
        list_public_reservations(&mut fixture.persistence, &PublicReservationsQuery::default())
            .unwrap();
    let by_building = list_public_reservations(
        &mut fixture.persistence,
        &PublicReservationsQuery {
            building_id: Some(fixture.library_id),
            room_ids: None,
        },
    )
    .unwrap();
    let by_rooms = list_public_reservations(
        &mut fixture.persistence,
        &PublicReservationsQuery {
            building_id: None,
            room_ids: Some(format!("{}", fixture.council_room_id)),
        },
    )
    .unwrap();

    assert_eq!(everything.reservations.len(), 2);
    assert!(everything.reservations[0].start_time < everything.reservations[1].start_time);
    assert_eq!(by_building.reservations.len(), 1);
    assert_eq!(by_building.reservations[0].room_id, fixture.reading_room_id);
    assert_eq!(by_rooms.reservations.len(), 1);
    assert_eq!(by_rooms.reservations[0].room_id, fixture.council_room_id);
}

#[test]
fn test_public_listing_rejects_malformed_room_ids() {
    let mut fixture = setup_fixture();
    let query = PublicReservationsQuery {
        building_id: None,
        room_ids: Some(String::from("1,two")),
    };

    let result = list_public_reservations(&mut fixture.persistence, &query);

    assert!(matches!(result, Err(ApiError::InvalidInput { ref field, .. }) if field == "roomIds"));
}

#[test]
fn test_parse_room_ids() {
    assert_eq!(parse_room_ids("1, 2,,3").unwrap(), Some(vec![1, 2, 3]));
    assert_eq!(parse_room_ids("").unwrap(), None);
    assert_eq!(parse_room_ids(" , ").unwrap(), None);
    assert!(parse_room_ids("4;5").is_err());
}

#[test]
fn test_delete_reservation_in_scope() {
    let mut fixture = setup_fixture();
    let reservation = create_reservation(
        &mut fixture.persistence,
        &fixture.clerk,
        reservation_request(fixture.council_room_id, 2, 1),
        NOW,
    )
    .unwrap();

    delete_reservation(
        &mut fixture.persistence,
        &fixture.clerk,
        reservation.reservation_id,
    )
    .unwrap();

    let remaining = list_reservations(&mut fixture.persistence, &fixture.admin).unwrap();
    assert!(remaining.reservations.is_empty());
}

#[test]
fn test_admin_may_delete_any_reservation() {
    let mut fixture = setup_fixture();
    let reservation = create_reservation(
        &mut fixture.persistence,
        &fixture.outsider,
        reservation_request(fixture.reading_room_id, 2, 1),
        NOW,
    )
    .unwrap();

    let result = delete_reservation(
        &mut fixture.persistence,
        &fixture.admin,
        reservation.reservation_id,
    );

    assert!(result.is_ok());
}

#[test]
fn test_delete_reservation_outside_scope_is_forbidden() {
    let mut fixture = setup_fixture();
    let reservation = create_reservation(
        &mut fixture.persistence,
        &fixture.outsider,
        reservation_request(fixture.reading_room_id, 2, 1),
        NOW,
    )
    .unwrap();

    let result = delete_reservation(
        &mut fixture.persistence,
        &fixture.clerk,
        reservation.reservation_id,
    );

    assert!(matches!(result, Err(ApiError::Forbidden { .. })));
}

#[test]
fn test_delete_missing_reservation_is_not_found() {
    let mut fixture = setup_fixture();

    let result = delete_reservation(&mut fixture.persistence, &fixture.clerk, 9_999);

    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}
