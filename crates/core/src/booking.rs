// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use roombook_domain::{AccessScope, ReservationSlot, TimeRange, find_conflict};
use time::OffsetDateTime;
use tracing::debug;

use crate::access::resolve_scope;
use crate::command::{NewReservation, Requester};
use crate::error::CoreError;
use crate::state::ReservationRecord;
use crate::store::BookingStore;

/// Creates a reservation.
///
/// The checks run in a fixed order and the first failure wins:
///
/// 1. `start < end`, else `InvalidInterval`
/// 2. `start >= now`, else `PastDateRejected`
/// 3. the requester exists, else `Unauthenticated`
/// 4. the room's building is in the requester's scope, else `RoomAccessDenied`
/// 5. no active reservation overlaps, else `SchedulingConflict`
///
/// The reservation is then inserted as CONFIRMED and returned joined with
/// its room and building.
///
/// Steps 3 onward touch the store. Callers must run this inside one write
/// transaction for the conflict check to be meaningful.
///
/// # Arguments
///
/// * `store` - A transaction-scoped store
/// * `requester` - Who is booking
/// * `request` - What is being booked
/// * `now` - The current instant
///
/// # Errors
///
/// Returns the first failed check above lifted into the store's error
/// type, or the store's own error if a read or the insert fails.
pub fn create_reservation<S: BookingStore>(
    store: &mut S,
    requester: Requester,
    request: &NewReservation,
    now: OffsetDateTime,
) -> Result<ReservationRecord, S::Error> {
    let range: TimeRange =
        TimeRange::new(request.start, request.end).map_err(CoreError::DomainViolation)?;
    range
        .ensure_not_past(now)
        .map_err(CoreError::DomainViolation)?;

    let scope: AccessScope = resolve_scope(store, requester)?;

    let room_building: Option<i64> = store.room_building(request.room_id)?;
    if !scope.can_access_room(room_building) {
        return Err(CoreError::RoomAccessDenied {
            user_id: requester.user_id,
            room_id: request.room_id,
        }
        .into());
    }

    let existing: Vec<ReservationSlot> = store.reservations_for_room(request.room_id)?;
    if let Some(conflict) = find_conflict(&existing, &range, None) {
        debug!(
            room_id = request.room_id,
            conflicting_reservation_id = conflict.reservation_id,
            "Booking rejected by conflict detector"
        );
        return Err(CoreError::SchedulingConflict {
            room_id: request.room_id,
            conflicting_reservation_id: conflict.reservation_id,
        }
        .into());
    }

    store.insert_reservation(
        requester.user_id,
        request.room_id,
        &range,
        request.description.as_deref(),
    )
}

/// Deletes a reservation.
///
/// Permitted for ADMIN, or when the reservation's building is in the
/// requester's assignment set. The row is removed outright.
///
/// # Errors
///
/// Returns an error if:
/// - The reservation does not exist (`ReservationNotFound`)
/// - The requester does not exist (`Unauthenticated`)
/// - The requester is outside the reservation's building (`ReservationAccessDenied`)
pub fn delete_reservation<S: BookingStore>(
    store: &mut S,
    requester: Requester,
    reservation_id: i64,
) -> Result<(), S::Error> {
    let building_id: i64 = store
        .reservation_building(reservation_id)?
        .ok_or(CoreError::ReservationNotFound(reservation_id))?;

    let scope: AccessScope = resolve_scope(store, requester)?;
    if !scope.can_administer_building(building_id) {
        return Err(CoreError::ReservationAccessDenied {
            user_id: requester.user_id,
            reservation_id,
        }
        .into());
    }

    store.remove_reservation(reservation_id)
}
