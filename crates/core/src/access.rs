// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Access scoping operations backed by a store.

use std::collections::BTreeSet;

use roombook_domain::{AccessScope, TimeRange};

use crate::command::Requester;
use crate::error::CoreError;
use crate::store::BookingStore;

/// Returns the buildings a user is assigned to.
///
/// # Arguments
///
/// * `store` - The store to read from
/// * `user_id` - The user to resolve
///
/// # Errors
///
/// Returns `CoreError::UserNotFound` if the user does not exist, or the
/// store's own error if the read fails. A user with no assignments gets an
/// empty set, not an error.
pub fn authorized_buildings<S: BookingStore>(
    store: &mut S,
    user_id: i64,
) -> Result<BTreeSet<i64>, S::Error> {
    store
        .authorized_buildings(user_id)?
        .ok_or_else(|| CoreError::UserNotFound(user_id).into())
}

/// Returns whether a user may book a room.
///
/// True iff the room's building is in the user's assignment set. An
/// unknown room yields `false`. The ADMIN role is not consulted.
///
/// # Errors
///
/// Returns `CoreError::UserNotFound` if the user does not exist.
pub fn can_access_room<S: BookingStore>(
    store: &mut S,
    user_id: i64,
    room_id: i64,
) -> Result<bool, S::Error> {
    let buildings: BTreeSet<i64> = authorized_buildings(store, user_id)?;
    let room_building: Option<i64> = store.room_building(room_id)?;
    Ok(room_building.is_some_and(|building_id| buildings.contains(&building_id)))
}

/// Resolves the requester into an [`AccessScope`].
///
/// # Errors
///
/// Returns `CoreError::Unauthenticated` if the requester does not exist.
pub fn resolve_scope<S: BookingStore>(
    store: &mut S,
    requester: Requester,
) -> Result<AccessScope, S::Error> {
    let buildings: BTreeSet<i64> =
        store
            .authorized_buildings(requester.user_id)?
            .ok_or(CoreError::Unauthenticated {
                user_id: requester.user_id,
            })?;
    Ok(AccessScope::new(requester.user_id, requester.role, buildings))
}

/// Returns whether `range` collides with an active reservation on the room.
///
/// # Arguments
///
/// * `store` - The store to read from, ideally inside the write transaction
/// * `room_id` - The room to check
/// * `range` - The candidate interval
/// * `exclude_reservation_id` - A reservation to ignore, if any
///
/// # Errors
///
/// Returns the store's error if the read fails.
pub fn has_conflict<S: BookingStore>(
    store: &mut S,
    room_id: i64,
    range: &TimeRange,
    exclude_reservation_id: Option<i64>,
) -> Result<bool, S::Error> {
    let existing = store.reservations_for_room(room_id)?;
    Ok(roombook_domain::has_conflict(
        &existing,
        range,
        exclude_reservation_id,
    ))
}
