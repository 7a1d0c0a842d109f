// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeSet;

use roombook_domain::{ReservationSlot, TimeRange};

use crate::error::CoreError;
use crate::state::ReservationRecord;

/// The reads and writes the booking engine needs from a store.
///
/// Implementations are expected to be scoped to a single transaction so
/// that the conflict read and the insert observe the same snapshot.
pub trait BookingStore {
    /// The store's error type. Engine rejections are lifted into it so a
    /// rejected booking unwinds the surrounding transaction.
    type Error: From<CoreError>;

    /// Returns the building ids assigned to `user_id`.
    ///
    /// `Ok(None)` means the user does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn authorized_buildings(&mut self, user_id: i64)
    -> Result<Option<BTreeSet<i64>>, Self::Error>;

    /// Returns the building that owns `room_id`, or `None` if no such room.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn room_building(&mut self, room_id: i64) -> Result<Option<i64>, Self::Error>;

    /// Returns every reservation held on `room_id`, in any state.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn reservations_for_room(&mut self, room_id: i64)
    -> Result<Vec<ReservationSlot>, Self::Error>;

    /// Inserts a CONFIRMED reservation and returns it joined with its room
    /// and building.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    fn insert_reservation(
        &mut self,
        user_id: i64,
        room_id: i64,
        range: &TimeRange,
        description: Option<&str>,
    ) -> Result<ReservationRecord, Self::Error>;

    /// Returns the building of the room a reservation is held on.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn reservation_building(&mut self, reservation_id: i64) -> Result<Option<i64>, Self::Error>;

    /// Removes a reservation row.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    fn remove_reservation(&mut self, reservation_id: i64) -> Result<(), Self::Error>;
}
