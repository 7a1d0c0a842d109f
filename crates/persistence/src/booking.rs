// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The transactional booking unit.
//!
//! [`BookingTx`] adapts a connection that is already inside a transaction
//! to the engine's [`BookingStore`] trait. The `create_reservation_*` and
//! `delete_reservation_*` functions open that transaction.
//!
//! Serialization differs per backend:
//!
//! - `SQLite` uses `BEGIN IMMEDIATE`, taking the database write lock before
//!   the conflict read
//! - `MySQL` locks the room row with `SELECT ... FOR UPDATE`, so bookings on
//!   the same room queue behind each other while other rooms proceed

use std::collections::BTreeSet;

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use roombook::{BookingStore, NewReservation, ReservationRecord, Requester};
use roombook_domain::{ReservationSlot, ReservationState, TimeRange};
use time::OffsetDateTime;
use tracing::debug;

use crate::diesel_schema::rooms;
use crate::error::PersistenceError;
use crate::{mutations, queries};

/// A connection borrowed for the duration of one transaction.
pub(crate) struct BookingTx<'a, C> {
    conn: &'a mut C,
}

impl<'a, C> BookingTx<'a, C> {
    pub(crate) const fn new(conn: &'a mut C) -> Self {
        Self { conn }
    }
}

/// Implements [`BookingStore`] for one backend by delegating to its
/// suffixed query and mutation functions.
macro_rules! booking_store {
    ($conn_ty:ty, $suffix:ident) => {
        pastey::paste! {
            impl BookingStore for BookingTx<'_, $conn_ty> {
                type Error = PersistenceError;

                fn authorized_buildings(
                    &mut self,
                    user_id: i64,
                ) -> Result<Option<BTreeSet<i64>>, PersistenceError> {
                    queries::[<get_authorized_buildings_ $suffix>](self.conn, user_id)
                }

                fn room_building(&mut self, room_id: i64) -> Result<Option<i64>, PersistenceError> {
                    queries::[<get_room_building_ $suffix>](self.conn, room_id)
                }

                fn reservations_for_room(
                    &mut self,
                    room_id: i64,
                ) -> Result<Vec<ReservationSlot>, PersistenceError> {
                    queries::[<list_room_slots_ $suffix>](self.conn, room_id)
                }

                fn insert_reservation(
                    &mut self,
                    user_id: i64,
                    room_id: i64,
                    range: &TimeRange,
                    description: Option<&str>,
                ) -> Result<ReservationRecord, PersistenceError> {
                    let reservation_id: i64 = mutations::[<insert_reservation_ $suffix>](
                        self.conn,
                        user_id,
                        room_id,
                        range,
                        description,
                        ReservationState::Confirmed,
                    )?;
                    queries::[<get_reservation_ $suffix>](self.conn, reservation_id)?.ok_or_else(
                        || {
                            PersistenceError::NotFound(format!(
                                "Reservation {reservation_id} vanished after insert"
                            ))
                        },
                    )
                }

                fn reservation_building(
                    &mut self,
                    reservation_id: i64,
                ) -> Result<Option<i64>, PersistenceError> {
                    queries::[<get_reservation_building_ $suffix>](self.conn, reservation_id)
                }

                fn remove_reservation(&mut self, reservation_id: i64) -> Result<(), PersistenceError> {
                    mutations::[<delete_reservation_row_ $suffix>](self.conn, reservation_id)
                }
            }
        }
    };
}

booking_store!(SqliteConnection, sqlite);
booking_store!(MysqlConnection, mysql);

/// Runs `attempt`, and runs it exactly once more if the first failure is
/// retryable. `on_retry` sees the first error before the second attempt.
///
/// # Errors
///
/// Returns the first error if it is not retryable, otherwise whatever the
/// second attempt returns.
pub fn retry_once<T, F, R>(mut attempt: F, on_retry: R) -> Result<T, PersistenceError>
where
    F: FnMut() -> Result<T, PersistenceError>,
    R: FnOnce(&PersistenceError),
{
    match attempt() {
        Err(err) if err.is_retryable() => {
            on_retry(&err);
            attempt()
        }
        result => result,
    }
}

/// Runs the booking engine inside a `BEGIN IMMEDIATE` transaction (`SQLite` version).
///
/// # Errors
///
/// Returns `PersistenceError::Booking` if the engine rejects the request,
/// `PersistenceError::SerializationFailure` if the write lock could not be
/// taken, or another error if the store fails. Nothing is written on error.
pub fn create_reservation_sqlite(
    conn: &mut SqliteConnection,
    requester: Requester,
    request: &NewReservation,
    now: OffsetDateTime,
) -> Result<ReservationRecord, PersistenceError> {
    conn.immediate_transaction(|conn| {
        let mut store = BookingTx::new(conn);
        roombook::create_reservation(&mut store, requester, request, now)
    })
}

/// Runs the booking engine inside a transaction holding the room row lock
/// (`MySQL` version).
///
/// # Errors
///
/// Returns `PersistenceError::Booking` if the engine rejects the request,
/// `PersistenceError::SerializationFailure` on deadlock, or another error if
/// the store fails. Nothing is written on error.
pub fn create_reservation_mysql(
    conn: &mut MysqlConnection,
    requester: Requester,
    request: &NewReservation,
    now: OffsetDateTime,
) -> Result<ReservationRecord, PersistenceError> {
    conn.transaction(|conn| {
        let locked: Option<i64> = rooms::table
            .find(request.room_id)
            .select(rooms::room_id)
            .for_update()
            .first(conn)
            .optional()?;
        debug!(room_id = request.room_id, locked = locked.is_some(), "Room row locked for booking");

        let mut store = BookingTx::new(conn);
        roombook::create_reservation(&mut store, requester, request, now)
    })
}

/// Deletes a reservation after the engine's access check (`SQLite` version).
///
/// # Errors
///
/// Returns `PersistenceError::Booking` if the reservation is missing or the
/// requester may not delete it.
pub fn delete_reservation_sqlite(
    conn: &mut SqliteConnection,
    requester: Requester,
    reservation_id: i64,
) -> Result<(), PersistenceError> {
    conn.immediate_transaction(|conn| {
        let mut store = BookingTx::new(conn);
        roombook::delete_reservation(&mut store, requester, reservation_id)
    })
}

/// Deletes a reservation after the engine's access check (`MySQL` version).
///
/// # Errors
///
/// Returns `PersistenceError::Booking` if the reservation is missing or the
/// requester may not delete it.
pub fn delete_reservation_mysql(
    conn: &mut MysqlConnection,
    requester: Requester,
    reservation_id: i64,
) -> Result<(), PersistenceError> {
    conn.transaction(|conn| {
        let mut store = BookingTx::new(conn);
        roombook::delete_reservation(&mut store, requester, reservation_id)
    })
}
