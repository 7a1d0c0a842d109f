// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use roombook_domain::{ReservationState, TimeRange};
use tracing::info;

use super::current_timestamp;
use crate::backend::PersistenceBackend;
use crate::diesel_schema::reservations;
use crate::error::PersistenceError;

backend_fn! {
/// Inserts a reservation row in the given state.
///
/// Performs no conflict or access check; use the booking transaction for
/// user-facing creates.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_reservation(
    conn: &mut _,
    user_id: i64,
    room_id: i64,
    range: &TimeRange,
    description: Option<&str>,
    state: ReservationState,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(reservations::table)
        .values((
            reservations::room_id.eq(room_id),
            reservations::user_id.eq(user_id),
            reservations::start_at.eq(range.start_unix()),
            reservations::end_at.eq(range.end_unix()),
            reservations::description.eq(description),
            reservations::state.eq(state.as_str()),
            reservations::created_at.eq(current_timestamp()?),
        ))
        .execute(conn)?;

    let reservation_id: i64 = conn.get_last_insert_rowid()?;

    info!(reservation_id, room_id, user_id, state = state.as_str(), "Reservation inserted");
    Ok(reservation_id)
}
}

backend_fn! {
/// Deletes a reservation row.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the reservation does not exist.
pub fn delete_reservation_row(conn: &mut _, reservation_id: i64) -> Result<(), PersistenceError> {
    let rows_affected: usize = diesel::delete(reservations::table)
        .filter(reservations::reservation_id.eq(reservation_id))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Reservation with ID {reservation_id} not found"
        )));
    }

    info!(reservation_id, "Reservation deleted");
    Ok(())
}
}
