// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reservation queries.
//!
//! Stored instants are Unix seconds; rows are mapped back into
//! [`TimeRange`] and [`ReservationState`] here so callers only ever see
//! validated domain values.

use std::str::FromStr;

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use roombook::ReservationRecord;
use roombook_domain::{ReservationSlot, ReservationState, TimeRange};
use tracing::debug;

use crate::diesel_schema::{buildings, reservations, rooms, users};
use crate::error::PersistenceError;

#[derive(Queryable, Selectable)]
#[diesel(table_name = reservations)]
struct ReservationRow {
    reservation_id: i64,
    room_id: i64,
    user_id: i64,
    start_at: i64,
    end_at: i64,
    description: Option<String>,
    state: String,
    created_at: String,
}

/// A reservation row plus the room name, building id, building name and
/// the creator's name.
type JoinedRow = (ReservationRow, String, i64, String, String);

fn parse_range(reservation_id: i64, start_at: i64, end_at: i64) -> Result<TimeRange, PersistenceError> {
    TimeRange::from_unix_seconds(start_at, end_at)
        .map_err(|e| PersistenceError::CorruptRow(format!("reservation {reservation_id}: {e}")))
}

fn parse_state(reservation_id: i64, state: &str) -> Result<ReservationState, PersistenceError> {
    ReservationState::from_str(state)
        .map_err(|e| PersistenceError::CorruptRow(format!("reservation {reservation_id}: {e}")))
}

fn record_from_row(
    (row, room_name, building_id, building_name, user_name): JoinedRow,
) -> Result<ReservationRecord, PersistenceError> {
    Ok(ReservationRecord {
        reservation_id: row.reservation_id,
        room_id: row.room_id,
        room_name,
        building_id,
        building_name,
        user_id: row.user_id,
        user_name,
        range: parse_range(row.reservation_id, row.start_at, row.end_at)?,
        description: row.description,
        state: parse_state(row.reservation_id, &row.state)?,
        created_at: row.created_at,
    })
}

backend_fn! {
/// Retrieves a reservation joined with its room, building and creator.
///
/// # Errors
///
/// Returns an error if the database query fails or the row is invalid.
/// Returns `Ok(None)` if the reservation is not found.
pub fn get_reservation(
    conn: &mut _,
    reservation_id: i64,
) -> Result<Option<ReservationRecord>, PersistenceError> {
    debug!(reservation_id, "Looking up reservation by ID");

    let row: Option<JoinedRow> = reservations::table
        .inner_join(rooms::table.inner_join(buildings::table))
        .inner_join(users::table)
        .filter(reservations::reservation_id.eq(reservation_id))
        .select((
            ReservationRow::as_select(),
            rooms::name,
            buildings::building_id,
            buildings::name,
            users::name,
        ))
        .first(conn)
        .optional()?;

    row.map(record_from_row).transpose()
}
}

backend_fn! {
/// Returns the building of the room a reservation is held on.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the reservation is not found.
pub fn get_reservation_building(
    conn: &mut _,
    reservation_id: i64,
) -> Result<Option<i64>, PersistenceError> {
    Ok(reservations::table
        .inner_join(rooms::table)
        .filter(reservations::reservation_id.eq(reservation_id))
        .select(rooms::building_id)
        .first(conn)
        .optional()?)
}
}

backend_fn! {
/// Loads every reservation held on a room, in any state, as conflict
/// detector input.
///
/// # Errors
///
/// Returns an error if the database query fails or a row is invalid.
pub fn list_room_slots(conn: &mut _, room_id: i64) -> Result<Vec<ReservationSlot>, PersistenceError> {
    let rows: Vec<(i64, i64, i64, String)> = reservations::table
        .filter(reservations::room_id.eq(room_id))
        .select((
            reservations::reservation_id,
            reservations::start_at,
            reservations::end_at,
            reservations::state,
        ))
        .order_by(reservations::start_at.asc())
        .load(conn)?;

    debug!(room_id, count = rows.len(), "Loaded reservations for conflict check");

    rows.into_iter()
        .map(|(reservation_id, start_at, end_at, state)| {
            Ok(ReservationSlot::new(
                reservation_id,
                parse_range(reservation_id, start_at, end_at)?,
                parse_state(reservation_id, &state)?,
            ))
        })
        .collect()
}
}

backend_fn! {
/// Lists active reservations, newest start first.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `building_ids` - Restrict to rooms in these buildings; `None` lists all
///
/// # Errors
///
/// Returns an error if the database query fails or a row is invalid.
pub fn list_reservations(
    conn: &mut _,
    building_ids: Option<&[i64]>,
) -> Result<Vec<ReservationRecord>, PersistenceError> {
    debug!(scoped = building_ids.is_some(), "Listing active reservations");

    let mut query = reservations::table
        .inner_join(rooms::table.inner_join(buildings::table))
        .inner_join(users::table)
        .filter(reservations::state.eq_any(ReservationState::active_states()))
        .select((
            ReservationRow::as_select(),
            rooms::name,
            buildings::building_id,
            buildings::name,
            users::name,
        ))
        .order_by((reservations::start_at.desc(), reservations::reservation_id.desc()))
        .into_boxed();
    if let Some(ids) = building_ids {
        query = query.filter(rooms::building_id.eq_any(ids.to_vec()));
    }

    let rows: Vec<JoinedRow> = query.load(conn)?;
    rows.into_iter().map(record_from_row).collect()
}
}

backend_fn! {
/// Lists CONFIRMED reservations for the public calendar, oldest start first.
///
/// `room_ids` takes precedence over `building_id` when both are given.
/// With neither, every confirmed reservation is returned.
///
/// # Errors
///
/// Returns an error if the database query fails or a row is invalid.
pub fn list_public_reservations(
    conn: &mut _,
    building_id: Option<i64>,
    room_ids: Option<&[i64]>,
) -> Result<Vec<ReservationRecord>, PersistenceError> {
    debug!(?building_id, ?room_ids, "Listing public reservations");

    let mut query = reservations::table
        .inner_join(rooms::table.inner_join(buildings::table))
        .inner_join(users::table)
        .filter(reservations::state.eq(ReservationState::Confirmed.as_str()))
        .select((
            ReservationRow::as_select(),
            rooms::name,
            buildings::building_id,
            buildings::name,
            users::name,
        ))
        .order_by((reservations::start_at.asc(), reservations::reservation_id.asc()))
        .into_boxed();
    match (room_ids, building_id) {
        (Some(ids), _) => query = query.filter(reservations::room_id.eq_any(ids.to_vec())),
        (None, Some(id)) => query = query.filter(rooms::building_id.eq(id)),
        (None, None) => {}
    }

    let rows: Vec<JoinedRow> = query.load(conn)?;
    rows.into_iter().map(record_from_row).collect()
}
}

backend_fn! {
/// Counts reservations owned by a user, in any state.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_reservations_for_user(conn: &mut _, user_id: i64) -> Result<i64, PersistenceError> {
    use diesel::dsl::count;

    let count: i64 = reservations::table
        .filter(reservations::user_id.eq(user_id))
        .select(count(reservations::reservation_id))
        .first(conn)?;

    Ok(count)
}
}
