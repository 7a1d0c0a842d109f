// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use roombook_domain::WeeklyWindow;
use tracing::{debug, info};

use super::current_timestamp;
use crate::backend::PersistenceBackend;
use crate::data_models::RoomFields;
use crate::diesel_schema::{room_schedules, rooms};
use crate::error::PersistenceError;

backend_fn! {
/// Creates a room in a building.
///
/// # Errors
///
/// Returns `PersistenceError::ForeignKeyViolation` if the building does not
/// exist, or another error if the insert fails.
pub fn create_room(
    conn: &mut _,
    building_id: i64,
    fields: &RoomFields<'_>,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(rooms::table)
        .values((
            rooms::building_id.eq(building_id),
            rooms::name.eq(fields.name),
            rooms::capacity.eq(fields.capacity),
            rooms::equipment.eq(fields.equipment),
            rooms::color.eq(fields.color),
            rooms::created_at.eq(current_timestamp()?),
        ))
        .execute(conn)?;

    let room_id: i64 = conn.get_last_insert_rowid()?;

    info!(room_id, building_id, "Room created");
    Ok(room_id)
}
}

backend_fn! {
/// Updates a room's fields. The owning building never changes.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the room does not exist.
pub fn update_room(
    conn: &mut _,
    room_id: i64,
    fields: &RoomFields<'_>,
) -> Result<(), PersistenceError> {
    let rows_affected: usize = diesel::update(rooms::table)
        .filter(rooms::room_id.eq(room_id))
        .set((
            rooms::name.eq(fields.name),
            rooms::capacity.eq(fields.capacity),
            rooms::equipment.eq(fields.equipment),
            rooms::color.eq(fields.color),
        ))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Room with ID {room_id} not found"
        )));
    }

    info!(room_id, "Room updated");
    Ok(())
}
}

backend_fn! {
/// Deletes a room. Its schedules and reservations cascade.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the room does not exist.
pub fn delete_room(conn: &mut _, room_id: i64) -> Result<(), PersistenceError> {
    info!(room_id, "Deleting room");

    let rows_affected: usize = diesel::delete(rooms::table)
        .filter(rooms::room_id.eq(room_id))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Room with ID {room_id} not found"
        )));
    }
    Ok(())
}
}

backend_fn! {
/// Adds a weekly availability window to a room.
///
/// # Errors
///
/// Returns `PersistenceError::ForeignKeyViolation` if the room does not
/// exist, or another error if the insert fails.
pub fn add_room_schedule(
    conn: &mut _,
    room_id: i64,
    window: &WeeklyWindow,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(room_schedules::table)
        .values((
            room_schedules::room_id.eq(room_id),
            room_schedules::day_of_week.eq(i32::from(window.day_of_week())),
            room_schedules::start_time.eq(window.start_str()),
            room_schedules::end_time.eq(window.end_str()),
        ))
        .execute(conn)?;

    let schedule_id: i64 = conn.get_last_insert_rowid()?;

    debug!(schedule_id, room_id, "Room schedule added");
    Ok(schedule_id)
}
}

backend_fn! {
/// Removes one weekly window from a room.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no such window belongs to the room.
pub fn delete_room_schedule(
    conn: &mut _,
    room_id: i64,
    schedule_id: i64,
) -> Result<(), PersistenceError> {
    let rows_affected: usize = diesel::delete(room_schedules::table)
        .filter(room_schedules::schedule_id.eq(schedule_id))
        .filter(room_schedules::room_id.eq(room_id))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Schedule {schedule_id} not found for room {room_id}"
        )));
    }
    Ok(())
}
}
