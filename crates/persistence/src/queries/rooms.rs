// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Room and weekly schedule queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crate::data_models::{RoomData, RoomScheduleData};
use crate::diesel_schema::{buildings, room_schedules, rooms};
use crate::error::PersistenceError;

#[derive(Queryable, Selectable)]
#[diesel(table_name = rooms)]
struct RoomRow {
    room_id: i64,
    building_id: i64,
    name: String,
    capacity: Option<i32>,
    equipment: Option<String>,
    color: Option<String>,
    created_at: String,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = room_schedules)]
struct RoomScheduleRow {
    schedule_id: i64,
    room_id: i64,
    day_of_week: i32,
    start_time: String,
    end_time: String,
}

fn room_from_row(row: RoomRow, building_name: String) -> RoomData {
    RoomData {
        room_id: row.room_id,
        building_id: row.building_id,
        building_name,
        name: row.name,
        capacity: row.capacity,
        equipment: row.equipment,
        color: row.color,
        created_at: row.created_at,
    }
}

backend_fn! {
/// Retrieves a room by ID, joined with its building's name.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the room is not found.
pub fn get_room(conn: &mut _, room_id: i64) -> Result<Option<RoomData>, PersistenceError> {
    debug!(room_id, "Looking up room by ID");

    let row: Option<(RoomRow, String)> = rooms::table
        .inner_join(buildings::table)
        .filter(rooms::room_id.eq(room_id))
        .select((RoomRow::as_select(), buildings::name))
        .first(conn)
        .optional()?;

    Ok(row.map(|(room, building_name)| room_from_row(room, building_name)))
}
}

backend_fn! {
/// Returns the building that owns a room.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the room is not found.
pub fn get_room_building(conn: &mut _, room_id: i64) -> Result<Option<i64>, PersistenceError> {
    Ok(rooms::table
        .find(room_id)
        .select(rooms::building_id)
        .first(conn)
        .optional()?)
}
}

backend_fn! {
/// Lists rooms ordered by building then name.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `building_ids` - Restrict to rooms in these buildings; `None` means all
/// * `building_id` - Further restrict to a single building
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_rooms(
    conn: &mut _,
    building_ids: Option<&[i64]>,
    building_id: Option<i64>,
) -> Result<Vec<RoomData>, PersistenceError> {
    debug!(?building_id, scoped = building_ids.is_some(), "Listing rooms");

    let mut query = rooms::table
        .inner_join(buildings::table)
        .select((RoomRow::as_select(), buildings::name))
        .order_by((buildings::name.asc(), rooms::name.asc(), rooms::room_id.asc()))
        .into_boxed();
    if let Some(ids) = building_ids {
        query = query.filter(rooms::building_id.eq_any(ids.to_vec()));
    }
    if let Some(id) = building_id {
        query = query.filter(rooms::building_id.eq(id));
    }

    let rows: Vec<(RoomRow, String)> = query.load(conn)?;
    Ok(rows
        .into_iter()
        .map(|(room, building_name)| room_from_row(room, building_name))
        .collect())
}
}

backend_fn! {
/// Lists a room's weekly availability windows by day, then start time.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_room_schedules(
    conn: &mut _,
    room_id: i64,
) -> Result<Vec<RoomScheduleData>, PersistenceError> {
    let rows: Vec<RoomScheduleRow> = room_schedules::table
        .filter(room_schedules::room_id.eq(room_id))
        .select(RoomScheduleRow::as_select())
        .order_by((room_schedules::day_of_week.asc(), room_schedules::start_time.asc()))
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|row| RoomScheduleData {
            schedule_id: row.schedule_id,
            room_id: row.room_id,
            day_of_week: row.day_of_week,
            start_time: row.start_time,
            end_time: row.end_time,
        })
        .collect())
}
}
