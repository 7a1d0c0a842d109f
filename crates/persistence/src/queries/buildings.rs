// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Building queries.

use std::collections::HashMap;

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crate::data_models::BuildingData;
use crate::diesel_schema::{buildings, rooms};
use crate::error::PersistenceError;

#[derive(Queryable, Selectable)]
#[diesel(table_name = buildings)]
struct BuildingRow {
    building_id: i64,
    name: String,
    address: Option<String>,
    description: Option<String>,
    created_at: String,
}

fn building_from_row(row: BuildingRow, room_count: i64) -> BuildingData {
    BuildingData {
        building_id: row.building_id,
        name: row.name,
        address: row.address,
        description: row.description,
        created_at: row.created_at,
        room_count,
    }
}

backend_fn! {
/// Retrieves a building by ID, with its room count.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the building is not found.
pub fn get_building(conn: &mut _, building_id: i64) -> Result<Option<BuildingData>, PersistenceError> {
    use diesel::dsl::count;

    debug!(building_id, "Looking up building by ID");

    let result: Result<BuildingRow, diesel::result::Error> = buildings::table
        .filter(buildings::building_id.eq(building_id))
        .select(BuildingRow::as_select())
        .first(conn);

    match result {
        Ok(row) => {
            let room_count: i64 = rooms::table
                .filter(rooms::building_id.eq(building_id))
                .select(count(rooms::room_id))
                .first(conn)?;
            Ok(Some(building_from_row(row, room_count)))
        }
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Lists buildings ordered by name, each with its room count.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `building_ids` - Restrict to these ids; `None` lists every building
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_buildings(
    conn: &mut _,
    building_ids: Option<&[i64]>,
) -> Result<Vec<BuildingData>, PersistenceError> {
    use diesel::dsl::count;

    debug!(scoped = building_ids.is_some(), "Listing buildings");

    let mut query = buildings::table
        .select(BuildingRow::as_select())
        .order_by((buildings::name.asc(), buildings::building_id.asc()))
        .into_boxed();
    if let Some(ids) = building_ids {
        query = query.filter(buildings::building_id.eq_any(ids.to_vec()));
    }
    let rows: Vec<BuildingRow> = query.load(conn)?;

    let counts: HashMap<i64, i64> = rooms::table
        .group_by(rooms::building_id)
        .select((rooms::building_id, count(rooms::room_id)))
        .load::<(i64, i64)>(conn)?
        .into_iter()
        .collect();

    Ok(rows
        .into_iter()
        .map(|row| {
            let room_count: i64 = counts.get(&row.building_id).copied().unwrap_or(0);
            building_from_row(row, room_count)
        })
        .collect())
}
}
