// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::info;

use super::current_timestamp;
use crate::backend::PersistenceBackend;
use crate::diesel_schema::buildings;
use crate::error::PersistenceError;

backend_fn! {
/// Creates a building.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `name` - The building name
/// * `address` - Optional street address
/// * `description` - Optional free-form description
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_building(
    conn: &mut _,
    name: &str,
    address: Option<&str>,
    description: Option<&str>,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(buildings::table)
        .values((
            buildings::name.eq(name),
            buildings::address.eq(address),
            buildings::description.eq(description),
            buildings::created_at.eq(current_timestamp()?),
        ))
        .execute(conn)?;

    let building_id: i64 = conn.get_last_insert_rowid()?;

    info!(building_id, name, "Building created");
    Ok(building_id)
}
}

backend_fn! {
/// Updates a building's fields.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the building does not exist.
pub fn update_building(
    conn: &mut _,
    building_id: i64,
    name: &str,
    address: Option<&str>,
    description: Option<&str>,
) -> Result<(), PersistenceError> {
    let rows_affected: usize = diesel::update(buildings::table)
        .filter(buildings::building_id.eq(building_id))
        .set((
            buildings::name.eq(name),
            buildings::address.eq(address),
            buildings::description.eq(description),
        ))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Building with ID {building_id} not found"
        )));
    }

    info!(building_id, "Building updated");
    Ok(())
}
}

backend_fn! {
/// Deletes a building.
///
/// Rooms, their schedules and reservations, and user assignments cascade.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the building does not exist.
pub fn delete_building(conn: &mut _, building_id: i64) -> Result<(), PersistenceError> {
    info!(building_id, "Deleting building");

    let rows_affected: usize = diesel::delete(buildings::table)
        .filter(buildings::building_id.eq(building_id))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Building with ID {building_id} not found"
        )));
    }
    Ok(())
}
}
