// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User and building-assignment queries.

use std::collections::BTreeSet;
use std::str::FromStr;

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use roombook_domain::Role;
use tracing::debug;

use crate::data_models::UserData;
use crate::diesel_schema::{user_buildings, users};
use crate::error::PersistenceError;

#[derive(Queryable, Selectable)]
#[diesel(table_name = users)]
struct UserRow {
    user_id: i64,
    name: String,
    email: String,
    pin: String,
    password_hash: Option<String>,
    role: String,
    created_at: String,
    updated_at: String,
}

fn user_from_row(row: UserRow) -> Result<UserData, PersistenceError> {
    let role: Role = Role::from_str(&row.role)
        .map_err(|e| PersistenceError::CorruptRow(format!("user {}: {e}", row.user_id)))?;
    Ok(UserData {
        user_id: row.user_id,
        name: row.name,
        email: row.email,
        pin: row.pin,
        password_hash: row.password_hash,
        role,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

backend_fn! {
/// Retrieves a user by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the user is not found.
pub fn get_user_by_id(conn: &mut _, user_id: i64) -> Result<Option<UserData>, PersistenceError> {
    debug!(user_id, "Looking up user by ID");

    users::table
        .filter(users::user_id.eq(user_id))
        .select(UserRow::as_select())
        .first::<UserRow>(conn)
        .optional()?
        .map(user_from_row)
        .transpose()
}
}

backend_fn! {
/// Retrieves a user by PIN.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `pin` - The four-digit credential
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no user holds the PIN.
pub fn get_user_by_pin(conn: &mut _, pin: &str) -> Result<Option<UserData>, PersistenceError> {
    debug!("Looking up user by PIN");

    let result: Result<UserRow, diesel::result::Error> = users::table
        .filter(users::pin.eq(pin))
        .select(UserRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(user_from_row(row)?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Retrieves a user by email address.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no user has the address.
pub fn get_user_by_email(conn: &mut _, email: &str) -> Result<Option<UserData>, PersistenceError> {
    debug!(email, "Looking up user by email");

    users::table
        .filter(users::email.eq(email))
        .select(UserRow::as_select())
        .first::<UserRow>(conn)
        .optional()?
        .map(user_from_row)
        .transpose()
}
}

backend_fn! {
/// Lists all users ordered by name.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_users(conn: &mut _) -> Result<Vec<UserData>, PersistenceError> {
    debug!("Listing all users");

    let rows: Vec<UserRow> = users::table
        .select(UserRow::as_select())
        .order_by((users::name.asc(), users::user_id.asc()))
        .load(conn)?;

    rows.into_iter().map(user_from_row).collect()
}
}

backend_fn! {
/// Returns whether any user already holds `pin`.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn pin_exists(conn: &mut _, pin: &str) -> Result<bool, PersistenceError> {
    use diesel::dsl::count;

    let count: i64 = users::table
        .filter(users::pin.eq(pin))
        .select(count(users::user_id))
        .first(conn)?;

    Ok(count > 0)
}
}

backend_fn! {
/// Counts all users.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_users(conn: &mut _) -> Result<i64, PersistenceError> {
    use diesel::dsl::count;

    let count: i64 = users::table.select(count(users::user_id)).first(conn)?;

    debug!("Total users: {}", count);
    Ok(count)
}
}

backend_fn! {
/// Returns the building ids assigned to a user.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `user_id` - The user to resolve
///
/// # Returns
///
/// * `Ok(None)` if the user does not exist
/// * `Ok(Some(set))` otherwise; the set is empty when nothing is assigned
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_authorized_buildings(
    conn: &mut _,
    user_id: i64,
) -> Result<Option<BTreeSet<i64>>, PersistenceError> {
    let exists: Option<i64> = users::table
        .find(user_id)
        .select(users::user_id)
        .first(conn)
        .optional()?;

    if exists.is_none() {
        debug!(user_id, "Authorized buildings requested for unknown user");
        return Ok(None);
    }

    let building_ids: Vec<i64> = user_buildings::table
        .filter(user_buildings::user_id.eq(user_id))
        .select(user_buildings::building_id)
        .load(conn)?;

    Ok(Some(building_ids.into_iter().collect()))
}
}
