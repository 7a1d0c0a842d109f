// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User and building-assignment mutations.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use roombook_domain::Role;
use tracing::{debug, info};

use super::current_timestamp;
use crate::backend::PersistenceBackend;
use crate::diesel_schema::{user_buildings, users};
use crate::error::PersistenceError;
use crate::queries::reservations::{
    count_reservations_for_user_mysql, count_reservations_for_user_sqlite,
};

fn hash_password(password: &str) -> Result<String, PersistenceError> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| PersistenceError::Other(format!("Failed to hash password: {e}")))
}

backend_fn! {
/// Creates a new user.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `name` - The display name
/// * `email` - The email address (must be unique)
/// * `pin` - The four-digit credential (must be unique)
/// * `password` - Optional plain-text password (will be hashed)
/// * `role` - The role
///
/// # Errors
///
/// Returns `PersistenceError::UniqueViolation` if the email or PIN is
/// already taken, or another error if the insert fails.
pub fn create_user(
    conn: &mut _,
    name: &str,
    email: &str,
    pin: &str,
    password: Option<&str>,
    role: Role,
) -> Result<i64, PersistenceError> {
    info!(email, role = role.as_str(), "Creating user");

    let password_hash: Option<String> = password.map(hash_password).transpose()?;
    let now: String = current_timestamp()?;

    diesel::insert_into(users::table)
        .values((
            users::name.eq(name),
            users::email.eq(email),
            users::pin.eq(pin),
            users::password_hash.eq(password_hash),
            users::role.eq(role.as_str()),
            users::created_at.eq(&now),
            users::updated_at.eq(&now),
        ))
        .execute(conn)?;

    let user_id: i64 = conn.get_last_insert_rowid()?;

    info!(user_id, "User created");
    Ok(user_id)
}
}

backend_fn! {
/// Updates a user's name, email and role.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the user does not exist, or
/// `PersistenceError::UniqueViolation` if the email is taken.
pub fn update_user(
    conn: &mut _,
    user_id: i64,
    name: &str,
    email: &str,
    role: Role,
) -> Result<(), PersistenceError> {
    info!(user_id, "Updating user");

    let rows_affected: usize = diesel::update(users::table)
        .filter(users::user_id.eq(user_id))
        .set((
            users::name.eq(name),
            users::email.eq(email),
            users::role.eq(role.as_str()),
            users::updated_at.eq(current_timestamp()?),
        ))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "User with ID {user_id} not found"
        )));
    }
    Ok(())
}
}

backend_fn! {
/// Replaces a user's password.
///
/// # Errors
///
/// Returns an error if the password cannot be hashed or the update fails.
pub fn update_user_password(
    conn: &mut _,
    user_id: i64,
    new_password: &str,
) -> Result<(), PersistenceError> {
    info!(user_id, "Updating password");

    let password_hash: String = hash_password(new_password)?;

    diesel::update(users::table)
        .filter(users::user_id.eq(user_id))
        .set((
            users::password_hash.eq(Some(password_hash)),
            users::updated_at.eq(current_timestamp()?),
        ))
        .execute(conn)?;

    Ok(())
}
}

/// Deletes a user who owns no reservations (`SQLite` version).
///
/// Sessions and building assignments cascade.
///
/// # Errors
///
/// Returns an error if:
/// - The user still owns reservations
/// - The user does not exist
/// - The database operation fails
pub fn delete_user_sqlite(conn: &mut SqliteConnection, user_id: i64) -> Result<(), PersistenceError> {
    info!(user_id, "Attempting to delete user");

    if count_reservations_for_user_sqlite(conn, user_id)? > 0 {
        return Err(PersistenceError::UserHasReservations { user_id });
    }

    let rows_affected: usize = diesel::delete(users::table)
        .filter(users::user_id.eq(user_id))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "User with ID {user_id} not found"
        )));
    }

    info!(user_id, "Deleted user");
    Ok(())
}

/// Deletes a user who owns no reservations (`MySQL` version).
///
/// Sessions and building assignments cascade.
///
/// # Errors
///
/// Returns an error if:
/// - The user still owns reservations
/// - The user does not exist
/// - The database operation fails
pub fn delete_user_mysql(conn: &mut MysqlConnection, user_id: i64) -> Result<(), PersistenceError> {
    info!(user_id, "Attempting to delete user");

    if count_reservations_for_user_mysql(conn, user_id)? > 0 {
        return Err(PersistenceError::UserHasReservations { user_id });
    }

    let rows_affected: usize = diesel::delete(users::table)
        .filter(users::user_id.eq(user_id))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "User with ID {user_id} not found"
        )));
    }

    info!(user_id, "Deleted user");
    Ok(())
}

backend_fn! {
/// Assigns a building to a user. Assigning twice is a no-op.
///
/// # Errors
///
/// Returns `PersistenceError::ForeignKeyViolation` if either side does not
/// exist, or another error if the insert fails.
pub fn assign_building(
    conn: &mut _,
    user_id: i64,
    building_id: i64,
) -> Result<(), PersistenceError> {
    use diesel::dsl::count;

    let already: i64 = user_buildings::table
        .filter(user_buildings::user_id.eq(user_id))
        .filter(user_buildings::building_id.eq(building_id))
        .select(count(user_buildings::user_id))
        .first(conn)?;
    if already > 0 {
        return Ok(());
    }

    diesel::insert_into(user_buildings::table)
        .values((
            user_buildings::user_id.eq(user_id),
            user_buildings::building_id.eq(building_id),
        ))
        .execute(conn)?;

    debug!(user_id, building_id, "Assigned building to user");
    Ok(())
}
}

backend_fn! {
/// Replaces a user's building assignments atomically.
///
/// # Errors
///
/// Returns an error if any building does not exist; no assignment is
/// changed in that case.
pub fn replace_user_buildings(
    conn: &mut _,
    user_id: i64,
    building_ids: &[i64],
) -> Result<(), PersistenceError> {
    info!(user_id, count = building_ids.len(), "Replacing building assignments");

    conn.transaction(|conn| {
        diesel::delete(user_buildings::table)
            .filter(user_buildings::user_id.eq(user_id))
            .execute(conn)?;

        let mut unique: Vec<i64> = building_ids.to_vec();
        unique.sort_unstable();
        unique.dedup();

        for building_id in unique {
            diesel::insert_into(user_buildings::table)
                .values((
                    user_buildings::user_id.eq(user_id),
                    user_buildings::building_id.eq(building_id),
                ))
                .execute(conn)?;
        }
        Ok(())
    })
}
}
