// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations.
//!
//! - `users`: users, passwords and building assignments
//! - `buildings`: buildings
//! - `rooms`: rooms and weekly schedules
//! - `reservations`: reservation rows (the booking transaction itself
//!   lives in `booking`)
//! - `sessions`: login sessions
//!
//! Timestamps are written by the application as RFC 3339 UTC strings so
//! both backends store identical, lexically ordered values.

pub mod buildings;
pub mod reservations;
pub mod rooms;
pub mod sessions;
pub mod users;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::error::PersistenceError;

pub use buildings::{
    create_building_mysql, create_building_sqlite, delete_building_mysql, delete_building_sqlite,
    update_building_mysql, update_building_sqlite,
};
pub use reservations::{
    delete_reservation_row_mysql, delete_reservation_row_sqlite, insert_reservation_mysql,
    insert_reservation_sqlite,
};
pub use rooms::{
    add_room_schedule_mysql, add_room_schedule_sqlite, create_room_mysql, create_room_sqlite,
    delete_room_mysql, delete_room_schedule_mysql, delete_room_schedule_sqlite, delete_room_sqlite,
    update_room_mysql, update_room_sqlite,
};
pub use sessions::{
    create_session_mysql, create_session_sqlite, delete_expired_sessions_mysql,
    delete_expired_sessions_sqlite, delete_session_mysql, delete_session_sqlite,
    delete_sessions_for_user_mysql, delete_sessions_for_user_sqlite,
    update_session_activity_mysql, update_session_activity_sqlite,
};
pub use users::{
    assign_building_mysql, assign_building_sqlite, create_user_mysql, create_user_sqlite,
    delete_user_mysql, delete_user_sqlite, replace_user_buildings_mysql,
    replace_user_buildings_sqlite, update_user_mysql, update_user_password_mysql,
    update_user_password_sqlite, update_user_sqlite,
};

/// Formats the current instant for a `created_at`-style column.
///
/// # Errors
///
/// Returns an error if the clock is outside the RFC 3339 range.
pub fn current_timestamp() -> Result<String, PersistenceError> {
    format_timestamp(OffsetDateTime::now_utc())
}

/// Formats an instant for storage.
///
/// # Errors
///
/// Returns an error if the instant cannot be represented in RFC 3339.
pub fn format_timestamp(at: OffsetDateTime) -> Result<String, PersistenceError> {
    at.format(&Rfc3339)
        .map_err(|e| PersistenceError::Other(format!("Failed to format timestamp: {e}")))
}
