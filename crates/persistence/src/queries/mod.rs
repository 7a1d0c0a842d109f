// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.
//!
//! - `users`: users and their building assignments
//! - `buildings`: buildings with room counts
//! - `rooms`: rooms and weekly schedules
//! - `reservations`: joined reservation records and conflict input
//! - `sessions`: login sessions
//!
//! Every function exists as `_sqlite` and `_mysql`; `Persistence` in
//! `lib.rs` dispatches on the active connection.

pub mod buildings;
pub mod reservations;
pub mod rooms;
pub mod sessions;
pub mod users;

pub use buildings::{
    get_building_mysql, get_building_sqlite, list_buildings_mysql, list_buildings_sqlite,
};
pub use reservations::{
    count_reservations_for_user_mysql, count_reservations_for_user_sqlite,
    get_reservation_building_mysql, get_reservation_building_sqlite, get_reservation_mysql,
    get_reservation_sqlite, list_public_reservations_mysql, list_public_reservations_sqlite,
    list_reservations_mysql, list_reservations_sqlite, list_room_slots_mysql,
    list_room_slots_sqlite,
};
pub use rooms::{
    get_room_building_mysql, get_room_building_sqlite, get_room_mysql, get_room_sqlite,
    list_room_schedules_mysql, list_room_schedules_sqlite, list_rooms_mysql, list_rooms_sqlite,
};
pub use sessions::{get_session_by_token_mysql, get_session_by_token_sqlite};
pub use users::{
    count_users_mysql, count_users_sqlite, get_authorized_buildings_mysql,
    get_authorized_buildings_sqlite, get_user_by_email_mysql, get_user_by_email_sqlite,
    get_user_by_id_mysql, get_user_by_id_sqlite, get_user_by_pin_mysql, get_user_by_pin_sqlite,
    list_users_mysql, list_users_sqlite, pin_exists_mysql, pin_exists_sqlite,
};
