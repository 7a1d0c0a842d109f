// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use roombook_domain::Role;
use serde::{Deserialize, Serialize};

/// A stored user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub pin: String,
    pub password_hash: Option<String>,
    pub role: Role,
    pub created_at: String,
    pub updated_at: String,
}

/// A stored building with the number of rooms it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingData {
    pub building_id: i64,
    pub name: String,
    pub address: Option<String>,
    pub description: Option<String>,
    pub created_at: String,
    pub room_count: i64,
}

/// A stored room joined with its building's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomData {
    pub room_id: i64,
    pub building_id: i64,
    pub building_name: String,
    pub name: String,
    pub capacity: Option<i32>,
    pub equipment: Option<String>,
    pub color: Option<String>,
    pub created_at: String,
}

/// Fields written when creating or updating a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomFields<'a> {
    pub name: &'a str,
    pub capacity: Option<i32>,
    pub equipment: Option<&'a str>,
    pub color: Option<&'a str>,
}

/// A stored weekly availability window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomScheduleData {
    pub schedule_id: i64,
    pub room_id: i64,
    pub day_of_week: i32,
    pub start_time: String,
    pub end_time: String,
}

/// A stored login session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    pub session_id: i64,
    pub session_token: String,
    pub user_id: i64,
    pub created_at: String,
    pub last_activity_at: String,
    pub expires_at: String,
}
