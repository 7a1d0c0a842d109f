// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Field names are camelCase on the wire. Request bodies reject unknown
//! fields; timestamps are RFC 3339.

use roombook::ReservationRecord;
use roombook_domain::{ReservationState, Role};
use roombook_persistence::{BuildingData, RoomData, RoomScheduleData, UserData};
use time::OffsetDateTime;

// ============================================================================
// Auth
// ============================================================================

/// API request to sign in with a PIN.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LoginRequest {
    /// The four-digit PIN.
    pub pin: String,
}

/// API response for a successful login.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Bearer token for subsequent requests.
    pub session_token: String,
    /// When the session stops being accepted.
    #[serde(with = "time::serde::rfc3339")]
    pub expires_at: OffsetDateTime,
    /// The signed-in user.
    pub user: UserInfo,
}

/// API response for `GET /auth/me`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WhoAmIResponse {
    pub user: UserInfo,
}

/// A plain confirmation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================================================
// Users
// ============================================================================

/// User information.
///
/// `pin` is only filled for administrators' views.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin: Option<String>,
    /// Assigned buildings, ascending.
    pub building_ids: Vec<i64>,
    pub created_at: String,
}

impl UserInfo {
    /// Builds the public view of a user (no PIN).
    #[must_use]
    pub fn from_data(user: UserData, building_ids: Vec<i64>) -> Self {
        Self {
            user_id: user.user_id,
            name: user.name,
            email: user.email,
            role: user.role,
            pin: None,
            building_ids,
            created_at: user.created_at,
        }
    }

    /// Builds the administrator's view of a user.
    #[must_use]
    pub fn with_pin(user: UserData, building_ids: Vec<i64>) -> Self {
        let pin: String = user.pin.clone();
        Self {
            pin: Some(pin),
            ..Self::from_data(user, building_ids)
        }
    }
}

/// API request to create a user. The PIN is generated.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    /// Defaults to `USER`.
    #[serde(default)]
    pub role: Role,
    /// Optional password, stored hashed.
    #[serde(default)]
    pub password: Option<String>,
    /// Buildings to assign immediately.
    #[serde(default)]
    pub building_ids: Vec<i64>,
}

/// API request to update a user.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateUserRequest {
    pub name: String,
    pub email: String,
    pub role: Role,
    /// When present, replaces the password.
    #[serde(default)]
    pub password: Option<String>,
    /// When present, replaces every assignment.
    #[serde(default)]
    pub building_ids: Option<Vec<i64>>,
}

/// API response listing users.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListUsersResponse {
    pub users: Vec<UserInfo>,
}

// ============================================================================
// Buildings
// ============================================================================

/// Building information.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingInfo {
    pub building_id: i64,
    pub name: String,
    pub address: Option<String>,
    pub description: Option<String>,
    pub room_count: i64,
    pub created_at: String,
}

impl From<BuildingData> for BuildingInfo {
    fn from(building: BuildingData) -> Self {
        Self {
            building_id: building.building_id,
            name: building.name,
            address: building.address,
            description: building.description,
            room_count: building.room_count,
            created_at: building.created_at,
        }
    }
}

/// API request to create or update a building.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BuildingRequest {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// API response listing buildings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBuildingsResponse {
    pub buildings: Vec<BuildingInfo>,
}

// ============================================================================
// Rooms
// ============================================================================

/// Room information.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomInfo {
    pub room_id: i64,
    pub building_id: i64,
    pub building_name: String,
    pub name: String,
    pub capacity: Option<i32>,
    pub equipment: Option<String>,
    pub color: Option<String>,
    pub created_at: String,
}

impl From<RoomData> for RoomInfo {
    fn from(room: RoomData) -> Self {
        Self {
            room_id: room.room_id,
            building_id: room.building_id,
            building_name: room.building_name,
            name: room.name,
            capacity: room.capacity,
            equipment: room.equipment,
            color: room.color,
            created_at: room.created_at,
        }
    }
}

/// API request to create a room.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateRoomRequest {
    pub building_id: i64,
    pub name: String,
    #[serde(default)]
    pub capacity: Option<i32>,
    #[serde(default)]
    pub equipment: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

/// API request to update a room. The owning building cannot change.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateRoomRequest {
    pub name: String,
    #[serde(default)]
    pub capacity: Option<i32>,
    #[serde(default)]
    pub equipment: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

/// Query parameters for `GET /rooms`.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ListRoomsQuery {
    #[serde(default)]
    pub building_id: Option<i64>,
}

/// API response listing rooms.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRoomsResponse {
    pub rooms: Vec<RoomInfo>,
}

/// A weekly availability window.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleInfo {
    pub schedule_id: i64,
    pub room_id: i64,
    /// 0 = Sunday .. 6 = Saturday.
    pub day_of_week: i32,
    /// `HH:MM`
    pub start_time: String,
    /// `HH:MM`
    pub end_time: String,
}

impl From<RoomScheduleData> for ScheduleInfo {
    fn from(schedule: RoomScheduleData) -> Self {
        Self {
            schedule_id: schedule.schedule_id,
            room_id: schedule.room_id,
            day_of_week: schedule.day_of_week,
            start_time: schedule.start_time,
            end_time: schedule.end_time,
        }
    }
}

/// API request to add a weekly window to a room.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateScheduleRequest {
    pub day_of_week: u8,
    pub start_time: String,
    pub end_time: String,
}

/// API response listing a room's windows.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSchedulesResponse {
    pub schedules: Vec<ScheduleInfo>,
}

// ============================================================================
// Reservations
// ============================================================================

/// API request to book a room.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateReservationRequest {
    pub room_id: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub end_time: OffsetDateTime,
    #[serde(default)]
    pub description: Option<String>,
}

/// A reservation joined with its room, building and creator.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationInfo {
    pub reservation_id: i64,
    pub room_id: i64,
    pub room_name: String,
    pub building_id: i64,
    pub building_name: String,
    pub user_id: i64,
    pub user_name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub end_time: OffsetDateTime,
    pub description: Option<String>,
    pub state: ReservationState,
    pub created_at: String,
}

impl From<ReservationRecord> for ReservationInfo {
    fn from(record: ReservationRecord) -> Self {
        Self {
            reservation_id: record.reservation_id,
            room_id: record.room_id,
            room_name: record.room_name,
            building_id: record.building_id,
            building_name: record.building_name,
            user_id: record.user_id,
            user_name: record.user_name,
            start_time: record.range.start(),
            end_time: record.range.end(),
            description: record.description,
            state: record.state,
            created_at: record.created_at,
        }
    }
}

/// Query parameters for the public calendar.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PublicReservationsQuery {
    #[serde(default)]
    pub building_id: Option<i64>,
    /// Comma-separated room ids. Takes precedence over `buildingId`.
    #[serde(default)]
    pub room_ids: Option<String>,
}

/// API response listing reservations.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListReservationsResponse {
    pub reservations: Vec<ReservationInfo>,
}
