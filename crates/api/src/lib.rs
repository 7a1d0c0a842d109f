// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the room booking service.
//!
//! Handlers here are transport-agnostic: they take the persistence layer,
//! an [`AuthenticatedActor`] and typed requests, and return typed responses
//! or an [`ApiError`]. The server crate maps these onto HTTP.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod error;
mod handlers;
mod pin;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedActor, AuthenticationService, AuthorizationService};
pub use error::{
    ApiError, AuthError, translate_core_error, translate_domain_error,
    translate_persistence_error,
};
pub use handlers::{
    add_room_schedule, create_building, create_reservation, create_room, create_user,
    delete_building, delete_reservation, delete_room, delete_room_schedule, delete_user,
    ensure_bootstrap_admin, get_building, get_room, get_user, list_buildings,
    list_public_reservations, list_reservations, list_room_schedules, list_rooms, list_users,
    login, logout, parse_room_ids, update_building, update_room, update_user, whoami,
};
pub use pin::{MAX_PIN_ATTEMPTS, generate_unique_pin};
pub use request_response::{
    BuildingInfo, BuildingRequest, CreateReservationRequest, CreateRoomRequest,
    CreateScheduleRequest, CreateUserRequest, ListBuildingsResponse, ListReservationsResponse,
    ListRoomsQuery, ListRoomsResponse, ListSchedulesResponse, ListUsersResponse, LoginRequest,
    LoginResponse, MessageResponse, PublicReservationsQuery, ReservationInfo, RoomInfo,
    ScheduleInfo, UpdateRoomRequest, UpdateUserRequest, UserInfo, WhoAmIResponse,
};
