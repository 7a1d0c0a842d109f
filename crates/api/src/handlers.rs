// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Every handler takes the persistence layer and, where a session is
//! required, the [`AuthenticatedActor`] the server resolved. Role gates run
//! first, then existence checks (404), then building scope (403).

use std::collections::BTreeSet;

use roombook::{NewReservation, ReservationRecord};
use roombook_domain::{
    AccessScope, Pin, Role, WeeklyWindow, validate_building_fields, validate_room_fields,
    validate_user_fields,
};
use roombook_persistence::{BuildingData, Persistence, RoomData, RoomFields, UserData};
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::auth::{AuthenticatedActor, AuthenticationService, AuthorizationService};
use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::pin::generate_unique_pin;
use crate::request_response::{
    BuildingInfo, BuildingRequest, CreateReservationRequest, CreateRoomRequest,
    CreateScheduleRequest, CreateUserRequest, ListBuildingsResponse, ListReservationsResponse,
    ListRoomsQuery, ListRoomsResponse, ListSchedulesResponse, ListUsersResponse, LoginRequest,
    LoginResponse, MessageResponse, PublicReservationsQuery, ReservationInfo, RoomInfo,
    ScheduleInfo, UpdateRoomRequest, UpdateUserRequest, UserInfo, WhoAmIResponse,
};

// ============================================================================
// Shared helpers
// ============================================================================

/// Resolves the actor's building scope.
///
/// A session whose user has since been deleted is treated as unauthenticated.
fn resolve_scope(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
) -> Result<AccessScope, ApiError> {
    let buildings: BTreeSet<i64> = persistence
        .authorized_buildings(actor.user_id)
        .map_err(translate_persistence_error)
        .map_err(|err| match err {
            ApiError::ResourceNotFound { .. } => ApiError::AuthenticationFailed {
                reason: String::from("Session user no longer exists"),
            },
            other => other,
        })?;
    Ok(AccessScope::new(actor.user_id, actor.role, buildings))
}

/// The building filter for listings; `None` lists everything.
fn listing_filter(scope: &AccessScope) -> Option<Vec<i64>> {
    if scope.sees_everything() {
        None
    } else {
        Some(scope.authorized_buildings().iter().copied().collect())
    }
}

fn ensure_building_access(scope: &AccessScope, building_id: i64) -> Result<(), ApiError> {
    if scope.can_administer_building(building_id) {
        Ok(())
    } else {
        Err(ApiError::Forbidden {
            message: format!("No access to building {building_id}"),
        })
    }
}

fn load_building(persistence: &mut Persistence, building_id: i64) -> Result<BuildingData, ApiError> {
    persistence
        .get_building(building_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Building"),
            message: format!("Building {building_id} does not exist"),
        })
}

fn load_room(persistence: &mut Persistence, room_id: i64) -> Result<RoomData, ApiError> {
    persistence
        .get_room(room_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Room"),
            message: format!("Room {room_id} does not exist"),
        })
}

fn load_user(persistence: &mut Persistence, user_id: i64) -> Result<UserData, ApiError> {
    persistence
        .get_user_by_id(user_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("User"),
            message: format!("User {user_id} does not exist"),
        })
}

fn user_buildings(persistence: &mut Persistence, user_id: i64) -> Result<Vec<i64>, ApiError> {
    Ok(persistence
        .authorized_buildings(user_id)
        .map_err(translate_persistence_error)?
        .into_iter()
        .collect())
}

/// Trims an optional text field; blank becomes `None`.
fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn ensure_buildings_exist(
    persistence: &mut Persistence,
    building_ids: &[i64],
) -> Result<(), ApiError> {
    for &building_id in building_ids {
        if persistence
            .get_building(building_id)
            .map_err(translate_persistence_error)?
            .is_none()
        {
            return Err(ApiError::InvalidInput {
                field: String::from("buildingIds"),
                message: format!("Building {building_id} does not exist"),
            });
        }
    }
    Ok(())
}

fn ensure_email_free(
    persistence: &mut Persistence,
    email: &str,
    except_user_id: Option<i64>,
) -> Result<(), ApiError> {
    let existing: Option<UserData> = persistence
        .get_user_by_email(email)
        .map_err(translate_persistence_error)?;
    match existing {
        Some(user) if Some(user.user_id) != except_user_id => Err(ApiError::Conflict {
            message: String::from("A user with this email already exists"),
        }),
        _ => Ok(()),
    }
}

fn validate_password(password: Option<&str>) -> Result<Option<&str>, ApiError> {
    match password {
        Some(p) if p.trim().is_empty() => Err(ApiError::InvalidInput {
            field: String::from("password"),
            message: String::from("Password cannot be blank"),
        }),
        other => Ok(other),
    }
}

/// Parses the public calendar's comma-separated `roomIds` parameter.
///
/// Empty segments are skipped; an empty list means no room filter.
///
/// # Errors
///
/// Returns an error if a segment is not an integer.
pub fn parse_room_ids(raw: &str) -> Result<Option<Vec<i64>>, ApiError> {
    let ids: Vec<i64> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>().map_err(|_| ApiError::InvalidInput {
                field: String::from("roomIds"),
                message: format!("'{s}' is not a room id"),
            })
        })
        .collect::<Result<_, _>>()?;
    Ok(if ids.is_empty() { None } else { Some(ids) })
}

// ============================================================================
// Authentication
// ============================================================================

/// Signs in with a PIN.
///
/// # Errors
///
/// Returns `ApiError::AuthenticationFailed` with the same message for every
/// failure cause.
pub fn login(
    persistence: &mut Persistence,
    request: &LoginRequest,
    now: OffsetDateTime,
) -> Result<LoginResponse, ApiError> {
    let (session_token, actor, user, expires_at) =
        AuthenticationService::login(persistence, &request.pin, now)?;
    let building_ids: Vec<i64> = user_buildings(persistence, actor.user_id)?;

    Ok(LoginResponse {
        session_token,
        expires_at,
        user: UserInfo::from_data(user, building_ids),
    })
}

/// Ends a session.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub fn logout(
    persistence: &mut Persistence,
    session_token: &str,
) -> Result<MessageResponse, ApiError> {
    AuthenticationService::logout(persistence, session_token)?;
    Ok(MessageResponse::new("Logged out"))
}

/// Returns the signed-in user.
///
/// # Errors
///
/// Returns an error if the user no longer exists or the store fails.
pub fn whoami(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
) -> Result<WhoAmIResponse, ApiError> {
    let user: UserData = load_user(persistence, actor.user_id)?;
    let building_ids: Vec<i64> = user_buildings(persistence, actor.user_id)?;
    Ok(WhoAmIResponse {
        user: UserInfo::from_data(user, building_ids),
    })
}

/// Creates the first administrator when no user exists yet.
///
/// # Returns
///
/// * `Ok(Some(pin))` when an administrator was created
/// * `Ok(None)` when users already exist
///
/// # Errors
///
/// Returns an error if the name or email is invalid or the store fails.
pub fn ensure_bootstrap_admin(
    persistence: &mut Persistence,
    name: &str,
    email: &str,
) -> Result<Option<Pin>, ApiError> {
    let existing: i64 = persistence
        .count_users()
        .map_err(translate_persistence_error)?;
    if existing > 0 {
        debug!(existing, "Users present, skipping bootstrap administrator");
        return Ok(None);
    }

    validate_user_fields(name, email).map_err(translate_domain_error)?;
    let pin: Pin = generate_unique_pin(persistence)?;
    let user_id: i64 = persistence
        .create_user(name.trim(), email.trim(), pin.value(), None, Role::Admin)
        .map_err(translate_persistence_error)?;

    info!(user_id, "Bootstrap administrator created");
    Ok(Some(pin))
}

// ============================================================================
// Buildings
// ============================================================================

/// Lists the actor's buildings (all of them for administrators).
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn list_buildings(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
) -> Result<ListBuildingsResponse, ApiError> {
    let scope: AccessScope = resolve_scope(persistence, actor)?;
    let filter: Option<Vec<i64>> = listing_filter(&scope);

    let buildings: Vec<BuildingInfo> = persistence
        .list_buildings(filter.as_deref())
        .map_err(translate_persistence_error)?
        .into_iter()
        .map(BuildingInfo::from)
        .collect();

    Ok(ListBuildingsResponse { buildings })
}

/// Creates a building and assigns it to its creator.
///
/// # Errors
///
/// Returns an error if the name is blank or the store fails.
pub fn create_building(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    request: BuildingRequest,
) -> Result<BuildingInfo, ApiError> {
    validate_building_fields(&request.name).map_err(translate_domain_error)?;
    let address: Option<String> = normalize(request.address);
    let description: Option<String> = normalize(request.description);

    let building_id: i64 = persistence
        .create_building(
            request.name.trim(),
            address.as_deref(),
            description.as_deref(),
        )
        .map_err(translate_persistence_error)?;
    persistence
        .assign_building(actor.user_id, building_id)
        .map_err(translate_persistence_error)?;

    info!(building_id, user_id = actor.user_id, "Building created and assigned to creator");
    Ok(BuildingInfo::from(load_building(persistence, building_id)?))
}

/// Returns one building.
///
/// # Errors
///
/// Returns an error if the building does not exist or is outside the actor's scope.
pub fn get_building(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    building_id: i64,
) -> Result<BuildingInfo, ApiError> {
    let building: BuildingData = load_building(persistence, building_id)?;
    let scope: AccessScope = resolve_scope(persistence, actor)?;
    ensure_building_access(&scope, building_id)?;
    Ok(BuildingInfo::from(building))
}

/// Updates a building.
///
/// # Errors
///
/// Returns an error if the building does not exist, is outside the actor's
/// scope, or the name is blank.
pub fn update_building(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    building_id: i64,
    request: BuildingRequest,
) -> Result<BuildingInfo, ApiError> {
    load_building(persistence, building_id)?;
    let scope: AccessScope = resolve_scope(persistence, actor)?;
    ensure_building_access(&scope, building_id)?;
    validate_building_fields(&request.name).map_err(translate_domain_error)?;

    let address: Option<String> = normalize(request.address);
    let description: Option<String> = normalize(request.description);
    persistence
        .update_building(
            building_id,
            request.name.trim(),
            address.as_deref(),
            description.as_deref(),
        )
        .map_err(translate_persistence_error)?;

    info!(building_id, "Building updated");
    Ok(BuildingInfo::from(load_building(persistence, building_id)?))
}

/// Deletes a building with its rooms, schedules and reservations.
///
/// # Errors
///
/// Returns an error if the building does not exist or is outside the actor's scope.
pub fn delete_building(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    building_id: i64,
) -> Result<MessageResponse, ApiError> {
    load_building(persistence, building_id)?;
    let scope: AccessScope = resolve_scope(persistence, actor)?;
    ensure_building_access(&scope, building_id)?;

    persistence
        .delete_building(building_id)
        .map_err(translate_persistence_error)?;

    info!(building_id, user_id = actor.user_id, "Building deleted");
    Ok(MessageResponse::new("Building deleted"))
}

// ============================================================================
// Rooms
// ============================================================================

/// Lists rooms in the actor's buildings, optionally for one building.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn list_rooms(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    query: &ListRoomsQuery,
) -> Result<ListRoomsResponse, ApiError> {
    let scope: AccessScope = resolve_scope(persistence, actor)?;
    let filter: Option<Vec<i64>> = listing_filter(&scope);

    let rooms: Vec<RoomInfo> = persistence
        .list_rooms(filter.as_deref(), query.building_id)
        .map_err(translate_persistence_error)?
        .into_iter()
        .map(RoomInfo::from)
        .collect();

    Ok(ListRoomsResponse { rooms })
}

/// Creates a room in an accessible building.
///
/// # Errors
///
/// Returns an error if the building does not exist or is outside the
/// actor's scope, or a field is invalid.
pub fn create_room(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    request: CreateRoomRequest,
) -> Result<RoomInfo, ApiError> {
    load_building(persistence, request.building_id)?;
    let scope: AccessScope = resolve_scope(persistence, actor)?;
    ensure_building_access(&scope, request.building_id)?;

    let equipment: Option<String> = normalize(request.equipment);
    let color: Option<String> = normalize(request.color);
    validate_room_fields(&request.name, request.capacity, color.as_deref())
        .map_err(translate_domain_error)?;

    let fields = RoomFields {
        name: request.name.trim(),
        capacity: request.capacity,
        equipment: equipment.as_deref(),
        color: color.as_deref(),
    };
    let room_id: i64 = persistence
        .create_room(request.building_id, &fields)
        .map_err(translate_persistence_error)?;

    info!(room_id, building_id = request.building_id, "Room created");
    Ok(RoomInfo::from(load_room(persistence, room_id)?))
}

/// Returns one room.
///
/// # Errors
///
/// Returns an error if the room does not exist or is outside the actor's scope.
pub fn get_room(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    room_id: i64,
) -> Result<RoomInfo, ApiError> {
    let room: RoomData = load_room(persistence, room_id)?;
    let scope: AccessScope = resolve_scope(persistence, actor)?;
    ensure_building_access(&scope, room.building_id)?;
    Ok(RoomInfo::from(room))
}

/// Updates a room.
///
/// # Errors
///
/// Returns an error if the room does not exist, is outside the actor's
/// scope, or a field is invalid.
pub fn update_room(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    room_id: i64,
    request: UpdateRoomRequest,
) -> Result<RoomInfo, ApiError> {
    let room: RoomData = load_room(persistence, room_id)?;
    let scope: AccessScope = resolve_scope(persistence, actor)?;
    ensure_building_access(&scope, room.building_id)?;

    let equipment: Option<String> = normalize(request.equipment);
    let color: Option<String> = normalize(request.color);
    validate_room_fields(&request.name, request.capacity, color.as_deref())
        .map_err(translate_domain_error)?;

    let fields = RoomFields {
        name: request.name.trim(),
        capacity: request.capacity,
        equipment: equipment.as_deref(),
        color: color.as_deref(),
    };
    persistence
        .update_room(room_id, &fields)
        .map_err(translate_persistence_error)?;

    info!(room_id, "Room updated");
    Ok(RoomInfo::from(load_room(persistence, room_id)?))
}

/// Deletes a room with its schedules and reservations.
///
/// # Errors
///
/// Returns an error if the room does not exist or is outside the actor's scope.
pub fn delete_room(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    room_id: i64,
) -> Result<MessageResponse, ApiError> {
    let room: RoomData = load_room(persistence, room_id)?;
    let scope: AccessScope = resolve_scope(persistence, actor)?;
    ensure_building_access(&scope, room.building_id)?;

    persistence
        .delete_room(room_id)
        .map_err(translate_persistence_error)?;

    info!(room_id, user_id = actor.user_id, "Room deleted");
    Ok(MessageResponse::new("Room deleted"))
}

/// Lists a room's weekly windows.
///
/// # Errors
///
/// Returns an error if the room does not exist or is outside the actor's scope.
pub fn list_room_schedules(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    room_id: i64,
) -> Result<ListSchedulesResponse, ApiError> {
    let room: RoomData = load_room(persistence, room_id)?;
    let scope: AccessScope = resolve_scope(persistence, actor)?;
    ensure_building_access(&scope, room.building_id)?;

    let schedules: Vec<ScheduleInfo> = persistence
        .list_room_schedules(room_id)
        .map_err(translate_persistence_error)?
        .into_iter()
        .map(ScheduleInfo::from)
        .collect();

    Ok(ListSchedulesResponse { schedules })
}

/// Adds a weekly window to a room.
///
/// # Errors
///
/// Returns an error if the room does not exist, is outside the actor's
/// scope, or the window is malformed.
pub fn add_room_schedule(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    room_id: i64,
    request: &CreateScheduleRequest,
) -> Result<ScheduleInfo, ApiError> {
    let room: RoomData = load_room(persistence, room_id)?;
    let scope: AccessScope = resolve_scope(persistence, actor)?;
    ensure_building_access(&scope, room.building_id)?;

    let window: WeeklyWindow =
        WeeklyWindow::parse(request.day_of_week, &request.start_time, &request.end_time)
            .map_err(translate_domain_error)?;
    let schedule_id: i64 = persistence
        .add_room_schedule(room_id, &window)
        .map_err(translate_persistence_error)?;

    info!(schedule_id, room_id, "Room schedule added");
    Ok(ScheduleInfo {
        schedule_id,
        room_id,
        day_of_week: i32::from(window.day_of_week()),
        start_time: window.start_str(),
        end_time: window.end_str(),
    })
}

/// Removes a weekly window from a room.
///
/// # Errors
///
/// Returns an error if the room or window does not exist, or the room is
/// outside the actor's scope.
pub fn delete_room_schedule(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    room_id: i64,
    schedule_id: i64,
) -> Result<MessageResponse, ApiError> {
    let room: RoomData = load_room(persistence, room_id)?;
    let scope: AccessScope = resolve_scope(persistence, actor)?;
    ensure_building_access(&scope, room.building_id)?;

    persistence
        .delete_room_schedule(room_id, schedule_id)
        .map_err(translate_persistence_error)?;

    info!(schedule_id, room_id, "Room schedule removed");
    Ok(MessageResponse::new("Schedule deleted"))
}

// ============================================================================
// Reservations
// ============================================================================

/// Books a room.
///
/// # Errors
///
/// Returns the booking engine's first failed check: invalid interval, past
/// start, unknown requester, no access to the room, or a conflict.
pub fn create_reservation(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    request: CreateReservationRequest,
    now: OffsetDateTime,
) -> Result<ReservationInfo, ApiError> {
    let new_reservation = NewReservation {
        room_id: request.room_id,
        start: request.start_time,
        end: request.end_time,
        description: normalize(request.description),
    };

    let record: ReservationRecord = persistence
        .create_reservation(actor.to_requester(), &new_reservation, now)
        .map_err(translate_persistence_error)?;

    Ok(ReservationInfo::from(record))
}

/// Lists active reservations in the actor's buildings, newest start first.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn list_reservations(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
) -> Result<ListReservationsResponse, ApiError> {
    let scope: AccessScope = resolve_scope(persistence, actor)?;
    let filter: Option<Vec<i64>> = listing_filter(&scope);

    let reservations: Vec<ReservationInfo> = persistence
        .list_reservations(filter.as_deref())
        .map_err(translate_persistence_error)?
        .into_iter()
        .map(ReservationInfo::from)
        .collect();

    Ok(ListReservationsResponse { reservations })
}

/// Lists confirmed reservations for the public calendar. No session needed.
///
/// # Errors
///
/// Returns an error if `roomIds` is malformed or the store fails.
pub fn list_public_reservations(
    persistence: &mut Persistence,
    query: &PublicReservationsQuery,
) -> Result<ListReservationsResponse, ApiError> {
    let room_ids: Option<Vec<i64>> = match query.room_ids.as_deref() {
        Some(raw) => parse_room_ids(raw)?,
        None => None,
    };

    let reservations: Vec<ReservationInfo> = persistence
        .list_public_reservations(query.building_id, room_ids.as_deref())
        .map_err(translate_persistence_error)?
        .into_iter()
        .map(ReservationInfo::from)
        .collect();

    Ok(ListReservationsResponse { reservations })
}

/// Deletes a reservation.
///
/// # Errors
///
/// Returns an error if the reservation does not exist or the actor may not
/// remove it.
pub fn delete_reservation(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    reservation_id: i64,
) -> Result<MessageResponse, ApiError> {
    persistence
        .delete_reservation(actor.to_requester(), reservation_id)
        .map_err(translate_persistence_error)?;

    info!(reservation_id, user_id = actor.user_id, "Reservation deleted");
    Ok(MessageResponse::new("Reservation deleted"))
}

// ============================================================================
// Users (administrators only)
// ============================================================================

/// Lists every user with PINs and assignments.
///
/// # Errors
///
/// Returns an error if the actor is not an administrator or the store fails.
pub fn list_users(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
) -> Result<ListUsersResponse, ApiError> {
    AuthorizationService::authorize_admin(actor, "list_users")?;

    let users: Vec<UserData> = persistence
        .list_users()
        .map_err(translate_persistence_error)?;
    let users: Vec<UserInfo> = users
        .into_iter()
        .map(|user| {
            let building_ids: Vec<i64> = user_buildings(persistence, user.user_id)?;
            Ok(UserInfo::with_pin(user, building_ids))
        })
        .collect::<Result<_, ApiError>>()?;

    Ok(ListUsersResponse { users })
}

/// Creates a user with a generated PIN.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not an administrator
/// - A field is invalid or an assigned building does not exist
/// - The email is already taken (`Conflict`)
pub fn create_user(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    request: CreateUserRequest,
) -> Result<UserInfo, ApiError> {
    AuthorizationService::authorize_admin(actor, "create_user")?;

    let name: &str = request.name.trim();
    let email: &str = request.email.trim();
    validate_user_fields(name, email).map_err(translate_domain_error)?;
    let password: Option<&str> = validate_password(request.password.as_deref())?;
    ensure_email_free(persistence, email, None)?;
    ensure_buildings_exist(persistence, &request.building_ids)?;

    let pin: Pin = generate_unique_pin(persistence)?;
    let user_id: i64 = persistence
        .create_user(name, email, pin.value(), password, request.role)
        .map_err(translate_persistence_error)?;
    persistence
        .replace_user_buildings(user_id, &request.building_ids)
        .map_err(translate_persistence_error)?;

    info!(user_id, created_by = actor.user_id, role = request.role.as_str(), "User created");
    get_user(persistence, actor, user_id)
}

/// Returns one user with PIN and assignments.
///
/// # Errors
///
/// Returns an error if the actor is not an administrator or the user does not exist.
pub fn get_user(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    user_id: i64,
) -> Result<UserInfo, ApiError> {
    AuthorizationService::authorize_admin(actor, "get_user")?;

    let user: UserData = load_user(persistence, user_id)?;
    let building_ids: Vec<i64> = user_buildings(persistence, user_id)?;
    Ok(UserInfo::with_pin(user, building_ids))
}

/// Updates a user, optionally replacing the password and assignments.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not an administrator
/// - The user does not exist
/// - A field is invalid or an assigned building does not exist
/// - The email belongs to another user (`Conflict`)
pub fn update_user(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    user_id: i64,
    request: UpdateUserRequest,
) -> Result<UserInfo, ApiError> {
    AuthorizationService::authorize_admin(actor, "update_user")?;
    load_user(persistence, user_id)?;

    let name: &str = request.name.trim();
    let email: &str = request.email.trim();
    validate_user_fields(name, email).map_err(translate_domain_error)?;
    let password: Option<&str> = validate_password(request.password.as_deref())?;
    ensure_email_free(persistence, email, Some(user_id))?;
    if let Some(building_ids) = &request.building_ids {
        ensure_buildings_exist(persistence, building_ids)?;
    }

    persistence
        .update_user(user_id, name, email, request.role)
        .map_err(translate_persistence_error)?;
    if let Some(password) = password {
        persistence
            .update_user_password(user_id, password)
            .map_err(translate_persistence_error)?;
    }
    if let Some(building_ids) = &request.building_ids {
        persistence
            .replace_user_buildings(user_id, building_ids)
            .map_err(translate_persistence_error)?;
    }

    info!(user_id, updated_by = actor.user_id, "User updated");
    get_user(persistence, actor, user_id)
}

/// Deletes a user who owns no reservations.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not an administrator
/// - The actor targets themselves
/// - The user does not exist
/// - The user owns reservations
pub fn delete_user(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    user_id: i64,
) -> Result<MessageResponse, ApiError> {
    AuthorizationService::authorize_admin(actor, "delete_user")?;
    load_user(persistence, user_id)?;

    if user_id == actor.user_id {
        return Err(ApiError::DomainRuleViolation {
            rule: String::from("no_self_delete"),
            message: String::from("You cannot delete your own account"),
        });
    }

    persistence
        .delete_user(user_id)
        .map_err(translate_persistence_error)?;

    info!(user_id, deleted_by = actor.user_id, "User deleted");
    Ok(MessageResponse::new("User deleted"))
}
