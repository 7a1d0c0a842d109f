// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! HTTP handlers and routing.
//!
//! Each handler locks the shared persistence, calls the matching
//! `roombook_api` function and maps the result onto a status code.

use axum::{
    Json, Router,
    extract::State as AxumState,
    http::StatusCode,
    routing::{delete, get, post},
};
use roombook_api::{
    BuildingInfo, BuildingRequest, CreateReservationRequest, CreateRoomRequest,
    CreateScheduleRequest, CreateUserRequest, ListBuildingsResponse, ListReservationsResponse,
    ListRoomsQuery, ListRoomsResponse, ListSchedulesResponse, ListUsersResponse, LoginRequest,
    LoginResponse, MessageResponse, PublicReservationsQuery, ReservationInfo, RoomInfo,
    ScheduleInfo, UpdateRoomRequest, UpdateUserRequest, UserInfo, WhoAmIResponse,
};
use time::OffsetDateTime;
use tracing::info;

use crate::AppState;
use crate::error::HttpError;
use crate::extract::{ValidatedJson, ValidatedPath, ValidatedQuery};
use crate::session::SessionUser;

type Created<T> = (StatusCode, Json<T>);

// ============================================================================
// Authentication
// ============================================================================

async fn handle_login(
    AxumState(app_state): AxumState<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: LoginResponse =
        roombook_api::login(&mut persistence, &req, OffsetDateTime::now_utc())?;
    drop(persistence);

    info!(user_id = response.user.user_id, "User signed in");
    Ok(Json(response))
}

async fn handle_logout(
    AxumState(app_state): AxumState<AppState>,
    SessionUser { actor, token }: SessionUser,
) -> Result<Json<MessageResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: MessageResponse = roombook_api::logout(&mut persistence, &token)?;
    drop(persistence);

    info!(user_id = actor.user_id, "User signed out");
    Ok(Json(response))
}

async fn handle_whoami(
    AxumState(app_state): AxumState<AppState>,
    SessionUser { actor, .. }: SessionUser,
) -> Result<Json<WhoAmIResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(roombook_api::whoami(&mut persistence, &actor)?))
}

// ============================================================================
// Buildings
// ============================================================================

async fn handle_list_buildings(
    AxumState(app_state): AxumState<AppState>,
    SessionUser { actor, .. }: SessionUser,
) -> Result<Json<ListBuildingsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(roombook_api::list_buildings(&mut persistence, &actor)?))
}

async fn handle_create_building(
    AxumState(app_state): AxumState<AppState>,
    SessionUser { actor, .. }: SessionUser,
    ValidatedJson(req): ValidatedJson<BuildingRequest>,
) -> Result<Created<BuildingInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let building: BuildingInfo = roombook_api::create_building(&mut persistence, &actor, req)?;
    Ok((StatusCode::CREATED, Json(building)))
}

async fn handle_get_building(
    AxumState(app_state): AxumState<AppState>,
    SessionUser { actor, .. }: SessionUser,
    ValidatedPath(building_id): ValidatedPath<i64>,
) -> Result<Json<BuildingInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(roombook_api::get_building(
        &mut persistence,
        &actor,
        building_id,
    )?))
}

async fn handle_update_building(
    AxumState(app_state): AxumState<AppState>,
    SessionUser { actor, .. }: SessionUser,
    ValidatedPath(building_id): ValidatedPath<i64>,
    ValidatedJson(req): ValidatedJson<BuildingRequest>,
) -> Result<Json<BuildingInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(roombook_api::update_building(
        &mut persistence,
        &actor,
        building_id,
        req,
    )?))
}

async fn handle_delete_building(
    AxumState(app_state): AxumState<AppState>,
    SessionUser { actor, .. }: SessionUser,
    ValidatedPath(building_id): ValidatedPath<i64>,
) -> Result<Json<MessageResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(roombook_api::delete_building(
        &mut persistence,
        &actor,
        building_id,
    )?))
}

// ============================================================================
// Rooms
// ============================================================================

async fn handle_list_rooms(
    AxumState(app_state): AxumState<AppState>,
    SessionUser { actor, .. }: SessionUser,
    ValidatedQuery(query): ValidatedQuery<ListRoomsQuery>,
) -> Result<Json<ListRoomsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(roombook_api::list_rooms(&mut persistence, &actor, &query)?))
}

async fn handle_create_room(
    AxumState(app_state): AxumState<AppState>,
    SessionUser { actor, .. }: SessionUser,
    ValidatedJson(req): ValidatedJson<CreateRoomRequest>,
) -> Result<Created<RoomInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let room: RoomInfo = roombook_api::create_room(&mut persistence, &actor, req)?;
    Ok((StatusCode::CREATED, Json(room)))
}

async fn handle_get_room(
    AxumState(app_state): AxumState<AppState>,
    SessionUser { actor, .. }: SessionUser,
    ValidatedPath(room_id): ValidatedPath<i64>,
) -> Result<Json<RoomInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(roombook_api::get_room(&mut persistence, &actor, room_id)?))
}

async fn handle_update_room(
    AxumState(app_state): AxumState<AppState>,
    SessionUser { actor, .. }: SessionUser,
    ValidatedPath(room_id): ValidatedPath<i64>,
    ValidatedJson(req): ValidatedJson<UpdateRoomRequest>,
) -> Result<Json<RoomInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(roombook_api::update_room(
        &mut persistence,
        &actor,
        room_id,
        req,
    )?))
}

async fn handle_delete_room(
    AxumState(app_state): AxumState<AppState>,
    SessionUser { actor, .. }: SessionUser,
    ValidatedPath(room_id): ValidatedPath<i64>,
) -> Result<Json<MessageResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(roombook_api::delete_room(&mut persistence, &actor, room_id)?))
}

async fn handle_list_room_schedules(
    AxumState(app_state): AxumState<AppState>,
    SessionUser { actor, .. }: SessionUser,
    ValidatedPath(room_id): ValidatedPath<i64>,
) -> Result<Json<ListSchedulesResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(roombook_api::list_room_schedules(
        &mut persistence,
        &actor,
        room_id,
    )?))
}

async fn handle_add_room_schedule(
    AxumState(app_state): AxumState<AppState>,
    SessionUser { actor, .. }: SessionUser,
    ValidatedPath(room_id): ValidatedPath<i64>,
    ValidatedJson(req): ValidatedJson<CreateScheduleRequest>,
) -> Result<Created<ScheduleInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let schedule: ScheduleInfo =
        roombook_api::add_room_schedule(&mut persistence, &actor, room_id, &req)?;
    Ok((StatusCode::CREATED, Json(schedule)))
}

async fn handle_delete_room_schedule(
    AxumState(app_state): AxumState<AppState>,
    SessionUser { actor, .. }: SessionUser,
    ValidatedPath((room_id, schedule_id)): ValidatedPath<(i64, i64)>,
) -> Result<Json<MessageResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(roombook_api::delete_room_schedule(
        &mut persistence,
        &actor,
        room_id,
        schedule_id,
    )?))
}

// ============================================================================
// Reservations
// ============================================================================

async fn handle_create_reservation(
    AxumState(app_state): AxumState<AppState>,
    SessionUser { actor, .. }: SessionUser,
    ValidatedJson(req): ValidatedJson<CreateReservationRequest>,
) -> Result<Created<ReservationInfo>, HttpError> {
    info!(
        user_id = actor.user_id,
        room_id = req.room_id,
        "Handling create_reservation request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let reservation: ReservationInfo = roombook_api::create_reservation(
        &mut persistence,
        &actor,
        req,
        OffsetDateTime::now_utc(),
    )?;
    drop(persistence);

    info!(
        reservation_id = reservation.reservation_id,
        room_id = reservation.room_id,
        "Reservation created"
    );
    Ok((StatusCode::CREATED, Json(reservation)))
}

async fn handle_list_reservations(
    AxumState(app_state): AxumState<AppState>,
    SessionUser { actor, .. }: SessionUser,
) -> Result<Json<ListReservationsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(roombook_api::list_reservations(&mut persistence, &actor)?))
}

async fn handle_list_public_reservations(
    AxumState(app_state): AxumState<AppState>,
    ValidatedQuery(query): ValidatedQuery<PublicReservationsQuery>,
) -> Result<Json<ListReservationsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(roombook_api::list_public_reservations(
        &mut persistence,
        &query,
    )?))
}

async fn handle_delete_reservation(
    AxumState(app_state): AxumState<AppState>,
    SessionUser { actor, .. }: SessionUser,
    ValidatedPath(reservation_id): ValidatedPath<i64>,
) -> Result<Json<MessageResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(roombook_api::delete_reservation(
        &mut persistence,
        &actor,
        reservation_id,
    )?))
}

// ============================================================================
// Users
// ============================================================================

async fn handle_list_users(
    AxumState(app_state): AxumState<AppState>,
    SessionUser { actor, .. }: SessionUser,
) -> Result<Json<ListUsersResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(roombook_api::list_users(&mut persistence, &actor)?))
}

async fn handle_create_user(
    AxumState(app_state): AxumState<AppState>,
    SessionUser { actor, .. }: SessionUser,
    ValidatedJson(req): ValidatedJson<CreateUserRequest>,
) -> Result<Created<UserInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let user: UserInfo = roombook_api::create_user(&mut persistence, &actor, req)?;
    Ok((StatusCode::CREATED, Json(user)))
}

async fn handle_get_user(
    AxumState(app_state): AxumState<AppState>,
    SessionUser { actor, .. }: SessionUser,
    ValidatedPath(user_id): ValidatedPath<i64>,
) -> Result<Json<UserInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(roombook_api::get_user(&mut persistence, &actor, user_id)?))
}

async fn handle_update_user(
    AxumState(app_state): AxumState<AppState>,
    SessionUser { actor, .. }: SessionUser,
    ValidatedPath(user_id): ValidatedPath<i64>,
    ValidatedJson(req): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<UserInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(roombook_api::update_user(
        &mut persistence,
        &actor,
        user_id,
        req,
    )?))
}

async fn handle_delete_user(
    AxumState(app_state): AxumState<AppState>,
    SessionUser { actor, .. }: SessionUser,
    ValidatedPath(user_id): ValidatedPath<i64>,
) -> Result<Json<MessageResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(roombook_api::delete_user(&mut persistence, &actor, user_id)?))
}

/// Builds the application router.
pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/auth/login", post(handle_login))
        .route("/auth/logout", post(handle_logout))
        .route("/auth/me", get(handle_whoami))
        .route(
            "/buildings",
            get(handle_list_buildings).post(handle_create_building),
        )
        .route(
            "/buildings/{id}",
            get(handle_get_building)
                .put(handle_update_building)
                .delete(handle_delete_building),
        )
        .route("/rooms", get(handle_list_rooms).post(handle_create_room))
        .route(
            "/rooms/{id}",
            get(handle_get_room)
                .put(handle_update_room)
                .delete(handle_delete_room),
        )
        .route(
            "/rooms/{id}/schedules",
            get(handle_list_room_schedules).post(handle_add_room_schedule),
        )
        .route(
            "/rooms/{id}/schedules/{schedule_id}",
            delete(handle_delete_room_schedule),
        )
        .route(
            "/reservations",
            get(handle_list_reservations).post(handle_create_reservation),
        )
        .route(
            "/reservations/public",
            get(handle_list_public_reservations),
        )
        .route(
            "/reservations/{id}",
            delete(handle_delete_reservation),
        )
        .route("/admin/users", get(handle_list_users).post(handle_create_user))
        .route(
            "/admin/users/{id}",
            get(handle_get_user)
                .put(handle_update_user)
                .delete(handle_delete_user),
        )
        .with_state(app_state)
}
