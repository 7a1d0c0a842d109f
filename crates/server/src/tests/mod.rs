// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Router tests driven through `tower::ServiceExt::oneshot`.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use roombook_domain::Role;
use roombook_persistence::{Persistence, RoomFields};
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::AppState;
use crate::routes::build_router;

pub const ADMIN_PIN: &str = "1111";
pub const CLERK_PIN: &str = "2222";

/// Seeded ids for router tests.
pub struct TestApp {
    pub router: Router,
    pub town_hall_id: i64,
    pub library_id: i64,
    pub council_room_id: i64,
    pub reading_room_id: i64,
    pub clerk_id: i64,
}

/// Builds a router over an in-memory database.
///
/// The administrator has no building assignment; the clerk is assigned to
/// the town hall only.
pub fn test_app() -> TestApp {
    let mut persistence: Persistence =
        Persistence::new_in_memory().expect("Failed to create in-memory persistence");

    persistence
        .create_user("Ada Admin", "ada@example.org", ADMIN_PIN, None, Role::Admin)
        .unwrap();
    let clerk_id: i64 = persistence
        .create_user("Carl Clerk", "carl@example.org", CLERK_PIN, None, Role::User)
        .unwrap();
    let town_hall_id: i64 = persistence
        .create_building("Town Hall", None, None)
        .unwrap();
    let library_id: i64 = persistence.create_building("Library", None, None).unwrap();
    persistence.assign_building(clerk_id, town_hall_id).unwrap();

    let council_room_id: i64 = persistence
        .create_room(town_hall_id, &room_fields("Council Room"))
        .unwrap();
    let reading_room_id: i64 = persistence
        .create_room(library_id, &room_fields("Reading Room"))
        .unwrap();

    TestApp {
        router: build_router(AppState::new(persistence)),
        town_hall_id,
        library_id,
        council_room_id,
        reading_room_id,
        clerk_id,
    }
}

const fn room_fields(name: &str) -> RoomFields<'_> {
    RoomFields {
        name,
        capacity: Some(10),
        equipment: None,
        color: None,
    }
}

/// Sends one request and returns the status with the parsed JSON body.
pub async fn send(
    router: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value: Value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// Signs in and returns the bearer token.
pub async fn login(router: &Router, pin: &str) -> String {
    let (status, body) = send(
        router,
        "POST",
        "/auth/login",
        None,
        Some(json!({ "pin": pin })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    body["sessionToken"].as_str().unwrap().to_string()
}

/// A booking body in the far future so the wall clock never makes it past.
pub fn booking(room_id: i64, start: &str, end: &str) -> Value {
    json!({
        "roomId": room_id,
        "startTime": start,
        "endTime": end,
        "description": "Budget hearing",
    })
}
