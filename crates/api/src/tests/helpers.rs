// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use roombook_domain::Role;
use roombook_persistence::{Persistence, RoomFields};
use time::macros::datetime;
use time::{Duration, OffsetDateTime};

use crate::{AuthenticatedActor, CreateReservationRequest};

/// Fixed clock for every handler test.
pub const NOW: OffsetDateTime = datetime!(2030-05-01 08:00 UTC);

pub const ADMIN_PIN: &str = "1111";
pub const CLERK_PIN: &str = "2222";
pub const OUTSIDER_PIN: &str = "3333";

/// A seeded database.
///
/// - An administrator with no building assignment
/// - A clerk assigned to the town hall
/// - An outsider assigned to the library
/// - One room in each building
pub struct Fixture {
    pub persistence: Persistence,
    pub admin: AuthenticatedActor,
    pub clerk: AuthenticatedActor,
    pub outsider: AuthenticatedActor,
    pub town_hall_id: i64,
    pub library_id: i64,
    pub council_room_id: i64,
    pub reading_room_id: i64,
}

pub fn setup_fixture() -> Fixture {
    let mut persistence: Persistence =
        Persistence::new_in_memory().expect("Failed to create in-memory persistence");

    let admin_id: i64 = persistence
        .create_user("Ada Admin", "ada@example.org", ADMIN_PIN, None, Role::Admin)
        .expect("Failed to create admin");
    let clerk_id: i64 = persistence
        .create_user("Carl Clerk", "carl@example.org", CLERK_PIN, None, Role::User)
        .expect("Failed to create clerk");
    let outsider_id: i64 = persistence
        .create_user("Olga Other", "olga@example.org", OUTSIDER_PIN, None, Role::User)
        .expect("Failed to create outsider");

    let town_hall_id: i64 = persistence
        .create_building("Town Hall", Some("1 Main St"), None)
        .expect("Failed to create town hall");
    let library_id: i64 = persistence
        .create_building("Library", None, None)
        .expect("Failed to create library");

    persistence
        .assign_building(clerk_id, town_hall_id)
        .expect("Failed to assign clerk");
    persistence
        .assign_building(outsider_id, library_id)
        .expect("Failed to assign outsider");

    let council_room_id: i64 = persistence
        .create_room(town_hall_id, &room_fields("Council Room"))
        .expect("Failed to create council room");
    let reading_room_id: i64 = persistence
        .create_room(library_id, &room_fields("Reading Room"))
        .expect("Failed to create reading room");

    Fixture {
        persistence,
        admin: AuthenticatedActor::new(admin_id, Role::Admin),
        clerk: AuthenticatedActor::new(clerk_id, Role::User),
        outsider: AuthenticatedActor::new(outsider_id, Role::User),
        town_hall_id,
        library_id,
        council_room_id,
        reading_room_id,
    }
}

pub const fn room_fields(name: &str) -> RoomFields<'_> {
    RoomFields {
        name,
        capacity: Some(20),
        equipment: None,
        color: None,
    }
}

/// A booking request starting `hours_from_now` after [`NOW`].
pub fn reservation_request(room_id: i64, hours_from_now: i64, length_hours: i64) -> CreateReservationRequest {
    let start: OffsetDateTime = NOW + Duration::hours(hours_from_now);
    CreateReservationRequest {
        room_id,
        start_time: start,
        end_time: start + Duration::hours(length_hours),
        description: Some(String::from("Committee meeting")),
    }
}
