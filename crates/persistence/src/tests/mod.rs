// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod session_tests;

use roombook::{NewReservation, Requester};
use roombook_domain::Role;
use time::macros::datetime;
use time::{Duration, OffsetDateTime};

use crate::{Persistence, RoomFields};

/// The fixed "current instant" used by booking tests.
pub const NOW: OffsetDateTime = datetime!(2030-05-01 08:00 UTC);

/// A small seeded world: one admin, one clerk, two buildings with one room each.
///
/// The clerk is assigned to Town Hall only. The admin has no assignments.
pub struct World {
    pub persistence: Persistence,
    pub admin_id: i64,
    pub clerk_id: i64,
    pub town_hall_id: i64,
    pub library_id: i64,
    pub council_room_id: i64,
    pub reading_room_id: i64,
}

impl World {
    pub const fn admin(&self) -> Requester {
        Requester::new(self.admin_id, Role::Admin)
    }

    pub const fn clerk(&self) -> Requester {
        Requester::new(self.clerk_id, Role::User)
    }
}

pub fn room_fields(name: &str) -> RoomFields<'_> {
    RoomFields {
        name,
        capacity: Some(12),
        equipment: Some("Projector"),
        color: Some("#3366CC"),
    }
}

pub fn seed_world(mut persistence: Persistence) -> World {
    let admin_id: i64 = persistence
        .create_user("Ada Admin", "ada@city.example", "1111", None, Role::Admin)
        .expect("admin");
    let clerk_id: i64 = persistence
        .create_user("Carl Clerk", "carl@city.example", "2222", None, Role::User)
        .expect("clerk");

    let town_hall_id: i64 = persistence
        .create_building("Town Hall", Some("1 Main St"), None)
        .expect("town hall");
    let library_id: i64 = persistence
        .create_building("Library", None, Some("Public library"))
        .expect("library");

    let council_room_id: i64 = persistence
        .create_room(town_hall_id, &room_fields("Council Room"))
        .expect("council room");
    let reading_room_id: i64 = persistence
        .create_room(library_id, &room_fields("Reading Room"))
        .expect("reading room");

    persistence
        .assign_building(clerk_id, town_hall_id)
        .expect("assignment");

    World {
        persistence,
        admin_id,
        clerk_id,
        town_hall_id,
        library_id,
        council_room_id,
        reading_room_id,
    }
}

pub fn world() -> World {
    seed_world(Persistence::new_in_memory().expect("in-memory database"))
}

/// A booking `hours_from_now` hours after [`NOW`], lasting `length` hours.
pub fn booking(room_id: i64, hours_from_now: i64, length: i64) -> NewReservation {
    let start: OffsetDateTime = NOW + Duration::hours(hours_from_now);
    NewReservation {
        room_id,
        start,
        end: start + Duration::hours(length),
        description: Some(String::from("Planning meeting")),
    }
}
