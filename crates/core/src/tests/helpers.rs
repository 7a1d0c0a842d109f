// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::{BTreeMap, BTreeSet};

use roombook_domain::{ReservationSlot, ReservationState, Role, TimeRange};
use time::OffsetDateTime;
use time::macros::datetime;

use crate::{BookingStore, CoreError, NewReservation, ReservationRecord, Requester};

pub const ADMIN_ID: i64 = 1;
pub const CLERK_ID: i64 = 2;
pub const OUTSIDER_ID: i64 = 3;

pub const TOWN_HALL: i64 = 10;
pub const LIBRARY: i64 = 20;

pub const COUNCIL_ROOM: i64 = 100;
pub const READING_ROOM: i64 = 200;

/// The fixed "now" every test books against.
pub const NOW: OffsetDateTime = datetime!(2030-05-01 08:00 UTC);

struct StoredReservation {
    room_id: i64,
    user_id: i64,
    range: TimeRange,
    description: Option<String>,
    state: ReservationState,
}

/// An in-memory store with the same observable behaviour as the database.
#[derive(Default)]
pub struct FakeStore {
    users: BTreeMap<i64, BTreeSet<i64>>,
    user_names: BTreeMap<i64, String>,
    buildings: BTreeMap<i64, String>,
    rooms: BTreeMap<i64, (i64, String)>,
    reservations: BTreeMap<i64, StoredReservation>,
    next_reservation_id: i64,
}

impl FakeStore {
    /// Two buildings with one room each. The clerk is assigned to the town
    /// hall only; the admin and the outsider have no assignments.
    pub fn seeded() -> Self {
        let mut store: Self = Self {
            next_reservation_id: 1,
            ..Self::default()
        };
        store.buildings.insert(TOWN_HALL, String::from("Town Hall"));
        store.buildings.insert(LIBRARY, String::from("Library"));
        store
            .rooms
            .insert(COUNCIL_ROOM, (TOWN_HALL, String::from("Council Chamber")));
        store
            .rooms
            .insert(READING_ROOM, (LIBRARY, String::from("Reading Room")));
        store.users.insert(ADMIN_ID, BTreeSet::new());
        store.users.insert(CLERK_ID, BTreeSet::from([TOWN_HALL]));
        store.users.insert(OUTSIDER_ID, BTreeSet::new());
        store.user_names.insert(ADMIN_ID, String::from("Ada Admin"));
        store.user_names.insert(CLERK_ID, String::from("Carl Clerk"));
        store.user_names.insert(OUTSIDER_ID, String::from("Olive Outsider"));
        store
    }

    pub fn assign(&mut self, user_id: i64, building_id: i64) {
        self.users.entry(user_id).or_default().insert(building_id);
    }

    /// Inserts a reservation directly, bypassing the engine.
    pub fn seed_reservation(
        &mut self,
        room_id: i64,
        range: TimeRange,
        state: ReservationState,
    ) -> i64 {
        let id: i64 = self.next_reservation_id;
        self.next_reservation_id += 1;
        self.reservations.insert(
            id,
            StoredReservation {
                room_id,
                user_id: CLERK_ID,
                range,
                description: None,
                state,
            },
        );
        id
    }

    pub fn reservation_count(&self) -> usize {
        self.reservations.len()
    }

    pub fn contains_reservation(&self, reservation_id: i64) -> bool {
        self.reservations.contains_key(&reservation_id)
    }
}

impl BookingStore for FakeStore {
    type Error = CoreError;

    fn authorized_buildings(&mut self, user_id: i64) -> Result<Option<BTreeSet<i64>>, CoreError> {
        Ok(self.users.get(&user_id).cloned())
    }

    fn room_building(&mut self, room_id: i64) -> Result<Option<i64>, CoreError> {
        Ok(self.rooms.get(&room_id).map(|(building_id, _)| *building_id))
    }

    fn reservations_for_room(&mut self, room_id: i64) -> Result<Vec<ReservationSlot>, CoreError> {
        Ok(self
            .reservations
            .iter()
            .filter(|(_, r)| r.room_id == room_id)
            .map(|(id, r)| ReservationSlot::new(*id, r.range, r.state))
            .collect())
    }

    fn insert_reservation(
        &mut self,
        user_id: i64,
        room_id: i64,
        range: &TimeRange,
        description: Option<&str>,
    ) -> Result<ReservationRecord, CoreError> {
        let (building_id, room_name) = self.rooms[&room_id].clone();
        let id: i64 = self.next_reservation_id;
        self.next_reservation_id += 1;
        self.reservations.insert(
            id,
            StoredReservation {
                room_id,
                user_id,
                range: *range,
                description: description.map(str::to_string),
                state: ReservationState::Confirmed,
            },
        );
        let stored: &StoredReservation = &self.reservations[&id];
        Ok(ReservationRecord {
            reservation_id: id,
            room_id,
            room_name,
            building_id,
            building_name: self.buildings[&building_id].clone(),
            user_id: stored.user_id,
            user_name: self.user_names[&user_id].clone(),
            range: stored.range,
            description: stored.description.clone(),
            state: stored.state,
            created_at: String::from("2030-05-01T08:00:00Z"),
        })
    }

    fn reservation_building(&mut self, reservation_id: i64) -> Result<Option<i64>, CoreError> {
        Ok(self
            .reservations
            .get(&reservation_id)
            .map(|r| self.rooms[&r.room_id].0))
    }

    fn remove_reservation(&mut self, reservation_id: i64) -> Result<(), CoreError> {
        self.reservations
            .remove(&reservation_id)
            .map(|_| ())
            .ok_or(CoreError::ReservationNotFound(reservation_id))
    }
}

pub const fn admin() -> Requester {
    Requester::new(ADMIN_ID, Role::Admin)
}

pub const fn clerk() -> Requester {
    Requester::new(CLERK_ID, Role::User)
}

pub const fn outsider() -> Requester {
    Requester::new(OUTSIDER_ID, Role::User)
}

pub fn range(start: OffsetDateTime, end: OffsetDateTime) -> TimeRange {
    TimeRange::new(start, end).unwrap()
}

pub fn booking(room_id: i64, start: OffsetDateTime, end: OffsetDateTime) -> NewReservation {
    NewReservation {
        room_id,
        start,
        end,
        description: None,
    }
}
