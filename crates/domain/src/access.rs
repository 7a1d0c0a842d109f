// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Building-level access scoping.
//!
//! A user's scope is the set of buildings they are assigned to. Rooms are
//! reached transitively through their owning building. The administrative
//! override is a separate check and never widens `can_access_building`.

use std::collections::BTreeSet;

use crate::types::Role;

/// The effective set of buildings one user may act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessScope {
    user_id: i64,
    role: Role,
    buildings: BTreeSet<i64>,
}

impl AccessScope {
    /// Creates a scope from a resolved assignment set.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user this scope belongs to
    /// * `role` - The user's role
    /// * `buildings` - Building ids joined to the user by assignment
    #[must_use]
    pub const fn new(user_id: i64, role: Role, buildings: BTreeSet<i64>) -> Self {
        Self {
            user_id,
            role,
            buildings,
        }
    }

    #[must_use]
    pub const fn user_id(&self) -> i64 {
        self.user_id
    }

    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// The assigned building ids. Empty when the user has no assignment.
    #[must_use]
    pub const fn authorized_buildings(&self) -> &BTreeSet<i64> {
        &self.buildings
    }

    /// Returns whether the building is in the assignment set.
    #[must_use]
    pub fn can_access_building(&self, building_id: i64) -> bool {
        self.buildings.contains(&building_id)
    }

    /// Returns whether a room owned by `room_building_id` is accessible.
    ///
    /// `None` means the room does not exist, which is never accessible.
    #[must_use]
    pub fn can_access_room(&self, room_building_id: Option<i64>) -> bool {
        room_building_id.is_some_and(|building_id| self.can_access_building(building_id))
    }

    /// Returns whether the user may manage the building or its contents.
    ///
    /// Administrators bypass the assignment set here.
    #[must_use]
    pub fn can_administer_building(&self, building_id: i64) -> bool {
        self.role.is_admin() || self.can_access_building(building_id)
    }

    /// Returns whether listings for this user should skip scoping.
    #[must_use]
    pub const fn sees_everything(&self) -> bool {
        self.role.is_admin()
    }
}
