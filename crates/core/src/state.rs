// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use roombook_domain::{ReservationState, TimeRange};

/// A stored reservation joined with its room and building.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationRecord {
    /// The reservation's identifier.
    pub reservation_id: i64,
    /// The booked room.
    pub room_id: i64,
    /// The booked room's name.
    pub room_name: String,
    /// The building that owns the room.
    pub building_id: i64,
    /// The owning building's name.
    pub building_name: String,
    /// The user who created the reservation.
    pub user_id: i64,
    /// The creator's display name.
    pub user_name: String,
    /// The reserved interval.
    pub range: TimeRange,
    /// Free-form note.
    pub description: Option<String>,
    /// Lifecycle state.
    pub state: ReservationState,
    /// Creation timestamp as stored.
    pub created_at: String,
}
