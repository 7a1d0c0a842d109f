// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use roombook_domain::Role;
use time::OffsetDateTime;

/// The identity a core operation runs on behalf of.
///
/// Always passed explicitly; nothing in the engine reads ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requester {
    /// The requesting user's identifier.
    pub user_id: i64,
    /// The requesting user's role.
    pub role: Role,
}

impl Requester {
    #[must_use]
    pub const fn new(user_id: i64, role: Role) -> Self {
        Self { user_id, role }
    }

    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// A request to book a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReservation {
    /// The room to book.
    pub room_id: i64,
    /// Inclusive start instant.
    pub start: OffsetDateTime,
    /// Exclusive end instant.
    pub end: OffsetDateTime,
    /// Free-form note shown on the calendar.
    pub description: Option<String>,
}
