// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use roombook_domain::DomainError;

/// Errors produced by the booking engine and access scoping operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The requesting user could not be resolved.
    Unauthenticated {
        /// The identifier that failed to resolve.
        user_id: i64,
    },
    /// The requester may not book the room.
    ///
    /// Also returned when the room does not exist.
    RoomAccessDenied {
        /// The requesting user.
        user_id: i64,
        /// The room that was requested.
        room_id: i64,
    },
    /// The requester may not remove the reservation.
    ReservationAccessDenied {
        /// The requesting user.
        user_id: i64,
        /// The reservation that was targeted.
        reservation_id: i64,
    },
    /// The user does not exist.
    UserNotFound(i64),
    /// The reservation does not exist.
    ReservationNotFound(i64),
    /// The requested interval overlaps an active reservation.
    SchedulingConflict {
        /// The room being booked.
        room_id: i64,
        /// The reservation that already holds the interval.
        conflicting_reservation_id: i64,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::Unauthenticated { .. } => write!(f, "Requesting user could not be resolved"),
            Self::RoomAccessDenied { room_id, .. } => {
                write!(f, "Not authorized to book room {room_id}")
            }
            Self::ReservationAccessDenied { reservation_id, .. } => {
                write!(f, "Not authorized to delete reservation {reservation_id}")
            }
            Self::UserNotFound(user_id) => write!(f, "User {user_id} not found"),
            Self::ReservationNotFound(reservation_id) => {
                write!(f, "Reservation {reservation_id} not found")
            }
            Self::SchedulingConflict { room_id, .. } => write!(
                f,
                "Room {room_id} is already booked for part of the requested time"
            ),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
