// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::OffsetDateTime;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A reservation interval does not start strictly before it ends.
    InvalidInterval {
        /// The requested start instant.
        start: OffsetDateTime,
        /// The requested end instant.
        end: OffsetDateTime,
    },
    /// A reservation starts strictly before the request time.
    PastDateRejected {
        /// The requested start instant.
        start: OffsetDateTime,
        /// The instant the request was evaluated at.
        now: OffsetDateTime,
    },
    /// A stored timestamp cannot be represented as a date-time.
    TimestampOutOfRange(i64),
    /// A PIN is not exactly four ASCII digits.
    InvalidPin(String),
    /// An email address is empty or malformed.
    InvalidEmail(String),
    /// A display name is empty or invalid.
    InvalidName(String),
    /// A role string does not name a known role.
    InvalidRole(String),
    /// A reservation state string does not name a known state.
    InvalidReservationState(String),
    /// Room capacity must be a positive integer.
    InvalidCapacity {
        /// The rejected capacity.
        capacity: i32,
    },
    /// A display color is not a `#RRGGBB` hex triplet.
    InvalidColor(String),
    /// A weekly availability window is malformed.
    InvalidScheduleWindow(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInterval { start, end } => {
                write!(
                    f,
                    "Reservation start ({start}) must be strictly before its end ({end})"
                )
            }
            Self::PastDateRejected { start, now } => {
                write!(
                    f,
                    "Reservation start ({start}) is in the past (now is {now})"
                )
            }
            Self::TimestampOutOfRange(seconds) => {
                write!(f, "Timestamp {seconds} is out of range")
            }
            Self::InvalidPin(msg) => write!(f, "Invalid PIN: {msg}"),
            Self::InvalidEmail(msg) => write!(f, "Invalid email: {msg}"),
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidRole(role) => {
                write!(f, "Invalid role: '{role}'. Must be 'ADMIN' or 'USER'")
            }
            Self::InvalidReservationState(state) => {
                write!(f, "Invalid reservation state: '{state}'")
            }
            Self::InvalidCapacity { capacity } => {
                write!(
                    f,
                    "Invalid capacity: {capacity}. Must be a positive integer"
                )
            }
            Self::InvalidColor(color) => {
                write!(f, "Invalid color: '{color}'. Expected #RRGGBB")
            }
            Self::InvalidScheduleWindow(msg) => write!(f, "Invalid schedule window: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
