// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Time;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Wall-clock format used for weekly availability windows.
const TIME_OF_DAY_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]");

/// The role a user holds.
///
/// `Admin` is a capability override for administrative operations. It does
/// not grant building access for booking; that still requires an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Manages buildings, rooms and users across the whole system.
    Admin,
    /// Regular user scoped to assigned buildings.
    #[default]
    User,
}

impl Role {
    /// Converts this role to its stored string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::User => "USER",
        }
    }

    /// Returns whether this role carries the administrative override.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Self::Admin),
            "USER" => Ok(Self::User),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The lifecycle state of a reservation.
///
/// Successful bookings are created directly as `Confirmed`. Removal is a hard
/// delete, so no transition into `Cancelled` exists; rows carrying it (for
/// example from an import) are stored but never block a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationState {
    /// Awaiting approval. Still blocks the room.
    Pending,
    /// Booked.
    #[default]
    Confirmed,
    /// Released. Ignored by conflict detection.
    Cancelled,
}

impl ReservationState {
    /// Converts this state to its stored string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Returns whether a reservation in this state occupies its room.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }

    /// The stored representations of every active state.
    #[must_use]
    pub const fn active_states() -> [&'static str; 2] {
        [Self::Pending.as_str(), Self::Confirmed.as_str()]
    }
}

impl FromStr for ReservationState {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "CONFIRMED" => Ok(Self::Confirmed),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidReservationState(s.to_string())),
        }
    }
}

impl std::fmt::Display for ReservationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A four digit sign-in credential.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pin(String);

impl Pin {
    /// Number of digits in a PIN.
    pub const LENGTH: usize = 4;
    /// Smallest PIN handed out by the generator.
    pub const MIN_GENERATED: u16 = 1000;
    /// Largest PIN handed out by the generator.
    pub const MAX_GENERATED: u16 = 9999;

    /// Creates a PIN after checking its shape.
    ///
    /// # Arguments
    ///
    /// * `value` - The candidate PIN
    ///
    /// # Errors
    ///
    /// Returns an error unless `value` is exactly four ASCII digits.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        if value.len() != Self::LENGTH || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidPin(String::from(
                "PIN must be exactly 4 digits",
            )));
        }
        Ok(Self(value.to_string()))
    }

    /// Builds a PIN from a number in the generator range.
    ///
    /// # Errors
    ///
    /// Returns an error if `number` is outside `1000..=9999`.
    pub fn from_number(number: u16) -> Result<Self, DomainError> {
        if !(Self::MIN_GENERATED..=Self::MAX_GENERATED).contains(&number) {
            return Err(DomainError::InvalidPin(format!(
                "{number} is outside {}..={}",
                Self::MIN_GENERATED,
                Self::MAX_GENERATED
            )));
        }
        Ok(Self(number.to_string()))
    }

    /// Returns the PIN digits.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// A recurring weekly availability window for a room.
///
/// Windows are display metadata. Bookings outside them are not rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeeklyWindow {
    /// Day of the week, 0 = Sunday through 6 = Saturday.
    day_of_week: u8,
    /// Opening time (inclusive).
    start: Time,
    /// Closing time (exclusive).
    end: Time,
}

impl WeeklyWindow {
    /// Creates a weekly window.
    ///
    /// # Arguments
    ///
    /// * `day_of_week` - 0 (Sunday) through 6 (Saturday)
    /// * `start` - Opening time
    /// * `end` - Closing time, strictly after `start`
    ///
    /// # Errors
    ///
    /// Returns an error if the day is out of range or `start >= end`.
    pub fn new(day_of_week: u8, start: Time, end: Time) -> Result<Self, DomainError> {
        if day_of_week > 6 {
            return Err(DomainError::InvalidScheduleWindow(format!(
                "day of week {day_of_week} must be between 0 (Sunday) and 6 (Saturday)"
            )));
        }
        if start >= end {
            return Err(DomainError::InvalidScheduleWindow(format!(
                "opening time {} must be before closing time {}",
                format_time_of_day(start),
                format_time_of_day(end)
            )));
        }
        Ok(Self {
            day_of_week,
            start,
            end,
        })
    }

    /// Parses a window from `HH:MM` strings.
    ///
    /// # Errors
    ///
    /// Returns an error if either time fails to parse or the window is invalid.
    pub fn parse(day_of_week: u8, start: &str, end: &str) -> Result<Self, DomainError> {
        let start: Time = parse_time_of_day(start)?;
        let end: Time = parse_time_of_day(end)?;
        Self::new(day_of_week, start, end)
    }

    #[must_use]
    pub const fn day_of_week(&self) -> u8 {
        self.day_of_week
    }

    #[must_use]
    pub const fn start(&self) -> Time {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> Time {
        self.end
    }

    /// Opening time as `HH:MM`.
    #[must_use]
    pub fn start_str(&self) -> String {
        format_time_of_day(self.start)
    }

    /// Closing time as `HH:MM`.
    #[must_use]
    pub fn end_str(&self) -> String {
        format_time_of_day(self.end)
    }
}

/// Parses an `HH:MM` wall-clock time.
///
/// # Errors
///
/// Returns an error if the string is not a valid 24-hour time.
pub fn parse_time_of_day(value: &str) -> Result<Time, DomainError> {
    Time::parse(value, TIME_OF_DAY_FORMAT).map_err(|e| {
        DomainError::InvalidScheduleWindow(format!("'{value}' is not a valid HH:MM time: {e}"))
    })
}

fn format_time_of_day(value: Time) -> String {
    format!("{:02}:{:02}", value.hour(), value.minute())
}
