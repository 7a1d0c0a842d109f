// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain types and rules for the room booking service.
//!
//! Everything here is pure: no I/O, no clocks. Callers pass `now` and the
//! already-loaded reservations explicitly.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod access;
mod conflict;
mod error;
mod interval;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use access::AccessScope;
pub use conflict::{ReservationSlot, find_conflict, has_conflict};
pub use error::DomainError;
pub use interval::TimeRange;
pub use types::{Pin, ReservationState, Role, WeeklyWindow, parse_time_of_day};
pub use validation::{
    validate_building_fields, validate_color, validate_email, validate_room_fields,
    validate_user_fields,
};
