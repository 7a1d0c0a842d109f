// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The booking engine.
//!
//! Operations here are written against [`BookingStore`] so the same ordered
//! checks run against a database transaction or an in-memory fake.

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
mod booking;
mod command;
mod error;
mod state;
mod store;

#[cfg(test)]
mod tests;

pub use access::{authorized_buildings, can_access_room, has_conflict, resolve_scope};
pub use booking::{create_reservation, delete_reservation};
pub use command::{NewReservation, Requester};
pub use error::CoreError;
pub use state::ReservationRecord;
pub use store::BookingStore;
