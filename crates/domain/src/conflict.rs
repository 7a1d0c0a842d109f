// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::interval::TimeRange;
use crate::types::ReservationState;

/// An existing reservation as seen by the conflict detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservationSlot {
    /// The reservation's identifier.
    pub reservation_id: i64,
    /// The occupied interval.
    pub range: TimeRange,
    /// The reservation's lifecycle state.
    pub state: ReservationState,
}

impl ReservationSlot {
    #[must_use]
    pub const fn new(reservation_id: i64, range: TimeRange, state: ReservationState) -> Self {
        Self {
            reservation_id,
            range,
            state,
        }
    }
}

/// Finds the first active reservation that overlaps `candidate`.
///
/// Cancelled reservations never conflict. `exclude_reservation_id` skips one
/// reservation so an in-place edit does not collide with its own interval.
///
/// # Arguments
///
/// * `existing` - Reservations already held on the same room
/// * `candidate` - The interval being requested
/// * `exclude_reservation_id` - A reservation to ignore, if any
#[must_use]
pub fn find_conflict<'a>(
    existing: &'a [ReservationSlot],
    candidate: &TimeRange,
    exclude_reservation_id: Option<i64>,
) -> Option<&'a ReservationSlot> {
    existing.iter().find(|slot| {
        slot.state.is_active()
            && Some(slot.reservation_id) != exclude_reservation_id
            && slot.range.overlaps(candidate)
    })
}

/// Returns whether `candidate` collides with any active reservation.
#[must_use]
pub fn has_conflict(
    existing: &[ReservationSlot],
    candidate: &TimeRange,
    exclude_reservation_id: Option<i64>,
) -> bool {
    find_conflict(existing, candidate, exclude_reservation_id).is_some()
}
