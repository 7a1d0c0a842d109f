// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::{Duration, OffsetDateTime};

use crate::error::DomainError;

/// A half-open booking interval `[start, end)`.
///
/// Both endpoints are held at whole-second precision, the precision the
/// store keeps. Construction guarantees `start < end` after truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeRange {
    start: OffsetDateTime,
    end: OffsetDateTime,
}

impl TimeRange {
    /// Creates a new interval.
    ///
    /// Sub-second components are dropped from both endpoints before the
    /// ordering check, so `10:00:00.2` to `10:00:00.7` is empty.
    ///
    /// # Arguments
    ///
    /// * `start` - Inclusive start instant
    /// * `end` - Exclusive end instant
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidInterval` if `start >= end` once both
    /// are truncated to whole seconds.
    pub fn new(start: OffsetDateTime, end: OffsetDateTime) -> Result<Self, DomainError> {
        let start: OffsetDateTime = truncate_to_second(start);
        let end: OffsetDateTime = truncate_to_second(end);
        if start >= end {
            return Err(DomainError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// Rebuilds an interval from stored Unix timestamps (seconds, UTC).
    ///
    /// # Errors
    ///
    /// Returns an error if either timestamp is out of range or the
    /// interval is empty.
    pub fn from_unix_seconds(start: i64, end: i64) -> Result<Self, DomainError> {
        let start: OffsetDateTime = unix_to_datetime(start)?;
        let end: OffsetDateTime = unix_to_datetime(end)?;
        Self::new(start, end)
    }

    #[must_use]
    pub const fn start(&self) -> OffsetDateTime {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> OffsetDateTime {
        self.end
    }

    /// Start instant as Unix seconds.
    #[must_use]
    pub const fn start_unix(&self) -> i64 {
        self.start.unix_timestamp()
    }

    /// End instant as Unix seconds.
    #[must_use]
    pub const fn end_unix(&self) -> i64 {
        self.end.unix_timestamp()
    }

    /// Returns whether two half-open intervals intersect.
    ///
    /// `[s1, e1)` and `[s2, e2)` overlap iff `s1 < e2 && s2 < e1`, so
    /// intervals that only touch at an endpoint do not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Checks that the interval does not start strictly before `now`.
    ///
    /// A start in the same second as `now` is accepted.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::PastDateRejected` if `start < now`.
    pub fn ensure_not_past(&self, now: OffsetDateTime) -> Result<(), DomainError> {
        if self.start < truncate_to_second(now) {
            return Err(DomainError::PastDateRejected {
                start: self.start,
                now,
            });
        }
        Ok(())
    }
}

fn truncate_to_second(at: OffsetDateTime) -> OffsetDateTime {
    at - Duration::nanoseconds(i64::from(at.nanosecond()))
}

fn unix_to_datetime(seconds: i64) -> Result<OffsetDateTime, DomainError> {
    OffsetDateTime::from_unix_timestamp(seconds)
        .map_err(|_| DomainError::TimestampOutOfRange(seconds))
}
