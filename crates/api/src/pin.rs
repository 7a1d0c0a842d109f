// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! PIN generation.

use roombook_domain::Pin;
use roombook_persistence::Persistence;
use tracing::{debug, error};

use crate::error::{ApiError, translate_domain_error, translate_persistence_error};

/// Upper bound on random draws before giving up.
///
/// With 9000 possible PINs this only trips when the space is nearly full.
pub const MAX_PIN_ATTEMPTS: usize = 100;

/// Draws a random PIN in `1000..=9999`.
#[must_use]
fn random_pin_number() -> u16 {
    let span: u16 = Pin::MAX_GENERATED - Pin::MIN_GENERATED + 1;
    Pin::MIN_GENERATED + rand::random::<u16>() % span
}

/// Generates a PIN no existing user holds.
///
/// The unique index on `users.pin` still guards the insert; a PIN taken
/// between this check and the insert surfaces as a conflict.
///
/// # Errors
///
/// Returns an error if the store fails or no free PIN is found within
/// [`MAX_PIN_ATTEMPTS`] draws.
pub fn generate_unique_pin(persistence: &mut Persistence) -> Result<Pin, ApiError> {
    for attempt in 1..=MAX_PIN_ATTEMPTS {
        let pin: Pin = Pin::from_number(random_pin_number()).map_err(translate_domain_error)?;
        if !persistence
            .pin_exists(pin.value())
            .map_err(translate_persistence_error)?
        {
            debug!(attempt, "Generated unique PIN");
            return Ok(pin);
        }
    }

    error!(attempts = MAX_PIN_ATTEMPTS, "PIN space exhausted");
    Err(ApiError::Internal {
        message: String::from("Could not generate a unique PIN"),
    })
}
