// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization types and services.

use roombook::Requester;
use roombook_domain::{Pin, Role};
use roombook_persistence::{Persistence, PersistenceError, SessionData, UserData, format_timestamp};
use time::format_description::well_known::Rfc3339;
use time::{Duration, OffsetDateTime};
use tracing::{debug, info, warn};

use crate::error::AuthError;

/// Message returned for every failed PIN login.
const INVALID_PIN: &str = "Invalid PIN";

/// Message returned for every rejected session token.
const INVALID_SESSION: &str = "Invalid or expired session";

/// An authenticated user with an associated role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The user behind the session.
    pub user_id: i64,
    /// The user's role at the time the session was validated.
    pub role: Role,
}

impl AuthenticatedActor {
    #[must_use]
    pub const fn new(user_id: i64, role: Role) -> Self {
        Self { user_id, role }
    }

    /// Returns whether this actor carries the administrative override.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// The identity passed into booking engine operations.
    #[must_use]
    pub const fn to_requester(&self) -> Requester {
        Requester::new(self.user_id, self.role)
    }
}

/// Role gate for administrative operations.
///
/// Building scope is checked separately; this only looks at the role.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks that an actor is an administrator.
    ///
    /// # Arguments
    ///
    /// * `actor` - The authenticated actor
    /// * `action` - The attempted action, for the error message
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the ADMIN role.
    pub fn authorize_admin(actor: &AuthenticatedActor, action: &str) -> Result<(), AuthError> {
        match actor.role {
            Role::Admin => Ok(()),
            Role::User => Err(AuthError::Unauthorized {
                action: action.to_string(),
                required_role: String::from("ADMIN"),
            }),
        }
    }
}

/// PIN login and session management.
pub struct AuthenticationService;

impl AuthenticationService {
    /// How long a session stays valid after login.
    pub const SESSION_LIFETIME: Duration = Duration::days(30);

    /// Authenticates a PIN and creates a session.
    ///
    /// Every failure, whether a malformed PIN or one nobody holds, produces
    /// the same message.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `pin` - The submitted PIN
    /// * `now` - The login instant
    ///
    /// # Returns
    ///
    /// A tuple of (`session_token`, `authenticated_actor`, `user_data`, `expires_at`)
    ///
    /// # Errors
    ///
    /// Returns an error if authentication fails or the session cannot be stored.
    pub fn login(
        persistence: &mut Persistence,
        pin: &str,
        now: OffsetDateTime,
    ) -> Result<(String, AuthenticatedActor, UserData, OffsetDateTime), AuthError> {
        let Ok(pin) = Pin::new(pin.trim()) else {
            debug!("Rejected malformed PIN");
            return Err(AuthError::AuthenticationFailed {
                reason: String::from(INVALID_PIN),
            });
        };

        let user: UserData = persistence
            .get_user_by_pin(pin.value())
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| {
                warn!("Login attempt with unknown PIN");
                AuthError::AuthenticationFailed {
                    reason: String::from(INVALID_PIN),
                }
            })?;

        let removed: usize = persistence
            .delete_expired_sessions(&Self::format(now)?)
            .map_err(Self::map_persistence_error)?;
        if removed > 0 {
            debug!(removed, "Pruned expired sessions");
        }

        let session_token: String = Self::generate_session_token(now);
        let expires_at: OffsetDateTime = now + Self::SESSION_LIFETIME;
        persistence
            .create_session(&session_token, user.user_id, &Self::format(expires_at)?)
            .map_err(Self::map_persistence_error)?;

        info!(user_id = user.user_id, "User logged in");

        let actor: AuthenticatedActor = AuthenticatedActor::new(user.user_id, user.role);
        Ok((session_token, actor, user, expires_at))
    }

    /// Validates a session token and returns the authenticated actor.
    ///
    /// An expired session is deleted as it is rejected. The actor's role is
    /// read from the user row, so a role change applies on the next request.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is unknown, expired, or its user is gone.
    pub fn validate_session(
        persistence: &mut Persistence,
        session_token: &str,
        now: OffsetDateTime,
    ) -> Result<(AuthenticatedActor, UserData), AuthError> {
        let session: SessionData = persistence
            .get_session_by_token(session_token)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| {
                debug!("Unknown session token");
                AuthError::AuthenticationFailed {
                    reason: String::from(INVALID_SESSION),
                }
            })?;

        let expires_at: OffsetDateTime = OffsetDateTime::parse(&session.expires_at, &Rfc3339)
            .map_err(|e| {
                warn!(session_id = session.session_id, error = %e, "Unparseable session expiry");
                AuthError::AuthenticationFailed {
                    reason: String::from(INVALID_SESSION),
                }
            })?;

        if now >= expires_at {
            warn!(session_id = session.session_id, "Rejected expired session");
            persistence
                .delete_session(session_token)
                .map_err(Self::map_persistence_error)?;
            return Err(AuthError::AuthenticationFailed {
                reason: String::from(INVALID_SESSION),
            });
        }

        let user: UserData = persistence
            .get_user_by_id(session.user_id)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from(INVALID_SESSION),
            })?;

        persistence
            .update_session_activity(session.session_id)
            .map_err(Self::map_persistence_error)?;

        Ok((AuthenticatedActor::new(user.user_id, user.role), user))
    }

    /// Logs out by deleting the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails.
    pub fn logout(persistence: &mut Persistence, session_token: &str) -> Result<(), AuthError> {
        persistence
            .delete_session(session_token)
            .map_err(Self::map_persistence_error)?;
        info!("Session closed");
        Ok(())
    }

    /// Generates an opaque session token.
    fn generate_session_token(now: OffsetDateTime) -> String {
        format!(
            "session_{}_{}",
            now.unix_timestamp_nanos(),
            rand::random::<u64>()
        )
    }

    fn format(at: OffsetDateTime) -> Result<String, AuthError> {
        format_timestamp(at).map_err(Self::map_persistence_error)
    }

    /// Maps persistence errors to authentication errors.
    fn map_persistence_error(err: PersistenceError) -> AuthError {
        match err {
            PersistenceError::SessionNotFound(_) | PersistenceError::NotFound(_) => {
                AuthError::AuthenticationFailed {
                    reason: String::from(INVALID_SESSION),
                }
            }
            other => {
                tracing::error!(error = %other, "Session store failure");
                AuthError::AuthenticationFailed {
                    reason: String::from("Session store unavailable"),
                }
            }
        }
    }
}
