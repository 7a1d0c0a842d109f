// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Duration;

use super::{NOW, world};
use crate::{PersistenceError, format_timestamp};

#[test]
fn test_session_lifecycle() {
    let mut w = world();
    let expires: String = format_timestamp(NOW + Duration::days(30)).unwrap();

    let session_id: i64 = w
        .persistence
        .create_session("session_abc", w.clerk_id, &expires)
        .unwrap();

    let session = w
        .persistence
        .get_session_by_token("session_abc")
        .unwrap()
        .unwrap();
    assert_eq!(session.session_id, session_id);
    assert_eq!(session.user_id, w.clerk_id);
    assert_eq!(session.expires_at, expires);

    w.persistence.update_session_activity(session_id).unwrap();
    w.persistence.delete_session("session_abc").unwrap();

    assert!(
        w.persistence
            .get_session_by_token("session_abc")
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_duplicate_token_rejected() {
    let mut w = world();
    let expires: String = format_timestamp(NOW).unwrap();
    w.persistence
        .create_session("session_dup", w.clerk_id, &expires)
        .unwrap();

    assert!(matches!(
        w.persistence
            .create_session("session_dup", w.admin_id, &expires),
        Err(PersistenceError::UniqueViolation(_))
    ));
}

#[test]
fn test_delete_expired_sessions() {
    let mut w = world();
    let past: String = format_timestamp(NOW - Duration::hours(1)).unwrap();
    let future: String = format_timestamp(NOW + Duration::hours(1)).unwrap();
    w.persistence
        .create_session("session_old", w.clerk_id, &past)
        .unwrap();
    w.persistence
        .create_session("session_new", w.clerk_id, &future)
        .unwrap();

    let removed: usize = w
        .persistence
        .delete_expired_sessions(&format_timestamp(NOW).unwrap())
        .unwrap();

    assert_eq!(removed, 1);
    assert!(w.persistence.get_session_by_token("session_old").unwrap().is_none());
    assert!(w.persistence.get_session_by_token("session_new").unwrap().is_some());
}

#[test]
fn test_delete_sessions_for_user() {
    let mut w = world();
    let expires: String = format_timestamp(NOW).unwrap();
    w.persistence
        .create_session("session_a", w.clerk_id, &expires)
        .unwrap();
    w.persistence
        .create_session("session_b", w.clerk_id, &expires)
        .unwrap();
    w.persistence
        .create_session("session_c", w.admin_id, &expires)
        .unwrap();

    assert_eq!(w.persistence.delete_sessions_for_user(w.clerk_id).unwrap(), 2);
    assert!(w.persistence.get_session_by_token("session_c").unwrap().is_some());
}
