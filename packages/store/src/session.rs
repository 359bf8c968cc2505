//! Persisted session storage.
//!
//! A [`SessionStore`] is a thin string key/value surface shaped like the
//! browser's localStorage: the wasm implementation ([`crate::LocalStore`])
//! wraps it directly, the native one ([`crate::MemoryStore`]) backs tests.
//! [`load_session`] / [`save_session`] / [`clear_session`] layer the typed
//! [`Session`] on top using the same two keys the portals have always used.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::Session;

pub(crate) const TOKEN_KEY: &str = "token";
pub(crate) const USER_KEY: &str = "user";

/// String key/value storage with localStorage semantics.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    /// Wipes the whole storage area, not just the session keys.
    fn clear(&self);
}

/// Read the persisted session, if any.
///
/// Returns `None` when the token is absent or the stored user fails to parse;
/// a malformed user entry is logged and treated as not authenticated.
pub fn load_session<R, S>(store: &S) -> Option<Session<R>>
where
    R: DeserializeOwned,
    S: SessionStore,
{
    let token = store.get(TOKEN_KEY)?;
    let raw = store.get(USER_KEY)?;
    match serde_json::from_str(&raw) {
        Ok(user) => Some(Session { token, user }),
        Err(err) => {
            tracing::error!("discarding unparseable stored session: {err}");
            None
        }
    }
}

/// Persist a session created from a login response.
pub fn save_session<R, S>(store: &S, session: &Session<R>)
where
    R: Serialize,
    S: SessionStore,
{
    store.set(TOKEN_KEY, &session.token);
    match serde_json::to_string(&session.user) {
        Ok(raw) => store.set(USER_KEY, &raw),
        Err(err) => tracing::error!("failed to serialize session user: {err}"),
    }
}

/// Destroy all persisted client-side state. Logout clears unconditionally.
pub fn clear_session<S: SessionStore>(store: &S) {
    store.clear();
}
