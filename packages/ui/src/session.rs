//! Session context and hooks.
//!
//! The session is not ambient global state: each app installs it once with
//! [`use_session_provider`] and every consumer reaches it through context.
//! Restoring from storage is synchronous (localStorage), so there is no
//! loading phase; the state is final from the first render.

use api::Api;
use dioxus::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use store::{Account, Session, SessionStore};

/// Current authentication state for the app. `R` is the portal's role enum.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState<R: 'static> {
    pub session: Option<Session<R>>,
}

impl<R: Copy> SessionState<R> {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn role(&self) -> Option<R> {
        self.session.as_ref().map(|s| s.user.role)
    }
}

impl<R: Clone> SessionState<R> {
    pub fn account(&self) -> Option<Account<R>> {
        self.session.as_ref().map(|s| s.user.clone())
    }

    pub fn display_name(&self) -> String {
        self.session
            .as_ref()
            .map(|s| s.user.name.clone())
            .unwrap_or_default()
    }
}

/// Get the session state. Updates when the user signs in or out.
pub fn use_session<R: 'static>() -> Signal<SessionState<R>> {
    use_context()
}

/// Get the app's API handle.
pub fn use_api() -> Api {
    use_context()
}

/// Install the API handle and session state into context. Call once at the
/// top of the app. Restores a persisted session and installs its bearer token.
pub fn use_session_provider<R>(base_url: &str) -> Signal<SessionState<R>>
where
    R: Clone + PartialEq + Serialize + DeserializeOwned + 'static,
{
    let base = base_url.to_string();
    let api: Api = use_context_provider(move || Api::new(base));
    use_context_provider(move || {
        let session = store::load_session::<R, _>(&platform_store());
        if let Some(s) = &session {
            api.set_token(Some(s.token.clone()));
        }
        Signal::new(SessionState { session })
    })
}

/// Persist a freshly logged-in session and make it current.
pub fn sign_in<R>(api: &Api, mut state: Signal<SessionState<R>>, session: Session<R>)
where
    R: Clone + PartialEq + Serialize + 'static,
{
    api.set_token(Some(session.token.clone()));
    store::save_session(&platform_store(), &session);
    state.set(SessionState {
        session: Some(session),
    });
}

/// Log out: tell the server, then clear everything locally either way and
/// return to the login page.
pub async fn sign_out<R>(api: &Api, state: Signal<SessionState<R>>)
where
    R: Clone + PartialEq + 'static,
{
    if let Err(err) = api::auth::logout(api).await {
        tracing::error!("logout request failed: {err}");
    }
    expire(api, state);
}

/// Drop the session without a logout call. Used when a request comes back 401:
/// the server already considers the session dead.
pub fn expire<R>(api: &Api, mut state: Signal<SessionState<R>>)
where
    R: Clone + PartialEq + 'static,
{
    api.set_token(None);
    store::clear_session(&platform_store());
    state.set(SessionState { session: None });
    redirect("/login");
}

/// Hard navigation, resetting all view state.
pub fn redirect(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = path;
    }
}

fn platform_store() -> impl SessionStore {
    #[cfg(target_arch = "wasm32")]
    {
        store::LocalStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        store::MemoryStore::new()
    }
}
