//! # Session models
//!
//! The persisted client-side session for both portals. A [`Session`] is created
//! from a login response, written to the platform [`crate::SessionStore`], and
//! destroyed wholesale on logout. The role type `R` is each app's closed role
//! enumeration; everything here stays generic over it.
//!
//! The server owns the account data. The client never edits a session in
//! place: it is replaced on login and cleared on logout, nothing else.

use serde::{Deserialize, Serialize};

/// The signed-in user as returned by `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Account<R> {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: R,
}

/// A persisted session: bearer token plus the account it belongs to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session<R> {
    pub token: String,
    pub user: Account<R>,
}

impl<R: Copy> Session<R> {
    pub fn role(&self) -> R {
        self.user.role
    }
}
