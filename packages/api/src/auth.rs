//! Login and logout. Both backends share the same auth shape:
//! `POST /auth/login -> {token, user}`, `POST /auth/logout`.

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use store::Session;

use crate::client::Api;
use crate::error::ApiError;

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Exchange credentials for a session. The role type is the calling portal's.
pub async fn login<R: DeserializeOwned>(
    api: &Api,
    email: &str,
    password: &str,
) -> Result<Session<R>, ApiError> {
    api.execute(
        api.request(Method::POST, "/auth/login")
            .json(&LoginRequest { email, password }),
    )
    .await
}

/// Tell the server the session is over. Failure is reported but the caller
/// clears local state regardless; the server token just expires on its own.
pub async fn logout(api: &Api) -> Result<(), ApiError> {
    api.execute_unit(api.request(Method::POST, "/auth/logout")).await
}

/// Register a new account on the tickets backend and sign in.
#[derive(Clone, Debug, Default, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub async fn register<R: DeserializeOwned>(
    api: &Api,
    request: &RegisterRequest,
) -> Result<Session<R>, ApiError> {
    api.execute(api.request(Method::POST, "/auth/register").json(request))
        .await
}

/// A fixed role-tagged demo account for the quick-login buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DemoAccount {
    pub label: &'static str,
    pub email: &'static str,
    pub password: &'static str,
}
