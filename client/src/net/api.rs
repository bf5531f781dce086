//! REST API helpers for communicating with the admin backend.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<T, FetchError>` instead of panics. A missing token
//! short-circuits before the transport is touched; a failed response takes
//! its message from the `{ "message": ... }` body, else the call site's
//! fallback; a 2xx body that does not parse is `Malformed`, never success.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::error::FetchError;
use super::request::{AuthScheme, ResourceRequest};
use super::transport::{HttpResponse, HttpTransport};
use super::types::{ErrorBody, LoginRequest, LoginResponse, Notification};
use crate::config::ApiConfig;
use crate::state::session::Session;

pub const USER_STATS_FAILED: &str = "Failed to fetch user stats";
pub const NOTIFICATION_FAILED: &str = "Failed to fetch notification details";
pub const NOTIFICATIONS_FAILED: &str = "Failed to fetch notifications";
pub const NOTIFICATION_SAVE_FAILED: &str = "Failed to update notification";
pub const USERS_FAILED: &str = "Failed to fetch users";
pub const NEWS_FAILED: &str = "Failed to fetch news";
pub const LOGIN_FAILED: &str = "Login failed";

// =============================================================================
// CALL SITES
// =============================================================================

/// `GET /user-stats` for the dashboard.
pub fn user_stats_request(config: &ApiConfig) -> ResourceRequest {
    ResourceRequest::get(config.endpoint("user-stats"))
        .scheme(AuthScheme::Bearer)
        .fallback(USER_STATS_FAILED)
}

/// `GET /notification` for the notifications table.
pub fn notifications_request(config: &ApiConfig) -> ResourceRequest {
    ResourceRequest::get(config.endpoint("notification"))
        .scheme(AuthScheme::Raw)
        .fallback(NOTIFICATIONS_FAILED)
}

/// `GET /notification/{id}` for the edit modal.
pub fn notification_request(config: &ApiConfig, id: &str) -> ResourceRequest {
    ResourceRequest::get(config.endpoint(&format!("notification/{id}")))
        .scheme(AuthScheme::Raw)
        .fallback(NOTIFICATION_FAILED)
}

/// `PUT /notification/{id}` with the full edited record.
///
/// # Errors
///
/// [`FetchError::Malformed`] if the record cannot be encoded as JSON.
pub fn notification_update_request(
    config: &ApiConfig,
    notification: &Notification,
) -> Result<ResourceRequest, FetchError> {
    let body = serde_json::to_value(notification).map_err(|e| FetchError::Malformed(e.to_string()))?;
    Ok(ResourceRequest::put(config.endpoint(&format!("notification/{}", notification.id)), body)
        .scheme(AuthScheme::Raw)
        .fallback(NOTIFICATION_SAVE_FAILED))
}

/// `GET /users` for the users table.
pub fn users_request(config: &ApiConfig) -> ResourceRequest {
    ResourceRequest::get(config.endpoint("users"))
        .scheme(AuthScheme::Bearer)
        .fallback(USERS_FAILED)
}

/// `GET /news` for the news table.
pub fn news_request(config: &ApiConfig) -> ResourceRequest {
    ResourceRequest::get(config.endpoint("news"))
        .scheme(AuthScheme::Raw)
        .fallback(NEWS_FAILED)
}

// =============================================================================
// DISPATCH
// =============================================================================

/// Send an authenticated request and decode a JSON payload.
///
/// # Errors
///
/// [`FetchError::Unauthenticated`] without sending anything when the session
/// has no token; otherwise whatever [`interpret_response`] or the transport
/// reports.
pub async fn fetch_resource<T, X>(transport: &X, session: &Session, request: &ResourceRequest) -> Result<T, FetchError>
where
    T: DeserializeOwned,
    X: HttpTransport + ?Sized,
{
    let Some(token) = session.token() else {
        return Err(FetchError::Unauthenticated);
    };
    let response = transport.send(request.authorize(Some(token))).await?;
    interpret_response(&response, &request.fallback_message)
}

/// Persist an edited notification. The response body is not inspected on success.
///
/// # Errors
///
/// Same classes as [`fetch_resource`], except a 2xx body is never `Malformed`.
pub async fn save_notification<X>(
    transport: &X,
    session: &Session,
    config: &ApiConfig,
    notification: &Notification,
) -> Result<(), FetchError>
where
    X: HttpTransport + ?Sized,
{
    let Some(token) = session.token() else {
        return Err(FetchError::Unauthenticated);
    };
    let request = notification_update_request(config, notification)?;
    let response = transport.send(request.authorize(Some(token))).await?;
    if response.is_success() {
        Ok(())
    } else {
        Err(server_error(&response, &request.fallback_message))
    }
}

/// Exchange credentials for a session via `POST /auth/login`.
///
/// # Errors
///
/// Returns a [`FetchError`] if the request fails or the response lacks a token.
pub async fn login<X>(transport: &X, config: &ApiConfig, credentials: &LoginRequest) -> Result<Session, FetchError>
where
    X: HttpTransport + ?Sized,
{
    let body = serde_json::to_value(credentials).map_err(|e| FetchError::Malformed(e.to_string()))?;
    let request = ResourceRequest::post(config.endpoint("auth/login"), body).fallback(LOGIN_FAILED);
    let response = transport.send(request.authorize(None)).await?;
    let login: LoginResponse = interpret_response(&response, &request.fallback_message)?;
    if login.token.is_empty() {
        return Err(FetchError::Malformed("login response carried an empty token".to_owned()));
    }
    Ok(Session::new(login.token, login.role))
}

/// Classify a settled response.
///
/// # Errors
///
/// [`FetchError::Server`] for non-2xx statuses, [`FetchError::Malformed`] for a
/// 2xx body that does not decode as `T`.
pub fn interpret_response<T: DeserializeOwned>(response: &HttpResponse, fallback: &str) -> Result<T, FetchError> {
    if !response.is_success() {
        return Err(server_error(response, fallback));
    }
    serde_json::from_str(&response.body).map_err(|e| FetchError::Malformed(e.to_string()))
}

fn server_error(response: &HttpResponse, fallback: &str) -> FetchError {
    let message = serde_json::from_str::<ErrorBody>(&response.body)
        .ok()
        .and_then(|body| body.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_owned());
    FetchError::Server { status: response.status, message }
}
