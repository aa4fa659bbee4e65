// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Token extraction and authentication extractors for the server.
//!
//! The token travels in the `token` query parameter. An
//! `Authorization: Bearer <token>` header is accepted when the query
//! parameter is absent.

use axum::{
    Json,
    extract::{FromRequestParts, Query},
    http::{StatusCode, header::AUTHORIZATION, request::Parts},
    response::{IntoResponse, Response},
};
use campus_events_api::{AuthenticatedUser, AuthenticationService};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{AppState, ErrorResponse};

#[derive(Debug, Deserialize)]
struct TokenQuery {
    token: Option<String>,
}

/// Pulls the raw token out of the request, if any.
fn extract_token(parts: &Parts) -> Result<Option<String>, SessionError> {
    let query: Query<TokenQuery> = Query::try_from_uri(&parts.uri).map_err(|e| {
        warn!(error = %e, "Malformed query string");
        SessionError::MalformedQuery(e.body_text())
    })?;
    if let Some(token) = query.0.token {
        return Ok(Some(token));
    }

    let Some(header) = parts.headers.get(AUTHORIZATION) else {
        return Ok(None);
    };
    let header: &str = header.to_str().map_err(|_| {
        warn!("Invalid Authorization header encoding");
        SessionError::InvalidAuthorizationHeader
    })?;
    let token: &str = header.strip_prefix("Bearer ").ok_or_else(|| {
        warn!("Authorization header does not start with 'Bearer '");
        SessionError::InvalidAuthorizationHeader
    })?;

    Ok(Some(token.to_string()))
}

/// Extractor for the raw token of a request.
///
/// Rejects requests that carry no token. The token is not resolved.
pub struct SessionToken(pub String);

impl FromRequestParts<AppState> for SessionToken {
    type Rejection = SessionError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        extract_token(parts)?.map(Self).ok_or_else(|| {
            debug!("Missing token");
            SessionError::MissingToken
        })
    }
}

/// Extractor for authenticated users.
///
/// # Usage
///
/// ```ignore
/// async fn my_handler(
///     SessionUser(user): SessionUser,
/// ) -> Result<Json<Response>, HttpError> {
///     // user: AuthenticatedUser
///     Ok(Json(Response { ... }))
/// }
/// ```
///
/// # Errors
///
/// Returns HTTP 401 Unauthorized if the token is missing, malformed or
/// does not resolve to a user.
pub struct SessionUser(pub AuthenticatedUser);

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = SessionError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token: Option<String> = extract_token(parts)?;

        let mut persistence = state.persistence.lock().await;
        let user: AuthenticatedUser =
            AuthenticationService::authenticate(&mut *persistence, token.as_deref()).map_err(
                |e| {
                    warn!(error = %e, "Token validation failed");
                    SessionError::InvalidToken(e.to_string())
                },
            )?;

        debug!(
            user_id = user.user_id,
            role = %user.role,
            "Token validated successfully"
        );

        Ok(Self(user))
    }
}

/// Token extraction errors.
///
/// These errors are returned when token validation fails and are
/// automatically converted to HTTP responses.
#[derive(Debug)]
pub enum SessionError {
    /// No token in the query string or headers.
    MissingToken,
    /// The query string could not be decoded (for example a repeated
    /// `token` key).
    MalformedQuery(String),
    /// Authorization header format is invalid.
    InvalidAuthorizationHeader,
    /// Token validation failed.
    InvalidToken(String),
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let message: String = match self {
            Self::MissingToken => String::from("Missing token"),
            Self::MalformedQuery(reason) => format!("Malformed query string: {reason}"),
            Self::InvalidAuthorizationHeader => String::from(
                "Invalid Authorization header format. Expected: 'Bearer <token>'",
            ),
            Self::InvalidToken(reason) => reason,
        };

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse { error: message }),
        )
            .into_response()
    }
}
