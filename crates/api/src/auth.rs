// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization types and services.

use campus_events_domain::Role;
use campus_events_persistence::{Repository, TokenData, UserData};
use tracing::{debug, info, warn};

use crate::error::AuthError;

/// An authenticated user, resolved from a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The user's ID.
    pub user_id: i64,
    /// The user's display name.
    pub name: String,
    /// The user's login email.
    pub email: String,
    /// The user's role.
    pub role: Role,
}

impl From<UserData> for AuthenticatedUser {
    fn from(user: UserData) -> Self {
        Self {
            user_id: user.user_id,
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

/// Authorization service for enforcing role-based access control.
///
/// Roles are disjoint: an admin may not perform student actions and a
/// student may not perform admin actions.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks that the user holds the admin role.
    ///
    /// # Arguments
    ///
    /// * `user` - The authenticated user
    /// * `action` - The name of the attempted action, for error reporting
    ///
    /// # Errors
    ///
    /// Returns an error if the user is not an admin.
    pub fn require_admin(user: &AuthenticatedUser, action: &str) -> Result<(), AuthError> {
        Self::require_role(user, Role::Admin, action)
    }

    /// Checks that the user holds the student role.
    ///
    /// # Errors
    ///
    /// Returns an error if the user is not a student.
    pub fn require_student(user: &AuthenticatedUser, action: &str) -> Result<(), AuthError> {
        Self::require_role(user, Role::Student, action)
    }

    fn require_role(user: &AuthenticatedUser, role: Role, action: &str) -> Result<(), AuthError> {
        if user.role == role {
            return Ok(());
        }

        warn!(
            user_id = user.user_id,
            action,
            role = %user.role,
            "Rejected action for wrong role"
        );

        Err(AuthError::Unauthorized {
            action: action.to_string(),
            required_role: role.to_string(),
        })
    }
}

/// Authentication service for token-based authentication.
///
/// Each user holds at most one token. Tokens do not expire; they live until
/// the next login or an explicit logout.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Resolves a token to its user.
    ///
    /// Returns `Ok(None)` for an unknown token.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup fails.
    pub fn resolve<R: Repository>(
        repository: &mut R,
        token: &str,
    ) -> Result<Option<AuthenticatedUser>, AuthError> {
        let user: Option<UserData> =
            repository
                .get_user_by_token(token)
                .map_err(|e| AuthError::AuthenticationFailed {
                    reason: format!("Database error: {e}"),
                })?;

        if user.is_none() {
            debug!("Token did not resolve to a user");
        }

        Ok(user.map(AuthenticatedUser::from))
    }

    /// Resolves a token that must be present and valid.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is missing, unknown, or the lookup fails.
    pub fn authenticate<R: Repository>(
        repository: &mut R,
        token: Option<&str>,
    ) -> Result<AuthenticatedUser, AuthError> {
        let token: &str = token.ok_or_else(|| AuthError::AuthenticationFailed {
            reason: String::from("Missing token"),
        })?;

        Self::resolve(repository, token)?.ok_or_else(|| {
            warn!("Rejected request with invalid token");
            AuthError::AuthenticationFailed {
                reason: String::from("Invalid token"),
            }
        })
    }

    /// Verifies credentials and issues a fresh token.
    ///
    /// Any token the user already held stops resolving.
    ///
    /// # Returns
    ///
    /// A tuple of (`token_data`, `authenticated_user`)
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials do not match a user or the token
    /// cannot be stored.
    pub fn issue_or_rotate<R: Repository>(
        repository: &mut R,
        email: &str,
        password: &str,
    ) -> Result<(TokenData, AuthenticatedUser), AuthError> {
        let user: UserData = repository
            .verify_credentials(email, password)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Database error: {e}"),
            })?
            .ok_or_else(|| {
                warn!("Login rejected for {}", email);
                AuthError::AuthenticationFailed {
                    reason: String::from("Invalid credentials"),
                }
            })?;

        let token: String = Self::generate_token();
        let token_data: TokenData = repository
            .issue_or_rotate_token(user.user_id, &token)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to store token: {e}"),
            })?;

        info!(user_id = user.user_id, "User logged in");

        Ok((token_data, AuthenticatedUser::from(user)))
    }

    /// Deletes a token.
    ///
    /// Returns `false` if the token did not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn revoke<R: Repository>(repository: &mut R, token: &str) -> Result<bool, AuthError> {
        repository
            .delete_token(token)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to delete token: {e}"),
            })
    }

    /// Generates a 256-bit random token rendered as lowercase hex.
    fn generate_token() -> String {
        (0..4)
            .map(|_| format!("{:016x}", rand::random::<u64>()))
            .collect()
    }
}
