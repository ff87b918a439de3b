//! Authenticated-user session data model.
//!
//! Type-safe wrapper for storing the logged-in principal in the session.
//! The login controller inserts it after a successful login and saves the
//! session before responding, so the cookie is valid on the next request.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::{error::Error, model::auth::Role, service::auth::login::AuthenticatedUser};

/// Session key for the logged-in user record.
///
/// Namespaced under "registrar:auth:" to avoid collisions with other session
/// data.
pub const SESSION_USER_KEY: &str = "registrar:auth:user";

/// The principal stored in the session after a successful login.
#[derive(Clone, Deserialize, Serialize, Debug)]
pub struct SessionUser {
    pub user_id: i32,
    pub role: Role,
    /// Admin name, or the student's roll number.
    pub username: String,
    pub name: String,
    /// `admin` or `super_admin`; only present for admin sessions.
    pub admin_role: Option<String>,
}

impl SessionUser {
    /// Insert the authenticated user into the session.
    pub async fn insert(session: &Session, user: &AuthenticatedUser) -> Result<(), Error> {
        session
            .insert(
                SESSION_USER_KEY,
                SessionUser {
                    user_id: user.user_id,
                    role: user.role,
                    username: user.username.clone(),
                    name: user.name.clone(),
                    admin_role: user.admin_role.clone(),
                },
            )
            .await?;

        Ok(())
    }

    /// Get the logged-in user from the session, if any.
    pub async fn get(session: &Session) -> Result<Option<SessionUser>, Error> {
        Ok(session.get::<SessionUser>(SESSION_USER_KEY).await?)
    }
}
