//! User domain entity.
//!
//! Looked up by the authentication layer; credential verification and
//! authorization happen upstream.

use serde::{Deserialize, Serialize};

/// User domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}
