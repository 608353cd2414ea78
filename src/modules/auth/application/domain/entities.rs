use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<UserId> for Uuid {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub location: String,
    pub description: String,
    pub verified: bool,
    pub verification_method: String,
    /// User who verified this user's identity.
    pub verification_partner: Option<UserId>,
    pub verification_code: Option<Uuid>,
    /// Profile image owned by the content domain.
    pub icon_id: Option<Uuid>,
    pub email: String,
    pub is_confirmed: bool,
    pub is_private: bool,
    pub is_high_risk: bool,
    pub is_active: bool,
    pub is_admin: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub creation_date: DateTime<Utc>,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.username)
    }
}

/// Content-domain entities a user can be linked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssociationKind {
    Resource,
    SocialLink,
    Task,
    Topic,
}

impl AssociationKind {
    pub const ALL: [AssociationKind; 4] = [
        AssociationKind::Resource,
        AssociationKind::SocialLink,
        AssociationKind::Task,
        AssociationKind::Topic,
    ];
}

impl fmt::Display for AssociationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssociationKind::Resource => write!(f, "resource"),
            AssociationKind::SocialLink => write!(f, "social_link"),
            AssociationKind::Task => write!(f, "task"),
            AssociationKind::Topic => write!(f, "topic"),
        }
    }
}
