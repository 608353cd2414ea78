use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Organization row owned by the communities domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrganizationId(Uuid);

impl OrganizationId {
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for OrganizationId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<OrganizationId> for Uuid {
    fn from(id: OrganizationId) -> Self {
        id.0
    }
}

impl fmt::Display for OrganizationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

pub const SUPPORT_ENTITY_TYPE_NAME_MAX_LEN: usize = 255;

/// Category tag for either side of a support link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportEntityType {
    pub id: Uuid,
    pub name: String,
}

impl fmt::Display for SupportEntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Directed link: `supporter_entity` supports `supported_entity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Support {
    pub id: Uuid,
    pub supporter_type: Uuid,
    pub supporter_entity: OrganizationId,
    pub supported_type: Uuid,
    pub supported_entity: OrganizationId,
    pub creation_date: DateTime<Utc>,
}

impl fmt::Display for Support {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.id.fmt(f)
    }
}
