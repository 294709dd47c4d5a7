use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One collaborative editing space, addressed by id in the space route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollabSpace {
    pub id: Uuid,
    pub name: String,
    /// Editor language id for the space's buffer.
    pub language: String,
    pub created_at: DateTime<Utc>,
}

impl CollabSpace {
    pub fn new(name: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            language: collabspace_core::language::normalize(&language.into()),
            created_at: Utc::now(),
        }
    }
}
