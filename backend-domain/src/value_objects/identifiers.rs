// Identifier value objects

use serde::{Deserialize, Serialize};

/// Opaque per-user identifier scoping the saved-events subcollection.
/// Anonymous identities are minted by the identity provider when no
/// persisted session exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
