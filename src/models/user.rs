use serde::{Deserialize, Serialize};

/// The signed-in caller, passed explicitly into every operation that needs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
}

impl UserInfo {
    pub fn user(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
