use serde::{Deserialize, Serialize};

/// Identifier of the user that owns a record.
/// Used to isolate catalog data between users.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Authenticated caller resolved from an API key.
///
/// Superusers may read and modify any record; everyone else is restricted
/// to records they own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub user_id: UserId,
    pub is_superuser: bool,
}

impl Caller {
    pub fn user(user_id: impl Into<UserId>) -> Self {
        Self {
            user_id: user_id.into(),
            is_superuser: false,
        }
    }

    pub fn superuser(user_id: impl Into<UserId>) -> Self {
        Self {
            user_id: user_id.into(),
            is_superuser: true,
        }
    }

    /// Whether this caller may act on a record owned by `owner_id`.
    pub fn can_access(&self, owner_id: &UserId) -> bool {
        self.is_superuser || &self.user_id == owner_id
    }
}
