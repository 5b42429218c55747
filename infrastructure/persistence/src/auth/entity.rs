use sqlx::FromRow;
use uuid::Uuid;

use business::domain::shared::value_objects::{Caller, UserId};

/// Row produced by joining a valid api_keys entry with its user.
#[derive(Debug, FromRow)]
pub struct ApiKeyOwnerEntity {
    pub user_id: Uuid,
    pub is_superuser: bool,
}

impl ApiKeyOwnerEntity {
    pub fn into_domain(self) -> Caller {
        Caller {
            user_id: UserId::new(self.user_id.to_string()),
            is_superuser: self.is_superuser,
        }
    }
}
