use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::auth::repository::AuthRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::Caller;

use super::entity::ApiKeyOwnerEntity;

pub struct AuthRepositoryPostgres {
    pool: PgPool,
}

impl AuthRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthRepository for AuthRepositoryPostgres {
    async fn find_caller_by_api_key(&self, key: &str) -> Result<Caller, RepositoryError> {
        let entity = sqlx::query_as::<_, ApiKeyOwnerEntity>(
            r#"SELECT u.id AS user_id, u.is_superuser
            FROM api_keys k
            JOIN users u ON u.id = k.user_id
            WHERE k.key = $1 AND k.expiration_date > NOW()"#,
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }
}
