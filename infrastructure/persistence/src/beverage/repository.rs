use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::beverage::model::Beverage;
use business::domain::beverage::repository::BeverageRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::Caller;

use super::entity::BeverageEntity;

const COLUMNS: &str =
    "id, owner_id, title, description, category, tags, barcode, created_at, updated_at";

pub struct BeverageRepositoryPostgres {
    pool: PgPool,
}

impl BeverageRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BeverageRepository for BeverageRepositoryPostgres {
    async fn get_all(
        &self,
        caller: &Caller,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<Beverage>, i64), RepositoryError> {
        let (entities, count) = if caller.is_superuser {
            let entities = sqlx::query_as::<_, BeverageEntity>(&format!(
                "SELECT {COLUMNS} FROM beverages ORDER BY created_at DESC OFFSET $1 LIMIT $2",
            ))
            .bind(offset)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

            let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM beverages")
                .fetch_one(&self.pool)
                .await
                .map_err(|_| RepositoryError::DatabaseError)?;

            (entities, count)
        } else {
            let entities = sqlx::query_as::<_, BeverageEntity>(&format!(
                "SELECT {COLUMNS} FROM beverages WHERE owner_id = $1 ORDER BY created_at DESC OFFSET $2 LIMIT $3",
            ))
            .bind(caller.user_id.as_str())
            .bind(offset)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

            let count: i64 =
                sqlx::query_scalar("SELECT COUNT(*) FROM beverages WHERE owner_id = $1")
                    .bind(caller.user_id.as_str())
                    .fetch_one(&self.pool)
                    .await
                    .map_err(|_| RepositoryError::DatabaseError)?;

            (entities, count)
        };

        Ok((entities.into_iter().map(|e| e.into_domain()).collect(), count))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Beverage, RepositoryError> {
        let entity = sqlx::query_as::<_, BeverageEntity>(&format!(
            "SELECT {COLUMNS} FROM beverages WHERE id = $1",
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn find_by_barcode(
        &self,
        caller: &Caller,
        barcode: &str,
    ) -> Result<Beverage, RepositoryError> {
        // Barcodes repeat across historical records; the most recently
        // created row wins.
        let entity = if caller.is_superuser {
            sqlx::query_as::<_, BeverageEntity>(&format!(
                "SELECT {COLUMNS} FROM beverages WHERE barcode = $1 ORDER BY created_at DESC LIMIT 1",
            ))
            .bind(barcode)
            .fetch_optional(&self.pool)
            .await
        } else {
            sqlx::query_as::<_, BeverageEntity>(&format!(
                "SELECT {COLUMNS} FROM beverages WHERE barcode = $1 AND owner_id = $2 ORDER BY created_at DESC LIMIT 1",
            ))
            .bind(barcode)
            .bind(caller.user_id.as_str())
            .fetch_optional(&self.pool)
            .await
        }
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn save(&self, beverage: &Beverage) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO beverages (id, owner_id, title, description, category, tags, barcode, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (id) DO UPDATE SET
                title = EXCLUDED.title,
                description = EXCLUDED.description,
                category = EXCLUDED.category,
                tags = EXCLUDED.tags,
                barcode = EXCLUDED.barcode,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(beverage.id)
        .bind(beverage.owner_id.as_str())
        .bind(&beverage.title)
        .bind(&beverage.description)
        .bind(&beverage.category)
        .bind(&beverage.tags)
        .bind(&beverage.barcode)
        .bind(beverage.created_at)
        .bind(beverage.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM beverages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
