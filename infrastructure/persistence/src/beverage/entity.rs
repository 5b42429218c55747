use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::beverage::model::Beverage;
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct BeverageEntity {
    pub id: Uuid,
    pub owner_id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
    pub barcode: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BeverageEntity {
    pub fn into_domain(self) -> Beverage {
        Beverage::from_repository(
            self.id,
            UserId::new(&self.owner_id),
            self.title,
            self.description,
            self.category,
            self.tags,
            self.barcode,
            self.created_at,
            self.updated_at,
        )
    }
}
