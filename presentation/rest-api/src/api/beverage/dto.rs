use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::beverage::model::Beverage;

#[derive(Debug, Clone, Object)]
pub struct CreateBeverageRequest {
    /// Beverage title (cannot be empty)
    pub title: String,
    /// Free-form description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Category name (cannot be empty)
    pub category: String,
    /// Property labels, listing order preserved
    #[oai(skip_serializing_if_is_none)]
    pub tags: Option<Vec<String>>,
    /// Product barcode (cannot be empty)
    pub barcode: String,
}

/// Partial update: absent fields keep their stored value.
#[derive(Debug, Clone, Object)]
pub struct UpdateBeverageRequest {
    #[oai(skip_serializing_if_is_none)]
    pub title: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub tags: Option<Vec<String>>,
    #[oai(skip_serializing_if_is_none)]
    pub barcode: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct BeverageResponse {
    /// Beverage unique identifier
    pub id: Uuid,
    /// Identifier of the owning user
    pub owner_id: String,
    /// Beverage title
    pub title: String,
    /// Free-form description
    pub description: String,
    /// Category name
    pub category: String,
    /// Property labels
    pub tags: Vec<String>,
    /// Product barcode
    pub barcode: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Beverage> for BeverageResponse {
    fn from(b: Beverage) -> Self {
        Self {
            id: b.id,
            owner_id: b.owner_id.to_string(),
            title: b.title,
            description: b.description,
            category: b.category,
            tags: b.tags,
            barcode: b.barcode,
            created_at: b.created_at,
            updated_at: b.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct BeverageListResponse {
    /// Page of beverages
    pub data: Vec<BeverageResponse>,
    /// Total number of beverages in scope
    pub count: i64,
}

#[derive(Debug, Clone, Object)]
pub struct MessageResponse {
    pub message: String,
}
