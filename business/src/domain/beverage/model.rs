use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::BeverageError;
use crate::domain::shared::value_objects::UserId;

/// A cataloged beverage record, registered and owned by a user.
#[derive(Debug, Clone)]
pub struct Beverage {
    pub id: Uuid,
    pub owner_id: UserId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
    pub barcode: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewBeverageProps {
    pub owner_id: UserId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
    pub barcode: String,
}

impl Beverage {
    pub fn new(props: NewBeverageProps) -> Result<Self, BeverageError> {
        Self::validate(&props.title, &props.category, &props.barcode)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            owner_id: props.owner_id,
            title: props.title,
            description: props.description,
            category: props.category,
            tags: props.tags,
            barcode: props.barcode,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        owner_id: UserId,
        title: String,
        description: String,
        category: String,
        tags: Vec<String>,
        barcode: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            owner_id,
            title,
            description,
            category,
            tags,
            barcode,
            created_at,
            updated_at,
        }
    }

    /// Applies a partial-field update. Absent fields keep their current value.
    pub fn apply_update(
        &mut self,
        title: Option<String>,
        description: Option<String>,
        category: Option<String>,
        tags: Option<Vec<String>>,
        barcode: Option<String>,
    ) -> Result<(), BeverageError> {
        let title = title.unwrap_or_else(|| self.title.clone());
        let category = category.unwrap_or_else(|| self.category.clone());
        let barcode = barcode.unwrap_or_else(|| self.barcode.clone());
        Self::validate(&title, &category, &barcode)?;

        self.title = title;
        self.category = category;
        self.barcode = barcode;
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(tags) = tags {
            self.tags = tags;
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    fn validate(title: &str, category: &str, barcode: &str) -> Result<(), BeverageError> {
        if title.trim().is_empty() {
            return Err(BeverageError::TitleEmpty);
        }
        if category.trim().is_empty() {
            return Err(BeverageError::CategoryEmpty);
        }
        if barcode.trim().is_empty() {
            return Err(BeverageError::BarcodeEmpty);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props() -> NewBeverageProps {
        NewBeverageProps {
            owner_id: UserId::new("owner-1"),
            title: "Tonic Water".to_string(),
            description: "A carbonated soft drink with quinine".to_string(),
            category: "Mixer".to_string(),
            tags: vec!["bitter".to_string(), "carbonated".to_string()],
            barcode: "5901234123457".to_string(),
        }
    }

    #[test]
    fn should_create_beverage_when_valid() {
        let beverage = Beverage::new(props()).unwrap();
        assert_eq!(beverage.title, "Tonic Water");
        assert_eq!(beverage.created_at, beverage.updated_at);
    }

    #[test]
    fn should_reject_empty_title() {
        let mut p = props();
        p.title = "  ".to_string();
        assert!(matches!(Beverage::new(p), Err(BeverageError::TitleEmpty)));
    }

    #[test]
    fn should_reject_empty_category() {
        let mut p = props();
        p.category = String::new();
        assert!(matches!(Beverage::new(p), Err(BeverageError::CategoryEmpty)));
    }

    #[test]
    fn should_reject_empty_barcode() {
        let mut p = props();
        p.barcode = String::new();
        assert!(matches!(Beverage::new(p), Err(BeverageError::BarcodeEmpty)));
    }

    #[test]
    fn should_keep_current_fields_on_partial_update() {
        let mut beverage = Beverage::new(props()).unwrap();
        beverage
            .apply_update(None, Some("Now with more quinine".to_string()), None, None, None)
            .unwrap();
        assert_eq!(beverage.title, "Tonic Water");
        assert_eq!(beverage.description, "Now with more quinine");
        assert_eq!(beverage.category, "Mixer");
    }

    #[test]
    fn should_reject_update_that_empties_title() {
        let mut beverage = Beverage::new(props()).unwrap();
        let result = beverage.apply_update(Some(String::new()), None, None, None, None);
        assert!(matches!(result, Err(BeverageError::TitleEmpty)));
        assert_eq!(beverage.title, "Tonic Water");
    }
}
