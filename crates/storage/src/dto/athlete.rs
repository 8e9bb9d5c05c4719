use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Athlete, AthleteRecord};

/// Category referenced by name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CategoryRef {
    #[validate(length(
        min = 1,
        max = 10,
        message = "Category name must be between 1 and 10 characters"
    ))]
    pub name: String,
}

/// Training center referenced by name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct TrainingCenterRef {
    #[validate(length(
        min = 1,
        max = 20,
        message = "Training center name must be between 1 and 20 characters"
    ))]
    pub name: String,
}

/// Full athlete view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AthleteResponse {
    pub id: Uuid,
    pub name: String,
    pub national_id: String,
    pub age: i32,
    pub weight: f64,
    pub height: f64,
    pub sex: String,
    pub category: CategoryRef,
    pub training_center: TrainingCenterRef,
    pub created_at: NaiveDateTime,
}

/// Reduced view used when listing athletes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AthleteSummaryResponse {
    pub name: String,
    pub category: CategoryRef,
    pub training_center: TrainingCenterRef,
}

/// Request payload for creating a new athlete
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAthleteRequest {
    #[validate(length(
        min = 1,
        max = 50,
        message = "Name must be between 1 and 50 characters"
    ))]
    pub name: String,

    #[validate(length(
        min = 1,
        max = 11,
        message = "National id must be between 1 and 11 characters"
    ))]
    pub national_id: String,

    #[validate(range(min = 0, message = "Age cannot be negative"))]
    pub age: i32,

    #[validate(range(exclusive_min = 0.0, message = "Weight must be positive"))]
    pub weight: f64,

    #[validate(range(exclusive_min = 0.0, message = "Height must be positive"))]
    pub height: f64,

    #[validate(length(equal = 1, message = "Sex must be a single character"))]
    pub sex: String,

    #[validate(nested)]
    pub category: CategoryRef,

    #[validate(nested)]
    pub training_center: TrainingCenterRef,
}

/// Request payload for updating an existing athlete.
///
/// Every field is optional; a missing field keeps its stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateAthleteRequest {
    #[validate(length(min = 1, max = 50))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 11))]
    pub national_id: Option<String>,

    #[validate(range(min = 0))]
    pub age: Option<i32>,

    #[validate(range(exclusive_min = 0.0))]
    pub weight: Option<f64>,

    #[validate(range(exclusive_min = 0.0))]
    pub height: Option<f64>,

    #[validate(length(equal = 1))]
    pub sex: Option<String>,
}

impl UpdateAthleteRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.national_id.is_none()
            && self.age.is_none()
            && self.weight.is_none()
            && self.height.is_none()
            && self.sex.is_none()
    }

    /// Copy every supplied field onto `athlete`.
    pub fn apply_to(&self, athlete: &mut Athlete) {
        if let Some(name) = &self.name {
            athlete.name = name.clone();
        }
        if let Some(national_id) = &self.national_id {
            athlete.national_id = national_id.clone();
        }
        if let Some(age) = self.age {
            athlete.age = age;
        }
        if let Some(weight) = self.weight {
            athlete.weight = weight;
        }
        if let Some(height) = self.height {
            athlete.height = height;
        }
        if let Some(sex) = &self.sex {
            athlete.sex = sex.clone();
        }
    }
}

impl From<AthleteRecord> for AthleteResponse {
    fn from(record: AthleteRecord) -> Self {
        let athlete = record.athlete;
        Self {
            id: athlete.athlete_id,
            name: athlete.name,
            national_id: athlete.national_id,
            age: athlete.age,
            weight: athlete.weight,
            height: athlete.height,
            sex: athlete.sex,
            category: CategoryRef {
                name: record.category_name,
            },
            training_center: TrainingCenterRef {
                name: record.training_center_name,
            },
            created_at: athlete.created_at,
        }
    }
}

impl From<AthleteRecord> for AthleteSummaryResponse {
    fn from(record: AthleteRecord) -> Self {
        Self {
            name: record.athlete.name,
            category: CategoryRef {
                name: record.category_name,
            },
            training_center: TrainingCenterRef {
                name: record.training_center_name,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> AthleteRecord {
        AthleteRecord {
            athlete: Athlete {
                athlete_id: Uuid::new_v4(),
                name: "Jonas".to_string(),
                national_id: "12345678900".to_string(),
                age: 28,
                weight: 68.5,
                height: 1.66,
                sex: "M".to_string(),
                category_id: 1,
                training_center_id: 2,
                created_at: chrono::Utc::now().naive_utc(),
            },
            category_name: "Scale".to_string(),
            training_center_name: "CT King".to_string(),
        }
    }

    fn create_request() -> CreateAthleteRequest {
        serde_json::from_value(serde_json::json!({
            "name": "Jonas",
            "national_id": "12345678900",
            "age": 28,
            "weight": 68.5,
            "height": 1.66,
            "sex": "M",
            "category": { "name": "Scale" },
            "training_center": { "name": "CT King" }
        }))
        .unwrap()
    }

    #[test]
    fn full_view_embeds_relation_names() {
        let record = record();
        let id = record.athlete.athlete_id;
        let view = AthleteResponse::from(record);

        assert_eq!(view.id, id);
        assert_eq!(view.category.name, "Scale");
        assert_eq!(view.training_center.name, "CT King");
        assert_eq!(view.weight, 68.5);
    }

    #[test]
    fn summary_view_drops_identity_and_physiology() {
        let view = AthleteSummaryResponse::from(record());
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "name": "Jonas",
                "category": { "name": "Scale" },
                "training_center": { "name": "CT King" }
            })
        );
    }

    #[test]
    fn valid_create_request_passes_validation() {
        assert!(create_request().validate().is_ok());
    }

    #[test]
    fn create_request_rejects_bad_fields() {
        let mut req = create_request();
        req.weight = 0.0;
        req.sex = "MX".to_string();
        req.category.name = String::new();

        let errors = req.validate().unwrap_err();
        let fields = errors.errors();
        assert!(fields.contains_key("weight"));
        assert!(fields.contains_key("sex"));
        assert!(fields.contains_key("category"));
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let patch: UpdateAthleteRequest = serde_json::from_str("{}").unwrap();
        assert!(patch.is_empty());

        let original = record().athlete;
        let mut athlete = original.clone();
        patch.apply_to(&mut athlete);
        assert_eq!(athlete, original);
    }

    #[test]
    fn patch_touches_only_supplied_fields() {
        let patch: UpdateAthleteRequest =
            serde_json::from_str(r#"{"name": "X", "age": 30}"#).unwrap();
        assert!(!patch.is_empty());

        let original = record().athlete;
        let mut athlete = original.clone();
        patch.apply_to(&mut athlete);

        assert_eq!(athlete.name, "X");
        assert_eq!(athlete.age, 30);
        assert_eq!(athlete.national_id, original.national_id);
        assert_eq!(athlete.weight, original.weight);
        assert_eq!(athlete.category_id, original.category_id);
        assert_eq!(athlete.created_at, original.created_at);
    }
}
