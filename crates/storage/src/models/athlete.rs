use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Row of the `athletes` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Athlete {
    pub athlete_id: Uuid,
    pub name: String,
    pub national_id: String,
    pub age: i32,
    pub weight: f64,
    pub height: f64,
    pub sex: String,
    pub category_id: i32,
    pub training_center_id: i32,
    pub created_at: chrono::NaiveDateTime,
}

/// Athlete joined with the names of its category and training center.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct AthleteRecord {
    #[sqlx(flatten)]
    pub athlete: Athlete,
    pub category_name: String,
    pub training_center_name: String,
}
