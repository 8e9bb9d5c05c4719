use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TrainingCenter {
    pub training_center_id: i32,
    pub name: String,
    pub address: String,
    pub owner: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewTrainingCenter {
    pub name: String,
    pub address: String,
    pub owner: String,
}
