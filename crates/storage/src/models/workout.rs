use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One training day of a program.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Workout {
    pub id: i64,
    pub program_id: i64,
    pub day_number: i32,
    pub title: String,
    pub description: Option<String>,
}
