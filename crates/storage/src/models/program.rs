use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct WorkoutProgram {
    pub id: i64,
    pub difficulty: String,
    pub goal: String,
    pub location: String,
    pub name: String,
    pub description: Option<String>,
}
