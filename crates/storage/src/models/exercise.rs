use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Exercise {
    pub id: i64,
    pub workout_id: i64,
    pub name: String,
    pub sets: i32,
    /// Free text such as "10-15" or "30 сек".
    pub reps: String,
    /// Rest between sets, in seconds.
    pub rest_time: i32,
    pub description: Option<String>,
}
