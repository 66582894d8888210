use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: i64,
    /// Telegram account id, unique and never changed after registration.
    pub telegram_id: String,
    pub created_at: chrono::NaiveDateTime,
}
