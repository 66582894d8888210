use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Completion record of one workout by one user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct UserProgress {
    pub id: i64,
    pub user_id: i64,
    pub program_id: i64,
    pub workout_id: i64,
    pub is_completed: bool,
    pub completed_at: Option<NaiveDateTime>,
}

/// The two states a progress record can be in.
///
/// `completed_at` is present exactly when the record is completed, so the
/// pair of columns is always written from one of these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionState {
    Incomplete,
    Completed { at: NaiveDateTime },
}

impl CompletionState {
    /// State after a request to set `is_completed` at time `now`.
    ///
    /// Completing again refreshes the timestamp; un-completing always clears it.
    pub fn requested(is_completed: bool, now: NaiveDateTime) -> Self {
        if is_completed {
            Self::Completed { at: now }
        } else {
            Self::Incomplete
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }

    pub fn completed_at(&self) -> Option<NaiveDateTime> {
        match self {
            Self::Completed { at } => Some(*at),
            Self::Incomplete => None,
        }
    }
}
