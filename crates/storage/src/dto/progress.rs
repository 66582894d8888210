use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProgressRequest {
    pub user_id: i64,
    pub program_id: i64,
    pub workout_id: i64,
    #[serde(default)]
    pub is_completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CompletionStatusRequest {
    pub is_completed: bool,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProgressFilter {
    /// Only records of this program
    pub program_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_progress_defaults_to_incomplete() {
        let req: CreateProgressRequest =
            serde_json::from_str(r#"{"user_id": 1, "program_id": 2, "workout_id": 3}"#).unwrap();
        assert!(!req.is_completed);
    }
}
