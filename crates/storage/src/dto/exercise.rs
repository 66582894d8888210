use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateExerciseRequest {
    pub workout_id: i64,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(range(min = 1, message = "Sets must be positive"))]
    pub sets: i32,

    #[validate(length(min = 1, max = 64, message = "Reps are required"))]
    pub reps: String,

    #[validate(range(min = 0, message = "Rest time cannot be negative"))]
    pub rest_time: i32,

    #[validate(length(max = 4000))]
    pub description: Option<String>,
}

/// Replacement values for an exercise. The owning workout cannot change.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateExerciseRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(range(min = 1, message = "Sets must be positive"))]
    pub sets: i32,

    #[validate(length(min = 1, max = 64, message = "Reps are required"))]
    pub reps: String,

    #[validate(range(min = 0, message = "Rest time cannot be negative"))]
    pub rest_time: i32,

    #[validate(length(max = 4000))]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_sets_and_negative_rest() {
        let req = UpdateExerciseRequest {
            name: "Планка".to_string(),
            sets: 0,
            reps: "30 сек".to_string(),
            rest_time: -5,
            description: None,
        };
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("sets"));
        assert!(fields.contains_key("rest_time"));
    }

    #[test]
    fn update_body_ignores_workout_id() {
        let req: UpdateExerciseRequest = serde_json::from_str(
            r#"{"workout_id": 9, "name": "Приседания", "sets": 3, "reps": "15-20", "rest_time": 60}"#,
        )
        .unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(req.description, None);
    }
}
