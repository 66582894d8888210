use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{Exercise, Workout};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateWorkoutRequest {
    pub program_id: i64,

    #[validate(range(min = 1, message = "Day number must be positive"))]
    pub day_number: i32,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Title must be between 1 and 255 characters"
    ))]
    pub title: String,

    #[validate(length(max = 4000))]
    pub description: Option<String>,
}

/// Workout with its exercises
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WorkoutDetailResponse {
    pub id: i64,
    pub program_id: i64,
    pub day_number: i32,
    pub title: String,
    pub description: Option<String>,
    pub exercises: Vec<Exercise>,
}

impl WorkoutDetailResponse {
    pub fn new(workout: Workout, exercises: Vec<Exercise>) -> Self {
        Self {
            id: workout.id,
            program_id: workout.program_id,
            day_number: workout.day_number,
            title: workout.title,
            description: workout.description,
            exercises,
        }
    }
}
