use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::common::{MAX_LIMIT, default_limit, non_empty};
use super::workout::WorkoutDetailResponse;
use crate::models::WorkoutProgram;

/// Request payload for creating a program
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProgramRequest {
    #[validate(length(min = 1, max = 255, message = "Difficulty is required"))]
    pub difficulty: String,

    #[validate(length(min = 1, max = 255, message = "Goal is required"))]
    pub goal: String,

    #[validate(length(min = 1, max = 255, message = "Location is required"))]
    pub location: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(max = 4000))]
    pub description: Option<String>,
}

/// Request payload for replacing a program's fields.
///
/// An absent `description` keeps the stored one.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProgramRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(max = 4000))]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Difficulty is required"))]
    pub difficulty: String,

    #[validate(length(min = 1, max = 255, message = "Goal is required"))]
    pub goal: String,

    #[validate(length(min = 1, max = 255, message = "Location is required"))]
    pub location: String,
}

/// Query parameters for listing programs. Filters combine with AND.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProgramFilter {
    /// Exact difficulty, e.g. "Начальный"
    pub difficulty: Option<String>,
    /// Exact goal, e.g. "Похудение"
    pub goal: Option<String>,
    /// Exact location, e.g. "Дома"
    pub location: Option<String>,
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

impl Default for ProgramFilter {
    fn default() -> Self {
        Self {
            difficulty: None,
            goal: None,
            location: None,
            skip: 0,
            limit: default_limit(),
        }
    }
}

impl ProgramFilter {
    pub fn validate(&self) -> Result<(), String> {
        if self.skip < 0 {
            return Err("skip must be >= 0".to_string());
        }
        if self.limit < 1 || self.limit > MAX_LIMIT {
            return Err(format!("limit must be between 1 and {}", MAX_LIMIT));
        }
        Ok(())
    }

    pub fn difficulty(&self) -> Option<&str> {
        non_empty(&self.difficulty)
    }

    pub fn goal(&self) -> Option<&str> {
        non_empty(&self.goal)
    }

    pub fn location(&self) -> Option<&str> {
        non_empty(&self.location)
    }
}

/// Program with its workouts (ordered by day) and their exercises
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProgramDetailResponse {
    pub id: i64,
    pub difficulty: String,
    pub goal: String,
    pub location: String,
    pub name: String,
    pub description: Option<String>,
    pub workouts: Vec<WorkoutDetailResponse>,
}

impl ProgramDetailResponse {
    pub fn new(program: WorkoutProgram, workouts: Vec<WorkoutDetailResponse>) -> Self {
        Self {
            id: program.id,
            difficulty: program.difficulty,
            goal: program.goal,
            location: program.location,
            name: program.name,
            description: program.description,
            workouts,
        }
    }
}
