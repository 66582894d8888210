//! Program attribute values offered by the client application.
//!
//! Filters and requests accept any text; these lists are the catalogue the
//! client renders and the values the sample program is seeded with.

use serde::Serialize;
use utoipa::ToSchema;

pub const DIFFICULTY_BEGINNER: &str = "Начальный";
pub const DIFFICULTY_INTERMEDIATE: &str = "Средний";
pub const DIFFICULTY_ADVANCED: &str = "Продвинутый";

pub const GOAL_WEIGHT_LOSS: &str = "Похудение";
pub const GOAL_MUSCLE_GAIN: &str = "Набор массы";
pub const GOAL_ENDURANCE: &str = "Выносливость";
pub const GOAL_FLEXIBILITY: &str = "Гибкость";

pub const LOCATION_HOME: &str = "Дома";
pub const LOCATION_GYM: &str = "Зал";
pub const LOCATION_STREET: &str = "Улица";

pub const DIFFICULTIES: &[&str] = &[
    DIFFICULTY_BEGINNER,
    DIFFICULTY_INTERMEDIATE,
    DIFFICULTY_ADVANCED,
];

pub const GOALS: &[&str] = &[
    GOAL_WEIGHT_LOSS,
    GOAL_MUSCLE_GAIN,
    GOAL_ENDURANCE,
    GOAL_FLEXIBILITY,
];

pub const LOCATIONS: &[&str] = &[LOCATION_HOME, LOCATION_GYM, LOCATION_STREET];

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProgramOptions {
    pub difficulty: Vec<String>,
    pub goal: Vec<String>,
    pub location: Vec<String>,
}

impl ProgramOptions {
    pub fn catalogue() -> Self {
        Self {
            difficulty: to_owned(DIFFICULTIES),
            goal: to_owned(GOALS),
            location: to_owned(LOCATIONS),
        }
    }
}

fn to_owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
