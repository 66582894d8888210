//! File format for program definitions.
//!
//! A program file is one JSON object holding the program attributes and its
//! workouts, each workout holding its exercises. Ids are assigned on insert.

use serde::{Deserialize, Serialize};
use storage::dto::{
    exercise::CreateExerciseRequest, program::CreateProgramRequest, workout::CreateWorkoutRequest,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgramSeed {
    pub difficulty: String,
    pub goal: String,
    pub location: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub workouts: Vec<WorkoutSeed>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutSeed {
    pub day_number: i32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub exercises: Vec<ExerciseSeed>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExerciseSeed {
    pub name: String,
    pub sets: i32,
    pub reps: String,
    pub rest_time: i32,
    #[serde(default)]
    pub description: Option<String>,
}

impl ProgramSeed {
    pub fn to_request(&self) -> CreateProgramRequest {
        CreateProgramRequest {
            difficulty: self.difficulty.clone(),
            goal: self.goal.clone(),
            location: self.location.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }

    pub fn exercise_count(&self) -> usize {
        self.workouts.iter().map(|w| w.exercises.len()).sum()
    }
}

impl WorkoutSeed {
    pub fn to_request(&self, program_id: i64) -> CreateWorkoutRequest {
        CreateWorkoutRequest {
            program_id,
            day_number: self.day_number,
            title: self.title.clone(),
            description: self.description.clone(),
        }
    }
}

impl ExerciseSeed {
    pub fn to_request(&self, workout_id: i64) -> CreateExerciseRequest {
        CreateExerciseRequest {
            workout_id,
            name: self.name.clone(),
            sets: self.sets,
            reps: self.reps.clone(),
            rest_time: self.rest_time,
            description: self.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_program_file_with_optional_fields_missing() {
        let json = r#"{
            "difficulty": "Средний",
            "goal": "Выносливость",
            "location": "Улица",
            "name": "Бег",
            "workouts": [
                {
                    "day_number": 1,
                    "title": "Интервалы",
                    "exercises": [
                        { "name": "Спринт", "sets": 6, "reps": "200 м", "rest_time": 90 }
                    ]
                },
                { "day_number": 2, "title": "Отдых" }
            ]
        }"#;

        let seed: ProgramSeed = serde_json::from_str(json).unwrap();

        assert_eq!(seed.description, None);
        assert_eq!(seed.workouts.len(), 2);
        assert!(seed.workouts[1].exercises.is_empty());
        assert_eq!(seed.exercise_count(), 1);

        let request = seed.workouts[0].exercises[0].to_request(7);
        assert_eq!(request.workout_id, 7);
        assert_eq!(request.reps, "200 м");
    }
}
