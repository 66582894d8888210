//! Starter program inserted into an empty database.

use storage::models::options::{DIFFICULTY_BEGINNER, GOAL_WEIGHT_LOSS, LOCATION_HOME};

use crate::models::{ExerciseSeed, ProgramSeed, WorkoutSeed};

fn exercise(name: &str, sets: i32, reps: &str, rest_time: i32, description: &str) -> ExerciseSeed {
    ExerciseSeed {
        name: name.to_string(),
        sets,
        reps: reps.to_string(),
        rest_time,
        description: Some(description.to_string()),
    }
}

fn workout(day_number: i32, title: &str, description: &str, exercises: Vec<ExerciseSeed>) -> WorkoutSeed {
    WorkoutSeed {
        day_number,
        title: title.to_string(),
        description: Some(description.to_string()),
        exercises,
    }
}

/// Three-day home program for beginners aiming to lose weight
pub fn sample_program() -> ProgramSeed {
    ProgramSeed {
        difficulty: DIFFICULTY_BEGINNER.to_string(),
        goal: GOAL_WEIGHT_LOSS.to_string(),
        location: LOCATION_HOME.to_string(),
        name: "Программа для начинающих".to_string(),
        description: Some(
            "Базовая программа тренировок для похудения в домашних условиях".to_string(),
        ),
        workouts: vec![
            workout(
                1,
                "День 1: Кардио и базовые упражнения",
                "Разминка и базовые упражнения для всего тела",
                vec![
                    exercise("Прыжки на месте", 3, "30 сек", 30, "Интенсивные прыжки для разогрева"),
                    exercise("Отжимания от пола", 3, "10-15", 60, "Классические отжимания, можно с колен"),
                    exercise("Приседания", 3, "15-20", 60, "Глубокие приседания с собственным весом"),
                    exercise("Планка", 3, "30 сек", 45, "Статическая планка на предплечьях"),
                ],
            ),
            workout(
                2,
                "День 2: Отдых или легкая активность",
                "День восстановления",
                vec![exercise("Растяжка", 1, "15 мин", 0, "Легкая растяжка всех групп мышц")],
            ),
            workout(
                3,
                "День 3: Силовая тренировка",
                "Упражнения на укрепление мышц",
                vec![
                    exercise("Выпады", 3, "12 на каждую ногу", 60, "Выпады вперед, чередуя ноги"),
                    exercise("Берпи", 3, "8-10", 90, "Комплексное упражнение на все тело"),
                    exercise("Скалолаз", 3, "20", 60, "Динамическое упражнение на пресс"),
                ],
            ),
        ],
    }
}
