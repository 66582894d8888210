pub mod exercises;
pub mod health;
pub mod programs;
pub mod progress;
pub mod users;
pub mod workouts;
