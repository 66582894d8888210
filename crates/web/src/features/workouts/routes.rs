use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{
    create_workout, delete_workout, get_workout, list_program_days, list_workout_exercises,
};

/// `GET /:id` takes a program id and lists its days; the single workout
/// lives under `/single/:id`. Other `/:id` routes take a workout id.
pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", post(create_workout))
        .route("/single/:id", get(get_workout))
        .route("/:id", get(list_program_days).delete(delete_workout))
        .route("/:id/exercises", get(list_workout_exercises))
}
