use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{
    create_program, delete_program, get_program, list_program_workouts, list_programs,
    update_program,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_programs).post(create_program))
        .route(
            "/:id",
            get(get_program).put(update_program).delete(delete_program),
        )
        .route("/:id/workouts", get(list_program_workouts))
}
