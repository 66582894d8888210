use axum::{
    Router,
    routing::{get, patch, post},
};
use storage::Database;

use super::handlers::{complete_workout, create_progress, get_progress};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", post(create_progress))
        .route("/:id", get(get_progress))
        .route("/:id/complete", patch(complete_workout))
}
