use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{create_user, get_user, list_user_progress};

// Both parameterised routes share the `:id` segment name; it carries the
// telegram id on `/:id` and the numeric user id on `/:id/progress`.
pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", post(create_user))
        .route("/:id", get(get_user))
        .route("/:id/progress", get(list_user_progress))
}
