use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{create_exercise, delete_exercise, get_exercise, update_exercise};

pub fn routes() -> Router<Database> {
    Router::new().route("/", post(create_exercise)).route(
        "/:id",
        get(get_exercise).put(update_exercise).delete(delete_exercise),
    )
}
