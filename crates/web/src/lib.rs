use axum::Router;
use storage::Database;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, normalize_path::NormalizePath, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod error;
pub mod extract;
pub mod features;

use features::{exercises, health, programs, progress, users, workouts};

#[derive(OpenApi)]
#[openapi(
    info(title = "Workout Program API"),
    paths(
        health::root,
        health::health,
        health::program_options,
        users::handlers::create_user,
        users::handlers::get_user,
        users::handlers::list_user_progress,
        programs::handlers::list_programs,
        programs::handlers::get_program,
        programs::handlers::create_program,
        programs::handlers::update_program,
        programs::handlers::delete_program,
        programs::handlers::list_program_workouts,
        workouts::handlers::create_workout,
        workouts::handlers::list_program_days,
        workouts::handlers::get_workout,
        workouts::handlers::list_workout_exercises,
        workouts::handlers::delete_workout,
        exercises::handlers::create_exercise,
        exercises::handlers::get_exercise,
        exercises::handlers::update_exercise,
        exercises::handlers::delete_exercise,
        progress::handlers::create_progress,
        progress::handlers::get_progress,
        progress::handlers::complete_workout,
    ),
    components(
        schemas(
            health::ServiceInfo,
            health::HealthResponse,
            storage::models::options::ProgramOptions,
            storage::dto::common::MessageResponse,
            storage::dto::user::CreateUserRequest,
            storage::dto::program::CreateProgramRequest,
            storage::dto::program::UpdateProgramRequest,
            storage::dto::program::ProgramDetailResponse,
            storage::dto::workout::CreateWorkoutRequest,
            storage::dto::workout::WorkoutDetailResponse,
            storage::dto::exercise::CreateExerciseRequest,
            storage::dto::exercise::UpdateExerciseRequest,
            storage::dto::progress::CreateProgressRequest,
            storage::dto::progress::CompletionStatusRequest,
            storage::models::User,
            storage::models::WorkoutProgram,
            storage::models::Workout,
            storage::models::Exercise,
            storage::models::UserProgress,
        )
    ),
    tags(
        (name = "health", description = "Service status"),
        (name = "users", description = "User registration and progress history"),
        (name = "programs", description = "Workout programs"),
        (name = "workouts", description = "Program days"),
        (name = "exercises", description = "Exercises of a workout"),
        (name = "progress", description = "Workout completion tracking"),
    )
)]
pub struct ApiDoc;

/// Build the HTTP application over an opened database.
///
/// API paths are matched with any trailing slash trimmed, so `/programs/`
/// and `/programs` reach the same handler. Swagger UI is routed before the
/// trimming because it redirects `/swagger-ui` to `/swagger-ui/`.
pub fn app(db: Database) -> Router {
    let api = Router::new()
        .merge(health::routes())
        .nest("/users", users::routes())
        .nest("/programs", programs::routes())
        .nest("/workouts", workouts::routes())
        .nest("/exercises", exercises::routes())
        .nest("/progress", progress::routes())
        .with_state(db);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback_service(NormalizePath::trim_trailing_slash(api))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}
