use sqlx::SqlitePool;
use storage::{
    dto::user::CreateUserRequest,
    error::{Result, StorageError},
    models::{User, UserProgress},
    repository::{ProgressRepository, UserRepository},
};

/// Register a user; a telegram id can only be registered once.
///
/// The unique index on `telegram_id` is the only duplicate check.
pub async fn create_user(pool: &SqlitePool, request: &CreateUserRequest) -> Result<User> {
    let mut conn = pool.acquire().await?;
    let user = UserRepository::new(&mut conn).create(request).await?;

    tracing::info!(user_id = user.id, "Registered user");
    Ok(user)
}

/// Get user by telegram id
pub async fn get_user_by_telegram_id(pool: &SqlitePool, telegram_id: &str) -> Result<User> {
    let mut conn = pool.acquire().await?;
    UserRepository::new(&mut conn)
        .find_by_telegram_id(telegram_id)
        .await?
        .ok_or(StorageError::NotFound("User"))
}

/// List a user's progress records, optionally for one program only
pub async fn list_user_progress(
    pool: &SqlitePool,
    user_id: i64,
    program_id: Option<i64>,
) -> Result<Vec<UserProgress>> {
    let mut conn = pool.acquire().await?;

    if !UserRepository::new(&mut conn).exists(user_id).await? {
        return Err(StorageError::NotFound("User"));
    }

    ProgressRepository::new(&mut conn)
        .list_by_user(user_id, program_id)
        .await
}
