//! Data-access layer.
//!
//! Repositories borrow a single connection, which is either a pooled
//! connection or an open transaction, so a caller can run existence checks
//! and the write that depends on them inside one unit of work.

pub mod exercise;
pub mod program;
pub mod progress;
pub mod user;
pub mod workout;

pub use exercise::ExerciseRepository;
pub use program::ProgramRepository;
pub use progress::ProgressRepository;
pub use user::UserRepository;
pub use workout::WorkoutRepository;
