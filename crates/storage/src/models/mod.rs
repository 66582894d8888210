pub mod exercise;
pub mod options;
pub mod program;
pub mod progress;
pub mod user;
pub mod workout;

pub use exercise::Exercise;
pub use program::WorkoutProgram;
pub use progress::{CompletionState, UserProgress};
pub use user::User;
pub use workout::Workout;
