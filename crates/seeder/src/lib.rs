pub mod error;
pub mod loader;
pub mod models;
pub mod sample;
pub mod validation;

pub use error::{Result, SeedError};
pub use loader::{ImportSummary, SeedReport, import_program, seed_sample_data};
pub use models::{ExerciseSeed, ProgramSeed, WorkoutSeed};
