pub mod common;
pub mod exercise;
pub mod program;
pub mod progress;
pub mod user;
pub mod workout;
