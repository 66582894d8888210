use std::collections::HashSet;

use storage::models::options::{DIFFICULTIES, GOALS, LOCATIONS};
use tracing::warn;
use validator::{Validate, ValidationErrors};

use crate::models::ProgramSeed;
use crate::{Result, SeedError};

pub struct ProgramValidator;

impl ProgramValidator {
    /// Check a program file before anything is written.
    ///
    /// Field rules are the same ones the API enforces on create requests.
    /// Values outside the client catalogue and repeated day numbers are only
    /// reported as warnings.
    pub fn validate(seed: &ProgramSeed) -> Result<ValidationReport> {
        let mut report = ValidationReport::default();

        if let Err(errors) = seed.to_request().validate() {
            report.push_errors(&format!("Program '{}'", seed.name), &errors);
        }

        for (field, value, catalogue) in [
            ("difficulty", &seed.difficulty, DIFFICULTIES),
            ("goal", &seed.goal, GOALS),
            ("location", &seed.location, LOCATIONS),
        ] {
            if !catalogue.contains(&value.as_str()) {
                report.warnings.push(format!(
                    "Program {} '{}' is not one of the client options",
                    field, value
                ));
            }
        }

        if seed.workouts.is_empty() {
            report
                .warnings
                .push("Program has no workouts".to_string());
        }

        let mut days = HashSet::new();
        for workout in &seed.workouts {
            let label = format!("Day {}", workout.day_number);

            if let Err(errors) = workout.to_request(0).validate() {
                report.push_errors(&label, &errors);
            }
            if !days.insert(workout.day_number) {
                report
                    .warnings
                    .push(format!("{} appears more than once", label));
            }
            if workout.exercises.is_empty() {
                report
                    .warnings
                    .push(format!("{} has no exercises", label));
            }

            for exercise in &workout.exercises {
                if let Err(errors) = exercise.to_request(0).validate() {
                    report.push_errors(&format!("{}, exercise '{}'", label, exercise.name), &errors);
                }
            }
        }

        if !report.errors.is_empty() {
            Err(SeedError::ValidationError(format!(
                "Validation failed with {} error(s): {}",
                report.errors.len(),
                report.errors.join("; ")
            )))
        } else {
            Ok(report)
        }
    }
}

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            warn!("{}", warning);
        }
    }

    fn push_errors(&mut self, label: &str, errors: &ValidationErrors) {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        for (field, field_errors) in fields {
            for error in field_errors {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                self.errors.push(format!("{}: {}: {}", label, field, message));
            }
        }
    }
}
