//! Job parsing, per-field validation, and resolution into typed inputs.
//!
//! Job files are JSON5, so hand-written jobs may use comments, trailing
//! commas, and unquoted keys. Every field carries a fixed validator;
//! resolution is gated on all of them passing before a typed
//! [`Inputs`](crate::models::Inputs) is built.

use serde::Serialize;
use thiserror::Error;

use crate::color;
use crate::models::{Inputs, Shape, StampJob};
use crate::validate::{FieldValidator, Rule, ValidationError};

/// Error type for job handling failures.
#[derive(Debug, Error)]
pub enum JobError {
    /// The job file is not parseable JSON5.
    #[error("invalid job file: {0}")]
    Parse(String),
    /// One or more fields failed validation.
    #[error("job validation failed for {} field(s)", .0.len())]
    Invalid(Vec<FieldIssues>),
}

/// Validation errors attached to one job field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssues {
    /// Job-file field name.
    pub field: &'static str,
    pub errors: Vec<ValidationError>,
}

/// Parse a JSON5 job source into a raw [`StampJob`].
///
/// Missing fields take their defaults; `parse_job("{}")` is the default job.
pub fn parse_job(source: &str) -> Result<StampJob, JobError> {
    json5::from_str(source).map_err(|e| JobError::Parse(e.to_string()))
}

/// Validate every field of a job.
///
/// An empty result is the "all green" gate: batch generation may proceed.
/// Each field is checked independently against its own fixed rule set, so
/// one bad job can report issues on several fields at once.
pub fn validate_job(job: &StampJob) -> Vec<FieldIssues> {
    let checks: [(&'static str, FieldValidator, &str); 10] = [
        ("length", length_validator(), &job.length),
        ("width", dimension_validator("width(px)"), &job.width),
        ("height", dimension_validator("height(px)"), &job.height),
        ("text", FieldValidator::new(vec![], "text"), &job.text),
        ("text_size", text_size_validator(), &job.text_size),
        ("text_color", color_validator("text color"), &job.text_color),
        (
            "text_color_shift_hue",
            FieldValidator::new(vec![], "text color hue cycling"),
            &job.text_color_shift_hue,
        ),
        (
            "background_color",
            color_validator("background color"),
            &job.background_color,
        ),
        (
            "background_color_shift_hue",
            FieldValidator::new(vec![], "background color hue cycling"),
            &job.background_color_shift_hue,
        ),
        ("shape", shape_validator(), &job.shape),
    ];

    let mut issues = Vec::new();
    for (field, validator, value) in checks {
        let report = validator.validate(value);
        if !report.valid {
            issues.push(FieldIssues {
                field,
                errors: report.errors,
            });
        }
    }
    issues
}

/// Resolve a raw job into typed [`Inputs`].
///
/// Runs [`validate_job`] first and refuses to build inputs unless every
/// field passes. Fields whose rules all skip the empty string (colors,
/// shape) can still fail to produce a typed value; those surface as field
/// issues too, so a successful resolve really is total.
pub fn resolve(job: &StampJob) -> Result<Inputs, JobError> {
    let mut issues = validate_job(job);

    let text_color = parse_color_field("text_color", "text color", &job.text_color, &mut issues);
    let background_color = parse_color_field(
        "background_color",
        "background color",
        &job.background_color,
        &mut issues,
    );
    let shape = match Shape::parse(&job.shape) {
        Some(shape) => shape,
        None => {
            push_issue(&mut issues, "shape", "shape is invalid".to_string());
            Shape::Circle
        }
    };

    if !issues.is_empty() {
        return Err(JobError::Invalid(issues));
    }

    Ok(Inputs {
        length: numeric(&job.length),
        width: numeric(&job.width),
        height: numeric(&job.height),
        text: job.text.clone(),
        text_size: numeric(&job.text_size),
        text_color,
        text_color_shift_hue: job.text_color_shift_hue == "on",
        background_color,
        background_color_shift_hue: job.background_color_shift_hue == "on",
        shape,
    })
}

fn length_validator() -> FieldValidator {
    FieldValidator::new(
        vec![Rule::Required, Rule::Number, Rule::Min(1.0), Rule::Max(99.0)],
        "count",
    )
}

fn dimension_validator(label: &str) -> FieldValidator {
    FieldValidator::new(
        vec![Rule::Required, Rule::Number, Rule::Min(1.0), Rule::Max(9999.0)],
        label,
    )
}

fn text_size_validator() -> FieldValidator {
    FieldValidator::new(
        vec![Rule::Required, Rule::Number, Rule::Min(1.0), Rule::Max(300.0)],
        "text size(px)",
    )
}

fn color_validator(label: &str) -> FieldValidator {
    FieldValidator::new(vec![Rule::Color], label)
}

fn shape_validator() -> FieldValidator {
    FieldValidator::new(
        vec![Rule::OneOf(Shape::NAMES.iter().map(|s| s.to_string()).collect())],
        "shape",
    )
}

/// Parse a validated numeric field, truncating toward zero.
fn numeric(value: &str) -> u32 {
    value.parse::<f64>().map(|n| n as u32).unwrap_or(0)
}

fn parse_color_field(
    field: &'static str,
    label: &str,
    value: &str,
    issues: &mut Vec<FieldIssues>,
) -> color::Rgb {
    match color::parse_color(value) {
        Ok(parsed) => parsed,
        Err(_) => {
            // Color rules skip empty strings, so an empty color field passes
            // validation but still cannot reach Inputs
            push_issue(
                issues,
                field,
                format!("{} is not a color code ({})", label, value),
            );
            color::Rgb::new(0, 0, 0)
        }
    }
}

fn push_issue(issues: &mut Vec<FieldIssues>, field: &'static str, message: String) {
    if issues.iter().any(|issue| issue.field == field) {
        return;
    }
    issues.push(FieldIssues {
        field,
        errors: vec![ValidationError { id: 0, message }],
    });
}
