//! Declarative validation of single string values.
//!
//! A [`FieldValidator`] owns a fixed, ordered rule set and a display label,
//! and re-derives the complete error list for a value on every call. Rules
//! never short-circuit, so one value can carry several errors at once.
//! Every rule except [`Rule::Required`] treats the empty string as valid;
//! only `Required` flags emptiness.

use regex::Regex;
use serde::Serialize;

const COLOR_PATTERN: &str = "^#[0-9a-fA-F]{6}$";
const NUMBER_PATTERN: &str = r"^-?[0-9]+(\.[0-9]+)?$";
const INTEGER_PATTERN: &str = "^-?[0-9]+$";

/// A single validation rule.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// Value must be non-empty.
    Required,
    /// Value must be a 6-hex-digit color code.
    Color,
    /// Value must be a decimal number.
    Number,
    /// Value must be an integer.
    Integer,
    /// Numeric value must be at most the bound.
    Max(f64),
    /// Numeric value must be at least the bound.
    Min(f64),
    /// Value must be one of the listed strings.
    OneOf(Vec<String>),
}

/// One error produced by validation.
///
/// `id` is the ordinal of the error within its report; it exists for stable
/// list rendering and carries no domain meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub id: usize,
    pub message: String,
}

/// Result of validating one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
}

/// Validator for a single form-style field.
///
/// The rule set and label are fixed at construction; regexes compile once
/// here and are reused on every [`validate`](FieldValidator::validate) call.
pub struct FieldValidator {
    label: String,
    rules: Vec<Rule>,
    color_re: Regex,
    number_re: Regex,
    integer_re: Regex,
}

impl FieldValidator {
    pub fn new(rules: Vec<Rule>, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            rules,
            // The patterns are fixed and known-good
            color_re: Regex::new(COLOR_PATTERN).expect("color pattern compiles"),
            number_re: Regex::new(NUMBER_PATTERN).expect("number pattern compiles"),
            integer_re: Regex::new(INTEGER_PATTERN).expect("integer pattern compiles"),
        }
    }

    /// The display label errors are keyed to.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Validate `value` against the full rule set.
    ///
    /// Rules run in a fixed order (required, color, number, integer, max,
    /// min, one-of) and independently of each other. Duplicated `Max`,
    /// `Min`, or `OneOf` rules are honored once each, first match wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use stampgen::validate::{FieldValidator, Rule};
    ///
    /// let validator = FieldValidator::new(vec![Rule::Required, Rule::Number], "count");
    /// assert!(validator.validate("42").valid);
    ///
    /// let report = validator.validate("abc");
    /// assert_eq!(report.errors.len(), 1);
    /// assert_eq!(report.errors[0].message, "count is not a number");
    /// ```
    pub fn validate(&self, value: &str) -> Validation {
        let mut messages: Vec<String> = Vec::new();
        let empty = value.is_empty();

        if self.has(|r| matches!(r, Rule::Required)) && empty {
            messages.push(format!("{} is required", self.label));
        }

        if self.has(|r| matches!(r, Rule::Color)) && !empty && !self.color_re.is_match(value) {
            messages.push(format!("{} is not a color code ({})", self.label, value));
        }

        if self.has(|r| matches!(r, Rule::Number)) && !empty && !self.number_re.is_match(value) {
            messages.push(format!("{} is not a number", self.label));
        }

        if self.has(|r| matches!(r, Rule::Integer)) && !empty && !self.integer_re.is_match(value) {
            messages.push(format!("{} is not an integer", self.label));
        }

        // A value that does not parse as a number fails the bound checks
        // outright; pairing with Rule::Number is the caller's concern.
        if let Some(max) = self.first_max() {
            let within = value.parse::<f64>().map(|n| n <= max).unwrap_or(false);
            if !empty && !within {
                messages.push(format!(
                    "{} must be at most {}",
                    self.label,
                    group_thousands(max)
                ));
            }
        }

        if let Some(min) = self.first_min() {
            let within = value.parse::<f64>().map(|n| n >= min).unwrap_or(false);
            if !empty && !within {
                messages.push(format!(
                    "{} must be at least {}",
                    self.label,
                    group_thousands(min)
                ));
            }
        }

        if let Some(allowed) = self.first_one_of() {
            if !empty && !allowed.iter().any(|entry| entry == value) {
                messages.push(format!("{} is invalid", self.label));
            }
        }

        let errors: Vec<ValidationError> = messages
            .into_iter()
            .enumerate()
            .map(|(id, message)| ValidationError { id, message })
            .collect();

        Validation {
            valid: errors.is_empty(),
            errors,
        }
    }

    fn has(&self, pred: impl Fn(&Rule) -> bool) -> bool {
        self.rules.iter().any(pred)
    }

    fn first_max(&self) -> Option<f64> {
        self.rules.iter().find_map(|r| match r {
            Rule::Max(bound) => Some(*bound),
            _ => None,
        })
    }

    fn first_min(&self) -> Option<f64> {
        self.rules.iter().find_map(|r| match r {
            Rule::Min(bound) => Some(*bound),
            _ => None,
        })
    }

    fn first_one_of(&self) -> Option<&[String]> {
        self.rules.iter().find_map(|r| match r {
            Rule::OneOf(allowed) => Some(allowed.as_slice()),
            _ => None,
        })
    }
}

/// Format a bound with thousands separators for error messages,
/// e.g. `9999` -> `"9,999"`.
fn group_thousands(n: f64) -> String {
    let negative = n < 0.0;
    let text = format!("{}", n.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::new();
    let digits: Vec<char> = int_part.chars().collect();
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit);
    }

    let mut result = String::new();
    if negative {
        result.push('-');
    }
    result.push_str(&grouped);
    if let Some(frac) = frac_part {
        result.push('.');
        result.push_str(frac);
    }
    result
}
