//! Data models for stamp jobs and resolved render inputs.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// Background shape of a stamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Circle,
    Rect,
    Pentagon,
    Star,
}

impl Shape {
    /// Accepted job-file spellings, in declaration order.
    pub const NAMES: [&'static str; 4] = ["circle", "rect", "pentagon", "star"];

    pub fn parse(s: &str) -> Option<Shape> {
        match s {
            "circle" => Some(Shape::Circle),
            "rect" => Some(Shape::Rect),
            "pentagon" => Some(Shape::Pentagon),
            "star" => Some(Shape::Star),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Shape::Circle => "circle",
            Shape::Rect => "rect",
            Shape::Pentagon => "pentagon",
            Shape::Star => "star",
        }
    }
}

/// A stamp job as written in the job file: raw form-style strings, exactly
/// as a user would type them. Nothing here is validated yet; that is the
/// `job` module's responsibility. Missing fields take the defaults below.
///
/// The on/off flags use the literal strings `"on"` and `"off"`; anything
/// other than `"on"` resolves to off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StampJob {
    /// Batch size.
    pub length: String,
    /// Surface width in pixels.
    pub width: String,
    /// Surface height in pixels.
    pub height: String,
    /// Caption text; may contain line breaks, one line is drawn per stamp.
    pub text: String,
    /// Caption size in pixels.
    pub text_size: String,
    /// Caption color, `#RRGGBB`.
    pub text_color: String,
    /// Cycle the caption hue across the batch, `"on"`/`"off"`.
    pub text_color_shift_hue: String,
    /// Background color, `#RRGGBB`.
    pub background_color: String,
    /// Cycle the background hue across the batch, `"on"`/`"off"`.
    pub background_color_shift_hue: String,
    /// Background shape, one of [`Shape::NAMES`].
    pub shape: String,
}

impl Default for StampJob {
    fn default() -> Self {
        Self {
            length: "10".to_string(),
            width: "300".to_string(),
            height: "300".to_string(),
            text: "test".to_string(),
            text_size: "100".to_string(),
            text_color: "#000000".to_string(),
            text_color_shift_hue: "on".to_string(),
            background_color: "#FF0000".to_string(),
            background_color_shift_hue: "on".to_string(),
            shape: "circle".to_string(),
        }
    }
}

/// Finalized, typed inputs for one render batch.
///
/// Immutable per render call. Colors are parsed and the shape is a closed
/// enum before this value exists, so the renderer never sees malformed
/// input. Built by `job::resolve`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inputs {
    pub length: u32,
    pub width: u32,
    pub height: u32,
    pub text: String,
    pub text_size: u32,
    pub text_color: Rgb,
    pub text_color_shift_hue: bool,
    pub background_color: Rgb,
    pub background_color_shift_hue: bool,
    pub shape: Shape,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_parse() {
        assert_eq!(Shape::parse("circle"), Some(Shape::Circle));
        assert_eq!(Shape::parse("rect"), Some(Shape::Rect));
        assert_eq!(Shape::parse("pentagon"), Some(Shape::Pentagon));
        assert_eq!(Shape::parse("star"), Some(Shape::Star));
        // "heart" is not part of the accepted set
        assert_eq!(Shape::parse("heart"), None);
        assert_eq!(Shape::parse(""), None);
        assert_eq!(Shape::parse("Circle"), None);
    }

    #[test]
    fn test_shape_names_round_trip() {
        for name in Shape::NAMES {
            let shape = Shape::parse(name).unwrap();
            assert_eq!(shape.as_str(), name);
        }
    }

    #[test]
    fn test_shape_serde_lowercase() {
        let json = serde_json::to_string(&Shape::Pentagon).unwrap();
        assert_eq!(json, r#""pentagon""#);
        let parsed: Shape = serde_json::from_str(r#""star""#).unwrap();
        assert_eq!(parsed, Shape::Star);
    }

    #[test]
    fn test_job_defaults() {
        let job = StampJob::default();
        assert_eq!(job.length, "10");
        assert_eq!(job.width, "300");
        assert_eq!(job.height, "300");
        assert_eq!(job.text, "test");
        assert_eq!(job.text_size, "100");
        assert_eq!(job.text_color, "#000000");
        assert_eq!(job.text_color_shift_hue, "on");
        assert_eq!(job.background_color, "#FF0000");
        assert_eq!(job.background_color_shift_hue, "on");
        assert_eq!(job.shape, "circle");
    }

    #[test]
    fn test_job_partial_deserialization_fills_defaults() {
        let job: StampJob = serde_json::from_str(r#"{"length": "3", "shape": "star"}"#).unwrap();
        assert_eq!(job.length, "3");
        assert_eq!(job.shape, "star");
        assert_eq!(job.width, "300");
        assert_eq!(job.text, "test");
    }

    #[test]
    fn test_job_round_trip() {
        let job = StampJob {
            length: "2".to_string(),
            text: "hi\nbye".to_string(),
            ..StampJob::default()
        };
        let json = serde_json::to_string(&job).unwrap();
        let parsed: StampJob = serde_json::from_str(&json).unwrap();
        assert_eq!(job, parsed);
    }
}
