//! Stampgen - Library for generating batches of stamp images
//!
//! This library provides functionality to:
//! - Validate raw form-style job fields against declarative rule sets
//! - Resolve a JSON5 job file into typed render inputs
//! - Render each batch item to a PNG image, cycling the hue across the batch

pub mod cli;
pub mod color;
pub mod font;
pub mod job;
pub mod models;
pub mod output;
pub mod renderer;
pub mod shapes;
pub mod validate;
