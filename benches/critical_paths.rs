//! Criterion benchmarks for Stampgen critical paths
//!
//! Benchmarks the core performance-critical operations:
//! - Color: hue rotation
//! - Validator: full rule-set evaluation
//! - Renderer: one stamp per shape at form defaults

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stampgen::color::{shift_hue, Rgb};
use stampgen::models::{Inputs, Shape};
use stampgen::renderer::render_stamp;
use stampgen::validate::{FieldValidator, Rule};

fn bench_inputs(shape: Shape) -> Inputs {
    Inputs {
        length: 10,
        width: 300,
        height: 300,
        text: "BENCH\nMARK".to_string(),
        text_size: 48,
        text_color: Rgb::new(0, 0, 0),
        text_color_shift_hue: true,
        background_color: Rgb::new(255, 0, 0),
        background_color_shift_hue: true,
        shape,
    }
}

fn bench_shift_hue(c: &mut Criterion) {
    c.bench_function("color/shift_hue", |b| {
        b.iter(|| shift_hue(black_box(Rgb::new(200, 120, 40)), black_box(137.0)))
    });
}

fn bench_validate(c: &mut Criterion) {
    let validator = FieldValidator::new(
        vec![Rule::Required, Rule::Number, Rule::Min(1.0), Rule::Max(9999.0)],
        "width(px)",
    );

    let mut group = c.benchmark_group("validate");
    group.bench_function("passing", |b| b.iter(|| validator.validate(black_box("300"))));
    group.bench_function("failing", |b| b.iter(|| validator.validate(black_box("abc"))));
    group.bench_function("empty", |b| b.iter(|| validator.validate(black_box(""))));
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.sample_size(20);
    for shape in [Shape::Circle, Shape::Rect, Shape::Pentagon, Shape::Star] {
        let inputs = bench_inputs(shape);
        group.bench_with_input(
            BenchmarkId::from_parameter(shape.as_str()),
            &inputs,
            |b, inputs| b.iter(|| render_stamp(black_box(inputs), black_box(3))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_shift_hue, bench_validate, bench_render);
criterion_main!(benches);
