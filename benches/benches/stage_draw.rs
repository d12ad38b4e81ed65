//! Benchmark suite for per-frame stage evaluation
//!
//! Measures the draw hot path: clock update, periodic advancement, event
//! window resolution, and position evaluation across many timelines.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use std::hint::black_box;

use animstage_core::anim::Stage;
use animstage_benches::{CountingSurface, generate_stage_spec};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Benchmark a full draw pass at varying stage sizes
fn bench_draw_pass(c: &mut Criterion) {
	let mut group = c.benchmark_group("stage_draw");

	for timelines in [1usize, 16, 128, 1024] {
		let spec = generate_stage_spec(timelines);
		group.throughput(Throughput::Elements(timelines as u64));
		group.bench_with_input(
			BenchmarkId::new("draw", timelines),
			&spec,
			|b, spec| {
				let mut stage: Stage<String> = Stage::new(spec.clone());
				let mut surface = CountingSurface::default();
				let mut now = 0.0;
				b.iter(|| {
					now += 16.0;
					stage.draw(&mut surface, black_box(now));
					black_box(surface.draws)
				});
			},
		);
	}

	group.finish();
}

/// Benchmark the reset path hosts hit on auto-restart
fn bench_initialize(c: &mut Criterion) {
	let spec = generate_stage_spec(128);
	let mut stage: Stage<String> = Stage::new(spec);

	c.bench_function("stage_initialize_128", |b| {
		b.iter(|| {
			stage.initialize();
			black_box(stage.elapsed())
		});
	});
}

criterion_group!(benches, bench_draw_pass, bench_initialize);
criterion_main!(benches);
