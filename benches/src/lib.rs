//! Benchmark helper utilities for animstage-rs
//!
//! This module provides synthetic stage descriptions and a draw-call-counting
//! surface for benchmarking the per-frame evaluation hot path.

use animstage_core::anim::{
	EventSpec, GroupOffset, OPEN_ENDED, SpriteSpec, StageSpec, Surface, TimelineSpec,
};

/// Surface that counts draw calls without recording them.
#[derive(Debug, Default)]
pub struct CountingSurface {
	/// Number of draw calls received so far
	pub draws: u64,
}

impl<I> Surface<I> for CountingSurface {
	fn draw_image(&mut self, _image: &I, _x: f64, _y: f64) {
		self.draws += 1;
	}
}

/// Generates a stage description with `timelines` sprites, each carrying one
/// event of every variant so all three evaluators run per frame.
pub fn generate_stage_spec(timelines: usize) -> StageSpec {
	let specs = (0..timelines)
		.map(|i| {
			let x = (i as f64) * 10.0;
			TimelineSpec::with_group(
				format!("sprite-{i}"),
				SpriteSpec::new(vec!["f0.png", "f1.png", "f2.png"], 16.0),
				"all",
				vec![
					EventSpec::fixed(0.0, OPEN_ENDED, x, 0.0),
					EventSpec::interp(0.0, 10_000.0, x, 0.0, x + 100.0, 50.0),
					EventSpec::periodic(0.0, OPEN_ENDED, x, 100.0, 5.0, 0.0, 250.0),
				],
			)
		})
		.collect();

	StageSpec::new(specs).with_group("all", GroupOffset::new(3.0, 7.0))
}
