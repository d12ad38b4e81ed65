//! Frame selection over a sprite's image handles.

use super::sprite::SpriteSpec;
use super::surface::{ImageHandle, Surface};

/// Owns one sprite's image handles and selects which frame to draw for a
/// given elapsed time.
///
/// Handles are built once from the sprite description and live for the
/// sequencer's lifetime; there is no caching or eviction.
///
/// # Examples
///
/// ```
/// use animstage_core::anim::{FrameSequencer, SpriteSpec};
///
/// let spec: SpriteSpec = "a.png,b.png,c.png,100".parse().unwrap();
/// let seq: FrameSequencer<String> = FrameSequencer::from_spec(&spec);
///
/// assert_eq!(seq.frame_index(0.0), 0);
/// assert_eq!(seq.frame_index(150.0), 1);
/// assert_eq!(seq.frame_index(320.0), 0); // cycles with period 3 * 100
/// ```
#[derive(Debug, Clone)]
pub struct FrameSequencer<I> {
	/// Image handles in display order
	frames: Vec<I>,
	/// Per-frame display interval; `0` pins frame 0
	interval: f64,
}

impl<I: ImageHandle> FrameSequencer<I> {
	/// Builds one handle per listed source and stores the interval.
	pub fn from_spec(spec: &SpriteSpec) -> Self {
		Self {
			frames: spec.frames.iter().map(|src| I::from_source(src)).collect(),
			interval: spec.interval,
		}
	}
}

impl<I> FrameSequencer<I> {
	/// Number of frames owned by this sequencer.
	pub fn frame_count(&self) -> usize {
		self.frames.len()
	}

	/// Per-frame display interval.
	pub fn interval(&self) -> f64 {
		self.interval
	}

	/// Index of the frame to display at `elapsed`.
	///
	/// With interval `0` (or a single frame) this is always `0`. Otherwise
	/// the index is `floor(elapsed / interval) mod frame_count`, with `floor`
	/// rounding toward negative infinity and a Euclidean remainder, so a
	/// negative `elapsed` (possible before a timeline's first window in
	/// degenerate configurations) still selects a well-defined frame.
	pub fn frame_index(&self, elapsed: f64) -> usize {
		if self.interval == 0.0 || self.frames.len() <= 1 {
			return 0;
		}

		let tick = (elapsed / self.interval).floor() as i64;
		tick.rem_euclid(self.frames.len() as i64) as usize
	}

	/// Draws the frame selected for `elapsed` at `(x, y)`.
	///
	/// A sequencer with no frames draws nothing; the surrounding frame is
	/// never aborted.
	pub fn draw<S: Surface<I>>(&self, surface: &mut S, elapsed: f64, x: f64, y: f64) {
		if let Some(frame) = self.frames.get(self.frame_index(elapsed)) {
			surface.draw_image(frame, x, y);
		}
	}
}
