//! Traits a rendering host implements.
//!
//! The engine stays backend-agnostic: it only ever asks a surface to draw an
//! image handle at a position, and only ever asks the host to produce an
//! image handle from a source identifier. Readiness of a handle (loaded or
//! still in flight) is the host's concern; drawing an unready handle must be
//! a no-op on the host side.

/// An image handle constructible from a source identifier.
///
/// Construction is fire-and-forget: the engine never waits for a load to
/// finish and consumes no ready callback.
pub trait ImageHandle {
	/// Creates a handle that starts loading from `source`.
	fn from_source(source: &str) -> Self;
}

/// A 2D drawing surface capable of drawing image handles.
///
/// `draw_image` is the only surface capability the engine uses.
pub trait Surface<I> {
	/// Draws `image` with its top-left corner at `(x, y)`.
	fn draw_image(&mut self, image: &I, x: f64, y: f64);
}

// `String` handles and `Vec` surfaces make the engine testable without a
// rendering backend; real hosts bring their own types.

impl ImageHandle for String {
	fn from_source(source: &str) -> Self {
		source.to_string()
	}
}

impl<I: Clone> Surface<I> for Vec<(I, f64, f64)> {
	fn draw_image(&mut self, image: &I, x: f64, y: f64) {
		self.push((image.clone(), x, y));
	}
}
