//! Time-windowed event descriptions and the pure position evaluators.
//!
//! An event is active over a half-open window `[starttime, endtime)`; an
//! `endtime` of [`OPEN_ENDED`](crate::anim::OPEN_ENDED) never closes. While
//! active, each event variant produces a 2D position for its sprite:
//!
//! - `static`: a fixed position.
//! - `interp`: a componentwise linear sweep across the window.
//! - `periodic`: a stepped oscillation whose mutable progress lives in
//!   [`PeriodicState`](crate::anim::PeriodicState), not here.

use serde::{Deserialize, Serialize};

use super::OPEN_ENDED;

/// A 2D position produced by an event evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
	/// Horizontal coordinate
	pub x: f64,
	/// Vertical coordinate
	pub y: f64,
}

impl Position {
	/// Creates a position from its coordinates.
	pub fn new(x: f64, y: f64) -> Self {
		Self {
			x,
			y,
		}
	}

	/// Returns this position translated by `(dx, dy)`.
	pub fn translated(self, dx: f64, dy: f64) -> Self {
		Self::new(self.x + dx, self.y + dy)
	}
}

/// One time-windowed rule in a timeline's event list.
///
/// Serialized field names follow the host-side description format
/// (`starttime`, `endtime`, and a `type` tag selecting the variant):
///
/// ```
/// use animstage_core::anim::{EventKind, EventSpec};
///
/// let event: EventSpec = serde_json::from_str(
/// 	r#"{"type": "static", "starttime": 0, "endtime": -1, "x": 10, "y": 20}"#,
/// )
/// .unwrap();
/// assert!(event.is_open_ended());
/// assert!(matches!(event.kind, EventKind::Static { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSpec {
	/// Start of the active window (inclusive)
	#[serde(rename = "starttime")]
	pub start_time: f64,
	/// End of the active window (exclusive), or [`OPEN_ENDED`]
	#[serde(rename = "endtime", default = "open_ended")]
	pub end_time: f64,
	/// The position rule applied while the window is active
	#[serde(flatten)]
	pub kind: EventKind,
}

fn open_ended() -> f64 {
	OPEN_ENDED
}

/// The position rule carried by an [`EventSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EventKind {
	/// Fixed position for the window's duration
	Static {
		/// Horizontal position
		x: f64,
		/// Vertical position
		y: f64,
	},

	/// Position linearly interpolated across the window
	Interp {
		/// Horizontal position at `starttime`
		#[serde(rename = "startx")]
		start_x: f64,
		/// Vertical position at `starttime`
		#[serde(rename = "starty")]
		start_y: f64,
		/// Horizontal position at `endtime`
		#[serde(rename = "endx")]
		end_x: f64,
		/// Vertical position at `endtime`
		#[serde(rename = "endy")]
		end_y: f64,
	},

	/// Stepped oscillation: advances by `(dx, dy)` once per full period,
	/// sweeping the step visibly during alternate half-periods
	Periodic {
		/// Initial horizontal baseline
		#[serde(rename = "startx")]
		start_x: f64,
		/// Initial vertical baseline
		#[serde(rename = "starty")]
		start_y: f64,
		/// Horizontal step per full period
		dx: f64,
		/// Vertical step per full period
		dy: f64,
		/// Period length in the host's time unit
		period: f64,
	},
}

impl EventSpec {
	/// Creates a `static` event.
	pub fn fixed(start_time: f64, end_time: f64, x: f64, y: f64) -> Self {
		Self {
			start_time,
			end_time,
			kind: EventKind::Static {
				x,
				y,
			},
		}
	}

	/// Creates an `interp` event sweeping from `(start_x, start_y)` to
	/// `(end_x, end_y)` across the window.
	pub fn interp(
		start_time: f64,
		end_time: f64,
		start_x: f64,
		start_y: f64,
		end_x: f64,
		end_y: f64,
	) -> Self {
		Self {
			start_time,
			end_time,
			kind: EventKind::Interp {
				start_x,
				start_y,
				end_x,
				end_y,
			},
		}
	}

	/// Creates a `periodic` event stepping by `(dx, dy)` every full period.
	pub fn periodic(
		start_time: f64,
		end_time: f64,
		start_x: f64,
		start_y: f64,
		dx: f64,
		dy: f64,
		period: f64,
	) -> Self {
		Self {
			start_time,
			end_time,
			kind: EventKind::Periodic {
				start_x,
				start_y,
				dx,
				dy,
				period,
			},
		}
	}

	/// Returns `true` when the window never closes.
	pub fn is_open_ended(&self) -> bool {
		self.end_time == OPEN_ENDED
	}

	/// Active-window test: `elapsed >= starttime` and, unless open-ended,
	/// `elapsed < endtime`.
	pub fn is_active(&self, elapsed: f64) -> bool {
		elapsed >= self.start_time && (self.is_open_ended() || elapsed < self.end_time)
	}

	/// Position of an `interp` event at `elapsed`.
	///
	/// Returns `None` for non-interp events and for windows that cannot be
	/// interpolated (open-ended or inverted); such events draw nothing rather
	/// than produce NaN positions. [`StageSpec::validate`] reports them.
	///
	/// [`StageSpec::validate`]: crate::anim::StageSpec::validate
	pub fn interp_position(&self, elapsed: f64) -> Option<Position> {
		let EventKind::Interp {
			start_x,
			start_y,
			end_x,
			end_y,
		} = self.kind
		else {
			return None;
		};

		if self.is_open_ended() || self.end_time <= self.start_time {
			return None;
		}

		let r = (elapsed - self.start_time) / (self.end_time - self.start_time);
		Some(Position::new(
			start_x + (end_x - start_x) * r,
			start_y + (end_y - start_y) * r,
		))
	}

	/// Name of the variant, as it appears in the `type` tag.
	pub fn kind_name(&self) -> &'static str {
		match self.kind {
			EventKind::Static {
				..
			} => "static",
			EventKind::Interp {
				..
			} => "interp",
			EventKind::Periodic {
				..
			} => "periodic",
		}
	}
}
