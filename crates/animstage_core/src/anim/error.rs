//! Error types for stage description parsing and validation.

use thiserror::Error;

/// A single configuration finding reported by
/// [`StageSpec::validate`](crate::anim::StageSpec::validate) or by the
/// comma-string sprite adapter.
///
/// Findings never abort a draw pass. At draw time a misconfigured event
/// degrades to "nothing drawn for that event this frame"; `validate` exists
/// so hosts can surface the same problems at load time instead of chasing
/// silent no-ops in the per-frame hot path.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SpecError {
	/// Comma-string sprite spec whose trailing element is not a number
	#[error("sprite spec `{spec}`: trailing frame interval `{tail}` is not numeric")]
	BadInterval {
		/// The full spec string as supplied
		spec: String,
		/// The element that failed to parse as an interval
		tail: String,
	},

	/// Comma-string sprite spec listing an interval but no image sources
	#[error("sprite spec `{spec}`: no image sources before the frame interval")]
	NoSources {
		/// The full spec string as supplied
		spec: String,
	},

	/// Timeline whose sprite has an empty frame list
	#[error("timeline `{id}`: sprite frame list is empty")]
	EmptyFrameList {
		/// Owning timeline id
		id: String,
	},

	/// Multi-frame sprite with a zero or negative frame interval
	#[error("timeline `{id}`: multi-frame sprite needs a positive interval, got {interval}")]
	NonPositiveInterval {
		/// Owning timeline id
		id: String,
		/// The offending interval value
		interval: f64,
	},

	/// `interp` event whose window never closes (`endtime` open-ended)
	#[error("timeline `{id}` event {index}: interp events need a closed window")]
	OpenEndedInterp {
		/// Owning timeline id
		id: String,
		/// Index of the event within the timeline
		index: usize,
	},

	/// `interp` event whose window ends at or before it starts
	#[error("timeline `{id}` event {index}: window end {end} is not after start {start}")]
	InvertedWindow {
		/// Owning timeline id
		id: String,
		/// Index of the event within the timeline
		index: usize,
		/// Window start time
		start: f64,
		/// Window end time
		end: f64,
	},

	/// `periodic` event with a zero or negative period
	#[error("timeline `{id}` event {index}: period must be positive, got {period}")]
	NonPositivePeriod {
		/// Owning timeline id
		id: String,
		/// Index of the event within the timeline
		index: usize,
		/// The offending period value
		period: f64,
	},

	/// Two timelines sharing the same id
	#[error("duplicate timeline id `{id}`")]
	DuplicateId {
		/// The id that appears more than once
		id: String,
	},

	/// Timeline naming a group absent from the group table
	#[error("timeline `{id}`: unknown group `{group}` (offset defaults to (0, 0))")]
	UnknownGroup {
		/// Owning timeline id
		id: String,
		/// The unresolved group name
		group: String,
	},
}

/// Unified error type for the animation engine.
#[derive(Debug, Error)]
pub enum AnimError {
	/// A stage description failed validation
	#[error("stage description has {} configuration problem(s)", .0.len())]
	InvalidSpec(Vec<SpecError>),

	/// A single sprite spec failed to parse
	#[error(transparent)]
	Spec(#[from] SpecError),
}

impl AnimError {
	/// Returns the individual findings behind this error.
	pub fn findings(&self) -> &[SpecError] {
		match self {
			Self::InvalidSpec(findings) => findings,
			Self::Spec(finding) => std::slice::from_ref(finding),
		}
	}
}
