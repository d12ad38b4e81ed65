//! Prelude module for `animstage_core`.
//!
//! This module provides a convenient way to import commonly used types,
//! traits, and constants.
//!
//! # Examples
//!
//! ```
//! use animstage_core::prelude::*;
//!
//! let spec = StageSpec::new(vec![TimelineSpec::new(
//! 	"dot",
//! 	SpriteSpec::single("dot.png"),
//! 	vec![EventSpec::fixed(0.0, OPEN_ENDED, 0.0, 0.0)],
//! )]);
//! let stage: Stage<String> = Stage::new(spec);
//! ```

// Animation module types
#[doc(inline)]
pub use crate::anim::{
	// Constants
	OPEN_ENDED,

	// Errors
	AnimError,

	// Events
	EventKind,
	EventSpec,

	// Sequencing
	FrameSequencer,
	GroupOffset,

	// Host traits
	ImageHandle,
	PeriodicState,
	Position,

	SpecError,
	SpriteSpec,
	// Stage types
	Stage,
	StageClock,
	StageSpec,
	Surface,
	TimelineSpec,
};

// Re-export the anim module for advanced usage
#[doc(inline)]
pub use crate::anim;
