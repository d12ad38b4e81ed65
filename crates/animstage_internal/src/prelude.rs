//! Prelude module for `animstage_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use animstage_internal::prelude::*;
//!
//! // Now you can use all common types directly
//! let spec = StageSpec::new(vec![TimelineSpec::new(
//! 	"dot",
//! 	SpriteSpec::single("dot.png"),
//! 	vec![EventSpec::fixed(0.0, OPEN_ENDED, 0.0, 0.0)],
//! )]);
//! let stage: Stage<String> = Stage::new(spec);
//! ```

// Re-export everything from animstage_core::prelude
#[doc(inline)]
pub use animstage_core::prelude::*;

// Re-export the entire animstage_core module for advanced usage
#[doc(inline)]
pub use animstage_core;
