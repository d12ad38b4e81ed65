//! This module is separated into its own crate to keep the `animstage-rs` facade thin, and should not be used directly.

/// `use animstage_rs::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export animstage_core for convenience
pub use animstage_core;

// Re-export commonly used types at crate root
pub use animstage_core::anim::{
	AnimError, EventKind, EventSpec, FrameSequencer, GroupOffset, ImageHandle, OPEN_ENDED,
	SpecError, SpriteSpec, Stage, StageSpec, Surface, TimelineSpec,
};
