//! This crate provides the timeline evaluation engine for the `animstage-rs` project.
//!
//! # Overview
//!
//! A [`Stage`](anim::Stage) owns a set of named timelines, each describing one
//! sprite's scripted run as a sequence of time-windowed events. Every host
//! frame tick, the stage advances its animation clock, resolves which events
//! are active, computes a position for each, and hands the draw off to the
//! timeline's [`FrameSequencer`](anim::FrameSequencer).
//!
//! The engine never touches a real rendering backend. Hosts supply two
//! collaborators through traits: a [`Surface`](anim::Surface) that can draw an
//! image handle at a position, and an [`ImageHandle`](anim::ImageHandle)
//! constructible from a source identifier.
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```
//! use animstage_core::prelude::*;
//!
//! let spec = StageSpec::new(vec![TimelineSpec::new(
//! 	"logo",
//! 	SpriteSpec::single("logo.png"),
//! 	vec![EventSpec::fixed(0.0, OPEN_ENDED, 40.0, 60.0)],
//! )]);
//!
//! // `String` images and `Vec` surfaces are only useful for tests; a real
//! // host would bring its own handle and surface types.
//! let mut stage: Stage<String> = Stage::new(spec);
//! let mut surface: Vec<(String, f64, f64)> = Vec::new();
//! stage.draw(&mut surface, 1000.0);
//! assert_eq!(surface, vec![("logo.png".to_string(), 40.0, 60.0)]);
//! ```

pub mod anim;

/// `use animstage_core::prelude::*;` to import commonly used items.
pub mod prelude;
