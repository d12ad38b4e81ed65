//! Timeline animation support for the `animstage-rs` project.
//!
//! The module is organized leaves-first:
//!
//! - [`sprite`]: the [`SpriteSpec`] frame-list record and its comma-string
//!   adapter.
//! - [`event`]: time-windowed event descriptions and the pure `static` /
//!   `interp` evaluators.
//! - [`periodic`]: committed-step oscillation state for `periodic` events.
//! - [`sequencer`]: frame selection over a sprite's image handles.
//! - [`timeline`]: timeline / group / stage descriptions and validation.
//! - [`stage`]: the clock state machine and the per-frame dispatch loop.
//! - [`surface`]: the traits a rendering host implements.

mod error;

pub mod event;
pub mod periodic;
pub mod sequencer;
pub mod sprite;
pub mod stage;
pub mod surface;
pub mod timeline;

/// Sentinel `endtime` value marking an event window that never closes.
pub const OPEN_ENDED: f64 = -1.0;

// Re-export unified error types
pub use error::{AnimError, SpecError};

// Re-export main engine types
pub use event::{EventKind, EventSpec, Position};
pub use periodic::PeriodicState;
pub use sequencer::FrameSequencer;
pub use sprite::SpriteSpec;
pub use stage::{Stage, clock::StageClock};
pub use surface::{ImageHandle, Surface};
pub use timeline::{GroupOffset, StageSpec, TimelineSpec};
