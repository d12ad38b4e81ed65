#![allow(clippy::single_component_path_imports)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `animstage-rs` is a timeline-driven sprite animation engine: a declarative
//! set of timed events decides, for any elapsed time, which image frame to
//! show and at what position on a host-supplied 2D drawing surface.
//!
pub use animstage_internal::*;
