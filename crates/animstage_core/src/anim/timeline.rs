//! Timeline, group, and stage descriptions.
//!
//! These are the immutable templates a host hands to
//! [`Stage::new`](crate::anim::Stage::new). All mutable animation progress
//! lives in the stage's runtime state; the descriptions themselves are never
//! touched after construction, which is what makes a stage reset a plain
//! rebuild instead of a deep clone.

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{AnimError, SpecError};
use super::event::{EventKind, EventSpec};
use super::sprite::SpriteSpec;

/// Static pixel offset applied to every timeline that names this group.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GroupOffset {
	/// Horizontal offset
	pub x: f64,
	/// Vertical offset
	pub y: f64,
}

impl GroupOffset {
	/// Creates a group offset from its components.
	pub fn new(x: f64, y: f64) -> Self {
		Self {
			x,
			y,
		}
	}
}

/// One sprite's scripted run: an id, a sprite, an optional group, and an
/// ordered list of time-windowed events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineSpec {
	/// Unique key for this timeline (also keys its frame sequencer)
	pub id: String,
	/// The sprite drawn by this timeline
	pub src: SpriteSpec,
	/// Group whose offset translates every position, if any
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub group: Option<String>,
	/// Events in declared evaluation order
	#[serde(default)]
	pub events: Vec<EventSpec>,
}

impl TimelineSpec {
	/// Creates a timeline without a group.
	pub fn new<S: Into<String>>(id: S, src: SpriteSpec, events: Vec<EventSpec>) -> Self {
		Self {
			id: id.into(),
			src,
			group: None,
			events,
		}
	}

	/// Creates a timeline belonging to a named group.
	pub fn with_group<S: Into<String>, G: Into<String>>(
		id: S,
		src: SpriteSpec,
		group: G,
		events: Vec<EventSpec>,
	) -> Self {
		Self {
			id: id.into(),
			src,
			group: Some(group.into()),
			events,
		}
	}
}

/// Complete stage description: timelines, group offsets, and the optional
/// auto-restart horizon.
///
/// # Examples
///
/// Deserializing the host-side description format:
///
/// ```
/// use animstage_core::anim::StageSpec;
///
/// let spec: StageSpec = serde_json::from_str(
/// 	r#"{
/// 	    "timelines": [{
/// 	        "id": "cloud",
/// 	        "src": "cloud.png",
/// 	        "group": "sky",
/// 	        "events": [{"type": "static", "starttime": 0, "endtime": -1, "x": 10, "y": 20}]
/// 	    }],
/// 	    "groups": {"sky": {"x": 5, "y": 5}},
/// 	    "restartAfter": 60000
/// 	}"#,
/// )
/// .unwrap();
///
/// assert!(spec.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StageSpec {
	/// Timelines in declared draw order
	pub timelines: Vec<TimelineSpec>,
	/// Group offsets keyed by name
	#[serde(default)]
	pub groups: HashMap<String, GroupOffset>,
	/// Animation-local time after which the stage restarts from scratch;
	/// `None` or a non-positive value disables auto-restart
	#[serde(rename = "restartAfter", default, skip_serializing_if = "Option::is_none")]
	pub restart_after: Option<f64>,
}

impl StageSpec {
	/// Creates a stage description with no groups and no auto-restart.
	pub fn new(timelines: Vec<TimelineSpec>) -> Self {
		Self {
			timelines,
			groups: HashMap::new(),
			restart_after: None,
		}
	}

	/// Adds a named group offset.
	#[must_use]
	pub fn with_group<S: Into<String>>(mut self, name: S, offset: GroupOffset) -> Self {
		self.groups.insert(name.into(), offset);
		self
	}

	/// Enables auto-restart once `elapsed` exceeds `restart_after`.
	#[must_use]
	pub fn with_restart_after(mut self, restart_after: f64) -> Self {
		self.restart_after = Some(restart_after);
		self
	}

	/// Resolves the group offset for a timeline.
	///
	/// An absent or unknown group resolves to `(0, 0)`.
	pub fn group_offset(&self, timeline: &TimelineSpec) -> GroupOffset {
		timeline
			.group
			.as_deref()
			.and_then(|name| self.groups.get(name))
			.copied()
			.unwrap_or_default()
	}

	/// Checks the whole description and reports every configuration problem
	/// found.
	///
	/// Validation is advisory: the draw path tolerates every finding by
	/// skipping the affected event or timeline, but hosts get far better
	/// diagnostics surfacing problems here than from per-frame no-ops.
	pub fn validate(&self) -> Result<(), AnimError> {
		let findings = self.findings();
		if findings.is_empty() {
			Ok(())
		} else {
			for finding in &findings {
				log::warn!("stage description: {finding}");
			}
			Err(AnimError::InvalidSpec(findings))
		}
	}

	fn findings(&self) -> Vec<SpecError> {
		let mut findings = Vec::new();
		let mut seen_ids: Vec<&str> = Vec::new();

		for timeline in &self.timelines {
			let id = timeline.id.as_str();

			if seen_ids.contains(&id) {
				findings.push(SpecError::DuplicateId {
					id: id.to_string(),
				});
			} else {
				seen_ids.push(id);
			}

			if timeline.src.frames.is_empty() {
				findings.push(SpecError::EmptyFrameList {
					id: id.to_string(),
				});
			}
			if timeline.src.frames.len() > 1 && timeline.src.interval <= 0.0 {
				findings.push(SpecError::NonPositiveInterval {
					id: id.to_string(),
					interval: timeline.src.interval,
				});
			}

			if let Some(group) = timeline.group.as_deref()
				&& !self.groups.contains_key(group)
			{
				findings.push(SpecError::UnknownGroup {
					id: id.to_string(),
					group: group.to_string(),
				});
			}

			for (index, event) in timeline.events.iter().enumerate() {
				match event.kind {
					EventKind::Interp {
						..
					} => {
						if event.is_open_ended() {
							findings.push(SpecError::OpenEndedInterp {
								id: id.to_string(),
								index,
							});
						} else if event.end_time <= event.start_time {
							findings.push(SpecError::InvertedWindow {
								id: id.to_string(),
								index,
								start: event.start_time,
								end: event.end_time,
							});
						}
					}
					EventKind::Periodic {
						period, ..
					} => {
						if period <= 0.0 {
							findings.push(SpecError::NonPositivePeriod {
								id: id.to_string(),
								index,
								period,
							});
						}
					}
					EventKind::Static {
						..
					} => {}
				}
			}
		}

		findings
	}
}

impl FromStr for StageSpec {
	type Err = serde_json::Error;

	/// Parses a JSON stage description.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		serde_json::from_str(s)
	}
}
