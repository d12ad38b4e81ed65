//! The stage: clock management and per-frame timeline dispatch.

pub mod clock;

use std::collections::HashMap;

use super::event::{EventKind, Position};
use super::periodic::PeriodicState;
use super::sequencer::FrameSequencer;
use super::surface::{ImageHandle, Surface};
use super::timeline::StageSpec;
use clock::StageClock;

/// Drives a set of timelines against a host-supplied clock and surface.
///
/// The stage owns an immutable [`StageSpec`] and a parallel runtime layer
/// rebuilt by [`initialize`](Stage::initialize): one [`FrameSequencer`] per
/// timeline id and one [`PeriodicState`] per periodic event, keyed by
/// (timeline index, event index). Drawing never mutates the description.
///
/// The host drives the stage once per display frame with monotonically
/// non-decreasing timestamps; all calls into one stage must come from a
/// single writer. See the crate docs for a complete example.
#[derive(Debug)]
pub struct Stage<I> {
	/// Immutable description templates
	spec: StageSpec,
	/// One sequencer per timeline id
	sequencers: HashMap<String, FrameSequencer<I>>,
	/// Periodic progress keyed by (timeline index, event index)
	periodic: HashMap<(usize, usize), PeriodicState>,
	/// The animation clock
	clock: StageClock,
}

impl<I: ImageHandle> Stage<I> {
	/// Creates a stage from a description and builds its runtime state.
	pub fn new(spec: StageSpec) -> Self {
		let mut stage = Self {
			spec,
			sequencers: HashMap::new(),
			periodic: HashMap::new(),
			clock: StageClock::new(),
		};
		stage.initialize();
		stage
	}

	/// Rebuilds all runtime state from the immutable templates.
	///
	/// Fresh sequencers, fresh periodic progress, clock back to
	/// uninitialized. Called on construction and on auto-restart; hosts may
	/// also call it directly to rewind the whole stage.
	pub fn initialize(&mut self) {
		log::debug!("stage initialize: {} timeline(s)", self.spec.timelines.len());
		self.clock.reset();
		self.sequencers.clear();
		self.periodic.clear();

		for (ti, timeline) in self.spec.timelines.iter().enumerate() {
			self.sequencers
				.insert(timeline.id.clone(), FrameSequencer::from_spec(&timeline.src));

			for (ei, event) in timeline.events.iter().enumerate() {
				if let EventKind::Periodic {
					start_x,
					start_y,
					..
				} = event.kind
				{
					self.periodic.insert((ti, ei), PeriodicState::new(start_x, start_y));
				}
			}
		}
	}

	/// Draws one frame at host timestamp `now`.
	///
	/// Advances the clock, honors the auto-restart horizon, commits periodic
	/// steps, then draws every active event of every timeline in declared
	/// order. Multiple simultaneously active events on one timeline each
	/// issue their own draw call.
	///
	/// When `elapsed` trips `restart_after`, the stage reinitializes first
	/// and this same call renders the fresh state at `elapsed = 0`, so the
	/// elapsed time observed by any draw never exceeds the horizon.
	pub fn draw<S: Surface<I>>(&mut self, surface: &mut S, now: f64) {
		self.clock.tick(now);

		if let Some(limit) = self.spec.restart_after
			&& limit > 0.0
			&& self.clock.elapsed() > limit
		{
			log::debug!("stage restart: elapsed {} exceeded {limit}", self.clock.elapsed());
			self.initialize();
			self.clock.tick(now);
		}

		let elapsed = self.clock.elapsed();
		self.advance_periodic(elapsed);

		for (ti, timeline) in self.spec.timelines.iter().enumerate() {
			let offset = self.spec.group_offset(timeline);
			let Some(sequencer) = self.sequencers.get(timeline.id.as_str()) else {
				continue;
			};

			for (ei, event) in timeline.events.iter().enumerate() {
				if !event.is_active(elapsed) {
					continue;
				}

				let position = match event.kind {
					EventKind::Static {
						x,
						y,
					} => Some(Position::new(x, y)),
					EventKind::Interp {
						..
					} => event.interp_position(elapsed),
					EventKind::Periodic {
						dx,
						dy,
						period,
						..
					} if period > 0.0 => self
						.periodic
						.get(&(ti, ei))
						.map(|state| state.position(elapsed, dx, dy, period)),
					// Misconfigured period: draw nothing for this event.
					EventKind::Periodic {
						..
					} => None,
				};

				let Some(position) = position else {
					continue;
				};
				let position = position.translated(offset.x, offset.y);
				sequencer.draw(surface, elapsed, position.x, position.y);
			}
		}
	}

	/// Freezes or resumes the animation clock at host timestamp `now`.
	///
	/// Resuming preserves animation-local time, so nothing jumps.
	pub fn toggle_pause(&mut self, now: f64) {
		self.clock.toggle_pause(now);
	}

	/// The stage description.
	pub fn spec(&self) -> &StageSpec {
		&self.spec
	}

	/// Animation-local time as of the last draw.
	pub fn elapsed(&self) -> f64 {
		self.clock.elapsed()
	}

	/// Whether the clock is frozen.
	pub fn is_paused(&self) -> bool {
		self.clock.is_paused()
	}

	/// Commits pending periodic steps for this frame, before any drawing.
	fn advance_periodic(&mut self, elapsed: f64) {
		for (ti, timeline) in self.spec.timelines.iter().enumerate() {
			for (ei, event) in timeline.events.iter().enumerate() {
				let EventKind::Periodic {
					dx,
					dy,
					period,
					..
				} = event.kind
				else {
					continue;
				};

				if period <= 0.0 || !event.is_active(elapsed) {
					continue;
				}
				if let Some(state) = self.periodic.get_mut(&(ti, ei)) {
					state.advance(elapsed, dx, dy, period);
				}
			}
		}
	}

	#[cfg(test)]
	fn periodic_state(&self, ti: usize, ei: usize) -> Option<&PeriodicState> {
		self.periodic.get(&(ti, ei))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::anim::{EventSpec, GroupOffset, OPEN_ENDED, SpriteSpec, TimelineSpec};

	type Drawn = Vec<(String, f64, f64)>;

	fn draw_at(stage: &mut Stage<String>, now: f64) -> Drawn {
		let mut surface: Drawn = Vec::new();
		stage.draw(&mut surface, now);
		surface
	}

	fn static_stage() -> Stage<String> {
		let spec = StageSpec::new(vec![TimelineSpec::with_group(
			"hero",
			SpriteSpec::single("hero.png"),
			"party",
			vec![EventSpec::fixed(0.0, OPEN_ENDED, 10.0, 20.0)],
		)])
		.with_group("party", GroupOffset::new(5.0, 5.0));
		Stage::new(spec)
	}

	#[test]
	fn test_static_event_with_group_offset() {
		let mut stage = static_stage();
		for now in [0.0, 100.0, 99999.0] {
			let drawn = draw_at(&mut stage, now);
			assert_eq!(drawn, vec![("hero.png".to_string(), 15.0, 25.0)]);
		}
	}

	#[test]
	fn test_interp_midpoint() {
		let spec = StageSpec::new(vec![TimelineSpec::new(
			"dot",
			SpriteSpec::single("dot.png"),
			vec![EventSpec::interp(0.0, 100.0, 0.0, 0.0, 100.0, 0.0)],
		)]);
		let mut stage: Stage<String> = Stage::new(spec);

		// First draw pins the clock origin at now = 1000.
		draw_at(&mut stage, 1000.0);
		let drawn = draw_at(&mut stage, 1050.0);
		assert_eq!(drawn, vec![("dot.png".to_string(), 50.0, 0.0)]);
	}

	#[test]
	fn test_event_outside_window_draws_nothing() {
		let spec = StageSpec::new(vec![TimelineSpec::new(
			"late",
			SpriteSpec::single("late.png"),
			vec![EventSpec::fixed(500.0, 600.0, 0.0, 0.0)],
		)]);
		let mut stage: Stage<String> = Stage::new(spec);
		assert!(draw_at(&mut stage, 0.0).is_empty());
		assert_eq!(draw_at(&mut stage, 550.0).len(), 1);
		assert!(draw_at(&mut stage, 600.0).is_empty());
	}

	#[test]
	fn test_simultaneously_active_events_each_draw() {
		let spec = StageSpec::new(vec![TimelineSpec::new(
			"twin",
			SpriteSpec::single("twin.png"),
			vec![
				EventSpec::fixed(0.0, OPEN_ENDED, 1.0, 1.0),
				EventSpec::fixed(0.0, OPEN_ENDED, 2.0, 2.0),
			],
		)]);
		let mut stage: Stage<String> = Stage::new(spec);
		let drawn = draw_at(&mut stage, 0.0);
		assert_eq!(drawn.len(), 2);
		assert_eq!(drawn[0].1, 1.0);
		assert_eq!(drawn[1].1, 2.0);
	}

	#[test]
	fn test_periodic_sweep_and_commit() {
		let spec = StageSpec::new(vec![TimelineSpec::new(
			"osc",
			SpriteSpec::single("osc.png"),
			vec![EventSpec::periodic(0.0, OPEN_ENDED, 0.0, 0.0, 5.0, 0.0, 10.0)],
		)]);
		let mut stage: Stage<String> = Stage::new(spec);

		draw_at(&mut stage, 0.0);

		// Odd period: sweeping toward (5, 0).
		let drawn = draw_at(&mut stage, 15.0);
		assert_eq!(drawn, vec![("osc.png".to_string(), 2.5, 0.0)]);

		// Even period entered: the step is committed.
		let drawn = draw_at(&mut stage, 20.0);
		assert_eq!(drawn, vec![("osc.png".to_string(), 5.0, 0.0)]);
		assert_eq!(
			stage.periodic_state(0, 0).unwrap().base(),
			Position::new(5.0, 0.0)
		);
	}

	#[test]
	fn test_pause_freezes_positions_and_frames() {
		let spec = StageSpec::new(vec![TimelineSpec::new(
			"runner",
			SpriteSpec::new(vec!["r0.png", "r1.png"], 50.0),
			vec![EventSpec::interp(0.0, 1000.0, 0.0, 0.0, 1000.0, 0.0)],
		)]);
		let mut stage: Stage<String> = Stage::new(spec);

		draw_at(&mut stage, 0.0);
		let before = draw_at(&mut stage, 160.0);
		stage.toggle_pause(160.0);

		// Long after the pause, the same frame and position are drawn.
		let during = draw_at(&mut stage, 5000.0);
		assert_eq!(during, before);

		// Resume: elapsed is unchanged, then advances with `now`.
		stage.toggle_pause(6000.0);
		let resumed = draw_at(&mut stage, 6000.0);
		assert_eq!(resumed, before);
		let later = draw_at(&mut stage, 6040.0);
		assert_eq!(later[0].1, 200.0);
	}

	#[test_log::test]
	fn test_restart_draws_fresh_state_on_the_triggering_frame() {
		let spec = StageSpec::new(vec![TimelineSpec::new(
			"osc",
			SpriteSpec::single("osc.png"),
			vec![EventSpec::periodic(0.0, OPEN_ENDED, 0.0, 0.0, 5.0, 0.0, 10.0)],
		)])
		.with_restart_after(100.0);
		let mut stage: Stage<String> = Stage::new(spec);

		draw_at(&mut stage, 0.0);
		draw_at(&mut stage, 40.0);
		assert!(stage.periodic_state(0, 0).unwrap().curr_period_num() > 0);

		// This draw trips the horizon: runtime state is rebuilt and the
		// frame renders at elapsed 0.
		let drawn = draw_at(&mut stage, 150.0);
		assert_eq!(stage.elapsed(), 0.0);
		assert_eq!(drawn, vec![("osc.png".to_string(), 0.0, 0.0)]);
		assert_eq!(stage.periodic_state(0, 0).unwrap().curr_period_num(), 0);
	}

	#[test_log::test]
	fn test_misconfigured_event_never_blanks_the_stage() {
		let spec = StageSpec::new(vec![
			TimelineSpec::new(
				"bad",
				SpriteSpec::single("bad.png"),
				vec![EventSpec::interp(0.0, OPEN_ENDED, 0.0, 0.0, 1.0, 1.0)],
			),
			TimelineSpec::new(
				"good",
				SpriteSpec::single("good.png"),
				vec![EventSpec::fixed(0.0, OPEN_ENDED, 3.0, 4.0)],
			),
		]);
		assert!(spec.validate().is_err());

		let mut stage: Stage<String> = Stage::new(spec);
		let drawn = draw_at(&mut stage, 0.0);
		assert_eq!(drawn, vec![("good.png".to_string(), 3.0, 4.0)]);
	}

	#[test]
	fn test_multi_frame_sprite_cycles_during_playback() {
		let spec = StageSpec::new(vec![TimelineSpec::new(
			"bird",
			SpriteSpec::new(vec!["wing0.png", "wing1.png"], 100.0),
			vec![EventSpec::fixed(0.0, OPEN_ENDED, 0.0, 0.0)],
		)]);
		let mut stage: Stage<String> = Stage::new(spec);

		draw_at(&mut stage, 0.0);
		assert_eq!(draw_at(&mut stage, 50.0)[0].0, "wing0.png");
		assert_eq!(draw_at(&mut stage, 150.0)[0].0, "wing1.png");
		assert_eq!(draw_at(&mut stage, 250.0)[0].0, "wing0.png");
	}

	#[test]
	fn test_initialize_rewinds_everything() {
		let mut stage = static_stage();
		draw_at(&mut stage, 0.0);
		draw_at(&mut stage, 500.0);
		assert_eq!(stage.elapsed(), 500.0);

		stage.initialize();
		assert_eq!(stage.elapsed(), 0.0);
		let drawn = draw_at(&mut stage, 9000.0);
		assert_eq!(stage.elapsed(), 0.0);
		assert_eq!(drawn, vec![("hero.png".to_string(), 15.0, 25.0)]);
	}
}
