//! The stage's animation clock.

/// Animation-local clock: a small state machine over
/// `{uninitialized, running, paused}`.
///
/// The clock is uninitialized until its first [`tick`](StageClock::tick),
/// which pins the origin to the host timestamp. While running, `elapsed` is
/// always `now - start`; while paused it stays frozen at the moment the
/// pause began. Resuming recomputes the origin as `now - elapsed`, so
/// animation-local time continues without a jump.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StageClock {
	/// Host timestamp pinned as the clock origin, `None` until the first tick
	start: Option<f64>,
	/// Animation-local time of the last unpaused tick
	elapsed: f64,
	/// Whether `elapsed` is currently frozen
	paused: bool,
}

impl StageClock {
	/// Creates an uninitialized clock.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the clock to its uninitialized state.
	pub fn reset(&mut self) {
		log::debug!("stage clock reset");
		*self = Self::default();
	}

	/// Advances the clock to the host timestamp `now`.
	///
	/// The first tick pins the origin. While paused this is a no-op apart
	/// from origin pinning.
	pub fn tick(&mut self, now: f64) {
		let start = *self.start.get_or_insert(now);
		if !self.paused {
			self.elapsed = now - start;
		}
	}

	/// Animation-local time as of the last tick.
	pub fn elapsed(&self) -> f64 {
		self.elapsed
	}

	/// Whether the clock is frozen.
	pub fn is_paused(&self) -> bool {
		self.paused
	}

	/// Whether the first tick has happened.
	pub fn is_started(&self) -> bool {
		self.start.is_some()
	}

	/// Freezes a running clock, or resumes a paused one at the host
	/// timestamp `now` with animation-local time unchanged.
	pub fn toggle_pause(&mut self, now: f64) {
		if self.paused {
			self.start = Some(now - self.elapsed);
			self.paused = false;
			log::debug!("stage clock resumed at elapsed {}", self.elapsed);
		} else {
			self.paused = true;
			log::debug!("stage clock paused at elapsed {}", self.elapsed);
		}
	}
}
