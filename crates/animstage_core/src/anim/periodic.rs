//! Mutable progress state for `periodic` events.
//!
//! A periodic event steps its sprite by `(dx, dy)` once per full period, with
//! the step swept visibly during alternate half-periods. The progress state
//! (committed baseline plus last committed period number) lives here, outside
//! the immutable event templates, so a stage reset rebuilds it from scratch
//! and drawing never mutates a description.
//!
//! The per-frame protocol is an explicit state transition followed by a pure
//! query: [`PeriodicState::advance`] runs once per frame before any drawing,
//! [`PeriodicState::position`] computes the displayed position without
//! touching state.

use super::event::Position;

/// Committed progress of one `periodic` event.
///
/// The odd/even asymmetry is the point of the effect: during odd period
/// numbers the sprite sweeps from the committed baseline toward the pending
/// step without committing it; on entry to an even period the step becomes
/// permanent and the sprite rests on the new baseline.
///
/// # Examples
///
/// ```
/// use animstage_core::anim::PeriodicState;
///
/// let mut state = PeriodicState::new(0.0, 0.0);
///
/// // Period 0 (even): resting on the initial baseline.
/// state.advance(5.0, 5.0, 0.0, 10.0);
/// assert_eq!(state.position(5.0, 5.0, 0.0, 10.0).x, 0.0);
///
/// // Period 1 (odd): sweeping toward the pending step.
/// state.advance(15.0, 5.0, 0.0, 10.0);
/// assert_eq!(state.position(15.0, 5.0, 0.0, 10.0).x, 2.5);
///
/// // Period 2 (even): the step is committed.
/// state.advance(20.0, 5.0, 0.0, 10.0);
/// assert_eq!(state.position(20.0, 5.0, 0.0, 10.0).x, 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodicState {
	/// Committed horizontal baseline
	base_x: f64,
	/// Committed vertical baseline
	base_y: f64,
	/// Period number of the last commit
	curr_period_num: i64,
}

impl PeriodicState {
	/// Creates fresh progress state resting on the event's initial baseline.
	pub fn new(start_x: f64, start_y: f64) -> Self {
		Self {
			base_x: start_x,
			base_y: start_y,
			curr_period_num: 0,
		}
	}

	/// Commits pending steps for the current frame.
	///
	/// Computes `period_num = floor(elapsed / period)`; when the period
	/// number is even and has changed since the last commit, the pending
	/// `(dx, dy)` step becomes part of the baseline. Call once per frame
	/// before any drawing. `period` must be positive; the caller guards.
	pub fn advance(&mut self, elapsed: f64, dx: f64, dy: f64, period: f64) {
		let period_num = period_num(elapsed, period);
		if period_num.rem_euclid(2) == 0 && period_num != self.curr_period_num {
			self.base_x += dx;
			self.base_y += dy;
			self.curr_period_num = period_num;
		}
	}

	/// Displayed position at `elapsed`, without touching state.
	///
	/// Odd period numbers are the "returning" half: the position sweeps
	/// linearly from the baseline toward the full pending step. Even period
	/// numbers rest on the committed baseline.
	pub fn position(&self, elapsed: f64, dx: f64, dy: f64, period: f64) -> Position {
		let period_num = period_num(elapsed, period);
		if period_num.rem_euclid(2) == 1 {
			let r = (elapsed - (period_num as f64) * period) / period;
			Position::new(self.base_x + dx * r, self.base_y + dy * r)
		} else {
			Position::new(self.base_x, self.base_y)
		}
	}

	/// The committed baseline.
	pub fn base(&self) -> Position {
		Position::new(self.base_x, self.base_y)
	}

	/// Period number of the last committed step.
	pub fn curr_period_num(&self) -> i64 {
		self.curr_period_num
	}
}

fn period_num(elapsed: f64, period: f64) -> i64 {
	(elapsed / period).floor() as i64
}

#[cfg(test)]
mod tests {
	use super::*;

	const DX: f64 = 5.0;
	const DY: f64 = 0.0;
	const PERIOD: f64 = 10.0;

	fn run_until(state: &mut PeriodicState, elapsed: f64) -> Position {
		// Step in quarter-periods so no commit boundary is skipped.
		let mut t = 0.0;
		while t < elapsed {
			t = (t + PERIOD / 4.0).min(elapsed);
			state.advance(t, DX, DY, PERIOD);
		}
		state.position(elapsed, DX, DY, PERIOD)
	}

	#[test]
	fn test_even_period_zero_rests_on_initial_baseline() {
		let mut state = PeriodicState::new(0.0, 0.0);
		for elapsed in [0.0, 2.5, 9.9] {
			state.advance(elapsed, DX, DY, PERIOD);
			assert_eq!(state.position(elapsed, DX, DY, PERIOD), Position::new(0.0, 0.0));
		}
	}

	#[test]
	fn test_odd_period_sweeps_toward_pending_step() {
		let mut state = PeriodicState::new(0.0, 0.0);

		// elapsed = 10 is the start of period 1: sweep ratio 0.
		state.advance(10.0, DX, DY, PERIOD);
		assert_eq!(state.position(10.0, DX, DY, PERIOD), Position::new(0.0, 0.0));

		// Halfway through period 1 the sweep covers half the step.
		state.advance(15.0, DX, DY, PERIOD);
		assert_eq!(state.position(15.0, DX, DY, PERIOD), Position::new(2.5, 0.0));
	}

	#[test]
	fn test_entering_even_period_commits_the_step() {
		let mut state = PeriodicState::new(0.0, 0.0);
		let pos = run_until(&mut state, 20.0);
		assert_eq!(pos, Position::new(5.0, 0.0));
		assert_eq!(state.base(), Position::new(5.0, 0.0));
		assert_eq!(state.curr_period_num(), 2);
	}

	#[test]
	fn test_baseline_advances_half_step_rate_over_full_periods() {
		// After k full periods (even k), the baseline has advanced (k/2)·dx.
		let mut state = PeriodicState::new(0.0, 0.0);
		run_until(&mut state, 6.0 * PERIOD);
		assert_eq!(state.base(), Position::new(3.0 * DX, 0.0));
	}

	#[test]
	fn test_advance_is_idempotent_within_a_period() {
		let mut state = PeriodicState::new(0.0, 0.0);
		run_until(&mut state, 20.0);
		let base = state.base();
		for _ in 0..10 {
			state.advance(22.0, DX, DY, PERIOD);
		}
		assert_eq!(state.base(), base);
	}

	#[test]
	fn test_position_never_mutates_state() {
		let state = PeriodicState::new(1.0, 2.0);
		let copy = state;
		let _ = state.position(35.0, DX, DY, PERIOD);
		assert_eq!(state, copy);
	}
}
