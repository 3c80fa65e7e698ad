//! Pausable animation clock driven by pointer hover.

/// Whether an entity's animation time is advancing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClockState {
	/// Time follows the wall clock minus the accumulated offset.
	Running,
	/// Time is frozen at the value it had at `since`.
	Paused {
		/// Wall-clock time at which the pause began.
		since: f64,
	},
}

/// Animation time for a single hoverable entity.
///
/// Hover-enter freezes time, hover-leave resumes it without a jump by
/// folding the paused span into an offset.
#[derive(Clone, Debug, PartialEq)]
pub struct HoverClock {
	state: ClockState,
	offset: f64,
}

impl Default for HoverClock {
	fn default() -> Self {
		Self::new()
	}
}

impl HoverClock {
	/// A running clock with no accumulated pause.
	pub fn new() -> Self {
		Self {
			state: ClockState::Running,
			offset: 0.0,
		}
	}

	/// Current state.
	pub fn state(&self) -> ClockState {
		self.state
	}

	/// Whether the clock is paused.
	pub fn is_paused(&self) -> bool {
		matches!(self.state, ClockState::Paused { .. })
	}

	/// Total paused duration folded in so far.
	pub fn offset(&self) -> f64 {
		self.offset
	}

	/// Pointer entered: Running -> Paused. Ignored while already paused.
	pub fn hover_enter(&mut self, now: f64) {
		if self.state == ClockState::Running {
			self.state = ClockState::Paused { since: now };
		}
	}

	/// Pointer left: Paused -> Running. Ignored while running.
	pub fn hover_leave(&mut self, now: f64) {
		if let ClockState::Paused { since } = self.state {
			self.offset += (now - since).max(0.0);
			self.state = ClockState::Running;
		}
	}

	/// Animation time at wall-clock `now`.
	pub fn time(&self, now: f64) -> f64 {
		let pause_start = match self.state {
			ClockState::Running => None,
			ClockState::Paused { since } => Some(since),
		};
		effective_time(now, self.offset, pause_start)
	}
}

/// Animation time for a wall clock, an accumulated pause offset and an
/// optional in-progress pause start.
pub fn effective_time(wall_clock: f64, accumulated_offset: f64, pause_start: Option<f64>) -> f64 {
	pause_start.unwrap_or(wall_clock) - accumulated_offset
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn running_clock_tracks_wall_time() {
		let clock = HoverClock::new();
		assert_eq!(clock.time(3.5), 3.5);
		assert!(!clock.is_paused());
	}

	#[test]
	fn pause_freezes_and_resume_does_not_jump() {
		let mut clock = HoverClock::new();
		clock.hover_enter(2.0);
		assert_eq!(clock.state(), ClockState::Paused { since: 2.0 });
		assert_eq!(clock.time(5.0), 2.0);

		clock.hover_leave(5.0);
		assert_eq!(clock.offset(), 3.0);
		assert_eq!(clock.time(5.0), 2.0);
		assert_eq!(clock.time(6.0), 3.0);
	}

	#[test]
	fn repeated_transitions_are_ignored() {
		let mut clock = HoverClock::new();
		clock.hover_leave(1.0);
		assert_eq!(clock.offset(), 0.0);

		clock.hover_enter(1.0);
		clock.hover_enter(4.0);
		assert_eq!(clock.time(10.0), 1.0);
	}

	#[test]
	fn offsets_accumulate_across_pauses() {
		let mut clock = HoverClock::new();
		clock.hover_enter(1.0);
		clock.hover_leave(2.0);
		clock.hover_enter(4.0);
		clock.hover_leave(7.0);
		assert_eq!(clock.offset(), 4.0);
		assert_eq!(clock.time(10.0), 6.0);
	}

	#[test]
	fn effective_time_formula() {
		assert_eq!(effective_time(10.0, 2.0, None), 8.0);
		assert_eq!(effective_time(10.0, 2.0, Some(7.0)), 5.0);
	}
}
