//! Fade level of the tower hover highlight, driven by the scene clock.
//!
//! The level approaches 1 exponentially once the pointer has rested on a
//! tower for [`RISE_DELAY`], and decays back to 0 after it leaves. Levels are
//! closed-form in elapsed time, so they do not depend on the frame step.

/// Hover time before the highlight starts to rise, in seconds.
pub const RISE_DELAY: f64 = 0.08;
/// Exponential rise rate per second.
pub const RISE_RATE: f64 = 1.8;
/// Exponential decay rate per second.
pub const FALL_RATE: f64 = 1.26;
/// Levels below this snap to zero while falling.
pub const CUTOFF: f64 = 0.01;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum Phase {
	#[default]
	Idle,
	Rising {
		since: f64,
		from: f64,
	},
	Falling {
		since: f64,
		from: f64,
	},
}

/// Highlight fade with hover-enter and hover-leave transitions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HighlightFade {
	phase: Phase,
}

impl HighlightFade {
	/// Raw level in `[0, 1]` at scene time `now`.
	pub fn level(&self, now: f64) -> f64 {
		match self.phase {
			Phase::Idle => 0.0,
			Phase::Rising { since, from } => {
				let active = now - since - RISE_DELAY;
				if active <= 0.0 {
					from
				} else {
					1.0 - (1.0 - from) * (-RISE_RATE * active).exp()
				}
			}
			Phase::Falling { since, from } => {
				let level = from * (-FALL_RATE * (now - since).max(0.0)).exp();
				if level < CUTOFF { 0.0 } else { level }
			}
		}
	}

	/// Level after an ease-out-cubic curve, for drawing.
	pub fn eased(&self, now: f64) -> f64 {
		1.0 - (1.0 - self.level(now)).powi(3)
	}

	/// The pointer reached a tower while none was hovered.
	pub fn enter(&mut self, now: f64) {
		if matches!(self.phase, Phase::Rising { .. }) {
			return;
		}
		self.phase = Phase::Rising {
			since: now,
			from: self.level(now),
		};
	}

	/// The pointer left the last hovered tower.
	pub fn leave(&mut self, now: f64) {
		if !matches!(self.phase, Phase::Rising { .. }) {
			return;
		}
		self.phase = Phase::Falling {
			since: now,
			from: self.level(now),
		};
	}

	/// Whether the pointer is on a tower.
	pub fn is_rising(&self) -> bool {
		matches!(self.phase, Phase::Rising { .. })
	}

	/// Whether a fade-out has fully decayed; settles the fade to idle.
	pub fn settle(&mut self, now: f64) -> bool {
		if matches!(self.phase, Phase::Falling { .. }) && self.level(now) == 0.0 {
			self.phase = Phase::Idle;
			return true;
		}
		false
	}
}
