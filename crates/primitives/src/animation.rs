//! Animation phases and the keyframe descriptors a host plays for them.
//!
//! Every animation a toast plays belongs to exactly one [`AnimationPhase`].
//! Hosts report start/end signals tagged with that phase, so lifecycle logic
//! never has to infer meaning from keyframe names. Hosts that only see names
//! (for example CSS `animationend` events) can recover the tag with
//! [`AnimationPhase::from_keyframes`].

use core::fmt;
use std::time::Duration;

use crate::easing::Easing;
use crate::error::ParseError;

/// Duration of enter and soft-enter animations.
pub const ENTER_ANIMATION_DURATION: Duration = Duration::from_millis(350);
/// Default duration of exit and soft-exit animations.
pub const EXIT_ANIMATION_DURATION: Duration = Duration::from_millis(800);
/// Scale lost per toast stacked in front when depth stacking is active.
pub const DEPTH_SCALE: f64 = 0.05;

/// Semantic phase of a toast animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationPhase {
	/// Initial entrance.
	Enter,
	/// Cosmetic re-entrance after a soft close.
	SoftEnter,
	/// Cosmetic collapse used by grouped stacks.
	SoftExit,
	/// Genuine dismissal, automatic or manual.
	Exit,
}

/// Direction variant of a keyframe set.
///
/// Top-anchored toasts use the `Negative` variant (they travel along negative
/// y); everything else uses `Positive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
	/// Keyframes for top-anchored toasts.
	Negative,
	/// Keyframes for bottom-anchored toasts.
	Positive,
}

impl Orientation {
	const fn suffix(self) -> &'static str {
		match self {
			Self::Negative => "Negative",
			Self::Positive => "Positive",
		}
	}
}

impl AnimationPhase {
	const ALL: [Self; 4] = [Self::Enter, Self::SoftEnter, Self::SoftExit, Self::Exit];

	/// Returns true for the phase that ends a toast's life.
	pub const fn is_exit(self) -> bool {
		matches!(self, Self::Exit)
	}

	const fn stem(self) -> &'static str {
		match self {
			Self::Enter => "toastEnterAnimation",
			Self::SoftEnter => "toastEnterSoftAnimation",
			Self::SoftExit => "toastExitSoftAnimation",
			Self::Exit => "toastExitAnimation",
		}
	}

	/// Keyframe name for this phase, e.g. `toastExitAnimationNegative`.
	pub fn keyframes(self, orientation: Orientation) -> String {
		format!("{}{}", self.stem(), orientation.suffix())
	}

	/// Recovers the phase and orientation from a generated keyframe name.
	pub fn from_keyframes(name: &str) -> Result<(Self, Orientation), ParseError> {
		Self::ALL
			.into_iter()
			.find_map(|phase| {
				let rest = name.strip_prefix(phase.stem())?;
				match rest {
					"Negative" => Some((phase, Orientation::Negative)),
					"Positive" => Some((phase, Orientation::Positive)),
					_ => None,
				}
			})
			.ok_or_else(|| ParseError::Keyframes(name.to_string()))
	}
}

/// A fully described animation the host should play on the toast bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
	/// Semantic phase.
	pub phase: AnimationPhase,
	/// Keyframe direction variant.
	pub orientation: Orientation,
	/// Active duration.
	pub duration: Duration,
	/// Timing curve.
	pub easing: Easing,
	/// Delay before the animation starts. Only set through
	/// [`AnimationSpec::delayed`], and rendered through the custom property.
	pub delay: Duration,
	/// Delay and play state are read from the toast's custom properties
	/// (`--toast-exit-animation-delay`, `--toast-exit-animation-state`)
	/// so the stack can pause auto-dismissal.
	pub pausable: bool,
}

impl AnimationSpec {
	fn new(
		phase: AnimationPhase,
		orientation: Orientation,
		duration: Duration,
		easing: Easing,
	) -> Self {
		Self {
			phase,
			orientation,
			duration,
			easing,
			delay: Duration::ZERO,
			pausable: false,
		}
	}

	/// Entrance animation.
	pub fn enter(orientation: Orientation) -> Self {
		Self::new(
			AnimationPhase::Enter,
			orientation,
			ENTER_ANIMATION_DURATION,
			Easing::ENTER,
		)
	}

	/// Cosmetic re-entrance after a soft close.
	pub fn soft_enter(orientation: Orientation) -> Self {
		Self::new(
			AnimationPhase::SoftEnter,
			orientation,
			ENTER_ANIMATION_DURATION,
			Easing::ENTER,
		)
	}

	/// Cosmetic collapse.
	pub fn soft_exit(orientation: Orientation, duration: Duration) -> Self {
		Self::new(AnimationPhase::SoftExit, orientation, duration, Easing::EXIT)
	}

	/// Dismissal animation, starting immediately.
	pub fn exit(orientation: Orientation, duration: Duration) -> Self {
		Self::new(AnimationPhase::Exit, orientation, duration, Easing::EXIT)
	}

	/// Defers the animation by `delay` and makes its play state controllable
	/// by the stack.
	#[must_use]
	pub fn delayed(mut self, delay: Duration) -> Self {
		self.delay = delay;
		self.pausable = true;
		self
	}

	/// Keyframe name the host should run.
	pub fn keyframes(&self) -> String {
		self.phase.keyframes(self.orientation)
	}
}

/// Renders the CSS `animation` shorthand for this spec.
impl fmt::Display for AnimationSpec {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{} {}ms {} forwards",
			self.keyframes(),
			self.duration.as_millis(),
			self.easing
		)?;
		if self.pausable {
			f.write_str(" var(--toast-exit-animation-delay) var(--toast-exit-animation-state)")?;
		}
		Ok(())
	}
}
