//! Timing curves for toast animations.
//!
//! Curves are described the way CSS describes them so a web host can use the
//! [`Display`](core::fmt::Display) output directly, while hosts that drive
//! animations themselves can sample the curve with [`Easing::apply`].

use core::fmt;

/// Timing curve for an animation.
///
/// # Example
///
/// ```
/// use toastkit_primitives::Easing;
///
/// let eased = Easing::ENTER.apply(0.5);
/// assert!(eased > 0.5); // the enter curve front-loads its motion
/// assert_eq!(Easing::ENTER.to_string(), "cubic-bezier(0.21, 1.02, 0.73, 1)");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
	/// Constant speed.
	#[default]
	Linear,

	/// CSS `cubic-bezier(x1, y1, x2, y2)`.
	///
	/// Control points with `y` outside `[0, 1]` overshoot, so sampled values
	/// may leave that range too.
	CubicBezier(f32, f32, f32, f32),
}

/// Newton iterations before falling back to bisection.
const NEWTON_ITERATIONS: usize = 8;
/// Bisection iterations when Newton does not converge.
const BISECTION_ITERATIONS: usize = 32;
const EPSILON: f32 = 1e-6;

impl Easing {
	/// Curve used by enter and soft-enter animations.
	pub const ENTER: Self = Self::CubicBezier(0.21, 1.02, 0.73, 1.0);
	/// Curve used by exit and soft-exit animations.
	pub const EXIT: Self = Self::CubicBezier(0.06, 0.71, 0.55, 1.0);

	/// Samples the curve at linear progress `t`.
	///
	/// Input `t` is clamped to `[0.0, 1.0]`; endpoints map to themselves.
	pub fn apply(self, t: f32) -> f32 {
		let t = t.clamp(0.0, 1.0);
		match self {
			Self::Linear => t,
			Self::CubicBezier(x1, y1, x2, y2) => {
				if t == 0.0 || t == 1.0 {
					return t;
				}
				let s = solve_parameter(x1, x2, t);
				bezier(y1, y2, s)
			}
		}
	}
}

/// Finds the curve parameter whose x coordinate is `x`.
fn solve_parameter(x1: f32, x2: f32, x: f32) -> f32 {
	let mut s = x;
	for _ in 0..NEWTON_ITERATIONS {
		let err = bezier(x1, x2, s) - x;
		if err.abs() < EPSILON {
			return s;
		}
		let slope = bezier_slope(x1, x2, s);
		if slope.abs() < EPSILON {
			break;
		}
		s -= err / slope;
	}

	let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
	s = x;
	for _ in 0..BISECTION_ITERATIONS {
		let value = bezier(x1, x2, s);
		if (value - x).abs() < EPSILON {
			break;
		}
		if value < x {
			lo = s;
		} else {
			hi = s;
		}
		s = (lo + hi) / 2.0;
	}
	s
}

/// One coordinate of a cubic bezier anchored at 0 and 1.
#[inline]
fn bezier(p1: f32, p2: f32, s: f32) -> f32 {
	let inv = 1.0 - s;
	3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

#[inline]
fn bezier_slope(p1: f32, p2: f32, s: f32) -> f32 {
	let inv = 1.0 - s;
	3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

impl fmt::Display for Easing {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Linear => f.write_str("linear"),
			Self::CubicBezier(x1, y1, x2, y2) => {
				write!(f, "cubic-bezier({x1}, {y1}, {x2}, {y2})")
			}
		}
	}
}
