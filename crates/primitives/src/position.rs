use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::animation::Orientation;
use crate::error::ParseError;

/// Screen anchor for a toast stack.
#[derive(
	Debug,
	Clone,
	Copy,
	PartialEq,
	Eq,
	Hash,
	Default,
	Serialize,
	Deserialize,
	Display,
	EnumIter,
	IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Position {
	/// Top-left corner of the viewport.
	TopLeft,
	/// Top edge, horizontally centered (default).
	#[default]
	TopCenter,
	/// Top-right corner of the viewport.
	TopRight,
	/// Left edge, vertically centered.
	MiddleLeft,
	/// Right edge, vertically centered.
	MiddleRight,
	/// Bottom-left corner of the viewport.
	BottomLeft,
	/// Bottom edge, horizontally centered.
	BottomCenter,
	/// Bottom-right corner of the viewport.
	BottomRight,
}

/// Edge a toast container is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalEdge {
	/// `top: 0`.
	Top,
	/// `bottom: 0`.
	Bottom,
}

/// Horizontal anchoring of a toast container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalAnchor {
	/// `left: 0`.
	Left,
	/// `right: 0`.
	Right,
	/// Pinned to both sides with centered content.
	Center,
}

impl Position {
	/// Returns the kebab-case name, e.g. `"top-right"`.
	pub fn as_str(self) -> &'static str {
		self.into()
	}

	/// Returns true when the position is on the top edge.
	pub const fn is_top(self) -> bool {
		matches!(self, Self::TopLeft | Self::TopCenter | Self::TopRight)
	}

	/// Edge the container is pinned to. Anything not on the top edge pins to the bottom.
	pub const fn vertical(self) -> VerticalEdge {
		if self.is_top() {
			VerticalEdge::Top
		} else {
			VerticalEdge::Bottom
		}
	}

	/// Horizontal anchoring derived from the left/right token.
	pub const fn horizontal(self) -> HorizontalAnchor {
		match self {
			Self::TopLeft | Self::MiddleLeft | Self::BottomLeft => HorizontalAnchor::Left,
			Self::TopRight | Self::MiddleRight | Self::BottomRight => HorizontalAnchor::Right,
			Self::TopCenter | Self::BottomCenter => HorizontalAnchor::Center,
		}
	}

	/// Keyframe orientation used by enter and exit animations.
	pub const fn orientation(self) -> Orientation {
		if self.is_top() {
			Orientation::Negative
		} else {
			Orientation::Positive
		}
	}
}

impl FromStr for Position {
	type Err = ParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::iter()
			.find(|p| p.as_str() == s)
			.ok_or_else(|| ParseError::Position(s.to_string()))
	}
}

/// How toasts behind the front-most one are laid out.
#[derive(
	Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Stacking {
	/// Every toast keeps full scale and stacks in a column.
	Vertical,
	/// Toasts behind the front one shrink by a fixed step per depth (default).
	#[default]
	#[serde(alias = "default")]
	Depth,
}

impl FromStr for Stacking {
	type Err = ParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"vertical" => Ok(Self::Vertical),
			"depth" | "default" => Ok(Self::Depth),
			other => Err(ParseError::Stacking(other.to_string())),
		}
	}
}
