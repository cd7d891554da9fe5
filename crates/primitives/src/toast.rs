//! The toast record shared between a stack manager and its items.

use core::fmt;
use std::str::FromStr;
use std::time::Duration;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::error::ParseError;
use crate::position::Position;

/// Unique identifier of a toast.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToastId(String);

impl ToastId {
	/// Creates an identifier from any string-like value.
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	/// Returns the identifier text.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for ToastId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for ToastId {
	fn from(id: &str) -> Self {
		Self::new(id)
	}
}

impl From<String> for ToastId {
	fn from(id: String) -> Self {
		Self(id)
	}
}

/// Semantic flavour of a toast. Selects the default display duration.
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
pub enum ToastKind {
	/// Plain message (default).
	#[default]
	Blank,
	/// Operation succeeded.
	Success,
	/// Operation failed.
	Error,
	/// Operation in progress.
	Loading,
	/// Something needs attention.
	Warning,
	/// Informational message.
	Info,
}

impl ToastKind {
	/// Built-in display duration for this kind.
	pub const fn default_duration(self) -> Duration {
		match self {
			Self::Loading => Duration::from_millis(30_000),
			Self::Blank | Self::Success | Self::Error | Self::Warning | Self::Info => {
				Duration::from_millis(4_000)
			}
		}
	}

	/// Returns the kebab-case name.
	pub fn as_str(self) -> &'static str {
		self.into()
	}
}

impl FromStr for ToastKind {
	type Err = ParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::iter()
			.find(|k| k.as_str() == s)
			.ok_or_else(|| ParseError::Kind(s.to_string()))
	}
}

/// Named template the host renders as the toast body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRef {
	/// Template identifier in the host's registry.
	pub name: String,
}

/// Embeddable component the host instantiates as the toast body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRef {
	/// Component identifier in the host's registry.
	pub name: String,
	/// Provider scope the component should inherit from, if not the default.
	#[serde(default)]
	pub parent_scope: Option<String>,
}

/// Toast body content.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Message {
	/// No content.
	#[default]
	Empty,
	/// Plain text.
	Text(String),
	/// Structured template.
	Template(TemplateRef),
	/// Embeddable component.
	Component(ComponentRef),
}

impl Message {
	/// Returns true when there is something to render.
	///
	/// An empty text body counts as absent.
	pub fn is_present(&self) -> bool {
		match self {
			Self::Empty => false,
			Self::Text(text) => !text.is_empty(),
			Self::Template(_) | Self::Component(_) => true,
		}
	}
}

impl From<&str> for Message {
	fn from(text: &str) -> Self {
		Self::Text(text.to_string())
	}
}

impl From<String> for Message {
	fn from(text: String) -> Self {
		Self::Text(text)
	}
}

/// Colours for a structured icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconTheme {
	/// Main fill colour.
	pub primary: String,
	/// Accent colour.
	pub secondary: Option<String>,
}

/// Icon shown beside the toast body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
	/// Literal glyph or emoji.
	Text(String),
	/// Named icon with optional theme colours.
	Descriptor {
		/// Icon identifier in the host's registry.
		name: String,
		/// Colour overrides.
		theme: Option<IconTheme>,
	},
}

impl Icon {
	/// Returns true for a literal glyph.
	pub fn is_text(&self) -> bool {
		matches!(self, Self::Text(_))
	}
}

/// A single transient notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toast {
	/// Unique identifier.
	pub id: ToastId,
	/// Semantic flavour.
	pub kind: ToastKind,
	/// Body content.
	pub message: Message,
	/// Stack anchor.
	pub position: Position,
	/// Time on screen before the automatic exit animation starts.
	pub duration: Duration,
	/// Whether the automatic exit animation is scheduled.
	pub auto_close: bool,
	/// Whether a close affordance is shown.
	pub dismissible: bool,
	/// Visual overrides merged into the toast bar's style, in order.
	pub style: IndexMap<String, String>,
	/// Attributes applied to the toast bar element, in order.
	pub attributes: IndexMap<String, String>,
	/// Optional icon.
	pub icon: Option<Icon>,
	/// Last measured pixel height.
	pub height: f64,
	/// Whether the toast counts toward its group's footprint.
	pub visible: bool,
}

impl Toast {
	/// Creates a blank toast with the kind's default duration.
	pub fn new(id: impl Into<ToastId>, message: impl Into<Message>) -> Self {
		let kind = ToastKind::default();
		Self {
			id: id.into(),
			kind,
			message: message.into(),
			position: Position::default(),
			duration: kind.default_duration(),
			auto_close: true,
			dismissible: false,
			style: IndexMap::new(),
			attributes: IndexMap::new(),
			icon: None,
			height: 0.0,
			visible: true,
		}
	}

	/// Sets the kind and adopts its default duration.
	#[must_use]
	pub fn kind(mut self, kind: ToastKind) -> Self {
		self.kind = kind;
		self.duration = kind.default_duration();
		self
	}

	/// Sets the stack anchor.
	#[must_use]
	pub fn position(mut self, position: Position) -> Self {
		self.position = position;
		self
	}

	/// Sets the display duration.
	#[must_use]
	pub fn duration(mut self, duration: Duration) -> Self {
		self.duration = duration;
		self
	}

	/// Enables or disables the automatic exit animation.
	#[must_use]
	pub fn auto_close(mut self, auto_close: bool) -> Self {
		self.auto_close = auto_close;
		self
	}

	/// Shows or hides the close affordance.
	#[must_use]
	pub fn dismissible(mut self, dismissible: bool) -> Self {
		self.dismissible = dismissible;
		self
	}

	/// Adds a style override.
	#[must_use]
	pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
		self.style.insert(property.into(), value.into());
		self
	}

	/// Adds an attribute for the toast bar element.
	#[must_use]
	pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.attributes.insert(key.into(), value.into());
		self
	}

	/// Sets the icon.
	#[must_use]
	pub fn icon(mut self, icon: Icon) -> Self {
		self.icon = Some(icon);
		self
	}

	/// Sets the last measured height.
	#[must_use]
	pub fn height(mut self, height: f64) -> Self {
		self.height = height;
		self
	}

	/// Sets group visibility.
	#[must_use]
	pub fn visible(mut self, visible: bool) -> Self {
		self.visible = visible;
		self
	}
}

#[cfg(test)]
mod tests;
