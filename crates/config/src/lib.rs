//! Shared defaults for toast stacks.
//!
//! A [`ToastConfig`] is created once per stack and handed to every toast item
//! in it. Every field has a default, so a config file only needs the keys it
//! wants to change:
//!
//! ```toml
//! stacking = "vertical"      # or "depth" / "default"
//! depth-scale = 0.04
//! exit-duration-ms = 600
//! position = "bottom-right"
//! auto-close = true
//! dismissible = true
//!
//! [durations]
//! loading = 60000
//! error = 8000
//! ```

pub mod error;

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

pub use error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use toastkit_primitives::{
	DEPTH_SCALE, EXIT_ANIMATION_DURATION, Message, Position, Stacking, Toast, ToastId, ToastKind,
};

/// Stack-wide toast defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ToastConfig {
	/// Layout of toasts behind the front one.
	pub stacking: Stacking,
	/// Scale lost per toast stacked in front under depth stacking.
	pub depth_scale: f64,
	/// Duration of exit and soft-exit animations, in milliseconds.
	pub exit_duration_ms: u64,
	/// Default stack anchor for new toasts.
	pub position: Position,
	/// Default for [`Toast::auto_close`].
	pub auto_close: bool,
	/// Default for [`Toast::dismissible`].
	pub dismissible: bool,
	/// Per-kind display durations in milliseconds. Kinds not listed use
	/// [`ToastKind::default_duration`].
	pub durations: HashMap<ToastKind, u64>,
}

impl Default for ToastConfig {
	fn default() -> Self {
		Self {
			stacking: Stacking::default(),
			depth_scale: DEPTH_SCALE,
			exit_duration_ms: EXIT_ANIMATION_DURATION.as_millis() as u64,
			position: Position::default(),
			auto_close: true,
			dismissible: false,
			durations: HashMap::new(),
		}
	}
}

impl ToastConfig {
	/// Parses and validates a TOML document.
	pub fn parse(input: &str) -> Result<Self> {
		let config: Self = toml::from_str(input)?;
		config.validate()?;
		tracing::debug!(
			stacking = %config.stacking,
			depth_scale = config.depth_scale,
			exit_duration_ms = config.exit_duration_ms,
			"toast.config.parsed"
		);
		Ok(config)
	}

	/// Loads configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		Self::parse(&content)
	}

	/// Checks values that deserialize fine but cannot render sensibly.
	pub fn validate(&self) -> Result<()> {
		if !(self.depth_scale > 0.0 && self.depth_scale < 1.0) {
			return Err(ConfigError::DepthScale(self.depth_scale));
		}
		if self.exit_duration_ms == 0 {
			return Err(ConfigError::ZeroExitDuration);
		}
		Ok(())
	}

	/// Duration of exit and soft-exit animations.
	pub fn exit_duration(&self) -> Duration {
		Duration::from_millis(self.exit_duration_ms)
	}

	/// Display duration for a toast kind.
	pub fn duration_for(&self, kind: ToastKind) -> Duration {
		self.durations
			.get(&kind)
			.map(|&ms| Duration::from_millis(ms))
			.unwrap_or_else(|| kind.default_duration())
	}

	/// Scale of a toast with `toasts_after` toasts stacked in front of it,
	/// under depth stacking.
	pub fn depth_scale_at(&self, toasts_after: usize) -> f64 {
		1.0 - toasts_after as f64 * self.depth_scale
	}

	/// Largest `toasts_after` whose depth scale is still positive.
	///
	/// Saturates at `usize::MAX` for scales too small to ever reach zero.
	///
	/// Stack managers that show deep stacks should clamp to this.
	pub fn max_stack_depth(&self) -> usize {
		if self.depth_scale <= 0.0 {
			return usize::MAX;
		}
		let mut depth = (1.0 / self.depth_scale).floor() as usize;
		while depth > 0 && self.depth_scale_at(depth) <= 0.0 {
			depth -= 1;
		}
		while let Some(next) = depth.checked_add(1)
			&& self.depth_scale_at(next) > 0.0
		{
			depth = next;
		}
		depth
	}

	/// Creates a toast carrying this config's defaults for `kind`.
	pub fn new_toast(
		&self,
		id: impl Into<ToastId>,
		message: impl Into<Message>,
		kind: ToastKind,
	) -> Toast {
		Toast::new(id, message)
			.kind(kind)
			.duration(self.duration_for(kind))
			.position(self.position)
			.auto_close(self.auto_close)
			.dismissible(self.dismissible)
	}
}
