//! Derived visual state of a toast within its stack.
//!
//! Everything here is a pure function of the toast record, the stack geometry
//! assigned by the manager, and the stack config. Nothing is cached; callers
//! recompute whenever an input changes.

use indexmap::IndexMap;
use toastkit_config::ToastConfig;
use toastkit_primitives::{
	AnimationSpec, HorizontalAnchor, Position, Stacking, Toast, VerticalEdge,
};

/// Transform applied to the toast container. The values come from the
/// custom properties in [`CustomProperties`].
pub const CONTAINER_TRANSFORM: &str =
	"translateY(var(--toast-translate-y)) scale(var(--toast-scale))";

/// Manager-assigned placement of a toast within its stack.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StackGeometry {
	/// Cumulative pixel displacement from the toasts in front.
	pub offset: f64,
	/// Number of toasts stacked in front of this one.
	pub toasts_after: usize,
	/// True while the stack is hovered or otherwise fully expanded.
	pub showing_all: bool,
}

/// Scale of a toast under the given stacking.
///
/// Full scale under vertical stacking or while the stack shows all toasts;
/// otherwise one depth step smaller per toast in front. Large
/// `toasts_after` values go to zero and below, see
/// [`ToastConfig::max_stack_depth`].
pub fn scale(config: &ToastConfig, geometry: &StackGeometry) -> f64 {
	if config.stacking != Stacking::Vertical && !geometry.showing_all {
		config.depth_scale_at(geometry.toasts_after)
	} else {
		1.0
	}
}

/// Vertical translation in pixels. Bottom-anchored stacks grow upward.
pub fn translate_y(position: Position, offset: f64) -> f64 {
	// `0.0 - offset` keeps a zero offset from rendering as `-0px`.
	if position.is_top() { offset } else { 0.0 - offset }
}

/// Placement of the toast container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerStyle {
	/// Edge pinned to zero.
	pub vertical: VerticalEdge,
	/// Side(s) pinned to zero.
	pub horizontal: HorizontalAnchor,
}

impl ContainerStyle {
	/// Container placement for `position`.
	pub fn for_position(position: Position) -> Self {
		Self {
			vertical: position.vertical(),
			horizontal: position.horizontal(),
		}
	}

	/// Style declarations in application order.
	pub fn declarations(&self) -> Vec<(&'static str, String)> {
		let mut out = vec![("transform", CONTAINER_TRANSFORM.to_string())];
		out.push(match self.vertical {
			VerticalEdge::Top => ("top", "0".to_string()),
			VerticalEdge::Bottom => ("bottom", "0".to_string()),
		});
		match self.horizontal {
			HorizontalAnchor::Left => out.push(("left", "0".to_string())),
			HorizontalAnchor::Right => out.push(("right", "0".to_string())),
			HorizontalAnchor::Center => {
				out.push(("left", "0".to_string()));
				out.push(("right", "0".to_string()));
				out.push(("justify-content", "center".to_string()));
			}
		}
		out
	}
}

/// Style of the toast bar: user overrides plus the animation pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct BarStyle {
	/// Overrides from [`Toast::style`], in insertion order.
	pub overrides: IndexMap<String, String>,
	/// Enter animation, followed by the delayed exit when auto-closing.
	pub animations: Vec<AnimationSpec>,
}

impl BarStyle {
	/// Bar style for `toast`.
	pub fn for_toast(toast: &Toast, config: &ToastConfig) -> Self {
		let orientation = toast.position.orientation();
		let mut animations = vec![AnimationSpec::enter(orientation)];
		if toast.auto_close {
			animations.push(
				AnimationSpec::exit(orientation, config.exit_duration()).delayed(toast.duration),
			);
		}
		Self {
			overrides: toast.style.clone(),
			animations,
		}
	}

	/// The automatic exit animation, if scheduled.
	pub fn exit_animation(&self) -> Option<&AnimationSpec> {
		self.animations.iter().find(|a| a.phase.is_exit())
	}

	/// CSS `animation` value.
	pub fn animation(&self) -> String {
		self.animations
			.iter()
			.map(ToString::to_string)
			.collect::<Vec<_>>()
			.join(", ")
	}

	/// Style declarations: overrides first, then `animation`, which always
	/// wins over an override of the same name.
	pub fn declarations(&self) -> Vec<(String, String)> {
		self.overrides
			.iter()
			.filter(|(k, _)| k.as_str() != "animation")
			.map(|(k, v)| (k.clone(), v.clone()))
			.chain(std::iter::once(("animation".to_string(), self.animation())))
			.collect()
	}
}

/// Play state of the delayed automatic exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayState {
	/// Counting down.
	Running,
	/// Held while the stack is expanded.
	Paused,
}

impl PlayState {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Running => "running",
			Self::Paused => "paused",
		}
	}
}

/// Custom properties read by [`CONTAINER_TRANSFORM`] and the delayed exit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CustomProperties {
	/// `--toast-translate-y`, pixels.
	pub translate_y: f64,
	/// `--toast-scale`.
	pub scale: f64,
	/// `--toast-exit-animation-delay`, milliseconds.
	pub exit_delay_ms: u128,
	/// `--toast-exit-animation-state`.
	pub exit_state: PlayState,
}

impl CustomProperties {
	/// Declarations in application order.
	pub fn declarations(&self) -> Vec<(&'static str, String)> {
		vec![
			("--toast-translate-y", format!("{}px", self.translate_y)),
			("--toast-scale", self.scale.to_string()),
			("--toast-exit-animation-delay", format!("{}ms", self.exit_delay_ms)),
			("--toast-exit-animation-state", self.exit_state.as_str().to_string()),
		]
	}
}

/// Complete derived visual state of one toast.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualState {
	/// Anchored to the top edge.
	pub top: bool,
	/// Depth scale.
	pub scale: f64,
	/// Signed vertical translation in pixels.
	pub translate_y: f64,
	/// Container placement.
	pub container: ContainerStyle,
	/// Toast bar style.
	pub bar: BarStyle,
	/// Custom properties on the container.
	pub properties: CustomProperties,
}

impl VisualState {
	/// Computes the visual state from its inputs.
	pub fn compute(toast: &Toast, geometry: &StackGeometry, config: &ToastConfig) -> Self {
		let scale = scale(config, geometry);
		let translate_y = translate_y(toast.position, geometry.offset);
		Self {
			top: toast.position.is_top(),
			scale,
			translate_y,
			container: ContainerStyle::for_position(toast.position),
			bar: BarStyle::for_toast(toast, config),
			properties: CustomProperties {
				translate_y,
				scale,
				exit_delay_ms: toast.duration.as_millis(),
				exit_state: if geometry.showing_all {
					PlayState::Paused
				} else {
					PlayState::Running
				},
			},
		}
	}
}
