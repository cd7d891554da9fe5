//! Core types for toast notifications: records, positions, and animations.

/// Animation phases and keyframe descriptors.
pub mod animation;
/// Timing curves used by toast animations.
pub mod easing;
/// Parse errors for string-encoded enums.
pub mod error;
/// Screen positions and the anchoring derived from them.
pub mod position;
/// The toast record and its content types.
pub mod toast;

pub use animation::{
	AnimationPhase, AnimationSpec, DEPTH_SCALE, ENTER_ANIMATION_DURATION, EXIT_ANIMATION_DURATION,
	Orientation,
};
pub use easing::Easing;
pub use error::ParseError;
pub use position::{HorizontalAnchor, Position, Stacking, VerticalEdge};
pub use toast::{ComponentRef, Icon, IconTheme, Message, TemplateRef, Toast, ToastId, ToastKind};
