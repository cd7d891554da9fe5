//! Per-toast behaviour for a stacked toast container.
//!
//! A [`ToastItem`] renders one toast: it computes its place in the stack,
//! runs the enter/exit animation lifecycle on a host [`Surface`], reports its
//! height, and aggregates group children. The surrounding stack owns layout
//! and removal and reacts to the [`ToastEvent`]s each item emits.

/// Message-body bindings.
pub mod content;
/// Events reported to the stack.
pub mod event;
/// Shared per-toast handle.
pub mod handle;
mod item;
/// Lifecycle phases.
pub mod lifecycle;
/// Host rendering capability.
pub mod surface;
/// Derived visual state.
pub mod visual;

pub use content::ContentBinding;
pub use event::{CloseEvent, EventQueue, GroupToggle, GroupToggleKind, ToastEvent};
pub use handle::ToastHandle;
pub use item::ToastItem;
pub use lifecycle::Phase;
pub use surface::{
	AnimationSignal, ElementId, ListenerId, RecordingSurface, SignalEdge, Surface, SurfaceOp,
};
pub use visual::{
	BarStyle, CONTAINER_TRANSFORM, ContainerStyle, CustomProperties, PlayState, StackGeometry,
	VisualState,
};
