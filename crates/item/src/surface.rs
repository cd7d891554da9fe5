//! Rendering capability a host provides to toast items.
//!
//! A [`Surface`] owns the concrete visual elements. Items never touch those
//! elements directly: they ask the surface to play animations, schedule
//! layout frames, measure, and apply attributes. Animation lifecycle comes
//! back as [`AnimationSignal`]s fed to
//! [`ToastItem::on_animation`](crate::ToastItem::on_animation), and layout
//! frames come back through [`ToastItem::on_frame`](crate::ToastItem::on_frame).

use std::collections::{BTreeSet, HashMap};

use toastkit_primitives::{AnimationPhase, AnimationSpec, ParseError};

/// Host-assigned identifier of a toast bar element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

/// Host-assigned identifier of an animation listener registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// Which end of an animation a signal reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalEdge {
	/// The animation started running (after any delay).
	Start,
	/// The animation ran to completion.
	End,
}

/// Animation lifecycle notification, tagged with the phase it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationSignal {
	/// Start or end.
	pub edge: SignalEdge,
	/// Phase of the animation that fired.
	pub phase: AnimationPhase,
}

impl AnimationSignal {
	/// An animation of `phase` started.
	pub const fn start(phase: AnimationPhase) -> Self {
		Self {
			edge: SignalEdge::Start,
			phase,
		}
	}

	/// An animation of `phase` finished.
	pub const fn end(phase: AnimationPhase) -> Self {
		Self {
			edge: SignalEdge::End,
			phase,
		}
	}

	/// Builds a signal from a raw keyframe name, for hosts whose animation
	/// events only carry names.
	pub fn from_keyframes(edge: SignalEdge, name: &str) -> Result<Self, ParseError> {
		let (phase, _) = AnimationPhase::from_keyframes(name)?;
		Ok(Self { edge, phase })
	}
}

/// Rendering and animation capability required by [`ToastItem`](crate::ToastItem).
pub trait Surface {
	/// Starts delivering `edge` signals for `element`.
	fn listen(&mut self, element: ElementId, edge: SignalEdge) -> ListenerId;

	/// Stops a registration made by [`Surface::listen`].
	///
	/// Must be honoured even when the element is already gone.
	fn unlisten(&mut self, listener: ListenerId);

	/// Plays `animation` on `element` right away, replacing whatever it runs.
	fn play(&mut self, element: ElementId, animation: &AnimationSpec);

	/// Schedules one call to [`ToastItem::on_frame`](crate::ToastItem::on_frame)
	/// after the next layout pass.
	fn request_frame(&mut self, element: ElementId);

	/// Rendered pixel height of `element`. Only called from a frame callback.
	fn measure_height(&self, element: ElementId) -> f64;

	/// Sets an attribute on `element`.
	fn set_attribute(&mut self, element: ElementId, key: &str, value: &str);
}

/// Operation recorded by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
	/// [`Surface::listen`].
	Listen(ElementId, SignalEdge, ListenerId),
	/// [`Surface::unlisten`].
	Unlisten(ListenerId),
	/// [`Surface::play`].
	Play(ElementId, AnimationSpec),
	/// [`Surface::request_frame`].
	RequestFrame(ElementId),
	/// [`Surface::set_attribute`].
	SetAttribute(ElementId, String, String),
}

/// In-memory [`Surface`] that records every call.
///
/// Used by headless drivers and tests. Heights are whatever was last set with
/// [`RecordingSurface::set_height`], defaulting to zero.
#[derive(Debug, Default)]
pub struct RecordingSurface {
	ops: Vec<SurfaceOp>,
	heights: HashMap<ElementId, f64>,
	active: BTreeSet<ListenerId>,
	frames: Vec<ElementId>,
	next_listener: u64,
}

impl RecordingSurface {
	/// Creates an empty surface.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the height reported for `element`.
	pub fn set_height(&mut self, element: ElementId, height: f64) {
		self.heights.insert(element, height);
	}

	/// All recorded operations, oldest first.
	pub fn ops(&self) -> &[SurfaceOp] {
		&self.ops
	}

	/// Drains recorded operations.
	pub fn take_ops(&mut self) -> Vec<SurfaceOp> {
		std::mem::take(&mut self.ops)
	}

	/// Animations played so far, oldest first.
	pub fn played(&self) -> Vec<AnimationSpec> {
		self.ops
			.iter()
			.filter_map(|op| match op {
				SurfaceOp::Play(_, spec) => Some(*spec),
				_ => None,
			})
			.collect()
	}

	/// Listener registrations that have not been released.
	pub fn active_listeners(&self) -> usize {
		self.active.len()
	}

	/// Frames requested since the last [`RecordingSurface::take_frames`].
	pub fn pending_frames(&self) -> &[ElementId] {
		&self.frames
	}

	/// Drains requested frames so the caller can run the layout callbacks.
	pub fn take_frames(&mut self) -> Vec<ElementId> {
		std::mem::take(&mut self.frames)
	}
}

impl Surface for RecordingSurface {
	fn listen(&mut self, element: ElementId, edge: SignalEdge) -> ListenerId {
		self.next_listener += 1;
		let id = ListenerId(self.next_listener);
		self.active.insert(id);
		self.ops.push(SurfaceOp::Listen(element, edge, id));
		id
	}

	fn unlisten(&mut self, listener: ListenerId) {
		self.active.remove(&listener);
		self.ops.push(SurfaceOp::Unlisten(listener));
	}

	fn play(&mut self, element: ElementId, animation: &AnimationSpec) {
		self.ops.push(SurfaceOp::Play(element, *animation));
	}

	fn request_frame(&mut self, element: ElementId) {
		self.frames.push(element);
		self.ops.push(SurfaceOp::RequestFrame(element));
	}

	fn measure_height(&self, element: ElementId) -> f64 {
		self.heights.get(&element).copied().unwrap_or(0.0)
	}

	fn set_attribute(&mut self, element: ElementId, key: &str, value: &str) {
		self.ops.push(SurfaceOp::SetAttribute(
			element,
			key.to_string(),
			value.to_string(),
		));
	}
}
