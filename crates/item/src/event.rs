//! Events a toast item reports to its stack.
//!
//! Items push into an [`EventQueue`]; the stack drains it after driving the
//! item. Order within the queue is emission order.

use std::collections::VecDeque;

use toastkit_primitives::ToastId;

/// Payload of [`ToastEvent::AfterClosed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseEvent {
	/// True when closed through [`ToastItem::close`](crate::ToastItem::close)
	/// (including teardown), false for the automatic exit.
	pub dismissed_by_action: bool,
	/// Toast that closed.
	pub id: ToastId,
}

/// Direction of a group toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupToggleKind {
	/// Children become visible.
	Expand,
	/// Children collapse behind the root.
	Collapse,
}

/// Payload of [`ToastEvent::ToggleGroup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupToggle {
	/// True when triggered by the user rather than programmatically.
	pub by_action: bool,
	/// New state.
	pub event: GroupToggleKind,
	/// Group root.
	pub id: ToastId,
}

/// Something the stack should react to.
#[derive(Debug, Clone, PartialEq)]
pub enum ToastEvent {
	/// Measured toast bar height in pixels.
	Height(f64),
	/// The exit animation started.
	BeforeClosed,
	/// The toast finished closing and may be removed.
	AfterClosed(CloseEvent),
	/// Request to expand (`true`) or collapse (`false`) the whole stack.
	ShowAllToasts(bool),
	/// A group root was expanded or collapsed.
	ToggleGroup(GroupToggle),
}

/// FIFO of emitted events.
#[derive(Debug, Default)]
pub struct EventQueue {
	pending: VecDeque<ToastEvent>,
}

impl EventQueue {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn is_empty(&self) -> bool {
		self.pending.is_empty()
	}

	pub fn len(&self) -> usize {
		self.pending.len()
	}

	pub fn push(&mut self, event: ToastEvent) {
		tracing::trace!(?event, "toast.event");
		self.pending.push_back(event);
	}

	/// Removes and returns every pending event.
	pub fn take_pending(&mut self) -> Vec<ToastEvent> {
		self.pending.drain(..).collect()
	}
}
