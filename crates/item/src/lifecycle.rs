//! Per-toast lifecycle state machine.
//!
//! ```text
//! Entering -> Visible -> (SoftClosing <-> SoftOpening) -> Exiting -> Closed
//! ```
//!
//! Only [`AnimationPhase::Exit`] signals move a toast toward `Closed`; enter
//! and soft animations never emit close events. `BeforeClosed` and
//! `AfterClosed` are each emitted at most once, in that order.

use toastkit_primitives::{AnimationPhase, ToastId};

use crate::event::{CloseEvent, EventQueue, ToastEvent};
use crate::surface::{AnimationSignal, SignalEdge};

/// Lifecycle phase of a toast item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
	/// Entrance animation running.
	#[default]
	Entering,
	/// On screen and idle.
	Visible,
	/// Cosmetically collapsed, or collapsing.
	SoftClosing,
	/// Re-entering after a soft close.
	SoftOpening,
	/// Exit animation running.
	Exiting,
	/// Gone. Terminal.
	Closed,
}

#[derive(Debug, Default)]
pub(crate) struct Lifecycle {
	phase: Phase,
	manual_close: bool,
	soft_closed: bool,
	before_closed_sent: bool,
}

impl Lifecycle {
	pub(crate) fn phase(&self) -> Phase {
		self.phase
	}

	pub(crate) fn is_manual_close(&self) -> bool {
		self.manual_close
	}

	pub(crate) fn is_soft_closed(&self) -> bool {
		self.soft_closed
	}

	pub(crate) fn is_closed(&self) -> bool {
		self.phase == Phase::Closed
	}

	/// Applies an animation signal, emitting close events when it belongs to
	/// the exit phase.
	pub(crate) fn on_signal(&mut self, signal: AnimationSignal, id: &ToastId, events: &mut EventQueue) {
		if self.is_closed() {
			tracing::trace!(toast = %id, ?signal, "toast.signal.after_close");
			return;
		}

		match (signal.phase, signal.edge) {
			(AnimationPhase::Exit, SignalEdge::Start) => {
				self.phase = Phase::Exiting;
				self.emit_before_closed(id, events);
			}
			(AnimationPhase::Exit, SignalEdge::End) => self.finish(id, events),
			(AnimationPhase::Enter, SignalEdge::End) if self.phase == Phase::Entering => {
				self.phase = Phase::Visible;
			}
			(AnimationPhase::SoftEnter, SignalEdge::End) if self.phase == Phase::SoftOpening => {
				self.phase = Phase::Visible;
			}
			_ => {
				tracing::trace!(toast = %id, ?signal, phase = ?self.phase, "toast.signal.cosmetic");
			}
		}
	}

	/// Marks a manual close. Returns true when the exit animation should be
	/// played; false when the toast is already closing or closed.
	pub(crate) fn request_close(&mut self) -> bool {
		match self.phase {
			Phase::Closed | Phase::Exiting => false,
			_ if self.manual_close => false,
			_ => {
				self.manual_close = true;
				true
			}
		}
	}

	/// Enters the soft-closed state. Returns false when closing for real.
	pub(crate) fn soft_close(&mut self) -> bool {
		if self.is_terminal() {
			return false;
		}
		self.phase = Phase::SoftClosing;
		self.soft_closed = true;
		true
	}

	/// Leaves the soft-closed state. Returns false when closing for real.
	pub(crate) fn soft_open(&mut self) -> bool {
		if self.is_terminal() {
			return false;
		}
		self.phase = Phase::SoftOpening;
		self.soft_closed = false;
		true
	}

	/// Completes the close contract: `BeforeClosed` if not yet sent, then
	/// `AfterClosed`. No-op once closed.
	pub(crate) fn finish(&mut self, id: &ToastId, events: &mut EventQueue) {
		if self.is_closed() {
			return;
		}
		self.emit_before_closed(id, events);
		self.phase = Phase::Closed;
		tracing::debug!(toast = %id, dismissed_by_action = self.manual_close, "toast.closed");
		events.push(ToastEvent::AfterClosed(CloseEvent {
			dismissed_by_action: self.manual_close,
			id: id.clone(),
		}));
	}

	fn emit_before_closed(&mut self, id: &ToastId, events: &mut EventQueue) {
		if !self.before_closed_sent {
			self.before_closed_sent = true;
			tracing::debug!(toast = %id, manual = self.manual_close, "toast.before_closed");
			events.push(ToastEvent::BeforeClosed);
		}
	}

	/// True once the exit is underway, manually requested, or done.
	fn is_terminal(&self) -> bool {
		self.manual_close || matches!(self.phase, Phase::Exiting | Phase::Closed)
	}
}
