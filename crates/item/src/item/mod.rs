//! The toast item: one rendered toast driven by its stack.
//!
//! The item reads its toast through a [`ToastHandle`], derives a
//! [`VisualState`] from the manager-assigned [`StackGeometry`], drives
//! animations on a host [`Surface`], and reports back through an
//! [`EventQueue`] the stack drains with [`ToastItem::take_events`].

mod group;

use std::mem::{self, Discriminant};
use std::sync::Arc;
use std::time::Duration;

use toastkit_config::ToastConfig;
use toastkit_primitives::{AnimationSpec, Message, Orientation, ToastId};

use crate::content::ContentBinding;
use crate::event::{EventQueue, GroupToggle, GroupToggleKind, ToastEvent};
use crate::handle::ToastHandle;
use crate::lifecycle::{Lifecycle, Phase};
use crate::surface::{AnimationSignal, ElementId, ListenerId, SignalEdge, Surface};
use crate::visual::{self, StackGeometry, VisualState};

/// One toast within a stack.
///
/// Host flow:
///
/// 1. [`ToastItem::new`], then [`ToastItem::init`] to bind message content.
/// 2. [`ToastItem::attach`] once the bar element exists.
/// 3. Forward layout frames to [`ToastItem::on_frame`] and animation
///    signals to [`ToastItem::on_animation`].
/// 4. [`ToastItem::destroy`] when the element goes away.
///
/// Events accumulate until drained with [`ToastItem::take_events`].
#[derive(Debug)]
pub struct ToastItem {
	handle: ToastHandle,
	config: Arc<ToastConfig>,
	geometry: StackGeometry,
	lifecycle: Lifecycle,
	element: Option<ElementId>,
	listeners: Vec<ListenerId>,
	height_pending: bool,
	rendered: bool,
	content: Option<ContentBinding>,
	/// Message variant the content was last bound for; `None` before init.
	bound: Option<Discriminant<Message>>,
	events: EventQueue,
}

impl ToastItem {
	pub fn new(handle: ToastHandle, config: Arc<ToastConfig>) -> Self {
		Self {
			handle,
			config,
			geometry: StackGeometry::default(),
			lifecycle: Lifecycle::default(),
			element: None,
			listeners: Vec::new(),
			height_pending: false,
			rendered: false,
			content: None,
			bound: None,
			events: EventQueue::new(),
		}
	}

	/// Binds the message body's context. Text and empty messages bind
	/// nothing.
	pub fn init(&mut self) -> Option<&ContentBinding> {
		let (content, bound) = self.handle.with_toast(|toast| {
			(
				ContentBinding::for_message(&toast.message, &self.handle),
				mem::discriminant(&toast.message),
			)
		});
		self.content = content;
		self.bound = Some(bound);
		self.content.as_ref()
	}

	/// Attaches to the rendered bar element.
	///
	/// Registers start and end listeners, applies the toast's attributes,
	/// and requests the initial height measurement. A second attach is
	/// ignored, as is attaching a closed toast.
	pub fn attach<S: Surface + ?Sized>(&mut self, surface: &mut S, element: ElementId) {
		let id = self.handle.id();
		if self.element.is_some() || self.lifecycle.is_closed() {
			tracing::trace!(toast = %id, "toast.attach.ignored");
			return;
		}

		self.element = Some(element);
		self.listeners = vec![
			surface.listen(element, SignalEdge::Start),
			surface.listen(element, SignalEdge::End),
		];

		let attributes = self.handle.with_toast(|toast| toast.attributes.clone());
		for (key, value) in &attributes {
			surface.set_attribute(element, key, value);
		}

		self.request_height(surface, element);
		self.rendered = true;
		tracing::debug!(toast = %id, element = element.0, "toast.attach");
	}

	/// Layout-frame callback. Emits [`ToastEvent::Height`] when a
	/// measurement is pending and the toast has not closed.
	pub fn on_frame<S: Surface + ?Sized>(&mut self, surface: &S) {
		let Some(element) = self.element else {
			return;
		};
		if !mem::take(&mut self.height_pending) || self.lifecycle.is_closed() {
			return;
		}
		let height = surface.measure_height(element);
		tracing::trace!(toast = %self.handle.id(), height, "toast.height");
		self.events.push(ToastEvent::Height(height));
	}

	/// Notifies the item that its toast record changed.
	///
	/// After the first render, a present message schedules a new height
	/// report on the next frame. An initialised item rebinds its content
	/// when the message switches variant. Closed items ignore changes.
	pub fn toast_changed<S: Surface + ?Sized>(&mut self, surface: &mut S) {
		if self.lifecycle.is_closed() {
			return;
		}
		let (present, variant) = self
			.handle
			.with_toast(|toast| (toast.message.is_present(), mem::discriminant(&toast.message)));
		if self.bound.is_some_and(|bound| bound != variant) {
			self.init();
		}
		if !self.rendered || !present {
			return;
		}
		if let Some(element) = self.element {
			self.request_height(surface, element);
		}
	}

	/// Animation start/end callback. Only exit-phase signals produce
	/// events; signals before attach or after close are dropped.
	pub fn on_animation(&mut self, signal: AnimationSignal) {
		let id = self.handle.id();
		if self.element.is_none() {
			tracing::trace!(toast = %id, ?signal, "toast.signal.detached");
			return;
		}
		self.lifecycle.on_signal(signal, &id, &mut self.events);
	}

	/// Closes the toast by action.
	///
	/// Plays the exit animation immediately; the close events follow its
	/// signals. Unattached toasts close synchronously. Idempotent, and a
	/// no-op once the automatic exit has started.
	pub fn close<S: Surface + ?Sized>(&mut self, surface: &mut S) {
		let id = self.handle.id();
		if !self.lifecycle.request_close() {
			tracing::trace!(toast = %id, phase = ?self.lifecycle.phase(), "toast.close.ignored");
			return;
		}
		tracing::debug!(toast = %id, "toast.close");
		match self.element {
			Some(element) => {
				let exit = AnimationSpec::exit(self.orientation(), self.config.exit_duration());
				surface.play(element, &exit);
			}
			None => self.lifecycle.finish(&id, &mut self.events),
		}
	}

	/// Plays the cosmetic collapse used while a group is folded.
	pub fn soft_close<S: Surface + ?Sized>(&mut self, surface: &mut S) {
		if !self.lifecycle.soft_close() {
			return;
		}
		if let Some(element) = self.element {
			let spec = AnimationSpec::soft_exit(self.orientation(), self.config.exit_duration());
			surface.play(element, &spec);
		}
	}

	/// Reverses [`ToastItem::soft_close`].
	pub fn soft_open<S: Surface + ?Sized>(&mut self, surface: &mut S) {
		if !self.lifecycle.soft_open() {
			return;
		}
		if let Some(element) = self.element {
			surface.play(element, &AnimationSpec::soft_enter(self.orientation()));
		}
	}

	/// Tears the item down.
	///
	/// Forces [`ToastItem::close`], releases every listener, and completes
	/// the close contract so exactly one [`ToastEvent::AfterClosed`] is
	/// emitted.
	pub fn destroy<S: Surface + ?Sized>(&mut self, surface: &mut S) {
		self.close(surface);
		for listener in self.listeners.drain(..) {
			surface.unlisten(listener);
		}
		self.element = None;
		self.height_pending = false;
		let id = self.handle.id();
		self.lifecycle.finish(&id, &mut self.events);
		tracing::debug!(toast = %id, "toast.destroy");
	}

	/// Pointer entered the toast: ask the stack to show everything.
	pub fn mouse_enter(&mut self) {
		self.show_all(true);
	}

	/// Pointer left the toast.
	pub fn mouse_leave(&mut self) {
		self.show_all(false);
	}

	/// Expands or collapses a group root. Toasts without children, and closed
	/// toasts, ignore it.
	pub fn toggle_group(&mut self, by_action: bool) {
		if self.lifecycle.is_closed() || self.handle.group_refs().is_empty() {
			return;
		}
		let expanded = !self.handle.is_expanded();
		self.handle.set_expanded(expanded);
		let event = if expanded {
			GroupToggleKind::Expand
		} else {
			GroupToggleKind::Collapse
		};
		let id = self.handle.id();
		tracing::debug!(toast = %id, ?event, by_action, "toast.group.toggle");
		self.events.push(ToastEvent::ToggleGroup(GroupToggle {
			by_action,
			event,
			id,
		}));
	}

	pub fn set_offset(&mut self, offset: f64) {
		self.geometry.offset = offset;
	}

	pub fn set_toasts_after(&mut self, toasts_after: usize) {
		self.geometry.toasts_after = toasts_after;
	}

	pub fn set_showing_all(&mut self, showing_all: bool) {
		self.geometry.showing_all = showing_all;
	}

	pub fn set_config(&mut self, config: Arc<ToastConfig>) {
		self.config = config;
	}

	pub fn handle(&self) -> &ToastHandle {
		&self.handle
	}

	pub fn id(&self) -> ToastId {
		self.handle.id()
	}

	pub fn config(&self) -> &ToastConfig {
		&self.config
	}

	pub fn geometry(&self) -> StackGeometry {
		self.geometry
	}

	pub fn content(&self) -> Option<&ContentBinding> {
		self.content.as_ref()
	}

	/// True when anchored to a top edge.
	pub fn top(&self) -> bool {
		self.handle.with_toast(|toast| toast.position.is_top())
	}

	pub fn scale(&self) -> f64 {
		visual::scale(&self.config, &self.geometry)
	}

	pub fn translate_y(&self) -> f64 {
		let position = self.handle.with_toast(|toast| toast.position);
		visual::translate_y(position, self.geometry.offset)
	}

	/// Delay before the automatic exit starts.
	pub fn exit_animation_delay(&self) -> Duration {
		self.handle.with_toast(|toast| toast.duration)
	}

	/// Full derived visual state.
	pub fn visual(&self) -> VisualState {
		self.handle
			.with_toast(|toast| VisualState::compute(toast, &self.geometry, &self.config))
	}

	pub fn phase(&self) -> Phase {
		self.lifecycle.phase()
	}

	pub fn is_manual_close(&self) -> bool {
		self.lifecycle.is_manual_close()
	}

	pub fn is_soft_closed(&self) -> bool {
		self.lifecycle.is_soft_closed()
	}

	pub fn is_attached(&self) -> bool {
		self.element.is_some()
	}

	/// Drains emitted events in emission order.
	pub fn take_events(&mut self) -> Vec<ToastEvent> {
		self.events.take_pending()
	}

	fn orientation(&self) -> Orientation {
		self.handle.with_toast(|toast| toast.position.orientation())
	}

	fn show_all(&mut self, show: bool) {
		if self.lifecycle.is_closed() {
			return;
		}
		self.events.push(ToastEvent::ShowAllToasts(show));
	}

	fn request_height<S: Surface + ?Sized>(&mut self, surface: &mut S, element: ElementId) {
		if !self.height_pending {
			self.height_pending = true;
			surface.request_frame(element);
		}
	}
}

impl Drop for ToastItem {
	fn drop(&mut self) {
		if !self.listeners.is_empty() {
			tracing::warn!(
				toast = %self.handle.id(),
				listeners = self.listeners.len(),
				"toast item dropped without destroy"
			);
		}
	}
}

#[cfg(test)]
mod tests;
