//! Scripted host sessions.
//!
//! Each scenario plays the part of a stack container: it creates items,
//! feeds them frames and animation signals the way a renderer would, and
//! collects what they emit.

use std::sync::Arc;

use clap::ValueEnum;
use toastkit_config::ToastConfig;
use toastkit_item::{
	AnimationSignal, ElementId, RecordingSurface, SurfaceOp, ToastEvent, ToastHandle, ToastItem,
};
use toastkit_primitives::{AnimationPhase, ToastId, ToastKind};

/// A scripted session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Scenario {
	/// Toast enters, waits out its duration, and exits on its own.
	AutoClose,
	/// Toast is closed by the user while still counting down.
	ManualClose,
	/// Host tears the toast down before the exit finishes.
	Teardown,
	/// Pointer hovers a grouped stack, then the group is toggled.
	GroupHover,
}

/// Everything a scenario produced.
#[derive(Debug, Default)]
pub struct Transcript {
	/// Emitted events tagged with their toast, in emission order.
	pub events: Vec<(ToastId, ToastEvent)>,
	/// Surface operations, in call order.
	pub ops: Vec<SurfaceOp>,
	/// Listener registrations left unreleased at the end.
	pub leaked_listeners: usize,
}

impl Scenario {
	/// Runs the scenario against `config`.
	pub fn run(self, config: &Arc<ToastConfig>) -> Transcript {
		let mut host = Host::new(config.clone());
		match self {
			Self::AutoClose => {
				let el = host.spawn("saved", "Changes saved", ToastKind::Success);
				host.frame();
				host.signal(el, AnimationSignal::end(AnimationPhase::Enter));
				host.signal(el, AnimationSignal::start(AnimationPhase::Exit));
				host.signal(el, AnimationSignal::end(AnimationPhase::Exit));
				host.destroy(el);
			}
			Self::ManualClose => {
				let el = host.spawn("upload", "Uploading report", ToastKind::Loading);
				host.frame();
				host.signal(el, AnimationSignal::end(AnimationPhase::Enter));
				host.items[el].close(&mut host.surface);
				host.signal(el, AnimationSignal::start(AnimationPhase::Exit));
				host.signal(el, AnimationSignal::end(AnimationPhase::Exit));
				// Late end of the scheduled automatic exit.
				host.signal(el, AnimationSignal::end(AnimationPhase::Exit));
				host.destroy(el);
			}
			Self::Teardown => {
				let el = host.spawn("offline", "Connection lost", ToastKind::Error);
				host.frame();
				host.destroy(el);
				host.signal(el, AnimationSignal::end(AnimationPhase::Exit));
			}
			Self::GroupHover => {
				let root = host.spawn("group", "3 new messages", ToastKind::Info);
				let children: Vec<_> = (1..=3)
					.map(|n| {
						let id = format!("message-{n}");
						let el = host.spawn(&id, format!("Message {n}"), ToastKind::Info);
						host.surface.set_height(element(el), 40.0 + n as f64);
						host.items[el].handle().clone()
					})
					.collect();
				host.frame();
				host.absorb_heights();
				children[1].set_visible(false);
				host.items[root].set_group_children_toast_refs(children);
				tracing::info!(
					height = host.items[root].group_height(),
					visible = host.items[root].visible_toasts().len(),
					"group"
				);

				host.items[root].mouse_enter();
				for item in &mut host.items {
					item.set_showing_all(true);
				}
				host.items[root].mouse_leave();
				host.items[root].toggle_group(true);
				host.items[root].toggle_group(false);
				for el in 0..host.items.len() {
					host.destroy(el);
				}
			}
		}
		host.finish()
	}
}

fn element(index: usize) -> ElementId {
	ElementId(index as u64 + 1)
}

struct Host {
	config: Arc<ToastConfig>,
	surface: RecordingSurface,
	items: Vec<ToastItem>,
	transcript: Transcript,
}

impl Host {
	fn new(config: Arc<ToastConfig>) -> Self {
		Self {
			config,
			surface: RecordingSurface::new(),
			items: Vec::new(),
			transcript: Transcript::default(),
		}
	}

	/// Creates, initialises, and attaches a toast. Returns its index.
	fn spawn(&mut self, id: &str, message: impl Into<String>, kind: ToastKind) -> usize {
		let toast = self.config.new_toast(id, message.into(), kind);
		let mut item = ToastItem::new(ToastHandle::new(toast), self.config.clone());
		item.init();

		let index = self.items.len();
		for (after, older) in self.items.iter_mut().rev().enumerate() {
			older.set_toasts_after(after + 1);
		}
		item.attach(&mut self.surface, element(index));
		self.items.push(item);
		self.drain();
		index
	}

	/// Runs every requested layout frame.
	fn frame(&mut self) {
		for requested in self.surface.take_frames() {
			let index = (requested.0 - 1) as usize;
			if let Some(item) = self.items.get_mut(index) {
				item.on_frame(&self.surface);
			}
		}
		self.drain();
	}

	/// Writes reported heights back to the handles, as a container would.
	fn absorb_heights(&self) {
		for (id, event) in &self.transcript.events {
			if let ToastEvent::Height(height) = event
				&& let Some(item) = self.items.iter().find(|item| &item.id() == id)
			{
				item.handle().set_height(*height);
			}
		}
	}

	fn signal(&mut self, index: usize, signal: AnimationSignal) {
		self.items[index].on_animation(signal);
		self.drain();
	}

	fn destroy(&mut self, index: usize) {
		self.items[index].destroy(&mut self.surface);
		self.drain();
	}

	fn drain(&mut self) {
		for item in &mut self.items {
			let id = item.id();
			for event in item.take_events() {
				tracing::info!(toast = %id, ?event, "event");
				self.transcript.events.push((id.clone(), event));
			}
		}
	}

	fn finish(mut self) -> Transcript {
		self.transcript.leaked_listeners = self.surface.active_listeners();
		self.transcript.ops = self.surface.take_ops();
		self.transcript
	}
}
