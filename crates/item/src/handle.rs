//! Shared per-toast handle.
//!
//! The stack manager creates one [`ToastHandle`] per toast and keeps it for
//! the toast's lifetime. The item rendering that toast holds a clone: it reads
//! the current record through it and maintains the group fields (child refs,
//! expanded flag) when the toast is a group root.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use toastkit_primitives::{Message, Toast, ToastId};

#[derive(Debug)]
struct HandleState {
	toast: Toast,
	group_refs: Vec<ToastHandle>,
	expanded: bool,
}

/// Shared, interior-mutable reference to one toast.
///
/// Clones refer to the same toast. No lock is held across calls, so readers
/// always see a complete snapshot.
#[derive(Clone)]
pub struct ToastHandle {
	inner: Arc<RwLock<HandleState>>,
}

impl ToastHandle {
	/// Creates a handle owning `toast`, with no children and collapsed.
	pub fn new(toast: Toast) -> Self {
		Self {
			inner: Arc::new(RwLock::new(HandleState {
				toast,
				group_refs: Vec::new(),
				expanded: false,
			})),
		}
	}

	/// Identifier of the referenced toast.
	pub fn id(&self) -> ToastId {
		self.inner.read().toast.id.clone()
	}

	/// Snapshot of the current record.
	pub fn toast(&self) -> Toast {
		self.inner.read().toast.clone()
	}

	/// Runs `f` against the current record without cloning it.
	pub fn with_toast<R>(&self, f: impl FnOnce(&Toast) -> R) -> R {
		f(&self.inner.read().toast)
	}

	/// Mutates the record. Manager side.
	pub fn update(&self, f: impl FnOnce(&mut Toast)) {
		f(&mut self.inner.write().toast);
	}

	/// Replaces the message. Manager side.
	pub fn set_message(&self, message: impl Into<Message>) {
		self.inner.write().toast.message = message.into();
	}

	/// Records a measured height. Manager side, in response to a height event.
	pub fn set_height(&self, height: f64) {
		self.inner.write().toast.height = height;
	}

	/// Sets whether the toast counts toward its group footprint.
	pub fn set_visible(&self, visible: bool) {
		self.inner.write().toast.visible = visible;
	}

	/// Child handles when this toast is a group root.
	pub fn group_refs(&self) -> Vec<ToastHandle> {
		self.inner.read().group_refs.clone()
	}

	/// Replaces the child handles.
	pub fn set_group_refs(&self, refs: Vec<ToastHandle>) {
		self.inner.write().group_refs = refs;
	}

	/// Appends a child handle.
	pub fn push_group_ref(&self, child: ToastHandle) {
		self.inner.write().group_refs.push(child);
	}

	/// Returns true when the group is expanded.
	pub fn is_expanded(&self) -> bool {
		self.inner.read().expanded
	}

	/// Sets the group expanded flag.
	pub fn set_expanded(&self, expanded: bool) {
		self.inner.write().expanded = expanded;
	}

	/// Returns true when both handles refer to the same toast.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.inner, &other.inner)
	}
}

impl fmt::Debug for ToastHandle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let state = self.inner.read();
		f.debug_struct("ToastHandle")
			.field("id", &state.toast.id)
			.field("group_refs", &state.group_refs.len())
			.field("expanded", &state.expanded)
			.finish()
	}
}
