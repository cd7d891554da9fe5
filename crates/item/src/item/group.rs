//! Group aggregation over the child handles of a group root.

use toastkit_primitives::Toast;

use super::ToastItem;
use crate::handle::ToastHandle;

impl ToastItem {
	/// Child handles of this group root. Empty for ordinary toasts.
	pub fn group_children_toast_refs(&self) -> Vec<ToastHandle> {
		self.handle.group_refs()
	}

	pub fn set_group_children_toast_refs(&mut self, refs: Vec<ToastHandle>) {
		tracing::trace!(toast = %self.handle.id(), children = refs.len(), "toast.group.refs");
		self.handle.set_group_refs(refs);
	}

	/// Current snapshots of the children.
	pub fn group_children_toasts(&self) -> Vec<Toast> {
		self.handle
			.group_refs()
			.iter()
			.map(ToastHandle::toast)
			.collect()
	}

	/// Children currently counted toward the group footprint.
	pub fn visible_toasts(&self) -> Vec<Toast> {
		self.group_children_toasts()
			.into_iter()
			.filter(|toast| toast.visible)
			.collect()
	}

	/// Combined height of the visible children.
	pub fn group_height(&self) -> f64 {
		self.handle
			.group_refs()
			.iter()
			.map(|child| child.with_toast(|toast| if toast.visible { toast.height } else { 0.0 }))
			.sum()
	}

	pub fn is_expanded(&self) -> bool {
		self.handle.is_expanded()
	}
}
