//! Context handed to template and component message bodies.

use toastkit_primitives::Message;

use crate::handle::ToastHandle;

/// What a structured message body gets to see.
#[derive(Debug, Clone)]
pub enum ContentBinding {
	/// Template bodies receive the toast handle as their implicit value.
	Template {
		/// The toast's own handle.
		implicit: ToastHandle,
	},
	/// Component bodies get the handle provided in their scope.
	Component {
		/// The toast's own handle.
		handle: ToastHandle,
		/// Scope to inherit other providers from; `None` uses the stack's.
		parent_scope: Option<String>,
	},
}

impl ContentBinding {
	/// Binding for `message`, or `None` for text and empty bodies.
	pub fn for_message(message: &Message, handle: &ToastHandle) -> Option<Self> {
		match message {
			Message::Template(_) => Some(Self::Template {
				implicit: handle.clone(),
			}),
			Message::Component(component) => Some(Self::Component {
				handle: handle.clone(),
				parent_scope: component.parent_scope.clone(),
			}),
			Message::Text(_) | Message::Empty => None,
		}
	}

	/// The handle exposed to the body.
	pub fn handle(&self) -> &ToastHandle {
		match self {
			Self::Template { implicit } => implicit,
			Self::Component { handle, .. } => handle,
		}
	}
}
