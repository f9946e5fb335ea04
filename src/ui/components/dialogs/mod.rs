//! Dialog components module
//!
//! Form dialogs own a working copy of their input and report back through
//! [`DialogEvent`]: they stay [`DialogEvent::Pending`] while the user edits and
//! close with a [`DialogResult`] that the container turns into an action.

pub mod address_editor;
pub mod address_list;
pub mod common;
pub mod employee_creation;
pub mod employee_edit;
pub mod scroll_behavior;
pub mod system_dialogs;

pub use address_editor::AddressEditorDialog;
pub use address_list::AddressListDialog;
pub use employee_creation::EmployeeCreationDialog;
pub use employee_edit::EmployeeEditDialog;

/// How a modal dialog was closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogResult<T> {
    Submitted(T),
    Cancelled,
}

/// Outcome of feeding one key to a dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogEvent<T> {
    Pending,
    Closed(DialogResult<T>),
}

impl<T> DialogEvent<T> {
    pub fn submitted(value: T) -> Self {
        DialogEvent::Closed(DialogResult::Submitted(value))
    }

    pub fn cancelled() -> Self {
        DialogEvent::Closed(DialogResult::Cancelled)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, DialogEvent::Pending)
    }
}
