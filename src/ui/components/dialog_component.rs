//! Modal dialog container.
//!
//! Holds at most one open dialog, routes keys to it and turns its
//! [`DialogResult`] into the [`Action`] the app should perform. Dialogs only
//! ever see copies of roster data.

use crate::entities::Employee;
use crate::logger::Logger;
use crate::ui::components::dialogs::{
    scroll_behavior::ScrollState, system_dialogs, AddressListDialog, DialogEvent, DialogResult, EmployeeCreationDialog,
    EmployeeEditDialog,
};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

/// Dialog currently shown, with its working state.
#[derive(Debug, Clone)]
pub enum ActiveDialog {
    EmployeeCreation(EmployeeCreationDialog),
    EmployeeEdit(EmployeeEditDialog),
    AddressList { employee_id: String, dialog: AddressListDialog },
    DeleteConfirmation { employee: Employee, index: usize },
    Error(String),
    Info(String),
    Help,
    Logs,
}

impl From<DialogType> for ActiveDialog {
    fn from(dialog_type: DialogType) -> Self {
        match dialog_type {
            DialogType::EmployeeCreation => ActiveDialog::EmployeeCreation(EmployeeCreationDialog::new()),
            DialogType::EmployeeEdit { employee } => ActiveDialog::EmployeeEdit(EmployeeEditDialog::new(&employee)),
            DialogType::AddressList { employee } => ActiveDialog::AddressList {
                dialog: AddressListDialog::new(&employee),
                employee_id: employee.employee_id,
            },
            DialogType::DeleteConfirmation { employee, index } => ActiveDialog::DeleteConfirmation { employee, index },
            DialogType::Error(message) => ActiveDialog::Error(message),
            DialogType::Info(message) => ActiveDialog::Info(message),
            DialogType::Help => ActiveDialog::Help,
            DialogType::Logs => ActiveDialog::Logs,
        }
    }
}

pub struct DialogComponent {
    pub active: Option<ActiveDialog>,
    logger: Option<Logger>,
    // Scrolling support for long content dialogs
    pub scroll: ScrollState,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            active: None,
            logger: None,
            scroll: ScrollState::new(),
        }
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    pub fn is_visible(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&ActiveDialog> {
        self.active.as_ref()
    }

    fn clear_dialog(&mut self) {
        self.active = None;
        self.scroll.reset();
    }

    /// Close the dialog and map its result; `Cancelled` hides it with no request.
    fn close_with<T>(&mut self, result: DialogResult<T>, to_action: impl FnOnce(T) -> Action) -> Action {
        self.clear_dialog();
        match result {
            DialogResult::Submitted(value) => to_action(value),
            DialogResult::Cancelled => Action::HideDialog,
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(active) = self.active.as_mut() else {
            return Action::None;
        };

        match active {
            ActiveDialog::EmployeeCreation(dialog) => match dialog.handle_key(key) {
                DialogEvent::Pending => Action::None,
                DialogEvent::Closed(result) => self.close_with(result, Action::CreateEmployees),
            },
            ActiveDialog::EmployeeEdit(dialog) => match dialog.handle_key(key) {
                DialogEvent::Pending => Action::None,
                DialogEvent::Closed(result) => self.close_with(result, Action::EditEmployee),
            },
            ActiveDialog::AddressList { employee_id, dialog } => match dialog.handle_key(key) {
                DialogEvent::Pending => Action::None,
                DialogEvent::Closed(result) => {
                    let employee_id = employee_id.clone();
                    self.close_with(result, |addresses| Action::SaveAddresses {
                        employee_id,
                        addresses,
                    })
                }
            },
            ActiveDialog::DeleteConfirmation { employee, index } => match key.code {
                KeyCode::Enter | KeyCode::Char('y') => {
                    let action = Action::DeleteEmployee {
                        employee_id: employee.employee_id.clone(),
                        index: *index,
                    };
                    self.clear_dialog();
                    action
                }
                KeyCode::Esc | KeyCode::Char('n') => Action::HideDialog,
                _ => Action::None,
            },
            ActiveDialog::Info(_) | ActiveDialog::Error(_) => {
                if self.scroll.handle_key(key) {
                    Action::None
                } else {
                    // Any other key dismisses the dialog
                    Action::HideDialog
                }
            }
            ActiveDialog::Help => match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::HideDialog,
                _ => {
                    self.scroll.handle_key(key);
                    Action::None
                }
            },
            ActiveDialog::Logs => match key.code {
                KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::HideDialog,
                _ => {
                    self.scroll.handle_key(key);
                    Action::None
                }
            },
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.clear_dialog();
                self.active = Some(ActiveDialog::from(dialog_type));
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(active) = self.active.as_ref() else {
            return;
        };

        match active {
            ActiveDialog::EmployeeCreation(dialog) => dialog.render(f, rect),
            ActiveDialog::EmployeeEdit(dialog) => dialog.render(f, rect),
            ActiveDialog::AddressList { dialog, .. } => dialog.render(f, rect),
            ActiveDialog::DeleteConfirmation { employee, .. } => {
                system_dialogs::render_delete_confirmation_dialog(f, rect, employee)
            }
            ActiveDialog::Info(message) => {
                system_dialogs::render_info_dialog(f, rect, message, self.scroll.offset, &mut self.scroll.scrollbar)
            }
            ActiveDialog::Error(message) => {
                system_dialogs::render_error_dialog(f, rect, message, self.scroll.offset, &mut self.scroll.scrollbar)
            }
            ActiveDialog::Help => system_dialogs::render_help_dialog(f, rect, self.scroll.offset, &mut self.scroll.scrollbar),
            ActiveDialog::Logs => system_dialogs::render_logs_dialog(
                f,
                rect,
                self.logger.as_ref(),
                self.scroll.offset,
                &mut self.scroll.scrollbar,
            ),
        }
    }
}
