//! Single address editor

use super::common::{self, shortcuts};
use super::DialogEvent;
use crate::entities::Address;
use crate::forms::{AddressField, AddressForm};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    widgets::Clear,
    Frame,
};

/// Edits a copy of one address. The caller's address is never touched;
/// the edited value is only handed back on a valid submit.
#[derive(Debug, Clone)]
pub struct AddressEditorDialog {
    form: AddressForm,
    title: String,
}

impl AddressEditorDialog {
    pub fn new(address: &Address, title: impl Into<String>) -> Self {
        Self {
            form: AddressForm::new(address),
            title: title.into(),
        }
    }

    pub fn form(&self) -> &AddressForm {
        &self.form
    }

    pub fn focused(&self) -> AddressField {
        self.form.focused()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DialogEvent<Address> {
        match key.code {
            KeyCode::Esc => DialogEvent::cancelled(),
            KeyCode::Enter => match self.form.submit() {
                Some(address) => DialogEvent::submitted(address),
                None => {
                    log::debug!("Address form rejected: invalid fields");
                    DialogEvent::Pending
                }
            },
            KeyCode::Tab | KeyCode::Down => {
                self.form.focus_next();
                DialogEvent::Pending
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.form.focus_previous();
                DialogEvent::Pending
            }
            _ => {
                common::edit_input(self.form.focused_input(), key);
                DialogEvent::Pending
            }
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let fields = self.form.form().fields();
        let height = fields.len() as u16 * common::FIELD_HEIGHT + 4;
        let dialog_area = LayoutManager::centered_rect_lines(60, height, area);
        f.render_widget(Clear, dialog_area);

        let title = format!(" {} ", self.title);
        f.render_widget(common::create_dialog_block(&title, Color::Cyan), dialog_area);

        let content = LayoutManager::dialog_content(dialog_area);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(content);

        common::render_form_fields(f, chunks[0], fields, self.form.form().focus());

        let instructions = common::create_instructions_paragraph(&[
            shortcuts::ENTER_SAVE,
            shortcuts::SEPARATOR,
            shortcuts::TAB_NEXT,
            shortcuts::SEPARATOR,
            shortcuts::ESC_CANCEL,
        ]);
        f.render_widget(instructions, chunks[1]);
    }
}
