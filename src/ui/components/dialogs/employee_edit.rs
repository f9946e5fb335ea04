//! Employee name editing

use super::common::{self, shortcuts};
use super::DialogEvent;
use crate::entities::{Employee, EmployeePatch};
use crate::forms::EmployeeForm;
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    widgets::Clear,
    Frame,
};

/// Edits the names of one employee and returns them as a patch.
#[derive(Debug, Clone)]
pub struct EmployeeEditDialog {
    employee_id: String,
    form: EmployeeForm,
}

impl EmployeeEditDialog {
    pub fn new(employee: &Employee) -> Self {
        Self {
            employee_id: employee.employee_id.clone(),
            form: EmployeeForm::new(&employee.first_name, &employee.last_name),
        }
    }

    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    pub fn form(&self) -> &EmployeeForm {
        &self.form
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DialogEvent<EmployeePatch> {
        match key.code {
            KeyCode::Esc => DialogEvent::cancelled(),
            KeyCode::Enter => match self.form.submit() {
                Some((first_name, last_name)) => DialogEvent::submitted(EmployeePatch {
                    employee_id: self.employee_id.clone(),
                    first_name,
                    last_name,
                }),
                None => DialogEvent::Pending,
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
        let height = fields.len() as u16 * common::FIELD_HEIGHT + 7;
        let dialog_area = LayoutManager::centered_rect_lines(60, height, area);
        f.render_widget(Clear, dialog_area);
        f.render_widget(common::create_dialog_block(" Edit Employee ", Color::Yellow), dialog_area);

        let content = LayoutManager::dialog_content(dialog_area);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)])
            .split(content);

        f.render_widget(
            common::create_selection_paragraph(self.employee_id.clone(), "Employee ID"),
            chunks[0],
        );
        common::render_form_fields(f, chunks[1], fields, self.form.form().focus());

        let instructions = common::create_instructions_paragraph(&[
            shortcuts::ENTER_SAVE,
            shortcuts::SEPARATOR,
            shortcuts::TAB_NEXT,
            shortcuts::SEPARATOR,
            shortcuts::ESC_CANCEL,
        ]);
        f.render_widget(instructions, chunks[2]);
    }
}
