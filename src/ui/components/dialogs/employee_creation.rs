//! Employee creation: one or more drafts per dialog session

use super::common::{self, InstructionShortcut};
use super::DialogEvent;
use crate::entities::NewEmployee;
use crate::forms::EmployeeForm;
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph},
    Frame,
};

const INSTRUCTIONS: &[InstructionShortcut] = &[
    ("Enter", Color::Green, " Create"),
    (" • ", Color::Gray, ""),
    ("Ctrl+N", Color::Cyan, " Queue another"),
    (" • ", Color::Gray, ""),
    ("Tab", Color::Cyan, " Next field"),
    (" • ", Color::Gray, ""),
    ("Esc", Color::Red, " Cancel"),
];

/// Collects new employees. Every submitted draft carries one blank placeholder
/// address; the directory assigns the identifier.
#[derive(Debug, Clone, Default)]
pub struct EmployeeCreationDialog {
    form: EmployeeForm,
    queued: Vec<NewEmployee>,
}

impl EmployeeCreationDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &EmployeeForm {
        &self.form
    }

    pub fn queued(&self) -> &[NewEmployee] {
        &self.queued
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DialogEvent<Vec<NewEmployee>> {
        match key.code {
            KeyCode::Esc => DialogEvent::cancelled(),
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.queue_current();
                DialogEvent::Pending
            }
            KeyCode::Enter => {
                // An untouched form after queueing means "submit what is queued".
                if self.form.is_blank() && !self.queued.is_empty() {
                    return DialogEvent::submitted(std::mem::take(&mut self.queued));
                }
                if self.queue_current() {
                    DialogEvent::submitted(std::mem::take(&mut self.queued))
                } else {
                    DialogEvent::Pending
                }
            }
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

    fn queue_current(&mut self) -> bool {
        match self.form.submit() {
            Some((first_name, last_name)) => {
                self.queued.push(NewEmployee::new(first_name, last_name));
                self.form.reset();
                true
            }
            None => false,
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let fields = self.form.form().fields();
        let height = fields.len() as u16 * common::FIELD_HEIGHT + 5;
        let dialog_area = LayoutManager::centered_rect_lines(60, height, area);
        f.render_widget(Clear, dialog_area);
        f.render_widget(common::create_dialog_block(" New Employee ", Color::Green), dialog_area);

        let content = LayoutManager::dialog_content(dialog_area);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1), Constraint::Length(1)])
            .split(content);

        common::render_form_fields(f, chunks[0], fields, self.form.form().focus());

        if !self.queued.is_empty() {
            let names: Vec<String> = self
                .queued
                .iter()
                .map(|draft| format!("{} {}", draft.first_name, draft.last_name))
                .collect();
            let queued = Paragraph::new(format!("Queued ({}): {}", names.len(), names.join(", ")))
                .style(Style::default().fg(Color::Yellow));
            f.render_widget(queued, chunks[1]);
        }

        f.render_widget(common::create_instructions_paragraph(INSTRUCTIONS), chunks[2]);
    }
}
