//! Address list of one employee, with nested single-address editing

use super::address_editor::AddressEditorDialog;
use super::common::{self, InstructionShortcut};
use super::{DialogEvent, DialogResult};
use crate::constants::ERROR_LAST_ADDRESS;
use crate::entities::{Address, Employee};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

const INSTRUCTIONS: &[InstructionShortcut] = &[
    ("a", Color::Green, " Add"),
    (" • ", Color::Gray, ""),
    ("e", Color::Cyan, " Edit"),
    (" • ", Color::Gray, ""),
    ("d", Color::Red, " Remove"),
    (" • ", Color::Gray, ""),
    ("s", Color::Green, " Save"),
    (" • ", Color::Gray, ""),
    ("Esc", Color::Red, " Cancel"),
];

/// Which slot the nested editor writes back to: an existing row or a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    Existing(usize),
    New,
}

/// Works on a copy of the employee's addresses. The edited list is only
/// returned on save; the employee itself is never mutated here.
#[derive(Debug, Clone)]
pub struct AddressListDialog {
    employee_name: String,
    addresses: Vec<Address>,
    selected: usize,
    editor: Option<(EditTarget, AddressEditorDialog)>,
    dirty: bool,
    message: Option<String>,
}

impl AddressListDialog {
    pub fn new(employee: &Employee) -> Self {
        Self {
            employee_name: employee.full_name(),
            addresses: employee.addresses.clone(),
            selected: 0,
            editor: None,
            dirty: false,
            message: None,
        }
    }

    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_editing(&self) -> bool {
        self.editor.is_some()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DialogEvent<Vec<Address>> {
        if let Some((target, editor)) = self.editor.as_mut() {
            let target = *target;
            if let DialogEvent::Closed(result) = editor.handle_key(key) {
                self.editor = None;
                if let DialogResult::Submitted(address) = result {
                    self.store(target, address);
                }
            }
            return DialogEvent::Pending;
        }

        self.message = None;
        match key.code {
            KeyCode::Esc => DialogEvent::cancelled(),
            KeyCode::Char('s') => {
                if self.dirty {
                    DialogEvent::submitted(self.addresses.clone())
                } else {
                    DialogEvent::cancelled()
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if !self.addresses.is_empty() {
                    self.selected = (self.selected + 1).min(self.addresses.len() - 1);
                }
                DialogEvent::Pending
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                DialogEvent::Pending
            }
            KeyCode::Char('a') => {
                let editor = AddressEditorDialog::new(&Address::placeholder(), "New Address");
                self.editor = Some((EditTarget::New, editor));
                DialogEvent::Pending
            }
            KeyCode::Enter | KeyCode::Char('e') => {
                if let Some(address) = self.addresses.get(self.selected) {
                    let title = format!("Edit Address {}", self.selected + 1);
                    let editor = AddressEditorDialog::new(address, title);
                    self.editor = Some((EditTarget::Existing(self.selected), editor));
                }
                DialogEvent::Pending
            }
            KeyCode::Char('d') => {
                self.remove_selected();
                DialogEvent::Pending
            }
            _ => DialogEvent::Pending,
        }
    }

    fn store(&mut self, target: EditTarget, address: Address) {
        match target {
            EditTarget::Existing(index) if index < self.addresses.len() => {
                self.addresses[index] = address;
                self.selected = index;
            }
            _ => {
                self.addresses.push(address);
                self.selected = self.addresses.len() - 1;
            }
        }
        self.dirty = true;
    }

    fn remove_selected(&mut self) {
        if self.addresses.len() <= 1 {
            self.message = Some(ERROR_LAST_ADDRESS.to_string());
            return;
        }
        self.addresses.remove(self.selected);
        if self.selected >= self.addresses.len() {
            self.selected = self.addresses.len() - 1;
        }
        self.dirty = true;
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let height = (self.addresses.len() as u16 + 7).max(10);
        let dialog_area = LayoutManager::centered_rect_lines(70, height, area);
        f.render_widget(Clear, dialog_area);

        let marker = if self.dirty { " (modified)" } else { "" };
        let title = format!(" Addresses of {}{} ", self.employee_name, marker);
        f.render_widget(common::create_dialog_block(&title, Color::Blue), dialog_area);

        let content = LayoutManager::dialog_content(dialog_area);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1), Constraint::Length(1)])
            .split(content);

        let items: Vec<ListItem> = self
            .addresses
            .iter()
            .enumerate()
            .map(|(i, address)| {
                let text = if address.is_blank() {
                    format!("{}. (empty address)", i + 1)
                } else {
                    format!("{}. {}", i + 1, address.one_line())
                };
                ListItem::new(text)
            })
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");
        let mut state = ListState::default().with_selected(Some(self.selected));
        f.render_stateful_widget(list, chunks[0], &mut state);

        if let Some(message) = &self.message {
            f.render_widget(
                Paragraph::new(message.as_str()).style(Style::default().fg(Color::Yellow)),
                chunks[1],
            );
        }
        f.render_widget(common::create_instructions_paragraph(INSTRUCTIONS), chunks[2]);

        if let Some((_, editor)) = &self.editor {
            editor.render(f, area);
        }
    }
}
