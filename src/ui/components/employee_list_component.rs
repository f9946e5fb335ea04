use crate::constants::APP_TITLE;
use crate::pagination::{ProjectedRow, Projection};
use crate::roster::ViewStatus;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

/// Table of the current page of employees.
///
/// Works on a copy of the roster's projection; every key that changes data
/// is turned into an [`Action`] for the app.
pub struct EmployeeListComponent {
    pub projection: Projection,
    pub status: ViewStatus,
    pub selected_index: usize,
    pub table_state: TableState,
}

impl Default for EmployeeListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeListComponent {
    pub fn new() -> Self {
        Self {
            projection: Projection::default(),
            status: ViewStatus::Idle,
            selected_index: 0,
            table_state: TableState::default(),
        }
    }

    pub fn update_data(&mut self, projection: Projection, status: ViewStatus) {
        self.projection = projection;
        self.status = status;
        self.update_table_state();
    }

    fn update_table_state(&mut self) {
        if self.projection.rows.is_empty() {
            self.selected_index = 0;
            self.table_state.select(None);
        } else {
            if self.selected_index >= self.projection.rows.len() {
                self.selected_index = self.projection.rows.len() - 1;
            }
            self.table_state.select(Some(self.selected_index));
        }
    }

    /// Row under the cursor, with its index in the full sequence.
    pub fn selected_row(&self) -> Option<&ProjectedRow> {
        self.projection.rows.get(self.selected_index)
    }

    fn next(&mut self) {
        if !self.projection.rows.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.projection.rows.len();
            self.table_state.select(Some(self.selected_index));
        }
    }

    fn previous(&mut self) {
        if !self.projection.rows.is_empty() {
            self.selected_index = if self.selected_index == 0 {
                self.projection.rows.len() - 1
            } else {
                self.selected_index - 1
            };
            self.table_state.select(Some(self.selected_index));
        }
    }

    fn with_selected(&self, to_dialog: impl FnOnce(&ProjectedRow) -> DialogType) -> Action {
        match self.selected_row() {
            Some(row) => Action::ShowDialog(to_dialog(row)),
            None => Action::None,
        }
    }

    fn title(&self) -> String {
        let status = match &self.status {
            ViewStatus::Loading => " • loading…".to_string(),
            ViewStatus::Failed(_) => " • load failed".to_string(),
            ViewStatus::Idle | ViewStatus::Ready => String::new(),
        };
        format!(
            " {} • {} • page {}/{} • {} per page{} ",
            APP_TITLE,
            self.projection.range_label(),
            self.projection.page_index + 1,
            self.projection.page_count,
            self.projection.page_size,
            status
        )
    }
}

impl Component for EmployeeListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.next();
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.previous();
                Action::None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.selected_index = 0;
                Action::NextPage
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.selected_index = 0;
                Action::PreviousPage
            }
            KeyCode::Char('<') => {
                self.selected_index = 0;
                Action::FirstPage
            }
            KeyCode::Char('>') => {
                self.selected_index = 0;
                Action::LastPage
            }
            KeyCode::Char('z') => {
                self.selected_index = 0;
                Action::CyclePageSize
            }
            KeyCode::Char('r') => Action::Refresh,
            KeyCode::Char('n') => Action::ShowDialog(DialogType::EmployeeCreation),
            KeyCode::Enter | KeyCode::Char('a') => self.with_selected(|row| DialogType::AddressList {
                employee: row.employee.clone(),
            }),
            KeyCode::Char('e') => self.with_selected(|row| DialogType::EmployeeEdit {
                employee: row.employee.clone(),
            }),
            KeyCode::Char('d') => self.with_selected(|row| DialogType::DeleteConfirmation {
                employee: row.employee.clone(),
                index: row.index,
            }),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let header = Row::new(vec!["#", "First Name", "Last Name", "Addresses"])
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = self
            .projection
            .rows
            .iter()
            .map(|row| {
                let employee = &row.employee;
                let addresses: Vec<String> = employee
                    .addresses
                    .iter()
                    .filter(|a| !a.is_blank())
                    .map(|a| a.one_line())
                    .collect();
                let addresses = if addresses.is_empty() {
                    Line::styled("(no address)", Style::default().fg(Color::DarkGray))
                } else {
                    Line::from(addresses.join(" | "))
                };
                Row::new(vec![
                    Cell::from((row.index + 1).to_string()),
                    Cell::from(employee.first_name.clone()),
                    Cell::from(employee.last_name.clone()),
                    Cell::from(addresses),
                ])
            })
            .collect();

        let border_color = match self.status {
            ViewStatus::Failed(_) => Color::Red,
            _ => Color::Blue,
        };

        let table = Table::new(
            rows,
            [
                Constraint::Length(5),
                Constraint::Percentage(20),
                Constraint::Percentage(20),
                Constraint::Min(20),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(self.title())
                .style(Style::default().fg(border_color)),
        )
        .row_highlight_style(Style::default().bg(Color::Blue).fg(Color::White).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

        f.render_stateful_widget(table, rect, &mut self.table_state);
    }
}
