use crate::forms::TextInput;
use crate::search::{SearchCriterion, SearchQuery};
use crate::ui::components::dialogs::common;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Criterion selector plus its parameter. Only emits a search on Enter.
pub struct SearchBarComponent {
    pub query: SearchQuery,
    pub input: TextInput,
    pub focused: bool,
}

impl Default for SearchBarComponent {
    fn default() -> Self {
        Self::new(SearchQuery::default())
    }
}

impl SearchBarComponent {
    pub fn new(query: SearchQuery) -> Self {
        Self {
            input: TextInput::new(query.text.clone()),
            query,
            focused: false,
        }
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Query as it would be submitted now.
    pub fn current_query(&self) -> SearchQuery {
        SearchQuery {
            text: self.input.value().to_string(),
            ..self.query.clone()
        }
    }

    fn set_criterion(&mut self, criterion: SearchCriterion) {
        self.query.criterion = criterion;
        log::debug!("Search criterion set to {}", criterion.label());
    }

    fn parameter_line(&self) -> Line<'static> {
        match self.query.criterion {
            SearchCriterion::Everyone => Line::styled("(no parameter)", Style::default().fg(Color::DarkGray)),
            SearchCriterion::State => Line::from(vec![
                Span::styled("◀ ", Style::default().fg(Color::Cyan)),
                Span::raw(self.query.state.clone()),
                Span::styled(" ▶", Style::default().fg(Color::Cyan)),
            ]),
            _ => {
                let paragraph_text = if self.focused {
                    let chars: Vec<char> = self.input.value().chars().collect();
                    let split = self.input.cursor().min(chars.len());
                    let before: String = chars[..split].iter().collect();
                    let after: String = chars[split..].iter().collect();
                    format!("{}█{}", before, after)
                } else {
                    self.input.value().to_string()
                };
                Line::from(paragraph_text)
            }
        }
    }
}

impl Component for SearchBarComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.focused {
            return Action::None;
        }

        match key.code {
            KeyCode::Esc => {
                self.focused = false;
                Action::None
            }
            KeyCode::Enter => {
                self.focused = false;
                Action::Search(self.current_query())
            }
            KeyCode::Tab => {
                self.set_criterion(self.query.criterion.next());
                Action::None
            }
            KeyCode::BackTab => {
                self.set_criterion(self.query.criterion.previous());
                Action::None
            }
            KeyCode::Left | KeyCode::Up if self.query.criterion == SearchCriterion::State => {
                self.query.previous_state();
                Action::None
            }
            KeyCode::Right | KeyCode::Down if self.query.criterion == SearchCriterion::State => {
                self.query.next_state();
                Action::None
            }
            _ => {
                if self.query.criterion.uses_text() {
                    common::edit_input(&mut self.input, key);
                }
                Action::None
            }
        }
    }

    fn update(&mut self, action: Action) -> Action {
        // Keep the bar in sync with searches started elsewhere
        if let Action::Search(query) = &action {
            self.input.set(query.text.clone());
            self.query = query.clone();
        }
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let border_color = if self.focused { Color::Cyan } else { Color::Gray };
        let title = if self.focused {
            " Search • Tab criterion • Enter run • Esc leave "
        } else {
            " Search • press / "
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .style(Style::default().fg(border_color));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(14), Constraint::Min(0)])
            .split(inner);

        let criterion = Paragraph::new(Line::from(vec![Span::styled(
            format!("[{}]", self.query.criterion.label()),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )]));
        f.render_widget(criterion, chunks[0]);
        f.render_widget(
            Paragraph::new(self.parameter_line()).style(Style::default().fg(Color::White)),
            chunks[1],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::DirectoryQuery;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn ignores_keys_until_focused() {
        let mut bar = SearchBarComponent::default();
        assert!(matches!(bar.handle_key_events(key(KeyCode::Enter)), Action::None));
    }

    #[test]
    fn typed_city_is_submitted_on_enter() {
        let mut bar = SearchBarComponent::default();
        bar.focus();
        for _ in 0..3 {
            bar.handle_key_events(key(KeyCode::Tab));
        }
        for c in "Austin".chars() {
            bar.handle_key_events(key(KeyCode::Char(c)));
        }

        match bar.handle_key_events(key(KeyCode::Enter)) {
            Action::Search(query) => {
                assert_eq!(query.criterion, SearchCriterion::City);
                assert_eq!(query.to_directory_query(), DirectoryQuery::City("Austin".to_string()));
            }
            other => panic!("unexpected action: {:?}", other),
        }
        assert!(!bar.is_focused());
    }

    #[test]
    fn arrows_pick_state_for_state_criterion() {
        let mut bar = SearchBarComponent::default();
        bar.focus();
        bar.handle_key_events(key(KeyCode::BackTab));
        bar.handle_key_events(key(KeyCode::BackTab));
        assert_eq!(bar.query.criterion, SearchCriterion::State);

        bar.handle_key_events(key(KeyCode::Right));
        assert_eq!(bar.query.state, "Alaska");
        bar.handle_key_events(key(KeyCode::Left));
        bar.handle_key_events(key(KeyCode::Left));
        assert_eq!(bar.query.state, "Wyoming");
    }
}
