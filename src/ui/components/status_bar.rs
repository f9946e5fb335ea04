//! Status bar component

use crate::roster::ViewStatus;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

const SHORTCUTS: &str = "/: search • n: new • e: edit • a: addresses • d: delete • ←→: page • ?: help • q: quit";

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Text and colour shown for the given state. A pending message wins over the shortcuts.
    pub fn content(status: &ViewStatus, running_tasks: usize, message: Option<&str>) -> (String, Color) {
        if let ViewStatus::Failed(error) = status {
            return (format!("❌ {}", error), Color::Red);
        }
        if let Some(message) = message {
            return (message.to_string(), Color::Green);
        }
        if status == &ViewStatus::Loading {
            return ("⟳ Loading employees...".to_string(), Color::Yellow);
        }
        if running_tasks > 0 {
            return (format!("⟳ {} request(s) in flight...", running_tasks), Color::Yellow);
        }
        (SHORTCUTS.to_string(), Color::Gray)
    }

    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, status: &ViewStatus, running_tasks: usize, message: Option<&str>) {
        let (status_text, status_color) = Self::content(status, running_tasks, message);

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_takes_precedence() {
        let (text, color) = StatusBar::content(&ViewStatus::Failed("boom".into()), 2, Some("saved"));
        assert!(text.contains("boom"));
        assert_eq!(color, Color::Red);
    }

    #[test]
    fn idle_shows_shortcuts() {
        let (text, _) = StatusBar::content(&ViewStatus::Ready, 0, None);
        assert_eq!(text, SHORTCUTS);
    }
}
