use crate::constants::DIALOG_TITLE_DEBUG_LOGS;
use crate::entities::Employee;
use crate::logger::Logger;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};

const HELP_CONTENT: &str = r"
EMPLOYEE DIRECTORY
==================

EMPLOYEE LIST
-------------
j/k, ↑/↓    Select next/previous employee
h/l, ←/→    Previous/next page
< / >       First/last page
z           Cycle page size (5, 10, 25, 50)
r           Reload with the active search

EDITING
-------
n           Create employees (Ctrl+N queues another)
e           Edit the selected employee's name
a / Enter   Open the selected employee's addresses
d           Delete the selected employee (with confirmation)

ADDRESS LIST
------------
a           Add an address
e / Enter   Edit the selected address
d           Remove the selected address (one must remain)
s           Save changes to the directory
Esc         Close without saving

SEARCH
------
/           Focus the search bar
Tab         Cycle criterion: Everyone, First Name, Last Name, City, State, Zip Code
←/→         Choose the state when searching by State
Enter       Run the search
Esc         Leave the search bar

GENERAL
-------
?           Toggle this help
G           Show debug logs
q, Ctrl+C   Quit

Press 'Esc', '?' or 'q' to close this help panel
";

fn render_scrollbar(f: &mut Frame, area: Rect, scrollbar_state: &mut ScrollbarState) {
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("↑"))
        .end_symbol(Some("↓"))
        .track_symbol(Some("│"))
        .thumb_symbol("▐")
        .style(Style::default().fg(Color::Gray))
        .thumb_style(Style::default().fg(Color::White));

    f.render_stateful_widget(scrollbar, area, scrollbar_state);
}

/// Slice `content` to the lines visible at `scroll_offset`, updating the scrollbar.
/// Returns the visible text and whether the content overflows.
fn visible_window(
    content: &str,
    visible_height: usize,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) -> (String, bool) {
    let lines: Vec<&str> = content.lines().collect();
    let total_lines = lines.len();

    let max_scroll = total_lines.saturating_sub(visible_height);
    let clamped_offset = scroll_offset.min(max_scroll);

    *scrollbar_state = scrollbar_state
        .content_length(total_lines)
        .viewport_content_length(visible_height)
        .position(clamped_offset);

    let visible_lines: Vec<&str> = lines
        .iter()
        .skip(clamped_offset)
        .take(visible_height)
        .copied()
        .collect();

    (visible_lines.join("\n"), total_lines > visible_height)
}

pub fn render_delete_confirmation_dialog(f: &mut Frame, area: Rect, employee: &Employee) {
    let dialog_area = LayoutManager::centered_rect_lines(50, 6, area);
    f.render_widget(Clear, dialog_area);

    let message = format!("Delete {} ({})?", employee.full_name(), employee.employee_id);
    let instructions = "Press Enter or 'y' to confirm, Esc or 'n' to cancel";

    let block = Block::default()
        .borders(Borders::ALL)
        .title("⚠ Confirm Delete")
        .style(Style::default().fg(Color::Red));

    let message_paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    let instructions_paragraph = Paragraph::new(instructions)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Length(2), Constraint::Length(1)])
        .split(dialog_area);

    f.render_widget(block, dialog_area);
    f.render_widget(message_paragraph, chunks[0]);
    f.render_widget(instructions_paragraph, chunks[1]);
}

fn render_message_dialog(
    f: &mut Frame,
    area: Rect,
    title: &str,
    color: Color,
    message: &str,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let dialog_area = LayoutManager::centered_rect_lines(70, 12, area);
    f.render_widget(Clear, dialog_area);

    let instructions = "Press any key to continue • j/k to scroll if needed";

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(color));

    let content_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(2),
        dialog_area.height.saturating_sub(4),
    );

    let instructions_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + dialog_area.height.saturating_sub(2),
        dialog_area.width.saturating_sub(2),
        1,
    );

    let (message_text, overflows) =
        visible_window(message, content_area.height as usize, scroll_offset, scrollbar_state);

    let message_paragraph = Paragraph::new(message_text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    let instructions_paragraph = Paragraph::new(instructions)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    f.render_widget(block, dialog_area);
    f.render_widget(message_paragraph, content_area);
    f.render_widget(instructions_paragraph, instructions_area);

    if overflows {
        render_scrollbar(f, content_area, scrollbar_state);
    }
}

pub fn render_info_dialog(
    f: &mut Frame,
    area: Rect,
    message: &str,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    render_message_dialog(f, area, "ℹ Info", Color::Blue, message, scroll_offset, scrollbar_state);
}

pub fn render_error_dialog(
    f: &mut Frame,
    area: Rect,
    message: &str,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    render_message_dialog(f, area, "✖ Error", Color::Red, message, scroll_offset, scrollbar_state);
}

fn render_full_panel(
    f: &mut Frame,
    area: Rect,
    title: &str,
    content: &str,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let panel_area = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, panel_area);

    let margin_x = 2;
    let margin_y = 1;
    let content_area = Rect::new(
        panel_area.x + margin_x,
        panel_area.y + margin_y,
        panel_area.width.saturating_sub(margin_x * 2),
        panel_area.height.saturating_sub(margin_y * 2),
    );

    let visible_height = content_area.height.saturating_sub(2) as usize;
    let (text, overflows) = visible_window(content, visible_height, scroll_offset, scrollbar_state);

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_alignment(Alignment::Center),
        )
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);

    f.render_widget(paragraph, content_area);

    if overflows {
        render_scrollbar(f, content_area, scrollbar_state);
    }
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll_offset: usize, scrollbar_state: &mut ScrollbarState) {
    render_full_panel(
        f,
        area,
        "📖 Help - Press 'Esc', '?' or 'q' to close",
        HELP_CONTENT,
        scroll_offset,
        scrollbar_state,
    );
}

pub fn render_logs_dialog(
    f: &mut Frame,
    area: Rect,
    logger: Option<&Logger>,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let logs = match logger {
        Some(logger) => logger.get_logs(),
        None => vec!["No logger available".to_string()],
    };

    let logs_content = if logs.is_empty() {
        "No debug logs available".to_string()
    } else {
        logs.join("\n")
    };

    render_full_panel(
        f,
        area,
        DIALOG_TITLE_DEBUG_LOGS,
        &logs_content,
        scroll_offset,
        scrollbar_state,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_window_clamps_offset_to_last_page() {
        let content = (1..=10).map(|i| i.to_string()).collect::<Vec<_>>().join("\n");
        let mut state = ScrollbarState::new(0);
        let (text, overflows) = visible_window(&content, 4, 100, &mut state);
        assert!(overflows);
        assert_eq!(text, "7\n8\n9\n10");
    }

    #[test]
    fn short_content_does_not_overflow() {
        let mut state = ScrollbarState::new(0);
        let (text, overflows) = visible_window("one\ntwo", 5, 0, &mut state);
        assert!(!overflows);
        assert_eq!(text, "one\ntwo");
    }
}
