//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

/// Screen regions of the main view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainAreas {
    pub search: Rect,
    pub table: Rect,
    pub status: Rect,
}

impl LayoutManager {
    /// Search bar on top, employee table in the middle, one status line at the bottom
    #[must_use]
    pub fn main_layout(area: Rect) -> MainAreas {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        MainAreas {
            search: chunks[0],
            table: chunks[1],
            status: chunks[2],
        }
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines.min(r.height)),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Inner area of a bordered dialog, leaving one blank column on each side
    #[must_use]
    pub fn dialog_content(dialog_area: Rect) -> Rect {
        Rect::new(
            dialog_area.x + 2,
            dialog_area.y + 1,
            dialog_area.width.saturating_sub(4),
            dialog_area.height.saturating_sub(2),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_layout_reserves_search_and_status_rows() {
        let areas = LayoutManager::main_layout(Rect::new(0, 0, 100, 40));
        assert_eq!(areas.search.height, 3);
        assert_eq!(areas.status.height, 1);
        assert_eq!(areas.status.y, 39);
        assert_eq!(areas.table.height, 36);
    }

    #[test]
    fn centered_rect_lines_never_exceeds_area() {
        let area = Rect::new(0, 0, 80, 10);
        let popup = LayoutManager::centered_rect_lines(50, 30, area);
        assert!(popup.height <= area.height);
        assert_eq!(popup.width, 40);
    }
}
