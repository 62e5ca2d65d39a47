/// Shared render helpers for the Tech Compass TUI
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Track;
use crate::notify::ToastKind;

/// Render a loading indicator
pub fn render_loading_indicator(f: &mut Frame, area: Rect, message: &str) {
    let loading = Paragraph::new(message)
        .block(Block::default().borders(Borders::ALL).title("Loading"))
        .style(Style::default().fg(Color::Yellow));

    f.render_widget(loading, area);
}

/// Render a persistent error banner
pub fn render_error_banner(f: &mut Frame, area: Rect, error: &str) {
    let banner = Paragraph::new(error)
        .block(Block::default().borders(Borders::ALL).title("Error"))
        .style(Style::default().fg(Color::Red));

    f.render_widget(banner, area);
}

/// Badge color per track, mirroring the dashboard's color coding
pub fn track_color(track: &Track) -> Color {
    match track {
        Track::SoftwareEngineering => Color::Blue,
        Track::CyberSecurity => Color::Red,
        Track::MachineLearning => Color::Magenta,
        Track::ProductDesign => Color::Green,
        Track::Other(_) => Color::Gray,
    }
}

/// Style for a toast banner
pub fn toast_style(kind: ToastKind) -> Style {
    let color = match kind {
        ToastKind::Info => Color::Cyan,
        ToastKind::Success => Color::Green,
        ToastKind::Warning => Color::Yellow,
        ToastKind::Error => Color::Red,
    };
    Style::default().fg(color)
}

/// File size shown next to a selected resume, e.g. "0.25 MB"
pub fn format_file_size(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0)
}

/// Centered overlay rectangle, sized as a percentage of `area`
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(262_144), "0.25 MB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5.00 MB");
        assert_eq!(format_file_size(0), "0.00 MB");
    }

    #[test]
    fn test_centered_rect_stays_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(60, 50, area);
        assert!(rect.width <= 60);
        assert!(rect.height <= 20);
        assert!(rect.x >= 20);
        assert!(rect.y >= 10);
    }

    #[test]
    fn test_track_colors_are_distinct_for_fixed_tracks() {
        let colors: Vec<Color> = Track::ALL.iter().map(track_color).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in colors.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
