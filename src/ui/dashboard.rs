//! Dashboard view: aggregated roster table with search, track filtering,
//! pagination, CSV export and a per-student detail overlay.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};
use tracing::error;

use crate::api::ApiError;
use crate::dashboard::{DashboardState, TrackFilter};
use crate::models::{StudentRecord, Track};
use crate::notify::Notifier;

use super::components::{centered_rect, render_error_banner, render_loading_indicator, track_color};
use super::UiAction;

/// Lifecycle of the aggregated roster
#[derive(Debug, Clone, PartialEq)]
pub enum RosterStatus {
    NotLoaded,
    Loading,
    Ready,
    Failed(String),
}

pub struct DashboardView {
    pub state: DashboardState,
    pub status: RosterStatus,
    pub search_active: bool,
}

impl DashboardView {
    pub fn new() -> Self {
        Self {
            state: DashboardState::new(),
            status: RosterStatus::NotLoaded,
            search_active: false,
        }
    }

    pub fn begin_loading(&mut self) {
        self.status = RosterStatus::Loading;
    }

    /// Install the fetched roster, or discard everything on failure
    pub fn finish_loading(&mut self, result: Result<Vec<StudentRecord>, ApiError>) {
        match result {
            Ok(students) => {
                self.state.set_students(students);
                self.status = RosterStatus::Ready;
            }
            Err(api_error) => {
                error!("Roster aggregation failed: {}", api_error);
                self.state.set_students(Vec::new());
                self.status =
                    RosterStatus::Failed("Failed to load students. Please try again.".to_string());
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, notifier: &mut dyn Notifier) -> Option<UiAction> {
        if self.state.selected.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('x')) {
                self.state.close_selected();
            }
            return None;
        }

        if self.search_active {
            match key.code {
                KeyCode::Esc | KeyCode::Enter => self.search_active = false,
                KeyCode::Char(c) => self.state.push_search_char(c),
                KeyCode::Backspace => self.state.pop_search_char(),
                _ => {}
            }
            return None;
        }

        match key.code {
            KeyCode::Char('/') => self.search_active = true,
            KeyCode::Char('f') => self.state.cycle_filter(),
            KeyCode::Char('r') => return Some(UiAction::ReloadRoster),
            KeyCode::Char('e') => {
                if self.state.filtered().is_empty() {
                    notifier.warning("No students to export");
                } else {
                    return Some(UiAction::ExportCsv);
                }
            }
            KeyCode::Left | KeyCode::Char('p') => self.state.previous_page(),
            KeyCode::Right | KeyCode::Char('n') => self.state.next_page(),
            KeyCode::Up => self.state.move_cursor_up(),
            KeyCode::Down => self.state.move_cursor_down(),
            KeyCode::Enter => self.state.open_selected(),
            KeyCode::Char('q') => return Some(UiAction::Quit),
            _ => {}
        }
        None
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        match &self.status {
            RosterStatus::NotLoaded | RosterStatus::Loading => {
                render_loading_indicator(f, area, "Loading students...");
                return;
            }
            RosterStatus::Failed(message) => {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(3), Constraint::Min(0)])
                    .split(area);
                render_error_banner(f, chunks[0], message);
                let hint = Paragraph::new("Press r to retry")
                    .style(Style::default().fg(Color::Gray));
                f.render_widget(hint, chunks[1]);
                return;
            }
            RosterStatus::Ready => {}
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // stats cards
                Constraint::Length(3), // search / filter bar
                Constraint::Min(5),    // table
                Constraint::Length(3), // pagination footer
            ])
            .split(area);

        self.render_stats(f, chunks[0]);
        self.render_filter_bar(f, chunks[1]);
        self.render_table(f, chunks[2]);
        self.render_footer(f, chunks[3]);

        if let Some(student) = &self.state.selected {
            self.render_detail(f, area, student);
        }
    }

    fn render_stats(&self, f: &mut Frame, area: Rect) {
        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(20), // total registered
                Constraint::Percentage(20),
                Constraint::Percentage(20),
                Constraint::Percentage(20),
                Constraint::Percentage(20),
            ])
            .split(area);

        let total = Paragraph::new(vec![
            Line::from(Span::styled(
                self.state.total().to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from("Total Registered"),
        ])
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(total, cards[0]);

        for (card, track) in cards.iter().skip(1).zip(Track::ALL.iter()) {
            let count = self.state.track_count(track);
            let percentage = self.state.track_percentage(track);
            let paragraph = Paragraph::new(vec![
                Line::from(Span::styled(
                    format!("{count}  ({percentage:.1}%)"),
                    Style::default()
                        .fg(track_color(track))
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(track.as_str()),
            ])
            .block(Block::default().borders(Borders::ALL));
            f.render_widget(paragraph, *card);
        }
    }

    fn render_filter_bar(&self, f: &mut Frame, area: Rect) {
        let search_label = if self.search_active {
            Span::styled(
                format!("🔍 {}▌", self.state.search),
                Style::default().fg(Color::Yellow),
            )
        } else if self.state.search.is_empty() {
            Span::styled(
                "🔍 Search by name, email, or institution (press /)",
                Style::default().fg(Color::DarkGray),
            )
        } else {
            Span::raw(format!("🔍 {}", self.state.search))
        };

        let filter_label = match &self.state.filter {
            TrackFilter::All => self.state.all_tracks_label(),
            TrackFilter::Only(track) => self.state.track_label(track),
        };

        let showing = self.state.filtered().len();
        let bar = Paragraph::new(Line::from(vec![
            search_label,
            Span::raw("  |  "),
            Span::styled(filter_label, Style::default().fg(Color::Cyan)),
            Span::raw(format!(
                "  |  Showing {} student{}",
                showing,
                if showing == 1 { "" } else { "s" }
            )),
            Span::styled(
                "   (f filter · e export · r reload)",
                Style::default().fg(Color::DarkGray),
            ),
        ]))
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(bar, area);
    }

    fn render_table(&self, f: &mut Frame, area: Rect) {
        let rows_data = self.state.current_page_rows();

        if rows_data.is_empty() {
            let empty = Paragraph::new(self.state.empty_message())
                .style(Style::default().fg(Color::Gray))
                .block(Block::default().borders(Borders::ALL).title("Students"));
            f.render_widget(empty, area);
            return;
        }

        let header = Row::new(vec!["#", "Name", "Email", "Track", "Institution", "Skills"])
            .style(Style::default().add_modifier(Modifier::BOLD));

        let start = self.state.start_index();
        let rows: Vec<Row> = rows_data
            .iter()
            .enumerate()
            .map(|(i, student)| {
                Row::new(vec![
                    Cell::from((start + i + 1).to_string()),
                    Cell::from(student.name.clone()),
                    Cell::from(student.email.clone()),
                    Cell::from(Span::styled(
                        student.track.to_string(),
                        Style::default().fg(track_color(&student.track)),
                    )),
                    Cell::from(student.institution.clone()),
                    Cell::from(student.skills.clone().unwrap_or_else(|| "N/A".to_string())),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(4),
                Constraint::Percentage(20),
                Constraint::Percentage(25),
                Constraint::Percentage(18),
                Constraint::Percentage(22),
                Constraint::Percentage(15),
            ],
        )
        .header(header)
        .block(Block::default().borders(Borders::ALL).title("Students"))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );

        let mut table_state = TableState::default();
        table_state.select(Some(self.state.cursor));
        f.render_stateful_widget(table, area, &mut table_state);
    }

    fn render_footer(&self, f: &mut Frame, area: Rect) {
        let (start, end, total) = self.state.showing_range();
        let text = if total == 0 {
            String::new()
        } else {
            format!(
                "Showing {start} to {end} of {total} students  •  Page {} of {}  •  ←/→ pages, Enter details",
                self.state.page,
                self.state.total_pages()
            )
        };
        let footer = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(footer, area);
    }

    fn render_detail(&self, f: &mut Frame, area: Rect, student: &StudentRecord) {
        let overlay = centered_rect(70, 70, area);
        f.render_widget(Clear, overlay);

        let missing = || Span::styled("Not provided", Style::default().fg(Color::DarkGray));
        let optional = |value: &Option<String>| match value {
            Some(text) => Span::raw(text.clone()),
            None => missing(),
        };

        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    "Student Details  ",
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    student.track.to_string(),
                    Style::default().fg(track_color(&student.track)),
                ),
            ]),
            Line::from(""),
            Line::from(vec![Span::styled("Full Name: ", Style::default().add_modifier(Modifier::BOLD)), Span::raw(student.name.clone())]),
            Line::from(vec![Span::styled("Phone: ", Style::default().add_modifier(Modifier::BOLD)), Span::raw(student.phone.clone())]),
            Line::from(vec![Span::styled("Email: ", Style::default().add_modifier(Modifier::BOLD)), Span::raw(student.email.clone())]),
            Line::from(vec![Span::styled("Institution: ", Style::default().add_modifier(Modifier::BOLD)), Span::raw(student.institution.clone())]),
            Line::from(vec![Span::styled("Course of Study: ", Style::default().add_modifier(Modifier::BOLD)), optional(&student.course)]),
            Line::from(vec![Span::styled("Level of Study: ", Style::default().add_modifier(Modifier::BOLD)), optional(&student.level)]),
        ];

        if let Some(skills) = &student.skills {
            lines.push(Line::from(vec![
                Span::styled("Skills: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(skills.clone()),
            ]));
        }
        if let Some(linkedin) = &student.linkedin {
            lines.push(Line::from(vec![
                Span::styled("LinkedIn: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(linkedin.clone(), Style::default().fg(Color::Blue)),
            ]));
        }
        if let Some(resume_url) = &student.resume_url {
            lines.push(Line::from(vec![
                Span::styled("Resume: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(resume_url.clone(), Style::default().fg(Color::Blue)),
            ]));
        }
        if let Some(location) = &student.location {
            lines.push(Line::from(vec![
                Span::styled("Location: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(location.clone()),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press Esc to close",
            Style::default().fg(Color::Gray),
        )));

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, overlay);
    }
}

impl Default for DashboardView {
    fn default() -> Self {
        Self::new()
    }
}
