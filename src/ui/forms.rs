//! Interactive views for the two lead-capture forms.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use std::path::Path;

use crate::forms::{CompanyForm, FormField, StudentForm};
use crate::notify::Notifier;

use super::components::{centered_rect, format_file_size};
use super::UiAction;

fn field_lines<'a>(field: &'a FormField, focused: bool) -> Vec<Line<'a>> {
    let marker = if focused { "▶ " } else { "  " };
    let label_style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let value_span = if field.value.is_empty() {
        Span::styled(field.spec.placeholder, Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(field.value.as_str())
    };

    let mut lines = vec![Line::from(vec![
        Span::raw(marker),
        Span::styled(field.spec.label, label_style),
        Span::raw(": "),
        value_span,
    ])];

    if let Some(error) = &field.error {
        lines.push(Line::from(Span::styled(
            format!("    ⚠ {error}"),
            Style::default().fg(Color::Red),
        )));
    }

    lines
}

fn button_line(label: &str, focused: bool) -> Line<'_> {
    let style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    Line::from(vec![Span::raw("  "), Span::styled(format!("[ {label} ]"), style)])
}

// ---------------------------------------------------------------------------
// Student application
// ---------------------------------------------------------------------------

const STUDENT_FIELD_COUNT: usize = 8;
const FOCUS_TRACK: usize = STUDENT_FIELD_COUNT;
const FOCUS_RESUME_PATH: usize = STUDENT_FIELD_COUNT + 1;
const FOCUS_UPLOAD: usize = STUDENT_FIELD_COUNT + 2;
const FOCUS_SUBMIT: usize = STUDENT_FIELD_COUNT + 3;
const STUDENT_CONTROL_COUNT: usize = STUDENT_FIELD_COUNT + 4;

pub struct StudentFormView {
    pub form: StudentForm,
    pub focus: usize,
    /// Path typed into the resume selector
    pub resume_path: String,
}

impl StudentFormView {
    pub fn new() -> Self {
        Self {
            form: StudentForm::new(),
            focus: 0,
            resume_path: String::new(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, notifier: &mut dyn Notifier) -> Option<UiAction> {
        if self.form.show_confirmation {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.form.show_confirmation = false;
                self.resume_path.clear();
                return Some(UiAction::GoHome);
            }
            return None;
        }

        match key.code {
            KeyCode::Down => self.focus = (self.focus + 1) % STUDENT_CONTROL_COUNT,
            KeyCode::Up => {
                self.focus = if self.focus == 0 {
                    STUDENT_CONTROL_COUNT - 1
                } else {
                    self.focus - 1
                }
            }
            KeyCode::Enter => return self.activate(notifier),
            KeyCode::Left | KeyCode::Right if self.focus == FOCUS_TRACK => {
                self.form.cycle_track();
            }
            KeyCode::Char(c) => match self.focus {
                FOCUS_TRACK => {
                    if c == ' ' {
                        self.form.cycle_track();
                    }
                }
                FOCUS_RESUME_PATH => self.resume_path.push(c),
                FOCUS_UPLOAD | FOCUS_SUBMIT => {}
                index => self.form.fields[index].push_char(c),
            },
            KeyCode::Backspace => match self.focus {
                FOCUS_RESUME_PATH => {
                    self.resume_path.pop();
                }
                FOCUS_TRACK | FOCUS_UPLOAD | FOCUS_SUBMIT => {}
                index => self.form.fields[index].pop_char(),
            },
            _ => {}
        }
        None
    }

    fn activate(&mut self, notifier: &mut dyn Notifier) -> Option<UiAction> {
        match self.focus {
            FOCUS_TRACK => {
                self.form.cycle_track();
                None
            }
            FOCUS_RESUME_PATH => {
                let path = self.resume_path.trim().to_string();
                if path.is_empty() {
                    self.form.resume.clear();
                } else {
                    self.form.resume.select(Path::new(&path), notifier);
                }
                None
            }
            FOCUS_UPLOAD => self
                .form
                .resume
                .start_upload(notifier)
                .map(UiAction::UploadResume),
            FOCUS_SUBMIT => self
                .form
                .prepare_submission(notifier)
                .map(UiAction::SubmitStudent),
            _ => {
                // Enter on a text field moves to the next control
                self.focus = (self.focus + 1) % STUDENT_CONTROL_COUNT;
                None
            }
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::from(Span::styled(
                "Start Your Tech Journey",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from("Join hundreds of ambitious Nigerian students connecting with top tech companies."),
            Line::from(Span::styled(
                "⚡ Quick Process   🎯 Smart Matching   🚀 No Fees",
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
        ];

        for (index, field) in self.form.fields.iter().enumerate() {
            lines.extend(field_lines(field, self.focus == index));
        }

        // Track selector
        let track_marker = if self.focus == FOCUS_TRACK { "▶ " } else { "  " };
        let track_value = match &self.form.track {
            Some(track) => Span::raw(track.to_string()),
            None => Span::styled(
                "Select your preferred track (←/→)",
                Style::default().fg(Color::DarkGray),
            ),
        };
        lines.push(Line::from(vec![
            Span::raw(track_marker),
            Span::styled(
                "Track of Interest",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(": "),
            track_value,
        ]));
        if let Some(error) = &self.form.track_error {
            lines.push(Line::from(Span::styled(
                format!("    ⚠ {error}"),
                Style::default().fg(Color::Red),
            )));
        }

        // Resume selector
        let resume_marker = if self.focus == FOCUS_RESUME_PATH { "▶ " } else { "  " };
        let path_value = if self.resume_path.is_empty() {
            Span::styled(
                "path/to/resume.pdf (PDF/DOC, max 5MB)",
                Style::default().fg(Color::DarkGray),
            )
        } else {
            Span::raw(self.resume_path.as_str())
        };
        lines.push(Line::from(vec![
            Span::raw(resume_marker),
            Span::styled("Resume", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(": "),
            path_value,
        ]));

        if let Some(file) = &self.form.resume.selected {
            let status = if self.form.resume.uploading {
                Span::styled("uploading...", Style::default().fg(Color::Yellow))
            } else if self.form.resume.is_uploaded() {
                Span::styled("✅ Uploaded", Style::default().fg(Color::Green))
            } else {
                Span::styled("not uploaded yet", Style::default().fg(Color::Yellow))
            };
            lines.push(Line::from(vec![
                Span::raw(format!("    📄 {} ({}) — ", file.name, format_file_size(file.size))),
                status,
            ]));
        }
        if let Some(error) = &self.form.resume.error {
            lines.push(Line::from(Span::styled(
                format!("    ⚠ {error}"),
                Style::default().fg(Color::Red),
            )));
        }

        lines.push(Line::from(""));
        lines.push(button_line(
            if self.form.resume.uploading {
                "Uploading..."
            } else {
                "Upload Resume"
            },
            self.focus == FOCUS_UPLOAD,
        ));
        lines.push(button_line(
            if self.form.submitting {
                "Submitting Application..."
            } else {
                "Submit Application 🚀"
            },
            self.focus == FOCUS_SUBMIT,
        ));

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("🎓 For Students"));
        f.render_widget(paragraph, area);

        if self.form.show_confirmation {
            self.render_confirmation(f, area);
        }
    }

    fn render_confirmation(&self, f: &mut Frame, area: Rect) {
        let overlay = centered_rect(50, 30, area);
        f.render_widget(Clear, overlay);
        let paragraph = Paragraph::new(vec![
            Line::from(Span::styled(
                "🎉 Application Submitted!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Your application is under review."),
            Line::from("Please check your email for updates."),
            Line::from(""),
            Line::from(Span::styled(
                "Press Enter to continue",
                Style::default().fg(Color::Gray),
            )),
        ])
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, overlay);
    }
}

impl Default for StudentFormView {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Company registration
// ---------------------------------------------------------------------------

const COMPANY_FIELD_COUNT: usize = 5;
const FOCUS_COMPANY_SUBMIT: usize = COMPANY_FIELD_COUNT;
const COMPANY_CONTROL_COUNT: usize = COMPANY_FIELD_COUNT + 1;

pub struct CompanyFormView {
    pub form: CompanyForm,
    pub focus: usize,
}

impl CompanyFormView {
    pub fn new() -> Self {
        Self {
            form: CompanyForm::new(),
            focus: 0,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<UiAction> {
        match key.code {
            KeyCode::Down => self.focus = (self.focus + 1) % COMPANY_CONTROL_COUNT,
            KeyCode::Up => {
                self.focus = if self.focus == 0 {
                    COMPANY_CONTROL_COUNT - 1
                } else {
                    self.focus - 1
                }
            }
            KeyCode::Enter => {
                if self.focus == FOCUS_COMPANY_SUBMIT {
                    return self.form.prepare_submission().map(UiAction::SubmitCompany);
                }
                self.focus = (self.focus + 1) % COMPANY_CONTROL_COUNT;
            }
            KeyCode::Char(c) if self.focus < COMPANY_FIELD_COUNT => {
                self.form.fields[self.focus].push_char(c);
            }
            KeyCode::Backspace if self.focus < COMPANY_FIELD_COUNT => {
                self.form.fields[self.focus].pop_char();
            }
            _ => {}
        }
        None
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::from(Span::styled(
                "Find Top Tech Talent",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from("Connect with ambitious Nigerian university students ready to contribute to your team."),
            Line::from(Span::styled(
                "👥 Quality Candidates   💼 Easy Hiring   🌍 Impact Nigeria's Future",
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
        ];

        for (index, field) in self.form.fields.iter().enumerate() {
            lines.extend(field_lines(field, self.focus == index));
        }

        lines.push(Line::from(""));
        lines.push(button_line(
            if self.form.submitting {
                "Submitting Opportunity..."
            } else {
                "Post Opportunity 🚀"
            },
            self.focus == FOCUS_COMPANY_SUBMIT,
        ));

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("🏢 For Companies"));
        f.render_widget(paragraph, area);
    }
}

impl Default for CompanyFormView {
    fn default() -> Self {
        Self::new()
    }
}
