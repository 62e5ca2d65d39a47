use std::io;
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use chrono::Local;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use crate::api::{ApiError, CompassBackend, CompassClient};
use crate::collector::RosterCollector;
use crate::export;
use crate::models::{Config, StudentRecord};
use crate::notify::{Notifier, ToastStore};

use super::components::toast_style;
use super::dashboard::{DashboardView, RosterStatus};
use super::forms::{CompanyFormView, StudentFormView};
use super::{pages, Tab, UiAction};

/// Results of spawned network work, delivered back to the draw loop
enum AppEvent {
    StudentSubmitted(Result<(), ApiError>),
    CompanySubmitted(Result<(), ApiError>),
    ResumeUploaded(Result<String, ApiError>),
    ResumeReadFailed(String),
    RosterLoaded(Result<Vec<StudentRecord>, ApiError>),
}

pub struct CompassApp {
    backend: Arc<dyn CompassBackend>,
    pub tab: Tab,
    pub student_view: StudentFormView,
    pub company_view: CompanyFormView,
    pub dashboard_view: DashboardView,
    pub toasts: ToastStore,
    events_tx: mpsc::UnboundedSender<AppEvent>,
    events_rx: mpsc::UnboundedReceiver<AppEvent>,
    pub should_quit: bool,
}

impl CompassApp {
    pub fn new(backend: Arc<dyn CompassBackend>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            backend,
            tab: Tab::Home,
            student_view: StudentFormView::new(),
            company_view: CompanyFormView::new(),
            dashboard_view: DashboardView::new(),
            toasts: ToastStore::new(),
            events_tx,
            events_rx,
            should_quit: false,
        }
    }

    pub fn draw(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tab bar
                Constraint::Min(0),    // Content
                Constraint::Length(3), // Status bar
            ])
            .split(f.area());

        self.render_tab_bar(f, chunks[0]);

        match self.tab {
            Tab::Home => pages::render_home(f, chunks[1]),
            Tab::Apply => self.student_view.render(f, chunks[1]),
            Tab::Companies => self.company_view.render(f, chunks[1]),
            Tab::Dashboard => self.dashboard_view.render(f, chunks[1]),
            Tab::News => pages::render_news(f, chunks[1]),
            Tab::Partners => pages::render_partners(f, chunks[1]),
            Tab::Testimonials => pages::render_testimonials(f, chunks[1]),
        }

        self.render_status_bar(f, chunks[2]);
    }

    fn render_tab_bar(&self, f: &mut Frame, area: Rect) {
        let titles: Vec<&str> = Tab::ALL.iter().map(|t| t.title()).collect();

        let tabs = ratatui::widgets::Tabs::new(titles)
            .block(Block::default().borders(Borders::ALL).title("Tech Compass"))
            .style(Style::default().fg(Color::White))
            .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .select(self.tab.index());

        f.render_widget(tabs, area);
    }

    fn render_status_bar(&self, f: &mut Frame, area: Rect) {
        let line = match self.toasts.latest() {
            Some(toast) => Line::from(Span::styled(toast.message.clone(), toast_style(toast.kind))),
            None => Line::from(vec![
                Span::styled("Tab", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
                Span::styled(" switch view • ", Style::default().fg(Color::Gray)),
                Span::styled("↑/↓", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
                Span::styled(" move • ", Style::default().fg(Color::Gray)),
                Span::styled("Enter", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
                Span::styled(" activate • ", Style::default().fg(Color::Gray)),
                Span::styled("Ctrl+Q", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
                Span::styled(" quit", Style::default().fg(Color::Gray)),
            ]),
        };

        let paragraph = Paragraph::new(line)
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::White));
        f.render_widget(paragraph, area);
    }

    fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
        // The dashboard aggregates on first visit, like the page did on mount
        if self.tab == Tab::Dashboard && self.dashboard_view.status == RosterStatus::NotLoaded {
            self.reload_roster();
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
        {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Tab => {
                self.select_tab(self.tab.next());
                return;
            }
            KeyCode::BackTab => {
                self.select_tab(self.tab.previous());
                return;
            }
            _ => {}
        }

        let action = match self.tab {
            Tab::Apply => self.student_view.handle_key(key, &mut self.toasts),
            Tab::Companies => self.company_view.handle_key(key),
            Tab::Dashboard => self.dashboard_view.handle_key(key, &mut self.toasts),
            _ => match key.code {
                KeyCode::Char('q') => Some(UiAction::Quit),
                _ => None,
            },
        };

        if let Some(action) = action {
            self.dispatch(action);
        }
    }

    fn dispatch(&mut self, action: UiAction) {
        match action {
            UiAction::SubmitStudent(application) => {
                let backend = Arc::clone(&self.backend);
                let tx = self.events_tx.clone();
                tokio::spawn(async move {
                    let result = backend.submit_student(&application).await;
                    let _ = tx.send(AppEvent::StudentSubmitted(result));
                });
            }
            UiAction::SubmitCompany(registration) => {
                let backend = Arc::clone(&self.backend);
                let tx = self.events_tx.clone();
                tokio::spawn(async move {
                    let result = backend.submit_company(&registration).await;
                    let _ = tx.send(AppEvent::CompanySubmitted(result));
                });
            }
            UiAction::UploadResume(file) => {
                let backend = Arc::clone(&self.backend);
                let tx = self.events_tx.clone();
                tokio::spawn(async move {
                    match tokio::fs::read(&file.path).await {
                        Ok(bytes) => {
                            let result = backend.upload_resume(&file.name, bytes).await;
                            let _ = tx.send(AppEvent::ResumeUploaded(result));
                        }
                        Err(error) => {
                            let _ = tx.send(AppEvent::ResumeReadFailed(format!(
                                "Could not read {}: {}",
                                file.path.display(),
                                error
                            )));
                        }
                    }
                });
            }
            UiAction::ReloadRoster => self.reload_roster(),
            UiAction::ExportCsv => self.export_csv(),
            UiAction::GoHome => self.select_tab(Tab::Home),
            UiAction::Quit => self.should_quit = true,
        }
    }

    fn reload_roster(&mut self) {
        self.dashboard_view.begin_loading();
        let backend = Arc::clone(&self.backend);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let collector = RosterCollector::new(backend);
            let result = collector.fetch_all().await;
            let _ = tx.send(AppEvent::RosterLoaded(result));
        });
    }

    fn export_csv(&mut self) {
        let filtered = self.dashboard_view.state.filtered();
        let today = Local::now().date_naive();
        match export::export_to_dir(&filtered, Path::new("."), today) {
            Ok(path) => self
                .toasts
                .success(&format!("📥 Exported {} students to {}", filtered.len(), path.display())),
            Err(error) => {
                tracing::warn!("CSV export failed: {}", error);
                self.toasts.error("❌ Failed to export CSV");
            }
        }
    }

    fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::StudentSubmitted(result) => {
                self.student_view
                    .form
                    .finish_submission(result, &mut self.toasts);
            }
            AppEvent::CompanySubmitted(result) => {
                self.company_view
                    .form
                    .finish_submission(result, &mut self.toasts);
            }
            AppEvent::ResumeUploaded(result) => {
                self.student_view
                    .form
                    .resume
                    .finish_upload(result, &mut self.toasts);
            }
            AppEvent::ResumeReadFailed(message) => {
                tracing::warn!("{}", message);
                self.student_view.form.resume.uploading = false;
                self.toasts.error("❌ Failed to upload resume. Please try again.");
            }
            AppEvent::RosterLoaded(result) => {
                self.dashboard_view.finish_loading(result);
            }
        }
    }

    /// Drain results of finished background work
    pub fn process_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_app_event(event);
        }
    }
}

/// Run the main TUI application
pub async fn run_app(config: Config) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let client: Arc<dyn CompassBackend> = Arc::new(CompassClient::new(&config)?);
    let mut app = CompassApp::new(client);

    // Main application loop
    let result = loop {
        if let Err(e) = terminal.draw(|f| app.draw(f)) {
            break Err(e.into());
        }

        app.process_events();

        // Poll so background results keep flowing while the user is idle
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key_event(key);
                }
            }
        }

        if app.should_quit {
            break Ok(());
        }
    };

    // Cleanup terminal
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    result
}
