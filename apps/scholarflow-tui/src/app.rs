//! Application state and main render loop

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use tui_textarea::TextArea;

use scholarflow_core::email::{author_rejection_email, EmailDraft};
use scholarflow_core::manuscript::ManuscriptStatus;
use scholarflow_core::navigation::{Navigation, Route};
use scholarflow_core::notice::{Notice, NoticeLevel, Outcome};
use scholarflow_core::router::{Router, ViewState};
use scholarflow_core::worklist::PrimaryAction;
use scholarflow_core::{Result, SampleData, ScholarflowConfig};

use crate::keybindings::{normal_mode_action, Action};
use crate::mode::Mode;
use crate::views::{
    render_not_found, EditorAssignmentView, EeWorkspaceView, ManuscriptReviewView, Panel,
    PostEeView, ReviewerAssignmentView, WorklistView,
};
use crate::widgets::{ModeIndicator, Sidebar};

/// What the open text dialog is capturing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputTarget {
    RejectComments,
    ReplaceReason,
}

/// Text capture dialog shown in insert mode
pub struct TextInput {
    pub target: InputTarget,
    pub textarea: TextArea<'static>,
}

impl TextInput {
    fn new(target: InputTarget) -> Self {
        let (title, placeholder) = match target {
            InputTarget::RejectComments => (
                "Reject Manuscript - comments for the author (Enter: confirm, Esc: cancel)",
                "Comments are required",
            ),
            InputTarget::ReplaceReason => (
                "Replace Reviewer - reason (Enter: confirm, Esc: cancel)",
                "Optional note for the editorial office",
            ),
        };
        let mut textarea = TextArea::default();
        textarea.set_block(Block::default().title(title).borders(Borders::ALL));
        textarea.set_placeholder_text(placeholder);
        Self { target, textarea }
    }

    fn text(&self) -> String {
        self.textarea.lines().join("\n")
    }
}

/// Main application state
pub struct App {
    /// Current mode (NORMAL, INSERT, COMMAND)
    pub mode: Mode,
    /// Read-only sample data
    data: SampleData,
    config: ScholarflowConfig,
    /// State of the view on screen
    pub view: ViewState,
    /// Command input buffer
    pub command_buffer: String,
    /// Last notice raised
    pub status: Option<Notice>,
    /// Whether to show the help overlay
    pub show_help: bool,
    /// Author email preview opened from the worklist
    pub email_preview: Option<EmailDraft>,
    /// Text dialog for reject comments or replace reason
    pub input: Option<TextInput>,
    pub worklist_view: WorklistView,
    pub assignment_view: EditorAssignmentView,
    pub ee_view: EeWorkspaceView,
    pub review_view: ManuscriptReviewView,
    pub post_ee_view: PostEeView,
    pub reviewer_view: ReviewerAssignmentView,
}

impl App {
    /// Create the application and open `start`
    pub fn new(data: SampleData, config: ScholarflowConfig, start: Navigation) -> Self {
        let view = Router::new(&data, &config).open(&start);
        Self {
            mode: Mode::Normal,
            data,
            config,
            view,
            command_buffer: String::new(),
            status: None,
            show_help: false,
            email_preview: None,
            input: None,
            worklist_view: WorklistView::new(),
            assignment_view: EditorAssignmentView::new(),
            ee_view: EeWorkspaceView::new(),
            review_view: ManuscriptReviewView::new(),
            post_ee_view: PostEeView::new(),
            reviewer_view: ReviewerAssignmentView::new(),
        }
    }

    pub fn route(&self) -> Route {
        self.view.route()
    }

    /// Open a route with fresh view state and cursors
    pub fn navigate(&mut self, navigation: Navigation) {
        tracing::info!(route = %navigation.route, "Navigate");
        self.view = Router::new(&self.data, &self.config).open(&navigation);
        self.email_preview = None;
        self.input = None;
        self.mode = Mode::Normal;
        self.worklist_view = WorklistView::new();
        self.assignment_view = EditorAssignmentView::new();
        self.ee_view = EeWorkspaceView::new();
        self.review_view = ManuscriptReviewView::new();
        self.post_ee_view = PostEeView::new();
        self.reviewer_view = ReviewerAssignmentView::new();
    }

    /// Raise the notice, then navigate
    fn apply(&mut self, outcome: Outcome) {
        if let Some(notice) = outcome.notice {
            self.status = Some(notice);
        }
        if let Some(navigation) = outcome.navigation {
            self.navigate(navigation);
        }
    }

    fn report(&mut self, result: Result<()>) {
        if let Err(err) = result {
            tracing::warn!("{}", err);
            self.status = Some(Notice::warning("Not available", err.to_string()));
        }
    }

    // === Rendering ===

    /// Render the application
    pub fn render(&self, frame: &mut Frame) {
        let size = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Status bar
                Constraint::Min(0),    // Main content
                Constraint::Length(1), // Command line
            ])
            .split(size);

        self.render_status_bar(frame, chunks[0]);

        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(26), Constraint::Min(0)])
            .split(chunks[1]);

        let route = self.route();
        frame.render_widget(Sidebar::new(&route), content[0]);
        self.render_main_view(frame, content[1]);

        self.render_command_line(frame, chunks[2]);

        if let Some(input) = &self.input {
            let popup = centered_rect(70, 30, size);
            frame.render_widget(Clear, popup);
            frame.render_widget(&input.textarea, popup);
        }
        if let Some(email) = &self.email_preview {
            render_email(frame, size, email);
        }
        if self.show_help {
            self.render_help_overlay(frame, size);
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let route = self.route();
        let line = Line::from(vec![
            ModeIndicator::new(self.mode).as_span(),
            Span::raw(" ScholarFlow | "),
            Span::styled(route.label(), Style::default().fg(Color::Cyan)),
            Span::raw(format!(" {} | Press ? for help", route.path())),
        ]);
        frame.render_widget(
            Paragraph::new(line).style(Style::default().bg(Color::DarkGray)),
            area,
        );
    }

    fn render_main_view(&self, frame: &mut Frame, area: Rect) {
        let display = &self.config.display;
        match &self.view {
            ViewState::Worklist => {
                self.worklist_view
                    .render(frame, area, &self.data.manuscripts, display);
            }
            ViewState::EditorAssignment(state) => {
                match self.data.manuscript_or_first(&state.manuscript_id) {
                    Some(ms) => self.assignment_view.render(
                        frame,
                        area,
                        state,
                        ms,
                        &self.data.executive_editors,
                        &self.data.associate_editors,
                    ),
                    None => render_not_found(frame, area, Route::EditorAssignment.path()),
                }
            }
            ViewState::EeWorkspace => {
                self.ee_view.render(
                    frame,
                    area,
                    &self.data.ee_manuscripts,
                    self.data.signed_in_editor(),
                );
            }
            ViewState::ManuscriptReview(state) => {
                match self.data.ee_manuscript_or_first(&state.manuscript_id) {
                    Some(ms) => self.review_view.render(
                        frame,
                        area,
                        state,
                        ms,
                        &self.data.summaries,
                        &self.data.evaluation,
                        display,
                    ),
                    None => render_not_found(frame, area, Route::ManuscriptReview.path()),
                }
            }
            ViewState::PostEeWorklist(projected) => {
                self.post_ee_view.render(frame, area, projected, display);
            }
            ViewState::ReviewerAssignment(state) => {
                match self.data.manuscript_or_first(&state.manuscript_id) {
                    Some(ms) => {
                        self.reviewer_view
                            .render(frame, area, state, ms, &self.data.reviewers)
                    }
                    None => render_not_found(frame, area, Route::ReviewerAssignment.path()),
                }
            }
            ViewState::NotFound(path) => render_not_found(frame, area, path),
        }
    }

    fn render_command_line(&self, frame: &mut Frame, area: Rect) {
        let line = match (self.mode, &self.status) {
            (Mode::Command, _) => Line::raw(format!(":{}", self.command_buffer)),
            (_, Some(notice)) => {
                let color = match notice.level {
                    NoticeLevel::Success => Color::Green,
                    NoticeLevel::Info => Color::Cyan,
                    NoticeLevel::Warning => Color::Yellow,
                };
                Line::styled(notice.to_string(), Style::default().fg(color))
            }
            _ => Line::raw("Press : for commands | 1-6 to switch views"),
        };
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_help_overlay(&self, frame: &mut Frame, area: Rect) {
        let help_text = r#"
ScholarFlow - Help

Views (1-6):
  1 - Editorial Worklist      4 - Manuscript Review
  2 - Editor Assignment       5 - Post-EE Worklist
  3 - EE Workspace            6 - Reviewer Assignment

Navigation:
  j/k     - Move up/down in lists
  Enter   - Run the highlighted row's action
  Esc     - Close dialog / go back
  Tab     - Switch EE/AE panel (Editor Assignment)

Actions:
  Space   - Select / toggle candidate
  c       - Confirm assignment / complete
  a / r   - Accept / reject (Manuscript Review)
  e       - AI evaluation
  h/l     - Summary length
  i / x   - Invite / replace reviewer
  m       - Author email preview (sent back)

Commands (: to enter command mode):
  :go <path> [manuscript-id]  - Open a route
  :q                          - Quit
"#;

        let block = Block::default()
            .title("Help")
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::Black));

        let help_area = centered_rect(70, 85, area);
        frame.render_widget(Clear, help_area);
        frame.render_widget(Paragraph::new(help_text).block(block), help_area);
    }

    // === Input ===

    /// Handle a key press, returns true if app should quit
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match self.mode {
            Mode::Normal => self.handle_normal_key(code),
            Mode::Insert => {
                self.handle_insert_key(code, modifiers);
                false
            }
            Mode::Command => self.handle_command_key(code),
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode) -> bool {
        let Some(action) = normal_mode_action(code) else {
            return false;
        };

        // Overlays take the keys first
        if self.show_help {
            if matches!(action, Action::ToggleHelp | Action::Back) {
                self.show_help = false;
            }
            return false;
        }
        if self.email_preview.is_some() {
            if action == Action::Back {
                self.email_preview = None;
            }
            return false;
        }

        match action {
            Action::Quit => return true,
            Action::EnterCommandMode => {
                self.mode = Mode::Command;
                self.command_buffer.clear();
            }
            Action::ToggleHelp => self.show_help = true,
            Action::GoTo(index) => {
                if let Some(route) = Route::SIDEBAR.get(index) {
                    self.status = None;
                    self.navigate(Navigation::to(route.clone()));
                }
            }
            action => {
                let result = self.view_action(action);
                self.report(result);
            }
        }
        false
    }

    /// Actions that depend on the current view
    fn view_action(&mut self, action: Action) -> Result<()> {
        let mut outcome = None;

        match &mut self.view {
            ViewState::Worklist => {
                let count = self.worklist_view.row_count(&self.data.manuscripts);
                match action {
                    Action::MoveDown => self.worklist_view.next_row(count),
                    Action::MoveUp => self.worklist_view.prev_row(count),
                    Action::Activate => {
                        outcome = self
                            .worklist_view
                            .selected_row(&self.data.manuscripts)
                            .and_then(|(ms, action)| action.navigation(ms))
                            .map(Outcome::navigate);
                    }
                    Action::Email => {
                        self.email_preview = self
                            .worklist_view
                            .selected_row(&self.data.manuscripts)
                            .filter(|(ms, _)| ms.status == ManuscriptStatus::SentBack)
                            .and_then(|(ms, _)| author_rejection_email(ms));
                    }
                    _ => {}
                }
            }

            ViewState::EditorAssignment(state) => {
                let ees = &self.data.executive_editors;
                let aes = &self.data.associate_editors;
                let view = &mut self.assignment_view;
                match action {
                    Action::MoveDown => view.next_item(ees.len(), aes.len()),
                    Action::MoveUp => view.prev_item(ees.len(), aes.len()),
                    Action::SwitchPanel => view.toggle_panel(),
                    Action::Toggle | Action::Activate => {
                        if let Some(editor) = view.highlighted(ees, aes) {
                            match view.panel {
                                Panel::Executive => state.select_executive(editor.id.clone())?,
                                Panel::Associate => {
                                    state.toggle_associate(editor.id.clone())?;
                                }
                            }
                        }
                    }
                    Action::Confirm => outcome = Some(state.confirm()?),
                    Action::Back => outcome = back_outcome(&Route::EditorAssignment),
                    _ => {}
                }
            }

            ViewState::EeWorkspace => {
                let count = self.data.ee_manuscripts.len();
                match action {
                    Action::MoveDown => self.ee_view.next_row(count),
                    Action::MoveUp => self.ee_view.prev_row(count),
                    Action::Activate => {
                        outcome = self
                            .ee_view
                            .selected_manuscript(&self.data.ee_manuscripts)
                            .and_then(|ms| PrimaryAction::Review.navigation(ms))
                            .map(Outcome::navigate);
                    }
                    _ => {}
                }
            }

            ViewState::ManuscriptReview(state) => {
                if state.evaluation_open() {
                    if action == Action::Back {
                        state.close_evaluation();
                    }
                    return Ok(());
                }
                match action {
                    Action::NextTab => state.next_summary(),
                    Action::PrevTab => state.prev_summary(),
                    Action::MoveDown => self.review_view.scroll_down(),
                    Action::MoveUp => self.review_view.scroll_up(),
                    Action::Evaluation => state.open_evaluation(),
                    Action::Accept => outcome = Some(state.accept()),
                    Action::Reject => {
                        state.open_reject();
                        self.input = Some(TextInput::new(InputTarget::RejectComments));
                        self.mode = Mode::Insert;
                    }
                    Action::Back => outcome = back_outcome(&Route::ManuscriptReview),
                    _ => {}
                }
            }

            ViewState::PostEeWorklist(projected) => match action {
                Action::MoveDown => {
                    let count = self.post_ee_view.row_count(projected);
                    self.post_ee_view.next_row(count);
                }
                Action::MoveUp => {
                    let count = self.post_ee_view.row_count(projected);
                    self.post_ee_view.prev_row(count);
                }
                Action::Activate => {
                    outcome = self
                        .post_ee_view
                        .selected_row(projected)
                        .and_then(|(ms, action)| action.navigation(ms))
                        .map(Outcome::navigate);
                }
                _ => {}
            },

            ViewState::ReviewerAssignment(state) => {
                if state.invite_dialog().is_some() {
                    match action {
                        Action::Activate | Action::Confirm => outcome = Some(state.send_invite()?),
                        Action::Back => state.cancel_invite(),
                        _ => {}
                    }
                } else {
                    let reviewers = &self.data.reviewers;
                    let highlighted = self.reviewer_view.highlighted(reviewers);
                    match action {
                        Action::MoveDown => self.reviewer_view.next_row(reviewers.len()),
                        Action::MoveUp => self.reviewer_view.prev_row(reviewers.len()),
                        Action::Toggle => {
                            if let Some(reviewer) = highlighted {
                                state.toggle(&reviewer.id);
                            }
                        }
                        Action::Invite => {
                            if let (Some(reviewer), Some(ms)) = (
                                highlighted,
                                self.data.manuscript_or_first(&state.manuscript_id),
                            ) {
                                state.open_invite(reviewer, ms, &self.config.workflow)?;
                            }
                        }
                        Action::Replace => {
                            if let Some(reviewer) = highlighted {
                                state.open_replace(reviewer)?;
                                self.input = Some(TextInput::new(InputTarget::ReplaceReason));
                                self.mode = Mode::Insert;
                            }
                        }
                        Action::Confirm => outcome = Some(state.complete()),
                        Action::Back => outcome = back_outcome(&Route::ReviewerAssignment),
                        _ => {}
                    }
                }
            }

            ViewState::NotFound(path) => {
                if matches!(action, Action::Back | Action::Activate) {
                    outcome = back_outcome(&Route::NotFound(path.clone()));
                }
            }
        }

        if let Some(outcome) = outcome {
            self.apply(outcome);
        }
        Ok(())
    }

    fn handle_insert_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        let Some(input) = self.input.as_mut() else {
            self.mode = Mode::Normal;
            return;
        };

        match code {
            KeyCode::Esc => {
                match &mut self.view {
                    ViewState::ManuscriptReview(state) => state.cancel_reject(),
                    ViewState::ReviewerAssignment(state) => state.cancel_replace(),
                    _ => {}
                }
                self.input = None;
                self.mode = Mode::Normal;
            }
            KeyCode::Enter => {
                let target = input.target;
                let text = input.text();
                let result = self.submit_input(target, text);
                self.report(result);
            }
            _ => {
                input.textarea.input(KeyEvent::new(code, modifiers));
            }
        }
    }

    /// Confirm the open text dialog. The dialog stays open if the core
    /// refuses the input.
    fn submit_input(&mut self, target: InputTarget, text: String) -> Result<()> {
        let outcome = match (&mut self.view, target) {
            (ViewState::ManuscriptReview(state), InputTarget::RejectComments) => {
                state.set_comments(text)?;
                state.confirm_reject()?
            }
            (ViewState::ReviewerAssignment(state), InputTarget::ReplaceReason) => {
                state.set_replace_reason(text)?;
                state.confirm_replace()?
            }
            _ => Outcome::default(),
        };
        self.input = None;
        self.mode = Mode::Normal;
        self.apply(outcome);
        Ok(())
    }

    fn handle_command_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Esc => {
                self.mode = Mode::Normal;
                self.command_buffer.clear();
            }
            KeyCode::Enter => {
                let should_quit = self.execute_command();
                self.mode = Mode::Normal;
                self.command_buffer.clear();
                if should_quit {
                    return true;
                }
            }
            KeyCode::Backspace => {
                self.command_buffer.pop();
            }
            KeyCode::Char(c) => {
                self.command_buffer.push(c);
            }
            _ => {}
        }
        false
    }

    fn execute_command(&mut self) -> bool {
        let parts: Vec<&str> = self.command_buffer.split_whitespace().collect();
        let Some(command) = parts.first() else {
            return false;
        };

        match *command {
            "q" | "quit" => return true,
            "go" => match parts.get(1) {
                Some(path) => {
                    let route = Route::from_path(path);
                    let navigation = match parts.get(2) {
                        Some(id) => Navigation::with_manuscript(route, (*id).into()),
                        None => Navigation::to(route),
                    };
                    self.status = None;
                    self.navigate(navigation);
                }
                None => {
                    self.status = Some(Notice::info("Usage", ":go <path> [manuscript-id]"));
                }
            },
            "help" => self.show_help = true,
            other => {
                self.status = Some(Notice::warning("Unknown command", other.to_string()));
            }
        }
        false
    }
}

fn back_outcome(route: &Route) -> Option<Outcome> {
    route.back().map(|back| Outcome::navigate(Navigation::to(back)))
}

fn render_email(frame: &mut Frame, area: Rect, email: &EmailDraft) {
    let popup = centered_rect(75, 80, area);
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(vec![Span::styled("To: ", bold), Span::raw(email.to.clone())]),
        Line::from(vec![
            Span::styled("Subject: ", bold),
            Span::raw(email.subject.clone()),
        ]),
        Line::raw(""),
    ];
    lines.extend(email.body.lines().map(|l| Line::from(l.to_string())));
    lines.push(Line::raw(""));
    lines.push(Line::styled("Esc: Close", Style::default().fg(Color::Cyan)));

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .block(
                Block::default()
                    .title("Email Preview")
                    .borders(Borders::ALL)
                    .style(Style::default().bg(Color::Black)),
            )
            .wrap(Wrap { trim: false }),
        popup,
    );
}

/// Helper function to create a centered rect
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

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use scholarflow_core::people::{InviteStatus, ReviewerId};
    use scholarflow_core::sample_data;

    fn app() -> App {
        App::new(
            sample_data().clone(),
            ScholarflowConfig::default(),
            Navigation::to(Route::Worklist),
        )
    }

    fn press(app: &mut App, keys: &str) -> bool {
        let mut quit = false;
        for c in keys.chars() {
            quit |= app.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
        }
        quit
    }

    fn key(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(code, KeyModifiers::NONE)
    }

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 45)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn level(app: &App) -> Option<NoticeLevel> {
        app.status.as_ref().map(|n| n.level)
    }

    #[test]
    fn test_app_creation() {
        let app = app();
        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.route(), Route::Worklist);
        assert!(app.status.is_none());
    }

    #[test]
    fn test_render_worklist() {
        let text = screen(&app());
        assert!(text.contains("ScholarFlow"));
        assert!(text.contains("Editorial Worklist"));
        assert!(text.contains("MS-2024-003"));
    }

    #[test]
    fn test_quit_key() {
        let mut app = app();
        assert!(press(&mut app, "q"));
    }

    #[test]
    fn test_sidebar_digits_navigate() {
        let mut app = app();
        press(&mut app, "3");
        assert_eq!(app.route(), Route::EeWorkspace);
        press(&mut app, "6");
        assert_eq!(app.route(), Route::ReviewerAssignment);
        press(&mut app, "1");
        assert_eq!(app.route(), Route::Worklist);
    }

    #[test]
    fn test_assign_editors_from_worklist() {
        let mut app = app();
        // Two sent-back rows come first
        press(&mut app, "jj");
        key(&mut app, KeyCode::Enter);

        let ViewState::EditorAssignment(state) = &app.view else {
            panic!("expected editor assignment");
        };
        assert_eq!(state.manuscript_id.as_str(), "MS-2024-001");
        assert!(state.can_confirm());

        press(&mut app, "c");
        assert_eq!(level(&app), Some(NoticeLevel::Success));
        assert_eq!(app.route(), Route::EeWorkspace);
    }

    #[test]
    fn test_incomplete_assignment_warns() {
        let mut app = app();
        app.navigate(Navigation::with_manuscript(
            Route::EditorAssignment,
            "MS-2024-002".into(),
        ));
        press(&mut app, "c");
        assert_eq!(level(&app), Some(NoticeLevel::Warning));
        assert_eq!(app.route(), Route::EditorAssignment);
    }

    #[test]
    fn test_worklist_cursor_stays_on_listed_rows() {
        let mut data = sample_data().clone();
        let extra = data.manuscripts[0]
            .clone()
            .with_status(ManuscriptStatus::InReview);
        data.manuscripts.push(extra);
        let mut app = App::new(data, ScholarflowConfig::default(), Navigation::to(Route::Worklist));

        // Wraps to the last ready row, not past it
        press(&mut app, "k");
        assert!(app.worklist_view.selected_row(&app.data.manuscripts).is_some());
        key(&mut app, KeyCode::Enter);
        assert_eq!(app.route(), Route::EditorAssignment);
    }

    #[test]
    fn test_replace_refused_for_accepted_reviewer() {
        let mut app = app();
        press(&mut app, "6");

        // R-001 has accepted
        press(&mut app, "x");
        assert_eq!(app.mode, Mode::Normal);
        assert!(app.input.is_none());
        assert_eq!(level(&app), Some(NoticeLevel::Warning));

        let ViewState::ReviewerAssignment(state) = &app.view else {
            panic!("expected reviewer assignment");
        };
        assert!(state.slot(&ReviewerId::new("R-001")).unwrap().selected);
    }

    #[test]
    fn test_email_preview_for_sent_back_row() {
        let mut app = app();
        press(&mut app, "m");
        assert!(app.email_preview.is_some());
        assert!(screen(&app).contains("Email Preview"));

        key(&mut app, KeyCode::Esc);
        assert!(app.email_preview.is_none());
        assert_eq!(app.route(), Route::Worklist);
    }

    #[test]
    fn test_reject_requires_comments() {
        let mut app = app();
        press(&mut app, "4r");
        assert_eq!(app.mode, Mode::Insert);

        key(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Insert);
        assert_eq!(level(&app), Some(NoticeLevel::Warning));

        press(&mut app, "Out of scope");
        key(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(level(&app), Some(NoticeLevel::Info));
        assert_eq!(app.route(), Route::PostEeWorklist);
    }

    #[test]
    fn test_reject_cancelled_with_escape() {
        let mut app = app();
        press(&mut app, "4r");
        key(&mut app, KeyCode::Esc);

        assert_eq!(app.mode, Mode::Normal);
        assert!(app.input.is_none());
        let ViewState::ManuscriptReview(state) = &app.view else {
            panic!("expected manuscript review");
        };
        assert!(state.reject_dialog().is_none());
    }

    #[test]
    fn test_accept_goes_to_post_ee() {
        let mut app = app();
        press(&mut app, "4a");
        assert_eq!(level(&app), Some(NoticeLevel::Success));
        assert_eq!(app.route(), Route::PostEeWorklist);
    }

    #[test]
    fn test_evaluation_overlay_closes_before_back() {
        let mut app = app();
        press(&mut app, "4e");
        key(&mut app, KeyCode::Esc);
        assert_eq!(app.route(), Route::ManuscriptReview);
        key(&mut app, KeyCode::Esc);
        assert_eq!(app.route(), Route::EeWorkspace);
    }

    #[test]
    fn test_invite_and_replace_reviewer() {
        let mut app = app();
        press(&mut app, "6");

        // R-001 has already accepted
        press(&mut app, "i");
        assert_eq!(level(&app), Some(NoticeLevel::Warning));

        press(&mut app, "jji");
        key(&mut app, KeyCode::Enter);
        assert_eq!(level(&app), Some(NoticeLevel::Success));

        press(&mut app, "x");
        assert_eq!(app.mode, Mode::Insert);
        press(&mut app, "conflict");
        key(&mut app, KeyCode::Enter);
        assert_eq!(level(&app), Some(NoticeLevel::Info));

        let ViewState::ReviewerAssignment(state) = &app.view else {
            panic!("expected reviewer assignment");
        };
        let slot = state.slot(&ReviewerId::new("R-003")).unwrap();
        assert!(!slot.selected);
        assert_eq!(slot.invite_status, InviteStatus::Sent);
    }

    #[test]
    fn test_go_command() {
        let mut app = app();
        press(&mut app, ":go /manuscript-review MS-2024-012");
        assert_eq!(app.mode, Mode::Command);
        key(&mut app, KeyCode::Enter);

        let ViewState::ManuscriptReview(state) = &app.view else {
            panic!("expected manuscript review");
        };
        assert_eq!(state.manuscript_id.as_str(), "MS-2024-012");
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn test_unknown_path_and_back() {
        let mut app = app();
        press(&mut app, ":go /reports");
        key(&mut app, KeyCode::Enter);
        assert_eq!(app.route(), Route::NotFound("/reports".to_string()));
        assert!(screen(&app).contains("/reports"));

        key(&mut app, KeyCode::Esc);
        assert_eq!(app.route(), Route::Worklist);
    }

    #[test]
    fn test_quit_command() {
        let mut app = app();
        press(&mut app, ":q");
        assert!(key(&mut app, KeyCode::Enter));
    }

    #[test]
    fn test_help_overlay() {
        let mut app = app();
        press(&mut app, "?");
        assert!(app.show_help);
        assert!(screen(&app).contains("Help"));
        // Keys are swallowed while help is open
        press(&mut app, "3");
        assert_eq!(app.route(), Route::Worklist);
        press(&mut app, "?");
        assert!(!app.show_help);
    }
}
