//! Editorial office worklist
//!
//! Sent-back and ready submissions with header counts. Ready rows open
//! editor assignment; sent-back rows show the rejection detail.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use scholarflow_core::config::DisplayConfig;
use scholarflow_core::manuscript::Manuscript;
use scholarflow_core::worklist::{EditorialWorklist, PrimaryAction};

use super::{
    next_index, prev_index, render_manuscript_detail, render_sections, section_rows,
    summary_line,
};

/// Worklist view state
pub struct WorklistView {
    /// Highlighted manuscript row
    pub selected: usize,
}

impl WorklistView {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    /// The highlighted row and its primary action
    pub fn selected_row<'a>(
        &self,
        manuscripts: &'a [Manuscript],
    ) -> Option<(&'a Manuscript, PrimaryAction)> {
        let worklist = EditorialWorklist::build(manuscripts);
        section_rows(&worklist.sections()).get(self.selected).copied()
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        manuscripts: &[Manuscript],
        display: &DisplayConfig,
    ) {
        let worklist = EditorialWorklist::build(manuscripts);
        let summary = worklist.summary();
        let sections = worklist.sections();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0)])
            .split(area);

        let header = Paragraph::new(vec![
            Line::from(vec![Span::styled(
                "Editorial Worklist",
                Style::default().add_modifier(Modifier::BOLD),
            )]),
            summary_line(&[
                ("Total Submissions", summary.total, Color::White),
                ("Ready to Progress", summary.ready, Color::Green),
                ("Sent Back to Author", summary.sent_back, Color::Red),
            ]),
        ])
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, chunks[0]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[1]);

        render_sections(frame, body[0], "Submissions", &sections, self.selected, display);
        let row = section_rows(&sections).get(self.selected).copied();
        render_manuscript_detail(frame, body[1], row, display);
    }

    /// Rows the cursor can land on; manuscripts outside every section
    /// are not listed
    pub fn row_count(&self, manuscripts: &[Manuscript]) -> usize {
        section_rows(&EditorialWorklist::build(manuscripts).sections()).len()
    }

    pub fn next_row(&mut self, count: usize) {
        self.selected = next_index(self.selected, count);
    }

    pub fn prev_row(&mut self, count: usize) {
        self.selected = prev_index(self.selected, count);
    }
}

impl Default for WorklistView {
    fn default() -> Self {
        Self::new()
    }
}
