//! Post-EE worklist
//!
//! Manuscripts after the executive editor's decision. Rows ready for peer
//! review open reviewer assignment.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use scholarflow_core::config::DisplayConfig;
use scholarflow_core::manuscript::Manuscript;
use scholarflow_core::worklist::{PostEeWorklist, PrimaryAction};

use super::{
    next_index, prev_index, render_manuscript_detail, render_sections, section_rows,
    summary_line,
};

pub struct PostEeView {
    pub selected: usize,
}

impl PostEeView {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    /// `projected` is the post-EE projection held by the view state
    pub fn selected_row<'a>(
        &self,
        projected: &'a [Manuscript],
    ) -> Option<(&'a Manuscript, PrimaryAction)> {
        let worklist = PostEeWorklist::build(projected);
        section_rows(&worklist.sections()).get(self.selected).copied()
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        projected: &[Manuscript],
        display: &DisplayConfig,
    ) {
        let worklist = PostEeWorklist::build(projected);
        let summary = worklist.summary();
        let sections = worklist.sections();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0)])
            .split(area);

        let header = Paragraph::new(vec![
            Line::styled(
                "Post-EE Worklist",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            summary_line(&[
                ("Total Active", summary.total_active, Color::White),
                ("Ready for Reviewers", summary.ready_for_reviewers, Color::Cyan),
                ("Pending EE Review", summary.pending_ee_review, Color::Yellow),
                ("In Peer Review", summary.in_peer_review, Color::Blue),
            ]),
        ])
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, chunks[0]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[1]);

        render_sections(frame, body[0], "Manuscripts", &sections, self.selected, display);
        let row = section_rows(&sections).get(self.selected).copied();
        render_manuscript_detail(frame, body[1], row, display);
    }

    /// Rows the cursor can land on; manuscripts outside every section
    /// are not listed
    pub fn row_count(&self, projected: &[Manuscript]) -> usize {
        section_rows(&PostEeWorklist::build(projected).sections()).len()
    }

    pub fn next_row(&mut self, count: usize) {
        self.selected = next_index(self.selected, count);
    }

    pub fn prev_row(&mut self, count: usize) {
        self.selected = prev_index(self.selected, count);
    }
}

impl Default for PostEeView {
    fn default() -> Self {
        Self::new()
    }
}
