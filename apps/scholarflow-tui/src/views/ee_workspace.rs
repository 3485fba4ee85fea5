//! Executive editor workspace
//!
//! Manuscripts assigned to the signed-in executive editor, grouped by
//! journal in first-seen order.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use scholarflow_core::manuscript::Manuscript;
use scholarflow_core::people::Editor;
use scholarflow_core::screening::urgency_badge;
use scholarflow_core::worklist::EeWorkspace;

use super::{next_index, prev_index, summary_line};
use crate::widgets::badge_span;

pub struct EeWorkspaceView {
    pub selected: usize,
}

impl EeWorkspaceView {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    /// Highlighted row, counted across journal groups
    pub fn selected_manuscript<'a>(&self, manuscripts: &'a [Manuscript]) -> Option<&'a Manuscript> {
        EeWorkspace::build(manuscripts)
            .rows()
            .get(self.selected)
            .copied()
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        manuscripts: &[Manuscript],
        editor: Option<&Editor>,
    ) {
        let workspace = EeWorkspace::build(manuscripts);
        let summary = workspace.summary();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0)])
            .split(area);

        let who = match editor {
            Some(ee) => format!("{} ({})", ee.name, ee.initials()),
            None => "Executive Editor".to_string(),
        };
        let header = Paragraph::new(vec![
            Line::from(vec![
                Span::styled("EE Workspace", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" | "),
                Span::styled(who, Style::default().fg(Color::Cyan)),
            ]),
            summary_line(&[
                ("Total Assigned", summary.total_assigned, Color::White),
                ("High Priority", summary.high_priority, Color::Red),
                ("Medium Priority", summary.medium_priority, Color::Yellow),
                ("Active Journals", summary.active_journals, Color::Cyan),
            ]),
        ])
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, chunks[0]);

        let mut items = Vec::new();
        let mut row = 0;
        for (journal, group) in &workspace.groups {
            items.push(ListItem::new(Line::styled(
                format!("{} ({})", journal, group.len()),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            for ms in group {
                let style = if row == self.selected {
                    Style::default().bg(Color::DarkGray)
                } else {
                    Style::default()
                };
                let deadline = ms
                    .decision_deadline
                    .map(|d| format!(" due {}", d))
                    .unwrap_or_default();
                items.push(ListItem::new(Line::from(vec![
                    Span::raw("  "),
                    badge_span(urgency_badge(ms.urgency)),
                    Span::styled(format!(" {} ", ms.id), Style::default().fg(Color::Cyan)),
                    Span::styled(ms.title.clone(), style),
                    Span::styled(deadline, Style::default().fg(Color::Gray)),
                ])));
                row += 1;
            }
        }

        let list = List::new(items).block(
            Block::default()
                .title("Assigned Manuscripts (Enter: Review)")
                .borders(Borders::ALL),
        );
        frame.render_widget(list, chunks[1]);
    }

    pub fn next_row(&mut self, count: usize) {
        self.selected = next_index(self.selected, count);
    }

    pub fn prev_row(&mut self, count: usize) {
        self.selected = prev_index(self.selected, count);
    }
}

impl Default for EeWorkspaceView {
    fn default() -> Self {
        Self::new()
    }
}
