//! Editor assignment
//!
//! Two candidate panels: executive editors (pick one) and associate
//! editors (pick any). Tab switches panels, Space selects, c confirms.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use scholarflow_core::assignment::{AssignmentBanner, EditorAssignment};
use scholarflow_core::manuscript::Manuscript;
use scholarflow_core::people::Editor;

use super::{next_index, prev_index};

/// Which candidate list has the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Executive,
    Associate,
}

pub struct EditorAssignmentView {
    pub selected_ee: usize,
    pub selected_ae: usize,
    pub panel: Panel,
}

impl EditorAssignmentView {
    pub fn new() -> Self {
        Self {
            selected_ee: 0,
            selected_ae: 0,
            panel: Panel::Executive,
        }
    }

    pub fn toggle_panel(&mut self) {
        self.panel = match self.panel {
            Panel::Executive => Panel::Associate,
            Panel::Associate => Panel::Executive,
        };
    }

    pub fn next_item(&mut self, ee_count: usize, ae_count: usize) {
        match self.panel {
            Panel::Executive => self.selected_ee = next_index(self.selected_ee, ee_count),
            Panel::Associate => self.selected_ae = next_index(self.selected_ae, ae_count),
        }
    }

    pub fn prev_item(&mut self, ee_count: usize, ae_count: usize) {
        match self.panel {
            Panel::Executive => self.selected_ee = prev_index(self.selected_ee, ee_count),
            Panel::Associate => self.selected_ae = prev_index(self.selected_ae, ae_count),
        }
    }

    /// Candidate under the cursor in the active panel
    pub fn highlighted<'a>(&self, executives: &'a [Editor], associates: &'a [Editor]) -> Option<&'a Editor> {
        match self.panel {
            Panel::Executive => executives.get(self.selected_ee),
            Panel::Associate => associates.get(self.selected_ae),
        }
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        state: &EditorAssignment,
        manuscript: &Manuscript,
        executives: &[Editor],
        associates: &[Editor],
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Manuscript + banner
                Constraint::Min(0),    // Candidate panels
                Constraint::Length(3), // Footer
            ])
            .split(area);

        let banner = state.banner();
        let banner_color = match banner {
            AssignmentBanner::Automatic => Color::Green,
            AssignmentBanner::Manual => Color::Yellow,
        };
        let header = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(
                    format!("{} ", manuscript.id),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    manuscript.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled(
                    banner.title(),
                    Style::default().fg(banner_color).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" - "),
                Span::raw(banner.description()),
            ]),
        ])
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: true });
        frame.render_widget(header, chunks[0]);

        let panels = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);

        let ee_items = executives
            .iter()
            .enumerate()
            .map(|(i, editor)| {
                let mark = if state.is_executive_selected(&editor.id) { "(•)" } else { "( )" };
                candidate_item(mark, editor, self.panel == Panel::Executive && i == self.selected_ee)
            })
            .collect::<Vec<_>>();
        let ae_items = associates
            .iter()
            .enumerate()
            .map(|(i, editor)| {
                let mark = if state.is_associate_selected(&editor.id) { "[x]" } else { "[ ]" };
                candidate_item(mark, editor, self.panel == Panel::Associate && i == self.selected_ae)
            })
            .collect::<Vec<_>>();

        frame.render_widget(
            List::new(ee_items).block(panel_block("Executive Editor (select one)", self.panel == Panel::Executive)),
            panels[0],
        );
        frame.render_widget(
            List::new(ae_items).block(panel_block("Associate Editors (select any)", self.panel == Panel::Associate)),
            panels[1],
        );

        let (ees, aes) = state.selection_counts();
        let confirm = if state.can_confirm() {
            Span::styled("c: Confirm Assignment", Style::default().fg(Color::Green))
        } else {
            Span::styled(
                "Confirm disabled: select one EE and at least one AE",
                Style::default().fg(Color::DarkGray),
            )
        };
        let footer = Paragraph::new(Line::from(vec![
            Span::raw(format!(
                "{} Executive Editor, {} Associate Editor(s) selected  |  ",
                ees, aes
            )),
            confirm,
        ]))
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(footer, chunks[2]);
    }
}

impl Default for EditorAssignmentView {
    fn default() -> Self {
        Self::new()
    }
}

fn panel_block(title: &str, active: bool) -> Block<'static> {
    let border_style = if active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(border_style)
}

fn candidate_item(mark: &str, editor: &Editor, highlighted: bool) -> ListItem<'static> {
    let style = if highlighted {
        Style::default().bg(Color::DarkGray)
    } else {
        Style::default()
    };
    let mut first = vec![
        Span::raw(format!("{} ", mark)),
        Span::styled(editor.name.clone(), style.add_modifier(Modifier::BOLD)),
    ];
    if let Some(pct) = editor.match_percentage {
        first.push(Span::styled(
            format!(" {}% match", pct),
            Style::default().fg(Color::Green),
        ));
    }
    if editor.auto_assigned {
        first.push(Span::styled(" [Auto]", Style::default().fg(Color::Cyan)));
    }

    let mut lines = vec![
        Line::from(first),
        Line::styled(
            format!(
                "    {} · workload {}{}",
                editor.affiliation,
                editor.workload,
                editor
                    .past_handling
                    .map(|n| format!(" · {} handled", n))
                    .unwrap_or_default()
            ),
            Style::default().fg(Color::Gray),
        ),
    ];
    if let Some(reason) = &editor.match_reason {
        lines.push(Line::styled(
            format!("    {}", reason),
            Style::default().fg(Color::Gray),
        ));
    }
    ListItem::new(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scholarflow_core::sample_data;

    #[test]
    fn test_panel_navigation() {
        let data = sample_data();
        let mut view = EditorAssignmentView::new();
        let (ees, aes) = (data.executive_editors.len(), data.associate_editors.len());

        view.prev_item(ees, aes);
        assert_eq!(view.selected_ee, ees - 1);

        view.toggle_panel();
        view.next_item(ees, aes);
        assert_eq!(view.selected_ae, 1);
        let editor = view
            .highlighted(&data.executive_editors, &data.associate_editors)
            .unwrap();
        assert_eq!(editor.id.as_str(), "AE-002");
    }
}
