//! Peer reviewer assignment
//!
//! Recommended reviewers followed by alternates. Space toggles selection;
//! i and x open the invite preview and replace dialog on recommended rows.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use scholarflow_core::manuscript::Manuscript;
use scholarflow_core::people::{InviteStatus, Reviewer};
use scholarflow_core::reviewers::{InviteDialog, ReviewerAssignment, ReviewerSlot};

use super::{next_index, prev_index};

pub struct ReviewerAssignmentView {
    /// Highlighted reviewer, recommended first then alternates
    pub selected: usize,
}

impl ReviewerAssignmentView {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    pub fn highlighted<'a>(&self, reviewers: &'a [Reviewer]) -> Option<&'a Reviewer> {
        reviewers.get(self.selected)
    }

    pub fn next_row(&mut self, count: usize) {
        self.selected = next_index(self.selected, count);
    }

    pub fn prev_row(&mut self, count: usize) {
        self.selected = prev_index(self.selected, count);
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        state: &ReviewerAssignment,
        manuscript: &Manuscript,
        reviewers: &[Reviewer],
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(area);

        let header = Paragraph::new(Line::from(vec![
            Span::styled(
                format!("{} ", manuscript.id),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                manuscript.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]))
        .block(Block::default().title("Assign Peer Reviewers").borders(Borders::ALL));
        frame.render_widget(header, chunks[0]);

        let recommended = state.recommended_ids().len();
        let lists = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(alternates_height(reviewers.len().saturating_sub(recommended))),
            ])
            .split(chunks[1]);

        let mut top = Vec::new();
        let mut alternates = Vec::new();
        for (i, reviewer) in reviewers.iter().enumerate() {
            let Some(slot) = state.slot(&reviewer.id) else {
                continue;
            };
            let item = reviewer_item(reviewer, slot, i == self.selected);
            if slot.recommended {
                top.push(item);
            } else {
                alternates.push(item);
            }
        }

        frame.render_widget(
            List::new(top).block(
                Block::default()
                    .title(format!("Top Recommended Reviewers ({})", recommended))
                    .borders(Borders::ALL),
            ),
            lists[0],
        );
        frame.render_widget(
            List::new(alternates).block(
                Block::default()
                    .title(format!(
                        "Additional Candidates ({})",
                        state.alternate_ids().len()
                    ))
                    .borders(Borders::ALL),
            ),
            lists[1],
        );

        let counts = state.counts();
        let footer = Paragraph::new(Line::from(vec![
            Span::raw(format!("Selected: {}  ", counts.selected)),
            Span::styled(
                format!("Accepted: {}  ", counts.accepted),
                Style::default().fg(Color::Green),
            ),
            Span::styled(
                format!("Invites Sent: {}", counts.invites_sent),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                "  |  c: Complete Assignment",
                Style::default().fg(Color::Gray),
            ),
        ]))
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(footer, chunks[2]);

        if let Some(dialog) = state.invite_dialog() {
            render_invite(frame, area, dialog);
        }
    }
}

impl Default for ReviewerAssignmentView {
    fn default() -> Self {
        Self::new()
    }
}

/// Two lines per alternate plus borders, clamped to the terminal range
fn alternates_height(count: usize) -> u16 {
    u16::try_from(count)
        .unwrap_or(u16::MAX)
        .saturating_mul(2)
        .saturating_add(2)
}

fn status_span(status: InviteStatus) -> Option<Span<'static>> {
    let color = match status {
        InviteStatus::Pending => return None,
        InviteStatus::Sent => Color::Cyan,
        InviteStatus::Accepted => Color::Green,
        InviteStatus::Declined => Color::Red,
    };
    Some(Span::styled(
        format!(" [{}]", status.name()),
        Style::default().fg(color),
    ))
}

fn reviewer_item(reviewer: &Reviewer, slot: &ReviewerSlot, highlighted: bool) -> ListItem<'static> {
    let style = if highlighted {
        Style::default().bg(Color::DarkGray)
    } else {
        Style::default()
    };
    let mark = if slot.selected { "[x] " } else { "[ ] " };

    let mut first = vec![
        Span::raw(mark),
        Span::styled(reviewer.name.clone(), style.add_modifier(Modifier::BOLD)),
        Span::styled(
            format!(" {}% match", reviewer.match_percentage),
            Style::default().fg(Color::Green),
        ),
    ];
    first.extend(status_span(slot.invite_status));
    if slot.actions_offered() {
        let hint = if slot.invite_offered() {
            "  i: Invite  x: Replace"
        } else {
            "  x: Replace"
        };
        first.push(Span::styled(hint, Style::default().fg(Color::Gray)));
    }

    let conflicts = if reviewer.conflicts_checked {
        "no conflicts"
    } else {
        "conflicts unchecked"
    };
    ListItem::new(vec![
        Line::from(first),
        Line::styled(
            format!(
                "    {} · {} reviews · {} · workload {} · {}",
                reviewer.affiliation,
                reviewer.past_reviews,
                reviewer.average_review_speed,
                reviewer.workload,
                conflicts
            ),
            Style::default().fg(Color::Gray),
        ),
    ])
}

fn render_invite(frame: &mut Frame, area: Rect, dialog: &InviteDialog) {
    let popup = crate::app::centered_rect(75, 80, area);
    let mut lines = vec![
        Line::from(vec![
            Span::styled("To: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!("{} <{}>", dialog.reviewer_name, dialog.email.to)),
        ]),
        Line::from(vec![
            Span::styled("Subject: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(dialog.email.subject.clone()),
        ]),
        Line::raw(""),
    ];
    lines.extend(dialog.email.body.lines().map(|l| Line::from(l.to_string())));
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        "Enter: Send Invitation  Esc: Cancel",
        Style::default().fg(Color::Cyan),
    ));

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .block(
                Block::default()
                    .title("Send Review Invitation")
                    .borders(Borders::ALL)
                    .style(Style::default().bg(Color::Black)),
            )
            .wrap(Wrap { trim: false }),
        popup,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternates_height() {
        assert_eq!(alternates_height(0), 2);
        assert_eq!(alternates_height(3), 8);
        assert_eq!(alternates_height(40_000), u16::MAX);
        assert_eq!(alternates_height(usize::MAX), u16::MAX);
    }
}
