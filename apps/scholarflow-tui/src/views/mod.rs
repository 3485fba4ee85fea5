//! TUI views
//!
//! One view struct per route. Each keeps only its cursor; selections and
//! dialogs live in the core view state.

mod editor_assignment;
mod ee_workspace;
mod manuscript_review;
mod not_found;
mod post_ee;
mod reviewer_assignment;
mod worklist;

pub use editor_assignment::{EditorAssignmentView, Panel};
pub use ee_workspace::EeWorkspaceView;
pub use manuscript_review::ManuscriptReviewView;
pub use not_found::render_not_found;
pub use post_ee::PostEeView;
pub use reviewer_assignment::ReviewerAssignmentView;
pub use worklist::WorklistView;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use scholarflow_core::config::DisplayConfig;
use scholarflow_core::manuscript::{Manuscript, ManuscriptStatus};
use scholarflow_core::screening::{rejection_detail, status_badge, stoplight, RejectionExtra};
use scholarflow_core::worklist::{PrimaryAction, WorklistSection};

use crate::widgets::{badge_span, stoplight_span, tone_color};

/// Manuscript rows of `sections` in display order, with their actions
pub fn section_rows<'a>(sections: &[WorklistSection<'a>]) -> Vec<(&'a Manuscript, PrimaryAction)> {
    sections
        .iter()
        .flat_map(|section| {
            section
                .manuscripts
                .iter()
                .map(move |ms| (*ms, section.action_for(ms)))
        })
        .collect()
}

/// Move a cursor down a list of `count` rows, wrapping
pub fn next_index(current: usize, count: usize) -> usize {
    if count == 0 {
        0
    } else {
        (current + 1) % count
    }
}

/// Move a cursor up a list of `count` rows, wrapping
pub fn prev_index(current: usize, count: usize) -> usize {
    if count == 0 {
        0
    } else if current == 0 {
        count - 1
    } else {
        current - 1
    }
}

/// Counts line for a view header
pub fn summary_line(counts: &[(&str, usize, Color)]) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (label, count, color)) in counts.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  |  "));
        }
        spans.push(Span::raw(format!("{}: ", label)));
        spans.push(Span::styled(
            count.to_string(),
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}

/// Grouped manuscript list with one highlighted row
pub fn render_sections(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    sections: &[WorklistSection<'_>],
    selected: usize,
    display: &DisplayConfig,
) {
    let mut items: Vec<ListItem> = Vec::new();
    let mut row = 0;

    for section in sections {
        items.push(ListItem::new(Line::styled(
            format!("{} ({})", section.title, section.manuscripts.len()),
            Style::default()
                .fg(tone_color(section.tone))
                .add_modifier(Modifier::BOLD),
        )));

        for ms in &section.manuscripts {
            let style = if row == selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };
            let mut spans = vec![
                Span::styled(format!("  {} ", ms.id), Style::default().fg(Color::Cyan)),
                Span::styled(ms.title.clone(), style),
                Span::raw(" "),
                badge_span(status_badge(ms.status)),
            ];
            for check in &ms.checks {
                spans.push(Span::raw(" "));
                spans.push(stoplight_span(&stoplight(check)));
            }
            items.push(ListItem::new(vec![
                Line::from(spans),
                Line::styled(
                    format!(
                        "      {} · {} · {}",
                        ms.author_preview(display.author_preview_count),
                        ms.journal,
                        ms.submission_date
                    ),
                    Style::default().fg(Color::Gray),
                ),
            ]));
            row += 1;
        }
    }

    let list = List::new(items).block(Block::default().title(title.to_string()).borders(Borders::ALL));
    frame.render_widget(list, area);
}

/// Detail panel for the highlighted row: metadata, checks, then the
/// rejection detail for sent-back rows or the action hint for the rest
pub fn render_manuscript_detail(
    frame: &mut Frame,
    area: Rect,
    manuscript: Option<(&Manuscript, PrimaryAction)>,
    display: &DisplayConfig,
) {
    let block = Block::default().title("Details").borders(Borders::ALL);
    let Some((ms, action)) = manuscript else {
        frame.render_widget(Paragraph::new("No manuscripts").block(block), area);
        return;
    };

    let mut lines = vec![
        Line::styled(ms.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
        Line::from(format!("{} · {}", ms.id, ms.journal)),
        Line::from(format!("Authors: {}", ms.authors.join(", "))),
        Line::from(format!(
            "Keywords: {}",
            ms.keyword_preview(display.keyword_preview_count)
        )),
        Line::raw(""),
        Line::styled("Pre-Screening", Style::default().add_modifier(Modifier::BOLD)),
    ];
    for check in &ms.checks {
        lines.push(Line::from(vec![
            stoplight_span(&stoplight(check)),
            Span::raw(format!(" {}", check.name)),
        ]));
    }
    lines.push(Line::raw(""));

    let rejection = rejection_detail(ms).filter(|_| ms.status == ManuscriptStatus::SentBack);
    if let Some(detail) = rejection {
        let red = Style::default().fg(Color::Red).add_modifier(Modifier::BOLD);
        lines.push(Line::styled(format!("Rejected: {}", detail.reason), red));
        lines.push(Line::from(detail.details.to_string()));
        match detail.extra {
            RejectionExtra::SimilarPublication(title) => {
                lines.push(Line::from(format!("Similar publication: {}", title)));
            }
            RejectionExtra::RecommendedJournals(journals) => {
                lines.push(Line::from("Recommended journals:"));
                for journal in journals {
                    lines.push(Line::from(format!("  - {}", journal)));
                }
            }
            RejectionExtra::None => {}
        }
        lines.push(Line::styled(
            "m: preview author email",
            Style::default().fg(Color::Gray),
        ));
    } else if let Some(label) = action.label() {
        lines.push(Line::styled(
            format!("Enter: {}", label),
            Style::default().fg(Color::Cyan),
        ));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_wraps() {
        assert_eq!(next_index(2, 3), 0);
        assert_eq!(prev_index(0, 3), 2);
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(prev_index(0, 0), 0);
    }
}
