//! Manuscript review
//!
//! Pre-screening results, one AI summary at a time, and the evaluation
//! overlay. Accept and reject are the two terminal decisions.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
    Frame,
};

use scholarflow_core::config::DisplayConfig;
use scholarflow_core::evaluation::{AiEvaluation, AiSummaries, ScoreBand, SummaryLength};
use scholarflow_core::manuscript::Manuscript;
use scholarflow_core::review::ManuscriptReview;
use scholarflow_core::screening::{stoplight, urgency_badge};

use crate::widgets::{badge_span, score_color, stoplight_span};

pub struct ManuscriptReviewView {
    /// Scroll offset of the summary text
    pub scroll: u16,
}

impl ManuscriptReviewView {
    pub fn new() -> Self {
        Self { scroll: 0 }
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        state: &ManuscriptReview,
        manuscript: &Manuscript,
        summaries: &AiSummaries,
        evaluation: &AiEvaluation,
        display: &DisplayConfig,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Manuscript header
                Constraint::Length(6), // Checks
                Constraint::Length(3), // Summary tabs
                Constraint::Min(0),    // Summary text
                Constraint::Length(1), // Decision hints
            ])
            .split(area);

        let header = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(
                    manuscript.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                badge_span(urgency_badge(manuscript.urgency)),
            ]),
            Line::from(format!("{} · {}", manuscript.id, manuscript.journal)),
            Line::from(format!(
                "{} · submitted {}",
                manuscript.author_preview(display.author_preview_count),
                manuscript.submission_date
            )),
        ])
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: true });
        frame.render_widget(header, chunks[0]);

        let checks: Vec<Line> = manuscript
            .checks
            .iter()
            .map(|check| {
                Line::from(vec![
                    stoplight_span(&stoplight(check)),
                    Span::raw(format!(" {}", check.name)),
                    Span::styled(
                        check
                            .details
                            .as_ref()
                            .map(|d| format!(" - {}", d))
                            .unwrap_or_default(),
                        Style::default().fg(Color::Gray),
                    ),
                ])
            })
            .collect();
        frame.render_widget(
            Paragraph::new(checks)
                .block(Block::default().title("Pre-Screening").borders(Borders::ALL)),
            chunks[1],
        );

        let selected_tab = SummaryLength::ALL
            .iter()
            .position(|len| *len == state.summary())
            .unwrap_or(0);
        let tabs = Tabs::new(SummaryLength::ALL.iter().map(|len| len.label()))
            .select(selected_tab)
            .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .block(Block::default().title("AI Summary (h/l)").borders(Borders::ALL));
        frame.render_widget(tabs, chunks[2]);

        let summary = Paragraph::new(summaries.get(state.summary()).to_string())
            .block(Block::default().borders(Borders::ALL))
            .wrap(Wrap { trim: true })
            .scroll((self.scroll, 0));
        frame.render_widget(summary, chunks[3]);

        frame.render_widget(
            Paragraph::new("a: Accept for Peer Review  r: Reject  e: AI Evaluation  Esc: Back")
                .style(Style::default().fg(Color::Gray)),
            chunks[4],
        );

        if state.evaluation_open() {
            render_evaluation(frame, area, evaluation, display);
        }
    }
}

impl Default for ManuscriptReviewView {
    fn default() -> Self {
        Self::new()
    }
}

fn render_evaluation(frame: &mut Frame, area: Rect, evaluation: &AiEvaluation, display: &DisplayConfig) {
    let popup = crate::app::centered_rect(70, 70, area);
    let mut lines = Vec::new();
    for (dimension, score) in evaluation.entries() {
        let band = ScoreBand::for_score(score.score, display);
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<22}", dimension.label()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{:>3}", score.score),
                Style::default().fg(score_color(band)).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::styled(
            format!("  {}", score.rationale),
            Style::default().fg(Color::Gray),
        ));
        lines.push(Line::raw(""));
    }

    let block = Block::default()
        .title("AI Evaluation (Esc to close)")
        .borders(Borders::ALL)
        .style(Style::default().bg(Color::Black));
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        popup,
    );
}
