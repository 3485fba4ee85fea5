//! Badges, stoplights and score colors

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use scholarflow_core::evaluation::ScoreBand;
use scholarflow_core::screening::{Badge, Stoplight, Tone};

pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Success => Color::Green,
        Tone::Warning => Color::Yellow,
        Tone::Destructive => Color::Red,
        Tone::Accent => Color::Cyan,
        Tone::Primary => Color::Blue,
        Tone::Muted => Color::Gray,
    }
}

/// `[Label]` in the badge tone, with a `!` marker for alert badges
pub fn badge_span(badge: Badge) -> Span<'static> {
    let marker = if badge.alert { "! " } else { "" };
    Span::styled(
        format!("[{}{}]", marker, badge.label),
        Style::default()
            .fg(tone_color(badge.tone))
            .add_modifier(Modifier::BOLD),
    )
}

/// Glyph plus optional score, e.g. `✔ 96%`
pub fn stoplight_span(light: &Stoplight) -> Span<'static> {
    let text = match &light.score {
        Some(score) => format!("{} {}", light.glyph, score),
        None => light.glyph.to_string(),
    };
    Span::styled(text, Style::default().fg(tone_color(light.tone)))
}

pub fn score_color(band: ScoreBand) -> Color {
    match band {
        ScoreBand::High => Color::Green,
        ScoreBand::Medium => Color::Yellow,
        ScoreBand::Low => Color::Red,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scholarflow_core::manuscript::{ManuscriptStatus, PreScreeningCheck, Urgency};
    use scholarflow_core::screening::{status_badge, stoplight, urgency_badge};

    #[test]
    fn test_badge_text() {
        let span = badge_span(status_badge(ManuscriptStatus::SentBack));
        assert_eq!(span.content, "[Sent Back to Author]");
        assert_eq!(span.style.fg, Some(Color::Red));

        let span = badge_span(urgency_badge(Some(Urgency::High)));
        assert_eq!(span.content, "[! High]");
    }

    #[test]
    fn test_stoplight_with_score() {
        let check = PreScreeningCheck::pass("Plagiarism Check").with_score(4);
        assert_eq!(stoplight_span(&stoplight(&check)).content, "✔ 4%");
    }
}
