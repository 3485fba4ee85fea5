//! Catch-all for unknown paths

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_not_found(frame: &mut Frame, area: Rect, path: &str) {
    let lines = vec![
        Line::styled("404", Style::default().fg(Color::Red)),
        Line::from(format!("No page at {}", path)),
        Line::raw(""),
        Line::from("Esc: return to the worklist"),
    ];
    let paragraph =
        Paragraph::new(lines).block(Block::default().title("Not Found").borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}
