//! Route sidebar

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Widget},
};

use scholarflow_core::navigation::Route;

/// The six workflow routes, numbered for quick jumps, active one marked
pub struct Sidebar<'a> {
    active: &'a Route,
}

impl<'a> Sidebar<'a> {
    pub fn new(active: &'a Route) -> Self {
        Self { active }
    }

    /// Entry lines, without styling
    pub fn entries(&self) -> Vec<String> {
        Route::SIDEBAR
            .iter()
            .enumerate()
            .map(|(i, route)| {
                let marker = if route == self.active { ">" } else { " " };
                format!("{}{} {}", marker, i + 1, route.label())
            })
            .collect()
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = Route::SIDEBAR
            .iter()
            .zip(self.entries())
            .map(|(route, text)| {
                let style = if route == self.active {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(Line::styled(text, style))
            })
            .collect();

        List::new(items)
            .block(Block::default().title("ScholarFlow").borders(Borders::ALL))
            .render(area, buf);
    }
}
