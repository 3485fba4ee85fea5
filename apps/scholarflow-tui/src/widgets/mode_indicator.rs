//! Mode indicator for the status bar.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::Widget,
};

use crate::mode::Mode;

/// Current interaction mode as a colored tag:
/// Normal blue, Insert green, Command magenta.
pub struct ModeIndicator {
    mode: Mode,
}

impl ModeIndicator {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    pub fn mode_color(mode: Mode) -> Color {
        match mode {
            Mode::Normal => Color::Blue,
            Mode::Insert => Color::Green,
            Mode::Command => Color::Magenta,
        }
    }

    fn style(&self) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Self::mode_color(self.mode))
            .add_modifier(Modifier::BOLD)
    }

    /// Render as a styled span (for embedding in the status line).
    pub fn as_span(&self) -> Span<'static> {
        Span::styled(format!("[{}]", self.mode.short_code()), self.style())
    }
}

impl Widget for ModeIndicator {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = format!("[{}]", self.mode.short_code());
        if area.width >= text.len() as u16 && area.height >= 1 {
            buf.set_string(area.x, area.y, &text, self.style());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_colors() {
        assert_eq!(ModeIndicator::mode_color(Mode::Normal), Color::Blue);
        assert_eq!(ModeIndicator::mode_color(Mode::Insert), Color::Green);
        assert_eq!(ModeIndicator::mode_color(Mode::Command), Color::Magenta);
    }

    #[test]
    fn test_span_text() {
        assert_eq!(ModeIndicator::new(Mode::Insert).as_span().content, "[INS]");
    }

    #[test]
    fn test_render_skips_narrow_area() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 1));
        ModeIndicator::new(Mode::Normal).render(Rect::new(0, 0, 3, 1), &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), " ");
    }
}
