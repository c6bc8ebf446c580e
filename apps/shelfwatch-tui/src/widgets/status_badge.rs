//! Risk status badge widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::Widget,
};

use shelfwatch_core::{RiskStatus, StatusColor};

/// Terminal color for a badge color
pub fn terminal_color(color: StatusColor) -> Color {
    let (r, g, b) = color.rgb();
    Color::Rgb(r, g, b)
}

/// Terminal color for a risk tier.
///
/// Unrecognized tags get the Safe color.
pub fn status_color(status: &RiskStatus) -> Color {
    terminal_color(status.color())
}

/// A pill-style badge showing the raw status tag on its tier color
pub struct StatusBadge<'a> {
    status: &'a RiskStatus,
}

impl<'a> StatusBadge<'a> {
    pub fn new(status: &'a RiskStatus) -> Self {
        Self { status }
    }

    fn style(&self) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(status_color(self.status))
            .add_modifier(Modifier::BOLD)
    }

    /// Render as a styled span (for table cells).
    pub fn as_span(&self) -> Span<'static> {
        Span::styled(format!(" {} ", self.status.label()), self.style())
    }
}

impl Widget for StatusBadge<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let text = format!(" {} ", self.status.label());
        buf.set_stringn(area.x, area.y, &text, area.width as usize, self.style());
    }
}
