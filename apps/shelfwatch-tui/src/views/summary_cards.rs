//! Summary cards: one per risk tier, always over the full snapshot

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use shelfwatch_core::{RiskStatus, SummaryCounts};

use crate::widgets::status_color;

const CARDS: [RiskStatus; 3] = [RiskStatus::Critical, RiskStatus::Warning, RiskStatus::Safe];

pub struct SummaryCards;

impl SummaryCards {
    pub fn render(frame: &mut Frame, area: Rect, counts: &SummaryCounts) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(area);

        for (status, chunk) in CARDS.iter().zip(chunks.iter()) {
            let block = Block::default()
                .title(Line::from(status.label()).style(Style::default().fg(Color::Gray)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(status_color(status)));

            let value = Paragraph::new(counts.count_for(status).to_string())
                .style(Style::default().add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center)
                .block(block);

            frame.render_widget(value, *chunk);
        }
    }
}
