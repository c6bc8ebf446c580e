//! Row detail panel for the selected record

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use shelfwatch_core::{format_avg_daily_sales, format_last_updated, InventoryRecord};

use crate::widgets::StatusBadge;

pub struct RowDetail;

impl RowDetail {
    pub fn render(frame: &mut Frame, area: Rect, record: Option<&InventoryRecord>) {
        let block = Block::default().title("Detail").borders(Borders::ALL);
        let Some(record) = record else {
            frame.render_widget(Paragraph::new("No row selected").block(block), area);
            return;
        };

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(inner);

        let title = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(16)])
            .split(rows[0]);
        frame.render_widget(
            Paragraph::new(format!("{} @ {}", record.sku_id, record.store_id)),
            title[0],
        );
        frame.render_widget(StatusBadge::new(&record.status), title[1]);

        let label = Style::default().fg(Color::DarkGray);
        let lines = vec![Line::from(vec![
            Span::styled("Category: ", label),
            Span::raw(record.category.as_deref().unwrap_or("-").to_string()),
            Span::styled("  City: ", label),
            Span::raw(record.city.as_deref().unwrap_or("-").to_string()),
            Span::styled("  Avg daily sales: ", label),
            Span::raw(format_avg_daily_sales(record.avg_daily_sales)),
            Span::styled("  Updated: ", label),
            Span::raw(format_last_updated(record.last_updated.as_ref())),
        ])];
        frame.render_widget(Paragraph::new(lines), rows[1]);
    }
}
