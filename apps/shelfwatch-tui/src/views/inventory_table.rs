//! Inventory table
//!
//! Rows appear in snapshot order; there is no sorting.

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use shelfwatch_core::{format_days_to_stockout, format_reorder_quantity, InventoryRecord};

use crate::widgets::StatusBadge;

/// Message shown when no row passes the filters
pub const EMPTY_MESSAGE: &str = "No records to display.";

const HEADERS: [&str; 6] = [
    "SKU",
    "Store",
    "Current Stock",
    "Days to Stockout",
    "Status",
    "Reorder Qty",
];

pub struct InventoryTable;

impl InventoryTable {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        rows: &[&InventoryRecord],
        total: usize,
        selected: usize,
    ) {
        let block = Block::default()
            .title(format!("Inventory ({} of {})", rows.len(), total))
            .borders(Borders::ALL);

        if rows.is_empty() {
            let message = Paragraph::new(EMPTY_MESSAGE)
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(message, area);
            return;
        }

        let header = Row::new(
            HEADERS
                .iter()
                .enumerate()
                .map(|(i, h)| Cell::from(align(h.to_string(), i))),
        )
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

        let body: Vec<Row> = rows.iter().map(|record| Self::row(record)).collect();

        let table = Table::new(
            body,
            [
                Constraint::Min(16),
                Constraint::Length(12),
                Constraint::Length(14),
                Constraint::Length(17),
                Constraint::Length(14),
                Constraint::Length(12),
            ],
        )
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

        let mut state = TableState::default().with_selected(Some(selected.min(rows.len() - 1)));
        frame.render_stateful_widget(table, area, &mut state);
    }

    fn row(record: &InventoryRecord) -> Row<'static> {
        Row::new(vec![
            Cell::from(record.sku_id.clone()),
            Cell::from(record.store_id.clone()),
            Cell::from(align(record.current_stock.to_string(), 2)),
            Cell::from(align(format_days_to_stockout(&record.days_to_stockout), 3)),
            Cell::from(Line::from(StatusBadge::new(&record.status).as_span())),
            Cell::from(align(
                format_reorder_quantity(record.recommended_reorder_quantity),
                5,
            )),
        ])
    }
}

/// Numeric columns are right-aligned.
fn align(content: String, column: usize) -> Text<'static> {
    let line = Line::from(content);
    match column {
        2 | 3 | 5 => Text::from(line.alignment(Alignment::Right)),
        _ => Text::from(line),
    }
}
