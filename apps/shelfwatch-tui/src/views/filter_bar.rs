//! Filter controls: store selector and SKU search box

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use shelfwatch_core::{FilterState, StoreFilter};

use crate::mode::Mode;

/// Placeholder shown in an empty search box
const SEARCH_PLACEHOLDER: &str = "e.g., TSHIRT_RED_M";

pub struct FilterBar;

impl FilterBar {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        filter: &FilterState,
        options: &[StoreFilter],
        mode: Mode,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        Self::render_store_selector(frame, chunks[0], &filter.store_filter, options);
        Self::render_search_box(frame, chunks[1], &filter.search_term, mode);
    }

    fn render_store_selector(
        frame: &mut Frame,
        area: Rect,
        selected: &StoreFilter,
        options: &[StoreFilter],
    ) {
        let position = options.iter().position(|o| o == selected);
        let counter = match position {
            Some(i) => format!(" ({}/{})", i + 1, options.len()),
            // Kept from an earlier snapshot; no longer offered.
            None => " (not in snapshot)".to_string(),
        };

        let line = Line::from(vec![
            Span::styled(
                format!("< {} >", selected.label()),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(counter, Style::default().fg(Color::DarkGray)),
        ]);

        let block = Block::default()
            .title("Store [s/S]")
            .borders(Borders::ALL);
        frame.render_widget(Paragraph::new(line).block(block), area);
    }

    fn render_search_box(frame: &mut Frame, area: Rect, term: &str, mode: Mode) {
        let editing = mode.is_text_entry();
        let border_style = if editing {
            Style::default().fg(Color::Magenta)
        } else {
            Style::default()
        };

        let line = if term.is_empty() && !editing {
            Line::from(Span::styled(
                SEARCH_PLACEHOLDER,
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            let cursor = if editing { "_" } else { "" };
            Line::from(format!("{}{}", term, cursor))
        };

        let block = Block::default()
            .title("Search SKU [/]")
            .borders(Borders::ALL)
            .border_style(border_style);
        frame.render_widget(Paragraph::new(line).block(block), area);
    }
}
