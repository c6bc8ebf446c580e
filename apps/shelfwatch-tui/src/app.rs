//! Application state and main render loop

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tracing::debug;

use shelfwatch_core::{
    format_last_updated, DashboardEvent, DashboardState, DerivedView, LoadStatus, StoreFilter,
};

use crate::keybindings::{normal_mode_action, Action};
use crate::mode::Mode;
use crate::views::{FilterBar, InventoryTable, RowDetail, SummaryCards};
use crate::widgets::ModeIndicator;

/// Main application state
pub struct App {
    /// Current mode (NORMAL, SEARCH)
    pub mode: Mode,
    /// Dashboard state; replaced on every event
    pub state: DashboardState,
    /// Endpoint the snapshot comes from, shown in the header
    pub source: String,
    /// Selected table row, an index into the visible rows
    pub selected_row: usize,
    /// Status message
    pub status_message: Option<String>,
    /// Whether to show the help overlay
    pub show_help: bool,
    /// Whether to show the row detail panel
    pub show_detail: bool,
}

impl App {
    /// Create a new application instance
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            mode: Mode::Normal,
            state: DashboardState::new(),
            source: source.into(),
            selected_row: 0,
            status_message: None,
            show_help: false,
            show_detail: false,
        }
    }

    /// Feed one event through the state and keep the selection in range.
    pub fn dispatch(&mut self, event: DashboardEvent) {
        self.state = std::mem::take(&mut self.state).apply(event);
        let visible = self.state.view().visible_rows.len();
        if self.selected_row >= visible {
            self.selected_row = visible.saturating_sub(1);
        }
    }

    /// Render the application
    pub fn render(&self, frame: &mut Frame) {
        let size = frame.area();
        let view = self.state.view();

        let detail_height = if self.show_detail { 4 } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),             // Title and last updated
                Constraint::Length(3),             // Filters
                Constraint::Length(3),             // Summary cards
                Constraint::Min(0),                // Table
                Constraint::Length(detail_height), // Row detail
                Constraint::Length(1),             // Status line
            ])
            .split(size);

        self.render_header(frame, chunks[0]);
        FilterBar::render(
            frame,
            chunks[1],
            self.state.filter(),
            &view.store_options,
            self.mode,
        );
        SummaryCards::render(frame, chunks[2], &view.summary_counts);
        InventoryTable::render(
            frame,
            chunks[3],
            &view.visible_rows,
            self.state.records().len(),
            self.selected_row,
        );
        if self.show_detail {
            let record = view.visible_rows.get(self.selected_row).copied();
            RowDetail::render(frame, chunks[4], record);
        }
        self.render_status_line(frame, chunks[5], &view);

        if self.show_help {
            self.render_help_overlay(frame, size);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                "Smart Inventory Health",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(
                    format!("Last updated: {}", format_last_updated(self.state.last_updated())),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!("  |  {}", self.source),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect, view: &DerivedView<'_>) {
        let load_status = self.state.load_status();
        let load_color = match load_status {
            LoadStatus::Loading => Color::Yellow,
            LoadStatus::Loaded => Color::Green,
            LoadStatus::Failed(_) => Color::Red,
        };

        let message = match self.mode {
            Mode::Search => format!("/{}", self.state.filter().search_term),
            Mode::Normal => self
                .status_message
                .clone()
                .unwrap_or_else(|| self.default_hint(view)),
        };

        let line = Line::from(vec![
            ModeIndicator::new(self.mode).as_span(),
            Span::styled(format!(" {} ", load_status), Style::default().fg(load_color)),
            Span::raw(message),
        ]);
        frame.render_widget(
            Paragraph::new(line).style(Style::default().bg(Color::Black)),
            area,
        );
    }

    fn default_hint(&self, view: &DerivedView<'_>) -> String {
        if let LoadStatus::Failed(reason) = self.state.load_status() {
            return format!("Could not load inventory data: {}", reason);
        }
        if self.state.snapshot().skipped > 0 {
            return format!(
                "{} malformed records skipped | ? for help",
                self.state.snapshot().skipped
            );
        }
        if view.summary_counts.unrecognized > 0 {
            return format!(
                "{} records with unrecognized status | ? for help",
                view.summary_counts.unrecognized
            );
        }
        "s: store | /: search | j/k: move | Enter: detail | ?: help | q: quit".to_string()
    }

    fn render_help_overlay(&self, frame: &mut Frame, area: Rect) {
        let help_text = r#"
Shelfwatch - Help

Filters:
  s / Tab       - Next store
  S / Shift-Tab - Previous store
  a             - Show ALL stores
  /             - Search SKU (case-insensitive substring)
  Esc           - Clear search

Navigation:
  j/k           - Move down/up
  g/G           - First/last row
  Enter / d     - Toggle row detail

Search mode:
  type          - Edit the term (table updates live)
  Ctrl-u        - Clear the term
  Enter / Esc   - Back to normal mode

Other:
  ?             - Toggle this help
  q / Ctrl-c    - Quit

Summary cards always count the whole snapshot.
"#;

        let block = Block::default()
            .title("Help")
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::Black));

        let help_area = centered_rect(60, 80, area);
        frame.render_widget(Clear, help_area);
        frame.render_widget(Paragraph::new(help_text).block(block), help_area);
    }

    /// Handle a key press, returns true if app should quit
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match self.mode {
            Mode::Normal => self.handle_normal_key(code, modifiers),
            Mode::Search => self.handle_search_key(code, modifiers),
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        let Some(action) = normal_mode_action(code, modifiers) else {
            return false;
        };
        debug!(?action, "Normal mode action");

        match action {
            Action::Quit => return true,
            Action::EnterSearch => {
                self.mode = Mode::Search;
                self.status_message = None;
            }
            Action::Cancel => {
                if self.show_help {
                    self.show_help = false;
                } else if !self.state.filter().search_term.is_empty() {
                    self.dispatch(DashboardEvent::SearchChanged(String::new()));
                    self.status_message = Some("Search cleared".to_string());
                }
            }
            Action::NextStore | Action::PrevStore | Action::ResetStore => {
                let options = self.state.view().store_options;
                let current = &self.state.filter().store_filter;
                let next = match action {
                    Action::NextStore => current.cycle_next(&options),
                    Action::PrevStore => current.cycle_prev(&options),
                    _ => StoreFilter::All,
                };
                self.status_message = Some(format!("Store: {}", next));
                self.dispatch(DashboardEvent::StoreFilterChanged(next));
            }
            Action::MoveDown => {
                let count = self.state.view().visible_rows.len();
                if count > 0 {
                    self.selected_row = (self.selected_row + 1) % count;
                }
            }
            Action::MoveUp => {
                let count = self.state.view().visible_rows.len();
                if count > 0 {
                    self.selected_row = if self.selected_row > 0 {
                        self.selected_row - 1
                    } else {
                        count - 1
                    };
                }
            }
            Action::Top => self.selected_row = 0,
            Action::Bottom => {
                self.selected_row = self.state.view().visible_rows.len().saturating_sub(1);
            }
            Action::ToggleDetail => self.show_detail = !self.show_detail,
            Action::ToggleHelp => self.show_help = !self.show_help,
        }
        false
    }

    fn handle_search_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        if modifiers.contains(KeyModifiers::CONTROL) {
            match code {
                KeyCode::Char('c') => return true,
                KeyCode::Char('u') => self.dispatch(DashboardEvent::SearchChanged(String::new())),
                _ => {}
            }
            return false;
        }

        match code {
            KeyCode::Esc | KeyCode::Enter => {
                self.mode = Mode::Normal;
            }
            KeyCode::Backspace => {
                let mut term = self.state.filter().search_term.clone();
                if term.pop().is_some() {
                    self.dispatch(DashboardEvent::SearchChanged(term));
                }
            }
            KeyCode::Char(c) => {
                let mut term = self.state.filter().search_term.clone();
                term.push(c);
                self.dispatch(DashboardEvent::SearchChanged(term));
            }
            _ => {}
        }
        false
    }
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use shelfwatch_core::{InventoryRecord, RiskStatus, Snapshot, StockoutHorizon};

    use crate::views::EMPTY_MESSAGE;

    fn record(sku: &str, store: &str, status: RiskStatus) -> InventoryRecord {
        InventoryRecord::new(sku, store, status)
    }

    fn loaded_app() -> App {
        let mut never = record("tshirt_blue_l", "S2", RiskStatus::Safe);
        never.days_to_stockout = StockoutHorizon::Never;
        let mut critical = record("TSHIRT_RED_M", "S1", RiskStatus::Critical);
        critical.days_to_stockout = StockoutHorizon::Days(3.14159);
        critical.recommended_reorder_quantity = Some(24);

        let mut app = App::new("http://127.0.0.1:8000/latest");
        app.dispatch(DashboardEvent::FetchCompleted(Snapshot::from_records(vec![
            critical,
            record("JEANS_BLUE_32", "S2", RiskStatus::Warning),
            never,
        ])));
        app
    }

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn visible_skus(app: &App) -> Vec<String> {
        app.state
            .view()
            .visible_rows
            .iter()
            .map(|r| r.sku_id.clone())
            .collect()
    }

    #[test]
    fn test_empty_dashboard_renders_placeholder() {
        let app = App::new("http://127.0.0.1:8000/latest");
        let text = screen(&app);
        assert!(text.contains(EMPTY_MESSAGE));
        assert!(text.contains("Last updated: unknown"));
        assert!(text.contains("< ALL >"));
        assert!(text.contains("LOADING"));
    }

    #[test]
    fn test_loaded_dashboard_renders_rows() {
        let text = screen(&loaded_app());
        assert!(text.contains("TSHIRT_RED_M"));
        assert!(text.contains("3.1"));
        assert!(text.contains("∞"));
        assert!(text.contains("24"));
        assert!(text.contains("Inventory (3 of 3)"));
        assert!(!text.contains(EMPTY_MESSAGE));
    }

    #[test]
    fn test_status_line_shows_load_status() {
        let loading = App::new("http://127.0.0.1:8000/latest");
        assert!(screen(&loading).contains(&format!(" {} ", LoadStatus::Loading)));

        let loaded = loaded_app();
        assert!(screen(&loaded).contains(&format!(" {} ", LoadStatus::Loaded)));

        let mut failed = App::new("http://127.0.0.1:8000/latest");
        failed.dispatch(DashboardEvent::FetchFailed("timed out".to_string()));
        let expected = format!(" {} ", LoadStatus::Failed("timed out".to_string()));
        assert!(screen(&failed).contains(&expected));
    }

    #[test]
    fn test_store_cycling_filters_rows_not_summary() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.state.filter().store_filter, StoreFilter::store("S1"));
        assert_eq!(visible_skus(&app), vec!["TSHIRT_RED_M"]);
        assert_eq!(app.state.view().summary_counts.total(), 3);

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(visible_skus(&app), vec!["JEANS_BLUE_32", "tshirt_blue_l"]);

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.state.filter().store_filter, StoreFilter::All);
        assert_eq!(visible_skus(&app).len(), 3);
    }

    #[test]
    fn test_search_mode_filters_live() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.mode, Mode::Search);

        // 'q' and 's' are text here, not shortcuts.
        type_text(&mut app, "SHIRT");
        assert!(!press(&mut app, KeyCode::Char('q')));
        assert_eq!(app.state.filter().search_term, "SHIRTq");
        assert!(visible_skus(&app).is_empty());
        assert!(screen(&app).contains(EMPTY_MESSAGE));

        press(&mut app, KeyCode::Backspace);
        assert_eq!(visible_skus(&app), vec!["TSHIRT_RED_M", "tshirt_blue_l"]);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.state.filter().search_term, "SHIRT");

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state.filter().search_term, "");
        assert_eq!(visible_skus(&app).len(), 3);
    }

    #[test]
    fn test_ctrl_u_clears_search() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "jeans");
        app.handle_key(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert_eq!(app.state.filter().search_term, "");
        assert_eq!(app.mode, Mode::Search);
    }

    #[test]
    fn test_selection_clamped_after_filtering() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Char('G'));
        assert_eq!(app.selected_row, 2);

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.selected_row, 0);
    }

    #[test]
    fn test_navigation_wraps() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.selected_row, 2);
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.selected_row, 0);
    }

    #[test]
    fn test_vanished_store_kept_after_refetch() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Char('s'));
        app.dispatch(DashboardEvent::FetchCompleted(Snapshot::from_records(vec![
            record("X", "S9", RiskStatus::Safe),
        ])));

        assert_eq!(app.state.filter().store_filter, StoreFilter::store("S1"));
        assert!(visible_skus(&app).is_empty());
        assert!(screen(&app).contains("(not in snapshot)"));

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.state.filter().store_filter, StoreFilter::All);
    }

    #[test]
    fn test_fetch_failure_shown_on_status_line() {
        let mut app = App::new("http://127.0.0.1:8000/latest");
        app.dispatch(DashboardEvent::FetchFailed("Request failed: refused".into()));
        let text = screen(&app);
        assert!(text.contains("FAILED"));
        assert!(text.contains("Could not load inventory data"));
        assert!(text.contains(EMPTY_MESSAGE));
    }

    #[test]
    fn test_detail_panel() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Enter);
        assert!(app.show_detail);
        let text = screen(&app);
        assert!(text.contains("TSHIRT_RED_M @ S1"));
        assert!(text.contains("Category: -"));
    }

    #[test]
    fn test_help_toggle_and_quit() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        assert!(screen(&app).contains("Shelfwatch - Help"));
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
        assert!(press(&mut app, KeyCode::Char('q')));
    }
}
