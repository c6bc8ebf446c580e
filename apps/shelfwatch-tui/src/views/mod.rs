//! TUI views

mod detail;
mod filter_bar;
mod inventory_table;
mod summary_cards;

pub use detail::RowDetail;
pub use filter_bar::FilterBar;
pub use inventory_table::InventoryTable;
#[cfg(test)]
pub use inventory_table::EMPTY_MESSAGE;
pub use summary_cards::SummaryCards;
