//! Display formatting for numeric and time fields

use chrono::{DateTime, Utc};

use crate::record::StockoutHorizon;

/// Shown for absent values
pub const PLACEHOLDER: &str = "-";
/// Shown for an unbounded stockout horizon
pub const INFINITY_GLYPH: &str = "∞";
/// Shown when the snapshot time is not known
pub const UNKNOWN_TIME: &str = "unknown";

/// `∞` for never, one decimal place otherwise.
///
/// Values exactly halfway between two tenths round away from zero, so `5.25`
/// shows as `5.3`. Everything else rounds to the nearest tenth of its exact
/// binary value.
pub fn format_days_to_stockout(horizon: &StockoutHorizon) -> String {
    match horizon {
        StockoutHorizon::Never => INFINITY_GLYPH.to_string(),
        StockoutHorizon::Days(days) if is_tenths_tie(*days) => {
            format!("{:.1}", (days * 10.0).round() / 10.0)
        }
        StockoutHorizon::Days(days) => format!("{:.1}", days),
        StockoutHorizon::Unknown => PLACEHOLDER.to_string(),
    }
}

/// True when `value` sits exactly on a hundredths-five boundary (`x.x5`).
///
/// Only quarters with an odd numerator can do that in binary, and scaling by
/// two or four is exact.
fn is_tenths_tie(value: f64) -> bool {
    let quarters = value * 4.0;
    quarters.is_finite() && quarters.fract() == 0.0 && (value * 2.0).fract() != 0.0
}

/// `-` when no reorder is recommended.
pub fn format_reorder_quantity(quantity: Option<u64>) -> String {
    quantity.map_or_else(|| PLACEHOLDER.to_string(), |q| q.to_string())
}

pub fn format_avg_daily_sales(sales: Option<f64>) -> String {
    sales.map_or_else(|| PLACEHOLDER.to_string(), |s| format!("{:.2}", s))
}

pub fn format_last_updated(last_updated: Option<&DateTime<Utc>>) -> String {
    last_updated.map_or_else(
        || UNKNOWN_TIME.to_string(),
        |ts| ts.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_days_to_stockout() {
        assert_eq!(format_days_to_stockout(&StockoutHorizon::Never), "∞");
        assert_eq!(format_days_to_stockout(&StockoutHorizon::Days(3.14159)), "3.1");
        assert_eq!(format_days_to_stockout(&StockoutHorizon::Days(0.0)), "0.0");
        assert_eq!(format_days_to_stockout(&StockoutHorizon::Unknown), "-");
    }

    #[test]
    fn test_days_to_stockout_halfway_rounds_up() {
        assert_eq!(format_days_to_stockout(&StockoutHorizon::Days(0.25)), "0.3");
        assert_eq!(format_days_to_stockout(&StockoutHorizon::Days(5.25)), "5.3");
        assert_eq!(format_days_to_stockout(&StockoutHorizon::Days(5.75)), "5.8");
        assert_eq!(format_days_to_stockout(&StockoutHorizon::Days(21.25)), "21.3");
        assert_eq!(format_days_to_stockout(&StockoutHorizon::Days(-0.25)), "-0.3");
        // 0.15 is stored just below the midpoint
        assert_eq!(format_days_to_stockout(&StockoutHorizon::Days(0.15)), "0.1");
        assert_eq!(format_days_to_stockout(&StockoutHorizon::Days(2.5)), "2.5");
    }

    #[test]
    fn test_reorder_quantity() {
        assert_eq!(format_reorder_quantity(None), "-");
        assert_eq!(format_reorder_quantity(Some(0)), "0");
        assert_eq!(format_reorder_quantity(Some(42)), "42");
    }

    #[test]
    fn test_last_updated() {
        assert_eq!(format_last_updated(None), "unknown");
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        assert_eq!(format_last_updated(Some(&ts)), "2024-05-01 10:00:00 UTC");
    }

    #[test]
    fn test_avg_daily_sales() {
        assert_eq!(format_avg_daily_sales(Some(2.5)), "2.50");
        assert_eq!(format_avg_daily_sales(None), "-");
    }
}
