//! Shared record generators for integration tests

use proptest::prelude::*;
use shelfwatch_core::{InventoryRecord, RiskStatus, StockoutHorizon};

/// One of the three known tiers
pub fn known_status() -> impl Strategy<Value = RiskStatus> {
    prop_oneof![
        Just(RiskStatus::Critical),
        Just(RiskStatus::Warning),
        Just(RiskStatus::Safe),
    ]
}

/// A record drawn from a small store and SKU alphabet so filters collide often
pub fn record() -> impl Strategy<Value = InventoryRecord> {
    (
        "[A-Za-z_]{1,8}",
        prop_oneof![Just("S1"), Just("S2"), Just("S3"), Just("s1")],
        known_status(),
        0u64..500,
        prop_oneof![
            Just(StockoutHorizon::Never),
            (0.0f64..120.0).prop_map(StockoutHorizon::Days),
        ],
        proptest::option::of(0u64..200),
    )
        .prop_map(|(sku, store, status, stock, horizon, reorder)| {
            let mut record = InventoryRecord::new(sku, store, status);
            record.current_stock = stock;
            record.days_to_stockout = horizon;
            record.recommended_reorder_quantity = reorder;
            record
        })
}

pub fn records() -> impl Strategy<Value = Vec<InventoryRecord>> {
    proptest::collection::vec(record(), 0..40)
}

/// Store filter values including ones absent from generated data
pub fn store_choice() -> impl Strategy<Value = Option<&'static str>> {
    prop_oneof![
        Just(None),
        Just(Some("S1")),
        Just(Some("S2")),
        Just(Some("S9")),
    ]
}
