//! Inventory records as delivered by the prediction backend

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

use crate::status::RiskStatus;

/// Epoch values above this are taken to be milliseconds.
const EPOCH_MILLIS_THRESHOLD: f64 = 1e11;

/// One SKU at one store, immutable once fetched.
///
/// Every field carries an explicit default so a record with missing keys still
/// renders instead of being rejected.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InventoryRecord {
    #[serde(default)]
    pub sku_id: String,
    #[serde(default)]
    pub store_id: String,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub current_stock: u64,
    #[serde(default)]
    pub days_to_stockout: StockoutHorizon,
    #[serde(default)]
    pub status: RiskStatus,
    #[serde(default, deserialize_with = "deserialize_optional_count")]
    pub recommended_reorder_quantity: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub avg_daily_sales: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

impl InventoryRecord {
    /// Create a record with the identifying fields set and everything else defaulted.
    pub fn new(sku_id: impl Into<String>, store_id: impl Into<String>, status: RiskStatus) -> Self {
        Self {
            sku_id: sku_id.into(),
            store_id: store_id.into(),
            current_stock: 0,
            days_to_stockout: StockoutHorizon::Unknown,
            status,
            recommended_reorder_quantity: None,
            last_updated: None,
            avg_daily_sales: None,
            category: None,
            city: None,
        }
    }

    /// Stable row key, unique within a snapshot.
    pub fn row_key(&self) -> String {
        format!("{}-{}", self.store_id, self.sku_id)
    }
}

/// Projected number of days until stock depletes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StockoutHorizon {
    /// Finite horizon in days
    Days(f64),
    /// Stock never runs out (zero sales)
    Never,
    /// Field missing or not interpretable
    #[default]
    Unknown,
}

impl StockoutHorizon {
    /// Interpret a raw JSON value.
    ///
    /// `null`, infinite numbers and the strings `Infinity`, `inf`, `never` and `∞`
    /// all mean the stock never runs out. Serializers that cannot encode an
    /// infinite float emit `null` in its place.
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => StockoutHorizon::Never,
            serde_json::Value::Number(n) => n.as_f64().map_or(StockoutHorizon::Unknown, Self::from_f64),
            serde_json::Value::String(s) => Self::from_text(s),
            _ => StockoutHorizon::Unknown,
        }
    }

    fn from_f64(days: f64) -> Self {
        if days.is_infinite() && days > 0.0 {
            StockoutHorizon::Never
        } else if days.is_finite() {
            StockoutHorizon::Days(days)
        } else {
            StockoutHorizon::Unknown
        }
    }

    fn from_text(text: &str) -> Self {
        let trimmed = text.trim();
        match trimmed.to_lowercase().as_str() {
            "infinity" | "+infinity" | "inf" | "never" | "∞" => StockoutHorizon::Never,
            _ => trimmed
                .parse::<f64>()
                .map_or(StockoutHorizon::Unknown, Self::from_f64),
        }
    }

    /// Finite day count, if any.
    pub fn days(&self) -> Option<f64> {
        match self {
            StockoutHorizon::Days(d) => Some(*d),
            _ => None,
        }
    }

    pub fn is_never(&self) -> bool {
        matches!(self, StockoutHorizon::Never)
    }
}

impl<'de> Deserialize<'de> for StockoutHorizon {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(StockoutHorizon::from_json(&value))
    }
}

/// Parse a timestamp in any of the shapes the backend has been seen to emit:
/// RFC 3339, naive ISO-8601 (taken as UTC), or epoch seconds/milliseconds.
pub fn parse_timestamp(value: &serde_json::Value) -> Option<DateTime<Utc>> {
    match value {
        serde_json::Value::String(s) => parse_timestamp_str(s),
        serde_json::Value::Number(n) => {
            let raw = n.as_f64()?;
            if !raw.is_finite() || raw < 0.0 {
                return None;
            }
            let millis = if raw > EPOCH_MILLIS_THRESHOLD {
                raw
            } else {
                raw * 1000.0
            };
            Utc.timestamp_millis_opt(millis as i64).single()
        }
        _ => None,
    }
}

fn parse_timestamp_str(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Some(ts.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(naive.and_utc());
        }
    }
    None
}

fn deserialize_timestamp<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(parse_timestamp(&value))
}

/// Read a unit count. Whole-valued floats (`12.0`) and numeric strings are
/// accepted; negative or fractional values are not.
pub fn count_from_json(value: &serde_json::Value) -> Option<u64> {
    let raw = match value {
        serde_json::Value::Number(n) => {
            if let Some(count) = n.as_u64() {
                return Some(count);
            }
            n.as_f64()?
        }
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if raw.is_finite() && raw >= 0.0 && raw.fract() == 0.0 && raw < u64::MAX as f64 {
        Some(raw as u64)
    } else {
        None
    }
}

fn deserialize_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    count_from_json(&value)
        .ok_or_else(|| D::Error::custom(format!("expected a non-negative whole number, got {value}")))
}

fn deserialize_optional_count<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<u64>, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    count_from_json(&value)
        .map(Some)
        .ok_or_else(|| D::Error::custom(format!("expected a non-negative whole number, got {value}")))
}
