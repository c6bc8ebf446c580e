//! Risk tiers and their display colors
//!
//! The tier is computed upstream by the prediction service. The dashboard never
//! recomputes it from `days_to_stockout`; it only classifies the tag it receives.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Risk tier attached to a record by the upstream computation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RiskStatus {
    /// Stock runs out imminently
    Critical,
    /// Stock runs out soon
    Warning,
    /// Stock is sufficient
    Safe,
    /// Any tag outside the closed set, kept verbatim for display
    Unrecognized(String),
}

impl RiskStatus {
    /// Classify an upstream status tag.
    ///
    /// Matching is exact and case-sensitive.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Critical" => RiskStatus::Critical,
            "Warning" => RiskStatus::Warning,
            "Safe" => RiskStatus::Safe,
            other => RiskStatus::Unrecognized(other.to_string()),
        }
    }

    /// The tag text shown on the status badge.
    pub fn label(&self) -> &str {
        match self {
            RiskStatus::Critical => "Critical",
            RiskStatus::Warning => "Warning",
            RiskStatus::Safe => "Safe",
            RiskStatus::Unrecognized(tag) => tag,
        }
    }

    /// Whether this is one of the three known tiers.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, RiskStatus::Unrecognized(_))
    }

    /// Badge color for this tier.
    ///
    /// Unrecognized tags render with the Safe color.
    pub fn color(&self) -> StatusColor {
        match self {
            RiskStatus::Critical => StatusColor::Red,
            RiskStatus::Warning => StatusColor::Orange,
            RiskStatus::Safe | RiskStatus::Unrecognized(_) => StatusColor::Green,
        }
    }
}

impl Default for RiskStatus {
    fn default() -> Self {
        RiskStatus::Unrecognized(String::new())
    }
}

impl std::fmt::Display for RiskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for RiskStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for RiskStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::String(tag) => RiskStatus::from_tag(&tag),
            serde_json::Value::Null => RiskStatus::default(),
            other => RiskStatus::Unrecognized(other.to_string()),
        })
    }
}

/// Display color of a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusColor {
    Red,
    Orange,
    Green,
}

impl StatusColor {
    /// Hex color code
    pub fn hex(&self) -> &'static str {
        match self {
            StatusColor::Red => "#e11d48",
            StatusColor::Orange => "#f97316",
            StatusColor::Green => "#16a34a",
        }
    }

    /// RGB triple for truecolor terminals
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            StatusColor::Red => (0xe1, 0x1d, 0x48),
            StatusColor::Orange => (0xf9, 0x73, 0x16),
            StatusColor::Green => (0x16, 0xa3, 0x4a),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag() {
        assert_eq!(RiskStatus::from_tag("Critical"), RiskStatus::Critical);
        assert_eq!(RiskStatus::from_tag("Warning"), RiskStatus::Warning);
        assert_eq!(RiskStatus::from_tag("Safe"), RiskStatus::Safe);
        assert_eq!(
            RiskStatus::from_tag("critical"),
            RiskStatus::Unrecognized("critical".to_string())
        );
    }

    #[test]
    fn test_colors() {
        assert_eq!(RiskStatus::Critical.color(), StatusColor::Red);
        assert_eq!(RiskStatus::Warning.color(), StatusColor::Orange);
        assert_eq!(RiskStatus::Safe.color(), StatusColor::Green);
    }

    #[test]
    fn test_unrecognized_falls_back_to_safe_color() {
        let status = RiskStatus::from_tag("Overstock");
        assert_eq!(status.color(), StatusColor::Green);
        assert_eq!(status.label(), "Overstock");
        assert!(!status.is_recognized());
    }

    #[test]
    fn test_deserialize_non_string() {
        let status: RiskStatus = serde_json::from_str("42").unwrap();
        assert_eq!(status, RiskStatus::Unrecognized("42".to_string()));

        let status: RiskStatus = serde_json::from_str("null").unwrap();
        assert_eq!(status, RiskStatus::default());
    }

    #[test]
    fn test_serialize_roundtrip_label() {
        let json = serde_json::to_string(&RiskStatus::Warning).unwrap();
        assert_eq!(json, "\"Warning\"");
    }

    #[test]
    fn test_hex_matches_rgb() {
        for color in [StatusColor::Red, StatusColor::Orange, StatusColor::Green] {
            let (r, g, b) = color.rgb();
            assert_eq!(color.hex(), format!("#{:02x}{:02x}{:02x}", r, g, b));
        }
    }
}
