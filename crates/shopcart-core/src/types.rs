//! # Domain Types
//!
//! ## LineItem
//! ```text
//! ┌─────────────────────────────────┐
//! │            LineItem             │
//! │  ─────────────────────────────  │
//! │  name        String (required)  │
//! │  unitPrice   f64                │
//! │  quantity    i64                │
//! └─────────────────────────────────┘
//! ```
//!
//! A line item has no identity of its own. Two items with the same name are
//! two separate entries in the cart; nothing merges them.

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

// =============================================================================
// Line Item
// =============================================================================

/// One product entry in the cart.
///
/// ## Wire Format
/// ```json
/// { "name": "Product1", "unitPrice": 10.99, "quantity": 2 }
/// ```
///
/// A missing or `null` name deserializes to the empty string so that it is
/// rejected by the same rule as `""`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineItem {
    /// Product name shown to the shopper.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,

    /// Price of a single unit.
    pub unit_price: f64,

    /// Number of units.
    #[ts(type = "number")]
    pub quantity: i64,
}

impl LineItem {
    /// Creates a line item.
    pub fn new(name: impl Into<String>, unit_price: f64, quantity: i64) -> Self {
        LineItem {
            name: name.into(),
            unit_price,
            quantity,
        }
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let item = LineItem::new("Product1", 10.99, 2);
        assert!((item.line_total() - 21.98).abs() < 0.001);

        let free = LineItem::new("Sample", 0.0, 5);
        assert_eq!(free.line_total(), 0.0);
    }

    #[test]
    fn test_deserialize_camel_case() {
        let item: LineItem =
            serde_json::from_str(r#"{"name":"Product1","unitPrice":10.99,"quantity":2}"#).unwrap();
        assert_eq!(item, LineItem::new("Product1", 10.99, 2));
    }

    #[test]
    fn test_null_or_missing_name_becomes_empty() {
        let item: LineItem =
            serde_json::from_str(r#"{"name":null,"unitPrice":1.0,"quantity":1}"#).unwrap();
        assert_eq!(item.name, "");

        let item: LineItem = serde_json::from_str(r#"{"unitPrice":1.0,"quantity":1}"#).unwrap();
        assert_eq!(item.name, "");
    }

    #[test]
    fn test_missing_price_is_rejected() {
        let result = serde_json::from_str::<LineItem>(r#"{"name":"Product1","quantity":1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_uses_wire_names() {
        let json = serde_json::to_value(LineItem::new("Product2", 5.49, 3)).unwrap();
        assert_eq!(json["name"], "Product2");
        assert_eq!(json["unitPrice"], 5.49);
        assert_eq!(json["quantity"], 3);
    }
}
