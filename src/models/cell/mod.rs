//! Parsed display shapes for offer cells.
//!
//! Each parser is a pure function from the stored free-text value to a
//! serializable shape. Malformed input is never an error: every parser
//! degrades to the plain-text shape.

pub mod flight;
pub mod price;
pub mod rating;

pub use self::flight::FlightRoute;
pub use self::price::{PriceBreakdown, PriceComponent};
pub use self::rating::StarRating;

use models::FieldKind;

/// Display shape of one offer cell
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CellValue {
    Price(PriceBreakdown),
    Flight(FlightRoute),
    Rating(StarRating),
    Text { raw: String },
}

impl CellValue {
    /// Parses a stored value according to the owning column's kind,
    /// falling back to plain text when the value does not match.
    pub fn parse(kind: FieldKind, raw: &str) -> CellValue {
        let parsed = match kind {
            FieldKind::Price => price::parse(raw).map(CellValue::Price),
            FieldKind::Flight => flight::parse(raw).map(CellValue::Flight),
            FieldKind::Rating => rating::parse(raw).map(CellValue::Rating),
            FieldKind::Text => None,
        };

        parsed.unwrap_or_else(|| CellValue::Text { raw: raw.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_price_falls_back_to_raw_text() {
        let cell = CellValue::parse(FieldKind::Price, "ask at reception");
        assert_eq!(
            cell,
            CellValue::Text {
                raw: "ask at reception".to_string()
            }
        );
    }

    #[test]
    fn text_kind_never_parses() {
        let cell = CellValue::parse(FieldKind::Text, "4.5/5");
        assert_eq!(cell, CellValue::Text { raw: "4.5/5".to_string() });
    }

    #[test]
    fn empty_value_falls_back_for_every_kind() {
        for kind in &[FieldKind::Price, FieldKind::Flight, FieldKind::Rating] {
            let cell = CellValue::parse(*kind, "");
            assert_eq!(cell, CellValue::Text { raw: String::new() });
        }
    }
}
