//! Heuristic classification of a column into a display kind.
//!
//! The kind is never stored: it is derived from the column's `field_id`
//! and `label` by keyword matching, so renaming a column is enough to
//! change how its cells are rendered.

/// Display kind of a column, inferred from its name
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Price,
    Flight,
    Rating,
    Text,
}

const PRICE_KEYWORDS: &[&str] = &["price", "cost", "total", "preis", "kosten"];
const FLIGHT_KEYWORDS: &[&str] = &["flight", "flug", "route", "airline"];
const RATING_KEYWORDS: &[&str] = &["rating", "stars", "sterne", "hotel", "score"];

impl FieldKind {
    /// Detects the kind from field id and label. Unknown names are `Text`,
    /// detection itself cannot fail.
    pub fn detect(field_id: &str, label: &str) -> FieldKind {
        let haystack = format!("{} {}", field_id, label).to_lowercase();

        if PRICE_KEYWORDS.iter().any(|kw| haystack.contains(kw)) {
            FieldKind::Price
        } else if FLIGHT_KEYWORDS.iter().any(|kw| haystack.contains(kw)) {
            FieldKind::Flight
        } else if RATING_KEYWORDS.iter().any(|kw| haystack.contains(kw)) {
            FieldKind::Rating
        } else {
            FieldKind::Text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_price_from_field_id() {
        assert_eq!(FieldKind::detect("total_price", "Gesamt"), FieldKind::Price);
    }

    #[test]
    fn detects_flight_from_label() {
        assert_eq!(FieldKind::detect("outbound", "Flug hin"), FieldKind::Flight);
    }

    #[test]
    fn detects_rating() {
        assert_eq!(FieldKind::detect("hotel_stars", "Hotel"), FieldKind::Rating);
    }

    #[test]
    fn falls_back_to_text() {
        assert_eq!(FieldKind::detect("notes", "Notes"), FieldKind::Text);
    }

    #[test]
    fn detection_is_case_insensitive() {
        assert_eq!(FieldKind::detect("PRICE", "Price"), FieldKind::Price);
    }
}
