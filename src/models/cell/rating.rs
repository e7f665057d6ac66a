//! Rating cell parser.
//!
//! Accepts `"4.5/5"`, `"8/10"`, `"4 stars"`, `"3 Sterne"` or a row of
//! star glyphs (`"★★★★"`, `"★★★☆☆"`). A value above its scale is
//! malformed.

use regex::Regex;

/// Parsed rating cell
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StarRating {
    pub value: f32,
    pub scale: f32,
}

lazy_static! {
    static ref FRACTION_RE: Regex =
        Regex::new(r"^\s*(\d{1,2}(?:[.,]\d)?)\s*/\s*(\d{1,2})\s*$").unwrap();
    static ref WORD_RE: Regex =
        Regex::new(r"(?i)^\s*(\d(?:[.,]\d)?)\s*(?:stars?|sterne?)\s*$").unwrap();
    static ref GLYPHS_RE: Regex = Regex::new(r"^\s*[★☆*]+\s*$").unwrap();
}

pub fn parse(raw: &str) -> Option<StarRating> {
    if let Some(caps) = FRACTION_RE.captures(raw) {
        let value = parse_value(caps.get(1)?.as_str())?;
        let scale: f32 = caps.get(2)?.as_str().parse().ok()?;
        return checked(value, scale);
    }

    if let Some(caps) = WORD_RE.captures(raw) {
        let value = parse_value(caps.get(1)?.as_str())?;
        return checked(value, 5.0);
    }

    if GLYPHS_RE.is_match(raw) {
        let filled = raw.chars().filter(|c| *c == '★' || *c == '*').count() as f32;
        let empty = raw.chars().filter(|c| *c == '☆').count() as f32;
        let scale = if empty > 0.0 { filled + empty } else { 5.0 };
        return checked(filled, scale);
    }

    None
}

fn parse_value(raw: &str) -> Option<f32> {
    raw.replace(',', ".").parse().ok()
}

fn checked(value: f32, scale: f32) -> Option<StarRating> {
    if value <= scale && scale > 0.0 {
        Some(StarRating { value, scale })
    } else {
        None
    }
}
