//! Price cell parser.
//!
//! Accepts a single amount (`"1.234,56 €"`, `"USD 999"`) or a
//! `+`-separated breakdown of labelled components
//! (`"1200 € Hotel + 350 € Flug"`). At least one component must carry a
//! currency token; the rest inherit it. Mixed currencies are malformed.

use std::str::FromStr;

use regex::Regex;
use rust_decimal::Decimal;

use models::Currency;

/// One labelled part of a price breakdown
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PriceComponent {
    pub label: Option<String>,
    pub amount: Decimal,
}

/// Parsed price cell
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PriceBreakdown {
    pub currency: Currency,
    pub total: Decimal,
    pub components: Vec<PriceComponent>,
    pub display: String,
}

lazy_static! {
    static ref COMPONENT_RE: Regex = Regex::new(
        r"(?x)
        ^\s*
        (?:(?P<cur_pre>€|\$|£|(?i:EUR|USD|GBP|CHF|Fr\.))\s*)?
        (?P<amount>\d+(?:[\ .,]\d{3})*(?:[.,]\d{1,2})?)
        (?:\s*(?P<cur_post>€|\$|£|(?i:EUR|USD|GBP|CHF|Fr\.)))?
        (?:\s+(?P<label>[^\d+]+?))?
        \s*$
    "
    )
    .unwrap();
}

struct RawComponent {
    label: Option<String>,
    amount: Decimal,
    currency: Option<Currency>,
}

pub fn parse(raw: &str) -> Option<PriceBreakdown> {
    let mut components = Vec::new();
    for part in raw.split('+') {
        components.push(parse_component(part)?);
    }

    let currency = resolve_currency(&components)?;
    let total = components
        .iter()
        .fold(Decimal::new(0, 0), |acc, c| acc + c.amount);
    let display = currency.format(total);

    Some(PriceBreakdown {
        currency,
        total,
        components: components
            .into_iter()
            .map(|c| PriceComponent {
                label: c.label,
                amount: c.amount,
            })
            .collect(),
        display,
    })
}

fn parse_component(part: &str) -> Option<RawComponent> {
    let caps = COMPONENT_RE.captures(part)?;

    let amount = parse_amount(caps.name("amount")?.as_str())?;
    let currency = caps
        .name("cur_pre")
        .or_else(|| caps.name("cur_post"))
        .and_then(|m| Currency::from_token(m.as_str()));
    let label = caps
        .name("label")
        .map(|m| m.as_str().trim().to_string())
        .filter(|l| !l.is_empty());

    Some(RawComponent {
        label,
        amount,
        currency,
    })
}

/// Every currency token present must agree; components without one
/// inherit the breakdown currency. No token at all is malformed.
fn resolve_currency(components: &[RawComponent]) -> Option<Currency> {
    let mut resolved = None;
    for component in components {
        match (resolved, component.currency) {
            (None, found) => resolved = found,
            (Some(cur), Some(other)) if cur != other => return None,
            _ => {}
        }
    }
    resolved
}

/// Normalizes an amount written in either decimal convention
/// (`1.234,56` or `1,234.56`) into a `Decimal`.
fn parse_amount(raw: &str) -> Option<Decimal> {
    let compact: String = raw.chars().filter(|c| *c != ' ').collect();

    let dot = compact.rfind('.');
    let comma = compact.rfind(',');

    let normalized = match (dot, comma) {
        (Some(d), Some(c)) => {
            // the later mark is the decimal one
            let (thousands, decimal) = if d > c { (',', '.') } else { ('.', ',') };
            compact
                .chars()
                .filter(|ch| *ch != thousands)
                .map(|ch| if ch == decimal { '.' } else { ch })
                .collect()
        }
        (Some(pos), None) | (None, Some(pos)) => {
            // a lone mark followed by one or two digits is the decimal
            // mark; anything else ("1.234", "1.234.567") separates
            // thousands groups
            let mark = compact.as_bytes()[pos] as char;
            let tail = compact.len() - pos - 1;
            let single = !compact[..pos].contains(mark);
            if single && tail <= 2 {
                compact.replace(mark, ".")
            } else {
                compact.chars().filter(|ch| *ch != mark).collect()
            }
        }
        (None, None) => compact,
    };

    Decimal::from_str(&normalized).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn parses_single_amount_with_symbol() {
        let price = parse("1.234,56 €").unwrap();
        assert_eq!(price.currency, Currency::Eur);
        assert_eq!(price.total, dec("1234.56"));
        assert!(price.components[0].label.is_none());
        assert_eq!(price.display, "1.234,56 €");
    }

    #[test]
    fn parses_code_prefix() {
        let price = parse("USD 999").unwrap();
        assert_eq!(price.currency, Currency::Usd);
        assert_eq!(price.total, dec("999"));
        assert_eq!(price.display, "$999.00");
    }

    #[test]
    fn parses_breakdown_with_labels() {
        let price = parse("1200 € Hotel + 350 € Flug").unwrap();
        assert_eq!(price.total, dec("1550"));
        assert_eq!(price.components.len(), 2);
        assert_eq!(price.components[0].label.as_ref().unwrap(), "Hotel");
        assert_eq!(price.components[1].label.as_ref().unwrap(), "Flug");
        assert_eq!(price.display, "1.550,00 €");
    }

    #[test]
    fn components_inherit_the_breakdown_currency() {
        let price = parse("1200€ + 350").unwrap();
        assert_eq!(price.currency, Currency::Eur);
        assert_eq!(price.total, dec("1550"));
    }

    #[test]
    fn english_decimal_convention() {
        let price = parse("$1,234.56").unwrap();
        assert_eq!(price.total, dec("1234.56"));
    }

    #[test]
    fn mixed_currencies_are_malformed() {
        assert!(parse("1200 € + 350 $").is_none());
    }

    #[test]
    fn amount_without_any_currency_is_malformed() {
        assert!(parse("1200").is_none());
    }

    #[test]
    fn free_text_is_malformed() {
        assert!(parse("breakfast included").is_none());
        assert!(parse("").is_none());
    }

    #[test]
    fn lone_mark_with_three_digits_is_a_thousands_separator() {
        assert_eq!(parse_amount("1.234"), Some(dec("1234")));
        assert_eq!(parse_amount("1,234"), Some(dec("1234")));
        assert_eq!(parse_amount("12,34"), Some(dec("12.34")));
        assert_eq!(parse_amount("1.5"), Some(dec("1.5")));
    }
}
