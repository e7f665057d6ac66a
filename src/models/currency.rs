//! Currencies recognized in price cells, with display formatting.

use rust_decimal::Decimal;

/// Currency of a parsed price cell
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Eur,
    Usd,
    Gbp,
    Chf,
}

impl Currency {
    /// Maps a symbol or code token to a currency, e.g. `€`, `EUR`, `$`, `chf`
    pub fn from_token(token: &str) -> Option<Currency> {
        match token.trim().to_lowercase().as_ref() {
            "€" | "eur" | "euro" => Some(Currency::Eur),
            "$" | "usd" | "dollar" => Some(Currency::Usd),
            "£" | "gbp" | "pound" => Some(Currency::Gbp),
            "chf" | "fr." => Some(Currency::Chf),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match *self {
            Currency::Eur => "€",
            Currency::Usd => "$",
            Currency::Gbp => "£",
            Currency::Chf => "CHF",
        }
    }

    /// Formats an amount in the currency's customary convention:
    /// `1.234,56 €` for EUR/CHF, `$1,234.56` for USD/GBP.
    pub fn format(&self, amount: Decimal) -> String {
        match *self {
            Currency::Eur => format!("{} €", group_digits(amount, ".", ",")),
            Currency::Chf => format!("{} CHF", group_digits(amount, ".", ",")),
            Currency::Usd => format!("${}", group_digits(amount, ",", ".")),
            Currency::Gbp => format!("£{}", group_digits(amount, ",", ".")),
        }
    }
}

/// Renders `amount` with two decimal places, a thousands separator and a
/// decimal mark.
fn group_digits(amount: Decimal, thousands: &str, decimal_mark: &str) -> String {
    let rendered = amount.round_dp(2).to_string();
    let (sign, unsigned) = if rendered.starts_with('-') {
        ("-", &rendered[1..])
    } else {
        ("", rendered.as_str())
    };

    let mut parts = unsigned.splitn(2, '.');
    let int_part = parts.next().unwrap_or("0");
    let frac_part = parts.next().unwrap_or("");

    let mut grouped = String::new();
    let digits = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push_str(thousands);
        }
        grouped.push(ch);
    }

    let mut frac = frac_part.to_string();
    while frac.len() < 2 {
        frac.push('0');
    }

    format!("{}{}{}{}", sign, grouped, decimal_mark, frac)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn formats_euro_in_european_convention() {
        let amount = Decimal::from_str("1234.5").unwrap();
        assert_eq!(Currency::Eur.format(amount), "1.234,50 €");
    }

    #[test]
    fn formats_dollar_in_english_convention() {
        let amount = Decimal::from_str("1234567.89").unwrap();
        assert_eq!(Currency::Usd.format(amount), "$1,234,567.89");
    }

    #[test]
    fn formats_small_amounts_without_grouping() {
        let amount = Decimal::from_str("999").unwrap();
        assert_eq!(Currency::Chf.format(amount), "999,00 CHF");
    }

    #[test]
    fn recognizes_symbols_and_codes() {
        assert_eq!(Currency::from_token("€"), Some(Currency::Eur));
        assert_eq!(Currency::from_token("USD"), Some(Currency::Usd));
        assert_eq!(Currency::from_token("Fr."), Some(Currency::Chf));
        assert_eq!(Currency::from_token("yen"), None);
    }
}
