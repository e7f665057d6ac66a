//! Flight cell parser.
//!
//! Accepts an airport-code route with optional duration and carrier,
//! e.g. `"VIE - DXB - BKK, 16h 25m, Emirates"` or `"MUC → PMI 2h"`.
//! A route needs at least two IATA codes, anything less is malformed.

use regex::Regex;

/// Parsed flight cell
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FlightRoute {
    /// Airport codes in travel order
    pub route: Vec<String>,
    /// Intermediate airports between origin and destination
    pub stops: u32,
    pub duration_min: Option<i64>,
    pub carrier: Option<String>,
}

lazy_static! {
    static ref ROUTE_RE: Regex =
        Regex::new(r"\b[A-Z]{3}(?:\s*(?:->|→|–|-)\s*[A-Z]{3})+\b").unwrap();
    static ref CODE_RE: Regex = Regex::new(r"[A-Z]{3}").unwrap();
    static ref HOURS_RE: Regex =
        Regex::new(r"(?i)\b(\d{1,2})\s*h(?:\s*(\d{1,2})\s*(?:m|min)?)?\b").unwrap();
    static ref MINUTES_RE: Regex = Regex::new(r"(?i)\b(\d{1,4})\s*min\b").unwrap();
    static ref CARRIER_RE: Regex = Regex::new(r"^[[:alpha:]][[:alpha:] .&-]*$").unwrap();
}

pub fn parse(raw: &str) -> Option<FlightRoute> {
    let route_match = ROUTE_RE.find(raw)?;
    let route: Vec<String> = CODE_RE
        .find_iter(route_match.as_str())
        .map(|code| code.as_str().to_string())
        .collect();

    let duration_min = parse_duration(raw);
    let carrier = parse_carrier(raw, route_match.as_str());
    let stops = (route.len() - 2) as u32;

    Some(FlightRoute {
        route,
        stops,
        duration_min,
        carrier,
    })
}

fn parse_duration(raw: &str) -> Option<i64> {
    if let Some(caps) = HOURS_RE.captures(raw) {
        let hours: i64 = caps.get(1)?.as_str().parse().ok()?;
        let minutes: i64 = caps
            .get(2)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0);
        return Some(hours * 60 + minutes);
    }

    MINUTES_RE
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// The carrier is the last comma-separated part that is plain words and
/// carries neither the route nor a duration.
fn parse_carrier(raw: &str, route_text: &str) -> Option<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| {
            !part.is_empty()
                && !part.contains(route_text)
                && !HOURS_RE.is_match(part)
                && !MINUTES_RE.is_match(part)
                && CARRIER_RE.is_match(part)
        })
        .last()
        .map(|part| part.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_route_with_duration_and_carrier() {
        let flight = parse("VIE - DXB - BKK, 16h 25m, Emirates").unwrap();
        assert_eq!(flight.route, vec!["VIE", "DXB", "BKK"]);
        assert_eq!(flight.stops, 1);
        assert_eq!(flight.duration_min, Some(16 * 60 + 25));
        assert_eq!(flight.carrier.as_ref().unwrap(), "Emirates");
    }

    #[test]
    fn parses_arrow_separated_nonstop() {
        let flight = parse("MUC → PMI 2h").unwrap();
        assert_eq!(flight.route, vec!["MUC", "PMI"]);
        assert_eq!(flight.stops, 0);
        assert_eq!(flight.duration_min, Some(120));
        assert!(flight.carrier.is_none());
    }

    #[test]
    fn parses_bare_minutes() {
        let flight = parse("HAM->FRA, 55 min").unwrap();
        assert_eq!(flight.duration_min, Some(55));
    }

    #[test]
    fn single_code_is_malformed() {
        assert!(parse("VIE, 2h").is_none());
    }

    #[test]
    fn free_text_is_malformed() {
        assert!(parse("direct flight, very comfy").is_none());
    }
}
