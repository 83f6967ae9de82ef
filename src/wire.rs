use chrono::format::{Item, Parsed, StrftimeItems, parse};
use chrono::{DateTime, TimeZone, Utc};

/// The canonical wire pattern used for exchanging instants with the rest of
/// the system. Always rendered and read in UTC; the trailing `Z` is a
/// literal. Not part of the fallback catalog.
pub const WIRE_PATTERN: &str = "%Y-%m-%dT%H:%M:%SZ";

thread_local! {
    // Compiled once per thread. Format items must not be shared across
    // threads, so each worker gets its own copy.
    static WIRE_ITEMS: Vec<Item<'static>> = StrftimeItems::new(WIRE_PATTERN)
        .parse_to_owned()
        .expect("the wire pattern is well formed");
}

/// Renders an instant in the canonical wire format.
pub fn format_wire(instant: &DateTime<Utc>) -> String {
    WIRE_ITEMS.with(|items| instant.format_with_items(items.iter()).to_string())
}

/// Reads the canonical wire format back into a UTC instant.
pub fn parse_wire(text: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    WIRE_ITEMS.with(|items| {
        let mut parsed = Parsed::new();
        parse(&mut parsed, text, items.iter())?;
        let naive = parsed.to_naive_datetime_with_offset(0)?;
        Ok(Utc.from_utc_datetime(&naive))
    })
}
