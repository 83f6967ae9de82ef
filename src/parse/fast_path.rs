use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Offsets for the timezone abbreviations the dotnet command line clients
/// commonly emit. `%Z` consumes but cannot resolve names, so a trailing
/// abbreviation is mapped through this table instead.
const NAMED_ZONE_OFFSETS: &[(&str, i32)] = &[
    ("GMT", 0),
    ("UT", 0),
    ("UTC", 0),
    ("EST", -5 * 3600),
    ("EDT", -4 * 3600),
    ("CST", -6 * 3600),
    ("CDT", -5 * 3600),
    ("MST", -7 * 3600),
    ("MDT", -6 * 3600),
    ("PST", -8 * 3600),
    ("PDT", -7 * 3600),
];

const OFFSET_DATETIME_FORMATS: &[&str] = &[
    "%a, %d %b %Y %H:%M:%S %z", // RFC 1123 with numeric offset
    "%d %b %Y %H:%M:%S %z",     // same, without weekday
    "%Y-%m-%dT%H:%M:%S%z",      // ISO with compact offset
    "%m/%d/%Y %H:%M:%S %z",     // US numeric with offset
];

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%a %b %d %H:%M:%S %Y", // asctime, e.g. Thu Sep 5 14:30:00 2013
    "%a, %d %b %Y %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%B %d, %Y %I:%M:%S %p", // %B also accepts abbreviated month names
    "%B %d, %Y %I:%M %p",
    "%d %B %Y %H:%M:%S",
    "%d %B %Y %H:%M",
];

const NAIVE_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%d %B %Y",
    "%a %b %d %Y",
];

/// Lenient, locale-agnostic first parse attempt, covering the date shapes the
/// US and UK command line clients emit without enumerating explicit catalog
/// formats. Inputs carrying no offset are resolved in `default_zone`.
///
/// `None` means "no match" and is a signal to fall back to the catalog, never
/// an error.
pub(crate) fn heuristic_parse(input: &str, default_zone: FixedOffset) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(input) {
        return Some(instant.with_timezone(&Utc));
    }
    if let Ok(instant) = DateTime::parse_from_rfc2822(input) {
        return Some(instant.with_timezone(&Utc));
    }
    for format in OFFSET_DATETIME_FORMATS {
        if let Ok(instant) = DateTime::parse_from_str(input, format) {
            return Some(instant.with_timezone(&Utc));
        }
    }
    if let Some(instant) = parse_with_named_zone(input) {
        return Some(instant);
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Some(resolve(naive, default_zone));
        }
    }
    for format in NAIVE_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(input, format) {
            return Some(resolve(date.and_hms_opt(0, 0, 0).unwrap(), default_zone));
        }
    }
    None
}

fn parse_with_named_zone(input: &str) -> Option<DateTime<Utc>> {
    let (rest, zone_name) = input.rsplit_once(' ')?;
    let seconds = NAMED_ZONE_OFFSETS
        .iter()
        .find(|(name, _)| zone_name.eq_ignore_ascii_case(name))
        .map(|(_, seconds)| *seconds)?;
    let zone = FixedOffset::east_opt(seconds)?;
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(rest.trim_end(), format) {
            return Some(resolve(naive, zone));
        }
    }
    None
}

fn resolve(naive: NaiveDateTime, zone: FixedOffset) -> DateTime<Utc> {
    zone.from_local_datetime(&naive)
        .single()
        .expect("fixed offsets resolve local datetimes unambiguously")
        .with_timezone(&Utc)
}
