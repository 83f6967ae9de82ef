use regex::Regex;

/// Rewrites dot-separated meridiem markers ("p.m.", "A.M.", ...) to the bare
/// "PM"/"AM" forms the parsing strategies understand. Some OS locales and
/// command line clients emit the dotted spelling, which no format accepts.
pub fn normalize_meridiem(input: &str) -> String {
    let pm = Regex::new(r"(?i)p\.m\.").unwrap();
    let am = Regex::new(r"(?i)a\.m\.").unwrap();
    let rewritten = pm.replace_all(input, "PM");
    am.replace_all(&rewritten, "AM").into_owned()
}
