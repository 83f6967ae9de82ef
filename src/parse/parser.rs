use crate::catalog::FormatCatalog;
use crate::error::ParseDateError;
use crate::locale::{Locale, local_offset};
use crate::normalize::normalize_meridiem;
use crate::parse::fast_path::heuristic_parse;
use crate::settings::sources::EnvPatternSource;
use crate::settings::traits::PatternSource;
use chrono::{DateTime, FixedOffset, Utc};
use log::debug;

/// Ordered multi-strategy date parser: meridiem normalization, then the
/// lenient fast path, then every catalog format for the requested locale and
/// zone, in order. The first success wins and no later strategy is consulted,
/// even where a catalog format would have given a locale-specific reading.
#[derive(Debug, Default, Clone)]
pub struct FallbackDateParser<S: PatternSource> {
    patterns: S,
}

impl FallbackDateParser<EnvPatternSource> {
    /// A parser reading custom patterns from the process environment.
    pub fn new() -> Self {
        FallbackDateParser {
            patterns: EnvPatternSource,
        }
    }
}

impl<S: PatternSource> FallbackDateParser<S> {
    /// A parser over an injected pattern configuration.
    pub fn with_pattern_source(patterns: S) -> Self {
        FallbackDateParser { patterns }
    }

    /// Parses with the process default locale and timezone.
    pub fn parse(&self, text: &str) -> Result<DateTime<Utc>, ParseDateError> {
        self.parse_in(text, Locale::from_env(), local_offset())
    }

    /// Parses with an explicit locale and default interpretation zone.
    pub fn parse_in(
        &self,
        text: &str,
        locale: Locale,
        zone: FixedOffset,
    ) -> Result<DateTime<Utc>, ParseDateError> {
        let normalized = normalize_meridiem(text);
        if let Some(instant) = heuristic_parse(&normalized, zone) {
            return Ok(instant);
        }
        let catalog = FormatCatalog::build(&self.patterns, locale, Some(zone));
        parse_with_catalog(&normalized, &catalog, locale)
    }
}

/// Tries every spec in catalog order, returning the first success or the
/// failure of the last attempted spec. Earlier failures are emitted at debug
/// level only.
fn parse_with_catalog(
    input: &str,
    catalog: &FormatCatalog,
    locale: Locale,
) -> Result<DateTime<Utc>, ParseDateError> {
    let mut last_error = None;
    for spec in catalog.specs() {
        match spec.parse(input) {
            Ok(instant) => return Ok(instant),
            Err(err) => {
                debug!("format '{}' rejected '{input}': {err}", spec.pattern());
                last_error = Some(err);
            }
        }
    }
    match last_error {
        Some(last_error) => Err(ParseDateError::NoMatchingFormat {
            input: input.to_string(),
            last_error,
        }),
        None => Err(ParseDateError::EmptyCatalog { locale }),
    }
}

/// Parses a free-form date string using the process default locale and
/// timezone and the environment-backed pattern configuration.
pub fn parse_date(text: &str) -> Result<DateTime<Utc>, ParseDateError> {
    FallbackDateParser::new().parse(text)
}

/// Parses a free-form date string with an explicit locale and zone.
pub fn parse_date_in(
    text: &str,
    locale: Locale,
    zone: FixedOffset,
) -> Result<DateTime<Utc>, ParseDateError> {
    FallbackDateParser::new().parse_in(text, locale, zone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::StaticPatternSource;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn utc_zone() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[fixture]
    fn parser() -> FallbackDateParser<StaticPatternSource> {
        FallbackDateParser::with_pattern_source(StaticPatternSource::empty())
    }

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
            .and_utc()
    }

    #[rstest]
    fn test_wire_shape_parses_via_fast_path(
        parser: FallbackDateParser<StaticPatternSource>,
        utc_zone: FixedOffset,
    ) {
        let instant = parser
            .parse_in("2013-09-05T14:30:00Z", Locale::EnUs, utc_zone)
            .unwrap();
        assert_eq!(instant, utc(2013, 9, 5, 14, 30, 0));
    }

    #[rstest]
    fn test_us_short_datetime(
        parser: FallbackDateParser<StaticPatternSource>,
        utc_zone: FixedOffset,
    ) {
        let instant = parser
            .parse_in("09/05/2013 2:30 PM", Locale::EnUs, utc_zone)
            .unwrap();
        assert_eq!(instant, utc(2013, 9, 5, 14, 30, 0));
    }

    #[rstest]
    fn test_full_style_falls_through_to_catalog(
        parser: FallbackDateParser<StaticPatternSource>,
        utc_zone: FixedOffset,
    ) {
        let instant = parser
            .parse_in("Thursday, September 5, 2013", Locale::EnUs, utc_zone)
            .unwrap();
        assert_eq!(instant, utc(2013, 9, 5, 0, 0, 0));
    }

    #[rstest]
    fn test_uk_locale_reads_day_first(
        parser: FallbackDateParser<StaticPatternSource>,
        utc_zone: FixedOffset,
    ) {
        let instant = parser
            .parse_in("Thursday, 5 September 2013 14:30", Locale::EnGb, utc_zone)
            .unwrap();
        assert_eq!(instant, utc(2013, 9, 5, 14, 30, 0));
    }

    #[rstest]
    fn test_fast_path_wins_over_catalog(utc_zone: FixedOffset) {
        // "09/05/2013" is parseable by the fast path (month first) and by the
        // en-GB short style (day first); the fast path result must win.
        let parser = FallbackDateParser::with_pattern_source(StaticPatternSource::empty());
        let instant = parser
            .parse_in("09/05/2013", Locale::EnGb, utc_zone)
            .unwrap();
        assert_eq!(instant, utc(2013, 9, 5, 0, 0, 0));
    }

    #[rstest]
    fn test_custom_pattern_wins_over_built_in_styles(utc_zone: FixedOffset) {
        let parser =
            FallbackDateParser::with_pattern_source(StaticPatternSource::new("%d.%m.%Y"));
        let instant = parser
            .parse_in("05.09.2013", Locale::EnUs, utc_zone)
            .unwrap();
        assert_eq!(instant, utc(2013, 9, 5, 0, 0, 0));
    }

    #[rstest]
    fn test_normalized_meridiem_variants_agree(
        parser: FallbackDateParser<StaticPatternSource>,
        utc_zone: FixedOffset,
    ) {
        let lower = parser
            .parse_in("September 5, 2013 2:30 p.m.", Locale::EnUs, utc_zone)
            .unwrap();
        let upper = parser
            .parse_in("September 5, 2013 2:30 P.M.", Locale::EnUs, utc_zone)
            .unwrap();
        let bare = parser
            .parse_in("September 5, 2013 2:30 PM", Locale::EnUs, utc_zone)
            .unwrap();
        assert_eq!(lower, bare);
        assert_eq!(upper, bare);
        assert_eq!(bare, utc(2013, 9, 5, 14, 30, 0));
    }

    #[rstest]
    fn test_idempotence(parser: FallbackDateParser<StaticPatternSource>, utc_zone: FixedOffset) {
        let first = parser.parse_in("09/05/2013 2:30 PM", Locale::EnUs, utc_zone);
        let second = parser.parse_in("09/05/2013 2:30 PM", Locale::EnUs, utc_zone);
        assert_eq!(first, second);
    }

    #[rstest]
    fn test_exhaustion_reports_last_failure(
        parser: FallbackDateParser<StaticPatternSource>,
        utc_zone: FixedOffset,
    ) {
        let err = parser
            .parse_in("not-a-date-xyz", Locale::EnUs, utc_zone)
            .unwrap_err();
        match err {
            ParseDateError::NoMatchingFormat { input, .. } => {
                assert_eq!(input, "not-a-date-xyz");
            }
            other => panic!("expected NoMatchingFormat, got {other:?}"),
        }
    }

    #[rstest]
    fn test_empty_catalog_is_an_invariant_violation() {
        let err = parse_with_catalog(
            "2013-09-05",
            &FormatCatalog::from_specs(Vec::new()),
            Locale::EnUs,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ParseDateError::EmptyCatalog {
                locale: Locale::EnUs
            }
        );
    }
}
