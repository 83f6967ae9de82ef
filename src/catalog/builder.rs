use crate::catalog::format_spec::FormatSpec;
use crate::locale::{DateStyle, Locale, TimeStyle};
use crate::settings::traits::PatternSource;
use chrono::FixedOffset;
use log::warn;
use strum::IntoEnumIterator;

/// The ordered candidate formats tried after the fast path fails.
///
/// Ordering is deterministic for a given (locale, zone, configured patterns)
/// triple, so ambiguous strings parse identically across repeated calls:
/// configured custom patterns first, then every date x time style combination
/// with the date style as the outer loop, then the date-only styles. Built
/// fresh per parse call, never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatCatalog {
    specs: Vec<FormatSpec>,
}

impl FormatCatalog {
    pub fn build(source: &impl PatternSource, locale: Locale, zone: Option<FixedOffset>) -> Self {
        let mut specs = Vec::new();
        add_configured_patterns(source, zone, &mut specs);
        add_datetime_styles(locale, zone, &mut specs);
        add_date_styles(locale, zone, &mut specs);
        FormatCatalog { specs }
    }

    #[cfg(test)]
    pub(crate) fn from_specs(specs: Vec<FormatSpec>) -> Self {
        FormatCatalog { specs }
    }

    pub fn specs(&self) -> &[FormatSpec] {
        &self.specs
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

fn add_configured_patterns(
    source: &impl PatternSource,
    zone: Option<FixedOffset>,
    specs: &mut Vec<FormatSpec>,
) {
    let Some(configured) = source.datetime_patterns() else {
        return;
    };
    for pattern in configured.split(';').map(str::trim) {
        if pattern.is_empty() {
            continue;
        }
        match FormatSpec::custom(pattern, zone) {
            Ok(spec) => specs.push(spec),
            // An invalid configured pattern is skipped; the built-in part of
            // the catalog still applies.
            Err(err) => warn!("{err}, skipping"),
        }
    }
}

fn add_datetime_styles(locale: Locale, zone: Option<FixedOffset>, specs: &mut Vec<FormatSpec>) {
    for date_style in DateStyle::iter() {
        for time_style in TimeStyle::iter() {
            specs.push(FormatSpec::datetime(locale, date_style, time_style, zone));
        }
    }
}

fn add_date_styles(locale: Locale, zone: Option<FixedOffset>, specs: &mut Vec<FormatSpec>) {
    for date_style in DateStyle::iter() {
        specs.push(FormatSpec::date_only(locale, date_style, zone));
    }
}
