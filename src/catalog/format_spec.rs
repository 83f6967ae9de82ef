use crate::catalog::error::CatalogError;
use crate::locale::{DateStyle, Locale, TimeStyle, local_offset};
use chrono::format::{Item, Parsed, StrftimeItems, parse};
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};

/// Where a spec came from. Determines nothing at parse time; kept so that
/// catalog ordering is inspectable and failures can be logged usefully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecKind {
    Custom,
    DateTime(DateStyle, TimeStyle),
    DateOnly(DateStyle),
}

/// One concrete parsing strategy: a strftime pattern bound to a timezone.
/// Immutable once constructed.
///
/// A spec matches only if it consumes the entire input. An explicit offset in
/// the input wins over the bound zone; naive inputs are resolved in the bound
/// zone, or the process-local offset when none was bound.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatSpec {
    kind: SpecKind,
    pattern: String,
    zone: Option<FixedOffset>,
}

impl FormatSpec {
    /// Compiles an externally configured pattern, rejecting anything strftime
    /// cannot interpret.
    pub fn custom(pattern: &str, zone: Option<FixedOffset>) -> Result<Self, CatalogError> {
        let malformed = StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error));
        if malformed {
            return Err(CatalogError::InvalidPattern {
                pattern: pattern.to_string(),
            });
        }
        Ok(FormatSpec {
            kind: SpecKind::Custom,
            pattern: pattern.to_string(),
            zone,
        })
    }

    /// A locale-specific combined date+time spec.
    pub fn datetime(
        locale: Locale,
        date_style: DateStyle,
        time_style: TimeStyle,
        zone: Option<FixedOffset>,
    ) -> Self {
        FormatSpec {
            kind: SpecKind::DateTime(date_style, time_style),
            pattern: locale.datetime_pattern(date_style, time_style),
            zone,
        }
    }

    /// A locale-specific date-only spec; midnight in the bound zone.
    pub fn date_only(locale: Locale, date_style: DateStyle, zone: Option<FixedOffset>) -> Self {
        FormatSpec {
            kind: SpecKind::DateOnly(date_style),
            pattern: locale.date_pattern(date_style).to_string(),
            zone,
        }
    }

    pub fn kind(&self) -> SpecKind {
        self.kind
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Attempts to parse `input` with this spec alone.
    pub fn parse(&self, input: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
        let mut parsed = Parsed::new();
        parse(&mut parsed, input.trim(), StrftimeItems::new(&self.pattern))?;

        if let Ok(instant) = parsed.to_datetime() {
            return Ok(instant.with_timezone(&Utc));
        }

        let naive = parsed.to_naive_datetime_with_offset(0).or_else(|_| {
            parsed
                .to_naive_date()
                .map(|date| date.and_hms_opt(0, 0, 0).unwrap())
        })?;
        Ok(self.resolve_in_zone(naive))
    }

    fn resolve_in_zone(&self, naive: NaiveDateTime) -> DateTime<Utc> {
        let zone = self.zone.unwrap_or_else(local_offset);
        zone.from_local_datetime(&naive)
            .single()
            .expect("fixed offsets resolve local datetimes unambiguously")
            .with_timezone(&Utc)
    }
}
