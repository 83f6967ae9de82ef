use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::env;
use strum_macros::{Display, EnumIter};

/// Verbosity of the date half of a locale-specific format, from the most
/// spelled-out rendering down to the all-numeric one. Iteration order is the
/// order the catalog tries them in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DateStyle {
    Full,
    Long,
    Medium,
    Short,
}

/// Verbosity of the time half, same scale and ordering as [`DateStyle`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TimeStyle {
    Full,
    Long,
    Medium,
    Short,
}

/// Language/region conventions governing month names, separators and the
/// field order of all-numeric dates.
///
/// The command line clients this crate deals with emit dates in the US and UK
/// conventions of dotnet, so those are the locales carried here.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    EnUs,
    EnGb,
}

impl Locale {
    /// The process default locale, derived from `LC_ALL`/`LANG`.
    pub fn from_env() -> Self {
        let tag = env::var("LC_ALL")
            .or_else(|_| env::var("LANG"))
            .unwrap_or_default();
        if tag.starts_with("en_GB") || tag.starts_with("en-GB") {
            Locale::EnGb
        } else {
            Locale::EnUs
        }
    }

    pub fn date_pattern(&self, style: DateStyle) -> &'static str {
        match (self, style) {
            (Locale::EnUs, DateStyle::Full) => "%A, %B %d, %Y",
            (Locale::EnUs, DateStyle::Long) => "%B %d, %Y",
            (Locale::EnUs, DateStyle::Medium) => "%b %d, %Y",
            (Locale::EnUs, DateStyle::Short) => "%m/%d/%Y",
            (Locale::EnGb, DateStyle::Full) => "%A, %d %B %Y",
            (Locale::EnGb, DateStyle::Long) => "%d %B %Y",
            (Locale::EnGb, DateStyle::Medium) => "%d %b %Y",
            (Locale::EnGb, DateStyle::Short) => "%d/%m/%Y",
        }
    }

    pub fn time_pattern(&self, style: TimeStyle) -> &'static str {
        match (self, style) {
            (Locale::EnUs, TimeStyle::Full) => "%I:%M:%S %p %Z",
            (Locale::EnUs, TimeStyle::Long) => "%I:%M:%S %p %Z",
            (Locale::EnUs, TimeStyle::Medium) => "%I:%M:%S %p",
            (Locale::EnUs, TimeStyle::Short) => "%I:%M %p",
            (Locale::EnGb, TimeStyle::Full) => "%H:%M:%S %Z",
            (Locale::EnGb, TimeStyle::Long) => "%H:%M:%S %Z",
            (Locale::EnGb, TimeStyle::Medium) => "%H:%M:%S",
            (Locale::EnGb, TimeStyle::Short) => "%H:%M",
        }
    }

    pub fn datetime_pattern(&self, date_style: DateStyle, time_style: TimeStyle) -> String {
        format!(
            "{} {}",
            self.date_pattern(date_style),
            self.time_pattern(time_style)
        )
    }
}

/// The offset the process is currently running in; the default zone for
/// inputs that do not carry their own.
pub fn local_offset() -> FixedOffset {
    *chrono::Local::now().offset()
}
