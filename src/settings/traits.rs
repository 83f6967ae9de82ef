/// A capability for supplying the externally configured datetime patterns.
///
/// Catalog construction is a pure function of (locale, timezone, provided
/// patterns); implementors decide where the pattern list actually lives, so
/// there is no ambient global read inside the builder.
pub trait PatternSource {
    /// The semicolon separated list of additional strftime patterns, if any
    /// are configured. `None` or an all-whitespace value contributes zero
    /// formats to the catalog.
    fn datetime_patterns(&self) -> Option<String>;
}
