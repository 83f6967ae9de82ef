use crate::locale::Locale;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ParseDateError {
    /// Every strategy was tried and rejected the input. Carries the failure
    /// from the last attempted format; earlier failures are only logged.
    #[error("'{input}' could not be parsed with any configured or built-in date format: {last_error}")]
    NoMatchingFormat {
        input: String,
        #[source]
        last_error: chrono::ParseError,
    },
    /// The catalog builder produced zero candidates. The builder always
    /// contributes the built-in style combinations, so this signals a defect
    /// rather than bad input.
    #[error("the format catalog for locale {locale} contained no candidate formats")]
    EmptyCatalog { locale: Locale },
}
