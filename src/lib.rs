//! Best-effort parsing of free-form date/time strings of unknown origin into
//! normalized UTC instants.
//!
//! SCM command line tools emit dates in many shapes: US, UK and other locale
//! conventions, varying date/time style combinations, dotted "a.m."/"p.m."
//! markers. [`parse_date`] normalizes the text, tries a lenient fast path
//! first, and then works through a deterministic catalog of locale-specific
//! formats until one accepts the whole input.

pub mod catalog;
pub mod error;
pub mod locale;
pub mod normalize;
pub mod parse;
pub mod settings;
pub mod wire;

pub use self::catalog::{FormatCatalog, FormatSpec};
pub use self::error::ParseDateError;
pub use self::locale::{DateStyle, Locale, TimeStyle};
pub use self::parse::{FallbackDateParser, parse_date, parse_date_in};
pub use self::settings::PatternSource;
