mod fast_path;
pub mod parser;
pub use self::parser::{FallbackDateParser, parse_date, parse_date_in};
