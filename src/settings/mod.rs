pub mod sources;
pub use self::sources::{DATETIME_PATTERNS_KEY, DATETIME_PATTERNS_VAR};
pub use self::sources::{EnvPatternSource, StaticPatternSource};
pub mod traits;
pub use self::traits::PatternSource;
