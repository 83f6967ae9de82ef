use crate::settings::traits::PatternSource;
use config::Config;
use std::env;

/// Configuration key holding the semicolon separated custom pattern list.
pub const DATETIME_PATTERNS_KEY: &str = "scm.datetime.patterns";

/// Environment variable equivalent of [`DATETIME_PATTERNS_KEY`].
pub const DATETIME_PATTERNS_VAR: &str = "SCM_DATETIME_PATTERNS";

/// Reads the pattern list from the process environment. This is the default
/// source used by the top-level parse functions.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvPatternSource;

impl PatternSource for EnvPatternSource {
    fn datetime_patterns(&self) -> Option<String> {
        env::var(DATETIME_PATTERNS_VAR)
            .ok()
            .filter(|value| !value.trim().is_empty())
    }
}

/// A fixed pattern list, for embedders that resolve configuration themselves
/// and for tests.
#[derive(Debug, Default, Clone)]
pub struct StaticPatternSource(Option<String>);

impl StaticPatternSource {
    pub fn new(patterns: &str) -> Self {
        StaticPatternSource(Some(patterns.to_string()))
    }

    pub fn empty() -> Self {
        StaticPatternSource(None)
    }
}

impl PatternSource for StaticPatternSource {
    fn datetime_patterns(&self) -> Option<String> {
        self.0.clone().filter(|value| !value.trim().is_empty())
    }
}

impl PatternSource for Config {
    fn datetime_patterns(&self) -> Option<String> {
        self.get_string(DATETIME_PATTERNS_KEY)
            .ok()
            .filter(|value| !value.trim().is_empty())
    }
}
