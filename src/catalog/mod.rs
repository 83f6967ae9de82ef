pub mod builder;
pub use self::builder::FormatCatalog;
pub mod error;
pub mod format_spec;
pub use self::format_spec::{FormatSpec, SpecKind};
