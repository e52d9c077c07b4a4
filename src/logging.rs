//! Log filter for the terminal front-end.
//!
//! `RUST_LOG`, when set, decides the filter on its own. Without it only
//! warnings from this crate are shown.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_DIRECTIVE: &str = "column_addition_drill=warn";

/// Filter built from `RUST_LOG`, falling back to [`DEFAULT_DIRECTIVE`].
pub fn env_filter() -> EnvFilter {
    filter_from(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref())
}

/// Filter from explicit directives. Blank or unparsable directives give the
/// default.
pub fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}
