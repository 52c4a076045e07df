/// Crate-wide Result alias. Typed failures are `ReportError` values wrapped
/// in `anyhow::Error` so callers can still downcast them.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
