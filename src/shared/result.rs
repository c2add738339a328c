/// Crate-wide result type; errors are `anyhow::Error` so typed `SbomError`s
/// and context-wrapped I/O failures travel through the same `?` chain.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
