/// SBOM generation core
///
/// Domain models for npm dependency listings and the pure services that turn
/// a listing into a nested CycloneDX component forest. Nothing in here does
/// I/O.
pub mod domain;
pub mod services;
