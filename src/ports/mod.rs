/// Ports module defining interfaces for hexagonal architecture
///
/// The application core only talks to infrastructure through the
/// outbound (driven) ports defined here.
pub mod outbound;
