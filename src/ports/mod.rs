/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports are the interfaces the application core uses to reach the
/// report backend, the HTML template and the output destination.
pub mod outbound;
