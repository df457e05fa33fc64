/// Adapters layer - HTTP, filesystem and console implementations of the ports
pub mod outbound;
