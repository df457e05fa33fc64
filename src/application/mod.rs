/// Application layer - Use cases, request DTOs and read models
///
/// Use cases drive the scanning service through the outbound ports; read
/// models turn the reports it returns into what the formatters render.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod use_cases;
