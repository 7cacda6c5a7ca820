//! Registrar-specific provider implementations.

pub mod namedotcom;
