//! Utility modules.

/// Date/time deserialization helpers for operation envelopes.
pub mod datetime;

/// Log sanitization utilities to prevent token and payload exposure.
pub mod log_sanitizer;
