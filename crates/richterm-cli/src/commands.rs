// Rust guideline compliant 2026-10-17

//! Command implementations for the richterm CLI.

pub mod capture;
