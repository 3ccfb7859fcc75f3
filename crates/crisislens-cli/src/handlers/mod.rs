//! Command handlers.
//!
//! Each handler turns parsed arguments plus [`crisislens_core::Settings`]
//! into calls on the core services or the server adapter, and formats the
//! outcome for the terminal.

pub mod analyze;
pub mod serve;
