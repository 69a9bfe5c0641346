//! Single and batch export sessions.

/// Export session and batch statistics.
pub mod session;
