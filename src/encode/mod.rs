//! PNG encoding and export sinks.
//!
//! Sinks consume encoded slides in deck order and are used by `ExportSession::export_all`.

/// PNG encoding and export file naming.
pub mod png;
/// Export sink trait and built-in sinks.
pub mod sink;
