//! Slides, styles, and the project file they are loaded from.

/// Slide, style, and deck types.
pub mod model;
/// JSON project files.
pub mod project;
/// Word-color override bookkeeping across caption edits.
pub mod reconcile;
