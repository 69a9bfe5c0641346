//! Caption layout and glyph shaping.

/// Greedy word wrap, centering, and vertical placement.
pub mod layout;
/// Font faces and the shaping seam used by the compositor.
pub mod shaper;
