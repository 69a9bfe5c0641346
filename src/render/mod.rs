//! CPU slide compositor.

pub(crate) mod background;
/// Slide compositing: background, caption, photo.
pub mod compositor;
/// Cover-fit cropping and photo blitting.
pub mod image;
/// Rendered slide surfaces.
pub mod surface;
