//! Utilities to position text on pages: margins, baseline arithmetic, text
//! measurement, and word wrapping.

mod margins;
mod text;

pub use margins::*;
pub use text::*;
