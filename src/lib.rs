//! Composes the *Fundament der Natur* manuscript PDF: a title page, two
//! reflowed text sections with lightweight heading markup, and one captioned
//! page per sketch image, all with numbered footers.

mod colour;
pub use colour::*;

mod compose;
pub use compose::*;

pub(crate) mod content;

mod document;
pub use document::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

/// Font discovery and the startup font bundle
pub mod fontdir;
pub use fontdir::{FontSet, FontVariant};

mod image;
pub use self::image::*;

mod info;
pub use info::*;

/// Utility functions and structures to lay out text on pages
pub mod layout;

mod manifest;
pub use manifest::*;

/// Line classification for the manuscript's lightweight markup
pub mod markup;

mod page;
pub use page::*;

/// Pre-defined page sizes
pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod units;
pub use units::*;

/// Re-export pdf-writer, mostly for callers doing custom serialization
pub use pdf_writer;
