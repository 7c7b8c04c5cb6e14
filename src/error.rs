use std::path::PathBuf;
use thiserror::Error;

/// All errors that the crate can generate.
///
/// The composer distinguishes two failure tiers: everything represented here
/// aborts the run, while a missing sketch image is merely logged and skipped
/// and never surfaces as an error.
#[derive(Error, Debug)]
pub enum ComposeError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse a font file
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// [image] failed to decode an image
    Image(#[from] image::ImageError),

    /// None of the candidate directories contained the font file. Raised
    /// before any page is produced.
    #[error(
        "font file '{file_name}' not found in any of {searched:?}; \
         install the Liberation fonts package \
         (e.g. 'sudo apt install fonts-liberation' on Debian/Ubuntu)"
    )]
    FontNotFound {
        file_name: String,
        searched: Vec<PathBuf>,
    },

    /// A text section source could not be read or decoded as UTF-8
    #[error("cannot read text section source {path}")]
    TextSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A page listed in the page order is missing from the document
    #[error("page listed in the page order is missing from the document")]
    PageMissing,
}
