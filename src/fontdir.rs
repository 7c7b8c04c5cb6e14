//! Font discovery and the startup font bundle.
//!
//! The composer needs the four Liberation Sans variants. They are resolved
//! once, from a fixed list of candidate directories, into a [FontSet] of
//! document font ids that is then passed around explicitly; nothing else in
//! the crate looks at the filesystem for fonts.

use crate::{ComposeError, Document, Font};
use id_arena::Id;
use std::path::{Path, PathBuf};

/// The four styled variants of the document's one typeface
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FontVariant {
    Regular,
    Bold,
    Italic,
    BoldItalic,
}

impl FontVariant {
    /// The Liberation Sans file name for this variant
    pub fn file_name(self) -> &'static str {
        match self {
            FontVariant::Regular => "LiberationSans-Regular.ttf",
            FontVariant::Bold => "LiberationSans-Bold.ttf",
            FontVariant::Italic => "LiberationSans-Italic.ttf",
            FontVariant::BoldItalic => "LiberationSans-BoldItalic.ttf",
        }
    }
}

/// The fixed list of directories searched for font files: the common system
/// locations, the user's `~/.fonts`, and finally the manifest's base
/// directory.
pub fn candidate_dirs(base_dir: &Path) -> Vec<PathBuf> {
    let mut dirs = vec![
        PathBuf::from("/usr/share/fonts/truetype/liberation"),
        PathBuf::from("/usr/share/fonts/liberation"),
    ];
    if let Some(home) = std::env::var_os("HOME") {
        dirs.push(Path::new(&home).join(".fonts"));
    }
    dirs.push(base_dir.to_path_buf());
    dirs
}

/// Return the first candidate directory containing `file_name`, or a
/// [ComposeError::FontNotFound] carrying install instructions.
pub fn resolve_font(file_name: &str, dirs: &[PathBuf]) -> Result<PathBuf, ComposeError> {
    for dir in dirs {
        let path = dir.join(file_name);
        if path.is_file() {
            return Ok(path);
        }
    }
    Err(ComposeError::FontNotFound {
        file_name: file_name.to_string(),
        searched: dirs.to_vec(),
    })
}

/// The four font variants loaded into a document, resolved once at startup
pub struct FontSet {
    pub regular: Id<Font>,
    pub bold: Id<Font>,
    pub italic: Id<Font>,
    pub bold_italic: Id<Font>,
}

impl FontSet {
    /// Resolve, parse, and register all four variants. Any missing or
    /// unparseable font file fails the whole bundle.
    pub fn load(document: &mut Document, dirs: &[PathBuf]) -> Result<FontSet, ComposeError> {
        let mut load_variant = |variant: FontVariant| -> Result<Id<Font>, ComposeError> {
            let path = resolve_font(variant.file_name(), dirs)?;
            let bytes = std::fs::read(path)?;
            Ok(document.add_font(Font::load(bytes)?))
        };

        Ok(FontSet {
            regular: load_variant(FontVariant::Regular)?,
            bold: load_variant(FontVariant::Bold)?,
            italic: load_variant(FontVariant::Italic)?,
            bold_italic: load_variant(FontVariant::BoldItalic)?,
        })
    }

    pub fn id(&self, variant: FontVariant) -> Id<Font> {
        match variant {
            FontVariant::Regular => self.regular,
            FontVariant::Bold => self.bold,
            FontVariant::Italic => self.italic,
            FontVariant::BoldItalic => self.bold_italic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_font_takes_the_first_matching_directory() {
        let empty = tempfile::tempdir().unwrap();
        let populated = tempfile::tempdir().unwrap();
        let expected = populated.path().join("LiberationSans-Regular.ttf");
        std::fs::write(&expected, b"not really a font").unwrap();

        let dirs = vec![
            empty.path().to_path_buf(),
            populated.path().to_path_buf(),
        ];
        let found = resolve_font("LiberationSans-Regular.ttf", &dirs).unwrap();
        assert_eq!(found, expected);
    }

    #[test]
    fn missing_font_names_the_file_and_suggests_a_fix() {
        let empty = tempfile::tempdir().unwrap();
        let dirs = vec![empty.path().to_path_buf()];
        let error = resolve_font("LiberationSans-Bold.ttf", &dirs).unwrap_err();
        let message = error.to_string();
        assert!(message.contains("LiberationSans-Bold.ttf"));
        assert!(message.contains("fonts-liberation"));
    }
}
