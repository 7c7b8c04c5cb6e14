//! The static description of the manuscript: which inputs are consumed, in
//! which order, and where the output lands.

use std::path::{Path, PathBuf};

/// The centered blocks stacked on the title page, top to bottom
#[derive(Debug, Clone)]
pub struct TitleBlock {
    pub title: String,
    pub subtitle: String,
    pub tagline: String,
    pub author: String,
    pub links: Vec<String>,
}

/// One reflowed text section: a bold page title plus a marked-up source file
#[derive(Debug, Clone)]
pub struct TextSection {
    pub title: String,
    pub path: PathBuf,
}

/// One sketch entry. The referenced file is optional: if it is absent the
/// entry is skipped with a logged notice and produces no page.
#[derive(Debug, Clone)]
pub struct SketchEntry {
    pub file_name: String,
    pub caption: String,
}

impl SketchEntry {
    fn new(file_name: &str, caption: &str) -> SketchEntry {
        SketchEntry {
            file_name: file_name.to_string(),
            caption: caption.to_string(),
        }
    }
}

/// Everything the composer consumes, in declared order. Order is
/// significant and fixed; there is no reordering or filtering surface.
#[derive(Debug, Clone)]
pub struct Manifest {
    pub base_dir: PathBuf,
    pub title_block: TitleBlock,
    pub sections: Vec<TextSection>,
    pub sketches: Vec<SketchEntry>,
    pub output_file: PathBuf,
}

impl Manifest {
    /// The manuscript this repository exists for: two German text sections
    /// followed by eight sketch pages.
    pub fn fundament_der_natur<P: AsRef<Path>>(base_dir: P) -> Manifest {
        let base_dir = base_dir.as_ref().to_path_buf();
        Manifest {
            title_block: TitleBlock {
                title: "Pulvermacher".to_string(),
                subtitle: "Fundament der Natur".to_string(),
                tagline: "Eine Bottom-Up-Beschreibung der Realit\u{e4}t".to_string(),
                author: "Raiko Pulvermacher".to_string(),
                links: vec![
                    "https://orcid.org/0009-0003-9431-1001".to_string(),
                    "https://osf.io/py42t/".to_string(),
                ],
            },
            sections: vec![
                TextSection {
                    title: "Flie\u{df}text".to_string(),
                    path: base_dir.join("Fliestext"),
                },
                TextSection {
                    title: "Methodik".to_string(),
                    path: base_dir.join("Methodik"),
                },
            ],
            sketches: vec![
                SketchEntry::new("Superposition.png", "Superposition"),
                SketchEntry::new("Materie.png", "Materie"),
                SketchEntry::new("Gravitation.png", "Gravitation"),
                SketchEntry::new("Zeit.png", "Zeit"),
                SketchEntry::new("Tensor der Realit\u{e4}ten.png", "Tensor der Realit\u{e4}ten"),
                SketchEntry::new("Atome beschreibung.png", "Atome \u{2013} Beschreibung"),
                SketchEntry::new("Energie flucht.png", "Energie \u{2013} Flucht"),
                SketchEntry::new("Neutron entwicklung.png", "Neutron \u{2013} Entwicklung"),
            ],
            output_file: base_dir.join("Pulvermacher-Fundament-der-Natur.pdf"),
            base_dir,
        }
    }

    /// The full path of a sketch file, relative to the manifest's base
    /// directory
    pub fn sketch_path(&self, entry: &SketchEntry) -> PathBuf {
        self.base_dir.join(&entry.file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_manifest_lists_all_inputs_in_order() {
        let manifest = Manifest::fundament_der_natur("/tmp/repo");
        assert_eq!(manifest.sections.len(), 2);
        assert_eq!(manifest.sections[0].title, "Fließtext");
        assert_eq!(manifest.sections[1].title, "Methodik");
        assert_eq!(manifest.sketches.len(), 8);
        assert_eq!(manifest.sketches[0].file_name, "Superposition.png");
        assert_eq!(
            manifest.output_file.file_name().unwrap(),
            "Pulvermacher-Fundament-der-Natur.pdf"
        );
    }

    #[test]
    fn sketch_paths_resolve_under_the_base_dir() {
        let manifest = Manifest::fundament_der_natur("/tmp/repo");
        let path = manifest.sketch_path(&manifest.sketches[3]);
        assert_eq!(path, PathBuf::from("/tmp/repo/Zeit.png"));
    }
}
