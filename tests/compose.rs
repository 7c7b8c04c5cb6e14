//! End-to-end composition tests.
//!
//! The full pipeline needs the Liberation fonts; cases that render real
//! pages are skipped on hosts where the fonts cannot be resolved.

use fundament_pdf::{compose, fontdir, ComposeError, Manifest, PageContents};
use std::path::{Path, PathBuf};

fn write_sources(dir: &Path) {
    std::fs::write(
        dir.join("Fliestext"),
        "# Anfang\n\nEin erster Absatz mit etwas Text.\n---\nEin zweiter Absatz.\n",
    )
    .unwrap();
    std::fs::write(dir.join("Methodik"), "## Ansatz\nEine einzelne Zeile.\n").unwrap();
}

fn fonts_available(dirs: &[PathBuf]) -> bool {
    fontdir::resolve_font("LiberationSans-Regular.ttf", dirs).is_ok()
}

#[test]
fn missing_fonts_abort_before_any_page() {
    let dir = tempfile::tempdir().unwrap();
    write_sources(dir.path());
    let manifest = Manifest::fundament_der_natur(dir.path());

    // the temp directory is the only candidate and holds no fonts
    let font_dirs = vec![dir.path().to_path_buf()];
    let error = compose(&manifest, &font_dirs).unwrap_err();
    match error {
        ComposeError::FontNotFound { ref file_name, .. } => {
            assert_eq!(file_name, "LiberationSans-Regular.ttf");
        }
        other => panic!("expected FontNotFound, got {other:?}"),
    }
}

#[test]
fn missing_sketches_are_skipped_and_the_run_completes() {
    let dir = tempfile::tempdir().unwrap();
    write_sources(dir.path());
    let manifest = Manifest::fundament_der_natur(dir.path());
    let font_dirs = fontdir::candidate_dirs(dir.path());
    if !fonts_available(&font_dirs) {
        eprintln!("Liberation fonts not installed, skipping");
        return;
    }

    // none of the eight sketch files exist: title page + two text sections
    let document = compose(&manifest, &font_dirs).unwrap();
    assert_eq!(document.page_count(), 3);
}

#[test]
fn a_present_sketch_adds_exactly_one_page() {
    let dir = tempfile::tempdir().unwrap();
    write_sources(dir.path());
    let sketch = image::RgbImage::from_pixel(80, 60, image::Rgb([40, 80, 120]));
    sketch.save(dir.path().join("Superposition.png")).unwrap();

    let manifest = Manifest::fundament_der_natur(dir.path());
    let font_dirs = fontdir::candidate_dirs(dir.path());
    if !fonts_available(&font_dirs) {
        eprintln!("Liberation fonts not installed, skipping");
        return;
    }

    let document = compose(&manifest, &font_dirs).unwrap();
    assert_eq!(document.page_count(), 4);

    // every page ends with its own footer, numbered from 1 in order
    for (index, id) in document.page_order.iter().enumerate() {
        let page = document.pages.get(*id).unwrap();
        let expected = format!("Seite {}", index + 1);
        let found = page.contents.iter().any(|content| {
            matches!(content, PageContents::Text(spans)
                if spans.iter().any(|span| span.text.ends_with(&expected)))
        });
        assert!(found, "page {} is missing footer {expected:?}", index + 1);
    }

    // the finished document serializes into a PDF stream
    let mut bytes: Vec<u8> = Vec::new();
    document.write(&mut bytes).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn unreadable_text_source_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    // only one of the two section sources exists
    std::fs::write(dir.path().join("Fliestext"), "Text.\n").unwrap();

    let manifest = Manifest::fundament_der_natur(dir.path());
    let font_dirs = fontdir::candidate_dirs(dir.path());
    if !fonts_available(&font_dirs) {
        eprintln!("Liberation fonts not installed, skipping");
        return;
    }

    let error = compose(&manifest, &font_dirs).unwrap_err();
    match error {
        ComposeError::TextSource { ref path, .. } => {
            assert!(path.ends_with("Methodik"));
        }
        other => panic!("expected TextSource, got {other:?}"),
    }
}
