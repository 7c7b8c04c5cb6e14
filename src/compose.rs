//! The document composer: title page, reflowed text sections, captioned
//! sketch pages, and per-page footers, assembled in a fixed order.

use crate::layout::{self, Margins};
use crate::markup::{classify, LineClass};
use crate::pagesize::{self, PageSize};
use crate::{
    colours, Colour, ComposeError, Document, FontSet, FontVariant, Image, ImageLayout, Info,
    Manifest, Mm, Page, Pt, Rect, SketchEntry, SpanFont, SpanLayout, TextSection, TitleBlock,
};
use std::path::PathBuf;

const PAGE_SIZE: PageSize = pagesize::A4;

fn mm(value: f32) -> Pt {
    Mm(value).into()
}

fn page_margins() -> Margins {
    Margins::all(Mm(15.0))
}

/// Vertical space kept free of the image on a sketch page, for the caption
/// above it and the footer below it
fn caption_footer_reserve() -> Pt {
    mm(25.0)
}

fn link_grey() -> Colour {
    Colour::grey_bytes(100)
}

fn footer_grey() -> Colour {
    Colour::grey_bytes(130)
}

/// How one class of source line is rendered
#[derive(Copy, Clone)]
struct LineStyle {
    variant: FontVariant,
    size: Pt,
    line_height: Pt,
    gap_before: Pt,
}

impl LineStyle {
    fn new(variant: FontVariant, size: f32, line_height_mm: f32, gap_before_mm: f32) -> LineStyle {
        LineStyle {
            variant,
            size: Pt(size),
            line_height: mm(line_height_mm),
            gap_before: mm(gap_before_mm),
        }
    }

    fn section_title() -> LineStyle {
        LineStyle::new(FontVariant::Bold, 16.0, 10.0, 0.0)
    }

    fn heading1() -> LineStyle {
        LineStyle::new(FontVariant::Bold, 14.0, 8.0, 2.0)
    }

    fn heading2() -> LineStyle {
        LineStyle::new(FontVariant::Bold, 12.0, 7.0, 2.0)
    }

    fn heading3() -> LineStyle {
        LineStyle::new(FontVariant::BoldItalic, 11.0, 7.0, 2.0)
    }

    fn body() -> LineStyle {
        LineStyle::new(FontVariant::Regular, 11.0, 6.0, 0.0)
    }
}

/// The largest drawn size that preserves the source aspect ratio while
/// fitting within `bounds`: `scale = min(maxW/w, maxH/h)`. Images smaller
/// than the bounds are scaled up.
pub fn fit_within(width: f32, height: f32, bounds: (Pt, Pt)) -> (Pt, Pt) {
    let scale = (bounds.0 .0 / width).min(bounds.1 .0 / height);
    (Pt(width * scale), Pt(height * scale))
}

/// The footer line rendered at the bottom of every page
pub fn footer_text(author: &str, page_number: usize) -> String {
    format!("{author} \u{2013} Seite {page_number}")
}

/// Compose the whole manuscript described by `manifest` into a [Document].
///
/// Fonts are resolved from `font_dirs` once, up front; a missing font file
/// aborts before any page is produced. Missing sketch files are logged and
/// skipped; an unreadable text section source aborts the run.
pub fn compose(manifest: &Manifest, font_dirs: &[PathBuf]) -> Result<Document, ComposeError> {
    let mut document = Document::default();
    document.set_info(
        Info::new()
            .title(format!(
                "{} \u{2013} {}",
                manifest.title_block.title, manifest.title_block.subtitle
            ))
            .author(&manifest.title_block.author)
            .subject(&manifest.title_block.tagline)
            .clone(),
    );
    let fonts = FontSet::load(&mut document, font_dirs)?;

    let mut composer = Composer { document, fonts };
    composer.title_page(&manifest.title_block);
    for section in &manifest.sections {
        composer.text_section(section)?;
    }
    for sketch in &manifest.sketches {
        composer.sketch_page(manifest, sketch)?;
    }
    composer.number_pages(&manifest.title_block.author)?;
    Ok(composer.document)
}

/// Tracks the page being filled and the top edge of the next line on it
struct Cursor {
    page: Page,
    y_top: Pt,
}

impl Cursor {
    fn new() -> Cursor {
        let page = Page::new(PAGE_SIZE, Some(page_margins()));
        let y_top = page.content_box.y2;
        Cursor { page, y_top }
    }
}

struct Composer {
    document: Document,
    fonts: FontSet,
}

impl Composer {
    fn span_font(&self, variant: FontVariant, size: Pt) -> SpanFont {
        SpanFont {
            id: self.fonts.id(variant),
            size,
        }
    }

    /// The baseline y for a line whose top edge sits at `y_top`
    fn baseline(&self, y_top: Pt, variant: FontVariant, size: Pt) -> Pt {
        let font = &self.document.fonts[self.fonts.id(variant)];
        y_top + layout::baseline_offset(font, size)
    }

    /// Adds a single horizontally centered span with its top edge at `y_top`
    fn centered_span(
        &self,
        page: &mut Page,
        y_top: Pt,
        text: &str,
        variant: FontVariant,
        size: Pt,
        colour: Colour,
    ) {
        let font = &self.document.fonts[self.fonts.id(variant)];
        let width = layout::width_of_text(text, font, size);
        let x = page.media_box.x1 + (page.media_box.width() - width) / 2.0;
        let baseline = self.baseline(y_top, variant, size);
        page.add_span(SpanLayout {
            text: text.to_string(),
            font: self.span_font(variant, size),
            colour,
            coords: (x, baseline),
        });
    }

    /// One page of centered, vertically stacked blocks at decreasing
    /// emphasis, separated by fixed gaps
    fn title_page(&mut self, block: &TitleBlock) {
        let mut page = Page::new(PAGE_SIZE, Some(page_margins()));
        let mut y_top = page.content_box.y2 - mm(40.0);

        self.centered_span(&mut page, y_top, &block.title, FontVariant::Bold, Pt(24.0), colours::BLACK);
        y_top -= mm(12.0);

        self.centered_span(&mut page, y_top, &block.subtitle, FontVariant::Bold, Pt(18.0), colours::BLACK);
        y_top -= mm(10.0);

        y_top -= mm(6.0);
        self.centered_span(&mut page, y_top, &block.tagline, FontVariant::Italic, Pt(13.0), colours::BLACK);
        y_top -= mm(8.0);

        y_top -= mm(16.0);
        self.centered_span(&mut page, y_top, &block.author, FontVariant::Regular, Pt(11.0), colours::BLACK);
        y_top -= mm(7.0);

        y_top -= mm(4.0);
        for link in &block.links {
            self.centered_span(&mut page, y_top, link, FontVariant::Italic, Pt(9.0), link_grey());
            y_top -= mm(6.0);
        }

        self.document.add_page(page);
    }

    /// Opens a page with the section title in bold, then streams the source
    /// file line by line, classifying each line and emitting it in its
    /// style. Pages break whenever the next line would fall below the
    /// content box.
    fn text_section(&mut self, section: &TextSection) -> Result<(), ComposeError> {
        let source =
            std::fs::read_to_string(&section.path).map_err(|source| ComposeError::TextSource {
                path: section.path.clone(),
                source,
            })?;

        let mut cursor = Cursor::new();
        self.emit_wrapped(&mut cursor, &section.title, LineStyle::section_title());
        cursor.y_top -= mm(4.0);

        for line in source.lines() {
            match classify(line) {
                LineClass::Break => cursor.y_top -= mm(3.0),
                LineClass::Heading1(text) => {
                    self.emit_wrapped(&mut cursor, text, LineStyle::heading1())
                }
                LineClass::Heading2(text) => {
                    self.emit_wrapped(&mut cursor, text, LineStyle::heading2())
                }
                LineClass::Heading3(text) => {
                    self.emit_wrapped(&mut cursor, text, LineStyle::heading3())
                }
                LineClass::Body(text) => self.emit_wrapped(&mut cursor, text, LineStyle::body()),
            }
        }

        self.document.add_page(cursor.page);
        Ok(())
    }

    /// Emits one classified source line, word-wrapped at the full printable
    /// width and left-aligned
    fn emit_wrapped(&mut self, cursor: &mut Cursor, text: &str, style: LineStyle) {
        cursor.y_top -= style.gap_before;

        let span_font = self.span_font(style.variant, style.size);
        // the printable width comes off the current page's content box each
        // time, never cached across pages
        let max_width = cursor.page.content_box.width();
        let lines = {
            let font = &self.document.fonts[span_font.id];
            layout::wrap_lines(text, max_width, |candidate| {
                layout::width_of_text(candidate, font, style.size)
            })
        };

        for wrapped in lines {
            if cursor.y_top - style.line_height < cursor.page.content_box.y1 {
                self.break_page(cursor);
            }
            let baseline = self.baseline(cursor.y_top, style.variant, style.size);
            cursor.page.add_span(SpanLayout {
                text: wrapped,
                font: span_font,
                colour: colours::BLACK,
                coords: (cursor.page.content_box.x1, baseline),
            });
            cursor.y_top -= style.line_height;
        }
    }

    fn break_page(&mut self, cursor: &mut Cursor) {
        let finished = std::mem::replace(&mut cursor.page, Page::new(PAGE_SIZE, Some(page_margins())));
        self.document.add_page(finished);
        cursor.y_top = cursor.page.content_box.y2;
    }

    /// One page per sketch: the caption centered in bold above the image,
    /// which is scaled to the largest aspect-preserving fit and centered
    /// horizontally. A missing file skips the entry entirely.
    fn sketch_page(&mut self, manifest: &Manifest, entry: &SketchEntry) -> Result<(), ComposeError> {
        let path = manifest.sketch_path(entry);
        if !path.is_file() {
            log::warn!("skipping missing sketch file: {}", entry.file_name);
            return Ok(());
        }
        log::info!("adding sketch: {}", entry.file_name);

        let image = Image::load_from_disk(&path)?;
        let (source_w, source_h) = (image.width as f32, image.height as f32);
        let image_id = self.document.add_image(image);

        let mut page = Page::new(PAGE_SIZE, Some(page_margins()));
        let mut y_top = page.content_box.y2;
        self.centered_span(&mut page, y_top, &entry.caption, FontVariant::Bold, Pt(13.0), colours::BLACK);
        y_top -= mm(10.0) + mm(2.0);

        let max_width = page.content_box.width();
        let max_height = page.media_box.height() - page_margins().top - caption_footer_reserve();
        let (draw_w, draw_h) = fit_within(source_w, source_h, (max_width, max_height));
        let x = page.media_box.x1 + (page.media_box.width() - draw_w) / 2.0;
        page.add_image(ImageLayout {
            id: image_id,
            position: Rect {
                x1: x,
                y1: y_top - draw_h,
                x2: x + draw_w,
                y2: y_top,
            },
        });

        self.document.add_page(page);
        Ok(())
    }

    /// Stamps the centered, muted footer line onto every composed page,
    /// numbering from 1 in page order
    fn number_pages(&mut self, author: &str) -> Result<(), ComposeError> {
        let footer_font = self.span_font(FontVariant::Italic, Pt(8.0));
        let ids = self.document.page_order.clone();
        for (index, id) in ids.into_iter().enumerate() {
            let text = footer_text(author, index + 1);
            let (width, baseline_drop) = {
                let font = &self.document.fonts[footer_font.id];
                (
                    layout::width_of_text(&text, font, footer_font.size),
                    layout::baseline_offset(font, footer_font.size),
                )
            };
            let page = self
                .document
                .pages
                .get_mut(id)
                .ok_or(ComposeError::PageMissing)?;
            let x = page.media_box.x1 + (page.media_box.width() - width) / 2.0;
            let y = page.media_box.y1 + mm(12.0) + baseline_drop;
            page.add_span(SpanLayout {
                text,
                font: footer_font,
                colour: footer_grey(),
                coords: (x, y),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Pt, b: f32) -> bool {
        (a.0 - b).abs() < 1e-3
    }

    #[test]
    fn fit_binds_on_width_when_width_is_the_tighter_constraint() {
        let (w, h) = fit_within(800.0, 600.0, (Pt(180.0), Pt(200.0)));
        assert!(close(w, 180.0), "drawn width was {w:?}");
        assert!(close(h, 135.0), "drawn height was {h:?}");
    }

    #[test]
    fn fit_binds_on_height_when_height_is_the_tighter_constraint() {
        let (w, h) = fit_within(600.0, 800.0, (Pt(200.0), Pt(180.0)));
        assert!(close(w, 135.0));
        assert!(close(h, 180.0));
    }

    #[test]
    fn fit_preserves_aspect_ratio() {
        let (w, h) = fit_within(800.0, 600.0, (Pt(180.0), Pt(200.0)));
        assert!((w.0 / h.0 - 800.0 / 600.0).abs() < 1e-4);
    }

    #[test]
    fn fit_scales_small_images_up() {
        let (w, h) = fit_within(100.0, 100.0, (Pt(200.0), Pt(300.0)));
        assert!(close(w, 200.0));
        assert!(close(h, 200.0));
    }

    #[test]
    fn footer_line_carries_author_and_number() {
        assert_eq!(
            footer_text("Raiko Pulvermacher", 3),
            "Raiko Pulvermacher \u{2013} Seite 3"
        );
    }
}
