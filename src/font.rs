use crate::{
    refs::{ObjectReferences, RefType},
    ComposeError, Pt,
};
use id_arena::Id;
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};
use pdf_writer::{
    types::{CidFontType, FontFlags, SystemInfo},
    Finish, Name, Pdf, Ref, Str,
};

/// A parsed TTF font. The font is embedded in its entirety in the generated
/// PDF, so large fonts will increase the size of the output accordingly.
///
/// Fonts are referred to throughout the crate by their [Id] within the
/// document.
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Parse a font from raw bytes
    pub fn load(bytes: Vec<u8>) -> Result<Font, ComposeError> {
        let face = OwnedFace::from_vec(bytes, 0)?;
        Ok(Font { face })
    }

    fn units_per_em(&self) -> f32 {
        self.face.as_face_ref().units_per_em() as f32
    }

    /// The full name of the font, falling back to `"Unnamed"` when the face
    /// carries no usable name record
    pub fn name(&self) -> String {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FULL_NAME && name.is_unicode())
            .and_then(|name| name.to_string())
            .unwrap_or_else(|| String::from("Unnamed"))
    }

    /// The family name of the font, with the same fallback as [Font::name]
    pub fn family(&self) -> String {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FAMILY && name.is_unicode())
            .and_then(|name| name.to_string())
            .unwrap_or_else(|| String::from("Unnamed"))
    }

    /// Distance from the baseline to the top of the font at the given size
    pub fn ascent(&self, size: Pt) -> Pt {
        let scaling: Pt = size / self.units_per_em();
        scaling * self.face.as_face_ref().ascender() as f32
    }

    /// How far to advance the pen when rendering `ch` at the given size.
    /// [None] if the font has no glyph for `ch`.
    pub fn advance(&self, ch: char, size: Pt) -> Option<Pt> {
        let face = self.face.as_face_ref();
        let scaling: Pt = size / self.units_per_em();
        let gid = face.glyph_index(ch)?;
        face.glyph_hor_advance(gid)
            .map(|advance| scaling * advance as f32)
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face.as_face_ref().glyph_index(ch).map(|i| i.0)
    }

    /// The glyph to render for `ch`, substituting U+FFFD and then `?` when
    /// the font has no glyph for it
    pub(crate) fn glyph_or_replacement(&self, ch: char) -> u16 {
        self.glyph_id(ch)
            .or_else(|| self.glyph_id('\u{FFFD}'))
            .or_else(|| self.glyph_id('?'))
            .unwrap_or(0)
    }

    /// All glyphs reachable from the font's unicode cmap subtables, as
    /// (glyph id, representative character) pairs sorted by glyph id
    fn unicode_glyphs(&self) -> Vec<(u16, char)> {
        let mut map: std::collections::HashMap<u16, char> = std::collections::HashMap::new();

        if let Some(cmap) = self.face.as_face_ref().tables().cmap {
            for subtable in cmap.subtables.into_iter().filter(|t| t.is_unicode()) {
                subtable.codepoints(|codepoint: u32| {
                    if let Ok(ch) = char::try_from(codepoint) {
                        if let Some(index) =
                            subtable.glyph_index(codepoint).filter(|index| index.0 > 0)
                        {
                            map.entry(index.0).or_insert(ch);
                        }
                    }
                });
            }
        }

        let mut glyphs: Vec<(u16, char)> = map.into_iter().collect();
        glyphs.sort_by_key(|&(gid, _)| gid);
        glyphs
    }

    fn write_font_data(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        writer: &mut Pdf,
    ) -> Ref {
        let id = refs.gen(RefType::FontData(font_index));
        writer
            .stream(id, self.face.as_slice())
            .pair(Name(b"Length1"), self.face.as_slice().len() as i32);
        id
    }

    fn write_descriptor(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        writer: &mut Pdf,
    ) -> Ref {
        let font_data_id = self.write_font_data(refs, font_index, writer);
        let face = self.face.as_face_ref();
        let scaling = 1000.0 / self.units_per_em();

        let id = refs.gen(RefType::FontDescriptor(font_index));
        let mut descriptor = writer.font_descriptor(id);
        descriptor.name(Name(self.name().as_bytes()));
        descriptor.family(Str(self.family().as_bytes()));
        descriptor.weight(face.weight().to_number());

        let mut flags = FontFlags::empty();
        if face.is_monospaced() {
            flags.set(FontFlags::FIXED_PITCH, true);
        }
        if face.is_italic() {
            flags.set(FontFlags::ITALIC, true);
        }
        descriptor.flags(flags);

        let bbox = face.global_bounding_box();
        descriptor.bbox(pdf_writer::Rect {
            x1: bbox.x_min as f32 * scaling,
            y1: bbox.y_min as f32 * scaling,
            x2: bbox.x_max as f32 * scaling,
            y2: bbox.y_max as f32 * scaling,
        });
        descriptor.italic_angle(face.italic_angle());
        descriptor.ascent(face.ascender() as f32 * scaling);
        descriptor.descent(face.descender() as f32 * scaling);
        descriptor.cap_height(
            face.capital_height()
                .map(|h| h as f32 * scaling)
                .unwrap_or(1000.0),
        );
        descriptor.x_height(face.x_height().unwrap_or_default() as f32 * scaling);
        // stem width is not exposed by ttf-parser; 80 is a reasonable stand-in
        descriptor.stem_v(80.0);
        descriptor.font_file2(font_data_id);

        id
    }

    fn write_cid(&self, refs: &mut ObjectReferences, font_index: usize, writer: &mut Pdf) -> Ref {
        let descriptor_id = self.write_descriptor(refs, font_index, writer);
        let face = self.face.as_face_ref();
        let scaling = 1000.0 / self.units_per_em();

        let id = refs.gen(RefType::CidFont(font_index));
        let mut cid_font = writer.cid_font(id);
        cid_font.subtype(CidFontType::Type2);
        cid_font.base_font(Name(format!("F{font_index}").as_bytes()));
        cid_font.system_info(SystemInfo {
            registry: Str(b"Adobe"),
            ordering: Str(b"Identity"),
            supplement: 0,
        });
        cid_font.font_descriptor(descriptor_id);

        // emit glyph widths as runs of consecutive glyph ids
        let mut widths = cid_font.widths();
        let mut run_start: u16 = 0;
        let mut run: Vec<f32> = Vec::new();
        for (gid, _) in self.unicode_glyphs() {
            let width = face
                .glyph_hor_advance(GlyphId(gid))
                .unwrap_or_default() as f32
                * scaling;
            if run.is_empty() {
                run_start = gid;
            } else if gid != run_start + run.len() as u16 {
                widths.consecutive(run_start, std::mem::take(&mut run));
                run_start = gid;
            }
            run.push(width);
        }
        if !run.is_empty() {
            widths.consecutive(run_start, run);
        }
        widths.finish();

        cid_font.default_width(1000.0);
        cid_font.cid_to_gid_map_predefined(Name(b"Identity"));

        id
    }

    fn write_to_unicode(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        writer: &mut Pdf,
    ) -> Ref {
        let id = refs.gen(RefType::ToUnicode(font_index));

        let mut cmap: String = String::from(
            "/CIDInit /ProcSet findresource begin\n\
             12 dict begin\n\
             begincmap\n\
             /CIDSystemInfo\n\
             << /Registry (Adobe)\n\
             /Ordering (UCS) /Supplement 0 >> def\n\
             /CMapName /Adobe-Identity-UCS def\n\
             /CMapType 2 def\n\
             1 begincodespacerange\n\
             <0000> <FFFF>\n\
             endcodespacerange\n",
        );

        // bfchar blocks are limited to 100 entries apiece
        for block in self.unicode_glyphs().chunks(100) {
            cmap.push_str(&format!("{} beginbfchar\n", block.len()));
            for &(gid, ch) in block {
                cmap.push_str(&format!("<{gid:04x}> <{:04x}>\n", u32::from(ch)));
            }
            cmap.push_str("endbfchar\n");
        }
        cmap.push_str("endcmap CMapName currentdict /CMap defineresource pop end end\n");

        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            cmap.as_bytes(),
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );
        writer
            .stream(id, compressed.as_slice())
            .filter(pdf_writer::Filter::FlateDecode);

        id
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, id: Id<Font>, writer: &mut Pdf) {
        let font_index = id.index();
        let font_id = refs.gen(RefType::Font(font_index));
        let cid_font_id = self.write_cid(refs, font_index, writer);
        let to_unicode_id = self.write_to_unicode(refs, font_index, writer);

        let mut font = writer.type0_font(font_id);
        font.base_font(Name(format!("F{font_index}").as_bytes()));
        font.encoding_predefined(Name(b"Identity-H"));
        font.descendant_font(cid_font_id);
        font.to_unicode(to_unicode_id);
    }
}
