//! Minimal flowing-document writer on top of pdf-writer: paragraphs and
//! images are appended top to bottom and pages break automatically.

use flate2::Compression;
use flate2::write::ZlibEncoder;
use image::RgbImage;
use pdf_writer::{Content, Filter, Name, Pdf, Rect, Ref, Str};
use std::io::{self, Write};

const FONT_REGULAR: Name<'static> = Name(b"F1");
const FONT_BOLD: Name<'static> = Name(b"F2");

/// Rough Helvetica advance width, as a fraction of the font size.
const AVG_GLYPH_WIDTH: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

struct PageDraft {
    content: Content,
    images: Vec<(String, Ref)>,
}

pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    font_id: Ref,
    bold_font_id: Ref,
    next_id: i32,

    pages: Vec<PageDraft>,
    image_count: usize,

    page_w: f32,
    page_h: f32,
    margin: f32,
    cursor_y: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode text for the standard fonts (WinAnsiEncoding). Characters outside
/// the code page become '?'.
pub fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20}'..='\u{7e}' => c as u8,
            '\u{a0}'..='\u{ff}' => c as u32 as u8,
            '€' => 0x80,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            _ => b'?',
        })
        .collect()
}

fn draw_text(content: &mut Content, font: Name, x: f32, y: f32, size: f32, text: &str) {
    content.begin_text();
    content.set_font(font, size);
    content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
    content.show(Str(&win_ansi(text)));
    content.end_text();
}

fn deflate(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut enc = ZlibEncoder::new(Vec::new(), Compression::default());
    enc.write_all(data)?;
    enc.finish()
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let bold_font_id = Ref::new(4);

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.type1_font(bold_font_id)
            .base_font(Name(b"Helvetica-Bold"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        // A4 in points
        let page_h = 842.0;
        let margin = 50.0;

        Self {
            pdf,
            catalog_id,
            pages_id,
            font_id,
            bold_font_id,
            next_id: 5,
            pages: Vec::new(),
            image_count: 0,
            page_w: 595.0,
            page_h,
            margin,
            cursor_y: page_h - margin,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn usable_width(&self) -> f32 {
        self.page_w - 2.0 * self.margin
    }

    pub fn new_page(&mut self) {
        self.pages.push(PageDraft {
            content: Content::new(),
            images: Vec::new(),
        });
        self.cursor_y = self.page_h - self.margin;
    }

    /// Break the page when `height` no longer fits above the bottom margin.
    fn ensure_space(&mut self, height: f32) {
        if self.pages.is_empty() || self.cursor_y - height < self.margin {
            self.new_page();
        }
    }

    fn page(&mut self) -> &mut PageDraft {
        if self.pages.is_empty() {
            self.new_page();
        }
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn add_spacer(&mut self, height: f32) {
        if self.cursor_y - height < self.margin {
            self.new_page();
        } else {
            self.cursor_y -= height;
        }
    }

    /// Word-wrapped paragraph. Embedded newlines start new lines.
    pub fn add_paragraph(&mut self, text: &str, size: f32, align: Align, bold: bool) {
        let line_h = size * 1.35;
        let max_chars = ((self.usable_width() / (size * AVG_GLYPH_WIDTH)) as usize).max(8);
        let font = if bold { FONT_BOLD } else { FONT_REGULAR };

        for raw_line in text.lines() {
            if raw_line.trim().is_empty() {
                self.add_spacer(line_h);
                continue;
            }

            for line in textwrap::wrap(raw_line, max_chars) {
                self.ensure_space(line_h);
                self.cursor_y -= line_h;

                let x = match align {
                    Align::Left => self.margin,
                    Align::Center => {
                        let w = line.chars().count() as f32 * size * AVG_GLYPH_WIDTH;
                        ((self.page_w - w) / 2.0).max(self.margin)
                    }
                };
                let y = self.cursor_y + size * 0.25;
                draw_text(&mut self.page().content, font, x, y, size, &line);
            }
        }
    }

    /// Centered image scaled to fit inside `max_w` x `max_h` points.
    pub fn add_image(&mut self, img: &RgbImage, max_w: f32, max_h: f32) -> io::Result<()> {
        let (w, h) = img.dimensions();
        if w == 0 || h == 0 {
            return Ok(());
        }

        let compressed = deflate(img.as_raw())?;
        let image_id = self.fresh_ref();
        {
            let mut xobj = self.pdf.image_xobject(image_id, &compressed);
            xobj.filter(Filter::FlateDecode);
            xobj.width(w as i32);
            xobj.height(h as i32);
            xobj.color_space().device_rgb();
            xobj.bits_per_component(8);
        }

        let max_w = max_w.min(self.usable_width());
        let scale = (max_w / w as f32).min(max_h / h as f32);
        let draw_w = w as f32 * scale;
        let draw_h = h as f32 * scale;

        self.ensure_space(draw_h + 6.0);
        self.cursor_y -= draw_h + 6.0;

        let x = (self.page_w - draw_w) / 2.0;
        let y = self.cursor_y + 3.0;

        let name = format!("Im{}", self.image_count);
        self.image_count += 1;

        let page = self.page();
        page.content.save_state();
        page.content.transform([draw_w, 0.0, 0.0, draw_h, x, y]);
        page.content.x_object(Name(name.as_bytes()));
        page.content.restore_state();
        page.images.push((name, image_id));

        Ok(())
    }

    /// Write page objects, number the pages and return the PDF bytes.
    pub fn finish(mut self) -> Vec<u8> {
        if self.pages.is_empty() {
            self.new_page();
        }

        let total = self.pages.len();
        let drafts = std::mem::take(&mut self.pages);
        let mut page_refs = Vec::with_capacity(total);

        for (i, mut draft) in drafts.into_iter().enumerate() {
            let label = format!("Page {} of {}", i + 1, total);
            draw_text(
                &mut draft.content,
                FONT_REGULAR,
                self.page_w - self.margin - 70.0,
                self.margin - 30.0,
                9.0,
                &label,
            );

            let page_id = self.fresh_ref();
            let content_id = self.fresh_ref();
            page_refs.push(page_id);

            {
                let mut page = self.pdf.page(page_id);
                page.parent(self.pages_id)
                    .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
                    .contents(content_id);

                let mut resources = page.resources();
                resources
                    .fonts()
                    .pair(FONT_REGULAR, self.font_id)
                    .pair(FONT_BOLD, self.bold_font_id);

                if !draft.images.is_empty() {
                    let mut xobjects = resources.x_objects();
                    for (name, id) in &draft.images {
                        xobjects.pair(Name(name.as_bytes()), *id);
                    }
                }
            }

            self.pdf.stream(content_id, &draft.content.finish());
        }

        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.pdf
            .pages(self.pages_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        self.pdf.finish()
    }
}
