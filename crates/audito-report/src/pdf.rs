//! PDF encoding of a `ReportLayout` with printpdf.
//!
//! US Letter, 40pt margins, builtin Helvetica. Text flows top to bottom and
//! continues on a new page when the cursor reaches the bottom margin.
//!
//! Builtin fonts are limited to the WinAnsi character set (Latin-1 plus a few
//! typographic marks). Text outside it, such as Cyrillic, CJK or `≥`, is
//! drawn as `?`.

use printpdf::lopdf::Document;
use printpdf::{
    BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
    Point,
};

use crate::error::RenderError;
use crate::layout::{Block, ReportLayout, TextStyle};

const PAGE_WIDTH: f32 = 215.9;
const PAGE_HEIGHT: f32 = 279.4;
const PT_TO_MM: f32 = 0.352_778;
const MARGIN: f32 = 40.0 * PT_TO_MM;
const LINE_SPACING: f32 = 1.2;
/// Average Helvetica glyph advance as a fraction of the font size.
const GLYPH_WIDTH_EM: f32 = 0.5;
const LAYER_NAME: &str = "Contenido";
const WIN_ANSI: &str = "WinAnsiEncoding";

fn line_height(font_size: f32) -> f32 {
    font_size * LINE_SPACING * PT_TO_MM
}

fn text_width(chars: usize, font_size: f32) -> f32 {
    #[allow(clippy::cast_precision_loss)]
    let chars = chars as f32;
    chars * font_size * GLYPH_WIDTH_EM * PT_TO_MM
}

/// How many characters fit on one line at `font_size`.
fn max_chars(font_size: f32) -> usize {
    let usable = PAGE_WIDTH - 2.0 * MARGIN;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = (usable / (font_size * GLYPH_WIDTH_EM * PT_TO_MM)).floor() as usize;
    n.max(1)
}

/// Builtin fonts only cover WinAnsi. The encoder drops anything else, so such
/// characters are drawn as `?` to keep line content and widths aligned.
pub(crate) fn winansi(text: &str) -> String {
    let mut buf = [0u8; 4];
    text.chars()
        .map(|c| {
            let encoded = Document::encode_text(Some(WIN_ANSI), c.encode_utf8(&mut buf));
            if encoded.is_empty() { '?' } else { c }
        })
        .collect()
}

/// Spans of `paragraph` as (whitespace width before, word).
fn words_with_gaps(paragraph: &str) -> Vec<(usize, &str)> {
    let mut spans = Vec::new();
    let mut rest = paragraph;
    while !rest.is_empty() {
        let word_start = rest
            .find(|c: char| !c.is_whitespace())
            .unwrap_or(rest.len());
        let (gap, tail) = rest.split_at(word_start);
        let word_end = tail.find(char::is_whitespace).unwrap_or(tail.len());
        let (word, after) = tail.split_at(word_end);
        spans.push((gap.chars().count(), word));
        rest = after;
    }
    spans
}

/// Greedy word wrap. Runs of spaces inside a line are kept; the run at a
/// break is dropped. Words longer than a line are split. Embedded newlines
/// always break.
pub(crate) fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_len = 0usize;
        let mut wrapped = false;
        for (gap, word) in words_with_gaps(paragraph) {
            let mut chars: Vec<char> = word.chars().collect();
            let mut gap = if current_len == 0 && wrapped { 0 } else { gap };
            while chars.len() > width {
                if current_len > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                let rest = chars.split_off(width);
                lines.push(chars.into_iter().collect());
                chars = rest;
                wrapped = true;
                gap = 0;
            }
            let word_len = chars.len();
            if word_len == 0 {
                continue;
            }
            if current_len > 0 && current_len + gap + word_len > width {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
                wrapped = true;
                gap = 0;
            }
            if gap + word_len > width {
                gap = 0;
            }
            current.extend(std::iter::repeat_n(' ', gap));
            current.extend(chars);
            current_len += gap + word_len;
        }
        lines.push(current);
    }
    lines
}

struct PageCursor {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    font: IndirectFontRef,
    /// Top of the next line, in mm from the page bottom.
    y: f32,
    pages: usize,
}

impl PageCursor {
    fn new(title: &str) -> Result<Self, RenderError> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER_NAME);
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| RenderError::Font(format!("{e:?}")))?;
        let layer = doc.get_page(page).get_layer(layer);
        Ok(Self {
            doc,
            layer,
            font,
            y: PAGE_HEIGHT - MARGIN,
            pages: 1,
        })
    }

    fn ensure_room(&mut self, height: f32) {
        if self.y - height >= MARGIN {
            return;
        }
        let (page, layer) = self
            .doc
            .add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER_NAME);
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = PAGE_HEIGHT - MARGIN;
        self.pages += 1;
    }

    fn write_line(&mut self, text: &str, style: TextStyle) {
        let size = style.font_size();
        let height = line_height(size);
        self.ensure_room(height);

        let baseline = self.y - size * PT_TO_MM;
        self.layer
            .use_text(text, size, Mm(MARGIN), Mm(baseline), &self.font);

        if style.underlined() && !text.is_empty() {
            let underline_y = baseline - 1.5 * PT_TO_MM;
            let end = MARGIN + text_width(text.chars().count(), size);
            self.layer.add_line(Line {
                points: vec![
                    (Point::new(Mm(MARGIN), Mm(underline_y)), false),
                    (Point::new(Mm(end.min(PAGE_WIDTH - MARGIN)), Mm(underline_y)), false),
                ],
                is_closed: false,
            });
        }

        self.y -= height;
    }

    fn skip(&mut self, height: f32) {
        // A gap at the page bottom simply ends the page.
        self.y = (self.y - height).max(MARGIN);
    }
}

/// Encode a layout to PDF bytes.
///
/// # Errors
///
/// Returns `RenderError` if font registration or serialization fails.
pub fn encode(layout: &ReportLayout) -> Result<Vec<u8>, RenderError> {
    let mut cursor = PageCursor::new(&layout.title)?;
    let mut last_size = TextStyle::Body.font_size();

    for block in &layout.blocks {
        match block {
            Block::Text { text, style } => {
                last_size = style.font_size();
                for line in wrap(&winansi(text), max_chars(last_size)) {
                    cursor.write_line(&line, *style);
                }
            }
            Block::Gap { lines } => cursor.skip(lines * line_height(last_size)),
        }
    }

    let pages = cursor.pages;
    let bytes = cursor
        .doc
        .save_to_bytes()
        .map_err(|e| RenderError::Encoding(format!("{e:?}")))?;
    tracing::debug!(pages, bytes = bytes.len(), "report encoded");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn short_text_is_one_line() {
        assert_eq!(wrap("hola mundo", 20), vec!["hola mundo"]);
    }

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(
            wrap("uno dos tres cuatro", 8),
            vec!["uno dos", "tres", "cuatro"]
        );
    }

    #[test]
    fn splits_words_longer_than_a_line() {
        assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn newlines_force_breaks_and_keep_blank_lines() {
        assert_eq!(wrap("a\n\nb", 10), vec!["a", "", "b"]);
    }

    #[test]
    fn empty_text_is_one_empty_line() {
        assert_eq!(wrap("", 10), vec![""]);
    }

    #[test]
    fn wraps_by_chars_not_bytes() {
        assert_eq!(wrap("ñññ ñññ", 3), vec!["ñññ", "ñññ"]);
    }

    #[test]
    fn keeps_runs_of_spaces_inside_a_line() {
        assert_eq!(
            wrap("Resultado: 3 / 3  (100%)", 80),
            vec!["Resultado: 3 / 3  (100%)"]
        );
        assert_eq!(wrap("  sangría", 20), vec!["  sangría"]);
    }

    #[test]
    fn drops_the_space_run_at_a_break() {
        assert_eq!(wrap("uno    dos", 5), vec!["uno", "dos"]);
    }

    #[test]
    fn trailing_whitespace_is_ignored() {
        assert_eq!(wrap("fin   ", 10), vec!["fin"]);
    }

    #[test]
    fn winansi_keeps_spanish_and_replaces_the_rest() {
        assert_eq!(winansi("Auditoría ñ – €"), "Auditoría ñ – €");
        assert_eq!(winansi("Проверка ≥ 3"), "???????? ? 3");
    }

    #[test]
    fn smaller_fonts_fit_more_characters() {
        assert!(max_chars(9.0) > max_chars(16.0));
    }

    #[test]
    fn long_reports_overflow_onto_more_pages() {
        let blocks = (0..200)
            .map(|n| Block::Text {
                text: format!("- [OK] (1) item {n}"),
                style: TextStyle::Detail,
            })
            .collect();
        let layout = ReportLayout {
            title: "Largo".into(),
            blocks,
        };
        let mut cursor = PageCursor::new(&layout.title).unwrap();
        for block in &layout.blocks {
            if let Block::Text { text, style } = block {
                cursor.write_line(text, *style);
            }
        }
        assert!(cursor.pages > 1);
    }
}
