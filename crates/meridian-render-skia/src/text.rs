// File: crates/meridian-render-skia/src/text.rs
// Summary: Text shaper using Skia textlayout; measures and draws anchored, weighted labels.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use meridian_core::scene::Anchor;

const SANS: &[&str] = &["Helvetica", "Arial", "Segoe UI", "Roboto", "DejaVu Sans", "sans-serif"];

pub struct TextShaper {
    fonts: FontCollection,
}

/// Font parameters for one label.
#[derive(Clone, Copy, Debug)]
pub struct TextSpec<'a> {
    pub size: f32,
    pub weight: u16,
    pub family: Option<&'a str>,
    pub color: skia::Color,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(spec: &TextSpec<'_>) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(spec.size.max(1.0));
        ts.set_color(spec.color);
        ts.set_font_style(skia::FontStyle::new(
            skia::font_style::Weight::from(spec.weight as i32),
            skia::font_style::Width::NORMAL,
            skia::font_style::Slant::Upright,
        ));
        match spec.family {
            Some(f) => {
                let mut families = vec![f];
                families.extend_from_slice(SANS);
                ts.set_font_families(families.as_slice());
            }
            None => {
                ts.set_font_families(SANS);
            }
        }
        ts
    }

    pub fn layout(&self, text: &str, spec: &TextSpec<'_>) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(spec));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, spec: &TextSpec<'_>) -> f32 { self.layout(text, spec).longest_line() }

    /// Draw with the baseline at `y`, horizontally anchored at `x`.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, anchor: Anchor, spec: &TextSpec<'_>) {
        let mut p = self.layout(text, spec);
        let w = p.longest_line();
        let left = match anchor {
            Anchor::Start => x,
            Anchor::Middle => x - w / 2.0,
            Anchor::End => x - w,
        };
        // Paragraph draws from top-left; adjust baseline by glyph height approximation
        p.paint(canvas, (left, y - spec.size * 0.8));
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}
