// File: crates/meridian-render-skia/src/lib.rs
// Summary: Skia CPU raster backend: paints chart surfaces to PNG/RGBA and provides the PNG exporter.

pub mod text;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use skia_safe as skia;

use meridian_core::export::{with_extension, ImageExporter};
use meridian_core::scene::{arc_polygon, Element, Shape, Surface};
use meridian_core::theme::Color;
use meridian_core::{Chart, ChartResult};

use text::{TextShaper, TextSpec};

/// Paints `Surface` scenes with Skia's CPU rasterizer.
pub struct SkiaRasterizer {
    shaper: TextShaper,
    /// Skip text (stable pixels across font setups).
    pub draw_text: bool,
}

impl SkiaRasterizer {
    pub fn new() -> Self { Self { shaper: TextShaper::new(), draw_text: true } }

    pub fn without_text() -> Self { Self { draw_text: false, ..Self::new() } }

    /// Render to an encoded PNG in memory.
    pub fn render_to_png_bytes(&self, scene: &Surface) -> Result<Vec<u8>> {
        let (w, h) = dimensions(scene);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.paint(surface.canvas(), scene);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn render_to_png(&self, scene: &Surface, output_png_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(scene)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    /// Render to unpremultiplied RGBA8: (pixels, width, height, row stride).
    pub fn render_to_rgba8(&self, scene: &Surface) -> Result<(Vec<u8>, i32, i32, usize)> {
        let (w, h) = dimensions(scene);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let mut surface =
            skia::surfaces::raster(&info, None, None).ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.paint(surface.canvas(), scene);

        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading back raster pixels failed");
        }
        Ok((pixels, w, h, stride))
    }

    fn paint(&self, canvas: &skia::Canvas, scene: &Surface) {
        canvas.clear(to_skia(scene.background.unwrap_or(Color::WHITE), 1.0));
        for (_, layer) in scene.layers() {
            canvas.save();
            canvas.translate((layer.offset.0 as f32, layer.offset.1 as f32));
            for e in layer.elements.iter().filter(|e| e.visible) {
                let clip = layer.clip.filter(|_| e.clip);
                if let Some(c) = clip {
                    canvas.save();
                    canvas.clip_rect(
                        skia::Rect::from_ltrb(c.left as f32, c.top as f32, c.right as f32, c.bottom as f32),
                        None,
                        Some(true),
                    );
                }
                self.draw_element(canvas, e);
                if clip.is_some() {
                    canvas.restore();
                }
            }
            canvas.restore();
        }
    }

    fn draw_element(&self, canvas: &skia::Canvas, e: &Element) {
        let s = &e.style;
        let fill = s.fill.map(|c| fill_paint(c, s.opacity * s.fill_opacity));
        let stroke = s.stroke.map(|c| stroke_paint(c, s.opacity, s.stroke_width));
        match &e.shape {
            Shape::Path { points, closed } => {
                let path = polyline(points, *closed);
                if *closed {
                    if let Some(p) = &fill { canvas.draw_path(&path, p); }
                }
                if let Some(p) = &stroke { canvas.draw_path(&path, p); }
            }
            Shape::Circle { cx, cy, r } => {
                for p in fill.iter().chain(stroke.iter()) {
                    canvas.draw_circle((*cx as f32, *cy as f32), *r as f32, p);
                }
            }
            Shape::Rect { x, y, width, height, rx } => {
                let rect = skia::Rect::from_xywh(*x as f32, *y as f32, *width as f32, *height as f32);
                for p in fill.iter().chain(stroke.iter()) {
                    canvas.draw_round_rect(rect, *rx as f32, *rx as f32, p);
                }
            }
            Shape::Line { x1, y1, x2, y2 } => {
                if let Some(p) = &stroke {
                    canvas.draw_line((*x1 as f32, *y1 as f32), (*x2 as f32, *y2 as f32), p);
                }
            }
            Shape::Text { x, y, text, anchor, rotate } => {
                if !self.draw_text {
                    return;
                }
                let spec = TextSpec {
                    size: s.font_size as f32,
                    weight: s.font_weight,
                    family: s.font_family.as_deref(),
                    color: to_skia(s.fill.unwrap_or(Color::BLACK), s.opacity),
                };
                canvas.save();
                canvas.translate((*x as f32, *y as f32));
                if *rotate != 0.0 {
                    canvas.rotate(*rotate as f32, None);
                }
                self.shaper.draw(canvas, text, 0.0, 0.0, *anchor, &spec);
                canvas.restore();
            }
            Shape::Arc { cx, cy, inner, outer, start, end } => {
                let path = polyline(&arc_polygon(*cx, *cy, *inner, *outer, *start, *end), true);
                for p in fill.iter().chain(stroke.iter()) {
                    canvas.draw_path(&path, p);
                }
            }
        }
    }
}

impl Default for SkiaRasterizer {
    fn default() -> Self { Self::new() }
}

/// Writes PNG files into a directory.
pub struct PngExporter {
    pub dir: PathBuf,
    rasterizer: SkiaRasterizer,
}

impl PngExporter {
    pub fn new(dir: impl AsRef<Path>) -> Self { Self { dir: dir.as_ref().to_path_buf(), rasterizer: SkiaRasterizer::new() } }
}

impl ImageExporter for PngExporter {
    fn export(&self, surface: &Surface, filename: &str) -> Result<PathBuf> {
        let path = self.dir.join(with_extension(filename, "png"));
        self.rasterizer.render_to_png(surface, &path)?;
        tracing::debug!(path = %path.display(), "png written");
        Ok(path)
    }
}

/// Install a PNG exporter writing into `dir` and export the chart as `filename`.png.
pub fn export_to_image(chart: &mut Chart, dir: impl AsRef<Path>, filename: &str) -> ChartResult<PathBuf> {
    chart.set_exporter(PngExporter::new(dir));
    chart.export(filename)
}

// ---- helpers ----

fn dimensions(scene: &Surface) -> (i32, i32) {
    ((scene.width.round() as i32).max(1), (scene.height.round() as i32).max(1))
}

fn to_skia(c: Color, opacity: f64) -> skia::Color {
    let a = (c.a as f64 * opacity.clamp(0.0, 1.0)).round() as u8;
    skia::Color::from_argb(a, c.r, c.g, c.b)
}

fn fill_paint(c: Color, opacity: f64) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(to_skia(c, opacity));
    paint
}

fn stroke_paint(c: Color, opacity: f64, width: f64) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width as f32);
    paint.set_color(to_skia(c, opacity));
    paint
}

fn polyline(points: &[(f64, f64)], closed: bool) -> skia::Path {
    let mut path = skia::Path::new();
    if let Some((x0, y0)) = points.first() {
        path.move_to((*x0 as f32, *y0 as f32));
        for (x, y) in points.iter().skip(1) {
            path.line_to((*x as f32, *y as f32));
        }
        if closed {
            path.close();
        }
    }
    path
}
