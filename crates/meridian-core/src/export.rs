// File: crates/meridian-core/src/export.rs
// Summary: Export preparation (style sheet, control removal) and the image exporter seam.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::scene::{LayerKind, Surface};
use crate::svg;
use crate::theme::Theme;

/// Turns a prepared surface into an image file; returns the written path.
pub trait ImageExporter {
    fn export(&self, surface: &Surface, filename: &str) -> anyhow::Result<PathBuf>;
}

/// `filename` with `.ext` appended unless it already ends with it.
pub fn with_extension(filename: &str, ext: &str) -> String {
    let suffix = format!(".{ext}");
    if filename.to_ascii_lowercase().ends_with(&suffix) { filename.to_string() } else { format!("{filename}{suffix}") }
}

/// Copy of `surface` ready for export: control glyphs and the selection overlay removed,
/// the theme's background, fonts and axis/selector strokes applied.
pub fn prepare(surface: &Surface, theme: &Theme) -> Surface {
    let mut out = surface.clone();
    out.remove_layer(LayerKind::Glyphs);
    out.clear(LayerKind::Overlay);
    out.background = theme.background;
    for kind in [LayerKind::Plot, LayerKind::Annotations, LayerKind::Legend] {
        let Some(layer) = out.layer_mut(kind) else { continue };
        for e in &mut layer.elements {
            if e.is_text() {
                e.style.font_size = theme.font_size;
                e.style.font_weight = theme.font_weight;
                e.style.font_family = Some(theme.font_family.to_string());
                continue;
            }
            if e.has_class("axis") {
                e.style.stroke = Some(theme.axis_stroke);
                e.style.fill = None;
                if e.has_class("tick") {
                    e.style.opacity = theme.tick_opacity;
                }
            }
            if e.has_class("selector") {
                e.style.stroke = theme.selector_stroke.or(e.style.stroke);
                e.style.stroke_width = theme.selector_stroke_width;
            }
            if e.has_class("xtick") || e.has_class("ytick") {
                e.style.stroke_width = theme.density_tick_width;
            }
        }
    }
    out
}

/// Writes SVG documents into a directory.
#[derive(Clone, Debug)]
pub struct SvgExporter {
    pub dir: PathBuf,
}

impl SvgExporter {
    pub fn new(dir: impl AsRef<Path>) -> Self { Self { dir: dir.as_ref().to_path_buf() } }
}

impl ImageExporter for SvgExporter {
    fn export(&self, surface: &Surface, filename: &str) -> anyhow::Result<PathBuf> {
        let path = self.dir.join(with_extension(filename, "svg"));
        std::fs::write(&path, svg::to_svg(surface)).with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}
