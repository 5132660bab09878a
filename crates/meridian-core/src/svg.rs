// File: crates/meridian-core/src/svg.rs
// Summary: Serializes a surface to a standalone SVG document.

use crate::scene::{arc_polygon, Anchor, Element, Shape, Style, Surface};

pub fn to_svg(surface: &Surface) -> String {
    let mut out = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" id=\"{}\" class=\"{}\" width=\"{}\" height=\"{}\">\n",
        escape(&surface.id),
        escape(&surface.class),
        surface.width,
        surface.height
    );
    if let Some(bg) = surface.background {
        out.push_str(&format!("<rect width=\"100%\" height=\"100%\" fill=\"{bg}\"/>\n"));
    }
    out.push_str("<defs>\n");
    for (kind, layer) in surface.layers() {
        if let Some(c) = layer.clip {
            out.push_str(&format!(
                "<clipPath id=\"clip-{}\"><rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"/></clipPath>\n",
                kind.name(),
                c.left,
                c.top,
                c.width(),
                c.height()
            ));
        }
    }
    out.push_str("</defs>\n");
    for (kind, layer) in surface.layers() {
        out.push_str(&format!(
            "<g class=\"{}\" transform=\"translate({},{})\">\n",
            kind.name(),
            layer.offset.0,
            layer.offset.1
        ));
        for e in &layer.elements {
            let clip = (e.clip && layer.clip.is_some()).then(|| format!("clip-{}", kind.name()));
            out.push_str(&element(e, clip.as_deref()));
            out.push('\n');
        }
        out.push_str("</g>\n");
    }
    out.push_str("</svg>\n");
    out
}

fn element(e: &Element, clip: Option<&str>) -> String {
    let mut attrs = String::new();
    if !e.classes.is_empty() {
        attrs.push_str(&format!(" class=\"{}\"", escape(&e.classes.join(" "))));
    }
    if let Some(id) = &e.id {
        attrs.push_str(&format!(" id=\"{}\"", escape(id)));
    }
    if let Some(c) = clip {
        attrs.push_str(&format!(" clip-path=\"url(#{c})\""));
    }
    attrs.push_str(&style(&e.style, e.is_text()));
    if !e.visible {
        attrs.push_str(" display=\"none\"");
    }
    match &e.shape {
        Shape::Path { points, closed } => format!("<path d=\"{}\"{attrs}/>", path_data(points, *closed)),
        Shape::Circle { cx, cy, r } => format!("<circle cx=\"{cx}\" cy=\"{cy}\" r=\"{r}\"{attrs}/>"),
        Shape::Rect { x, y, width, height, rx } => {
            format!("<rect x=\"{x}\" y=\"{y}\" width=\"{width}\" height=\"{height}\" rx=\"{rx}\"{attrs}/>")
        }
        Shape::Line { x1, y1, x2, y2 } => format!("<line x1=\"{x1}\" y1=\"{y1}\" x2=\"{x2}\" y2=\"{y2}\"{attrs}/>"),
        Shape::Text { x, y, text, anchor, rotate } => {
            let anchor = match anchor {
                Anchor::Start => "start",
                Anchor::Middle => "middle",
                Anchor::End => "end",
            };
            let transform = if *rotate != 0.0 { format!(" transform=\"rotate({rotate} {x} {y})\"") } else { String::new() };
            format!("<text x=\"{x}\" y=\"{y}\" text-anchor=\"{anchor}\"{transform}{attrs}>{}</text>", escape(text))
        }
        Shape::Arc { cx, cy, inner, outer, start, end } => {
            format!("<path d=\"{}\"{attrs}/>", path_data(&arc_polygon(*cx, *cy, *inner, *outer, *start, *end), true))
        }
    }
}

fn style(s: &Style, text: bool) -> String {
    let mut out = String::new();
    match s.fill {
        Some(c) => out.push_str(&format!(" fill=\"{c}\"")),
        None if !text => out.push_str(" fill=\"none\""),
        None => {}
    }
    if s.fill_opacity != 1.0 {
        out.push_str(&format!(" fill-opacity=\"{}\"", s.fill_opacity));
    }
    if let Some(c) = s.stroke {
        out.push_str(&format!(" stroke=\"{c}\" stroke-width=\"{}\"", s.stroke_width));
    }
    if s.opacity != 1.0 {
        out.push_str(&format!(" opacity=\"{}\"", s.opacity));
    }
    if text {
        out.push_str(&format!(" font-size=\"{}\" font-weight=\"{}\"", s.font_size, s.font_weight));
        if let Some(f) = &s.font_family {
            out.push_str(&format!(" font-family=\"{}\"", escape(f)));
        }
    }
    out
}

fn path_data(points: &[(f64, f64)], closed: bool) -> String {
    let mut d = String::new();
    for (i, (x, y)) in points.iter().enumerate() {
        d.push_str(&format!("{}{x},{y}", if i == 0 { "M" } else { "L" }));
    }
    if closed && !points.is_empty() {
        d.push('Z');
    }
    d
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;").replace('"', "&quot;")
}
