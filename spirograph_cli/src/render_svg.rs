//! SVG file renderer: accumulates one polyline path per color run and writes the
//! document on save.

use std::io;
use std::path::Path as FilePath;

use svg::node::element::{path::Data, Path, Rectangle, Title};
use svg::Document;

use spirograph::core::math::Vector2;
use spirograph::render::{PenColor, Renderer};

const VIEW_MARGIN: f64 = 10.0;

/// Renderer backing the draw session with an in-memory SVG document.
///
/// Pen moves and color changes split the stroke into subpaths; nothing touches the
/// filesystem until [SvgRenderer::save].
pub struct SvgRenderer {
    stroke_width: f64,
    stroke_color: String,
    background: Option<String>,
    title: Option<String>,
    position: Option<(f64, f64)>,
    pending: Option<Data>,
    pending_segments: usize,
    paths: Vec<Path>,
    bounds: Option<(f64, f64, f64, f64)>,
}

impl SvgRenderer {
    pub fn new() -> Self {
        SvgRenderer {
            stroke_width: 1.0,
            stroke_color: "black".to_string(),
            background: None,
            title: None,
            position: None,
            pending: None,
            pending_segments: 0,
            paths: Vec::new(),
            bounds: None,
        }
    }

    /// Write the accumulated document to `path`.
    pub fn save(&mut self, path: impl AsRef<FilePath>) -> io::Result<()> {
        self.flush();

        let (min_x, min_y, max_x, max_y) = self.bounds.unwrap_or((0.0, 0.0, 1.0, 1.0));
        let view_box = (
            min_x - VIEW_MARGIN,
            min_y - VIEW_MARGIN,
            (max_x - min_x) + 2.0 * VIEW_MARGIN,
            (max_y - min_y) + 2.0 * VIEW_MARGIN,
        );

        let mut document = Document::new().set("viewBox", view_box);
        if let Some(title) = &self.title {
            document = document.add(Title::new(title.clone()));
        }
        if let Some(background) = &self.background {
            document = document.add(
                Rectangle::new()
                    .set("x", view_box.0)
                    .set("y", view_box.1)
                    .set("width", view_box.2)
                    .set("height", view_box.3)
                    .set("fill", background.clone()),
            );
        }
        for path in &self.paths {
            document = document.add(path.clone());
        }

        svg::save(path, &document)
    }

    /// Close the in-progress subpath and keep it when it drew at least one segment.
    fn flush(&mut self) {
        let data = self.pending.take();
        if self.pending_segments > 0 {
            if let Some(data) = data {
                self.paths.push(
                    Path::new()
                        .set("fill", "none")
                        .set("stroke", self.stroke_color.clone())
                        .set("stroke-width", self.stroke_width)
                        .set("d", data),
                );
            }
        }
        self.pending_segments = 0;
    }

    fn include(&mut self, x: f64, y: f64) {
        self.bounds = Some(match self.bounds {
            Some((min_x, min_y, max_x, max_y)) => {
                (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
            }
            None => (x, y, x, y),
        });
    }

    // trace coordinates grow upward, SVG grows downward
    fn to_svg(point: Vector2<f64>) -> (f64, f64) {
        (point.x, -point.y)
    }
}

fn css_color(color: &PenColor) -> String {
    match color {
        PenColor::Named(name) => name.clone(),
        PenColor::Rgb(r, g, b) => {
            let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
            format!("rgb({},{},{})", channel(*r), channel(*g), channel(*b))
        }
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        SvgRenderer::new()
    }
}

impl Renderer for SvgRenderer {
    fn set_background(&mut self, color: &PenColor) {
        self.background = Some(css_color(color));
    }

    fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    fn set_color(&mut self, color: &PenColor) {
        self.flush();
        self.stroke_color = css_color(color);
    }

    fn move_to(&mut self, point: Vector2<f64>) {
        let (x, y) = Self::to_svg(point);
        self.flush();
        self.pending = Some(Data::new().move_to((x, y)));
        self.position = Some((x, y));
        self.include(x, y);
    }

    fn line_to(&mut self, point: Vector2<f64>) {
        let (x, y) = Self::to_svg(point);
        let data = match self.pending.take() {
            Some(data) => data,
            None => Data::new().move_to(self.position.unwrap_or((x, y))),
        };
        self.pending = Some(data.line_to((x, y)));
        self.pending_segments += 1;
        self.position = Some((x, y));
        self.include(x, y);
    }

    fn hide_cursor(&mut self) {
        // nothing to hide in a static document
    }

    fn reset(&mut self) {
        *self = SvgRenderer::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spirograph::core::math::vec2;

    #[test]
    fn color_runs_split_paths() {
        let mut renderer = SvgRenderer::new();
        renderer.move_to(vec2(0.0, 0.0));
        renderer.line_to(vec2(1.0, 1.0));
        renderer.set_color(&PenColor::Rgb(1.0, 0.0, 0.0));
        renderer.line_to(vec2(2.0, 0.0));
        renderer.flush();

        assert_eq!(renderer.paths.len(), 2);
    }

    #[test]
    fn move_without_segments_produces_no_path() {
        let mut renderer = SvgRenderer::new();
        renderer.move_to(vec2(5.0, 5.0));
        renderer.flush();

        assert!(renderer.paths.is_empty());
    }

    #[test]
    fn rgb_colors_map_to_css() {
        assert_eq!(css_color(&PenColor::Rgb(1.0, 0.5, 0.0)), "rgb(255,128,0)");
        assert_eq!(css_color(&PenColor::named("teal")), "teal");
    }
}
