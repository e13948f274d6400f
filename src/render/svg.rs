//! SVG vector backend.

use std::fmt::Write;

use tracing::debug;

use crate::constants::VECTOR_WIDTH_SCALE;
use crate::curve::CurveSegment;
use crate::point::Point;
use crate::types::StyleOptions;

use super::StrokeBackend;

/// Accumulates directives as SVG elements and serializes them into a
/// standalone document.
///
/// Curves become one cubic path command each, stroked at
/// `end_width * VECTOR_WIDTH_SCALE` with round caps; dots become
/// filled circles. Segments with non-finite control coordinates are
/// omitted entirely.
pub struct SvgBackend {
    width: u32,
    height: u32,
    elements: Vec<String>,
}

impl SvgBackend {
    /// Create a backend for a document of the given pixel dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            elements: Vec::new(),
        }
    }

    /// Number of elements emitted so far.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Serialize the accumulated elements into an SVG document string.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" \
             width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
            w = self.width,
            h = self.height,
        );
        for element in &self.elements {
            out.push_str(element);
        }
        out.push_str("</svg>");
        out
    }
}

/// Format straight RGBA as a CSS color: hex when fully opaque,
/// `rgba()` otherwise.
fn css_color(color: [f32; 4]) -> String {
    let r = (color[0].clamp(0.0, 1.0) * 255.0).round() as u8;
    let g = (color[1].clamp(0.0, 1.0) * 255.0).round() as u8;
    let b = (color[2].clamp(0.0, 1.0) * 255.0).round() as u8;
    let a = color[3].clamp(0.0, 1.0);
    if (a - 1.0).abs() < f32::EPSILON {
        format!("#{r:02x}{g:02x}{b:02x}")
    } else {
        format!("rgba({r},{g},{b},{a})")
    }
}

impl StrokeBackend for SvgBackend {
    fn draw_dot(&mut self, point: &Point, style: &StyleOptions) {
        self.elements.push(format!(
            "<circle r=\"{r}\" cx=\"{cx}\" cy=\"{cy}\" fill=\"{color}\"/>",
            r = style.dot_radius(),
            cx = point.x,
            cy = point.y,
            color = css_color(style.pen_color),
        ));
    }

    fn draw_curve(&mut self, segment: &CurveSegment, style: &StyleOptions) {
        if !segment.is_finite() {
            debug!("draw_curve: omitting segment with non-finite control point");
            return;
        }
        self.elements.push(format!(
            "<path d=\"M {sx},{sy} C {c1x},{c1y} {c2x},{c2y} {ex},{ey}\" \
             stroke-width=\"{w:.3}\" stroke=\"{color}\" fill=\"none\" \
             stroke-linecap=\"round\"/>",
            sx = segment.start.x,
            sy = segment.start.y,
            c1x = segment.control1.x,
            c1y = segment.control1.y,
            c2x = segment.control2.x,
            c2y = segment.control2.y,
            ex = segment.end.x,
            ey = segment.end.y,
            w = segment.end_width * VECTOR_WIDTH_SCALE,
            color = css_color(style.pen_color),
        ));
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;

    fn segment() -> CurveSegment {
        CurveSegment {
            start: Vec2::new(0.0, 0.0),
            control1: Vec2::new(5.0, 5.0),
            control2: Vec2::new(10.0, 5.0),
            end: Vec2::new(15.0, 0.0),
            start_width: 1.0,
            end_width: 2.0,
        }
    }

    #[test]
    fn test_curve_emits_scaled_stroke_width() {
        let mut backend = SvgBackend::new(100, 100);
        backend.draw_curve(&segment(), &StyleOptions::default());

        let svg = backend.to_svg();
        // end_width 2.0 * 2.25 = 4.5
        assert!(svg.contains("stroke-width=\"4.500\""));
        assert!(svg.contains("M 0,0 C 5,5 10,5 15,0"));
        assert!(svg.contains("stroke=\"#000000\""));
    }

    #[test]
    fn test_dot_emits_circle() {
        let mut backend = SvgBackend::new(100, 100);
        let style = StyleOptions {
            dot_size: 0.0,
            min_width: 0.5,
            max_width: 2.5,
            ..Default::default()
        };
        backend.draw_dot(&Point::new(10.0, 20.0, 1.0, 0), &style);

        let svg = backend.to_svg();
        // dot_size 0 falls back to the midpoint width
        assert!(svg.contains("<circle r=\"1.5\" cx=\"10\" cy=\"20\""));
    }

    #[test]
    fn test_non_finite_segment_omitted() {
        let mut backend = SvgBackend::new(100, 100);
        let mut bad = segment();
        bad.control2.x = f32::INFINITY;
        backend.draw_curve(&bad, &StyleOptions::default());
        assert_eq!(backend.element_count(), 0);

        // Later segments still render
        backend.draw_curve(&segment(), &StyleOptions::default());
        assert_eq!(backend.element_count(), 1);
    }

    #[test]
    fn test_document_shape() {
        let backend = SvgBackend::new(300, 150);
        let svg = backend.to_svg();
        assert!(svg.starts_with("<svg "));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("viewBox=\"0 0 300 150\""));
    }

    #[test]
    fn test_translucent_color_formats_as_rgba() {
        assert_eq!(css_color([1.0, 0.0, 0.0, 1.0]), "#ff0000");
        assert_eq!(css_color([0.0, 0.0, 0.0, 0.5]), "rgba(0,0,0,0.5)");
    }
}
