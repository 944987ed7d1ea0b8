use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::element::DashedPathElement;
use plotters::prelude::{
    ChartBuilder, Circle, DrawingArea, DrawingBackend, IntoFont, PathElement, RGBColor, Text,
    TextStyle,
};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::Color as _;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::types::*;

pub const DEFAULT_TITLE: &str = "Secondary Structure for RNA Sequence";

/// Axes box as fractions of the figure: left, right, bottom, top.
const AXES_BOX: (f64, f64, f64, f64) = (0.125, 0.9, 0.11, 0.88);

/// Options controlling figure size and appearance.
///
/// Lengths are in typographic points (1/72 inch) and scale with `dpi`,
/// so the same figure renders identically at any resolution.
/// Defaults reproduce a 6.4 × 4.8 inch figure saved at 600 dpi.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PlotOptions {
    /// Pixels per inch (default: 600)
    pub dpi: f64,
    /// Figure width in inches (default: 6.4)
    pub fig_width: f64,
    /// Figure height in inches (default: 4.8)
    pub fig_height: f64,
    /// Base marker radius (default: 3.0)
    pub marker_radius: f64,
    /// Outline width of paired-base markers (default: 1.5)
    pub outline_width: f64,
    /// Arc stroke width (default: 1.0)
    pub line_width: f64,
    /// Dash and gap lengths of pairing arcs, in multiples of `line_width` (default: 3.7, 1.6)
    pub dash: (f64, f64),
    /// Base label font size (default: 10.0)
    pub label_font_size: f64,
    /// Title font size (default: 12.0)
    pub title_font_size: f64,
    /// Points sampled along each arc (default: 64)
    pub arc_samples: usize,
    /// Whether to draw base letters under the markers (default: true)
    pub show_labels: bool,
    /// Whether to draw a nucleotide color legend (default: false)
    pub legend: bool,
    /// Figure title; empty draws none (default: "Secondary Structure for RNA Sequence")
    pub title: String,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            dpi: 600.0,
            fig_width: 6.4,
            fig_height: 4.8,
            marker_radius: 3.0,
            outline_width: 1.5,
            line_width: 1.0,
            dash: (3.7, 1.6),
            label_font_size: 10.0,
            title_font_size: 12.0,
            arc_samples: 64,
            show_labels: true,
            legend: false,
            title: DEFAULT_TITLE.into(),
        }
    }
}

impl PlotOptions {
    /// Figure size in pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            (self.fig_width * self.dpi).round().max(1.0) as u32,
            (self.fig_height * self.dpi).round().max(1.0) as u32,
        )
    }

    /// Convert a length in points to pixels.
    pub fn px(&self, pt: f64) -> f64 {
        pt * self.dpi / 72.0
    }

    fn stroke(&self, pt: f64) -> u32 {
        self.px(pt).round().max(1.0) as u32
    }
}

fn rgb(c: Color) -> RGBColor {
    let (r, g, b) = c.rgb();
    RGBColor(r, g, b)
}

fn render_err<E: std::error::Error + Send + Sync>(e: DrawingAreaErrorKind<E>) -> Error {
    Error::Render(e.to_string())
}

/// Paint a scene onto a drawing area.
///
/// Layer order (back → front): connectors, base markers, labels, pairing arcs,
/// paired-base markers, title, legend. The caller presents the area.
pub fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    scene: &Scene,
    opts: &PlotOptions,
) -> Result<()> {
    root.fill(&RGBColor(255, 255, 255)).map_err(render_err)?;

    let (w, h) = root.dim_in_pixel();
    let (left, right, bottom, top) = AXES_BOX;
    let margin_top = ((1.0 - top) * h as f64).round() as u32;
    let margin_bottom = (bottom * h as f64).round() as u32;
    let margin_left = (left * w as f64).round() as u32;
    let margin_right = ((1.0 - right) * w as f64).round() as u32;
    let plot_area = root.margin(margin_top, margin_bottom, margin_left, margin_right);

    let (x0, x1) = scene.x_range;
    let (y0, y1) = scene.y_range;
    let mut chart = ChartBuilder::on(&plot_area)
        .build_cartesian_2d(x0..x1, y0..y1)
        .map_err(render_err)?;

    let samples = opts.arc_samples;
    let line_width = opts.stroke(opts.line_width);
    let marker_radius = opts.px(opts.marker_radius).round().max(1.0) as u32;

    chart
        .draw_series(scene.connectors.iter().map(|a| {
            PathElement::new(a.points(samples), rgb(a.color).stroke_width(line_width))
        }))
        .map_err(render_err)?;

    chart
        .draw_series(
            scene
                .markers
                .iter()
                .map(|m| Circle::new((m.x, m.y), marker_radius, rgb(m.fill).filled())),
        )
        .map_err(render_err)?;

    if opts.show_labels {
        let style = text_style(opts.px(opts.label_font_size), HPos::Left, VPos::Bottom);
        chart
            .draw_series(
                scene
                    .labels
                    .iter()
                    .map(|l| Text::new(l.text.clone(), (l.x, l.y), style.clone())),
            )
            .map_err(render_err)?;
    }

    let (dash_on, dash_off) = opts.dash;
    let dash_on = opts.stroke(dash_on * opts.line_width);
    let dash_off = opts.stroke(dash_off * opts.line_width);
    for arc in &scene.pair_arcs {
        let style = rgb(arc.color).stroke_width(line_width);
        let points = arc.points(samples);
        match arc.style {
            LineStyle::Solid => {
                chart
                    .draw_series([PathElement::new(points, style)])
                    .map_err(render_err)?;
            }
            LineStyle::Dashed => {
                chart
                    .draw_series([DashedPathElement::new(points, dash_on, dash_off, style)])
                    .map_err(render_err)?;
            }
        }
    }

    let outline_width = opts.stroke(opts.outline_width);
    for m in &scene.pair_markers {
        let mut shapes = vec![Circle::new((m.x, m.y), marker_radius, rgb(m.fill).filled())];
        if let Some(outline) = m.outline {
            shapes.push(Circle::new(
                (m.x, m.y),
                marker_radius,
                rgb(outline).stroke_width(outline_width),
            ));
        }
        chart.draw_series(shapes).map_err(render_err)?;
    }

    if !scene.title.is_empty() {
        let style = text_style(opts.px(opts.title_font_size), HPos::Center, VPos::Center);
        let pos = ((w / 2) as i32, (margin_top / 2) as i32);
        root.draw(&Text::new(scene.title.clone(), pos, style))
            .map_err(render_err)?;
    }

    if opts.legend {
        draw_legend(&plot_area, opts)?;
    }

    Ok(())
}

fn text_style(size: f64, h: HPos, v: VPos) -> TextStyle<'static> {
    ("sans-serif", size)
        .into_font()
        .color(&rgb(Color::Black))
        .pos(Pos::new(h, v))
}

/// Nucleotide color legend in the top-right corner of the plot area.
fn draw_legend<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    opts: &PlotOptions,
) -> Result<()> {
    let (w, _) = area.dim_in_pixel();
    let r = opts.px(opts.marker_radius).round().max(1.0) as i32;
    let font = opts.px(opts.label_font_size);
    let row = (font * 1.4).round() as i32;
    let pad = row / 2;
    let x = w as i32 - (font * 2.5).round() as i32;
    let style = text_style(font, HPos::Left, VPos::Center);

    for (k, base) in Base::ALL.iter().enumerate() {
        let y = pad + row * k as i32;
        area.draw(&Circle::new((x, y), r, rgb(base.color()).filled()))
            .map_err(render_err)?;
        area.draw(&Text::new(
            base.as_char().to_string(),
            (x + 2 * r, y),
            style.clone(),
        ))
        .map_err(render_err)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pixel_size() {
        let opts = PlotOptions::default();
        assert_eq!(opts.pixel_size(), (3840, 2880));
        assert!((opts.px(72.0) - 600.0).abs() < 1e-9);
    }

    #[test]
    fn test_style_defaults() {
        let opts = PlotOptions::default();
        assert_eq!(opts.dash, (3.7, 1.6));
        assert_eq!(opts.label_font_size, 10.0);
        assert_eq!(opts.title_font_size, 12.0);
        assert_eq!(opts.title, "Secondary Structure for RNA Sequence");

        let opts: PlotOptions = serde_json::from_str(r#"{"dash": [2.0, 1.0]}"#).unwrap();
        assert_eq!(opts.dash, (2.0, 1.0));
        assert_eq!(opts.line_width, 1.0);
    }

    #[test]
    fn test_options_from_partial_json() {
        let opts: PlotOptions = serde_json::from_str(r#"{"dpi": 100, "legend": true}"#).unwrap();
        assert_eq!(opts.dpi, 100.0);
        assert!(opts.legend);
        assert_eq!(opts.title, DEFAULT_TITLE);
        assert_eq!(opts.pixel_size(), (640, 480));
    }
}
