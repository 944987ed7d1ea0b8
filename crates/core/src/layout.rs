use tracing::debug;

use crate::types::*;

/// Full width of the decorative arc between neighbouring bases.
const CONNECTOR_WIDTH: f64 = 0.75;
/// Full height of the decorative arc; small enough to read as a flat backbone.
const CONNECTOR_HEIGHT: f64 = 0.01;
/// Label offsets, as fractions of the sequence length.
const LABEL_DX: f64 = 0.005;
const LABEL_DY: f64 = 0.1;
/// Relative padding applied to a zero-width axis range.
const SINGULAR_PAD: f64 = 0.05;

/// Lay out a structure as an arc diagram.
///
/// Base `i` sits at `(i, 0)`. Pairing arcs span the upper half-plane and the
/// y range grows with the sequence so arc heights stay in proportion. An empty
/// sequence gets a small non-zero y range instead of a collapsed one.
pub fn layout(structure: &Structure, title: &str) -> Scene {
    let n = structure.len() as f64;

    let connectors = (1..structure.len())
        .map(|i| Arc {
            x: i as f64 - 0.5,
            y: 0.0,
            width: CONNECTOR_WIDTH,
            height: CONNECTOR_HEIGHT,
            theta1: 180.0,
            theta2: 360.0,
            color: Color::Black,
            style: LineStyle::Solid,
        })
        .collect();

    let markers = structure
        .bases
        .iter()
        .enumerate()
        .map(|(i, b)| Marker {
            x: i as f64,
            y: 0.0,
            fill: b.color(),
            outline: None,
        })
        .collect();

    let labels = structure
        .bases
        .iter()
        .enumerate()
        .map(|(i, b)| Label {
            text: b.as_char().to_string(),
            x: i as f64 - n * LABEL_DX,
            y: -n * LABEL_DY,
        })
        .collect();

    let pair_arcs = structure.pairs.iter().map(pair_arc).collect();

    let pair_markers = structure
        .pairs
        .iter()
        .flat_map(|p| {
            [(p.index1, p.base1), (p.index2, p.base2)].map(|(i, b)| Marker {
                x: i as f64,
                y: 0.0,
                fill: b.color(),
                outline: Some(Color::Black),
            })
        })
        .collect();

    let scene = Scene {
        title: title.to_string(),
        x_range: nonsingular(-1.0, n),
        y_range: nonsingular(-n / 2.0, n / 2.0),
        connectors,
        markers,
        labels,
        pair_arcs,
        pair_markers,
    };
    debug!(
        markers = scene.markers.len(),
        connectors = scene.connectors.len(),
        pair_arcs = scene.pair_arcs.len(),
        "laid out scene"
    );
    scene
}

fn nonsingular(lo: f64, hi: f64) -> (f64, f64) {
    if hi - lo > f64::EPSILON {
        return (lo, hi);
    }
    let pad = match lo.abs().max(hi.abs()) {
        m if m == 0.0 => SINGULAR_PAD,
        m => m * SINGULAR_PAD,
    };
    (lo - pad, hi + pad)
}

/// Dashed upper half-ellipse joining the two ends of a pair.
fn pair_arc(p: &Pair) -> Arc {
    let (i, j) = (p.index1 as f64, p.index2 as f64);
    let span = j - i;
    Arc {
        x: (i + j) / 2.0,
        y: 0.0,
        width: span,
        height: span / 2.0,
        theta1: 0.0,
        theta2: 180.0,
        color: Color::Red,
        style: LineStyle::Dashed,
    }
}

impl Arc {
    /// Sample `samples` points (at least 2) along the arc from `theta1` to `theta2`.
    pub fn points(&self, samples: usize) -> Vec<(f64, f64)> {
        let samples = samples.max(2);
        let rx = self.width / 2.0;
        let ry = self.height / 2.0;
        let t1 = self.theta1.to_radians();
        let t2 = self.theta2.to_radians();
        let step = (t2 - t1) / (samples - 1) as f64;
        (0..samples)
            .map(|k| {
                let t = t1 + step * k as f64;
                (self.x + rx * t.cos(), self.y + ry * t.sin())
            })
            .collect()
    }
}
