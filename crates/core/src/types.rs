use serde::Serialize;

/// A nucleotide in an RNA sequence.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Base {
    A,
    C,
    G,
    U,
}

impl Base {
    pub const ALL: [Base; 4] = [Base::A, Base::C, Base::G, Base::U];

    /// Look up a base by its letter. Only upper-case `A`, `C`, `G`, `U` are recognized.
    pub fn from_char(ch: char) -> Option<Base> {
        match ch {
            'A' => Some(Base::A),
            'C' => Some(Base::C),
            'G' => Some(Base::G),
            'U' => Some(Base::U),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Base::A => 'A',
            Base::C => 'C',
            Base::G => 'G',
            Base::U => 'U',
        }
    }

    /// Fixed display color: A=red, C=blue, G=orange, U=green.
    pub fn color(self) -> Color {
        match self {
            Base::A => Color::Red,
            Base::C => Color::Blue,
            Base::G => Color::Orange,
            Base::U => Color::Green,
        }
    }
}

/// Named colors used in a figure.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Orange,
    Green,
    Black,
}

impl Color {
    /// RGB triple matching the CSS color of the same name.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Red => (255, 0, 0),
            Color::Blue => (0, 0, 255),
            Color::Orange => (255, 165, 0),
            Color::Green => (0, 128, 0),
            Color::Black => (0, 0, 0),
        }
    }
}

/// A declared base pairing. Indices and bases are taken as written;
/// they are not checked against the sequence, and may be negative.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pair {
    pub index1: i64,
    pub index2: i64,
    pub base1: Base,
    pub base2: Base,
}

/// Parsed input: the sequence and its declared pairs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Structure {
    /// Sequence text exactly as read (line terminator stripped). Used to name output files.
    pub raw: String,
    pub bases: Vec<Base>,
    pub pairs: Vec<Pair>,
}

impl Structure {
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }
}

/// Stroke pattern of an arc
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    Solid,
    Dashed,
}

/// Elliptical arc in data coordinates.
///
/// `width` and `height` are the full axes of the ellipse; `theta1` to `theta2`
/// is the swept range in degrees, counter-clockwise from the positive x axis.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Arc {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub theta1: f64,
    pub theta2: f64,
    pub color: Color,
    pub style: LineStyle,
}

/// Base marker
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Marker {
    pub x: f64,
    pub y: f64,
    pub fill: Color,
    /// Outline color; `None` draws the fill only.
    pub outline: Option<Color>,
}

/// Text placed at a data coordinate (left/baseline anchored)
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Backend-independent description of one arc diagram, fields in paint order.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Scene {
    pub title: String,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    /// Decorative backbone arcs between consecutive bases.
    pub connectors: Vec<Arc>,
    /// One marker per base, in sequence order.
    pub markers: Vec<Marker>,
    pub labels: Vec<Label>,
    /// One dashed arc per declared pair.
    pub pair_arcs: Vec<Arc>,
    /// Outlined markers re-drawn over both ends of every pair.
    pub pair_markers: Vec<Marker>,
}
