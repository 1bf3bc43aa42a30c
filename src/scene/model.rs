use crate::foundation::core::{Point, Rgba8, Viewport};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCap {
    Butt,
    Square,
    Round,
}

impl LineCap {
    pub fn as_svg(self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Square => "square",
            Self::Round => "round",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stroke {
    pub color: Rgba8,
    pub width: f64,
    pub cap: LineCap,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    Start,
    Middle,
}

impl TextAnchor {
    pub fn as_svg(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
        }
    }
}

/// A math formula handed to a typesetter.
///
/// `tex` is the source for a real math typesetter; `plain` is a readable fallback.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Formula {
    pub tex: String,
    pub plain: String,
}

impl Formula {
    pub fn new(tex: impl Into<String>, plain: impl Into<String>) -> Self {
        Self {
            tex: tex.into(),
            plain: plain.into(),
        }
    }
}

/// One drawing primitive in canvas pixel coordinates (y down).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Primitive {
    /// Circular arc from `start_angle` to `end_angle` (radians, clockwise on screen).
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        stroke: Stroke,
    },
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    /// Closed filled polygon (arrowheads).
    Polygon { points: Vec<Point>, fill: Rgba8 },
    Disc {
        center: Point,
        radius: f64,
        fill: Rgba8,
    },
    Text {
        pos: Point,
        text: String,
        size: f64,
        color: Rgba8,
        anchor: TextAnchor,
    },
    /// Placed formula; drawn only when a typesetter is available.
    Formula {
        pos: Point,
        formula: Formula,
        size: f64,
        color: Rgba8,
    },
}

/// Ordered drawing of one frame. Later primitives are drawn on top.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    pub viewport: Viewport,
    pub background: Rgba8,
    pub font_family: String,
    pub primitives: Vec<Primitive>,
}

impl Scene {
    pub fn new(viewport: Viewport, background: Rgba8, font_family: impl Into<String>) -> Self {
        Self {
            viewport,
            background,
            font_family: font_family.into(),
            primitives: Vec::new(),
        }
    }

    pub fn push(&mut self, p: Primitive) {
        self.primitives.push(p);
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn formulas(&self) -> impl Iterator<Item = &Formula> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Formula { formula, .. } => Some(formula),
            _ => None,
        })
    }
}
