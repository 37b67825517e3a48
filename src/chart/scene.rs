use crate::color::Rgb;
use crate::config::ChartLayout;
use crate::scale::LinearScale;

/// Horizontal alignment of a label relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

/// Vertical alignment of a label relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Baseline {
    Alphabetic,
    Middle,
    Hanging,
}

/// A piece of text. `(x, y)` is given in the frame rotated by `rotation`
/// degrees (clockwise, about the plot origin), as SVG's `rotate()` does.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub anchor: Anchor,
    pub baseline: Baseline,
    pub size: f64,
    pub rotation: f64,
    pub fill: Rgb,
}

impl Label {
    pub fn new(x: f64, y: f64, text: impl Into<String>, size: f64, fill: Rgb) -> Self {
        Label {
            x,
            y,
            text: text.into(),
            anchor: Anchor::Start,
            baseline: Baseline::Alphabetic,
            size,
            rotation: 0.0,
            fill,
        }
    }

    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn baseline(mut self, baseline: Baseline) -> Self {
        self.baseline = baseline;
        self
    }

    pub fn rotated(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    /// Anchor point in plot coordinates, rotation applied.
    pub fn position(&self) -> (f64, f64) {
        let (sin, cos) = self.rotation.to_radians().sin_cos();
        (self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }
}

/// A single draw command, in plot-area coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Mark {
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        fill: Rgb,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Rgb,
        stroke: Option<Rgb>,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: Rgb,
    },
    Text(Label),
}

/// The continuous axes of a panel, kept to read data values back from a
/// point in the plot area.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Readout {
    pub x: Option<(String, LinearScale)>,
    pub y: Option<(String, LinearScale)>,
}

impl Readout {
    /// Values under the plot-area point `(px, py)`, e.g.
    /// `Petal Length 4.20  Petal Width 1.35`. `None` without any axis.
    pub fn describe(&self, px: f64, py: f64) -> Option<String> {
        let parts: Vec<String> = [(&self.x, px), (&self.y, py)]
            .into_iter()
            .filter_map(|(axis, at)| {
                axis.as_ref()
                    .map(|(name, scale)| format!("{name} {:.2}", scale.invert(at)))
            })
            .collect();
        (!parts.is_empty()).then(|| parts.join("  "))
    }
}

/// One panel: a fixed-size canvas whose plot area starts at `origin`.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Insertion point id in the host document.
    pub mount: String,
    pub width: f64,
    pub height: f64,
    /// Offset of the plot area inside the canvas (the left/top margins).
    pub origin: (f64, f64),
    /// Size of the plot area.
    pub inner: (f64, f64),
    pub marks: Vec<Mark>,
    pub readout: Readout,
}

impl Scene {
    pub fn new(mount: impl Into<String>, layout: &ChartLayout) -> Self {
        Scene {
            mount: mount.into(),
            width: layout.width,
            height: layout.height,
            origin: (layout.margin.left, layout.margin.top),
            inner: (layout.inner_width(), layout.inner_height()),
            marks: Vec::new(),
            readout: Readout::default(),
        }
    }

    pub fn push(&mut self, mark: Mark) {
        self.marks.push(mark);
    }

    pub fn text(&mut self, label: Label) {
        self.marks.push(Mark::Text(label));
    }
}

#[cfg(test)]
impl Scene {
    pub fn circles(&self) -> impl Iterator<Item = &Mark> {
        self.marks.iter().filter(|m| matches!(m, Mark::Circle { .. }))
    }

    pub fn rects(&self) -> impl Iterator<Item = &Mark> {
        self.marks.iter().filter(|m| matches!(m, Mark::Rect { .. }))
    }

    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.marks.iter().filter_map(|m| match m {
            Mark::Text(label) => Some(label),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::color::BLACK;

    #[test]
    fn rotated_label_position() {
        let label = Label::new(-150.0, -35.0, "Petal Width", 14.0, BLACK).rotated(-90.0);
        let (x, y) = label.position();
        assert_abs_diff_eq!(x, -35.0, epsilon = 1e-9);
        assert_abs_diff_eq!(y, 150.0, epsilon = 1e-9);

        let flat = Label::new(3.0, 4.0, "t", 10.0, BLACK);
        assert_eq!(flat.position(), (3.0, 4.0));
    }

    #[test]
    fn readout_inverts_the_axes_it_has() {
        let x = LinearScale::new((1.0, 6.9), (0.0, 500.0));
        let y = LinearScale::new((0.0, 2.5), (300.0, 0.0));

        let both = Readout {
            x: Some(("Petal Length".to_string(), x)),
            y: Some(("Petal Width".to_string(), y)),
        };
        assert_eq!(
            both.describe(0.0, 150.0).as_deref(),
            Some("Petal Length 1.00  Petal Width 1.25")
        );

        let y_only = Readout {
            x: None,
            y: Some(("Petal Length".to_string(), y)),
        };
        assert_eq!(y_only.describe(42.0, 300.0).as_deref(), Some("Petal Length 0.00"));
        assert_eq!(Readout::default().describe(1.0, 1.0), None);
    }
}
