use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::chart::scene::{Anchor, Baseline, Label, Mark, Scene};
use crate::color::Rgb;

type Canvas<'a> = DrawingArea<SVGBackend<'a>, Shift>;

/// Serialize a scene as a standalone `<svg>` element.
///
/// The backend works in whole pixels, so every position is rounded.
pub fn render_svg(scene: &Scene) -> Result<String> {
    let mut svg = String::new();
    {
        let size = (scene.width.round() as u32, scene.height.round() as u32);
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        for mark in &scene.marks {
            draw_mark(&root, scene.origin, mark)?;
        }
        root.present()?;
    }
    Ok(svg)
}

fn rgb(c: Rgb) -> RGBColor {
    RGBColor(c.red, c.green, c.blue)
}

/// Plot-area point to canvas pixels.
fn at(origin: (f64, f64), x: f64, y: f64) -> (i32, i32) {
    ((origin.0 + x).round() as i32, (origin.1 + y).round() as i32)
}

fn draw_mark(root: &Canvas<'_>, origin: (f64, f64), mark: &Mark) -> Result<()> {
    match mark {
        Mark::Circle { cx, cy, r, fill } => {
            root.draw(&Circle::new(at(origin, *cx, *cy), r.round() as i32, rgb(*fill).filled()))?;
        }
        Mark::Rect {
            x,
            y,
            width,
            height,
            fill,
            stroke,
        } => {
            let corners = [at(origin, *x, *y), at(origin, x + width, y + height)];
            root.draw(&Rectangle::new(corners, rgb(*fill).filled()))?;
            if let Some(stroke) = stroke {
                root.draw(&Rectangle::new(corners, rgb(*stroke).stroke_width(1)))?;
            }
        }
        Mark::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
        } => {
            let points = vec![at(origin, *x1, *y1), at(origin, *x2, *y2)];
            root.draw(&PathElement::new(points, rgb(*stroke).stroke_width(1)))?;
        }
        Mark::Text(label) => draw_label(root, origin, label)?,
    }
    Ok(())
}

fn draw_label(root: &Canvas<'_>, origin: (f64, f64), label: &Label) -> Result<()> {
    let h = match label.anchor {
        Anchor::Start => HPos::Left,
        Anchor::Middle => HPos::Center,
        Anchor::End => HPos::Right,
    };
    let v = match label.baseline {
        Baseline::Hanging => VPos::Top,
        Baseline::Middle => VPos::Center,
        Baseline::Alphabetic => VPos::Bottom,
    };
    let color = rgb(label.fill);
    let font = ("sans-serif", label.size)
        .into_font()
        .transform(quarter_turn(label.rotation));
    let style = TextStyle::from(font).color(&color).pos(Pos::new(h, v));

    let (x, y) = label.position();
    root.draw(&Text::new(label.text.as_str(), at(origin, x, y), style))?;
    Ok(())
}

/// Text can only be turned in quarter turns; other angles draw level.
fn quarter_turn(degrees: f64) -> FontTransform {
    match degrees.rem_euclid(360.0).round() as i64 {
        90 => FontTransform::Rotate90,
        180 => FontTransform::Rotate180,
        270 => FontTransform::Rotate270,
        0 | 360 => FontTransform::None,
        _ => {
            log::warn!("Label rotation {degrees}° is not a quarter turn; drawing it level");
            FontTransform::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLACK, hex};
    use crate::config::ChartLayout;

    #[test]
    fn svg_has_the_canvas_size_and_every_mark() {
        let mut scene = Scene::new("scatterplot", &ChartLayout::default());
        let teal = hex("#17becf").unwrap();
        scene.push(Mark::Circle {
            cx: 10.0,
            cy: 20.0,
            r: 5.0,
            fill: teal,
        });
        scene.push(Mark::Line {
            x1: 0.0,
            y1: 300.0,
            x2: 500.0,
            y2: 300.0,
            stroke: BLACK,
        });
        scene.text(Label::new(-150.0, -35.0, "Petal <Width>", 14.0, BLACK).anchor(Anchor::Middle).rotated(-90.0));

        let svg = render_svg(&scene).unwrap();
        let lower = svg.to_lowercase();
        assert!(svg.contains("<svg"));
        assert!(svg.contains(r#"width="600""#));
        assert!(svg.contains(r#"height="400""#));
        assert_eq!(svg.matches("<circle").count(), 1);
        assert!(lower.contains("#17becf"));
        assert!(svg.contains("<text"));
        assert!(svg.contains("rotate(270"));
        assert!(svg.contains("Petal"));
        assert!(!svg.contains("<Width>"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn stroked_rect_is_drawn_twice() {
        let mut scene = Scene::new("boxplot", &ChartLayout::default());
        let mark = |stroke| Mark::Rect {
            x: 0.0,
            y: 0.0,
            width: 18.0,
            height: 18.0,
            fill: hex("#cccccc").unwrap(),
            stroke,
        };
        scene.push(mark(None));
        assert_eq!(render_svg(&scene).unwrap().matches("<rect").count(), 1);

        scene.push(mark(Some(BLACK)));
        assert_eq!(render_svg(&scene).unwrap().matches("<rect").count(), 3);
    }

    #[test]
    fn rotations_snap_to_quarter_turns() {
        assert!(matches!(quarter_turn(-90.0), FontTransform::Rotate270));
        assert!(matches!(quarter_turn(90.0), FontTransform::Rotate90));
        assert!(matches!(quarter_turn(0.0), FontTransform::None));
        assert!(matches!(quarter_turn(45.0), FontTransform::None));
    }
}
