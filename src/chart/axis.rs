use crate::config::ChartLayout;
use crate::scale::AxisScale;

use super::scene::{Anchor, Baseline, Label, Mark};

/// Gap between a tick's end and its label.
const LABEL_GAP: f64 = 3.0;

/// Horizontal axis along `y = at_y`, ticks pointing down.
pub fn bottom(scale: &dyn AxisScale, at_y: f64, layout: &ChartLayout) -> Vec<Mark> {
    let (r0, r1) = scale.range();
    let size = layout.tick_size;
    let mut marks = vec![
        line(r0, at_y + size, r0, at_y, layout),
        line(r0, at_y, r1, at_y, layout),
        line(r1, at_y, r1, at_y + size, layout),
    ];
    for tick in scale.axis_ticks(layout.tick_count) {
        marks.push(line(tick.position, at_y, tick.position, at_y + size, layout));
        marks.push(Mark::Text(
            Label::new(
                tick.position,
                at_y + size + LABEL_GAP,
                tick.label,
                layout.tick_font_size,
                layout.ink,
            )
            .anchor(Anchor::Middle)
            .baseline(Baseline::Hanging),
        ));
    }
    marks
}

/// Vertical axis along `x = 0`, ticks pointing left.
pub fn left(scale: &dyn AxisScale, layout: &ChartLayout) -> Vec<Mark> {
    let (r0, r1) = scale.range();
    let size = layout.tick_size;
    let mut marks = vec![
        line(-size, r0, 0.0, r0, layout),
        line(0.0, r0, 0.0, r1, layout),
        line(0.0, r1, -size, r1, layout),
    ];
    for tick in scale.axis_ticks(layout.tick_count) {
        marks.push(line(-size, tick.position, 0.0, tick.position, layout));
        marks.push(Mark::Text(
            Label::new(
                -size - LABEL_GAP,
                tick.position,
                tick.label,
                layout.tick_font_size,
                layout.ink,
            )
            .anchor(Anchor::End)
            .baseline(Baseline::Middle),
        ));
    }
    marks
}

/// Titles under the horizontal axis and, rotated, left of the vertical one.
pub fn titles(x_title: &str, y_title: &str, layout: &ChartLayout) -> Vec<Mark> {
    let width = layout.inner_width();
    let height = layout.inner_height();
    vec![
        Mark::Text(
            Label::new(
                width / 2.0,
                height + layout.margin.bottom - 10.0,
                x_title,
                layout.title_font_size,
                layout.ink,
            )
            .anchor(Anchor::Middle),
        ),
        Mark::Text(
            Label::new(
                -height / 2.0,
                -layout.margin.left + 15.0,
                y_title,
                layout.title_font_size,
                layout.ink,
            )
            .anchor(Anchor::Middle)
            .rotated(-90.0),
        ),
    ]
}

fn line(x1: f64, y1: f64, x2: f64, y2: f64, layout: &ChartLayout) -> Mark {
    Mark::Line {
        x1,
        y1,
        x2,
        y2,
        stroke: layout.ink,
    }
}
