use crate::color::ColorScale;
use crate::config::ChartLayout;
use crate::data::coerce::{NumericPolicy, coerce};
use crate::data::model::{Measurement, RawDataset};
use crate::error::{ChartError, ChartResult};
use crate::scale::LinearScale;
use crate::stats;

use super::axis;
use super::scene::{Anchor, Baseline, Label, Mark, Readout, Scene};

/// Insertion point of the scatter panel.
pub const MOUNT: &str = "scatterplot";

const X: Measurement = Measurement::PetalLength;
const Y: Measurement = Measurement::PetalWidth;

/// Petal length against petal width, one dot per flower, coloured by species.
pub fn build(raw: &RawDataset, layout: &ChartLayout, policy: NumericPolicy) -> ChartResult<Scene> {
    let flowers = coerce(raw, &[X, Y], policy)?;

    let width = layout.inner_width();
    let height = layout.inner_height();
    let x_extent = stats::extent(flowers.values(X)).ok_or(ChartError::EmptyDataset)?;
    let y_extent = stats::extent(flowers.values(Y)).ok_or(ChartError::EmptyDataset)?;
    let x = LinearScale::new(x_extent, (0.0, width));
    let y = LinearScale::new(y_extent, (height, 0.0));
    log::debug!("scatter domains: x {x_extent:?}, y {y_extent:?}");

    let colors = ColorScale::iris().extended_with(flowers.species().iter());

    let mut scene = Scene::new(MOUNT, layout);
    scene.readout = Readout {
        x: Some((X.label().to_string(), x)),
        y: Some((Y.label().to_string(), y)),
    };
    scene.marks.extend(axis::bottom(&x, height, layout));
    scene.marks.extend(axis::left(&y, layout));

    for flower in &flowers.flowers {
        let (px, py) = (flower.value(X), flower.value(Y));
        if !(px.is_finite() && py.is_finite()) {
            continue;
        }
        scene.push(Mark::Circle {
            cx: x.apply(px),
            cy: y.apply(py),
            r: layout.point_radius,
            fill: colors.color(&flower.species)?,
        });
    }

    scene.marks.extend(axis::titles(X.label(), Y.label(), layout));

    for (i, (species, color)) in colors.legend_entries().into_iter().enumerate() {
        let top = i as f64 * layout.legend_row;
        scene.push(Mark::Rect {
            x: width - layout.legend_swatch,
            y: top,
            width: layout.legend_swatch,
            height: layout.legend_swatch,
            fill: color,
            stroke: None,
        });
        scene.text(
            Label::new(
                width - layout.legend_swatch - 6.0,
                top + layout.legend_swatch / 2.0,
                species.as_str(),
                layout.tick_font_size,
                layout.ink,
            )
            .anchor(Anchor::End)
            .baseline(Baseline::Middle),
        );
    }

    Ok(scene)
}
