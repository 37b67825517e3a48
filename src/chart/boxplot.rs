use crate::config::ChartLayout;
use crate::data::coerce::{NumericPolicy, coerce};
use crate::data::model::{Measurement, RawDataset, Species};
use crate::error::{ChartError, ChartResult};
use crate::scale::{BandScale, LinearScale};
use crate::stats::{self, GroupSummaries};

use super::axis;
use super::scene::{Mark, Readout, Scene};

/// Insertion point of the boxplot panel.
pub const MOUNT: &str = "boxplot";

const VALUE: Measurement = Measurement::PetalLength;

/// A built boxplot together with the statistics it was drawn from.
#[derive(Debug, Clone, PartialEq)]
pub struct Boxplot {
    pub scene: Scene,
    pub summaries: GroupSummaries<Species>,
}

/// Per-species quartiles of petal length.
pub fn summarize(raw: &RawDataset, policy: NumericPolicy) -> ChartResult<GroupSummaries<Species>> {
    let flowers = coerce(raw, &[VALUE], policy)?;
    let summaries = stats::summarize_by(&flowers.flowers, |f| &f.species, |f| f.value(VALUE));
    if summaries.is_empty() {
        return Err(ChartError::EmptyDataset);
    }
    for (species, summary) in summaries.iter() {
        log::debug!("{species}: {summary:?}");
    }
    Ok(summaries)
}

/// Petal length by species: one box and whisker per species.
pub fn build(raw: &RawDataset, layout: &ChartLayout, policy: NumericPolicy) -> ChartResult<Boxplot> {
    let summaries = summarize(raw, policy)?;

    let width = layout.inner_width();
    let height = layout.inner_height();
    let x = BandScale::new(
        summaries.keys().cloned(),
        (0.0, width),
        layout.band_padding_inner,
    );
    let max = summaries
        .iter()
        .map(|(_, s)| s.max)
        .fold(f64::NEG_INFINITY, f64::max);
    let y = LinearScale::new((0.0, max), (height, 0.0));
    log::debug!("boxplot domains: x {:?}, y {:?}", x.domain(), y.domain);

    let mut scene = Scene::new(MOUNT, layout);
    scene.readout = Readout {
        x: None,
        y: Some((VALUE.label().to_string(), y)),
    };
    scene.marks.extend(axis::bottom(&x, height, layout));
    scene.marks.extend(axis::left(&y, layout));
    scene
        .marks
        .extend(axis::titles("Species", VALUE.label(), layout));

    let band = x.bandwidth();
    for (species, q) in summaries.iter() {
        let left = x
            .apply(species)
            .ok_or_else(|| ChartError::UnknownCategory(species.to_string()))?;
        let centre = left + band / 2.0;

        scene.push(Mark::Line {
            x1: centre,
            y1: y.apply(q.whisker_low),
            x2: centre,
            y2: y.apply(q.whisker_high),
            stroke: layout.ink,
        });
        scene.push(Mark::Rect {
            x: left,
            y: y.apply(q.q3),
            width: band,
            height: y.apply(q.q1) - y.apply(q.q3),
            fill: layout.box_fill,
            stroke: Some(layout.ink),
        });
        scene.push(Mark::Line {
            x1: left,
            y1: y.apply(q.median),
            x2: left + band,
            y2: y.apply(q.median),
            stroke: layout.ink,
        });
    }

    Ok(Boxplot { scene, summaries })
}
