/// Chart pipelines: typed data → scales → draw commands.
///
/// ```text
///                 ┌──────────────┐
///            ┌──▶ │ scatter      │ coerce(PetalLength, PetalWidth) → extents → Scene
///  RawDataset│    └──────────────┘
///  (shared)  │    ┌──────────────┐
///            └──▶ │ boxplot      │ coerce(PetalLength) → quartiles → Scene
///                 └──────────────┘
/// ```
///
/// Each pipeline owns its coerced copy, so one failing leaves the other intact.

pub mod axis;
pub mod boxplot;
pub mod scatter;
pub mod scene;

use crate::config::ChartLayout;
use crate::data::coerce::NumericPolicy;
use crate::data::model::RawDataset;
use crate::error::ChartResult;

use boxplot::Boxplot;
use scene::Scene;

/// Outcome of running both pipelines over one load.
#[derive(Debug, Clone, PartialEq)]
pub struct Panels {
    pub scatter: ChartResult<Scene>,
    pub boxplot: ChartResult<Boxplot>,
}

impl Panels {
    pub fn build(raw: &RawDataset, layout: &ChartLayout, policy: NumericPolicy) -> Self {
        let scatter = scatter::build(raw, layout, policy);
        if let Err(e) = &scatter {
            log::error!("Scatter plot failed: {e}");
        }
        let boxplot = boxplot::build(raw, layout, policy);
        if let Err(e) = &boxplot {
            log::error!("Boxplot failed: {e}");
        }
        Panels { scatter, boxplot }
    }

    /// Both panels in page order, each with the slot it mounts at.
    pub fn slots(&self) -> [(&'static str, ChartResult<&Scene>); 2] {
        [
            (scatter::MOUNT, self.scatter.as_ref().map_err(Clone::clone)),
            (
                boxplot::MOUNT,
                self.boxplot
                    .as_ref()
                    .map(|b| &b.scene)
                    .map_err(Clone::clone),
            ),
        ]
    }
}
