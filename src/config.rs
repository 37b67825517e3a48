use crate::color::{self, Rgb};

/// Space reserved around the plot area for axes and titles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Fixed geometry and styling shared by both panels.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    /// Outer size of a panel, margins included.
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub point_radius: f64,
    /// Gap between boxplot bands as a fraction of the band step.
    pub band_padding_inner: f64,
    pub legend_swatch: f64,
    pub legend_row: f64,
    pub tick_size: f64,
    pub tick_count: usize,
    pub tick_font_size: f64,
    pub title_font_size: f64,
    pub box_fill: Rgb,
    pub ink: Rgb,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
            margin: Margin {
                top: 50.0,
                right: 50.0,
                bottom: 50.0,
                left: 50.0,
            },
            point_radius: 5.0,
            band_padding_inner: 0.1,
            legend_swatch: 18.0,
            legend_row: 20.0,
            tick_size: 6.0,
            tick_count: 10,
            tick_font_size: 10.0,
            title_font_size: 14.0,
            box_fill: color::hex("#cccccc").unwrap_or(color::BLACK),
            ink: color::BLACK,
        }
    }
}

impl ChartLayout {
    /// Width of the plot area.
    pub fn inner_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    /// Height of the plot area.
    pub fn inner_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_area_is_five_hundred_by_three_hundred() {
        let layout = ChartLayout::default();
        assert_eq!(layout.inner_width(), 500.0);
        assert_eq!(layout.inner_height(), 300.0);
        assert_eq!(color::to_hex(layout.box_fill), "#cccccc");
    }
}
