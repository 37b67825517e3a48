use std::str::FromStr;

use palette::Srgb;

use crate::data::model::Species;
use crate::error::{ChartError, ChartResult};

/// 8-bit sRGB colour used by every mark.
pub type Rgb = Srgb<u8>;

pub const BLACK: Rgb = Srgb::new(0, 0, 0);

// ---------------------------------------------------------------------------
// Categorical palette
// ---------------------------------------------------------------------------

/// The ten-colour categorical scheme ("category10").
pub const CATEGORY10: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Parse a `#rrggbb` literal.
pub fn hex(code: &str) -> Option<Rgb> {
    Rgb::from_str(code).ok()
}

/// Format as `#rrggbb`.
#[cfg(test)]
pub fn to_hex(color: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

/// Parsed [`CATEGORY10`].
pub fn category10() -> Vec<Rgb> {
    CATEGORY10.iter().filter_map(|code| hex(code)).collect()
}

// ---------------------------------------------------------------------------
// Color mapping: species → Rgb
// ---------------------------------------------------------------------------

/// Ordinal mapping of species to palette entries by domain position.
/// The palette repeats when the domain is longer than it.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    domain: Vec<Species>,
    palette: Vec<Rgb>,
}

impl ColorScale {
    pub fn new(domain: Vec<Species>, palette: Vec<Rgb>) -> Self {
        ColorScale { domain, palette }
    }

    /// The three known species on [`CATEGORY10`].
    pub fn iris() -> Self {
        Self::new(Species::known().to_vec(), category10())
    }

    /// Append species not yet in the domain, in the order given.
    pub fn extended_with<'a>(mut self, observed: impl IntoIterator<Item = &'a Species>) -> Self {
        for species in observed {
            if !self.domain.contains(species) {
                log::warn!("Species '{species}' is not a known iris; giving it the next colour");
                self.domain.push(species.clone());
            }
        }
        self
    }

    /// Look up the colour for a species.
    pub fn color(&self, species: &Species) -> ChartResult<Rgb> {
        let position = self
            .domain
            .iter()
            .position(|s| s == species)
            .ok_or_else(|| ChartError::UnknownCategory(species.to_string()))?;
        if self.palette.is_empty() {
            return Ok(BLACK);
        }
        Ok(self.palette[position % self.palette.len()])
    }

    /// Return the legend entries (species → colour) in domain order.
    pub fn legend_entries(&self) -> Vec<(Species, Rgb)> {
        self.domain
            .iter()
            .filter_map(|s| self.color(s).ok().map(|c| (s.clone(), c)))
            .collect()
    }
}

#[cfg(test)]
impl ColorScale {
    pub fn domain(&self) -> &[Species] {
        &self.domain
    }
}
