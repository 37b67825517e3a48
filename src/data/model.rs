use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Species – the categorical label of a flower
// ---------------------------------------------------------------------------

/// Species label as found in the `Species` column.
///
/// Kept as an open string type: the well-known three names are constants,
/// but a file may carry others and grouping must still produce one entry
/// per observed value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Species(String);

impl Species {
    pub const SETOSA: &'static str = "Iris-setosa";
    pub const VERSICOLOR: &'static str = "Iris-versicolor";
    pub const VIRGINICA: &'static str = "Iris-virginica";

    pub fn new(name: impl Into<String>) -> Self {
        Species(name.into())
    }

    /// The three species of the canonical dataset, in colour-domain order.
    pub fn known() -> [Species; 3] {
        [
            Species::new(Self::SETOSA),
            Species::new(Self::VERSICOLOR),
            Species::new(Self::VIRGINICA),
        ]
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Measurement – the numeric columns
// ---------------------------------------------------------------------------

/// One of the four numeric measurements of a flower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Measurement {
    SepalLength,
    SepalWidth,
    PetalLength,
    PetalWidth,
}

impl Measurement {
    /// Column name in the input table.
    pub fn column(self) -> &'static str {
        match self {
            Measurement::SepalLength => "SepalLength",
            Measurement::SepalWidth => "SepalWidth",
            Measurement::PetalLength => "PetalLength",
            Measurement::PetalWidth => "PetalWidth",
        }
    }

    /// Human-readable axis title.
    pub fn label(self) -> &'static str {
        match self {
            Measurement::SepalLength => "Sepal Length",
            Measurement::SepalWidth => "Sepal Width",
            Measurement::PetalLength => "Petal Length",
            Measurement::PetalWidth => "Petal Width",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Column holding the species label.
pub const SPECIES_COLUMN: &str = "Species";

// ---------------------------------------------------------------------------
// RawDataset – the loaded text table
// ---------------------------------------------------------------------------

/// One data row exactly as read: column name → text cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    pub cells: BTreeMap<String, String>,
}

impl RawRecord {
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }
}

/// The loaded table. Never mutated after loading; every pipeline coerces
/// its own copy out of it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawDataset {
    /// Column names in header order.
    pub columns: Vec<String>,
    /// Rows in file order.
    pub rows: Vec<RawRecord>,
}

impl RawDataset {
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Flower / FlowerSet – the typed dataset
// ---------------------------------------------------------------------------

/// One measured flower.
#[derive(Debug, Clone, PartialEq)]
pub struct Flower {
    pub species: Species,
    values: [f64; 4],
}

impl Flower {
    /// Build a flower with every measurement set to `NaN` (not coerced).
    pub fn new(species: Species) -> Self {
        Flower {
            species,
            values: [f64::NAN; 4],
        }
    }

    pub fn with(mut self, measurement: Measurement, value: f64) -> Self {
        self.values[measurement.index()] = value;
        self
    }

    /// Value of a measurement; `NaN` when it was not coerced or not numeric.
    pub fn value(&self, measurement: Measurement) -> f64 {
        self.values[measurement.index()]
    }
}

#[cfg(test)]
impl Flower {
    pub fn petal_length(&self) -> f64 {
        self.value(Measurement::PetalLength)
    }

    pub fn petal_width(&self) -> f64 {
        self.value(Measurement::PetalWidth)
    }
}

/// A coerced dataset owned by one pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowerSet {
    /// Measurements that were converted to numbers.
    pub measured: Vec<Measurement>,
    /// Flowers in file order.
    pub flowers: Vec<Flower>,
}

impl FlowerSet {
    /// Distinct species in first-seen order.
    pub fn species(&self) -> Vec<Species> {
        let mut seen: Vec<Species> = Vec::new();
        for flower in &self.flowers {
            if !seen.contains(&flower.species) {
                seen.push(flower.species.clone());
            }
        }
        seen
    }

    /// All values of one measurement, in row order.
    pub fn values(&self, measurement: Measurement) -> impl Iterator<Item = f64> + '_ {
        self.flowers.iter().map(move |f| f.value(measurement))
    }
}
