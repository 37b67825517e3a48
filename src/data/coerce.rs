use crate::error::{ChartError, ChartResult};

use super::model::{Flower, FlowerSet, Measurement, RawDataset, SPECIES_COLUMN, Species};

/// What to do with a cell that should be numeric but is empty or not a number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NumericPolicy {
    /// Fail the pipeline with [`ChartError::DataFormat`].
    #[default]
    Strict,
    /// Keep `NaN`; extents and quartiles skip it and no mark is drawn.
    Lenient,
}

/// Produce a typed copy of `raw` with `fields` converted to numbers.
///
/// Measurements not listed in `fields` are left as `NaN`. The source table
/// is only borrowed, so independent pipelines can coerce the same load.
pub fn coerce(
    raw: &RawDataset,
    fields: &[Measurement],
    policy: NumericPolicy,
) -> ChartResult<FlowerSet> {
    if raw.is_empty() {
        return Err(ChartError::EmptyDataset);
    }
    let required = std::iter::once(SPECIES_COLUMN).chain(fields.iter().map(|m| m.column()));
    for column in required {
        if !raw.has_column(column) {
            return Err(ChartError::MissingColumn(column.to_string()));
        }
    }

    let mut flowers = Vec::with_capacity(raw.len());
    for (row, record) in raw.rows.iter().enumerate() {
        let species = match record.get(SPECIES_COLUMN) {
            Some(name) if !name.is_empty() => Species::new(name),
            other => {
                return Err(ChartError::DataFormat {
                    row,
                    column: SPECIES_COLUMN.to_string(),
                    value: other.unwrap_or_default().to_string(),
                });
            }
        };

        let mut flower = Flower::new(species);
        for &field in fields {
            let text = record.get(field.column()).unwrap_or_default();
            let value = match parse_number(text) {
                Some(v) => v,
                None => match policy {
                    NumericPolicy::Strict => {
                        return Err(ChartError::DataFormat {
                            row,
                            column: field.column().to_string(),
                            value: text.to_string(),
                        });
                    }
                    NumericPolicy::Lenient => {
                        log::warn!("row {row}: '{text}' in {} is not a number", field.column());
                        f64::NAN
                    }
                },
            };
            flower = flower.with(field, value);
        }
        flowers.push(flower);
    }

    log::debug!("Coerced {} rows for {:?}", flowers.len(), fields);
    Ok(FlowerSet {
        measured: fields.to_vec(),
        flowers,
    })
}

/// Only finite numbers are values; `NaN` and infinity literals count as
/// non-numeric, like empty text.
fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}
