use thiserror::Error;

/// Failures of a single chart pipeline (coercion, scales, aggregation).
///
/// Loading and exporting use `anyhow` with context instead; a `ChartError`
/// only ever stops the pipeline that produced it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    /// A cell that should hold a number could not be parsed.
    #[error("row {row}: column '{column}' holds '{value}', which is not a number")]
    DataFormat {
        row: usize,
        column: String,
        value: String,
    },

    /// No rows, or no finite values to build a scale domain from.
    #[error("dataset is empty")]
    EmptyDataset,

    /// A column the pipeline needs is absent from the header.
    #[error("missing column '{0}'")]
    MissingColumn(String),

    /// A category that is not part of a scale's domain.
    #[error("unknown category '{0}'")]
    UnknownCategory(String),
}

pub type ChartResult<T> = std::result::Result<T, ChartError>;
