use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value as JsonValue;

use super::model::{RawDataset, RawRecord};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a table of text cells from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row followed by one row per flower
/// * `.json` – `[{ "PetalLength": 1.4, "Species": "Iris-setosa", ... }, ...]`
///
/// Cells are kept as text; turning them into numbers is the job of
/// [`super::coerce`], once per pipeline.
pub fn load_file(path: &Path) -> Result<RawDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "csv" => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("opening {}", path.display()))?;
            load_csv_reader(file)
        }
        "json" => load_json(path),
        other => bail!("Unsupported file extension: .{other}"),
    }?;

    log::info!(
        "Loaded {} rows with columns {:?} from {}",
        dataset.len(),
        dataset.columns,
        path.display()
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, then one record per row.
/// Any set of columns is accepted; surrounding whitespace is trimmed.
pub fn load_csv_reader<R: Read>(input: R) -> Result<RawDataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let columns: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let cells: BTreeMap<String, String> = columns
            .iter()
            .zip(record.iter())
            .map(|(col, value)| (col.clone(), value.to_string()))
            .collect();
        rows.push(RawRecord { cells });
    }

    Ok(RawDataset { columns, rows })
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   { "SepalLength": 5.1, "PetalLength": 1.4, "PetalWidth": 0.2, "Species": "Iris-setosa" },
///   ...
/// ]
/// ```
///
/// Values are stringified so both formats feed the same coercion step.
fn load_json(path: &Path) -> Result<RawDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let records = root
        .as_array()
        .context("Expected top-level JSON array")?;

    let mut columns: Vec<String> = Vec::new();
    let mut rows = Vec::with_capacity(records.len());

    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        let mut cells = BTreeMap::new();
        for (key, val) in obj {
            if !columns.contains(key) {
                columns.push(key.clone());
            }
            cells.insert(key.clone(), json_to_text(val));
        }
        rows.push(RawRecord { cells });
    }

    Ok(RawDataset { columns, rows })
}

fn json_to_text(val: &JsonValue) -> String {
    match val {
        JsonValue::String(s) => s.trim().to_string(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::io::Write;
    use std::path::PathBuf;

    use super::*;

    fn iris_path() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/iris.csv")
    }

    #[test]
    fn canonical_dataset_has_three_species_of_fifty() {
        let raw = load_file(&iris_path()).unwrap();
        assert_eq!(raw.len(), 150);
        assert_eq!(
            raw.columns,
            ["SepalLength", "SepalWidth", "PetalLength", "PetalWidth", "Species"]
        );

        let species: BTreeSet<&str> = raw.rows.iter().filter_map(|r| r.get("Species")).collect();
        assert_eq!(species.len(), 3);
        for name in species {
            let count = raw
                .rows
                .iter()
                .filter(|r| r.get("Species") == Some(name))
                .count();
            assert_eq!(count, 50, "{name}");
        }
    }

    #[test]
    fn csv_cells_are_trimmed_text() {
        let input = "PetalLength, Species\n 1.4 , Iris-setosa\n,Iris-virginica\n";
        let raw = load_csv_reader(input.as_bytes()).unwrap();
        assert_eq!(raw.columns, ["PetalLength", "Species"]);
        assert_eq!(raw.rows[0].get("PetalLength"), Some("1.4"));
        assert_eq!(raw.rows[0].get("Species"), Some("Iris-setosa"));
        assert_eq!(raw.rows[1].get("PetalLength"), Some(""));
    }

    #[test]
    fn ragged_csv_is_a_load_error() {
        let input = "PetalLength,Species\n1.4,Iris-setosa,extra\n";
        assert!(load_csv_reader(input.as_bytes()).is_err());
    }

    #[test]
    fn json_records_are_stringified() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"[{{"PetalLength": 4.7, "PetalWidth": 1.4, "Species": "Iris-versicolor"}},
               {{"PetalLength": null, "PetalWidth": 2, "Species": "Iris-virginica"}}]"#
        )
        .unwrap();

        let raw = load_file(file.path()).unwrap();
        assert_eq!(raw.len(), 2);
        assert!(raw.has_column("PetalWidth"));
        assert_eq!(raw.rows[0].get("PetalLength"), Some("4.7"));
        assert_eq!(raw.rows[1].get("PetalLength"), Some(""));
        assert_eq!(raw.rows[1].get("PetalWidth"), Some("2"));
    }

    #[test]
    fn missing_file_and_unknown_extension_fail() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_file(&dir.path().join("absent.csv")).is_err());

        let err = load_file(&dir.path().join("iris.xlsx")).unwrap_err();
        assert!(err.to_string().contains(".xlsx"));
    }
}
