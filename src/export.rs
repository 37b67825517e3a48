use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Serialize;

use crate::chart::Panels;
use crate::config::ChartLayout;
use crate::data::coerce::NumericPolicy;
use crate::data::loader::load_file;
use crate::data::model::{Measurement, Species};
use crate::render::html::render_document;
use crate::stats::QuartileSummary;

/// Title of the exported page.
pub const DOCUMENT_TITLE: &str = "Iris: petal measurements";

/// Write both panels as one HTML page.
pub fn write_html(path: &Path, panels: &Panels) -> Result<()> {
    let html = render_document(DOCUMENT_TITLE, panels)?;
    std::fs::write(path, html).with_context(|| format!("writing {}", path.display()))?;
    log::info!("Wrote panels to {}", path.display());
    Ok(())
}

#[derive(Serialize)]
struct SummaryFile<'a> {
    measurement: &'static str,
    groups: Vec<GroupEntry<'a>>,
}

#[derive(Serialize)]
struct GroupEntry<'a> {
    species: &'a Species,
    #[serde(flatten)]
    summary: &'a QuartileSummary,
}

/// Write the boxplot's per-species quartiles as pretty JSON.
pub fn write_summary(path: &Path, panels: &Panels) -> Result<()> {
    let boxplot = panels
        .boxplot
        .as_ref()
        .map_err(|e| anyhow::anyhow!("no summary to write: {e}"))?;

    let file = SummaryFile {
        measurement: Measurement::PetalLength.column(),
        groups: boxplot
            .summaries
            .iter()
            .map(|(species, summary)| GroupEntry { species, summary })
            .collect(),
    };
    let json = serde_json::to_string_pretty(&file).context("serializing summary")?;
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    log::info!("Wrote {} group summaries to {}", file.groups.len(), path.display());
    Ok(())
}

/// Load `data`, build both panels and write the requested files.
///
/// Each file is written when its panel could be built; a failed pipeline is
/// reported as an error once the other outputs are on disk.
pub fn export_all(
    data: &Path,
    html: Option<&Path>,
    summary: Option<&Path>,
    layout: &ChartLayout,
    policy: NumericPolicy,
) -> Result<()> {
    let raw = load_file(data).with_context(|| format!("loading {}", data.display()))?;
    let panels = Panels::build(&raw, layout, policy);

    if let Some(out) = html {
        write_html(out, &panels)?;
    }
    if let (Some(out), Ok(_)) = (summary, &panels.boxplot) {
        write_summary(out, &panels)?;
    }

    if let Err(e) = &panels.scatter {
        bail!("scatter plot: {e}");
    }
    if let Err(e) = &panels.boxplot {
        bail!("boxplot: {e}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use serde_json::Value as JsonValue;

    use super::*;
    use crate::data::loader::load_csv_reader;

    fn iris_path() -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/iris.csv")
    }

    fn iris_panels() -> Panels {
        let raw = load_file(&iris_path()).unwrap();
        Panels::build(&raw, &ChartLayout::default(), NumericPolicy::Strict)
    }

    #[test]
    fn summary_json_lists_each_species() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.json");
        write_summary(&path, &iris_panels()).unwrap();

        let json: JsonValue = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["measurement"], "PetalLength");
        let groups = json["groups"].as_array().unwrap();
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0]["species"], "Iris-setosa");
        assert_eq!(groups[0]["count"], 50);
        assert!(groups[2]["whisker_high"].as_f64().unwrap() > 5.875);
    }

    #[test]
    fn html_is_written_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("iris.html");
        write_html(&path, &iris_panels()).unwrap();
        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains(DOCUMENT_TITLE));
    }

    #[test]
    fn failed_boxplot_has_no_summary() {
        let raw = load_csv_reader("PetalWidth,Species\n0.2,Iris-setosa\n".as_bytes()).unwrap();
        let panels = Panels::build(&raw, &ChartLayout::default(), NumericPolicy::Strict);
        let dir = tempfile::tempdir().unwrap();
        assert!(write_summary(&dir.path().join("s.json"), &panels).is_err());
    }

    #[test]
    fn export_all_writes_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let html = dir.path().join("iris.html");
        let summary = dir.path().join("iris.json");

        export_all(&iris_path(), Some(html.as_path()), Some(summary.as_path()), &ChartLayout::default(), NumericPolicy::Strict).unwrap();

        assert_eq!(std::fs::read_to_string(&html).unwrap().matches("<svg").count(), 2);
        let json: JsonValue = serde_json::from_str(&std::fs::read_to_string(&summary).unwrap()).unwrap();
        assert_eq!(json["groups"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn export_all_fails_after_writing_what_it_can() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("no_width.csv");
        std::fs::write(&data, "PetalLength,Species\n1.4,Iris-setosa\n4.7,Iris-versicolor\n").unwrap();
        let html = dir.path().join("out.html");
        let summary = dir.path().join("out.json");

        let err = export_all(&data, Some(html.as_path()), Some(summary.as_path()), &ChartLayout::default(), NumericPolicy::Strict)
            .unwrap_err();

        assert!(err.to_string().contains("scatter plot"), "{err}");
        let page = std::fs::read_to_string(&html).unwrap();
        assert_eq!(page.matches("<svg").count(), 1);
        assert!(page.contains(r#"<p class="error">"#));
        let json: JsonValue = serde_json::from_str(&std::fs::read_to_string(&summary).unwrap()).unwrap();
        assert_eq!(json["groups"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn export_all_reports_a_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let html = dir.path().join("out.html");
        let err = export_all(
            &dir.path().join("absent.csv"),
            Some(html.as_path()),
            None,
            &ChartLayout::default(),
            NumericPolicy::Strict,
        )
        .unwrap_err();

        assert!(format!("{err:#}").contains("loading"));
        assert!(!html.exists());
    }
}
