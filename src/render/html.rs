use std::fmt::Write;

use anyhow::Result;
use quick_xml::escape::escape;

use crate::chart::Panels;

use super::svg::render_svg;

/// A standalone page with one `<div id="...">` per panel.
///
/// A panel whose pipeline failed gets its error message in place of the
/// drawing; the other panel is unaffected.
pub fn render_document(title: &str, panels: &Panels) -> Result<String> {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    writeln!(out, "<title>{}</title>", escape(title))?;
    out.push_str("<style>.error { color: #b00020; font-family: sans-serif; }</style>\n");
    out.push_str("</head>\n<body>\n");

    for (mount, scene) in panels.slots() {
        writeln!(out, "<div id=\"{mount}\">")?;
        match scene {
            Ok(scene) => out.push_str(&render_svg(scene)?),
            Err(e) => writeln!(out, "<p class=\"error\">{}</p>", escape(&e.to_string()))?,
        }
        out.push_str("</div>\n");
    }

    out.push_str("</body>\n</html>\n");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::config::ChartLayout;
    use crate::data::coerce::NumericPolicy;
    use crate::data::loader::{load_csv_reader, load_file};

    #[test]
    fn both_panels_are_mounted() {
        let raw = load_file(&Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/iris.csv")).unwrap();
        let panels = Panels::build(&raw, &ChartLayout::default(), NumericPolicy::Strict);
        let html = render_document("Iris", &panels).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        let scatter = html.find(r#"<div id="scatterplot">"#).unwrap();
        let boxplot = html.find(r#"<div id="boxplot">"#).unwrap();
        assert!(scatter < boxplot);
        assert_eq!(html.matches("<svg").count(), 2);
        assert_eq!(html.matches("<circle").count(), 150);
    }

    #[test]
    fn failed_panel_shows_its_error() {
        let raw = load_csv_reader("PetalLength,Species\n1.4,Iris-setosa\n".as_bytes()).unwrap();
        let panels = Panels::build(&raw, &ChartLayout::default(), NumericPolicy::Strict);
        let html = render_document("Iris <petals>", &panels).unwrap();

        assert_eq!(html.matches("<svg").count(), 1);
        assert!(html.contains("missing column &apos;PetalWidth&apos;"));
        assert!(html.contains("<title>Iris &lt;petals&gt;</title>"));
    }
}
