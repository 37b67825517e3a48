/// Back ends that turn a [`crate::chart::scene::Scene`] into output:
/// SVG text, an HTML page holding both panels, and the egui painter
/// (in `ui::canvas`).

pub mod html;
pub mod svg;
