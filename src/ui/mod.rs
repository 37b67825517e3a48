/// egui front end: menu bar, chart panel, and the scene painter.

pub mod canvas;
pub mod panels;
