use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::chart::Panels;
use crate::data::coerce::NumericPolicy;
use crate::error::ChartError;
use crate::export;
use crate::state::AppState;

use super::canvas::paint_scene;

// ---------------------------------------------------------------------------
// Central panel – both charts
// ---------------------------------------------------------------------------

/// Render the scatter plot above the boxplot.
pub fn chart_panel(ui: &mut Ui, state: &AppState) {
    let Some(panels) = &state.panels else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open an iris CSV file  (File → Open…)");
        });
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (mount, scene) in panels.slots() {
                ui.strong(format!("#{mount}"));
                match scene {
                    Ok(scene) => paint_scene(ui, scene),
                    Err(e) => pipeline_error(ui, &e),
                }
                ui.add_space(12.0);
            }
        });
}

fn pipeline_error(ui: &mut Ui, error: &ChartError) {
    ui.label(RichText::new(format!("Cannot draw this panel: {error}")).color(Color32::RED));
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            let exportable = state.panels.is_some();
            if ui.add_enabled(exportable, egui::Button::new("Export HTML…")).clicked() {
                export_dialog(state, "html", export::write_html);
                ui.close_menu();
            }
            if ui.add_enabled(exportable, egui::Button::new("Export summary…")).clicked() {
                export_dialog(state, "json", export::write_summary);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(source) = &state.source {
            ui.label(format!("{} rows from {}", state.row_count(), source.display()));
        }

        ui.separator();

        let mut lenient = state.policy == NumericPolicy::Lenient;
        if ui.checkbox(&mut lenient, "Lenient numbers").changed() {
            state.set_policy(if lenient {
                NumericPolicy::Lenient
            } else {
                NumericPolicy::Strict
            });
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open iris data")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.load(&path);
    }
}

fn export_dialog(
    state: &mut AppState,
    extension: &str,
    write: fn(&std::path::Path, &Panels) -> anyhow::Result<()>,
) {
    let Some(panels) = &state.panels else {
        return;
    };
    let Some(path) = rfd::FileDialog::new()
        .set_title("Export")
        .add_filter(extension, &[extension])
        .save_file()
    else {
        return;
    };

    if let Err(e) = write(&path, panels) {
        log::error!("Export failed: {e:#}");
        state.status_message = Some(format!("Error: {e:#}"));
    }
}
