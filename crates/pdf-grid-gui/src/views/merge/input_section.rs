use eframe::egui;
use pdf_grid::constants::SUPPORTED_EXTENSIONS;

use super::state::MergeState;
use crate::ui_components::FileListEditor;

pub fn show(ui: &mut egui::Ui, state: &mut MergeState) {
    egui::CollapsingHeader::new("📄 Input Files")
        .default_open(true)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                if ui.button("➕ Add Files").clicked() {
                    if let Some(paths) = rfd::FileDialog::new()
                        .add_filter("PDF and images", SUPPORTED_EXTENSIONS)
                        .pick_files()
                    {
                        let added = state.add_files(paths);
                        log::info!("Added {} files", added);
                    }
                }

                if ui
                    .add_enabled(
                        !state.selected.is_empty(),
                        egui::Button::new("Remove Selected"),
                    )
                    .clicked()
                {
                    state.remove_selected();
                }

                if ui
                    .add_enabled(
                        !state.options.input_files.is_empty(),
                        egui::Button::new("Remove All"),
                    )
                    .clicked()
                {
                    state.remove_all();
                }
            });

            ui.add_space(5.0);

            egui::ScrollArea::vertical()
                .max_height(260.0)
                .show(ui, |ui| {
                    if FileListEditor::new(&mut state.options.input_files, &mut state.selected)
                        .show(ui)
                    {
                        state.input_changed();
                    }
                });
        });
}
