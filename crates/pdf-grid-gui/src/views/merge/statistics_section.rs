use eframe::egui;

use super::state::MergeState;

pub fn show(ui: &mut egui::Ui, state: &MergeState) {
    egui::CollapsingHeader::new("📊 Statistics")
        .default_open(true)
        .show(ui, |ui| {
            if let Some(stats) = &state.stats {
                ui.label(format!("Input files: {}", stats.items));
                ui.label(format!("Items per page: {}", stats.items_per_page));
                ui.label(format!("Output pages: {}", stats.output_pages));

                if stats.empty_cells > 0 {
                    ui.label(format!("Empty cells on last page: {}", stats.empty_cells));
                }
            } else {
                ui.label("No statistics available");
                ui.label("Add input files to see statistics");
            }
        });
}
