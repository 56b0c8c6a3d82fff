use eframe::egui;
use pdf_grid::{Orientation, PaperSize};

use super::state::MergeState;
use crate::ui_components::{choice_buttons, choice_combo, grid_dimension, paper_length_mm};

/// Size picked when switching to a custom paper size
const DEFAULT_CUSTOM_MM: (f32, f32) = (210.0, 297.0);

pub fn show(ui: &mut egui::Ui, state: &mut MergeState) {
    egui::CollapsingHeader::new("📐 Layout")
        .default_open(true)
        .show(ui, |ui| {
            let options = &mut state.options;
            let mut changed = false;

            ui.label("Orientation:");
            changed |= choice_buttons(
                ui,
                &mut options.orientation,
                &[Orientation::Portrait, Orientation::Landscape],
            );
            ui.add_space(5.0);

            changed |= grid_dimension(ui, "Rows:", &mut options.rows);
            changed |= grid_dimension(ui, "Columns:", &mut options.cols);
            ui.add_space(5.0);

            changed |= show_paper_size_selector(ui, &mut options.paper_size);

            if changed {
                state.needs_regeneration = true;
            }
        });
}

fn show_paper_size_selector(ui: &mut egui::Ui, paper_size: &mut PaperSize) -> bool {
    let custom = match *paper_size {
        custom @ PaperSize::Custom { .. } => custom,
        _ => PaperSize::Custom {
            width_mm: DEFAULT_CUSTOM_MM.0,
            height_mm: DEFAULT_CUSTOM_MM.1,
        },
    };

    let paper_sizes = [
        PaperSize::A3,
        PaperSize::A4,
        PaperSize::A5,
        PaperSize::Letter,
        PaperSize::Legal,
        custom,
    ];

    let mut changed = choice_combo(ui, "paper_size", "Paper size:", paper_size, &paper_sizes);

    if let PaperSize::Custom {
        width_mm,
        height_mm,
    } = paper_size
    {
        changed |= paper_length_mm(ui, "Width:", width_mm);
        changed |= paper_length_mm(ui, "Height:", height_mm);
    }

    changed
}
