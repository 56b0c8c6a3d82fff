mod actions_section;
mod input_section;
mod layout_section;
mod notices;
mod state;
mod statistics_section;

pub use state::{MergeState, NoticeKind};

use eframe::egui;
use pdf_async_runtime::PdfCommand;
use tokio::sync::mpsc;

pub fn show_merge(
    ctx: &egui::Context,
    ui: &mut egui::Ui,
    state: &mut MergeState,
    command_tx: &mpsc::UnboundedSender<PdfCommand>,
) {
    egui::SidePanel::left("merge_controls")
        .min_width(340.0)
        .show_inside(ui, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("PDF Grid Merger");
                ui.separator();

                input_section::show(ui, state);
                ui.add_space(10.0);
                ui.separator();
                ui.add_space(10.0);

                layout_section::show(ui, state);
                ui.add_space(10.0);
                ui.separator();
                ui.add_space(10.0);

                statistics_section::show(ui, state);
                ui.add_space(10.0);
                ui.separator();
                ui.add_space(10.0);

                actions_section::show(ui, state, command_tx);
            });
        });

    show_preview_area(ui, state);
    notices::show(ctx, state);

    if state.needs_regeneration {
        request_preview(state, command_tx);
    }
}

fn request_preview(state: &mut MergeState, command_tx: &mpsc::UnboundedSender<PdfCommand>) {
    state.needs_regeneration = false;
    state.preview_pending = true;
    log::debug!("Requesting preview");
    let _ = command_tx.send(PdfCommand::MergeGeneratePreview {
        options: state.options.clone(),
    });
}

fn show_preview_area(ui: &mut egui::Ui, state: &MergeState) {
    egui::CentralPanel::default().show_inside(ui, |ui| {
        if let Some(texture) = &state.preview_texture {
            ui.label(format!(
                "Preview of the first page ({} of {} files)",
                state.preview_item_count,
                state.options.input_files.len()
            ));
            egui::ScrollArea::both().show(ui, |ui| {
                ui.centered_and_justified(|ui| {
                    ui.image((texture.id(), texture.size_vec2()));
                });
            });
        } else if state.options.input_files.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("No Input Files");
                    ui.label("Add or drop PDF and image files to begin");
                });
            });
        } else if state.preview_pending {
            ui.centered_and_justified(|ui| {
                ui.spinner();
            });
        } else {
            ui.centered_and_justified(|ui| {
                ui.label("Preview not available");
            });
        }
    });
}
