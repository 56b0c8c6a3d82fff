use eframe::egui;
use pdf_async_runtime::PdfCommand;
use tokio::sync::mpsc;

use super::state::{MergeState, NoticeKind};

pub fn show(
    ui: &mut egui::Ui,
    state: &mut MergeState,
    command_tx: &mpsc::UnboundedSender<PdfCommand>,
) {
    ui.vertical(|ui| {
        ui.horizontal(|ui| {
            show_config_buttons(ui, state, command_tx);
        });

        ui.add_space(10.0);

        show_merge_button(ui, state, command_tx);
    });
}

fn show_config_buttons(
    ui: &mut egui::Ui,
    state: &MergeState,
    command_tx: &mpsc::UnboundedSender<PdfCommand>,
) {
    if ui.button("💾 Save Layout").clicked() {
        save_layout(state, command_tx);
    }

    if ui.button("📂 Load Layout").clicked() {
        load_layout(command_tx);
    }
}

fn save_layout(state: &MergeState, command_tx: &mpsc::UnboundedSender<PdfCommand>) {
    if let Some(path) = rfd::FileDialog::new()
        .add_filter("JSON", &["json"])
        .set_file_name("grid_layout.json")
        .save_file()
    {
        let _ = command_tx.send(PdfCommand::MergeSaveConfig {
            options: state.options.clone(),
            path,
        });
    }
}

fn load_layout(command_tx: &mpsc::UnboundedSender<PdfCommand>) {
    if let Some(path) = rfd::FileDialog::new()
        .add_filter("JSON", &["json"])
        .pick_file()
    {
        let _ = command_tx.send(PdfCommand::MergeLoadConfig { path });
    }
}

fn show_merge_button(
    ui: &mut egui::Ui,
    state: &mut MergeState,
    command_tx: &mpsc::UnboundedSender<PdfCommand>,
) {
    let button = egui::Button::new("🔗 Merge Files").min_size(egui::vec2(160.0, 32.0));

    if !ui.add_enabled(!state.merging, button).clicked() {
        return;
    }

    if state.options.input_files.is_empty() {
        state.push_notice(NoticeKind::Warning, "Please add files first");
        return;
    }

    // A cancelled dialog aborts silently
    let Some(output_path) = rfd::FileDialog::new()
        .add_filter("PDF", &["pdf"])
        .set_file_name("merged.pdf")
        .save_file()
    else {
        return;
    };

    log::info!("Merging into {}", output_path.display());
    state.merging = true;
    let _ = command_tx.send(PdfCommand::MergeGenerate {
        options: state.options.clone(),
        output_path,
    });
}
