use eframe::egui;

use super::state::MergeState;

/// Show the oldest pending notice until the user dismisses it
pub fn show(ctx: &egui::Context, state: &mut MergeState) {
    let Some(notice) = state.notices.front() else {
        return;
    };

    let mut dismissed = false;
    egui::Window::new(notice.kind.title())
        .id(egui::Id::new("merge_notice"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label(&notice.message);
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        });

    if dismissed {
        state.notices.pop_front();
    }
}
