use eframe::egui;
use pdf_grid::constants::MAX_GRID_DIMENSION;
use pdf_grid::{Orientation, PaperSize};
use std::collections::HashSet;
use std::ops::RangeInclusive;
use std::path::PathBuf;

/// Accepted custom paper edge lengths
const PAPER_LENGTH_MM: RangeInclusive<f32> = 10.0..=2000.0;

/// A layout setting picked from a fixed set of values
pub trait LayoutChoice: PartialEq + Copy {
    fn label(self) -> &'static str;
}

impl LayoutChoice for Orientation {
    fn label(self) -> &'static str {
        match self {
            Orientation::Portrait => "Portrait",
            Orientation::Landscape => "Landscape",
        }
    }
}

impl LayoutChoice for PaperSize {
    fn label(self) -> &'static str {
        match self {
            PaperSize::A3 => "A3",
            PaperSize::A4 => "A4",
            PaperSize::A5 => "A5",
            PaperSize::Letter => "Letter",
            PaperSize::Legal => "Legal",
            PaperSize::Custom { .. } => "Custom",
        }
    }
}

/// Labeled row or column count
pub fn grid_dimension(ui: &mut egui::Ui, label: &str, value: &mut usize) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(
            egui::DragValue::new(value)
                .range(1..=MAX_GRID_DIMENSION)
                .speed(0.05),
        )
        .changed()
    })
    .inner
}

/// Labeled edge length of a custom paper size
pub fn paper_length_mm(ui: &mut egui::Ui, label: &str, value: &mut f32) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(
            egui::DragValue::new(value)
                .range(PAPER_LENGTH_MM)
                .suffix(" mm")
                .speed(0.5),
        )
        .changed()
    })
    .inner
}

/// Combo box over `choices`
pub fn choice_combo<T: LayoutChoice>(
    ui: &mut egui::Ui,
    id: &str,
    label: &str,
    value: &mut T,
    choices: &[T],
) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        egui::ComboBox::from_id_salt(id)
            .selected_text(value.label())
            .show_ui(ui, |ui| {
                for &choice in choices {
                    changed |= ui.selectable_value(value, choice, choice.label()).changed();
                }
            });
    });
    changed
}

/// Row of toggle buttons over `choices`
pub fn choice_buttons<T: LayoutChoice>(ui: &mut egui::Ui, value: &mut T, choices: &[T]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        for &choice in choices {
            changed |= ui.selectable_value(value, choice, choice.label()).changed();
        }
    });
    changed
}

/// File list editor with selection, reordering and removal
pub struct FileListEditor<'a> {
    files: &'a mut Vec<PathBuf>,
    selected: &'a mut HashSet<PathBuf>,
    changed: bool,
}

impl<'a> FileListEditor<'a> {
    pub fn new(files: &'a mut Vec<PathBuf>, selected: &'a mut HashSet<PathBuf>) -> Self {
        Self {
            files,
            selected,
            changed: false,
        }
    }

    /// Returns true when the order or contents of the list changed
    pub fn show(mut self, ui: &mut egui::Ui) -> bool {
        if self.files.is_empty() {
            ui.label("No files selected");
            return false;
        }

        let mut to_remove = None;
        let mut to_move_up = None;
        let mut to_move_down = None;

        for (idx, path) in self.files.iter().enumerate() {
            ui.horizontal(|ui| {
                let mut is_selected = self.selected.contains(path);
                if ui.checkbox(&mut is_selected, "").changed() {
                    if is_selected {
                        self.selected.insert(path.clone());
                    } else {
                        self.selected.remove(path);
                    }
                }

                // Reorder buttons
                if idx > 0 && ui.small_button("▲").clicked() {
                    to_move_up = Some(idx);
                }
                if idx < self.files.len() - 1 && ui.small_button("▼").clicked() {
                    to_move_down = Some(idx);
                }

                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                ui.label(format!("{}. {}", idx + 1, name))
                    .on_hover_text(path.display().to_string());

                if ui.small_button("✖").clicked() {
                    to_remove = Some(idx);
                }
            });
        }

        // Apply changes
        if let Some(idx) = to_move_up {
            self.files.swap(idx, idx - 1);
            self.changed = true;
        }
        if let Some(idx) = to_move_down {
            self.files.swap(idx, idx + 1);
            self.changed = true;
        }
        if let Some(idx) = to_remove {
            let removed = self.files.remove(idx);
            self.selected.remove(&removed);
            self.changed = true;
        }

        self.changed
    }
}
