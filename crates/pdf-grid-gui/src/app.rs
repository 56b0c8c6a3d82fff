use eframe::egui;
use pdf_async_runtime::{PdfCommand, PdfUpdate};
use tokio::sync::mpsc;

use crate::logger::AppLogger;
use crate::views::{MergeState, NoticeKind, show_merge};

#[derive(Clone)]
struct ProgressState {
    operation: String,
    current: usize,
    total: usize,
}

pub struct PdfGridApp {
    state: MergeState,
    logger: AppLogger,
    show_log: bool,

    // Async infrastructure
    command_tx: mpsc::UnboundedSender<PdfCommand>,
    update_rx: mpsc::UnboundedReceiver<PdfUpdate>,

    // Progress tracking
    progress: Option<ProgressState>,

    _tokio_handle: tokio::runtime::Handle,
}

impl PdfGridApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        tokio_handle: tokio::runtime::Handle,
        logger: AppLogger,
    ) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        // Spawn worker task
        tokio_handle.spawn(crate::worker::worker_task(command_rx, update_tx));

        Self {
            state: MergeState::default(),
            logger,
            show_log: false,
            command_tx,
            update_rx,
            progress: None,
            _tokio_handle: tokio_handle,
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped: Vec<_> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|file| file.path.clone())
                .collect()
        });

        if !dropped.is_empty() {
            let added = self.state.add_files(dropped);
            log::info!("Added {} dropped files", added);
        }
    }

    fn process_updates(&mut self, ctx: &egui::Context) {
        while let Ok(update) = self.update_rx.try_recv() {
            match update {
                PdfUpdate::Progress {
                    operation,
                    current,
                    total,
                } => {
                    self.progress = Some(ProgressState {
                        operation,
                        current,
                        total,
                    });
                    ctx.request_repaint();
                }
                PdfUpdate::MergeComplete { path, page_count } => {
                    self.progress = None;
                    self.state.merging = false;
                    log::info!("Wrote {} pages to {}", page_count, path.display());
                    self.state
                        .push_notice(NoticeKind::Info, "Files merged successfully");
                }
                PdfUpdate::PreviewRendered {
                    width,
                    height,
                    rgba_data,
                    item_count,
                } => {
                    let color_image =
                        egui::ColorImage::from_rgba_unmultiplied([width, height], &rgba_data);

                    if let Some(texture) = &mut self.state.preview_texture {
                        texture.set(color_image, egui::TextureOptions::default());
                    } else {
                        self.state.preview_texture = Some(ctx.load_texture(
                            "merge_preview",
                            color_image,
                            egui::TextureOptions::default(),
                        ));
                    }
                    self.state.preview_item_count = item_count;
                    self.state.preview_pending = false;
                    self.progress = None;
                }
                PdfUpdate::PreviewCleared => {
                    self.progress = None;
                    self.state.preview_texture = None;
                    self.state.preview_item_count = 0;
                    self.state.preview_pending = false;
                }
                PdfUpdate::ConfigSaved { path } => {
                    self.state.push_notice(
                        NoticeKind::Info,
                        format!("Layout saved to {}", path.display()),
                    );
                }
                PdfUpdate::ConfigLoaded { options } => {
                    self.state.apply_loaded(options);
                }
                PdfUpdate::StatsCalculated { stats } => {
                    self.state.stats = Some(stats);
                }
                PdfUpdate::Warning { message } => {
                    self.state.push_notice(NoticeKind::Warning, message);
                }
                PdfUpdate::MergeFailed { message } => {
                    self.progress = None;
                    self.state.merge_failed(message);
                }
                PdfUpdate::Error { message } => {
                    self.progress = None;
                    self.state.report_error(message);
                }
            }
        }
    }

    fn show_status_bar(&mut self, ui: &mut egui::Ui) {
        match &self.progress {
            Some(progress) => {
                ui.add(
                    egui::ProgressBar::new(progress.current as f32 / progress.total.max(1) as f32)
                        .text(progress.operation.clone())
                        .show_percentage(),
                );
                ui.ctx().request_repaint(); // Keep updating during operations
            }
            None => {
                ui.add(
                    egui::ProgressBar::new(self.state.idle_fill()).text(self.state.idle_text()),
                );
            }
        }

        ui.horizontal(|ui| {
            ui.toggle_value(&mut self.show_log, "Log");
            if let Some(message) = self.logger.latest_message() {
                ui.label(message);
            }
        });

        if self.show_log {
            self.show_log_entries(ui);
        }
    }

    fn show_log_entries(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.small_button("Clear").clicked() {
                self.logger.clear();
            }
        });

        egui::ScrollArea::vertical()
            .max_height(150.0)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for entry in self.logger.get_entries() {
                    ui.label(format!(
                        "{} [{}] {}",
                        entry.timestamp.format("%H:%M:%S"),
                        entry.level,
                        entry.message
                    ));
                }
            });
    }
}

impl eframe::App for PdfGridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);
        self.process_updates(ctx);

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            self.show_status_bar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            show_merge(ctx, ui, &mut self.state, &self.command_tx);
        });

        // The worker cannot wake the UI, so poll for its updates
        let busy = self.state.merging || self.state.preview_pending;
        let poll_interval = if busy { 100 } else { 250 };
        ctx.request_repaint_after(std::time::Duration::from_millis(poll_interval));
    }
}
