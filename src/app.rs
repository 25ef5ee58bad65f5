//! Main application module for Quartz
//!
//! This module implements the eframe App trait for the main application:
//! the option form, the live preview, the export actions, and the per-frame
//! pipeline polling that applies finished regenerations.

use crate::export::{self, ExportFormat, ExportOutcome, ExportRequest, ExportSink};
use crate::qr::{GeneratorPipeline, MAX_SYMBOL_SIZE, MIN_SYMBOL_SIZE};
use crate::state::{AppState, ToastSeverity};
use crate::ui::{color_field, PreviewPane};
use eframe::egui;
use log::{debug, info, warn};

/// The main application struct that holds all state and implements eframe::App.
pub struct QuartzApp {
    /// Central application state
    state: AppState,
    /// Regeneration pipeline owning the cached vector markup
    pipeline: GeneratorPipeline,
    /// Preview pane owning the preview texture
    preview: PreviewPane,
    /// Application start time for timing toast messages
    start_time: std::time::Instant,
    /// Last known window size (for detecting changes)
    last_window_size: Option<egui::Vec2>,
    /// Last known window position (for detecting changes)
    last_window_pos: Option<egui::Pos2>,
    /// Last time a settings save was attempted (for debouncing)
    last_save_attempt: std::time::Instant,
}

impl QuartzApp {
    /// Create a new QuartzApp instance.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        info!("Initializing Quartz");

        Self {
            state: AppState::new(),
            pipeline: GeneratorPipeline::new(),
            preview: PreviewPane::new(),
            start_time: std::time::Instant::now(),
            last_window_size: None,
            last_window_pos: None,
            last_save_attempt: std::time::Instant::now(),
        }
    }

    /// Get elapsed time since app start in seconds.
    fn get_app_time(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }

    /// Kick off a regeneration from the current options.
    fn regenerate(&mut self) {
        self.pipeline.request(self.state.options.snapshot());
    }

    /// Update window size in settings if changed.
    fn update_window_state(&mut self, ctx: &egui::Context) {
        let mut changed = false;

        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                let current_size = rect.size();
                let current_pos = rect.min;

                let size_changed = self
                    .last_window_size
                    .map(|s| (s - current_size).length() > 1.0)
                    .unwrap_or(true);

                let pos_changed = self
                    .last_window_pos
                    .map(|p| (p - current_pos).length() > 1.0)
                    .unwrap_or(true);

                if size_changed || pos_changed {
                    self.last_window_size = Some(current_size);
                    self.last_window_pos = Some(current_pos);
                    changed = true;
                }
            }
        });

        if changed {
            if let (Some(size), Some(pos)) = (self.last_window_size, self.last_window_pos) {
                let maximized = ctx.input(|i| i.viewport().maximized.unwrap_or(false));

                self.state.settings.window_size = crate::config::WindowSize {
                    width: size.x,
                    height: size.y,
                    x: Some(pos.x),
                    y: Some(pos.y),
                    maximized,
                };
                self.state.mark_settings_dirty();
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Export Handling
    // ─────────────────────────────────────────────────────────────────────────

    /// Run one export request and map its outcome to at most one toast.
    fn handle_export(&mut self, request: ExportRequest) {
        let outcome = export::execute(
            request,
            self.pipeline.markup(),
            self.state.options.size(),
            self.state.settings.last_export_directory.as_ref(),
        );

        let time = self.get_app_time();
        match outcome {
            ExportOutcome::Done { message, path } => {
                if let Some(path) = path {
                    if let Some(parent) = path.parent() {
                        self.state.settings.last_export_directory = Some(parent.to_path_buf());
                        self.state.mark_settings_dirty();
                    }
                    if self.state.settings.open_after_export {
                        if let Err(e) = open::that(&path) {
                            warn!("Failed to open exported file: {}", e);
                        }
                    }
                }
                self.state.show_toast(message, ToastSeverity::Info, time, 2.5);
            }
            ExportOutcome::Failed(message) => {
                self.state
                    .show_toast(message, ToastSeverity::Error, time, 3.0);
            }
            ExportOutcome::Cancelled => {
                debug!("Export cancelled: {}", request.action_label());
            }
            ExportOutcome::NothingToExport => {
                debug!("Nothing to export yet");
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Panels
    // ─────────────────────────────────────────────────────────────────────────

    /// The option form: payload, size, and the two color fields.
    fn show_form(&mut self, ui: &mut egui::Ui) {
        let mut style_changed = false;

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Target").strong());
            let mut payload = self.state.options.payload().to_owned();
            let response = ui.add(
                egui::TextEdit::singleline(&mut payload)
                    .hint_text("URL")
                    .desired_width(f32::INFINITY),
            );
            if response.changed() {
                self.state.options.set_payload(payload);
                style_changed = true;
            }
        });

        ui.add_space(8.0);

        // Size is a display/export dimension; moving it never re-encodes
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Size").strong());
            let mut size = self.state.options.size();
            let slider = ui.add(egui::Slider::new(
                &mut size,
                MIN_SYMBOL_SIZE..=MAX_SYMBOL_SIZE,
            ));
            let drag = ui.add(
                egui::DragValue::new(&mut size)
                    .range(MIN_SYMBOL_SIZE..=MAX_SYMBOL_SIZE)
                    .suffix(" px"),
            );
            if slider.changed() || drag.changed() {
                self.state.options.set_size(size);
            }
        });

        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if color_field(ui, "Foreground", self.state.options.foreground_mut()) {
                style_changed = true;
            }
            ui.add_space(16.0);
            if color_field(ui, "Background", self.state.options.background_mut()) {
                style_changed = true;
            }
        });

        if style_changed {
            self.regenerate();
        }
    }

    /// The four export actions, grouped by format like the preview buttons.
    fn show_export_actions(&mut self, ui: &mut egui::Ui) {
        let mut requested = None;

        ui.horizontal(|ui| {
            for format in [ExportFormat::Svg, ExportFormat::Png] {
                ui.vertical(|ui| {
                    for sink in [ExportSink::Clipboard, ExportSink::File] {
                        let request = ExportRequest::new(format, sink);
                        if ui.button(request.action_label()).clicked() {
                            requested = Some(request);
                        }
                    }
                });
                ui.add_space(24.0);
            }
        });

        if let Some(request) = requested {
            self.handle_export(request);
        }
    }

    /// Status bar: symbol summary on the left, toast in the middle.
    fn show_status_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let summary = if self.pipeline.has_symbol() {
                format!("{0} × {0} px", self.state.options.size())
            } else {
                "No symbol yet".to_owned()
            };
            ui.label(summary);

            if let Some(toast) = self.state.ui.toast_message.clone() {
                let color = match self.state.ui.toast_severity {
                    ToastSeverity::Info => ui.visuals().text_color(),
                    ToastSeverity::Error => ui.visuals().error_fg_color,
                };
                ui.with_layout(
                    egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                    |ui| {
                        ui.label(egui::RichText::new(toast).italics().color(color));
                    },
                );
            }
        });
    }
}

impl eframe::App for QuartzApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply any finished regenerations before drawing this frame
        if self.pipeline.poll() {
            debug!("Symbol markup updated");
        }

        let time = self.get_app_time();
        self.state.update_toast(time);
        self.update_window_state(ctx);

        self.preview
            .update(ctx, self.pipeline.markup(), self.state.options.size());

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.show_status_bar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(12.0);
            self.show_form(ui);
            ui.add_space(12.0);
            self.preview.show(ui, self.state.options.size());
            ui.add_space(12.0);
            self.show_export_actions(ui);
        });

        // Keep the loop ticking while work or a toast is pending, so
        // completions and expiries land without waiting for user input
        if self.pipeline.in_flight() {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        } else if self.state.ui.toast_message.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }

        // Window drags mark settings dirty every frame; persist at most
        // every couple of seconds
        if self.last_save_attempt.elapsed() >= std::time::Duration::from_secs(2) {
            if self.state.save_settings_if_dirty() {
                debug!("Settings persisted");
            }
            self.last_save_attempt = std::time::Instant::now();
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.state.save_settings_if_dirty();
    }
}
