//! egui renderer for the application UI.

mod analyzer_panel;
mod result_card;
mod style;

use eframe::egui::{self, Frame, Margin, RichText};

use crate::egui_app::controller::EguiController;

/// Smallest usable window size.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::Vec2::new(560.0, 480.0);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: EguiController,
    applied_dark: Option<bool>,
}

impl EguiApp {
    /// Create a new egui app, loading persisted configuration.
    ///
    /// The theme is resolved and applied here, before the first frame is
    /// painted, so the window never flashes the wrong palette.
    pub fn new(ctx: &egui::Context) -> Result<Self, String> {
        let mut controller = EguiController::new();
        controller
            .load_configuration()
            .map_err(|err| format!("Failed to load config: {err}"))?;
        let mut app = Self {
            controller,
            applied_dark: None,
        };
        app.apply_visuals(ctx);
        Ok(app)
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        let dark = self.controller.effective_dark(system_dark(ctx));
        if self.applied_dark == Some(dark) {
            return;
        }
        let mut visuals = if dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        style::apply_visuals(&mut visuals, style::palette(dark));
        ctx.set_visuals(visuals);
        self.applied_dark = Some(dark);
    }

    fn effective_palette(&self) -> style::Palette {
        style::palette(self.applied_dark.unwrap_or(true))
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        let palette = self.effective_palette();
        egui::TopBottomPanel::top("top_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_secondary)
                    .inner_margin(Margin::symmetric(12, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(RichText::new("Sentiview").color(palette.text_primary));
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(&self.controller.settings.api_base_url)
                            .color(palette.text_muted)
                            .monospace(),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let label = if self.applied_dark.unwrap_or(true) {
                            "Dark"
                        } else {
                            "Light"
                        };
                        let response = ui
                            .button(RichText::new(label).color(palette.text_primary))
                            .on_hover_text("Toggle dark mode");
                        if response.clicked() {
                            self.controller.toggle_theme(system_dark(ctx));
                        }
                    });
                });
            });
    }
}

fn system_dark(ctx: &egui::Context) -> Option<bool> {
    ctx.input(|i| i.raw.system_theme.map(|theme| theme == egui::Theme::Dark))
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.poll_background_jobs();
        if ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::Enter)) {
            self.controller.analyze();
        }
        self.render_top_bar(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("analyzer_scroll")
                .show(ui, |ui| {
                    self.render_analyzer(ui);
                });
        });
        if self.controller.ui.analyzer.phase.is_loading() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
