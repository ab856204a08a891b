use eframe::egui::{self, Frame, Margin, RichText, Stroke};

use super::EguiApp;
use crate::egui_app::state::AnalysisPhase;

impl EguiApp {
    /// Render the input form, the inline error banner, and the result card.
    pub(super) fn render_analyzer(&mut self, ui: &mut egui::Ui) {
        let palette = self.effective_palette();

        ui.add_space(8.0);
        ui.label(
            RichText::new("Paste a review below and click Analyze.").color(palette.text_muted),
        );
        ui.add_space(6.0);

        let input_response = ui.add(
            egui::TextEdit::multiline(&mut self.controller.ui.analyzer.input)
                .desired_rows(12)
                .desired_width(f32::INFINITY)
                .hint_text(
                    "Paste multi-paragraph text here. Quotes \"like this\" and blank lines are OK.",
                ),
        );
        if input_response.changed() {
            self.controller.note_input_edited();
        }

        ui.add_space(4.0);
        let loading = self.controller.ui.analyzer.phase.is_loading();
        let over_limit = self.controller.input_over_limit();
        ui.horizontal(|ui| {
            let count = self.controller.input_char_count();
            let limit = self.controller.settings.max_input_chars;
            let counter_color = if over_limit {
                palette.negative
            } else {
                palette.text_muted
            };
            ui.label(
                RichText::new(format!("{count} / {limit} chars"))
                    .color(counter_color)
                    .small(),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = if loading { "Analyzing..." } else { "Analyze" };
                let analyze =
                    ui.add_enabled(!loading && !over_limit, egui::Button::new(label));
                if analyze.clicked() {
                    self.controller.analyze();
                }
                if ui
                    .add_enabled(!loading, egui::Button::new("Clear"))
                    .clicked()
                {
                    self.controller.clear();
                }
                if loading {
                    ui.add(egui::Spinner::new());
                }
            });
        });

        match self.controller.ui.analyzer.phase.clone() {
            AnalysisPhase::Failure(message) => self.render_error_banner(ui, &message),
            AnalysisPhase::Success(response) => self.render_result_card(ui, &response),
            AnalysisPhase::Idle | AnalysisPhase::Loading => {}
        }
    }

    fn render_error_banner(&mut self, ui: &mut egui::Ui, message: &str) {
        let palette = self.effective_palette();
        ui.add_space(12.0);
        Frame::new()
            .fill(palette.negative_bg)
            .stroke(Stroke::new(1.0, palette.negative))
            .inner_margin(Margin::symmetric(12, 8))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                // Message rendered verbatim; embedded newlines survive.
                ui.label(RichText::new(message).color(palette.negative));
            });
    }
}
