use eframe::egui::{self, Frame, Margin, RichText, Stroke};

use super::EguiApp;
use super::style::Palette;
use crate::egui_app::view_model;
use crate::predict::PredictionResponse;

const BAR_WIDTH: f32 = 220.0;
const BAR_HEIGHT: f32 = 10.0;

impl EguiApp {
    /// Render the stored prediction: label pill, score and latency, optional
    /// probability breakdown, truncation notice, and trace identifiers.
    pub(super) fn render_result_card(&mut self, ui: &mut egui::Ui, response: &PredictionResponse) {
        let palette = self.effective_palette();
        ui.add_space(16.0);
        Frame::new()
            .fill(palette.bg_secondary)
            .stroke(Stroke::new(1.0, palette.panel_outline))
            .inner_margin(Margin::same(12))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.horizontal(|ui| {
                    render_label_pill(ui, &palette, &response.label);
                    ui.add_space(8.0);
                    ui.label(RichText::new("score:").color(palette.text_muted));
                    ui.label(
                        RichText::new(view_model::format_score(response.score))
                            .color(palette.text_primary)
                            .strong(),
                    );
                    ui.label(RichText::new("•").color(palette.text_muted));
                    ui.label(RichText::new("latency:").color(palette.text_muted));
                    ui.label(
                        RichText::new(view_model::format_latency_ms(response.latency_ms))
                            .color(palette.text_primary)
                            .strong(),
                    );
                });

                let rows = view_model::prob_rows(response);
                if !rows.is_empty() {
                    ui.add_space(8.0);
                    egui::Grid::new("prob_rows")
                        .num_columns(3)
                        .spacing(egui::vec2(12.0, 4.0))
                        .show(ui, |ui| {
                            for row in &rows {
                                ui.label(RichText::new(&row.class).color(palette.text_primary));
                                render_prob_bar(ui, &palette, row.fill);
                                ui.label(
                                    RichText::new(&row.value_text)
                                        .color(palette.text_primary)
                                        .monospace(),
                                );
                                ui.end_row();
                            }
                        });
                }

                if response.truncated == Some(true) {
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new("Note: input was truncated to the model's maximum length.")
                            .color(palette.warning),
                    );
                }

                ui.add_space(12.0);
                ui.label(
                    RichText::new(format!(
                        "request: {} • model: {} • version: {}",
                        response.request_id, response.model_backend, response.model_version
                    ))
                    .color(palette.text_muted)
                    .small(),
                );
            });
    }
}

fn render_label_pill(ui: &mut egui::Ui, palette: &Palette, label: &str) {
    let (fill, text_color) = if view_model::label_is_positive(label) {
        (palette.positive_bg, palette.positive)
    } else {
        (palette.negative_bg, palette.negative)
    };
    Frame::new()
        .fill(fill)
        .inner_margin(Margin::symmetric(10, 4))
        .show(ui, |ui| {
            ui.label(RichText::new(label).color(text_color).strong());
        });
}

/// Draw the probability bar; only the fill width is clamped, the printed
/// value next to it is not.
fn render_prob_bar(ui: &mut egui::Ui, palette: &Palette, fill: f32) {
    let (rect, _) =
        ui.allocate_exact_size(egui::vec2(BAR_WIDTH, BAR_HEIGHT), egui::Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, 0.0, palette.bar_track);
    let fill_rect = egui::Rect::from_min_size(rect.min, egui::vec2(rect.width() * fill, rect.height()));
    painter.rect_filled(fill_rect, 0.0, palette.bar_fill);
}
