//! Helpers to convert prediction data into egui-facing view structs.

use crate::predict::PredictionResponse;

/// One row of the probability breakdown.
#[derive(Clone, Debug, PartialEq)]
pub struct ProbRowView {
    /// Class name as sent by the service.
    pub class: String,
    /// Printed value; intentionally NOT clamped.
    pub value_text: String,
    /// Bar width fraction, clamped into [0, 1] for drawing only.
    pub fill: f32,
}

/// Format the model score the way the result card prints it.
pub fn format_score(score: f64) -> String {
    format!("{score:.3}")
}

/// Format the server-measured latency with its unit.
pub fn format_latency_ms(latency_ms: f64) -> String {
    format!("{} ms", latency_ms.round() as i64)
}

/// Format one probability value for display.
pub fn format_probability(value: f64) -> String {
    format!("{value:.4}")
}

/// True when the label gets the positive accent treatment.
///
/// Everything that is not exactly `"positive"` shares the other accent;
/// unknown labels are displayed as-is.
pub fn label_is_positive(label: &str) -> bool {
    label == "positive"
}

/// Build display rows for the probability breakdown, highest first.
///
/// Wire order is not guaranteed, so rows are sorted by descending raw value
/// (class name breaks ties) before formatting.
pub fn prob_rows(response: &PredictionResponse) -> Vec<ProbRowView> {
    let Some(probs) = &response.probs else {
        return Vec::new();
    };
    let mut entries: Vec<(&String, f64)> = probs.iter().map(|(k, v)| (k, *v)).collect();
    entries.sort_by(|(a_class, a_value), (b_class, b_value)| {
        b_value
            .partial_cmp(a_value)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a_class.cmp(b_class))
    });
    entries
        .into_iter()
        .map(|(class, value)| ProbRowView {
            class: class.clone(),
            value_text: format_probability(value),
            fill: value.clamp(0.0, 1.0) as f32,
        })
        .collect()
}
