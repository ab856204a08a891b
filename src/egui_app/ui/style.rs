use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

/// Colors for one theme.
#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,
    pub panel_outline: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub positive: Color32,
    pub positive_bg: Color32,
    pub negative: Color32,
    pub negative_bg: Color32,
    pub warning: Color32,
    pub bar_track: Color32,
    pub bar_fill: Color32,
}

/// Palette for the requested scheme.
pub fn palette(dark: bool) -> Palette {
    if dark { dark_palette() } else { light_palette() }
}

fn dark_palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(10, 10, 12),
        bg_secondary: Color32::from_rgb(26, 28, 30),
        bg_tertiary: Color32::from_rgb(42, 44, 48),
        panel_outline: Color32::from_rgb(38, 42, 48),
        text_primary: Color32::from_rgb(185, 192, 200),
        text_muted: Color32::from_rgb(140, 146, 155),
        accent: Color32::from_rgb(167, 217, 255),
        positive: Color32::from_rgb(102, 176, 136),
        positive_bg: Color32::from_rgb(22, 44, 32),
        negative: Color32::from_rgb(198, 143, 143),
        negative_bg: Color32::from_rgb(52, 26, 28),
        warning: Color32::from_rgb(200, 128, 96),
        bar_track: Color32::from_rgb(30, 32, 36),
        bar_fill: Color32::from_rgb(167, 217, 255),
    }
}

fn light_palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(255, 255, 255),
        bg_secondary: Color32::from_rgb(250, 250, 250),
        bg_tertiary: Color32::from_rgb(238, 239, 241),
        panel_outline: Color32::from_rgb(222, 224, 228),
        text_primary: Color32::from_rgb(28, 30, 33),
        text_muted: Color32::from_rgb(102, 102, 102),
        accent: Color32::from_rgb(47, 111, 177),
        positive: Color32::from_rgb(12, 122, 67),
        positive_bg: Color32::from_rgb(230, 255, 237),
        negative: Color32::from_rgb(176, 0, 32),
        negative_bg: Color32::from_rgb(255, 236, 236),
        warning: Color32::from_rgb(179, 107, 0),
        bar_track: Color32::from_rgb(229, 231, 235),
        bar_fill: Color32::from_rgb(47, 111, 177),
    }
}

/// Apply the palette on top of the stock visuals.
pub fn apply_visuals(visuals: &mut Visuals, palette: Palette) {
    visuals.window_fill = palette.bg_primary;
    visuals.panel_fill = palette.bg_primary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.hyperlink_color = palette.accent;
    visuals.extreme_bg_color = palette.bg_secondary;
    visuals.faint_bg_color = palette.bg_secondary;
    visuals.error_fg_color = palette.negative;
    visuals.warn_fg_color = palette.warning;
    visuals.selection.bg_fill = palette.bar_track;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent);
    visuals.widgets.noninteractive.bg_fill = palette.bg_secondary;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    set_rectilinear(&mut visuals.widgets.inactive, palette);
    set_rectilinear(&mut visuals.widgets.hovered, palette);
    set_rectilinear(&mut visuals.widgets.active, palette);
    set_rectilinear(&mut visuals.widgets.open, palette);
    visuals.window_corner_radius = CornerRadius::ZERO;
    visuals.menu_corner_radius = CornerRadius::ZERO;
    visuals.popup_shadow = Shadow::NONE;
    visuals.button_frame = true;
}

fn set_rectilinear(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::ZERO;
    vis.bg_fill = palette.bg_tertiary;
    vis.weak_bg_fill = palette.bg_secondary;
    vis.bg_stroke = Stroke::new(1.0, palette.panel_outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}
