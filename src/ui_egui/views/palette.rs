use egui::Color32;

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |c1: u8, c2: u8| -> u8 { ((c1 as f32 * (1.0 - t)) + (c2 as f32 * t)).round() as u8 };
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}

#[derive(Clone, Copy)]
pub(crate) struct RangeCellPalette {
    pub accent: Color32,
    pub band: Color32,
    pub text: Color32,
    pub selected_text: Color32,
    pub hover_ring: Color32,
}

impl RangeCellPalette {
    pub fn new(accent: (u8, u8, u8), visuals: &egui::Visuals) -> Self {
        let accent = Color32::from_rgb(accent.0, accent.1, accent.2);
        Self {
            accent,
            band: blend(visuals.panel_fill, accent, if visuals.dark_mode { 0.45 } else { 0.3 }),
            text: visuals.text_color(),
            selected_text: Color32::WHITE,
            hover_ring: with_alpha(accent, if visuals.dark_mode { 200 } else { 150 }),
        }
    }
}
