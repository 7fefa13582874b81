use eframe::egui::Color32;

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub background: Color32,
    pub foreground: Color32,
    pub heading_color: Color32,
    pub muted: Color32,
    /// Neon accent used by the progress bar, the cursor and button borders.
    pub accent: Color32,
    /// Fill of cards and skill chips.
    pub glass_fill: Color32,
    pub glass_stroke: Color32,
    /// Fill of the cursor ring while it hovers something interactive.
    pub hover_tint: Color32,
    pub h1_size: f32,
    pub h2_size: f32,
    pub h3_size: f32,
    pub body_size: f32,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            background: Color32::from_rgb(0x0A, 0x0A, 0x12),
            foreground: Color32::from_rgb(0xC9, 0xCD, 0xD8),
            heading_color: Color32::WHITE,
            muted: Color32::from_rgb(0x7A, 0x80, 0x90),
            accent: Color32::from_rgb(0x00, 0xF2, 0xFF),
            glass_fill: Color32::from_rgba_unmultiplied(0xFF, 0xFF, 0xFF, 0x0D),
            glass_stroke: Color32::from_rgba_unmultiplied(0xFF, 0xFF, 0xFF, 0x1F),
            hover_tint: Color32::from_rgba_unmultiplied(0x00, 0xF2, 0xFF, 0x1A),
            h1_size: 96.0,
            h2_size: 64.0,
            h3_size: 44.0,
            body_size: 32.0,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            background: Color32::from_rgb(0xF4, 0xF6, 0xFA),
            foreground: Color32::from_rgb(0x1A, 0x1A, 0x2E),
            heading_color: Color32::from_rgb(0x16, 0x21, 0x3E),
            muted: Color32::from_rgb(0x6B, 0x70, 0x80),
            accent: Color32::from_rgb(0x00, 0x8C, 0xA8),
            glass_fill: Color32::from_rgba_unmultiplied(0x00, 0x00, 0x00, 0x0A),
            glass_stroke: Color32::from_rgba_unmultiplied(0x00, 0x00, 0x00, 0x1F),
            hover_tint: Color32::from_rgba_unmultiplied(0x00, 0x8C, 0xA8, 0x1A),
            h1_size: 96.0,
            h2_size: 64.0,
            h3_size: 44.0,
            body_size: 32.0,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Apply opacity to a color
    pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        let alpha = (a as f32 * opacity.clamp(0.0, 1.0)) as u8;
        Color32::from_rgba_unmultiplied(r, g, b, alpha)
    }

    pub fn heading_size(&self, level: u8) -> f32 {
        match level {
            1 => self.h1_size,
            2 => self.h2_size,
            3 => self.h3_size,
            _ => self.body_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_defaults_to_dark() {
        assert_eq!(Theme::from_name("light").name, "light");
        assert_eq!(Theme::from_name("dark").name, "dark");
        assert_eq!(Theme::from_name("neon").name, "dark");
    }

    #[test]
    fn test_with_opacity_scales_alpha() {
        let c = Theme::with_opacity(Color32::WHITE, 0.5);
        assert_eq!(c.a(), 127);
        let clamped = Theme::with_opacity(Color32::WHITE, 3.0);
        assert_eq!(clamped.a(), 255);
    }
}
