use eframe::egui;

use crate::controller::Progress;
use crate::theme::Theme;

const RING_RADIUS: f32 = 20.0;
const DOT_RADIUS: f32 = 4.0;

/// Thin bar along the top edge. `fraction` is 0..=1.
pub fn draw_progress_bar(ui: &egui::Ui, theme: &Theme, rect: egui::Rect, fraction: f32, scale: f32) {
    let height = (4.0 * scale).max(2.0);
    let track = egui::Rect::from_min_size(rect.left_top(), egui::vec2(rect.width(), height));
    ui.painter().rect_filled(track, 0.0, theme.glass_fill);

    let bar = egui::Rect::from_min_size(
        rect.left_top(),
        egui::vec2(rect.width() * fraction.clamp(0.0, 1.0), height),
    );
    ui.painter().rect_filled(bar, 0.0, theme.accent);
}

/// "current / total" in the bottom-right corner.
pub fn draw_counter(ui: &egui::Ui, theme: &Theme, rect: egui::Rect, progress: Progress, scale: f32) {
    let color = Theme::with_opacity(theme.muted, 0.9);
    let galley = ui.painter().layout_no_wrap(
        progress.label(),
        egui::FontId::monospace(18.0 * scale),
        color,
    );
    let pos = egui::pos2(
        rect.right() - galley.size().x - 32.0 * scale,
        rect.bottom() - galley.size().y - 28.0 * scale,
    );
    ui.painter().galley(pos, galley, color);
}

/// Draw the trailing ring and the exact dot. The painter should sit on a
/// foreground layer so both stay above slide content.
pub fn draw_cursor(
    painter: &egui::Painter,
    theme: &Theme,
    dot: Option<egui::Pos2>,
    ring: Option<egui::Pos2>,
    ring_scale: f32,
    hovered: bool,
) {
    if let Some(center) = ring {
        let fill = if hovered {
            theme.hover_tint
        } else {
            egui::Color32::TRANSPARENT
        };
        painter.circle(
            center,
            RING_RADIUS * ring_scale,
            fill,
            egui::Stroke::new(2.0, Theme::with_opacity(theme.accent, 0.5)),
        );
    }
    if let Some(center) = dot {
        painter.circle_filled(center, DOT_RADIUS, theme.accent);
    }
}
