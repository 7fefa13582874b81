pub mod chrome;

use std::sync::Arc;

use eframe::egui::{self, Galley};

use crate::deck::{Block, Layout, Slide};
use crate::theme::Theme;

const REF_WIDTH: f32 = 1920.0;
const REF_HEIGHT: f32 = 1080.0;
const MAX_CONTENT_WIDTH: f32 = 1400.0;
const CARDS_PER_ROW: usize = 3;

/// A screen area that reacts to the cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct Hotspot {
    pub rect: egui::Rect,
    pub kind: HotspotKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum HotspotKind {
    Card,
    Skill,
    Link(String),
}

/// The hotspot under `pos`, topmost (last drawn) first.
pub fn hotspot_at(hotspots: &[Hotspot], pos: egui::Pos2) -> Option<&Hotspot> {
    hotspots.iter().rev().find(|h| h.rect.contains(pos))
}

pub fn compute_scale(rect: egui::Rect) -> f32 {
    (rect.width() / REF_WIDTH).min(rect.height() / REF_HEIGHT)
}

/// A block laid out but not yet placed. Rects are relative to the piece's
/// top-left corner.
enum Piece {
    Text {
        galley: Arc<Galley>,
        color: egui::Color32,
    },
    Cards {
        cards: Vec<CardPiece>,
        height: f32,
    },
    Chips {
        chips: Vec<(egui::Rect, Arc<Galley>)>,
        height: f32,
    },
    Button {
        galley: Arc<Galley>,
        size: egui::Vec2,
        url: String,
    },
}

struct CardPiece {
    rect: egui::Rect,
    title: Option<Arc<Galley>>,
    body: Arc<Galley>,
}

impl Piece {
    fn height(&self) -> f32 {
        match self {
            Piece::Text { galley, .. } => galley.size().y,
            Piece::Cards { height, .. } | Piece::Chips { height, .. } => *height,
            Piece::Button { size, .. } => size.y,
        }
    }
}

/// Draw one slide into `rect` and return its hotspots in screen coordinates.
pub fn render_slide(
    ui: &egui::Ui,
    slide: &Slide,
    theme: &Theme,
    rect: egui::Rect,
    scale: f32,
) -> Vec<Hotspot> {
    let padding = 120.0 * scale;
    let content_rect = rect.shrink(padding);
    let width = content_rect.width().min(MAX_CONTENT_WIDTH * scale);
    let left = content_rect.center().x - width / 2.0;
    let gap = theme.body_size * 0.8 * scale;

    let pieces = layout_blocks(ui, &slide.blocks, theme, width, scale, slide.layout);
    let total: f32 = pieces.iter().map(Piece::height).sum::<f32>()
        + gap * pieces.len().saturating_sub(1) as f32;

    let mut y = match slide.layout {
        Layout::Hero => (content_rect.center().y - total / 2.0).max(content_rect.top()),
        Layout::Cards | Layout::Content => content_rect.top(),
    };
    let centered = slide.layout == Layout::Hero;

    let painter = ui.painter();
    let mut hotspots = Vec::new();

    for piece in pieces {
        let height = piece.height();
        match piece {
            Piece::Text { galley, color } => {
                let x = if centered {
                    content_rect.center().x - galley.size().x / 2.0
                } else {
                    left
                };
                painter.galley(egui::pos2(x, y), galley, color);
            }
            Piece::Cards { cards, .. } => {
                let origin = egui::vec2(left, y);
                for card in cards {
                    let card_rect = card.rect.translate(origin);
                    draw_glass(painter, theme, card_rect, 18.0 * scale);
                    let inner = card_rect.shrink(28.0 * scale);
                    let mut text_y = inner.top();
                    if let Some(title) = card.title {
                        let h = title.size().y;
                        painter.galley(egui::pos2(inner.left(), text_y), title, theme.heading_color);
                        text_y += h + 12.0 * scale;
                    }
                    painter.galley(egui::pos2(inner.left(), text_y), card.body, theme.foreground);
                    hotspots.push(Hotspot {
                        rect: card_rect,
                        kind: HotspotKind::Card,
                    });
                }
            }
            Piece::Chips { chips, .. } => {
                let origin = egui::vec2(left, y);
                for (chip, galley) in chips {
                    let chip_rect = chip.translate(origin);
                    draw_glass(painter, theme, chip_rect, chip_rect.height() / 2.0);
                    let text_pos = chip_rect.center() - galley.size() / 2.0;
                    painter.galley(text_pos, galley, theme.foreground);
                    hotspots.push(Hotspot {
                        rect: chip_rect,
                        kind: HotspotKind::Skill,
                    });
                }
            }
            Piece::Button { galley, size, url } => {
                let x = if centered {
                    content_rect.center().x - size.x / 2.0
                } else {
                    left
                };
                let button_rect = egui::Rect::from_min_size(egui::pos2(x, y), size);
                painter.rect_stroke(
                    button_rect,
                    size.y / 2.0,
                    egui::Stroke::new(2.0 * scale, theme.accent),
                    egui::StrokeKind::Inside,
                );
                let text_pos = button_rect.center() - galley.size() / 2.0;
                painter.galley(text_pos, galley, theme.accent);
                hotspots.push(Hotspot {
                    rect: button_rect,
                    kind: HotspotKind::Link(url),
                });
            }
        }
        y += height + gap;
    }

    hotspots
}

fn layout_blocks(
    ui: &egui::Ui,
    blocks: &[Block],
    theme: &Theme,
    width: f32,
    scale: f32,
    layout: Layout,
) -> Vec<Piece> {
    let painter = ui.painter();
    let mut pieces = Vec::new();
    let mut pending_cards: Vec<(Option<&str>, &str)> = Vec::new();

    for block in blocks {
        if let Block::Card { title, body } = block {
            pending_cards.push((title.as_deref(), body.as_str()));
            continue;
        }
        if !pending_cards.is_empty() {
            pieces.extend(layout_cards(ui, &pending_cards, theme, width, scale, layout));
            pending_cards.clear();
        }

        match block {
            Block::Heading { level, text } => {
                let size = theme.heading_size(*level) * scale;
                let color = if *level == 1 {
                    theme.heading_color
                } else {
                    theme.accent
                };
                let galley = painter.layout(
                    text.clone(),
                    egui::FontId::proportional(size),
                    color,
                    width,
                );
                pieces.push(Piece::Text { galley, color });
            }
            Block::Paragraph { text } => {
                let galley = painter.layout(
                    text.clone(),
                    egui::FontId::proportional(theme.body_size * scale),
                    theme.foreground,
                    width,
                );
                pieces.push(Piece::Text {
                    galley,
                    color: theme.foreground,
                });
            }
            Block::Skills { items } => pieces.push(layout_chips(ui, items, theme, width, scale)),
            Block::Link { label, url } => {
                let galley = painter.layout_no_wrap(
                    label.clone(),
                    egui::FontId::proportional(theme.body_size * 0.75 * scale),
                    theme.accent,
                );
                let size = galley.size() + egui::vec2(64.0, 32.0) * scale;
                pieces.push(Piece::Button {
                    galley,
                    size,
                    url: url.clone(),
                });
            }
            Block::Card { .. } => {}
        }
    }

    if !pending_cards.is_empty() {
        pieces.extend(layout_cards(ui, &pending_cards, theme, width, scale, layout));
    }

    pieces
}

/// Lay out a run of consecutive cards. Card slides put up to three side by
/// side; elsewhere each card takes the full width.
fn layout_cards(
    ui: &egui::Ui,
    cards: &[(Option<&str>, &str)],
    theme: &Theme,
    width: f32,
    scale: f32,
    layout: Layout,
) -> Vec<Piece> {
    let painter = ui.painter();
    let per_row = if layout == Layout::Cards {
        CARDS_PER_ROW
    } else {
        1
    };
    let gap = 32.0 * scale;
    let pad = 28.0 * scale;

    cards
        .chunks(per_row)
        .map(|row| {
            let count = row.len() as f32;
            let card_width = (width - gap * (count - 1.0)) / count;
            let text_width = (card_width - pad * 2.0).max(1.0);

            let laid_out: Vec<(Option<Arc<Galley>>, Arc<Galley>)> = row
                .iter()
                .map(|(title, body)| {
                    let title = title.map(|t| {
                        painter.layout(
                            t.to_string(),
                            egui::FontId::proportional(theme.h3_size * 0.8 * scale),
                            theme.heading_color,
                            text_width,
                        )
                    });
                    let body = painter.layout(
                        body.to_string(),
                        egui::FontId::proportional(theme.body_size * 0.7 * scale),
                        theme.foreground,
                        text_width,
                    );
                    (title, body)
                })
                .collect();

            let height = laid_out
                .iter()
                .map(|(title, body)| {
                    let title_h = title
                        .as_ref()
                        .map(|t| t.size().y + 12.0 * scale)
                        .unwrap_or(0.0);
                    pad * 2.0 + title_h + body.size().y
                })
                .fold(0.0, f32::max);

            let cards = laid_out
                .into_iter()
                .enumerate()
                .map(|(i, (title, body))| CardPiece {
                    rect: egui::Rect::from_min_size(
                        egui::pos2(i as f32 * (card_width + gap), 0.0),
                        egui::vec2(card_width, height),
                    ),
                    title,
                    body,
                })
                .collect();

            Piece::Cards { cards, height }
        })
        .collect()
}

/// Flow skill chips left to right, wrapping onto new rows.
fn layout_chips(ui: &egui::Ui, items: &[String], theme: &Theme, width: f32, scale: f32) -> Piece {
    let painter = ui.painter();
    let pad = egui::vec2(28.0, 14.0) * scale;
    let gap = 16.0 * scale;

    let mut chips = Vec::with_capacity(items.len());
    let mut x = 0.0;
    let mut y = 0.0;
    let mut row_height: f32 = 0.0;

    for item in items {
        let galley = painter.layout_no_wrap(
            item.clone(),
            egui::FontId::proportional(theme.body_size * 0.8 * scale),
            theme.foreground,
        );
        let size = galley.size() + pad * 2.0;
        if x > 0.0 && x + size.x > width {
            x = 0.0;
            y += row_height + gap;
            row_height = 0.0;
        }
        chips.push((
            egui::Rect::from_min_size(egui::pos2(x, y), size),
            galley,
        ));
        x += size.x + gap;
        row_height = row_height.max(size.y);
    }

    Piece::Chips {
        chips,
        height: y + row_height,
    }
}

fn draw_glass(painter: &egui::Painter, theme: &Theme, rect: egui::Rect, radius: f32) {
    painter.rect_filled(rect, radius, theme.glass_fill);
    painter.rect_stroke(
        rect,
        radius,
        egui::Stroke::new(1.0, theme.glass_stroke),
        egui::StrokeKind::Inside,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spot(x: f32, kind: HotspotKind) -> Hotspot {
        Hotspot {
            rect: egui::Rect::from_min_size(egui::pos2(x, 0.0), egui::vec2(100.0, 50.0)),
            kind,
        }
    }

    #[test]
    fn test_hotspot_lookup() {
        let spots = vec![
            spot(0.0, HotspotKind::Card),
            spot(200.0, HotspotKind::Link("https://example.com".into())),
        ];
        assert_eq!(
            hotspot_at(&spots, egui::pos2(10.0, 10.0)).map(|h| &h.kind),
            Some(&HotspotKind::Card)
        );
        assert!(matches!(
            hotspot_at(&spots, egui::pos2(250.0, 25.0)).map(|h| &h.kind),
            Some(HotspotKind::Link(_))
        ));
        assert!(hotspot_at(&spots, egui::pos2(150.0, 25.0)).is_none());
    }

    #[test]
    fn test_overlapping_hotspots_prefer_last_drawn() {
        let spots = vec![spot(0.0, HotspotKind::Card), spot(50.0, HotspotKind::Skill)];
        assert_eq!(
            hotspot_at(&spots, egui::pos2(75.0, 10.0)).map(|h| &h.kind),
            Some(&HotspotKind::Skill)
        );
    }

    #[test]
    fn test_scale_fits_reference_size() {
        let full = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(1920.0, 1080.0));
        assert_eq!(compute_scale(full), 1.0);
        let wide = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(3840.0, 1080.0));
        assert_eq!(compute_scale(wide), 1.0);
        let half = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(960.0, 540.0));
        assert_eq!(compute_scale(half), 0.5);
    }
}
