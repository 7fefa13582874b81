use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use eframe::egui;
use tracing::{debug, info};

use crate::config::Config;
use crate::controller::{ControllerSettings, SlideController};
use crate::deck::{self, Deck};
use crate::input::{self, NavIntent};
use crate::render::{self, Hotspot, HotspotKind, chrome};
use crate::surface::Surface;
use crate::theme::Theme;

/// How fast the cursor ring grows or shrinks on hover, in seconds.
const HOVER_ANIMATION: f32 = 0.2;

struct DeckApp {
    deck: Deck,
    theme: Theme,
    controller: SlideController<Surface>,
    /// Hotspots drawn last frame, in screen coordinates.
    hotspots: Vec<Hotspot>,
    pointer_inside: bool,
}

impl DeckApp {
    fn new(deck: Deck, theme: Theme, settings: ControllerSettings, start: usize) -> Self {
        let count = deck.slides.len();
        let controller = SlideController::new(count, start, settings, Surface::new(count));
        Self {
            deck,
            theme,
            controller,
            hotspots: Vec::new(),
            pointer_inside: false,
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context, now: Instant) {
        // Collect viewport commands to send AFTER the input closure
        // (sending inside ctx.input() causes RwLock deadlock)
        let mut viewport_cmds: Vec<egui::ViewportCommand> = Vec::new();
        let mut intents: Vec<NavIntent> = Vec::new();
        let mut touches: Vec<(egui::TouchPhase, egui::Pos2)> = Vec::new();
        let mut moves: Vec<egui::Pos2> = Vec::new();
        let mut pointer_gone = false;
        let mut click: Option<egui::Pos2> = None;

        ctx.input(|i| {
            for event in &i.events {
                match event {
                    egui::Event::Key {
                        key, pressed: true, ..
                    } => match key {
                        egui::Key::Q => viewport_cmds.push(egui::ViewportCommand::Close),
                        egui::Key::F => viewport_cmds.push(egui::ViewportCommand::Fullscreen(
                            !i.viewport().fullscreen.unwrap_or(false),
                        )),
                        _ => intents.extend(input::intent_for_key(*key)),
                    },
                    egui::Event::PointerMoved(pos) => moves.push(*pos),
                    egui::Event::PointerGone => pointer_gone = true,
                    egui::Event::Touch { phase, pos, .. } => touches.push((*phase, *pos)),
                    _ => {}
                }
            }
            intents.extend(input::intent_for_wheel(i.raw_scroll_delta.y));
            if i.pointer.primary_clicked() {
                click = i.pointer.interact_pos();
            }
        });

        for cmd in viewport_cmds {
            ctx.send_viewport_cmd(cmd);
        }

        for pos in moves {
            self.pointer_inside = true;
            self.controller.pointer_moved(pos, now);
        }
        if pointer_gone {
            self.pointer_inside = false;
        }

        for (phase, pos) in touches {
            match phase {
                egui::TouchPhase::Start => self.controller.touch_started(pos.y),
                egui::TouchPhase::End => {
                    self.controller.touch_ended(pos.y, now);
                }
                egui::TouchPhase::Cancel => self.controller.touch_cancelled(),
                egui::TouchPhase::Move => {}
            }
        }

        for intent in intents {
            if self.controller.navigate(intent, now) {
                debug!(?intent, slide = self.controller.current() + 1, "navigated");
            }
        }

        // Links only respond once the deck has settled
        if let Some(pos) = click.filter(|_| !self.controller.is_transitioning()) {
            let target = render::hotspot_at(&self.hotspots, pos).map(|h| &h.kind);
            if let Some(HotspotKind::Link(url)) = target {
                debug!(%url, "opening link");
                ctx.open_url(egui::OpenUrl::new_tab(url));
            }
        }
    }

    fn update_hover(&mut self) {
        let hovered = self.pointer_inside
            && self
                .controller
                .port()
                .cursor
                .is_some_and(|pos| render::hotspot_at(&self.hotspots, pos).is_some());
        self.controller.set_hover(hovered);
    }

    fn draw(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, now: Instant) {
        let rect = ui.max_rect();
        let scale = render::compute_scale(rect);
        let transition = self.controller.settings().transition.as_secs_f32();
        let surface = self.controller.port();

        // Active slide last, so it paints over slides still sliding away.
        let active = surface.active;
        let order = (0..self.deck.slides.len())
            .filter(|&i| i != active)
            .chain(std::iter::once(active));

        let mut hotspots = Vec::new();
        for index in order {
            let Some(slide) = self.deck.slides.get(index) else {
                continue;
            };
            let offset = ctx.animate_value_with_time(
                egui::Id::new(("slide_offset", index)),
                surface.target_offset(index),
                transition,
            );
            // Parked slides sit a full viewport away and are not visible.
            if offset.abs() >= 1.0 {
                continue;
            }
            let slide_rect = rect.translate(egui::vec2(0.0, offset * rect.height()));
            let spots = render::render_slide(ui, slide, &self.theme, slide_rect, scale);
            if index == active {
                hotspots = spots;
            }
        }

        let fraction = ctx.animate_value_with_time(
            egui::Id::new("progress"),
            surface.progress.fraction(),
            transition,
        );
        chrome::draw_progress_bar(ui, &self.theme, rect, fraction, scale);
        chrome::draw_counter(ui, &self.theme, rect, surface.progress, scale);

        let cursor = self.controller.cursor();
        let ring_scale = ctx.animate_value_with_time(
            egui::Id::new("cursor_ring_scale"),
            cursor.ring_scale(),
            HOVER_ANIMATION,
        );
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("cursor"),
        ));
        chrome::draw_cursor(
            &painter,
            &self.theme,
            cursor.dot_position(),
            cursor.ring_position(now),
            ring_scale,
            surface.cursor_hover,
        );
        if cursor.is_animating(now) {
            ctx.request_repaint();
        }

        self.hotspots = hotspots;
    }
}

impl eframe::App for DeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.controller.tick(now);
        self.handle_input(ctx, now);

        // The system pointer is replaced by the drawn cursor
        ctx.set_cursor_icon(egui::CursorIcon::None);

        let bg = self.theme.background;
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(bg).inner_margin(0.0))
            .show(ctx, |ui| {
                self.draw(ui, ctx, now);
            });

        self.update_hover();

        // Wake up when the transition lock is due even without input
        if let Some(remaining) = self.controller.release_in(now) {
            ctx.request_repaint_after(remaining);
        }
    }
}

pub fn run(file: PathBuf, windowed: bool, start_slide: Option<usize>) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let deck = deck::parse(&content);

    if deck.slides.is_empty() {
        anyhow::bail!("No slides found in {}", file.display());
    }

    let config = Config::load_or_default();
    let theme_name = deck
        .meta
        .theme
        .as_deref()
        .or(config.theme())
        .unwrap_or("dark");
    let theme = Theme::from_name(theme_name);
    let settings = config.controller_settings();

    let title = deck.meta.title.clone().unwrap_or_else(|| {
        format!(
            "glassdeck \u{2014} {}",
            file.file_name().unwrap_or_default().to_string_lossy()
        )
    });

    // --slide is 1-indexed; the controller clamps past-the-end values
    let start = start_slide.map(|s| s.saturating_sub(1)).unwrap_or(0);

    info!(
        path = %file.display(),
        slides = deck.slides.len(),
        theme = %theme.name,
        start = start + 1,
        "presenting deck"
    );

    let viewport = if windowed {
        egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title(&title)
    } else {
        egui::ViewportBuilder::default()
            .with_fullscreen(true)
            .with_title(&title)
    };

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(DeckApp::new(deck, theme, settings, start)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
