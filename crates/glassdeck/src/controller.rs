use std::time::{Duration, Instant};

use eframe::egui::Pos2;
use tracing::debug;

use crate::cursor::{CursorFollow, TRAIL_DURATION};
use crate::input::{NavIntent, SWIPE_THRESHOLD, SwipeTracker};
use crate::timer::OneShot;

/// How long a slide change animates. Navigation input is ignored meanwhile.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(800);

/// Visual designation of a slide relative to the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideState {
    /// Already passed; parked above the viewport.
    Previous,
    Active,
    /// Not reached yet; parked below the viewport.
    Upcoming,
}

impl SlideState {
    pub fn for_position(index: usize, current: usize) -> Self {
        if index < current {
            SlideState::Previous
        } else if index == current {
            SlideState::Active
        } else {
            SlideState::Upcoming
        }
    }
}

/// Progress readout: 1-based position and slide count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub position: usize,
    pub total: usize,
}

impl Progress {
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.position as f32 / self.total as f32
        }
    }

    pub fn percent(&self) -> f32 {
        self.fraction() * 100.0
    }

    pub fn label(&self) -> String {
        format!("{} / {}", self.position, self.total)
    }
}

/// Where the controller pushes visual state.
pub trait PresentationPort {
    fn set_active(&mut self, index: usize, states: &[SlideState]);
    fn set_progress(&mut self, progress: Progress);
    fn move_cursor(&mut self, pos: Pos2);
    fn set_cursor_hover(&mut self, hovered: bool);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerSettings {
    pub transition: Duration,
    pub swipe_threshold: f32,
    pub cursor_trail: Duration,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            transition: TRANSITION_DURATION,
            swipe_threshold: SWIPE_THRESHOLD,
            cursor_trail: TRAIL_DURATION,
        }
    }
}

/// Owns the slide position, the transition lock and the cursor effect.
pub struct SlideController<P: PresentationPort> {
    port: P,
    slides: Vec<SlideState>,
    current: usize,
    transitioning: bool,
    release: OneShot,
    swipe: SwipeTracker,
    cursor: CursorFollow,
    settings: ControllerSettings,
}

impl<P: PresentationPort> SlideController<P> {
    /// Create a controller for `slide_count` slides starting at `start`
    /// (clamped into range) and push the initial state to the port.
    pub fn new(
        slide_count: usize,
        start: usize,
        settings: ControllerSettings,
        port: P,
    ) -> Self {
        let current = start.min(slide_count.saturating_sub(1));
        let mut controller = Self {
            port,
            slides: vec![SlideState::Upcoming; slide_count],
            current,
            transitioning: false,
            release: OneShot::new(),
            swipe: SwipeTracker::new(settings.swipe_threshold),
            cursor: CursorFollow::new(settings.cursor_trail),
            settings,
        };
        controller.reconcile();
        controller.update_progress();
        controller
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn progress(&self) -> Progress {
        Progress {
            position: self.current + 1,
            total: self.slides.len(),
        }
    }

    pub fn settings(&self) -> &ControllerSettings {
        &self.settings
    }

    pub fn cursor(&self) -> &CursorFollow {
        &self.cursor
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    /// Time until the pending lock release, if any.
    pub fn release_in(&self, now: Instant) -> Option<Duration> {
        self.release.remaining(now)
    }

    /// Lock-gated navigation: the entry point for all user input.
    /// Returns true if the request was accepted.
    pub fn navigate(&mut self, intent: NavIntent, now: Instant) -> bool {
        if self.transitioning {
            debug!(?intent, "navigation dropped during transition");
            return false;
        }
        let before = self.current;
        match intent {
            NavIntent::Next => self.next_slide(now),
            NavIntent::Previous => self.prev_slide(now),
            NavIntent::First => self.change_slide(0, now),
            NavIntent::Last => self.change_slide(self.slide_count().saturating_sub(1), now),
        }
        self.current != before
    }

    pub fn next_slide(&mut self, now: Instant) {
        if self.current + 1 < self.slides.len() {
            self.change_slide(self.current + 1, now);
        }
    }

    pub fn prev_slide(&mut self, now: Instant) {
        if self.current > 0 {
            self.change_slide(self.current - 1, now);
        }
    }

    pub fn change_slide(&mut self, target: usize, now: Instant) {
        if target == self.current || target >= self.slides.len() {
            return;
        }
        let from = self.current;

        self.transitioning = true;
        self.current = target;
        self.reconcile();
        self.update_progress();
        self.release.schedule(now, self.settings.transition);

        debug!(
            from,
            to = target,
            progress = %format!("{:.0}%", self.progress().percent()),
            "changed slide"
        );
    }

    /// Advance time. Releases the transition lock once its delay has passed.
    pub fn tick(&mut self, now: Instant) {
        if self.release.poll(now) {
            self.transitioning = false;
            debug!(slide = self.current, "transition settled");
        }
    }

    /// Teardown hook: drop a pending lock release.
    pub fn shutdown(&mut self) {
        if self.release.cancel() {
            debug!("cancelled pending transition release");
        }
        self.transitioning = false;
    }

    pub fn touch_started(&mut self, y: f32) {
        self.swipe.begin(y);
    }

    pub fn touch_ended(&mut self, y: f32, now: Instant) -> bool {
        // The swipe is consumed even when locked so a stale start position
        // can't pair with a later end.
        match self.swipe.end(y) {
            Some(intent) => self.navigate(intent, now),
            None => false,
        }
    }

    pub fn touch_cancelled(&mut self) {
        self.swipe.cancel();
    }

    pub fn pointer_moved(&mut self, pos: Pos2, now: Instant) {
        self.cursor.pointer_moved(pos, now);
        self.port.move_cursor(pos);
    }

    pub fn set_hover(&mut self, hovered: bool) {
        if self.cursor.set_hovered(hovered) {
            self.port.set_cursor_hover(hovered);
        }
    }

    /// Rebuild every slide's designation from the current index.
    fn reconcile(&mut self) {
        let current = self.current;
        for (index, state) in self.slides.iter_mut().enumerate() {
            *state = SlideState::for_position(index, current);
        }
        self.port.set_active(current, &self.slides);
    }

    fn update_progress(&mut self) {
        let progress = self.progress();
        self.port.set_progress(progress);
    }
}

impl<P: PresentationPort> Drop for SlideController<P> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
