use std::time::{Duration, Instant};

use eframe::egui::Pos2;

/// How long the trailing ring takes to catch up with the pointer.
pub const TRAIL_DURATION: Duration = Duration::from_millis(500);

/// Ring scale while hovering an interactive element.
pub const HOVER_SCALE: f32 = 1.5;

/// In-flight movement of the trailing ring.
#[derive(Debug, Clone, Copy)]
struct Trail {
    from: Pos2,
    to: Pos2,
    start: Instant,
}

/// State of the decorative two-part cursor.
///
/// The dot jumps to every pointer position. The ring eases from wherever it
/// currently is toward the latest position and holds there once it arrives.
#[derive(Debug, Clone)]
pub struct CursorFollow {
    dot: Option<Pos2>,
    trail: Option<Trail>,
    trail_duration: Duration,
    hovered: bool,
}

impl Default for CursorFollow {
    fn default() -> Self {
        Self::new(TRAIL_DURATION)
    }
}

impl CursorFollow {
    pub fn new(trail_duration: Duration) -> Self {
        Self {
            dot: None,
            trail: None,
            trail_duration,
            hovered: false,
        }
    }

    pub fn pointer_moved(&mut self, pos: Pos2, now: Instant) {
        self.dot = Some(pos);
        // The ring restarts from its current animated position, so rapid
        // moves never make it jump.
        let from = self.ring_position(now).unwrap_or(pos);
        self.trail = Some(Trail {
            from,
            to: pos,
            start: now,
        });
    }

    pub fn dot_position(&self) -> Option<Pos2> {
        self.dot
    }

    pub fn ring_position(&self, now: Instant) -> Option<Pos2> {
        let trail = self.trail?;
        let t = self.trail_progress(trail.start, now);
        Some(trail.from + (trail.to - trail.from) * t)
    }

    /// True while the ring has not reached its target yet.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.trail
            .is_some_and(|trail| self.trail_progress(trail.start, now) < 1.0)
    }

    /// Set hover state. Returns true if it changed.
    pub fn set_hovered(&mut self, hovered: bool) -> bool {
        let changed = self.hovered != hovered;
        self.hovered = hovered;
        changed
    }

    pub fn ring_scale(&self) -> f32 {
        if self.hovered { HOVER_SCALE } else { 1.0 }
    }

    fn trail_progress(&self, start: Instant, now: Instant) -> f32 {
        if self.trail_duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(start).as_secs_f32();
        (elapsed / self.trail_duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::pos2;

    #[test]
    fn test_dot_follows_exactly() {
        let now = Instant::now();
        let mut cursor = CursorFollow::default();
        assert_eq!(cursor.dot_position(), None);
        cursor.pointer_moved(pos2(10.0, 20.0), now);
        assert_eq!(cursor.dot_position(), Some(pos2(10.0, 20.0)));
        cursor.pointer_moved(pos2(300.0, 40.0), now);
        assert_eq!(cursor.dot_position(), Some(pos2(300.0, 40.0)));
    }

    #[test]
    fn test_first_move_places_ring_under_pointer() {
        let now = Instant::now();
        let mut cursor = CursorFollow::default();
        cursor.pointer_moved(pos2(50.0, 50.0), now);
        assert_eq!(cursor.ring_position(now), Some(pos2(50.0, 50.0)));
    }

    #[test]
    fn test_ring_trails_and_holds_end_state() {
        let start = Instant::now();
        let mut cursor = CursorFollow::default();
        cursor.pointer_moved(pos2(0.0, 0.0), start);
        cursor.pointer_moved(pos2(100.0, 0.0), start);

        let halfway = cursor
            .ring_position(start + Duration::from_millis(250))
            .unwrap_or_default();
        assert!((halfway.x - 50.0).abs() < 0.01);
        assert!(cursor.is_animating(start + Duration::from_millis(250)));

        let done = start + TRAIL_DURATION;
        assert_eq!(cursor.ring_position(done), Some(pos2(100.0, 0.0)));
        assert!(!cursor.is_animating(done));
        assert_eq!(
            cursor.ring_position(done + Duration::from_secs(5)),
            Some(pos2(100.0, 0.0)),
            "ring must not snap back after the animation ends"
        );
    }

    #[test]
    fn test_retarget_starts_from_current_ring_position() {
        let start = Instant::now();
        let mut cursor = CursorFollow::default();
        cursor.pointer_moved(pos2(0.0, 0.0), start);
        cursor.pointer_moved(pos2(100.0, 0.0), start);

        let mid = start + Duration::from_millis(250);
        cursor.pointer_moved(pos2(100.0, 100.0), mid);
        let ring = cursor.ring_position(mid).unwrap_or_default();
        assert!((ring.x - 50.0).abs() < 0.01);
        assert!(ring.y.abs() < 0.01);
    }

    #[test]
    fn test_hover_scale() {
        let mut cursor = CursorFollow::default();
        assert_eq!(cursor.ring_scale(), 1.0);
        assert!(cursor.set_hovered(true));
        assert!(!cursor.set_hovered(true));
        assert_eq!(cursor.ring_scale(), 1.5);
        assert!(cursor.set_hovered(false));
        assert_eq!(cursor.ring_scale(), 1.0);
    }

    #[test]
    fn test_zero_duration_jumps() {
        let now = Instant::now();
        let mut cursor = CursorFollow::new(Duration::ZERO);
        cursor.pointer_moved(pos2(0.0, 0.0), now);
        cursor.pointer_moved(pos2(10.0, 10.0), now);
        assert_eq!(cursor.ring_position(now), Some(pos2(10.0, 10.0)));
        assert!(!cursor.is_animating(now));
    }
}
