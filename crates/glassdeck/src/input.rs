use eframe::egui;

/// Minimum vertical finger travel, in points, before a touch counts as a swipe.
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// A discrete navigation request derived from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    Next,
    Previous,
    First,
    Last,
}

/// Map a navigation key to an intent. Non-navigation keys yield `None`.
pub fn intent_for_key(key: egui::Key) -> Option<NavIntent> {
    match key {
        egui::Key::ArrowDown | egui::Key::ArrowRight => Some(NavIntent::Next),
        egui::Key::ArrowUp | egui::Key::ArrowLeft => Some(NavIntent::Previous),
        egui::Key::Home => Some(NavIntent::First),
        egui::Key::End => Some(NavIntent::Last),
        _ => None,
    }
}

/// Map a vertical wheel delta to an intent.
///
/// egui reports a negative `y` when the user scrolls down (content moves up),
/// which advances the deck. A zero delta, e.g. from a purely horizontal
/// scroll, does nothing. This departs from the browser handler it replaces,
/// which sent any non-positive delta backwards.
pub fn intent_for_wheel(delta_y: f32) -> Option<NavIntent> {
    if delta_y < 0.0 {
        Some(NavIntent::Next)
    } else if delta_y > 0.0 {
        Some(NavIntent::Previous)
    } else {
        None
    }
}

/// Tracks a single vertical swipe between touch start and touch end.
#[derive(Debug, Clone, Copy)]
pub struct SwipeTracker {
    start_y: Option<f32>,
    threshold: f32,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(SWIPE_THRESHOLD)
    }
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            start_y: None,
            threshold,
        }
    }

    pub fn begin(&mut self, y: f32) {
        self.start_y = Some(y);
    }

    /// Finish the swipe at `y`.
    ///
    /// Finger travel upward past the threshold pushes the deck forward,
    /// travel downward goes back. Travel equal to the threshold is ignored.
    pub fn end(&mut self, y: f32) -> Option<NavIntent> {
        let start = self.start_y.take()?;
        if start - y > self.threshold {
            Some(NavIntent::Next)
        } else if y - start > self.threshold {
            Some(NavIntent::Previous)
        } else {
            None
        }
    }

    pub fn cancel(&mut self) {
        self.start_y = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys() {
        assert_eq!(intent_for_key(egui::Key::ArrowDown), Some(NavIntent::Next));
        assert_eq!(intent_for_key(egui::Key::ArrowRight), Some(NavIntent::Next));
        assert_eq!(intent_for_key(egui::Key::ArrowUp), Some(NavIntent::Previous));
        assert_eq!(intent_for_key(egui::Key::ArrowLeft), Some(NavIntent::Previous));
        assert_eq!(intent_for_key(egui::Key::Home), Some(NavIntent::First));
        assert_eq!(intent_for_key(egui::Key::End), Some(NavIntent::Last));
        assert_eq!(intent_for_key(egui::Key::Space), None);
    }

    #[test]
    fn test_wheel_direction() {
        assert_eq!(intent_for_wheel(-12.0), Some(NavIntent::Next));
        assert_eq!(intent_for_wheel(40.0), Some(NavIntent::Previous));
        assert_eq!(intent_for_wheel(0.0), None);
    }

    #[test]
    fn test_short_swipes_are_ignored() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(400.0);
        assert_eq!(swipe.end(360.0), None);
        swipe.begin(400.0);
        assert_eq!(swipe.end(449.0), None);
        swipe.begin(400.0);
        assert_eq!(swipe.end(350.0), None, "exactly the threshold is not enough");
    }

    #[test]
    fn test_long_swipes_navigate() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(400.0);
        assert_eq!(swipe.end(300.0), Some(NavIntent::Next));
        swipe.begin(300.0);
        assert_eq!(swipe.end(351.0), Some(NavIntent::Previous));
    }

    #[test]
    fn test_end_without_begin() {
        let mut swipe = SwipeTracker::default();
        assert_eq!(swipe.end(0.0), None);
        swipe.begin(500.0);
        swipe.cancel();
        assert_eq!(swipe.end(0.0), None);
    }

    #[test]
    fn test_custom_threshold() {
        let mut swipe = SwipeTracker::new(10.0);
        swipe.begin(100.0);
        assert_eq!(swipe.end(85.0), Some(NavIntent::Next));
    }
}
