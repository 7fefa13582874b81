use eframe::egui::Pos2;

use crate::controller::{PresentationPort, Progress, SlideState};

/// The egui side of the presentation port.
///
/// egui redraws everything every frame, so instead of mutating widgets the
/// surface keeps the latest values the controller pushed and the renderer
/// reads them back while painting.
#[derive(Debug, Clone)]
pub struct Surface {
    pub states: Vec<SlideState>,
    pub active: usize,
    pub progress: Progress,
    pub cursor: Option<Pos2>,
    pub cursor_hover: bool,
}

impl Surface {
    pub fn new(slide_count: usize) -> Self {
        Self {
            states: vec![SlideState::Upcoming; slide_count],
            active: 0,
            progress: Progress {
                position: 1,
                total: slide_count,
            },
            cursor: None,
            cursor_hover: false,
        }
    }

    /// Vertical offset of a slide in viewport heights: -1 above, 0 on
    /// screen, 1 below.
    pub fn target_offset(&self, index: usize) -> f32 {
        match self.states.get(index) {
            Some(SlideState::Previous) => -1.0,
            Some(SlideState::Active) => 0.0,
            Some(SlideState::Upcoming) | None => 1.0,
        }
    }
}

impl PresentationPort for Surface {
    fn set_active(&mut self, index: usize, states: &[SlideState]) {
        self.active = index;
        self.states.clear();
        self.states.extend_from_slice(states);
    }

    fn set_progress(&mut self, progress: Progress) {
        self.progress = progress;
    }

    fn move_cursor(&mut self, pos: Pos2) {
        self.cursor = Some(pos);
    }

    fn set_cursor_hover(&mut self, hovered: bool) {
        self.cursor_hover = hovered;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{ControllerSettings, SlideController};
    use std::time::Instant;

    #[test]
    fn test_offsets_follow_controller() {
        let now = Instant::now();
        let mut controller =
            SlideController::new(3, 0, ControllerSettings::default(), Surface::new(3));
        assert_eq!(controller.port().target_offset(0), 0.0);
        assert_eq!(controller.port().target_offset(1), 1.0);

        controller.next_slide(now);
        let surface = controller.port();
        assert_eq!(surface.active, 1);
        assert_eq!(surface.target_offset(0), -1.0);
        assert_eq!(surface.target_offset(1), 0.0);
        assert_eq!(surface.target_offset(2), 1.0);
        assert_eq!(surface.progress.label(), "2 / 3");
    }
}
