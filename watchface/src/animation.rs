use std::time::Duration;

use embedded_graphics::{
    prelude::{Point, Size},
    primitives::Rectangle,
};

use crate::layout;

/// One-shot tween between two frames. Progress is derived from the elapsed
/// time handed in by the caller; there is no internal clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub start: Rectangle,
    pub end: Rectangle,
    pub duration: Duration,
}

impl Slide {
    pub fn new(start: Rectangle, end: Rectangle, duration: Duration) -> Self {
        Self {
            start,
            end,
            duration,
        }
    }

    /// Frame at `elapsed`, clamped to `end` once the duration has passed.
    /// Both the origin and the size interpolate.
    pub fn frame_at(&self, elapsed: Duration) -> Rectangle {
        if elapsed >= self.duration {
            return self.end;
        }

        let t = elapsed.as_millis() as i64;
        let d = self.duration.as_millis() as i64;

        Rectangle::new(
            Point::new(
                lerp(self.start.top_left.x, self.end.top_left.x, t, d),
                lerp(self.start.top_left.y, self.end.top_left.y, t, d),
            ),
            Size::new(
                lerp(self.start.size.width as i32, self.end.size.width as i32, t, d) as u32,
                lerp(
                    self.start.size.height as i32,
                    self.end.size.height as i32,
                    t,
                    d,
                ) as u32,
            ),
        )
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

fn lerp(a: i32, b: i32, t: i64, d: i64) -> i32 {
    (a as i64 + (b as i64 - a as i64) * t / d) as i32
}

/// The two concurrent pane slides played once when the face appears: the
/// light pane comes in from the left, the dark pane from the right. Both
/// share the same duration and advance from the same elapsed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntrySlide {
    pub light: Slide,
    pub dark: Slide,
}

impl EntrySlide {
    pub fn new() -> Self {
        Self {
            light: Slide::new(
                layout::LIGHT_PANE_START,
                layout::LIGHT_PANE,
                layout::ENTRY_SLIDE,
            ),
            dark: Slide::new(
                layout::DARK_PANE_START,
                layout::DARK_PANE,
                layout::ENTRY_SLIDE,
            ),
        }
    }

    /// Pane frames (light, dark) at `elapsed`.
    pub fn frames_at(&self, elapsed: Duration) -> (Rectangle, Rectangle) {
        (self.light.frame_at(elapsed), self.dark.frame_at(elapsed))
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        self.light.is_finished(elapsed) && self.dark.is_finished(elapsed)
    }
}

impl Default for EntrySlide {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_endpoints() {
        let slide = Slide::new(
            layout::LIGHT_PANE_START,
            layout::LIGHT_PANE,
            layout::ENTRY_SLIDE,
        );

        assert_eq!(slide.frame_at(Duration::ZERO), layout::LIGHT_PANE_START);
        assert_eq!(slide.frame_at(layout::ENTRY_SLIDE), layout::LIGHT_PANE);
    }

    #[test]
    fn test_slide_clamps_past_end() {
        let slide = Slide::new(
            layout::DARK_PANE_START,
            layout::DARK_PANE,
            layout::ENTRY_SLIDE,
        );

        // No overshoot and no repeat, however long the face stays up.
        assert_eq!(slide.frame_at(Duration::from_secs(5)), layout::DARK_PANE);
        assert_eq!(slide.frame_at(Duration::from_secs(3600)), layout::DARK_PANE);
    }

    #[test]
    fn test_slide_midpoint() {
        let slide = Slide::new(
            layout::DARK_PANE_START,
            layout::DARK_PANE,
            layout::ENTRY_SLIDE,
        );

        let frame = slide.frame_at(Duration::from_millis(400));
        assert_eq!(frame.top_left.x, 72);
        assert_eq!(frame.top_left.y, 43);
        assert_eq!(frame.size, Size::new(144, 82));
    }

    #[test]
    fn test_slide_progress_is_monotone() {
        let slide = Slide::new(
            layout::LIGHT_PANE_START,
            layout::LIGHT_PANE,
            layout::ENTRY_SLIDE,
        );

        let mut last_x = i32::MIN;
        for ms in (0..=800).step_by(50) {
            let frame = slide.frame_at(Duration::from_millis(ms));
            assert!(frame.top_left.x >= last_x);
            last_x = frame.top_left.x;
        }
        assert_eq!(last_x, 0);
    }

    #[test]
    fn test_entry_slide_runs_both_panes_together() {
        let entry = EntrySlide::new();

        let (light, dark) = entry.frames_at(Duration::ZERO);
        assert_eq!(light, layout::LIGHT_PANE_START);
        assert_eq!(dark, layout::DARK_PANE_START);
        assert!(!entry.is_finished(Duration::from_millis(799)));

        let (light, dark) = entry.frames_at(layout::ENTRY_SLIDE);
        assert_eq!(light, layout::LIGHT_PANE);
        assert_eq!(dark, layout::DARK_PANE);
        assert!(entry.is_finished(layout::ENTRY_SLIDE));
    }
}
