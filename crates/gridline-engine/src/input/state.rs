use crate::coords::{Point, Size};

use super::types::{InputEvent, PointerMoveEvent};

/// Current input state for the window.
///
/// Events are folded in as they arrive; the frame loop samples the result once
/// per frame.
#[derive(Debug, Default)]
pub struct InputState {
    /// Whether the window is focused.
    pub focused: bool,

    /// Last known pointer position in logical pixels.
    ///
    /// Kept when the pointer leaves the window so sampling reports the last
    /// position inside it.
    pub pointer_pos: Option<(f32, f32)>,

    /// Whether the pointer is currently over the window.
    pub pointer_inside: bool,

    /// Events applied since the last `take_event_count`.
    events_since_sample: u32,
}

impl InputState {
    /// Applies a platform-agnostic input event.
    pub fn apply_event(&mut self, ev: InputEvent) {
        match ev {
            InputEvent::Focused(f) => {
                self.focused = f;
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((x, y));
                self.pointer_inside = true;
            }

            InputEvent::PointerLeft => {
                self.pointer_inside = false;
            }
        }

        self.events_since_sample = self.events_since_sample.saturating_add(1);
    }

    /// Pointer position in whole pixels, clamped into `bounds`.
    ///
    /// `(0, 0)` until the pointer has moved over the window.
    pub fn pointer_position(&self, bounds: Size) -> Point {
        let Some((x, y)) = self.pointer_pos else {
            return Point::zero();
        };

        let clamp = |v: f32, extent: u32| -> i32 {
            let max = extent.saturating_sub(1) as f32;
            v.floor().clamp(0.0, max) as i32
        };

        Point::new(clamp(x, bounds.width), clamp(y, bounds.height))
    }

    /// Returns how many events were applied since the previous call and resets the count.
    pub fn take_event_count(&mut self) -> u32 {
        std::mem::take(&mut self.events_since_sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moved(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerMoved(PointerMoveEvent { x, y })
    }

    #[test]
    fn defaults_to_origin_before_any_motion() {
        let state = InputState::default();
        assert_eq!(state.pointer_position(Size::new(1600, 900)), Point::zero());
    }

    #[test]
    fn samples_latest_position_as_whole_pixels() {
        let mut state = InputState::default();
        state.apply_event(moved(10.0, 10.0));
        state.apply_event(moved(800.7, 450.2));
        assert_eq!(state.pointer_position(Size::new(1600, 900)), Point::new(800, 450));
    }

    #[test]
    fn clamps_to_bounds() {
        let mut state = InputState::default();
        state.apply_event(moved(-5.0, 2000.0));
        assert_eq!(state.pointer_position(Size::new(1600, 900)), Point::new(0, 899));
    }

    #[test]
    fn keeps_last_position_after_leaving() {
        let mut state = InputState::default();
        state.apply_event(moved(1599.0, 3.0));
        state.apply_event(InputEvent::PointerLeft);
        assert!(!state.pointer_inside);
        assert_eq!(state.pointer_position(Size::new(1600, 900)), Point::new(1599, 3));
    }

    #[test]
    fn event_count_resets_on_take() {
        let mut state = InputState::default();
        state.apply_event(InputEvent::Focused(true));
        state.apply_event(moved(1.0, 1.0));
        assert_eq!(state.take_event_count(), 2);
        assert_eq!(state.take_event_count(), 0);
        assert!(state.focused);
    }
}
