/// Pointer movement in logical pixels, top-left origin.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerMoveEvent {
    pub x: f32,
    pub y: f32,
}

/// Platform-agnostic input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Focused(bool),
    PointerMoved(PointerMoveEvent),
    PointerLeft,
}
