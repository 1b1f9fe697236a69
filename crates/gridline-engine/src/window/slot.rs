/// Holder for per-window resources with a one-way lifecycle:
/// empty → open → closed.
///
/// Closing drops the resources immediately and exactly once; a closed slot
/// never hands them out again and cannot be reopened, so no frame can run
/// after close.
#[derive(Debug)]
pub struct WindowSlot<T> {
    state: SlotState<T>,
}

#[derive(Debug)]
enum SlotState<T> {
    Empty,
    Open(T),
    Closed,
}

impl<T> WindowSlot<T> {
    pub const fn new() -> Self {
        Self {
            state: SlotState::Empty,
        }
    }

    /// Stores `value` if the slot has never been opened.
    ///
    /// Returns `false` (and drops `value`) when the slot is already open or closed.
    pub fn open(&mut self, value: T) -> bool {
        match self.state {
            SlotState::Empty => {
                self.state = SlotState::Open(value);
                true
            }
            SlotState::Open(_) | SlotState::Closed => false,
        }
    }

    pub fn get(&self) -> Option<&T> {
        match &self.state {
            SlotState::Open(v) => Some(v),
            _ => None,
        }
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        match &mut self.state {
            SlotState::Open(v) => Some(v),
            _ => None,
        }
    }

    /// Releases the resources. Returns `true` only for the call that actually
    /// dropped them.
    pub fn close(&mut self) -> bool {
        let prev = std::mem::replace(&mut self.state, SlotState::Closed);
        matches!(prev, SlotState::Open(_))
        // `prev` is dropped here, releasing the window and GPU context.
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.state, SlotState::Empty)
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, SlotState::Open(_))
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.state, SlotState::Closed)
    }
}

impl<T> Default for WindowSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}
