use crate::bridge::protocol::{Command, ParamUpdate};
use crate::core::layout::DisplayMode;

/// Input event types the field understands.
/// The host writes them as they happen; the runner drains them before each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer moved to surface-local coordinates (x, y).
    PointerMove { x: f32, y: f32 },
    /// Pointer left the surface.
    PointerLeave,
    /// Pointer moved anywhere on the page; `x` is in viewport coordinates.
    /// Used to detect the pointer sitting over the controls panel.
    PagePointerMove { x: f32 },
    /// Viewport resized.
    Resize { width: f32, height: f32 },
    /// Host display mode changed (fullscreen entered/left, controls toggled).
    DisplayMode(DisplayMode),
    /// A key was pressed.
    KeyDown { key_code: u32 },
    /// A named parameter changed in the controls.
    Param(ParamUpdate),
    /// A control button was pressed.
    Command(Command),
}

/// A queue of input events.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
