//! Converts raw pointer events into camera commands.
//!
//! The `PointerProcessor` owns all transient pointer state (last cursor
//! position, pressed buttons, shift modifier). Whether the resulting
//! command is allowed to move the camera is the mode controller's call.

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use crate::engine::ViewerCommand;

/// Converts raw pointer events into [`ViewerCommand`]s.
#[derive(Debug, Clone, Default)]
pub struct PointerProcessor {
    /// Last cursor position, `None` until the first move.
    last_pos: Option<Vec2>,
    /// Whether the primary button is held.
    primary_pressed: bool,
    /// Whether the secondary button is held (always pans).
    secondary_pressed: bool,
    /// Whether the shift modifier is held.
    shift_pressed: bool,
}

impl PointerProcessor {
    /// Create a processor with nothing pressed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any drag button is currently held.
    #[must_use]
    pub const fn dragging(&self) -> bool {
        self.primary_pressed || self.secondary_pressed
    }

    /// Drop all button state, e.g. when the pointer leaves the canvas.
    pub fn release(&mut self) {
        self.primary_pressed = false;
        self.secondary_pressed = false;
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<ViewerCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::MouseButton { button, pressed } => {
                match button {
                    MouseButton::Left => self.primary_pressed = pressed,
                    MouseButton::Right => self.secondary_pressed = pressed,
                    MouseButton::Middle => {}
                }
                None
            }
            InputEvent::Wheel { delta } => Some(ViewerCommand::Zoom { delta }),
            InputEvent::ModifiersChanged { shift } => {
                self.shift_pressed = shift;
                None
            }
        }
    }

    /// Cursor moved: compute delta, possibly produce a camera command.
    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Option<ViewerCommand> {
        let pos = Vec2::new(x, y);
        let delta = self.last_pos.map_or(Vec2::ZERO, |last| pos - last);
        self.last_pos = Some(pos);

        if !self.dragging() || delta == Vec2::ZERO {
            return None;
        }
        if self.secondary_pressed || self.shift_pressed {
            return Some(ViewerCommand::PanCamera { delta });
        }
        Some(ViewerCommand::RotateCamera { delta })
    }
}
