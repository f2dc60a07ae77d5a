//! The controller's complete interactive vocabulary.
//!
//! Every camera-affecting operation, whether raised by a page button, a
//! pointer gesture or the scroll driver, is a `ViewerCommand` handed to
//! [`CameraModeController::execute`](super::CameraModeController::execute).

use glam::Vec2;

/// Which entity is allowed to drive the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Camera pose is a function of page scroll.
    #[default]
    ScrollDriven,
    /// A tween is flying the camera between the other two modes.
    Transitioning,
    /// The visitor orbits the camera with the pointer.
    FreeLook,
}

/// A request, raised by a page control, to move to another mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionRequest {
    /// Mode the request wants to end up in.
    pub target_mode: Mode,
    /// Id of the element that raised the request.
    pub triggering_element: String,
}

impl TransitionRequest {
    /// Request entering free-look from `element`.
    #[must_use]
    pub fn enter_free_look(element: impl Into<String>) -> Self {
        Self {
            target_mode: Mode::FreeLook,
            triggering_element: element.into(),
        }
    }

    /// Request leaving free-look from `element`.
    #[must_use]
    pub fn exit_free_look(element: impl Into<String>) -> Self {
        Self {
            target_mode: Mode::ScrollDriven,
            triggering_element: element.into(),
        }
    }
}

/// A discrete or parameterized operation the controller can perform.
///
/// ```ignore
/// controller.execute(ViewerCommand::ScrollProgress { progress: 0.4 }, &mut host);
/// controller.execute(ViewerCommand::EnterFreeLook, &mut host);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewerCommand {
    /// Fly into free-look.
    EnterFreeLook,
    /// Fly back to the scroll-driven pose.
    ExitFreeLook,
    /// The scroll driver recomputed camera progress.
    ScrollProgress {
        /// Overall progress in [0, 1].
        progress: f32,
    },
    /// Orbit the camera by `delta` pixels of drag.
    RotateCamera {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },
    /// Pan the camera by `delta` pixels of drag.
    PanCamera {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },
    /// Zoom the camera (positive = zoom in, negative = zoom out).
    Zoom {
        /// Wheel amount.
        delta: f32,
    },
}
