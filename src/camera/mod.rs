//! Camera poses and the drivers that write them.
//!
//! A [`CameraPose`] is moved by exactly one driver at a time: the scroll
//! [`ScrollTrack`], a [`PoseTween`], or the free-look [`OrbitControls`].
//! Which one is allowed is decided by the
//! [`CameraModeController`](crate::engine::CameraModeController).

/// Pointer-driven orbit, pan and zoom.
pub mod orbit;
/// Camera pose value type.
pub mod pose;
/// Scroll-bound keyframe track.
pub mod track;
/// Eased pose-to-pose interpolation.
pub mod tween;

pub use orbit::OrbitControls;
pub use pose::CameraPose;
pub use track::{AnchorPose, ScrollTrack};
pub use tween::{PoseTween, TweenStep};
