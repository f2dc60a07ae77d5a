// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Allowances, kept in step with [workspace.lints.clippy]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::use_self)]
#![allow(clippy::redundant_pub_crate)]
#![allow(clippy::float_cmp)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::default_trait_access)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]

//! Scroll-driven 3D product viewer: camera mode controller and the
//! configuration around it.
//!
//! The camera follows page scroll until the visitor opens customize mode,
//! then tweens to a free-look pose where pointer input orbits the model.
//! Leaving customize mode tweens back to whatever pose scroll dictates.
//!
//! # Key entry points
//!
//! - [`engine::CameraModeController`] - mode state machine and pose owner
//! - [`runtime::setup_viewer`] - startup sequence over a
//!   [`runtime::ViewerRuntime`] and [`runtime::PageSurface`]
//! - [`scroll::ScrollDriver`] - section markers to camera progress and
//!   element styles
//! - [`options::Options`] - runtime configuration (viewer, features,
//!   camera, transitions, scroll, dom)
//!
//! # Frame model
//!
//! Every input path only records a new pose and marks it dirty. The host
//! calls [`engine::CameraModeController::on_frame`] once before each render
//! and the runtime hears about the change exactly once.

pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod runtime;
pub mod scroll;
pub mod util;
#[cfg(feature = "web")]
pub mod web;
