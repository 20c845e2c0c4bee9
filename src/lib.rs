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
// Pixel sizes are converted to f32 on purpose
#![allow(clippy::cast_precision_loss)]

//! Virtual trackball for interactive 3D scene viewing.
//!
//! Maps 2D pointer gestures to a camera orbit: drags rotate the scene via a
//! deformed-sphere projection, vertical motion zooms, and a pan offset
//! shifts the view. The resulting projection and view are pushed through a
//! fixed-function style [`pipeline::Pipeline`] facade.
//!
//! # Key entry points
//!
//! - [`Trackball`] - orientation, zoom, pan and distance state with gestures
//! - [`pipeline::MatrixStack`] - software pipeline for shader-based renderers
//! - [`options::TrackballOptions`] - initial view and projection, TOML backed
//! - [`math`] - the vector and quaternion helpers behind the rotation
//!
//! # Example
//!
//! ```
//! use trackball::pipeline::{MatrixStack, Viewport};
//! use trackball::Trackball;
//!
//! let viewport = Viewport::new(800, 600);
//! let mut trackball = Trackball::new(45.0, 45.0, 1.0, 3.0);
//! trackball.drag_in(viewport, 420.0, 300.0, 12.0, -4.0);
//! trackball.zoom_by(-20.0, viewport);
//!
//! let mut stack = MatrixStack::new(viewport);
//! {
//!     let scene = trackball.scoped(&mut stack);
//!     let _view_proj = scene.view_projection();
//! }
//! ```

pub mod error;
pub mod math;
pub mod options;
pub mod pipeline;
pub mod trackball;

pub use error::TrackballError;
pub use trackball::Trackball;
