//! Browser-side implementations of the workflow seams.
//!
//! # Services
//!
//! - [`combine`] - multipart POST to the combiner function (`gloo-net`)
//! - [`surface`] - Leptos signals and `alert` notices

pub mod combine;
pub mod surface;

pub use combine::*;
pub use surface::*;
